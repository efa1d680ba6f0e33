//! SVG preview of a design.
//!
//! Grid shapes become `<circle>`/`<line>` elements. Each motif becomes a
//! placeholder `<symbol>` (a rounded box with a notch marking its "up"
//! edge), and every instance a `<use>` of it, translated to its center and
//! rotated. Good enough to check placement without decoding any bitmap.
//!
//! # Example
//!
//! ```
//! use mandala_layout::{Design, MandalaGrid, MandalaLayer, Size};
//! use mandala_layout::catalog::MotifCatalog;
//! use mandala_layout::svg::render_design_svg;
//!
//! let mut motifs = MotifCatalog::new();
//! let petal = motifs.insert("petal", Size::new(40, 80));
//!
//! let mut design = Design::new(400, 400, 6)?.with_grid(MandalaGrid::new(6))?;
//! design.push_layer(MandalaLayer::new(petal, 6).size(0.5))?;
//!
//! let svg = render_design_svg(&design, &motifs)?;
//! assert!(svg.starts_with("<svg"));
//! assert_eq!(svg.matches("<use ").count(), 6);
//! # Ok::<(), mandala_layout::LayoutError>(())
//! ```

use alloc::collections::BTreeSet;
use alloc::format;
use alloc::string::String;
use core::fmt::Display;

use crate::design::Design;
use crate::error::LayoutError;
use crate::grid::DrawCommand;
use crate::render::{Canvas, MotifRepository, Sprite};

/// Background fill of the preview.
const BACKGROUND: &str = "#ffffff";
/// Placeholder fill for motif symbols.
const MOTIF_FILL: &str = "#33333380";

/// A [`Canvas`] that writes SVG elements.
///
/// Motif handles are written through `Display`, so they must render as
/// valid XML ids (as [`MotifId`](crate::catalog::MotifId) does).
#[derive(Debug)]
pub struct SvgCanvas<M> {
    width: u32,
    height: u32,
    body: String,
    motifs: BTreeSet<String>,
    _motif: core::marker::PhantomData<M>,
}

impl<M: Display> SvgCanvas<M> {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            body: String::with_capacity(4096),
            motifs: BTreeSet::new(),
            _motif: core::marker::PhantomData,
        }
    }

    /// Close the document and return it.
    pub fn finish(self) -> String {
        let mut svg = String::with_capacity(self.body.len() + 1024);
        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        ));
        svg.push('\n');
        svg.push_str(&format!(
            r#"<rect width="100%" height="100%" fill="{BACKGROUND}"/>"#
        ));
        svg.push('\n');

        if !self.motifs.is_empty() {
            svg.push_str("<defs>\n");
            // Unit box; <use> sets the real size. Notch on the top edge = "up".
            for id in &self.motifs {
                svg.push_str(&format!(
                    concat!(
                        r#"  <symbol id="{id}" viewBox="0 0 100 100" preserveAspectRatio="none">"#,
                        r#"<title>{id}</title>"#,
                        r#"<rect x="2" y="2" width="96" height="96" rx="12" fill="{fill}"/>"#,
                        r#"<path d="M40 2 L50 18 L60 2 Z" fill="{fill}"/>"#,
                        "</symbol>\n"
                    ),
                    id = id,
                    fill = MOTIF_FILL
                ));
            }
            svg.push_str("</defs>\n");
        }

        svg.push_str(&self.body);
        svg.push_str("</svg>\n");
        svg
    }
}

impl<M: Display> Canvas<M> for SvgCanvas<M> {
    fn draw_shape(&mut self, command: &DrawCommand) {
        match *command {
            DrawCommand::Circle {
                center,
                radius,
                color,
                stroke_width,
            } => {
                self.body.push_str(&format!(
                    r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="none" stroke="{}" stroke-width="{}"/>"#,
                    center.x, center.y, radius, color, stroke_width
                ));
            }
            DrawCommand::Line {
                from,
                to,
                color,
                stroke_width,
            } => {
                self.body.push_str(&format!(
                    r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{}"/>"#,
                    from.x, from.y, to.x, to.y, color, stroke_width
                ));
            }
        }
        self.body.push('\n');
    }

    fn draw_sprite(&mut self, sprite: &Sprite<M>) {
        let id = escape_xml(&format!("{}", sprite.motif));
        let (w, h) = (sprite.pixel_size.width, sprite.pixel_size.height);
        // SVG rotates clockwise on screen; the sprite rotation is counter-clockwise.
        self.body.push_str(&format!(
            r##"<use href="#{id}" x="{:.2}" y="{:.2}" width="{w}" height="{h}" transform="translate({:.2} {:.2}) rotate({:.4})"/>"##,
            -(w as f64) / 2.0,
            -(h as f64) / 2.0,
            sprite.position.x,
            sprite.position.y,
            -sprite.rotation_degrees,
        ));
        self.body.push('\n');
        self.motifs.insert(id);
    }
}

/// Render a design (grid and all layers) to a standalone SVG document.
pub fn render_design_svg<M, R>(design: &Design<M>, motifs: &R) -> Result<String, LayoutError>
where
    M: Copy + Display,
    R: MotifRepository<M> + ?Sized,
{
    let surface = design.surface();
    let mut canvas = SvgCanvas::new(surface.width(), surface.height());
    design.draw(&mut canvas, motifs)?;
    Ok(canvas.finish())
}

/// Escape special characters for XML attribute and text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use crate::catalog::{MotifCatalog, MotifId};
    use crate::geometry::Size;
    use crate::grid::MandalaGrid;
    use crate::layer::MandalaLayer;

    fn catalog() -> (MotifCatalog, MotifId, MotifId) {
        let mut c = MotifCatalog::new();
        let circle = c.insert("circle", Size::new(100, 100));
        let eye = c.insert("eye", Size::new(120, 60));
        (c, circle, eye)
    }

    #[test]
    fn empty_design_is_valid_document() {
        let (motifs, _, _) = catalog();
        let design: Design<MotifId> = Design::new(300, 200, 4).unwrap();
        let svg = render_design_svg(&design, &motifs).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"viewBox="0 0 300 200""#));
        assert!(!svg.contains("<defs>"));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn grid_elements_use_stroke_colors() {
        let (motifs, _, _) = catalog();
        let design: Design<MotifId> = Design::new(200, 200, 2)
            .unwrap()
            .with_grid(MandalaGrid::new(2).angular_divisions(1).radial_increment(60.0))
            .unwrap();
        let svg = render_design_svg(&design, &motifs).unwrap();
        assert_eq!(svg.matches("<circle ").count(), 1);
        assert_eq!(svg.matches("<line ").count(), 4);
        assert!(svg.contains(r##"stroke="#00ffff""##));
        assert!(svg.contains(r##"stroke="#0000ff""##));
    }

    #[test]
    fn one_symbol_per_motif_one_use_per_instance() {
        let (motifs, circle, eye) = catalog();
        let mut design = Design::new(400, 400, 8).unwrap();
        design
            .push_layer(MandalaLayer::new(circle, 8).multiplicity(0).polar_radius(0.0))
            .unwrap();
        design.push_layer(MandalaLayer::new(eye, 8).polar_radius(0.2)).unwrap();
        design.push_layer(MandalaLayer::new(circle, 8).multiplicity(2)).unwrap();

        let svg = render_design_svg(&design, &motifs).unwrap();
        assert_eq!(svg.matches("<symbol ").count(), 2);
        assert_eq!(svg.matches("<use ").count(), 1 + 8 + 16);
        assert!(svg.contains(r##"href="#motif-0""##));
        assert!(svg.contains(r##"href="#motif-1""##));
    }

    #[test]
    fn sprite_transform_is_centered() {
        let mut canvas: SvgCanvas<MotifId> = SvgCanvas::new(100, 100);
        canvas.draw_sprite(&Sprite {
            motif: MotifId(3),
            pixel_size: Size::new(20, 10),
            rotation_degrees: -90.0,
            position: crate::geometry::Point::new(50.0, 25.0),
        });
        let svg = canvas.finish();
        assert!(svg.contains(r#"x="-10.00" y="-5.00" width="20" height="10""#), "{svg}");
        assert!(svg.contains("translate(50.00 25.00) rotate(90.0000)"), "{svg}");
    }

    #[test]
    fn unknown_motif_is_an_error() {
        let (motifs, _, _) = catalog();
        let mut design = Design::new(400, 400, 4).unwrap();
        design.push_layer(MandalaLayer::new(MotifId(9), 4)).unwrap();
        assert_eq!(
            render_design_svg(&design, &motifs),
            Err(LayoutError::UnknownMotif)
        );
    }
}
