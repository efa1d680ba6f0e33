//! A complete mandala: optional reference grid plus ordered layers.

use alloc::vec::Vec;

use crate::error::{LayoutError, Parameter};
use crate::geometry::Surface;
use crate::grid::MandalaGrid;
use crate::layer::MandalaLayer;
use crate::render::{Canvas, Drawable, MotifRepository};

/// Layers sharing one symmetry order and one surface.
///
/// Draw order is the grid first, then layers in insertion order, so later
/// layers paint over earlier ones.
///
/// # Example
///
/// ```
/// use mandala_layout::{Design, MandalaGrid, MandalaLayer, Recorder, Size};
/// use mandala_layout::catalog::MotifCatalog;
///
/// let mut motifs = MotifCatalog::new();
/// let dot = motifs.insert("dot", Size::new(64, 64));
///
/// let mut design = Design::new(800, 800, 8)?.with_grid(MandalaGrid::new(8))?;
/// design.push_layer(MandalaLayer::new(dot, 8).multiplicity(0).polar_radius(0.0))?;
/// design.push_layer(MandalaLayer::new(dot, 8).multiplicity(2))?;
///
/// let mut canvas = Recorder::new();
/// design.draw(&mut canvas, &motifs)?;
/// assert_eq!(canvas.sprites().count(), 1 + 16);
/// # Ok::<(), mandala_layout::LayoutError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Design<M> {
    surface: Surface,
    order: u32,
    grid: Option<MandalaGrid>,
    layers: Vec<MandalaLayer<M>>,
}

impl<M: Copy> Design<M> {
    /// Empty design for a `width × height` surface with `order`-fold symmetry.
    pub fn new(width: u32, height: u32, order: u32) -> Result<Self, LayoutError> {
        if order == 0 {
            return Err(LayoutError::invalid(Parameter::Order));
        }
        Ok(Self {
            surface: Surface::new(width, height)?,
            order,
            grid: None,
            layers: Vec::new(),
        })
    }

    /// Attach a reference grid. Its order must match the design's.
    pub fn with_grid(mut self, grid: MandalaGrid) -> Result<Self, LayoutError> {
        grid.validate()?;
        self.check_order(grid.order)?;
        self.grid = Some(grid);
        Ok(self)
    }

    /// Drop the reference grid, e.g. for a final export.
    pub fn without_grid(mut self) -> Self {
        self.grid = None;
        self
    }

    /// Append a layer on top of the existing ones.
    pub fn push_layer(&mut self, layer: MandalaLayer<M>) -> Result<(), LayoutError> {
        layer.validate()?;
        self.check_order(layer.order)?;
        self.layers.push(layer);
        Ok(())
    }

    fn check_order(&self, order: u32) -> Result<(), LayoutError> {
        if order != self.order {
            return Err(LayoutError::OrderMismatch {
                design: self.order,
                layer: order,
            });
        }
        Ok(())
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn grid(&self) -> Option<&MandalaGrid> {
        self.grid.as_ref()
    }

    /// Layers, bottom first.
    pub fn layers(&self) -> &[MandalaLayer<M>] {
        &self.layers
    }

    /// Total motif instances across all layers.
    pub fn instance_count(&self) -> usize {
        // push_layer validated every layer, so copies() cannot fail here
        self.layers
            .iter()
            .map(|l| l.copies().map_or(0, |n| n as usize))
            .sum()
    }

    /// Run a full draw pass: grid, then every layer bottom to top.
    ///
    /// Every layer's motif is resolved before anything is drawn, so a
    /// missing motif leaves the canvas untouched.
    pub fn draw<C, R>(&self, canvas: &mut C, motifs: &R) -> Result<(), LayoutError>
    where
        C: Canvas<M> + ?Sized,
        R: MotifRepository<M> + ?Sized,
    {
        for (index, layer) in self.layers.iter().enumerate() {
            if motifs.get(layer.motif).is_none() {
                tracing::warn!(layer = index, "layer motif missing from repository");
                return Err(LayoutError::UnknownMotif);
            }
        }

        let (width, height) = (self.surface.width(), self.surface.height());
        tracing::debug!(
            width,
            height,
            order = self.order,
            layers = self.layers.len(),
            grid = self.grid.is_some(),
            "drawing design"
        );

        if let Some(grid) = &self.grid {
            Drawable::<M>::draw_on(grid, &mut *canvas, motifs, width, height)?;
        }
        for (index, layer) in self.layers.iter().enumerate() {
            tracing::trace!(layer = index, copies = ?layer.copies(), "drawing layer");
            layer.draw_on(&mut *canvas, motifs, width, height)?;
        }
        Ok(())
    }
}

impl<M: Copy> Drawable<M> for Design<M> {
    /// Draws at the given surface size instead of the design's own, for
    /// previews at another resolution. Layer radii scale with the surface.
    fn draw_on<C, R>(
        &self,
        canvas: &mut C,
        motifs: &R,
        width: u32,
        height: u32,
    ) -> Result<(), LayoutError>
    where
        C: Canvas<M> + ?Sized,
        R: MotifRepository<M> + ?Sized,
    {
        let resized = Design {
            surface: Surface::new(width, height)?,
            order: self.order,
            grid: self.grid,
            layers: self.layers.clone(),
        };
        resized.draw(canvas, motifs)
    }
}
