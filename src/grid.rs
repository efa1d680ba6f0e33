//! Polar reference grid: concentric circles plus major and minor spokes.
//!
//! # Example
//!
//! ```
//! use mandala_layout::{DrawCommand, MandalaGrid};
//!
//! let grid = MandalaGrid::new(3).angular_divisions(12).radial_increment(10.0);
//! let commands: Vec<DrawCommand> = grid.commands(600, 600).unwrap().collect();
//!
//! // 29 circles (10..=290), 36 minor spokes, 3 major spokes
//! assert_eq!(commands.len(), 29 + 36 + 3);
//! ```

use num_traits::Float;

use crate::color::Color;
use crate::error::{LayoutError, Parameter};
use crate::geometry::{Point, Surface, SymmetricAngles, symmetric_angles};

/// A stroked primitive for the rendering collaborator.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Circle outline.
    Circle {
        center: Point,
        radius: f64,
        color: Color,
        stroke_width: f64,
    },
    /// Straight line segment.
    Line {
        from: Point,
        to: Point,
        color: Color,
        stroke_width: f64,
    },
}

/// Reference grid configuration.
///
/// `color` strokes circles and minor spokes, `bold_color` the major spokes.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MandalaGrid {
    pub order: u32,
    pub angular_divisions: u32,
    pub radial_increment: f64,
    pub color: Color,
    pub bold_color: Color,
    pub stroke_width: f64,
}

impl Default for MandalaGrid {
    fn default() -> Self {
        Self {
            order: 3,
            angular_divisions: 12,
            radial_increment: 10.0,
            color: Color::CYAN,
            bold_color: Color::BLUE,
            stroke_width: 2.0,
        }
    }
}

impl MandalaGrid {
    /// Grid with `order` major sectors and default spacing and colors.
    pub fn new(order: u32) -> Self {
        Self {
            order,
            ..Self::default()
        }
    }

    /// Set the number of minor spokes per major sector.
    pub fn angular_divisions(mut self, divisions: u32) -> Self {
        self.angular_divisions = divisions;
        self
    }

    /// Set the spacing between concentric circles, in surface units.
    pub fn radial_increment(mut self, increment: f64) -> Self {
        self.radial_increment = increment;
        self
    }

    /// Set the circle and minor-spoke color.
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the major-spoke color.
    pub fn bold_color(mut self, color: Color) -> Self {
        self.bold_color = color;
        self
    }

    pub fn stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    /// Check the invariants: `order ≥ 1`, `angular_divisions ≥ 1`,
    /// `radial_increment > 0`, and the minor spoke count fits in `u32`.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.order == 0 {
            return Err(LayoutError::invalid(Parameter::Order));
        }
        if self.angular_divisions == 0 {
            return Err(LayoutError::invalid(Parameter::AngularDivisions));
        }
        if !(self.radial_increment.is_finite() && self.radial_increment > 0.0) {
            return Err(LayoutError::invalid(Parameter::RadialIncrement));
        }
        if !(self.stroke_width.is_finite() && self.stroke_width >= 0.0) {
            return Err(LayoutError::invalid(Parameter::StrokeWidth));
        }
        self.minor_count()?;
        Ok(())
    }

    fn minor_count(&self) -> Result<u32, LayoutError> {
        self.order
            .checked_mul(self.angular_divisions)
            .ok_or(LayoutError::invalid(Parameter::AngularDivisions))
    }

    /// Major spoke angles: `−90 + k·360/order`.
    pub fn major_angles(&self) -> SymmetricAngles {
        symmetric_angles(self.order)
    }

    /// Minor spoke angles: `−90 + k·360/(order·angular_divisions)`.
    ///
    /// Empty when the product overflows; [`validate`](Self::validate)
    /// reports that case.
    pub fn minor_angles(&self) -> SymmetricAngles {
        symmetric_angles(self.minor_count().unwrap_or(0))
    }

    /// Circle radii for a surface: multiples of `radial_increment` strictly
    /// below half the shorter side, with that half rounded down to whole
    /// pixels. A 601×601 surface stops below 300, not 300.5.
    ///
    /// Fails with [`Parameter::RadialIncrement`] when the increment is so
    /// small that the circle count would not fit in `u32`.
    pub fn circle_radii(&self, width: u32, height: u32) -> Result<CircleRadii, LayoutError> {
        self.validate()?;
        let surface = Surface::new(width, height)?;
        CircleRadii::new(self.radial_increment, circle_limit(&surface))
    }

    /// Generate the grid's draw commands for a `width × height` surface.
    ///
    /// Emission order is circles, then minor spokes, then major spokes, so
    /// each major spoke is drawn over the minor spoke it coincides with.
    pub fn commands(&self, width: u32, height: u32) -> Result<GridCommands, LayoutError> {
        self.validate()?;
        let surface = Surface::new(width, height)?;
        let circles = CircleRadii::new(self.radial_increment, circle_limit(&surface))?;
        tracing::debug!(
            order = self.order,
            angular_divisions = self.angular_divisions,
            circles = circles.len(),
            width,
            height,
            "generating polar grid"
        );
        Ok(GridCommands {
            surface,
            color: self.color,
            bold_color: self.bold_color,
            stroke_width: self.stroke_width,
            circles,
            minor: self.minor_angles(),
            major: self.major_angles(),
        })
    }
}

/// Generate the reference grid for `config` on a `width × height` surface.
pub fn generate_grid(
    config: &MandalaGrid,
    width: u32,
    height: u32,
) -> Result<GridCommands, LayoutError> {
    config.commands(width, height)
}

/// Exclusive upper bound for circle radii: half the shorter side, in whole
/// pixels.
fn circle_limit(surface: &Surface) -> f64 {
    (surface.width().min(surface.height()) / 2) as f64
}

/// Iterator over grid circle radii, see [`MandalaGrid::circle_radii`].
#[derive(Clone, Debug)]
pub struct CircleRadii {
    increment: f64,
    next: u32,
    count: u32,
}

impl CircleRadii {
    fn new(increment: f64, limit: f64) -> Result<Self, LayoutError> {
        let too_many = LayoutError::invalid(Parameter::RadialIncrement);
        // Radii are k·increment rather than a running sum, so rounding does
        // not drift across many circles.
        let steps = Float::floor(limit / increment);
        if steps > u32::MAX as f64 {
            return Err(too_many);
        }
        let mut count = steps as u32;
        while count > 0 && count as f64 * increment >= limit {
            count -= 1;
        }
        while (count as f64 + 1.0) * increment < limit {
            count = count.checked_add(1).ok_or(too_many)?;
        }
        Ok(Self {
            increment,
            next: 0,
            count,
        })
    }
}

impl Iterator for CircleRadii {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next >= self.count {
            return None;
        }
        self.next += 1;
        Some(self.next as f64 * self.increment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.count - self.next) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for CircleRadii {}

/// Iterator over a grid's [`DrawCommand`]s, see [`MandalaGrid::commands`].
#[derive(Clone, Debug)]
pub struct GridCommands {
    surface: Surface,
    color: Color,
    bold_color: Color,
    stroke_width: f64,
    circles: CircleRadii,
    minor: SymmetricAngles,
    major: SymmetricAngles,
}

impl GridCommands {
    fn spoke(&self, angle: f64, color: Color) -> DrawCommand {
        DrawCommand::Line {
            from: self.surface.center(),
            to: self.surface.at_polar(self.surface.half_size(), angle),
            color,
            stroke_width: self.stroke_width,
        }
    }
}

impl Iterator for GridCommands {
    type Item = DrawCommand;

    fn next(&mut self) -> Option<DrawCommand> {
        if let Some(radius) = self.circles.next() {
            return Some(DrawCommand::Circle {
                center: self.surface.center(),
                radius,
                color: self.color,
                stroke_width: self.stroke_width,
            });
        }
        if let Some(angle) = self.minor.next() {
            return Some(self.spoke(angle, self.color));
        }
        let angle = self.major.next()?;
        Some(self.spoke(angle, self.bold_color))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.circles.len() + self.minor.len() + self.major.len();
        (n, Some(n))
    }
}

impl ExactSizeIterator for GridCommands {}
