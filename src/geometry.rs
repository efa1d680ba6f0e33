//! Polar geometry shared by the grid and layer generators.
//!
//! Screen coordinates: origin top-left, +x right, +y down. Angles are in
//! degrees; 0° points along +x and −90° points "up".
//!
//! ```text
//!               −90°
//!                │
//!      180° ─────┼───── 0°
//!                │
//!                90°
//! ```

use num_traits::Float;

use crate::error::{LayoutError, Parameter};

/// Angle of the first instance/spoke. Places "up" at index zero.
pub const BASE_ANGLE: f64 = -90.0;

/// A point on the drawing surface, in surface units.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise sum.
    pub fn offset(self, other: Point) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(self, other: Point) -> f64 {
        Float::hypot(self.x - other.x, self.y - other.y)
    }

    /// Rotate about `pivot` by `degrees`, in the same direction as
    /// increasing polar angle (clockwise on screen).
    pub fn rotated_about(self, pivot: Point, degrees: f64) -> Self {
        let rad = Float::to_radians(degrees);
        let (sin, cos) = (Float::sin(rad), Float::cos(rad));
        let dx = self.x - pivot.x;
        let dy = self.y - pivot.y;
        Self::new(pivot.x + dx * cos - dy * sin, pivot.y + dx * sin + dy * cos)
    }
}

/// Width × height dimensions in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Convert polar coordinates to a rectangular offset.
///
/// `theta` is measured in degrees.
///
/// ```
/// use mandala_layout::polar_to_rect;
///
/// let up = polar_to_rect(10.0, -90.0);
/// assert!(up.x.abs() < 1e-9);
/// assert!((up.y + 10.0).abs() < 1e-9);
/// ```
pub fn polar_to_rect(r: f64, theta: f64) -> Point {
    let rad = Float::to_radians(theta);
    Point::new(r * Float::cos(rad), r * Float::sin(rad))
}

/// Normalize an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let r = degrees % 360.0;
    // tiny negatives round up to exactly 360.0
    let r = if r < 0.0 { r + 360.0 } else { r };
    if r >= 360.0 { 0.0 } else { r }
}

/// The drawing surface every generator lays out against.
///
/// The shorter side sets the scale: grid spokes and layer radii are
/// fractions of half of it, so layers and grid always line up.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Surface {
    width: u32,
    height: u32,
}

impl Surface {
    /// Create a surface. Both dimensions must be non-zero.
    pub fn new(width: u32, height: u32) -> Result<Self, LayoutError> {
        if width == 0 {
            return Err(LayoutError::invalid(Parameter::SurfaceWidth));
        }
        if height == 0 {
            return Err(LayoutError::invalid(Parameter::SurfaceHeight));
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `min(width, height)`.
    pub fn size(&self) -> f64 {
        self.width.min(self.height) as f64
    }

    /// Distance from the center to the nearest edge.
    pub fn half_size(&self) -> f64 {
        self.size() / 2.0
    }

    pub fn center(&self) -> Point {
        Point::new(self.width as f64 / 2.0, self.height as f64 / 2.0)
    }

    /// The point at distance `r` and angle `theta` (degrees) from the center.
    pub fn at_polar(&self, r: f64, theta: f64) -> Point {
        self.center().offset(polar_to_rect(r, theta))
    }
}

/// Angles of `count` evenly spaced rays starting straight up.
///
/// Yields `−90 + k·360/count` for `k = 0 … count−1`. An empty iterator when
/// `count` is zero.
pub fn symmetric_angles(count: u32) -> SymmetricAngles {
    SymmetricAngles { count, next: 0 }
}

/// Iterator returned by [`symmetric_angles`].
#[derive(Clone, Debug)]
pub struct SymmetricAngles {
    count: u32,
    next: u32,
}

impl Iterator for SymmetricAngles {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next >= self.count {
            return None;
        }
        let k = self.next;
        self.next += 1;
        Some(BASE_ANGLE + k as f64 * 360.0 / self.count as f64)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = (self.count - self.next) as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for SymmetricAngles {}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn polar_up_is_negative_y() {
        let p = polar_to_rect(5.0, -90.0);
        assert!(close(p.x, 0.0), "{p:?}");
        assert!(close(p.y, -5.0), "{p:?}");
    }

    #[test]
    fn polar_zero_is_positive_x() {
        let p = polar_to_rect(5.0, 0.0);
        assert!(close(p.x, 5.0));
        assert!(close(p.y, 0.0));
    }

    #[test]
    fn polar_ninety_is_down() {
        let p = polar_to_rect(3.0, 90.0);
        assert!(close(p.x, 0.0));
        assert!(close(p.y, 3.0));
    }

    #[test]
    fn normalize_wraps_negative_and_large() {
        assert!(close(normalize_degrees(-90.0), 270.0));
        assert!(close(normalize_degrees(450.0), 90.0));
        assert!(close(normalize_degrees(360.0), 0.0));
        assert!(close(normalize_degrees(-720.0), 0.0));
        assert!(close(normalize_degrees(12.5), 12.5));
    }

    #[test]
    fn surface_rejects_zero() {
        assert_eq!(
            Surface::new(0, 10),
            Err(LayoutError::invalid(Parameter::SurfaceWidth))
        );
        assert_eq!(
            Surface::new(10, 0),
            Err(LayoutError::invalid(Parameter::SurfaceHeight))
        );
    }

    #[test]
    fn surface_uses_shorter_side() {
        let s = Surface::new(1000, 600).unwrap();
        assert_eq!(s.size(), 600.0);
        assert_eq!(s.half_size(), 300.0);
        assert_eq!(s.center(), Point::new(500.0, 300.0));
    }

    #[test]
    fn odd_surface_center_is_fractional() {
        let s = Surface::new(801, 801).unwrap();
        assert_eq!(s.center(), Point::new(400.5, 400.5));
    }

    #[test]
    fn symmetric_angles_start_up() {
        let angles: Vec<f64> = symmetric_angles(4).collect();
        assert_eq!(angles, vec![-90.0, 0.0, 90.0, 180.0]);
    }

    #[test]
    fn symmetric_angles_exact_size() {
        let mut it = symmetric_angles(7);
        assert_eq!(it.len(), 7);
        it.next();
        assert_eq!(it.len(), 6);
        assert_eq!(symmetric_angles(0).count(), 0);
    }

    #[test]
    fn rotate_about_pivot_matches_polar_step() {
        let c = Point::new(100.0, 100.0);
        let p = c.offset(polar_to_rect(50.0, -90.0));
        let q = p.rotated_about(c, 90.0);
        let expected = c.offset(polar_to_rect(50.0, 0.0));
        assert!(q.distance_to(expected) < EPS, "{q:?} vs {expected:?}");
    }
}
