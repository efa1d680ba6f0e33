//! One ring of motif instances placed with radial symmetry.
//!
//! A layer repeats its motif `multiplicity × order` times around the surface
//! center. Every instance sits at placement angle `θ_k = −90 + k·360/n`,
//! shifted rigidly by `polar_angle`, and faces outward along its radius,
//! then turns by `self_rotation` about its own center.
//!
//! # Example
//!
//! ```
//! use mandala_layout::MandalaLayer;
//!
//! let layer = MandalaLayer::new("petal", 4).multiplicity(2).polar_radius(0.5);
//! let instances: Vec<_> = layer.instances(800, 800).unwrap().collect();
//!
//! assert_eq!(instances.len(), 8);
//! assert!((instances[0].position.x - 400.0).abs() < 1e-9);
//! assert!((instances[0].position.y - 200.0).abs() < 1e-9);
//! ```

use num_traits::Float;

use crate::error::{LayoutError, Parameter};
use crate::geometry::{Point, Size, Surface, SymmetricAngles, symmetric_angles};

/// Placement descriptor for one ring of a design.
///
/// `M` is the motif handle; the layer refers to a motif, it never owns
/// pixel data.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MandalaLayer<M> {
    /// Motif drawn by every instance.
    pub motif: M,
    /// Rotational symmetry of the design this layer belongs to.
    pub order: u32,
    /// Distance from the center as a fraction of half the shorter surface side.
    pub polar_radius: f64,
    /// Rigid rotation of the whole ring, in degrees.
    pub polar_angle: f64,
    /// Rotation of each instance about its own center, in degrees.
    pub self_rotation: f64,
    /// Uniform scale applied to the motif's native pixel size.
    pub size: f64,
    /// Copies per symmetry sector. `0` places exactly one instance.
    pub multiplicity: u32,
}

impl<M> MandalaLayer<M> {
    /// Layer with the reference tool's defaults: radius 0.5, no offsets,
    /// size 0.25, one copy per sector.
    pub fn new(motif: M, order: u32) -> Self {
        Self {
            motif,
            order,
            polar_radius: 0.5,
            polar_angle: 0.0,
            self_rotation: 0.0,
            size: 0.25,
            multiplicity: 1,
        }
    }

    pub fn polar_radius(mut self, radius: f64) -> Self {
        self.polar_radius = radius;
        self
    }

    pub fn polar_angle(mut self, degrees: f64) -> Self {
        self.polar_angle = degrees;
        self
    }

    pub fn self_rotation(mut self, degrees: f64) -> Self {
        self.self_rotation = degrees;
        self
    }

    pub fn size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    pub fn multiplicity(mut self, multiplicity: u32) -> Self {
        self.multiplicity = multiplicity;
        self
    }

    /// Number of instances: `1` when `multiplicity == 0`, otherwise
    /// `multiplicity * order`.
    pub fn copies(&self) -> Result<u32, LayoutError> {
        if self.multiplicity == 0 {
            return Ok(1);
        }
        match self.multiplicity.checked_mul(self.order) {
            Some(0) | None => Err(LayoutError::invalid(Parameter::Copies)),
            Some(n) => Ok(n),
        }
    }

    /// Check every numeric field.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.order == 0 {
            return Err(LayoutError::invalid(Parameter::Order));
        }
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(LayoutError::invalid(Parameter::Size));
        }
        if !(self.polar_radius.is_finite() && self.polar_radius >= 0.0) {
            return Err(LayoutError::invalid(Parameter::PolarRadius));
        }
        if !self.polar_angle.is_finite() {
            return Err(LayoutError::invalid(Parameter::PolarAngle));
        }
        if !self.self_rotation.is_finite() {
            return Err(LayoutError::invalid(Parameter::SelfRotation));
        }
        self.copies()?;
        Ok(())
    }

    /// Expand this layer into instance transforms for a `width × height`
    /// surface, in increasing placement index.
    pub fn instances(&self, width: u32, height: u32) -> Result<Instances, LayoutError> {
        self.validate()?;
        let surface = Surface::new(width, height)?;
        let copies = self.copies()?;
        let distance = self.polar_radius * surface.half_size();
        tracing::debug!(
            order = self.order,
            multiplicity = self.multiplicity,
            copies,
            distance,
            polar_angle = self.polar_angle,
            self_rotation = self.self_rotation,
            "generating layer instances"
        );
        Ok(Instances {
            surface,
            distance,
            polar_angle: self.polar_angle,
            self_rotation: self.self_rotation,
            scale: self.size,
            angles: symmetric_angles(copies),
            index: 0,
        })
    }
}

/// Generate the instances of `layer` on a `width × height` surface.
pub fn generate_layer_instances<M>(
    layer: &MandalaLayer<M>,
    width: u32,
    height: u32,
) -> Result<Instances, LayoutError> {
    layer.instances(width, height)
}

/// How the renderer should prepare a motif before placing it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpriteTransform {
    /// Uniform scale applied to the native pixel size.
    pub scale: f64,
    /// Rotation to apply about the sprite's own center, in degrees,
    /// counter-clockwise on screen. The rotated bounding box is expanded to
    /// fit, never cropped.
    pub rotation_degrees: f64,
}

impl SpriteTransform {
    /// Scaled pixel dimensions, truncated toward zero.
    ///
    /// Each axis is at least one pixel, so a valid layer never asks the
    /// renderer for an empty sprite.
    pub fn pixel_size(&self, native: Size) -> Size {
        let w = Float::trunc(native.width as f64 * self.scale) as u32;
        let h = Float::trunc(native.height as f64 * self.scale) as u32;
        Size::new(w.max(1), h.max(1))
    }

    /// Orientation of the sprite's "up" direction as a placement-style angle
    /// (clockwise on screen), i.e. `−rotation_degrees`.
    pub fn orientation(&self) -> f64 {
        -self.rotation_degrees
    }
}

/// A positioned motif instance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Instance {
    /// Placement index `k`.
    pub index: u32,
    /// `θ_k`, before the layer's `polar_angle` offset.
    pub placement_angle: f64,
    pub transform: SpriteTransform,
    /// Where the sprite's center goes on the surface.
    pub position: Point,
}

/// Iterator over a layer's [`Instance`]s, see [`MandalaLayer::instances`].
#[derive(Clone, Debug)]
pub struct Instances {
    surface: Surface,
    distance: f64,
    polar_angle: f64,
    self_rotation: f64,
    scale: f64,
    angles: SymmetricAngles,
    index: u32,
}

impl Iterator for Instances {
    type Item = Instance;

    fn next(&mut self) -> Option<Instance> {
        let theta = self.angles.next()?;
        let index = self.index;
        self.index += 1;

        // +90 cancels the −90 baseline: an upright motif with no
        // self-rotation ends up pointing outward along its radius.
        let orientation = 90.0 + theta + self.self_rotation;
        Some(Instance {
            index,
            placement_angle: theta,
            transform: SpriteTransform {
                scale: self.scale,
                rotation_degrees: -orientation,
            },
            position: self
                .surface
                .at_polar(self.distance, theta + self.polar_angle),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.angles.size_hint()
    }
}

impl ExactSizeIterator for Instances {}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use crate::geometry::normalize_degrees;

    const EPS: f64 = 1e-9;

    fn collect(layer: &MandalaLayer<u8>, w: u32, h: u32) -> Vec<Instance> {
        layer.instances(w, h).unwrap().collect()
    }

    #[test]
    fn defaults_match_reference_tool() {
        let l = MandalaLayer::new(7u8, 8);
        assert_eq!(l.polar_radius, 0.5);
        assert_eq!(l.polar_angle, 0.0);
        assert_eq!(l.self_rotation, 0.0);
        assert_eq!(l.size, 0.25);
        assert_eq!(l.multiplicity, 1);
    }

    #[test]
    fn copy_count_formula() {
        for order in 1..=9u32 {
            for multiplicity in 0..=4u32 {
                let layer = MandalaLayer::new(0u8, order).multiplicity(multiplicity);
                let expected = if multiplicity == 0 {
                    1
                } else {
                    multiplicity * order
                };
                assert_eq!(collect(&layer, 300, 200).len(), expected as usize);
            }
        }
    }

    #[test]
    fn order_four_multiplicity_two() {
        let layer = MandalaLayer::new(0u8, 4).multiplicity(2).polar_radius(0.5);
        let inst = collect(&layer, 800, 800);
        let angles: Vec<f64> = inst.iter().map(|i| i.placement_angle).collect();
        assert_eq!(
            angles,
            vec![-90.0, -45.0, 0.0, 45.0, 90.0, 135.0, 180.0, 225.0]
        );
        let first = inst[0].position;
        assert!((first.x - 400.0).abs() < EPS, "{first:?}");
        assert!((first.y - 200.0).abs() < EPS, "{first:?}");
        for i in &inst {
            assert!((i.position.distance_to(Point::new(400.0, 400.0)) - 200.0).abs() < EPS);
        }
    }

    #[test]
    fn zero_radius_collapses_to_center() {
        let layer = MandalaLayer::new(0u8, 6).multiplicity(3).polar_radius(0.0);
        for i in collect(&layer, 640, 480) {
            assert_eq!(i.position, Point::new(320.0, 240.0));
        }
    }

    #[test]
    fn multiplicity_zero_is_single_upright_instance() {
        let layer = MandalaLayer::new(0u8, 8).multiplicity(0).polar_radius(0.0);
        let inst = collect(&layer, 800, 800);
        assert_eq!(inst.len(), 1);
        assert_eq!(inst[0].placement_angle, -90.0);
        assert_eq!(inst[0].transform.rotation_degrees, 0.0);
        assert_eq!(inst[0].position, Point::new(400.0, 400.0));
    }

    #[test]
    fn instances_face_outward() {
        let layer = MandalaLayer::new(0u8, 4);
        let inst = collect(&layer, 100, 100);
        let rotations: Vec<f64> = inst
            .iter()
            .map(|i| normalize_degrees(i.transform.rotation_degrees))
            .collect();
        // up, right, down, left: sprite rotated 0, -90, -180, -270
        assert_eq!(rotations, vec![0.0, 270.0, 180.0, 90.0]);
    }

    #[test]
    fn self_rotation_only_reorients() {
        let base = MandalaLayer::new(0u8, 3).multiplicity(2);
        let turned = base.self_rotation(45.0);
        let a = collect(&base, 500, 500);
        let b = collect(&turned, 500, 500);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.position, y.position);
            assert!((x.transform.rotation_degrees - y.transform.rotation_degrees - 45.0).abs() < EPS);
        }
    }

    #[test]
    fn polar_angle_rotates_ring_rigidly() {
        let base = MandalaLayer::new(0u8, 5).polar_radius(0.8);
        let shifted = base.polar_angle(11.5);
        let center = Point::new(250.0, 250.0);
        let a = collect(&base, 500, 500);
        let b = collect(&shifted, 500, 500);
        for (x, y) in a.iter().zip(&b) {
            let expected = x.position.rotated_about(center, 11.5);
            assert!(y.position.distance_to(expected) < 1e-9);
            // orientation is tied to θ_k, not to the offset
            assert_eq!(x.transform, y.transform);
        }
    }

    #[test]
    fn positions_are_rotationally_symmetric() {
        let layer = MandalaLayer::new(0u8, 6)
            .multiplicity(2)
            .polar_radius(0.7)
            .polar_angle(13.0);
        let inst = collect(&layer, 900, 700);
        let center = Point::new(450.0, 350.0);
        let step = 360.0 / inst.len() as f64;
        for i in &inst {
            let rotated = i.position.rotated_about(center, step);
            assert!(
                inst.iter().any(|j| j.position.distance_to(rotated) < 1e-6),
                "no instance at {rotated:?}"
            );
        }
    }

    #[test]
    fn pixel_size_truncates_and_never_empties() {
        let t = SpriteTransform {
            scale: 0.25,
            rotation_degrees: 0.0,
        };
        assert_eq!(t.pixel_size(Size::new(257, 99)), Size::new(64, 24));
        let tiny = SpriteTransform {
            scale: 0.001,
            rotation_degrees: 0.0,
        };
        assert_eq!(tiny.pixel_size(Size::new(100, 100)), Size::new(1, 1));
    }

    #[test]
    fn non_positive_size_rejected() {
        for bad in [0.0, -0.5, f64::NAN] {
            let layer = MandalaLayer::new(0u8, 4).size(bad);
            assert_eq!(
                generate_layer_instances(&layer, 100, 100).unwrap_err(),
                LayoutError::invalid(Parameter::Size)
            );
        }
    }

    #[test]
    fn other_invalid_parameters() {
        let l = MandalaLayer::new(0u8, 0);
        assert_eq!(l.validate(), Err(LayoutError::invalid(Parameter::Order)));
        let l = MandalaLayer::new(0u8, 4).polar_radius(-0.1);
        assert_eq!(l.validate(), Err(LayoutError::invalid(Parameter::PolarRadius)));
        let l = MandalaLayer::new(0u8, 4).polar_angle(f64::INFINITY);
        assert_eq!(l.validate(), Err(LayoutError::invalid(Parameter::PolarAngle)));
        let l = MandalaLayer::new(0u8, 4).self_rotation(f64::NAN);
        assert_eq!(l.validate(), Err(LayoutError::invalid(Parameter::SelfRotation)));
        let l = MandalaLayer::new(0u8, u32::MAX).multiplicity(2);
        assert_eq!(l.validate(), Err(LayoutError::invalid(Parameter::Copies)));
        let l = MandalaLayer::new(0u8, 4);
        assert_eq!(
            l.instances(100, 0).unwrap_err(),
            LayoutError::invalid(Parameter::SurfaceHeight)
        );
    }
}
