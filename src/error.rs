//! Error type shared by every generator.

use core::fmt;

/// Which input a [`LayoutError::InvalidParameter`] refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Parameter {
    /// Surface width (must be > 0).
    SurfaceWidth,
    /// Surface height (must be > 0).
    SurfaceHeight,
    /// Rotational symmetry count (must be ≥ 1).
    Order,
    /// Minor spokes per major sector (must be ≥ 1).
    AngularDivisions,
    /// Spacing between grid circles (must be finite and > 0).
    RadialIncrement,
    /// Grid stroke width (must be finite and ≥ 0).
    StrokeWidth,
    /// Motif scale factor (must be finite and > 0).
    Size,
    /// Placement radius as a fraction of the half size (must be finite and ≥ 0).
    PolarRadius,
    /// Ring offset angle in degrees (must be finite).
    PolarAngle,
    /// Per-instance rotation in degrees (must be finite).
    SelfRotation,
    /// `multiplicity * order` overflowed.
    Copies,
}

impl Parameter {
    /// Field name as it appears on the builders.
    pub const fn name(self) -> &'static str {
        match self {
            Self::SurfaceWidth => "width",
            Self::SurfaceHeight => "height",
            Self::Order => "order",
            Self::AngularDivisions => "angular_divisions",
            Self::RadialIncrement => "radial_increment",
            Self::StrokeWidth => "stroke_width",
            Self::Size => "size",
            Self::PolarRadius => "polar_radius",
            Self::PolarAngle => "polar_angle",
            Self::SelfRotation => "self_rotation",
            Self::Copies => "copies",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Layout computation error.
///
/// Generators validate every input before producing output, so an error
/// always means nothing was emitted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// A numeric input is out of range, zero, or not finite.
    #[error("invalid parameter `{parameter}`")]
    InvalidParameter { parameter: Parameter },
    /// A layer's symmetry order differs from the design it was added to.
    #[error("layer order {layer} does not match design order {design}")]
    OrderMismatch { design: u32, layer: u32 },
    /// The motif repository has no entry for a layer's motif.
    #[error("motif not found in repository")]
    UnknownMotif,
}

impl LayoutError {
    pub(crate) const fn invalid(parameter: Parameter) -> Self {
        Self::InvalidParameter { parameter }
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn display_names_parameter() {
        let err = LayoutError::invalid(Parameter::RadialIncrement);
        assert_eq!(err.to_string(), "invalid parameter `radial_increment`");
    }

    #[test]
    fn display_order_mismatch() {
        let err = LayoutError::OrderMismatch {
            design: 8,
            layer: 6,
        };
        assert_eq!(err.to_string(), "layer order 6 does not match design order 8");
    }
}
