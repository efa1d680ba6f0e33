//! Parsed representation of grid and layer query strings.

use alloc::string::String;

use crate::color::Color;

/// Parsed grid parameters. `None` fields keep the grid defaults.
#[derive(Debug, Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct GridInstructions {
    /// Major sectors (`order`).
    pub order: Option<u32>,
    /// Minor spokes per sector (`divisions`, `angular_divisions`).
    pub angular_divisions: Option<u32>,
    /// Circle spacing (`step`, `radial_increment`, `increment`).
    pub radial_increment: Option<f64>,
    /// Circle and minor spoke color (`color`).
    pub color: Option<Color>,
    /// Major spoke color (`bold`, `bold_color`).
    pub bold_color: Option<Color>,
    /// Line width (`stroke`, `stroke_width`).
    pub stroke_width: Option<f64>,
}

impl GridInstructions {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Parsed layer parameters. `None` fields keep the layer defaults.
#[derive(Debug, Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct LayerInstructions {
    /// Motif name (`motif`), resolved by the caller or a catalog.
    pub motif: Option<String>,
    /// Symmetry order (`order`); usually inherited from the design.
    pub order: Option<u32>,
    /// `radius`, `r`, `polar_radius`.
    pub polar_radius: Option<f64>,
    /// `angle`, `polar_angle`.
    pub polar_angle: Option<f64>,
    /// `rotation`, `rot`, `self_rotation`.
    pub self_rotation: Option<f64>,
    /// `size`, `scale`.
    pub size: Option<f64>,
    /// `multiplicity`, `mult`.
    pub multiplicity: Option<u32>,
}

impl LayerInstructions {
    pub fn new() -> Self {
        Self::default()
    }
}
