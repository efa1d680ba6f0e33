//! Query-string parameters for grids and layers.
//!
//! Parses strings like `order=8&divisions=12&step=10&color=cyan` (grid) or
//! `motif=eye&radius=0.1&rotation=45&size=0.2&multiplicity=2` (layer) into
//! instruction structs, then into validated [`MandalaGrid`](crate::MandalaGrid)
//! and [`MandalaLayer`](crate::MandalaLayer) values.
//!
//! # Example
//!
//! ```
//! use mandala_layout::query;
//!
//! let result = query::parse_layer("motif=eye&radius=0.1&size=0.2&mult=2");
//! assert!(result.warnings.is_empty());
//!
//! let layer = result.instructions.to_layer("eye", 8).expect("valid layer");
//! assert_eq!(layer.polar_radius, 0.1);
//! assert_eq!(layer.multiplicity, 2);
//! ```
//!
//! Parsing never fails: bad values and unknown keys become
//! [`ParseWarning`]s and the field is left unset. Range checks happen in
//! the conversion step, which reports [`LayoutError`](crate::LayoutError).

mod convert;
pub mod instructions;
mod parse;

pub use instructions::{GridInstructions, LayerInstructions};

use alloc::string::String;
use alloc::vec::Vec;

/// Result of parsing a query string.
#[derive(Debug, Clone)]
pub struct ParseResult<T> {
    /// Parsed instructions.
    pub instructions: T,
    /// Non-fatal parse warnings.
    pub warnings: Vec<ParseWarning>,
}

/// Non-fatal warning from query string parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    /// A key appeared more than once (last value wins).
    DuplicateKey { key: String, value: String },
    /// A key was not recognized.
    KeyNotRecognized { key: String, value: String },
    /// A key was recognized but its value could not be parsed.
    ValueInvalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Parse grid parameters (with or without leading `?`).
///
/// Keys: `order`, `divisions`, `step`, `color`, `bold`, `stroke`, plus the
/// long field names (`angular_divisions`, `radial_increment`, …).
pub fn parse_grid(query: &str) -> ParseResult<GridInstructions> {
    let (instructions, warnings) = parse::parse_grid_query(query);
    ParseResult {
        instructions,
        warnings,
    }
}

/// Parse layer parameters (with or without leading `?`).
///
/// Keys: `motif`, `order`, `radius`, `angle`, `rotation`, `size`,
/// `multiplicity`, plus short and long aliases (`r`, `rot`, `mult`,
/// `polar_radius`, `self_rotation`, …).
pub fn parse_layer(query: &str) -> ParseResult<LayerInstructions> {
    let (instructions, warnings) = parse::parse_layer_query(query);
    ParseResult {
        instructions,
        warnings,
    }
}
