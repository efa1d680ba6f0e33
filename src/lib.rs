//! Radial-symmetry layout for mandala compositions.
//!
//! Computes where copies of a motif go around a center and how each copy is
//! scaled and turned, plus the stroked reference grid of circles and spokes.
//! Pure geometry: drawing is delegated to a [`Canvas`] supplied by the host.
//!
//! # Modules
//!
//! - [`geometry`]: points, polar conversion, the drawing surface
//! - [`grid`]: reference grid of concentric circles and radial spokes
//! - [`layer`]: a motif repeated with `order`-fold symmetry
//! - [`render`]: canvas, motif repository and drawable seams
//! - `design`: grid plus ordered layers (requires `alloc`)
//! - `catalog`: named motif registry and directory discovery (requires `alloc`)
//! - `svg`: SVG preview renderer (requires `svg`)
//! - `query`: query-string parameters for grids and layers (requires `query`)
//!
//! # Example
//!
//! ```
//! use mandala_layout::MandalaLayer;
//!
//! // Eight petals, half-way out, on an 800×800 surface.
//! let layer = MandalaLayer::new("petal", 8).polar_radius(0.5);
//! let tops: Vec<_> = layer.instances(800, 800)?.collect();
//! assert_eq!(tops.len(), 8);
//! // The first copy sits straight above the center.
//! assert!((tops[0].position.x - 400.0).abs() < 1e-9);
//! assert!((tops[0].position.y - 200.0).abs() < 1e-9);
//! # Ok::<(), mandala_layout::LayoutError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod color;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod layer;
pub mod render;

#[cfg(feature = "alloc")]
pub mod catalog;
#[cfg(feature = "alloc")]
mod design;
#[cfg(feature = "query")]
pub mod query;
#[cfg(feature = "svg")]
pub mod svg;

pub use color::Color;
pub use error::{LayoutError, Parameter};
pub use geometry::{
    Point, Size, Surface, SymmetricAngles, normalize_degrees, polar_to_rect, symmetric_angles,
};
pub use grid::{CircleRadii, DrawCommand, GridCommands, MandalaGrid, generate_grid};
pub use layer::{Instance, Instances, MandalaLayer, SpriteTransform, generate_layer_instances};
pub use render::{Canvas, DrawOp, Drawable, Motif, MotifRepository, Sprite};

#[cfg(feature = "alloc")]
pub use design::Design;
#[cfg(feature = "alloc")]
pub use render::Recorder;
