//! Convert parsed instructions into validated grid and layer values.

use crate::catalog::{MotifCatalog, MotifId};
use crate::error::LayoutError;
use crate::grid::MandalaGrid;
use crate::layer::MandalaLayer;

use super::instructions::{GridInstructions, LayerInstructions};

impl GridInstructions {
    /// Build a grid, filling unset fields from [`MandalaGrid::default`].
    pub fn to_grid(&self) -> Result<MandalaGrid, LayoutError> {
        let mut grid = MandalaGrid::default();
        if let Some(order) = self.order {
            grid.order = order;
        }
        if let Some(divisions) = self.angular_divisions {
            grid.angular_divisions = divisions;
        }
        if let Some(increment) = self.radial_increment {
            grid.radial_increment = increment;
        }
        if let Some(color) = self.color {
            grid.color = color;
        }
        if let Some(color) = self.bold_color {
            grid.bold_color = color;
        }
        if let Some(width) = self.stroke_width {
            grid.stroke_width = width;
        }
        grid.validate()?;
        Ok(grid)
    }
}

impl LayerInstructions {
    /// Build a layer for `motif`.
    ///
    /// `order` is used unless the query carried its own; unset fields take
    /// the [`MandalaLayer::new`] defaults.
    pub fn to_layer<M>(&self, motif: M, order: u32) -> Result<MandalaLayer<M>, LayoutError> {
        let mut layer = MandalaLayer::new(motif, self.order.unwrap_or(order));
        if let Some(r) = self.polar_radius {
            layer.polar_radius = r;
        }
        if let Some(a) = self.polar_angle {
            layer.polar_angle = a;
        }
        if let Some(rot) = self.self_rotation {
            layer.self_rotation = rot;
        }
        if let Some(size) = self.size {
            layer.size = size;
        }
        if let Some(m) = self.multiplicity {
            layer.multiplicity = m;
        }
        layer.validate()?;
        Ok(layer)
    }

    /// Build a layer whose motif is looked up by name in `catalog`.
    ///
    /// Returns [`LayoutError::UnknownMotif`] when the query names no motif
    /// or one the catalog does not have.
    pub fn to_layer_in(
        &self,
        catalog: &MotifCatalog,
        order: u32,
    ) -> Result<MandalaLayer<MotifId>, LayoutError> {
        let id = self
            .motif
            .as_deref()
            .and_then(|name| catalog.find(name))
            .ok_or(LayoutError::UnknownMotif)?;
        self.to_layer(id, order)
    }
}
