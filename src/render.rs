//! Seams to the rendering side: motif lookup, the canvas that receives draw
//! calls, and the [`Drawable`] capability shared by grids, layers and designs.
//!
//! Nothing here touches pixels. A host toolkit implements [`Canvas`] (and
//! usually [`MotifRepository`]) and gets geometry pushed to it in draw order.

use crate::error::LayoutError;
use crate::geometry::{Point, Size};
use crate::grid::{DrawCommand, MandalaGrid};
use crate::layer::MandalaLayer;

/// A bitmap motif as seen by the layout engine.
pub trait Motif {
    /// Native pixel dimensions before any scaling.
    fn native_size(&self) -> Size;
}

impl Motif for Size {
    fn native_size(&self) -> Size {
        *self
    }
}

/// Provides motifs by handle.
pub trait MotifRepository<M> {
    type Motif: Motif;

    /// The motif for `id`, or `None` when the repository does not know it.
    fn get(&self, id: M) -> Option<&Self::Motif>;
}

/// A fully resolved sprite placement: which motif, at what pixel size,
/// turned how far, centered where.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sprite<M> {
    pub motif: M,
    /// Scaled size before rotation.
    pub pixel_size: Size,
    /// Counter-clockwise rotation about the sprite center, in degrees.
    pub rotation_degrees: f64,
    /// Sprite center on the surface.
    pub position: Point,
}

/// Receives draw calls in paint order. Later calls paint over earlier ones.
pub trait Canvas<M> {
    fn draw_shape(&mut self, command: &DrawCommand);
    fn draw_sprite(&mut self, sprite: &Sprite<M>);
}

/// Something that can render itself onto a canvas of a given surface size.
///
/// Validation happens before the first draw call: on `Err` the canvas has
/// received nothing from this call.
pub trait Drawable<M> {
    fn draw_on<C, R>(
        &self,
        canvas: &mut C,
        motifs: &R,
        width: u32,
        height: u32,
    ) -> Result<(), LayoutError>
    where
        C: Canvas<M> + ?Sized,
        R: MotifRepository<M> + ?Sized;
}

impl<M> Drawable<M> for MandalaGrid {
    fn draw_on<C, R>(
        &self,
        canvas: &mut C,
        _motifs: &R,
        width: u32,
        height: u32,
    ) -> Result<(), LayoutError>
    where
        C: Canvas<M> + ?Sized,
        R: MotifRepository<M> + ?Sized,
    {
        for command in self.commands(width, height)? {
            canvas.draw_shape(&command);
        }
        Ok(())
    }
}

impl<M: Copy> Drawable<M> for MandalaLayer<M> {
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
        let instances = self.instances(width, height)?;
        let native = motifs
            .get(self.motif)
            .ok_or(LayoutError::UnknownMotif)?
            .native_size();
        for instance in instances {
            canvas.draw_sprite(&Sprite {
                motif: self.motif,
                pixel_size: instance.transform.pixel_size(native),
                rotation_degrees: instance.transform.rotation_degrees,
                position: instance.position,
            });
        }
        Ok(())
    }
}

/// One recorded draw call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DrawOp<M> {
    Shape(DrawCommand),
    Sprite(Sprite<M>),
}

/// A [`Canvas`] that stores every call in order.
#[cfg(feature = "alloc")]
#[derive(Clone, Debug)]
pub struct Recorder<M> {
    ops: alloc::vec::Vec<DrawOp<M>>,
}

#[cfg(feature = "alloc")]
impl<M> Default for Recorder<M> {
    fn default() -> Self {
        Self {
            ops: alloc::vec::Vec::new(),
        }
    }
}

#[cfg(feature = "alloc")]
impl<M> Recorder<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded calls in paint order.
    pub fn ops(&self) -> &[DrawOp<M>] {
        &self.ops
    }

    pub fn into_ops(self) -> alloc::vec::Vec<DrawOp<M>> {
        self.ops
    }

    /// Recorded sprites in paint order.
    pub fn sprites(&self) -> impl Iterator<Item = &Sprite<M>> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Sprite(s) => Some(s),
            DrawOp::Shape(_) => None,
        })
    }

    /// Recorded grid shapes in paint order.
    pub fn shapes(&self) -> impl Iterator<Item = &DrawCommand> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Shape(c) => Some(c),
            DrawOp::Sprite(_) => None,
        })
    }
}

#[cfg(feature = "alloc")]
impl<M: Copy> Canvas<M> for Recorder<M> {
    fn draw_shape(&mut self, command: &DrawCommand) {
        self.ops.push(DrawOp::Shape(*command));
    }

    fn draw_sprite(&mut self, sprite: &Sprite<M>) {
        self.ops.push(DrawOp::Sprite(*sprite));
    }
}
