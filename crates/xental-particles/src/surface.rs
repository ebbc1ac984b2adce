//! Drawing surface abstraction.

use xental_core::{Rgba, Size, Vec2};

/// A 2D raster the particle field paints onto.
///
/// Coordinates are in surface units; `size` reports the drawable extent.
pub trait Surface {
    /// Current drawable extent.
    fn size(&self) -> Size;

    /// Composite `color` over the whole surface.
    fn fade(&mut self, color: Rgba);

    /// Composite a filled circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Composite a one-pixel line segment.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba);
}

/// A recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Fade(Rgba),
    Circle { center: Vec2, radius: f32, color: Rgba },
    Line { from: Vec2, to: Vec2, color: Rgba },
}

/// A surface that records draw calls instead of rasterizing them.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    size: Size,
    ops: Vec<DrawOp>,
}

impl Recorder {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ops: Vec::new(),
        }
    }

    /// Every call since creation or the last [`Recorder::clear`].
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Only the line segments.
    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2, Rgba)> + '_ {
        self.ops.iter().filter_map(|op| match *op {
            DrawOp::Line { from, to, color } => Some((from, to, color)),
            _ => None,
        })
    }

    /// Only the circles.
    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, Rgba)> + '_ {
        self.ops.iter().filter_map(|op| match *op {
            DrawOp::Circle {
                center,
                radius,
                color,
            } => Some((center, radius, color)),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Surface for Recorder {
    fn size(&self) -> Size {
        self.size
    }

    fn fade(&mut self, color: Rgba) {
        self.ops.push(DrawOp::Fade(color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba) {
        self.ops.push(DrawOp::Line { from, to, color });
    }
}
