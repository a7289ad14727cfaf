//! Surface module: Where dash segments end up.
//!
//! The tiling core never rasterizes anything itself. It hands each segment to a
//! [`DrawingSurface`], which decides how to stroke it and whether to clip it.
//!
//! Two surfaces ship with the crate:
//!
//! - `Vec<Segment>` records every call, which is what tests and hosts with their
//!   own stroke pipeline want.
//! - [`Grid`] stamps strokes into a cell raster, clipped to its bounds.

mod grid;

pub use grid::Grid;

use crate::color::Rgba;
use crate::layout::Point;

/// Something that can stroke a straight segment.
///
/// Calls are synchronous and infallible from the caller's point of view. Any
/// rasterization failure is the surface's own business.
pub trait DrawingSurface {
    /// Stroke a straight line from `start` to `end`.
    fn draw_segment(&mut self, start: Point, end: Point, thickness: f32, color: Rgba);
}

impl<S: DrawingSurface + ?Sized> DrawingSurface for &mut S {
    #[inline]
    fn draw_segment(&mut self, start: Point, end: Point, thickness: f32, color: Rgba) {
        (**self).draw_segment(start, end, thickness, color);
    }
}

/// One stroked segment, as emitted by the tiler.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Segment {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
    /// Stroke thickness.
    pub thickness: f32,
    /// Stroke color.
    pub color: Rgba,
}

impl Segment {
    /// Create a new segment.
    #[inline]
    pub const fn new(start: Point, end: Point, thickness: f32, color: Rgba) -> Self {
        Self {
            start,
            end,
            thickness,
            color,
        }
    }

    /// Euclidean length from start to end.
    #[inline]
    pub fn length(&self) -> f32 {
        let d = self.end - self.start;
        d.x.hypot(d.y)
    }

    /// Forward this segment to a surface.
    #[inline]
    pub fn draw_on<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        surface.draw_segment(self.start, self.end, self.thickness, self.color);
    }
}

/// Recording surface: every call is appended in order.
impl DrawingSurface for Vec<Segment> {
    #[inline]
    fn draw_segment(&mut self, start: Point, end: Point, thickness: f32, color: Rgba) {
        self.push(Segment::new(start, end, thickness, color));
    }
}
