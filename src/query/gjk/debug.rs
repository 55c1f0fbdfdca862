use crate::math::{Point, Real};

bitflags::bitflags! {
    /// Selects which elements of a GJK run are sent to a [`GjkDebugRenderer`].
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
    pub struct DebugRenderFlags: u32 {
        /// The initial support points of both shapes, and their difference.
        const SUPPORT_POINTS = 1 << 0;
        /// The origin of the configuration space.
        const ORIGIN = 1 << 1;
        /// The simplex reached when the algorithm terminates, as a polyline.
        const SIMPLEX = 1 << 2;
    }
}

impl Default for DebugRenderFlags {
    fn default() -> Self {
        DebugRenderFlags::all()
    }
}

/// Color of the debug elements.
pub const DEBUG_RENDER_COLOR: [f32; 3] = [1.0, 0.0, 0.0];

/// A sink for debug geometry emitted by [`intersect_with_debug`](super::intersect_with_debug).
pub trait GjkDebugRenderer {
    /// The elements this renderer wants to receive.
    fn flags(&self) -> DebugRenderFlags;

    /// Draws a point.
    fn draw_point(&mut self, object: DebugRenderFlags, point: &Point<Real>, color: [f32; 3]);

    /// Draws a segment between `a` and `b`.
    fn draw_line(
        &mut self,
        object: DebugRenderFlags,
        a: &Point<Real>,
        b: &Point<Real>,
        color: [f32; 3],
    );
}

/// A debug renderer that draws nothing.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullDebugRenderer;

impl GjkDebugRenderer for NullDebugRenderer {
    fn flags(&self) -> DebugRenderFlags {
        DebugRenderFlags::empty()
    }

    fn draw_point(&mut self, _: DebugRenderFlags, _: &Point<Real>, _: [f32; 3]) {}

    fn draw_line(&mut self, _: DebugRenderFlags, _: &Point<Real>, _: &Point<Real>, _: [f32; 3]) {}
}
