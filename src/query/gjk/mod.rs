//! The GJK algorithm for intersection tests between convex shapes.

pub use self::cso_point::CSOPoint;
pub use self::debug::{
    DebugRenderFlags, GjkDebugRenderer, NullDebugRenderer, DEBUG_RENDER_COLOR,
};
pub use self::gjk::{intersect, intersect_with_debug, GjkOptions, GjkResult};
pub use self::simplex::{Simplex, SimplexReduction};

mod cso_point;
mod debug;
mod gjk;
mod simplex;
