//! Point inclusion and projection.

#[doc(inline)]
pub use self::point_query::{PointProjection, PointQuery, PointQueryWithLocation};
pub use self::point_tetrahedron::TetrahedronProjection;

#[doc(hidden)]
pub mod point_query;
mod point_tetrahedron;
mod point_triangle;
