//! Non-persistent geometric queries.
//!
//! * [`query::intersection_test()`](intersection_test()) determines if the convex hulls
//!   of two point sets are intersecting, using the GJK algorithm of [`gjk`].
//!
//! Point projection can be achieved by importing traits:
//!
//! * [`query::PointQuery`](PointQuery) for point projection on triangles and tetrahedra.
//! * [`query::PointQueryWithLocation`](PointQueryWithLocation) to also retrieve the
//!   feature the projected point lies on.

pub use self::intersection_test::intersection_test;
pub use self::point::{
    PointProjection, PointQuery, PointQueryWithLocation, TetrahedronProjection,
};

pub mod gjk;
mod intersection_test;
pub mod point;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::intersection_test::*;
}
