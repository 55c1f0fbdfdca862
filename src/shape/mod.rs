//! Shapes supported by rigid3d.

pub use self::convex_point_set::ConvexPointSet;
pub use self::mesh::Mesh;
#[doc(inline)]
pub use self::support_map::SupportMap;
pub use self::tetrahedron::{Tetrahedron, TetrahedronPointLocation};
pub use self::triangle::{Triangle, TrianglePointLocation};
pub use self::vertex::Vertex;

mod convex_point_set;
mod mesh;
#[doc(hidden)]
pub mod support_map;
mod tetrahedron;
mod triangle;
mod vertex;
