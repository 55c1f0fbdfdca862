//! Bounding volumes.

#[doc(inline)]
pub use crate::bounding_volume::aabb::Aabb;
#[doc(inline)]
pub use crate::bounding_volume::bounding_sphere::BoundingSphere;
#[doc(inline)]
pub use crate::bounding_volume::bounding_volume::BoundingVolume;
pub use crate::bounding_volume::end_point::{sweep_and_prune, Axis, EndPoint};

#[doc(hidden)]
pub mod aabb;
#[doc(hidden)]
pub mod bounding_sphere;
#[doc(hidden)]
pub mod bounding_volume;
mod end_point;
