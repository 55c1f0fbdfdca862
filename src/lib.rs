/*!
rigid3d
========

**rigid3d** is a 3-dimensional narrow-phase collision detection and rigid-body
dynamics library written with the rust programming language.

It provides:

* a boolean GJK intersection test between convex point sets ([`query::gjk`]),
* point projections on triangles and tetrahedra ([`query::point`]),
* bounding spheres, axis-aligned bounding boxes and sweep end-points ([`bounding_volume`]),
* mass properties estimated from triangle meshes ([`mass_properties`]),
* impulse-driven rigid bodies bound to renderable models ([`dynamics`]).

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod dynamics;
pub mod mass_properties;
pub mod query;
pub mod shape;
pub mod utils;

mod error;

pub use self::error::GeometryError;

/// Aliases for the mathematical types used throughout this crate.
pub mod math {
    pub use na::{
        Isometry3, Matrix3, Matrix4, Point2, Point3, Quaternion, Translation3, UnitQuaternion,
        UnitVector3, Vector3,
    };

    /// The scalar type used throughout this crate.
    pub type Real = f32;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The matrix type.
    pub use Matrix3 as Matrix;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;

    /// The rotation type.
    pub type Rotation<N> = UnitQuaternion<N>;

    /// The angular inertia of a rigid body, expressed as a full tensor.
    pub type AngularInertia<N> = Matrix3<N>;
}
