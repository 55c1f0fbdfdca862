//! Mass properties (mass, inertia, center-of-mass) of shapes.

pub use self::mass_properties::{MassEstimator, MassProperties};

mod mass_properties;
mod mass_properties_aabb;
mod mass_properties_trimesh3d;

/// Free functions for some special-cases of mass-properties computation.
pub mod details {
    pub use super::mass_properties_trimesh3d::{
        tetrahedron_unit_inertia_tensor_wrt_point, trimesh_signed_volume_and_center_of_mass,
    };
}
