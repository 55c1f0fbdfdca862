use crate::bounding_volume::Aabb;
use crate::mass_properties::MassProperties;
use crate::math::{AngularInertia, Real, Vector};

impl MassProperties {
    pub(crate) fn cuboid_volume_unit_inertia(half_extents: Vector<Real>) -> (Real, Vector<Real>) {
        let volume = half_extents.x * half_extents.y * half_extents.z * 8.0;
        let ix = (half_extents.x * half_extents.x) / 3.0;
        let iy = (half_extents.y * half_extents.y) / 3.0;
        let iz = (half_extents.z * half_extents.z) / 3.0;

        (volume, Vector::new(iy + iz, ix + iz, ix + iy))
    }

    /// Computes the mass properties of the solid box `aabb`.
    ///
    /// The center of mass is the box center. The tensor is diagonal, the box being
    /// aligned with the coordinate axes.
    pub fn from_aabb(density: Real, aabb: &Aabb) -> Self {
        let (vol, unit_i) = Self::cuboid_volume_unit_inertia(aabb.half_extents());
        let mass = vol * density;
        Self::new(
            aabb.center(),
            mass,
            AngularInertia::from_diagonal(&(unit_i * mass)),
        )
    }
}
