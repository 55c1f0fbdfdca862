use crate::math::{AngularInertia, Point, Real, DEFAULT_EPSILON};
use crate::utils;
use approx::{AbsDiffEq, RelativeEq};
use core::fmt;
use num::Zero;

/// The geometric approximation a mass estimate is computed from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum MassEstimator {
    /// The mass is estimated as the one of the solid axis-aligned box enclosing the mesh.
    #[default]
    Aabb,
    /// The mass is estimated as the one of the solid polyhedron bounded by the mesh.
    Polyhedral,
}

impl fmt::Display for MassEstimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MassEstimator::Aabb => f.pad("AABB"),
            MassEstimator::Polyhedral => f.pad("polyhedral"),
        }
    }
}

/// The local mass properties of a rigid-body.
///
/// Unlike the principal-axes representation often used by physics engines, the full
/// angular inertia tensor is kept so that tensors of several parts can be summed.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct MassProperties {
    /// The center of mass.
    pub local_com: Point<Real>,
    /// The mass.
    pub mass: Real,
    /// The angular inertia tensor, expressed relative to `local_com`.
    pub inertia: AngularInertia<Real>,
}

impl MassProperties {
    /// Initializes the mass properties with the given center-of-mass, mass, and angular inertia tensor.
    pub fn new(local_com: Point<Real>, mass: Real, inertia: AngularInertia<Real>) -> Self {
        Self {
            local_com,
            mass,
            inertia,
        }
    }

    /// The mass properties of an object with no mass.
    pub fn zero() -> Self {
        Self::new(Point::origin(), 0.0, AngularInertia::zeros())
    }

    /// Returns `true` if this object has no mass.
    pub fn is_zero(&self) -> bool {
        self.mass.is_zero()
    }

    /// The inverse of the mass, or zero if the mass is zero.
    pub fn inv_mass(&self) -> Real {
        utils::inv(self.mass)
    }

    /// The inverse of the angular inertia tensor.
    ///
    /// Returns `None` if the tensor is singular, e.g., for flat or massless objects.
    pub fn inverse_inertia(&self) -> Option<AngularInertia<Real>> {
        let scale = self.inertia.amax();

        if scale <= DEFAULT_EPSILON || !scale.is_finite() {
            return None;
        }

        // Check the determinant relative to the tensor magnitude.
        if (self.inertia / scale).determinant().abs() <= DEFAULT_EPSILON {
            return None;
        }

        self.inertia.try_inverse()
    }
}

impl Default for MassProperties {
    fn default() -> Self {
        Self::zero()
    }
}

impl AbsDiffEq for MassProperties {
    type Epsilon = Real;

    fn default_epsilon() -> Self::Epsilon {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.local_com.abs_diff_eq(&other.local_com, epsilon)
            && self.mass.abs_diff_eq(&other.mass, epsilon)
            && self.inertia.abs_diff_eq(&other.inertia, epsilon)
    }
}

impl RelativeEq for MassProperties {
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.local_com
            .relative_eq(&other.local_com, epsilon, max_relative)
            && self.mass.relative_eq(&other.mass, epsilon, max_relative)
            && self
                .inertia
                .relative_eq(&other.inertia, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Matrix, Vector};

    #[test]
    fn inverse_of_diagonal_inertia() {
        let props = MassProperties::new(
            Point::origin(),
            2.0,
            Matrix::from_diagonal(&Vector::new(2.0, 4.0, 8.0)),
        );
        let inv = props.inverse_inertia().unwrap();
        assert_relative_eq!(inv, Matrix::from_diagonal(&Vector::new(0.5, 0.25, 0.125)));
        assert_relative_eq!(props.inv_mass(), 0.5);
    }

    #[test]
    fn singular_inertia_has_no_inverse() {
        assert!(MassProperties::zero().inverse_inertia().is_none());

        let flat = MassProperties::new(
            Point::origin(),
            1.0,
            Matrix::from_diagonal(&Vector::new(1.0, 1.0, 0.0)),
        );
        assert!(flat.inverse_inertia().is_none());
        assert_eq!(MassProperties::zero().inv_mass(), 0.0);
    }

    #[test]
    fn estimator_display() {
        assert_eq!(MassEstimator::Aabb.to_string(), "AABB");
        assert_eq!(MassEstimator::Polyhedral.to_string(), "polyhedral");
    }
}
