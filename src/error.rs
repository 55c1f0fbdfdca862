use crate::mass_properties::MassEstimator;

/// Errors raised when the input geometry cannot be turned into a meaningful result.
///
/// These are reported eagerly instead of letting `NaN` flow into a simulation.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// A support point was requested from a set that contains no point.
    #[error("cannot compute the support point of an empty point set")]
    EmptyPointSet,
    /// A rigid-body was built from a model that has no mesh.
    #[error("the model does not contain any mesh")]
    EmptyModel,
    /// The model handle does not refer to any model of the model set.
    #[error("the model handle does not refer to a live model")]
    MissingModel,
    /// A triangle references a vertex that does not exist.
    #[error("triangle {triangle} references the out-of-bounds vertex {index}")]
    IndexOutOfBounds {
        /// The index of the faulty triangle.
        triangle: usize,
        /// The faulty vertex index.
        index: u32,
    },
    /// A coordinate axis index is not `0`, `1`, or `2`.
    #[error("{0} is not a valid coordinate axis index")]
    InvalidAxis(usize),
    /// The inertia tensor computed with the given estimator is not invertible.
    #[error("the {0} inertia tensor is not invertible")]
    SingularInertiaTensor(MassEstimator),
    /// The mass computed with the given estimator is zero, negative, or not finite.
    #[error("the {0} mass is not strictly positive")]
    NonPositiveMass(MassEstimator),
}
