//! Impulse-driven rigid-bodies and the models they move.

pub use self::model::{Model, ModelHandle, ModelSet};
pub use self::rigid_body::{step, RigidBody, RigidBodyOptions};

mod model;
mod rigid_body;
