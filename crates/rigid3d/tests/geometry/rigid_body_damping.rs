use na::Vector3;
use rigid3d::dynamics::{self, Model, ModelSet, RigidBody, RigidBodyOptions};
use rigid3d::mass_properties::MassEstimator;
use rigid3d::shape::Mesh;
use rigid3d::GeometryError;

fn spawn(models: &mut ModelSet, x: f32) -> RigidBody {
    let mesh = Mesh::cuboid(Vector3::new(0.5, 1.0, 1.5));
    let handle = models.insert(Model::new(vec![mesh]).with_translation(Vector3::new(x, 0.0, 0.0)));
    RigidBody::new(models, handle, RigidBodyOptions::default()).unwrap()
}

#[test]
fn kinetic_energy_decays_under_damping() {
    let mut models = ModelSet::new();
    let mut bodies = vec![spawn(&mut models, 0.0), spawn(&mut models, 5.0)];

    bodies[0].apply_impulse(Vector3::new(0.0, 3.0, 0.0), Vector3::new(0.5, 0.0, 0.0), 0.1);
    bodies[1].apply_impulse(Vector3::new(0.0, 0.0, -2.0), Vector3::new(0.0, 1.0, 0.0), 0.1);

    for estimator in [MassEstimator::Aabb, MassEstimator::Polyhedral] {
        let mut energies: Vec<_> = bodies.iter().map(|b| b.kinetic_energy(estimator)).collect();

        for _ in 0..30 {
            dynamics::step(&mut bodies, &mut models, 1.0 / 60.0, estimator).unwrap();

            for (body, energy) in bodies.iter().zip(energies.iter_mut()) {
                let new_energy = body.kinetic_energy(estimator);
                assert!(new_energy < *energy);
                *energy = new_energy;
            }
        }
    }
}

#[test]
fn bodies_follow_their_models() {
    let mut models = ModelSet::new();
    let mut body = spawn(&mut models, 2.0);
    let start = body.center_of_mass(MassEstimator::Polyhedral);

    body.apply_impulse(Vector3::new(6.0, 0.0, 0.0), Vector3::zeros(), 1.0);
    for _ in 0..10 {
        body.update(&mut models, 0.1, MassEstimator::Polyhedral).unwrap();
    }

    let model = models.get(body.model()).unwrap();
    let travelled = body.center_of_mass(MassEstimator::Polyhedral) - start;

    assert!(travelled.x > 0.0);
    approx::assert_relative_eq!(model.translation().x - 2.0, travelled.x, epsilon = 1.0e-5);
    approx::assert_relative_eq!(
        body.bounding_sphere().center().x - 2.0,
        travelled.x,
        epsilon = 1.0e-5
    );
}

#[test]
fn stepping_fails_on_a_removed_model() {
    let mut models = ModelSet::new();
    let mut bodies = vec![spawn(&mut models, 0.0)];
    let _ = models.remove(bodies[0].model());

    assert_eq!(
        dynamics::step(&mut bodies, &mut models, 0.1, MassEstimator::Aabb),
        Err(GeometryError::MissingModel)
    );
}
