use rigid3d::bounding_volume::BoundingVolume;
use rigid3d::dynamics::{self, Model, ModelSet, RigidBody, RigidBodyOptions};
use rigid3d::mass_properties::MassEstimator;
use rigid3d::math::Vector;
use rigid3d::shape::Mesh;

fn main() {
    let mut models = ModelSet::new();
    let crate_mesh = Mesh::cuboid(Vector::new(0.5, 0.5, 0.5));
    let plank_mesh = Mesh::cuboid(Vector::new(2.0, 0.1, 0.5));

    let handle1 = models.insert(Model::new(vec![crate_mesh]));
    let handle2 = models.insert(
        Model::new(vec![plank_mesh]).with_translation(Vector::new(0.0, 3.0, 0.0)),
    );

    let options = RigidBodyOptions::default();
    let mut bodies = vec![
        RigidBody::new(&models, handle1, options).unwrap(),
        RigidBody::new(&models, handle2, options).unwrap(),
    ];

    // Push the plank down and spin it.
    bodies[1].apply_impulse(Vector::new(0.0, -20.0, 0.0), Vector::new(1.5, 0.0, 0.0), 0.1);

    let estimator = MassEstimator::Polyhedral;
    let dt = 1.0 / 60.0;

    for frame in 0..120 {
        dynamics::step(&mut bodies, &mut models, dt, estimator).unwrap();

        let (sphere1, sphere2) = (bodies[0].bounding_sphere(), bodies[1].bounding_sphere());
        if sphere1.intersects(sphere2) {
            println!(
                "frame {}: bounding spheres overlap, kinetic energy {:.4}",
                frame,
                bodies[1].kinetic_energy(estimator)
            );
            break;
        }
    }

    let plank = models.get(handle2).unwrap();
    println!(
        "plank position: {}, rotation: {:?}",
        plank.position(),
        plank.rotation().euler_angles()
    );
}
