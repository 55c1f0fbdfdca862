use na::Point3;
use oorandom::Rand32;
use rigid3d::query::PointQuery;
use rigid3d::shape::{Tetrahedron, Triangle};

fn random_point(rng: &mut Rand32) -> Point3<f32> {
    Point3::new(
        rng.rand_float() * 6.0 - 3.0,
        rng.rand_float() * 6.0 - 3.0,
        rng.rand_float() * 6.0 - 3.0,
    )
}

#[test]
fn projection_lies_on_the_reported_face() {
    let mut rng = Rand32::new(99);
    let tetra = Tetrahedron::new(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(2.0, 0.0, 0.0),
        Point3::new(0.0, 2.0, 0.0),
        Point3::new(0.0, 0.0, 2.0),
    );

    for _ in 0..200 {
        let pt = random_point(&mut rng);
        let res = tetra.project_point_with_face(&pt);

        if res.is_inside {
            assert_eq!(res.point, pt);
        } else {
            let face = Triangle::from(res.face);
            assert!(face.distance_to_point(&res.point) <= 1.0e-5);
            // No vertex of the tetrahedron is closer than the projection.
            let dist = na::distance(&pt, &res.point);
            for v in tetra.vertices() {
                assert!(dist <= na::distance(&pt, &v) + 1.0e-5);
            }
        }
    }
}
