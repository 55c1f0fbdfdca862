use na::Point3;
use oorandom::Rand32;
use rigid3d::bounding_volume::{BoundingSphere, BoundingVolume};

fn random_cloud(rng: &mut Rand32, len: usize) -> Vec<Point3<f32>> {
    let offset = Point3::new(
        rng.rand_float() * 20.0 - 10.0,
        rng.rand_float() * 20.0 - 10.0,
        rng.rand_float() * 20.0 - 10.0,
    );

    (0..len)
        .map(|_| {
            offset
                + na::Vector3::new(
                    rng.rand_float() * 2.0 - 1.0,
                    rng.rand_float() * 2.0 - 1.0,
                    rng.rand_float() * 2.0 - 1.0,
                )
        })
        .collect()
}

#[test]
fn sphere_contains_its_points() {
    let mut rng = Rand32::new(42);

    for len in 2..40 {
        let pts = random_cloud(&mut rng, len);
        let sphere = BoundingSphere::from_points(&pts);

        for pt in &pts {
            assert!(na::distance(sphere.center(), pt) <= sphere.radius() * (1.0 + 1.0e-5));
        }
    }
}

#[test]
fn overlap_is_symmetric_and_reflexive() {
    let mut rng = Rand32::new(42);

    for _ in 0..100 {
        let s1 = BoundingSphere::from_points(&random_cloud(&mut rng, 8));
        let s2 = BoundingSphere::from_points(&random_cloud(&mut rng, 8));

        assert_eq!(s1.overlaps(&s2), s2.overlaps(&s1));
        assert_eq!(s1.overlaps(&s2), s1.intersects(&s2));
        assert!(s1.overlaps(&s1));
    }
}

#[test]
fn merged_sphere_contains_both_spheres() {
    let mut rng = Rand32::new(42);

    for _ in 0..100 {
        let s1 = BoundingSphere::from_points(&random_cloud(&mut rng, 5));
        let s2 = BoundingSphere::from_points(&random_cloud(&mut rng, 5));
        let merged = s1.merged(&s2).loosened_by(1.0e-4);

        assert!(merged.contains(&s1));
        assert!(merged.contains(&s2));
        assert!(merged.overlaps(&s1) && merged.overlaps(&s2));
    }
}

trait Loosened {
    fn loosened_by(self, amount: f32) -> Self;
}

impl Loosened for BoundingSphere {
    fn loosened_by(mut self, amount: f32) -> Self {
        self.loosen(amount);
        self
    }
}
