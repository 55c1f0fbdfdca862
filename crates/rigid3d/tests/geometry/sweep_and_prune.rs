use na::{Point3, Vector3};
use oorandom::Rand32;
use rigid3d::bounding_volume::{sweep_and_prune, Aabb, Axis, BoundingVolume};

fn random_boxes(rng: &mut Rand32, len: usize) -> Vec<Aabb> {
    (0..len)
        .map(|_| {
            let center = Point3::new(
                rng.rand_float() * 10.0,
                rng.rand_float() * 10.0,
                rng.rand_float() * 10.0,
            );
            let half_extents = Vector3::new(
                rng.rand_float() + 0.1,
                rng.rand_float() + 0.1,
                rng.rand_float() + 0.1,
            );
            Aabb::from_half_extents(center, half_extents)
        })
        .collect()
}

fn brute_force(aabbs: &[Aabb]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();

    for i in 0..aabbs.len() {
        for j in i + 1..aabbs.len() {
            if aabbs[i].intersects(&aabbs[j]) {
                pairs.push((i, j));
            }
        }
    }

    pairs
}

#[test]
fn sweep_and_prune_matches_brute_force_on_every_axis() {
    let mut rng = Rand32::new(1234);

    for _ in 0..20 {
        let aabbs = random_boxes(&mut rng, 30);
        let expected = brute_force(&aabbs);

        for axis in Axis::ALL {
            let pairs: Vec<_> = sweep_and_prune(&aabbs, axis)
                .into_iter()
                .map(|pair| pair.as_tuple())
                .collect();
            assert_eq!(pairs, expected);
        }
    }
}

#[test]
fn sweep_and_prune_on_no_box() {
    assert!(sweep_and_prune(&[], Axis::Z).is_empty());
}
