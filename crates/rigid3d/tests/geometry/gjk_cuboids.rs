use na::{Point3, UnitQuaternion, Vector3};
use rigid3d::bounding_volume::Aabb;
use rigid3d::dynamics::Model;
use rigid3d::query::gjk::{self, GjkOptions, GjkResult};
use rigid3d::query::intersection_test;
use rigid3d::shape::{ConvexPointSet, Mesh};

fn unit_cube(center: Point3<f32>) -> [Point3<f32>; 8] {
    Aabb::from_half_extents(center, Vector3::repeat(0.5)).vertices()
}

#[test]
fn overlapping_unit_cubes() {
    let options = GjkOptions::default();
    let cube1 = unit_cube(Point3::origin());
    let cube2 = unit_cube(Point3::new(0.5, 0.0, 0.0));
    let cube3 = unit_cube(Point3::new(3.0, 0.0, 0.0));

    assert_eq!(intersection_test(&cube1, &cube2, &options), Ok(true));
    assert_eq!(intersection_test(&cube1, &cube3, &options), Ok(false));
}

#[test]
fn every_point_set_intersects_itself() {
    let options = GjkOptions::default();
    let mut rng = oorandom::Rand32::new(7);

    for _ in 0..50 {
        let pts: Vec<_> = (0..12)
            .map(|_| {
                Point3::new(
                    rng.rand_float() * 4.0 - 2.0,
                    rng.rand_float() * 4.0 - 2.0,
                    rng.rand_float() * 4.0 - 2.0,
                )
            })
            .collect();
        assert_eq!(intersection_test(&pts, &pts, &options), Ok(true));
    }
}

#[test]
fn separated_cubes_report_a_separating_axis() {
    let cube1 = unit_cube(Point3::origin());
    let cube2 = unit_cube(Point3::new(0.0, 0.0, -5.0));
    let s1 = ConvexPointSet::new(&cube1).unwrap();
    let s2 = ConvexPointSet::new(&cube2).unwrap();

    match gjk::intersect(&s1, &s2, &GjkOptions::default()) {
        GjkResult::Separated(axis) => {
            // All the points of the first cube are behind all the points of the second one.
            let max1 = cube1.iter().map(|p| p.coords.dot(&axis)).fold(f32::MIN, f32::max);
            let min2 = cube2.iter().map(|p| p.coords.dot(&axis)).fold(f32::MAX, f32::min);
            assert!(max1 < min2);
        }
        res => panic!("unexpected GJK result: {:?}", res),
    }
}

#[test]
fn rotated_models_intersect_in_world_space() {
    let mesh = Mesh::cuboid(Vector3::new(2.0, 0.1, 0.1));
    let mut model1 = Model::new(vec![mesh.clone()]);
    let mut model2 = Model::new(vec![mesh]).with_translation(Vector3::new(0.0, 1.5, 0.0));
    let options = GjkOptions::default();

    // Two long thin bars, one above the other.
    assert_eq!(
        intersection_test(&model1.world_vertices(), &model2.world_vertices(), &options),
        Ok(false)
    );

    // Standing the second one up makes it cross the first one.
    model2.rotate(UnitQuaternion::from_axis_angle(
        &Vector3::z_axis(),
        core::f32::consts::FRAC_PI_2,
    ));
    assert_eq!(
        intersection_test(&model1.world_vertices(), &model2.world_vertices(), &options),
        Ok(true)
    );

    model1.translate(&Vector3::new(0.0, 0.0, 3.0));
    assert_eq!(
        intersection_test(&model1.world_vertices(), &model2.world_vertices(), &options),
        Ok(false)
    );
}
