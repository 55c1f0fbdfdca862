use rigid3d::bounding_volume::Aabb;
use rigid3d::math::{Point, Vector};
use rigid3d::query::gjk::{self, GjkOptions, GjkResult};
use rigid3d::query::intersection_test;
use rigid3d::shape::ConvexPointSet;

fn main() {
    let cube = Aabb::from_half_extents(Point::origin(), Vector::repeat(0.5)).vertices();
    let tetra = [
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
    ];
    let far_tetra: Vec<_> = tetra.iter().map(|p| p + Vector::new(4.0, 0.0, 0.0)).collect();
    let options = GjkOptions::default();

    let intersecting = intersection_test(&cube, &tetra, &options).unwrap();
    let not_intersecting = !intersection_test(&cube, &far_tetra, &options).unwrap();

    assert!(intersecting);
    assert!(not_intersecting);

    let s1 = ConvexPointSet::new(&cube).unwrap();
    let s2 = ConvexPointSet::new(&far_tetra).unwrap();

    if let GjkResult::Separated(axis) = gjk::intersect(&s1, &s2, &options) {
        println!("Separating axis: {:?}", axis.into_inner());
    }
}
