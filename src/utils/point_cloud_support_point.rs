use crate::math::{Point, Real, Vector};
use crate::GeometryError;
use core::borrow::Borrow;

/// Computes the index of the support point of a cloud of points.
///
/// The support point is the point with the largest dot product with `dir`. Ties
/// are resolved in favor of the first point encountered.
#[inline]
pub fn point_cloud_support_point_id<P: Borrow<Point<Real>>>(
    dir: &Vector<Real>,
    points: &[P],
) -> Result<usize, GeometryError> {
    let (first, rest) = points
        .split_first()
        .ok_or(GeometryError::EmptyPointSet)?;
    let mut best_pt = 0;
    let mut best_dot = first.borrow().coords.dot(dir);

    for (i, p) in rest.iter().enumerate() {
        let dot = p.borrow().coords.dot(dir);

        if dot > best_dot {
            best_dot = dot;
            best_pt = i + 1;
        }
    }

    Ok(best_pt)
}

/// Computes the support point of a cloud of points.
#[inline]
pub fn point_cloud_support_point<P: Borrow<Point<Real>>>(
    dir: &Vector<Real>,
    points: &[P],
) -> Result<Point<Real>, GeometryError> {
    point_cloud_support_point_id(dir, points).map(|i| *points[i].borrow())
}
