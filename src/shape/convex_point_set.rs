use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;
use crate::GeometryError;
use core::borrow::Borrow;

/// A borrowed, non-empty set of points seen as the convex shape they span.
///
/// The points do not need to be in convex position: interior points are never
/// returned as support points, except on ties.
#[derive(Copy, Clone, Debug)]
pub struct ConvexPointSet<'a, P = Point<Real>> {
    first: &'a P,
    rest: &'a [P],
}

impl<'a, P: Borrow<Point<Real>>> ConvexPointSet<'a, P> {
    /// Wraps a point slice, failing if it is empty.
    pub fn new(points: &'a [P]) -> Result<Self, GeometryError> {
        let (first, rest) = points
            .split_first()
            .ok_or(GeometryError::EmptyPointSet)?;
        Ok(Self { first, rest })
    }

    /// Wraps a point slice known to be non-empty.
    ///
    /// Panics if `points` is empty.
    pub(crate) fn new_unchecked(points: &'a [P]) -> Self {
        Self {
            first: &points[0],
            rest: &points[1..],
        }
    }

    /// The number of points of this set. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.rest.len() + 1
    }

    /// Iterates through the points of this set.
    pub fn points(&self) -> impl Iterator<Item = &'a Point<Real>> + 'a {
        let rest = self.rest;
        core::iter::once(self.first.borrow()).chain(rest.iter().map(|p| p.borrow()))
    }

    /// The index of the support point of this set along `dir`.
    ///
    /// Ties are resolved in favor of the first point.
    pub fn support_point_id(&self, dir: &Vector<Real>) -> usize {
        let mut best_pt = 0;
        let mut best_dot = self.first.borrow().coords.dot(dir);

        for (i, p) in self.rest.iter().enumerate() {
            let dot = p.borrow().coords.dot(dir);

            if dot > best_dot {
                best_dot = dot;
                best_pt = i + 1;
            }
        }

        best_pt
    }
}

impl<P: Borrow<Point<Real>>> SupportMap for ConvexPointSet<'_, P> {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        match self.support_point_id(dir) {
            0 => *self.first.borrow(),
            i => *self.rest[i - 1].borrow(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Isometry;
    use crate::shape::Vertex;
    use crate::utils;

    #[test]
    fn empty_point_set_is_rejected() {
        let pts: [Point<Real>; 0] = [];
        assert_eq!(
            ConvexPointSet::new(&pts[..]).err(),
            Some(GeometryError::EmptyPointSet)
        );
    }

    #[test]
    fn support_matches_point_cloud_support() {
        let vertices = [
            Vertex::new(Point::new(1.0, 2.0, 3.0)),
            Vertex::new(Point::new(-1.0, 0.5, 0.0)),
            Vertex::new(Point::new(0.0, -4.0, 2.0)),
            Vertex::new(Point::new(2.0, 2.0, -3.0)),
        ];
        let set = ConvexPointSet::new(&vertices[..]).unwrap();
        assert_eq!(set.len(), 4);
        assert_eq!(set.points().count(), 4);

        for dir in [Vector::x(), -Vector::y(), Vector::z(), Vector::new(1.0, 1.0, -1.0)] {
            assert_eq!(
                Ok(set.local_support_point(&dir)),
                utils::point_cloud_support_point(&dir, &vertices)
            );
        }
    }

    #[test]
    fn transformed_support_point() {
        let pts = [Point::new(1.0, 0.0, 0.0), Point::new(-1.0, 0.0, 0.0)];
        let set = ConvexPointSet::new(&pts[..]).unwrap();
        let pos = Isometry::translation(0.0, 5.0, 0.0);
        assert_eq!(
            set.support_point(&pos, &Vector::x()),
            Point::new(1.0, 5.0, 0.0)
        );
    }
}
