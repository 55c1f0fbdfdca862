//! Definition of the triangle shape.

use crate::math::{Point, Real, UnitVector, Vector};

use na::{self, ComplexField, Unit};

/// A triangle shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

/// Description of the location of a point on a triangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TrianglePointLocation {
    /// The point lies on a vertex.
    OnVertex(u32),
    /// The point lies on an edge.
    ///
    /// The 0-st edge is the segment AB.
    /// The 1-st edge is the segment BC.
    /// The 2-nd edge is the segment AC.
    OnEdge(u32, [Real; 2]),
    /// The point lies on the triangle interior.
    OnFace([Real; 3]),
}

impl TrianglePointLocation {
    /// The barycentric coordinates corresponding to this point location.
    pub fn barycentric_coordinates(&self) -> [Real; 3] {
        let mut bcoords = [0.0; 3];

        match self {
            TrianglePointLocation::OnVertex(i) => bcoords[*i as usize] = 1.0,
            TrianglePointLocation::OnEdge(i, uv) => {
                let idx = Triangle::edge_ids(*i);
                bcoords[idx.0 as usize] = uv[0];
                bcoords[idx.1 as usize] = uv[1];
            }
            TrianglePointLocation::OnFace(uvw) => bcoords = *uvw,
        }

        bcoords
    }

    /// Returns `true` if the point is located on the relative interior of the triangle.
    pub fn is_on_face(&self) -> bool {
        matches!(self, TrianglePointLocation::OnFace(..))
    }
}

impl From<[Point<Real>; 3]> for Triangle {
    fn from(arr: [Point<Real>; 3]) -> Self {
        Triangle::new(arr[0], arr[1], arr[2])
    }
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// The three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// Returns the indices of the vertices of the i-th edge of this triangle.
    ///
    /// The 0-st edge is the segment AB.
    /// The 1-st edge is the segment BC.
    /// The 2-nd edge is the segment AC.
    pub fn edge_ids(i: u32) -> (u32, u32) {
        match i {
            0 => (0, 1),
            1 => (1, 2),
            2 => (0, 2),
            _ => panic!("Triangle edge index out of bounds (must be < 3)."),
        }
    }

    /// A vector normal of this triangle.
    ///
    /// The vector points such that it is collinear to `AB × AC` (where `×` denotes the cross
    /// product). Its norm is twice the area of the triangle.
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac)
    }

    /// The normal of this triangle assuming it is oriented ccw.
    ///
    /// Returns `None` if the triangle is degenerate.
    #[inline]
    pub fn normal(&self) -> Option<UnitVector<Real>> {
        Unit::try_new(self.scaled_normal(), crate::math::DEFAULT_EPSILON)
    }

    /// The area of this triangle.
    #[inline]
    pub fn area(&self) -> Real {
        // Kahan's formula.
        let mut lengths = [
            na::distance(&self.a, &self.b),
            na::distance(&self.b, &self.c),
            na::distance(&self.c, &self.a),
        ];
        lengths.sort_unstable_by(|x, y| y.total_cmp(x));
        let [a, b, c] = lengths;

        let sqr = (a + (b + c)) * (c - (a - b)) * (c + (a - b)) * (a + (b - c));

        // We take the max(0.0) because it can be slightly negative
        // because of numerical errors due to almost-degenerate triangles.
        ComplexField::sqrt(sqr.max(0.0)) * 0.25
    }

    /// The geometric center of this triangle.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        let third: Real = 1.0 / 3.0;
        Point::from((self.a.coords + self.b.coords + self.c.coords) * third)
    }

    /// Tests if this triangle is degenerate, i.e., if its three vertices are
    /// (almost) collinear.
    pub fn is_affinely_dependent(&self) -> bool {
        self.normal().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_of_right_triangle() {
        let tri = Triangle::new(
            Point::new(0.0, 0.0, 0.0),
            Point::new(3.0, 0.0, 0.0),
            Point::new(0.0, 4.0, 0.0),
        );
        assert_relative_eq!(tri.area(), 6.0, epsilon = 1.0e-5);
        assert_relative_eq!(tri.scaled_normal().norm(), 12.0);
    }

    #[test]
    fn collinear_triangle_is_degenerate() {
        let tri = Triangle::new(
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 1.0, 1.0),
            Point::new(2.0, 2.0, 2.0),
        );
        assert!(tri.is_affinely_dependent());
        assert_relative_eq!(tri.area(), 0.0, epsilon = 1.0e-5);
    }
}
