//! Definition of the tetrahedron shape.

use crate::math::{Matrix, Point, Real};
use crate::shape::Triangle;

/// A tetrahedron with 4 vertices.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tetrahedron {
    /// The tetrahedron first point.
    pub a: Point<Real>,
    /// The tetrahedron second point.
    pub b: Point<Real>,
    /// The tetrahedron third point.
    pub c: Point<Real>,
    /// The tetrahedron fourth point.
    pub d: Point<Real>,
}

/// Logical description of the location of a point on a tetrahedron.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TetrahedronPointLocation {
    /// The point lies on a vertex.
    OnVertex(u32),
    /// The point lies on an edge.
    ///
    /// The 0-st edge is the segment AB.
    /// The 1-st edge is the segment AC.
    /// The 2-nd edge is the segment AD.
    /// The 3-rd edge is the segment BC.
    /// The 4-th edge is the segment BD.
    /// The 5-th edge is the segment CD.
    OnEdge(u32, [Real; 2]),
    /// The point lies on a triangular face interior.
    ///
    /// See [`Tetrahedron::face_ids`] for the face numbering.
    OnFace(u32, [Real; 3]),
    /// The point lies inside of the tetrahedron.
    OnSolid,
}

impl TetrahedronPointLocation {
    /// The barycentric coordinates corresponding to this point location.
    ///
    /// Returns `None` if the location is `TetrahedronPointLocation::OnSolid`.
    pub fn barycentric_coordinates(&self) -> Option<[Real; 4]> {
        let mut bcoords = [0.0; 4];

        match self {
            TetrahedronPointLocation::OnVertex(i) => bcoords[*i as usize] = 1.0,
            TetrahedronPointLocation::OnEdge(i, uv) => {
                let idx = Tetrahedron::edge_ids(*i);
                bcoords[idx.0 as usize] = uv[0];
                bcoords[idx.1 as usize] = uv[1];
            }
            TetrahedronPointLocation::OnFace(i, uvw) => {
                let idx = Tetrahedron::face_ids(*i);
                bcoords[idx[0]] = uvw[0];
                bcoords[idx[1]] = uvw[1];
                bcoords[idx[2]] = uvw[2];
            }
            TetrahedronPointLocation::OnSolid => {
                return None;
            }
        }

        Some(bcoords)
    }
}

impl Tetrahedron {
    /// Creates a tetrahedron from four points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>, d: Point<Real>) -> Tetrahedron {
        Tetrahedron { a, b, c, d }
    }

    /// The four vertices of this tetrahedron.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Returns the i-th face of this tetrahedron.
    ///
    /// See [`Tetrahedron::face_ids`] for the face numbering.
    pub fn face(&self, i: usize) -> Triangle {
        let pts = self.vertices();
        let ids = Self::face_ids(i as u32);
        Triangle::new(pts[ids[0]], pts[ids[1]], pts[ids[2]])
    }

    /// Returns the indices of the vertices of the i-th face of this tetrahedron.
    ///
    /// The 0-th face is the triangle ABC.
    /// The 1-st face is the triangle ACD.
    /// The 2-nd face is the triangle ADB.
    /// The 3-rd face is the triangle BDC.
    ///
    /// If the tetrahedron has a negative signed volume, all the face normals point
    /// outward. Otherwise they all point inward.
    pub fn face_ids(i: u32) -> [usize; 3] {
        match i {
            0 => [0, 1, 2],
            1 => [0, 2, 3],
            2 => [0, 3, 1],
            3 => [1, 3, 2],
            _ => panic!("Tetrahedron face index out of bounds (must be < 4)."),
        }
    }

    /// Returns the indices of the vertices of the i-th edge of this tetrahedron.
    ///
    /// The 0-st edge is the segment AB.
    /// The 1-st edge is the segment AC.
    /// The 2-nd edge is the segment AD.
    /// The 3-rd edge is the segment BC.
    /// The 4-th edge is the segment BD.
    /// The 5-th edge is the segment CD.
    pub fn edge_ids(i: u32) -> (u32, u32) {
        match i {
            0 => (0, 1),
            1 => (0, 2),
            2 => (0, 3),
            3 => (1, 2),
            4 => (1, 3),
            5 => (2, 3),
            _ => panic!("Tetrahedron edge index out of bounds (must be < 6)."),
        }
    }

    /// Computes the barycentric coordinates of the given point in the coordinate system of this tetrahedron.
    ///
    /// Returns `None` if this tetrahedron is degenerate.
    pub fn barycentric_coordinates(&self, p: &Point<Real>) -> Option<[Real; 4]> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        let ad = self.d - self.a;
        let m = Matrix::from_columns(&[ab, ac, ad]);

        m.try_inverse().map(|im| {
            let bcoords = im * (p - self.a);
            [
                1.0 - bcoords.x - bcoords.y - bcoords.z,
                bcoords.x,
                bcoords.y,
                bcoords.z,
            ]
        })
    }

    /// Computes the volume of this tetrahedron.
    #[inline]
    pub fn volume(&self) -> Real {
        self.signed_volume().abs()
    }

    /// Computes the signed volume of this tetrahedron.
    ///
    /// If it is positive, `d` is on the half-space pointed by the normal of the oriented triangle
    /// `(a, b, c)`.
    #[inline]
    pub fn signed_volume(&self) -> Real {
        let mat = Matrix::from_columns(&[self.b - self.a, self.c - self.a, self.d - self.a]);
        mat.determinant() / 6.0
    }

    /// Computes the center of this tetrahedron.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        Point::from((self.a.coords + self.b.coords + self.c.coords + self.d.coords) * 0.25)
    }
}
