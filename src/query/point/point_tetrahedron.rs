use crate::math::{Point, Real};
use crate::query::{PointProjection, PointQuery, PointQueryWithLocation};
use crate::shape::{Tetrahedron, TetrahedronPointLocation, Triangle, TrianglePointLocation};

/// The projection of a point on a tetrahedron, together with the face it lies on.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TetrahedronProjection {
    /// The projected point. Equal to the query point if it lies inside of the tetrahedron.
    pub point: Point<Real>,
    /// Whether or not the query point was inside of (or on the boundary of) the tetrahedron.
    pub is_inside: bool,
    /// The feature of the tetrahedron the projected point lies on.
    pub location: TetrahedronPointLocation,
    /// The vertices of the face the projected point lies on.
    ///
    /// This is the face `ABC` if the query point is inside of the tetrahedron.
    pub face: [Point<Real>; 3],
    /// The indices of the vertices of `face` in the tetrahedron.
    pub face_ids: [usize; 3],
}

impl TetrahedronProjection {
    /// The generic projection information of this tetrahedron projection.
    pub fn projection(&self) -> PointProjection {
        PointProjection::new(self.is_inside, self.point)
    }
}

fn edge_id(i: usize, j: usize) -> u32 {
    match (i.min(j), i.max(j)) {
        (0, 1) => 0,
        (0, 2) => 1,
        (0, 3) => 2,
        (1, 2) => 3,
        (1, 3) => 4,
        _ => 5,
    }
}

fn tetrahedron_location(
    face_id: u32,
    ids: [usize; 3],
    loc: TrianglePointLocation,
) -> TetrahedronPointLocation {
    match loc {
        TrianglePointLocation::OnVertex(i) => {
            TetrahedronPointLocation::OnVertex(ids[i as usize] as u32)
        }
        TrianglePointLocation::OnEdge(e, uv) => {
            let (i, j) = Triangle::edge_ids(e);
            let (i, j) = (ids[i as usize], ids[j as usize]);

            if i < j {
                TetrahedronPointLocation::OnEdge(edge_id(i, j), uv)
            } else {
                TetrahedronPointLocation::OnEdge(edge_id(i, j), [uv[1], uv[0]])
            }
        }
        TrianglePointLocation::OnFace(uvw) => TetrahedronPointLocation::OnFace(face_id, uvw),
    }
}

impl Tetrahedron {
    /// Projects a point on this tetrahedron, seen as a solid.
    ///
    /// A face is considered for projection if the query point and the vertex opposite to
    /// that face lie strictly on different sides of its plane, or if the vertex opposite
    /// to that face lies on its plane (flat tetrahedron). The closest projection among
    /// these faces is returned, the first face winning ties. If no face is considered,
    /// the query point is inside and is returned unchanged.
    pub fn project_point_with_face(&self, pt: &Point<Real>) -> TetrahedronProjection {
        let pts = self.vertices();
        let mut best: Option<(Real, u32, PointProjection, TrianglePointLocation)> = None;

        for i in 0..4 {
            let ids = Self::face_ids(i);
            // The face ids and the opposite vertex id sum to 0 + 1 + 2 + 3.
            let opposite = pts[6 - ids[0] - ids[1] - ids[2]];
            let face = self.face(i as usize);
            let n = face.scaled_normal();
            let pt_side = n.dot(&(pt - face.a));
            let opposite_side = n.dot(&(opposite - face.a));

            if opposite_side != 0.0 && pt_side * opposite_side >= 0.0 {
                continue;
            }

            let (proj, loc) = face.project_point_and_get_location(pt);
            let dist = na::distance_squared(pt, &proj.point);

            if best.map_or(true, |(best_dist, ..)| dist < best_dist) {
                best = Some((dist, i, proj, loc));
            }
        }

        match best {
            Some((_, face_id, proj, loc)) => {
                let face_ids = Self::face_ids(face_id);
                TetrahedronProjection {
                    point: proj.point,
                    is_inside: proj.point == *pt,
                    location: tetrahedron_location(face_id, face_ids, loc),
                    face: face_ids.map(|k| pts[k]),
                    face_ids,
                }
            }
            None => {
                let face_ids = Self::face_ids(0);
                TetrahedronProjection {
                    point: *pt,
                    is_inside: true,
                    location: TetrahedronPointLocation::OnSolid,
                    face: face_ids.map(|k| pts[k]),
                    face_ids,
                }
            }
        }
    }
}

impl PointQuery for Tetrahedron {
    #[inline]
    fn project_point(&self, pt: &Point<Real>) -> PointProjection {
        self.project_point_with_face(pt).projection()
    }
}

impl PointQueryWithLocation for Tetrahedron {
    type Location = TetrahedronPointLocation;

    #[inline]
    fn project_point_and_get_location(
        &self,
        pt: &Point<Real>,
    ) -> (PointProjection, Self::Location) {
        let res = self.project_point_with_face(pt);
        (res.projection(), res.location)
    }
}
