use crate::math::{Point, Real, Vector};
use crate::query::{PointProjection, PointQuery, PointQueryWithLocation};
use crate::shape::{Triangle, TrianglePointLocation};

#[inline]
fn compute_result(pt: &Point<Real>, proj: Point<Real>) -> PointProjection {
    PointProjection::new(relative_eq!(proj, *pt), proj)
}

impl PointQuery for Triangle {
    #[inline]
    fn project_point(&self, pt: &Point<Real>) -> PointProjection {
        self.project_point_and_get_location(pt).0
    }
}

impl PointQueryWithLocation for Triangle {
    type Location = TrianglePointLocation;

    #[inline]
    fn project_point_and_get_location(
        &self,
        pt: &Point<Real>,
    ) -> (PointProjection, Self::Location) {
        let a = self.a;
        let b = self.b;
        let c = self.c;

        let ab = b - a;
        let ac = c - a;
        let ap = pt - a;

        let ab_ap = ab.dot(&ap);
        let ac_ap = ac.dot(&ap);

        if ab_ap <= 0.0 && ac_ap <= 0.0 {
            // Voronoï region of `a`.
            return (compute_result(pt, a), TrianglePointLocation::OnVertex(0));
        }

        let bp = pt - b;
        let ab_bp = ab.dot(&bp);
        let ac_bp = ac.dot(&bp);

        if ab_bp >= 0.0 && ac_bp <= ab_bp {
            // Voronoï region of `b`.
            return (compute_result(pt, b), TrianglePointLocation::OnVertex(1));
        }

        let cp = pt - c;
        let ab_cp = ab.dot(&cp);
        let ac_cp = ac.dot(&cp);

        if ac_cp >= 0.0 && ab_cp <= ac_cp {
            // Voronoï region of `c`.
            return (compute_result(pt, c), TrianglePointLocation::OnVertex(2));
        }

        let bc = c - b;
        let n = ab.cross(&ac);

        let vc = n.dot(&ab.cross(&ap));
        if vc < 0.0 && ab_ap >= 0.0 && ab_bp <= 0.0 {
            // Voronoï region of `ab`.
            let v = ab_ap / ab.norm_squared();
            let res = a + ab * v;
            return (
                compute_result(pt, res),
                TrianglePointLocation::OnEdge(0, [1.0 - v, v]),
            );
        }

        let vb = -n.dot(&ac.cross(&cp));
        if vb < 0.0 && ac_ap >= 0.0 && ac_cp <= 0.0 {
            // Voronoï region of `ac`.
            let w = ac_ap / ac.norm_squared();
            let res = a + ac * w;
            return (
                compute_result(pt, res),
                TrianglePointLocation::OnEdge(2, [1.0 - w, w]),
            );
        }

        let va = n.dot(&bc.cross(&bp));
        if va < 0.0 && ac_bp - ab_bp >= 0.0 && ab_cp - ac_cp >= 0.0 {
            // Voronoï region of `bc`.
            let w = bc.dot(&bp) / bc.norm_squared();
            let res = b + bc * w;
            return (
                compute_result(pt, res),
                TrianglePointLocation::OnEdge(1, [1.0 - w, w]),
            );
        }

        // Voronoï region of the face.
        let denom = va + vb + vc;

        // NOTE: the denominator is zero when the triangle is degenerate.
        if denom != 0.0 && denom.is_finite() {
            let inv_denom = 1.0 / denom;
            let v = vb * inv_denom;
            let w = vc * inv_denom;
            let res = a + ab * v + ac * w;

            return (
                compute_result(pt, res),
                TrianglePointLocation::OnFace([1.0 - v - w, v, w]),
            );
        }

        project_on_closest_edge(pt, a, b, c)
    }
}

/// Projects `pt` on the closest of the three edges of a degenerate triangle.
fn project_on_closest_edge(
    pt: &Point<Real>,
    a: Point<Real>,
    b: Point<Real>,
    c: Point<Real>,
) -> (PointProjection, TrianglePointLocation) {
    // Clamped projection on the segment [p, q], returns the segment parameter.
    fn segment_param(pt: &Point<Real>, p: &Point<Real>, pq: &Vector<Real>) -> Real {
        let sqnorm = pq.norm_squared();

        if sqnorm == 0.0 {
            0.0
        } else {
            (pq.dot(&(pt - p)) / sqnorm).clamp(0.0, 1.0)
        }
    }

    let project_on_edge = |(id, p, q): (u32, Point<Real>, Point<Real>)| {
        let pq = q - p;
        let t = segment_param(pt, &p, &pq);
        let proj = p + pq * t;
        (na::distance_squared(pt, &proj), id, t, proj)
    };

    // The first edge wins ties.
    let [ab, bc, ac] = [(0, a, b), (1, b, c), (2, a, c)].map(project_on_edge);
    let (_, id, t, proj) = [bc, ac]
        .into_iter()
        .fold(ab, |best, edge| if edge.0 < best.0 { edge } else { best });

    let loc = if t == 0.0 {
        TrianglePointLocation::OnVertex(Triangle::edge_ids(id).0)
    } else if t == 1.0 {
        TrianglePointLocation::OnVertex(Triangle::edge_ids(id).1)
    } else {
        TrianglePointLocation::OnEdge(id, [1.0 - t, t])
    };

    (compute_result(pt, proj), loc)
}

#[cfg(test)]
mod test {
    use crate::math::{Point, Real};
    use crate::query::{PointQuery, PointQueryWithLocation};
    use crate::shape::{Triangle, TrianglePointLocation};

    fn triangle() -> Triangle {
        Triangle::new(
            Point::new(0.0, 0.0, 0.0),
            Point::new(2.0, 0.0, 0.0),
            Point::new(0.0, 2.0, 0.0),
        )
    }

    #[test]
    fn project_in_vertex_regions() {
        let tri = triangle();
        let (proj, loc) = tri.project_point_and_get_location(&Point::new(-1.0, -1.0, 3.0));
        assert_eq!(proj.point, tri.a);
        assert_eq!(loc, TrianglePointLocation::OnVertex(0));

        let (proj, loc) = tri.project_point_and_get_location(&Point::new(3.0, -0.5, 0.0));
        assert_eq!(proj.point, tri.b);
        assert_eq!(loc, TrianglePointLocation::OnVertex(1));

        let (proj, loc) = tri.project_point_and_get_location(&Point::new(-0.5, 4.0, -1.0));
        assert_eq!(proj.point, tri.c);
        assert_eq!(loc, TrianglePointLocation::OnVertex(2));
    }

    #[test]
    fn project_in_edge_regions() {
        let tri = triangle();
        let (proj, loc) = tri.project_point_and_get_location(&Point::new(1.0, -1.0, 1.0));
        assert_relative_eq!(proj.point, Point::new(1.0, 0.0, 0.0));
        assert!(matches!(loc, TrianglePointLocation::OnEdge(0, _)));

        let (proj, loc) = tri.project_point_and_get_location(&Point::new(2.0, 2.0, 0.0));
        assert_relative_eq!(proj.point, Point::new(1.0, 1.0, 0.0));
        assert!(matches!(loc, TrianglePointLocation::OnEdge(1, _)));

        let (proj, loc) = tri.project_point_and_get_location(&Point::new(-1.0, 1.0, 0.0));
        assert_relative_eq!(proj.point, Point::new(0.0, 1.0, 0.0));
        assert!(matches!(loc, TrianglePointLocation::OnEdge(2, _)));
    }

    #[test]
    fn project_in_face_region() {
        let tri = triangle();
        let (proj, loc) = tri.project_point_and_get_location(&Point::new(0.5, 0.5, -2.0));
        assert_relative_eq!(proj.point, Point::new(0.5, 0.5, 0.0));
        assert!(loc.is_on_face());

        let bcoords = loc.barycentric_coordinates();
        assert_relative_eq!(bcoords.iter().sum::<Real>(), 1.0, epsilon = 1.0e-6);
        assert_relative_eq!(tri.distance_to_point(&Point::new(0.5, 0.5, -2.0)), 2.0);
        assert!(tri.contains_point(&Point::new(0.5, 0.5, 0.0)));
    }

    #[test]
    fn project_on_degenerate_triangle() {
        let tri = Triangle::new(
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(2.0, 0.0, 0.0),
        );
        let (proj, loc) = tri.project_point_and_get_location(&Point::new(1.5, 1.0, 0.0));
        assert!(proj.point.coords.iter().all(|e| e.is_finite()));
        assert_relative_eq!(proj.point, Point::new(1.5, 0.0, 0.0));
        assert_eq!(loc, TrianglePointLocation::OnEdge(1, [0.5, 0.5]));

        let (proj, loc) = tri.project_point_and_get_location(&Point::new(-1.0, 0.0, 0.0));
        assert_eq!(proj.point, Point::origin());
        assert_eq!(loc, TrianglePointLocation::OnVertex(0));

        // All three vertices at the same place.
        let tri = Triangle::new(Point::origin(), Point::origin(), Point::origin());
        let proj = tri.project_point(&Point::new(1.0, 2.0, 3.0));
        assert_eq!(proj.point, Point::origin());
    }
}
