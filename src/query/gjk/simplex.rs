//! The simplex maintained by the boolean GJK algorithm.

use crate::math::{Point, Real, Vector};
use crate::query::gjk::CSOPoint;
use crate::shape::Tetrahedron;
use arrayvec::ArrayVec;

/// A simplex of the Minkowski difference of two shapes.
///
/// Points are stored from the oldest to the most recently added one. The last point
/// is the one usually named `A` in the literature.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Simplex {
    /// A single point.
    Point([CSOPoint; 1]),
    /// A segment `[B, A]`.
    Segment([CSOPoint; 2]),
    /// A triangle `[C, B, A]`.
    Triangle([CSOPoint; 3]),
    /// A tetrahedron `[D, C, B, A]`.
    Tetrahedron([CSOPoint; 4]),
}

/// The result of a simplex reduction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SimplexReduction {
    /// The simplex contains the origin: the shapes intersect.
    ContainsOrigin,
    /// The simplex was reduced to its sub-simplex closest to the origin.
    Reduced {
        /// The reduced simplex.
        simplex: Simplex,
        /// The direction, not normalized, the next support point must be searched toward.
        direction: Vector<Real>,
    },
}

#[inline]
fn same_direction(a: &Vector<Real>, b: &Vector<Real>) -> bool {
    a.dot(b) > 0.0
}

impl Simplex {
    /// Initializes a simplex with a single point.
    pub fn new(pt: CSOPoint) -> Self {
        Simplex::Point([pt])
    }

    /// The number of points of this simplex.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        match self {
            Simplex::Point(_) => 1,
            Simplex::Segment(_) => 2,
            Simplex::Triangle(_) => 3,
            Simplex::Tetrahedron(_) => 4,
        }
    }

    /// The points of this simplex, from the oldest to the newest.
    pub fn points(&self) -> ArrayVec<CSOPoint, 4> {
        match self {
            Simplex::Point(pts) => pts.iter().copied().collect(),
            Simplex::Segment(pts) => pts.iter().copied().collect(),
            Simplex::Triangle(pts) => pts.iter().copied().collect(),
            Simplex::Tetrahedron(pts) => pts.iter().copied().collect(),
        }
    }

    /// The most recently added point.
    pub fn last(&self) -> &CSOPoint {
        match self {
            Simplex::Point([a]) => a,
            Simplex::Segment([_, a]) => a,
            Simplex::Triangle([_, _, a]) => a,
            Simplex::Tetrahedron([_, _, _, a]) => a,
        }
    }

    /// The largest dot product between `dir` and a point of this simplex.
    pub fn max_dot(&self, dir: &Vector<Real>) -> Real {
        self.points()
            .iter()
            .map(|pt| pt.point.coords.dot(dir))
            .fold(Real::NEG_INFINITY, Real::max)
    }

    /// Adds a point to this simplex.
    ///
    /// A tetrahedron can't be grown, so pushing on a tetrahedron drops its oldest point.
    #[must_use]
    pub fn push(self, pt: CSOPoint) -> Simplex {
        match self {
            Simplex::Point([a]) => Simplex::Segment([a, pt]),
            Simplex::Segment([b, a]) => Simplex::Triangle([b, a, pt]),
            Simplex::Triangle([c, b, a]) => Simplex::Tetrahedron([c, b, a, pt]),
            Simplex::Tetrahedron([_, c, b, a]) => {
                debug_assert!(false, "a tetrahedron must be reduced before pushing a point");
                Simplex::Tetrahedron([c, b, a, pt])
            }
        }
    }

    /// Reduces this simplex to the feature closest to the origin and computes the next
    /// search direction.
    #[must_use]
    pub fn reduce(self) -> SimplexReduction {
        match self {
            Simplex::Point([a]) => SimplexReduction::Reduced {
                simplex: self,
                direction: -a.point.coords,
            },
            Simplex::Segment([b, a]) => {
                let (simplex, direction) = reduce_segment(b, a);
                SimplexReduction::Reduced { simplex, direction }
            }
            Simplex::Triangle([c, b, a]) => {
                let (simplex, direction) = reduce_triangle(c, b, a);
                SimplexReduction::Reduced { simplex, direction }
            }
            Simplex::Tetrahedron([d, c, b, a]) => reduce_tetrahedron(d, c, b, a),
        }
    }
}

fn reduce_segment(b: CSOPoint, a: CSOPoint) -> (Simplex, Vector<Real>) {
    let ao = -a.point.coords;
    let ab = b - a;

    if same_direction(&ao, &ab) {
        // Perpendicular to AB, toward the origin.
        (Simplex::Segment([b, a]), ab.cross(&ao).cross(&ab))
    } else {
        (Simplex::Point([a]), ao)
    }
}

fn reduce_triangle(c: CSOPoint, b: CSOPoint, a: CSOPoint) -> (Simplex, Vector<Real>) {
    let ao = -a.point.coords;
    let ab = b - a;
    let ac = c - a;
    let abc = ab.cross(&ac);

    // Outward perpendiculars of the edges AC and AB, within the triangle plane.
    let ac_perp = abc.cross(&ac);
    let ab_perp = ab.cross(&abc);

    if same_direction(&ac_perp, &ao) {
        if same_direction(&ac, &ao) {
            (Simplex::Segment([c, a]), ac.cross(&ao).cross(&ac))
        } else {
            reduce_segment(b, a)
        }
    } else if same_direction(&ab_perp, &ao) {
        reduce_segment(b, a)
    } else if same_direction(&abc, &ao) {
        (Simplex::Triangle([c, b, a]), abc)
    } else {
        (Simplex::Triangle([b, c, a]), -abc)
    }
}

fn reduce_tetrahedron(d: CSOPoint, c: CSOPoint, b: CSOPoint, a: CSOPoint) -> SimplexReduction {
    let pts = [a, b, c, d];
    let tetra = Tetrahedron::new(a.point, b.point, c.point, d.point);
    let proj = tetra.project_point_with_face(&Point::origin());

    if proj.is_inside {
        return SimplexReduction::ContainsOrigin;
    }

    let [f0, f1, f2] = proj.face_ids;

    SimplexReduction::Reduced {
        simplex: Simplex::Triangle([pts[f2], pts[f1], pts[f0]]),
        direction: -proj.point.coords,
    }
}
