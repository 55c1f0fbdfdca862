//! The boolean Gilbert-Johnson-Keerthi intersection test.
//!
//! GJK operates on the Minkowski difference (or Configuration Space Obstacle) of two
//! convex shapes: the shapes intersect if, and only if, this difference contains the
//! origin. The algorithm grows a simplex of support points of the difference toward the
//! origin until the simplex encloses it, or until it becomes clear that no support point
//! can get past the origin.
//!
//! Both shapes must be expressed in the same coordinate frame.

use na::Unit;

use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::gjk::{
    CSOPoint, DebugRenderFlags, GjkDebugRenderer, NullDebugRenderer, Simplex, SimplexReduction,
    DEBUG_RENDER_COLOR,
};
use crate::shape::SupportMap;

/// Tuning parameters of the GJK intersection test.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct GjkOptions {
    /// The maximum number of simplex evolutions before giving up.
    pub max_iterations: usize,
    /// A new support point must get past the current simplex by more than this
    /// distance along the search direction, otherwise the shapes are deemed separated.
    pub progress_tolerance: Real,
    /// The first search direction. Need not be normalized. `+X` is used if it is zero.
    pub initial_direction: Vector<Real>,
}

impl Default for GjkOptions {
    fn default() -> Self {
        Self {
            max_iterations: 30,
            progress_tolerance: 0.05,
            initial_direction: Vector::x(),
        }
    }
}

/// Results of the GJK intersection test.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GjkResult {
    /// The Minkowski difference of the shapes contains the origin.
    Intersection,
    /// The shapes are separated.
    ///
    /// The axis is the last search direction. It points roughly from the first shape toward
    /// the second one. It is an exact separating axis only if the shapes are separated
    /// by more than the progress tolerance along it.
    Separated(Unit<Vector<Real>>),
    /// The iteration budget was exhausted before reaching a conclusion.
    Inconclusive,
}

impl GjkResult {
    /// Is this an [`GjkResult::Intersection`]?
    ///
    /// An inconclusive result is not considered as an intersection.
    #[inline]
    pub fn intersects(&self) -> bool {
        matches!(self, GjkResult::Intersection)
    }
}

/// Tests whether two convex shapes intersect.
pub fn intersect<G1, G2>(g1: &G1, g2: &G2, options: &GjkOptions) -> GjkResult
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    intersect_with_debug(g1, g2, options, &mut NullDebugRenderer)
}

/// Tests whether two convex shapes intersect, and reports the progress of the
/// algorithm to a debug renderer.
///
/// The initial support points and the origin are emitted before the first iteration.
/// The final simplex is emitted as a polyline once the result is known.
pub fn intersect_with_debug<G1, G2>(
    g1: &G1,
    g2: &G2,
    options: &GjkOptions,
    renderer: &mut dyn GjkDebugRenderer,
) -> GjkResult
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let flags = renderer.flags();
    let dir = Unit::try_new(options.initial_direction, DEFAULT_EPSILON)
        .filter(|dir| dir.iter().all(|e| e.is_finite()))
        .unwrap_or_else(Vector::x_axis);
    let first = CSOPoint::from_shapes_toward(g1, g2, &dir);

    if flags.contains(DebugRenderFlags::SUPPORT_POINTS) {
        for pt in [&first.point, &first.orig1, &first.orig2] {
            renderer.draw_point(DebugRenderFlags::SUPPORT_POINTS, pt, DEBUG_RENDER_COLOR);
        }
    }

    if flags.contains(DebugRenderFlags::ORIGIN) {
        renderer.draw_point(
            DebugRenderFlags::ORIGIN,
            &Point::origin(),
            DEBUG_RENDER_COLOR,
        );
    }

    let mut simplex = Simplex::new(first);
    let result = evolve_simplex(g1, g2, options, &mut simplex);

    if flags.contains(DebugRenderFlags::SIMPLEX) {
        let pts = simplex.points();
        for seg in pts.windows(2) {
            renderer.draw_line(
                DebugRenderFlags::SIMPLEX,
                &seg[0].point,
                &seg[1].point,
                DEBUG_RENDER_COLOR,
            );
        }
    }

    result
}

fn evolve_simplex<G1, G2>(
    g1: &G1,
    g2: &G2,
    options: &GjkOptions,
    simplex: &mut Simplex,
) -> GjkResult
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    for niter in 0..options.max_iterations {
        let direction = match simplex.reduce() {
            SimplexReduction::ContainsOrigin => return GjkResult::Intersection,
            SimplexReduction::Reduced {
                simplex: reduced,
                direction,
            } => {
                *simplex = reduced;
                direction
            }
        };

        let dir = if direction.iter().all(|e| e.is_finite()) {
            Unit::try_new(direction, DEFAULT_EPSILON)
        } else {
            None
        };

        let Some(dir) = dir else {
            // The origin lies on the simplex.
            log::debug!(
                "GJK: degenerate search direction {:?} after {} iterations",
                direction,
                niter
            );
            return GjkResult::Intersection;
        };

        let support = CSOPoint::from_shapes_toward(g1, g2, &dir);
        let reach = support.point.coords.dot(&dir);

        if reach < 0.0 {
            return GjkResult::Separated(dir);
        }

        if reach <= simplex.max_dot(&dir) + options.progress_tolerance {
            return GjkResult::Separated(dir);
        }

        *simplex = simplex.push(support);
        log::trace!("GJK iteration {}: {} simplex points", niter, simplex.len());
    }

    log::debug!(
        "GJK: no conclusion after {} iterations",
        options.max_iterations
    );
    GjkResult::Inconclusive
}
