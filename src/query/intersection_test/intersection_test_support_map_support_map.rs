use crate::query::gjk::{self, GjkOptions, GjkResult};
use crate::shape::SupportMap;

/// Intersection test between support-mapped shapes expressed in the same frame.
///
/// An inconclusive GJK run is reported as a non-intersection.
pub fn intersection_test_support_map_support_map<G1, G2>(
    g1: &G1,
    g2: &G2,
    gjk_options: &GjkOptions,
) -> bool
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    match gjk::intersect(g1, g2, gjk_options) {
        GjkResult::Intersection => true,
        GjkResult::Separated(_) => false,
        GjkResult::Inconclusive => {
            log::debug!("inconclusive GJK run reported as a non-intersection");
            false
        }
    }
}
