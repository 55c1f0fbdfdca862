use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;
use core::ops::Sub;
use na::Unit;

/// A point of a Configuration-Space Obstacle.
///
/// A Configuration-Space Obstacle (CSO) is the result of the
/// Minkowski Difference of two solids. In other words, each of its
/// points correspond to the difference of two point, each belonging
/// to a different solid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CSOPoint {
    /// The point on the CSO. This is equal to `self.orig1 - self.orig2`.
    pub point: Point<Real>,
    /// The original point on the first shape used to compute `self.point`.
    pub orig1: Point<Real>,
    /// The original point on the second shape used to compute `self.point`.
    pub orig2: Point<Real>,
}

impl CSOPoint {
    /// Initializes a CSO point with `orig1 - orig2`.
    pub fn new(orig1: Point<Real>, orig2: Point<Real>) -> Self {
        let point = Point::from(orig1 - orig2);
        CSOPoint {
            point,
            orig1,
            orig2,
        }
    }

    /// Computes the support point of the CSO of `g1` and `g2` toward the unit direction `dir`.
    ///
    /// Both shapes are expected to be expressed in the same coordinate frame.
    pub fn from_shapes_toward<G1: ?Sized, G2: ?Sized>(
        g1: &G1,
        g2: &G2,
        dir: &Unit<Vector<Real>>,
    ) -> Self
    where
        G1: SupportMap,
        G2: SupportMap,
    {
        let sp1 = g1.local_support_point_toward(dir);
        let sp2 = g2.local_support_point_toward(&-*dir);

        CSOPoint::new(sp1, sp2)
    }
}

impl Sub<CSOPoint> for CSOPoint {
    type Output = Vector<Real>;

    #[inline]
    fn sub(self, rhs: CSOPoint) -> Vector<Real> {
        self.point - rhs.point
    }
}
