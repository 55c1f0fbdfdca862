//! Bounding sphere.

use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Point, Real, Vector};
use core::borrow::Borrow;
use num::Zero;

/// A Bounding Sphere.
///
/// The sphere built from a point set is the one circumscribing the point set `Aabb`. This is
/// looser than the minimal enclosing sphere but only needs a single pass over the points.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct BoundingSphere {
    /// The center of this bounding sphere.
    pub center: Point<Real>,
    /// The radius of this bounding sphere.
    pub radius: Real,
    /// The color this sphere is rendered with. Not used by any geometric query.
    pub color: [f32; 3],
}

impl Default for BoundingSphere {
    fn default() -> Self {
        Self::new(Point::origin(), 0.0)
    }
}

impl BoundingSphere {
    /// Creates a new bounding sphere.
    pub fn new(center: Point<Real>, radius: Real) -> BoundingSphere {
        BoundingSphere {
            center,
            radius,
            color: [1.0; 3],
        }
    }

    /// The bounding sphere circumscribing the `Aabb` of the given points.
    ///
    /// An empty point set gives a zero-radius sphere centered at the origin.
    pub fn from_points<P: Borrow<Point<Real>>>(pts: &[P]) -> BoundingSphere {
        Aabb::from_points(pts)
            .map(|aabb| Self::from_aabb(&aabb))
            .unwrap_or_default()
    }

    /// The bounding sphere circumscribing the given `Aabb`.
    pub fn from_aabb(aabb: &Aabb) -> BoundingSphere {
        let radius = na::distance(&aabb.mins, &aabb.maxs) * 0.5;
        BoundingSphere::new(aabb.center(), radius)
    }

    /// The bounding sphere center.
    #[inline]
    pub fn center(&self) -> &Point<Real> {
        &self.center
    }

    /// The bounding sphere radius.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// Tests if this bounding sphere strictly overlaps `other`.
    ///
    /// Spheres that only touch do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &BoundingSphere) -> bool {
        let distance_squared = na::distance_squared(&self.center, &other.center);
        let sum_radius = self.radius + other.radius;

        distance_squared < sum_radius * sum_radius
    }

    /// Sets the color this sphere is rendered with.
    #[inline]
    pub fn set_color(&mut self, color: [f32; 3]) {
        self.color = color;
    }

    /// Moves the center of this sphere by `delta`.
    #[inline]
    pub fn translate_by(&mut self, delta: &Vector<Real>) {
        self.center += delta;
    }
}

impl BoundingVolume for BoundingSphere {
    #[inline]
    fn center(&self) -> Point<Real> {
        *self.center()
    }

    #[inline]
    fn intersects(&self, other: &BoundingSphere) -> bool {
        self.overlaps(other)
    }

    #[inline]
    fn contains(&self, other: &BoundingSphere) -> bool {
        let delta_pos = other.center - self.center;
        let distance = delta_pos.norm();

        distance + other.radius <= self.radius
    }

    #[inline]
    fn merge(&mut self, other: &BoundingSphere) {
        let mut dir = *other.center() - *self.center();
        let norm = dir.normalize_mut();

        if norm.is_zero() {
            if other.radius > self.radius {
                self.radius = other.radius
            }
        } else {
            let s_center_dir = self.center.coords.dot(&dir);
            let o_center_dir = other.center.coords.dot(&dir);

            let right = if s_center_dir + self.radius > o_center_dir + other.radius {
                self.center + dir * self.radius
            } else {
                other.center + dir * other.radius
            };

            let left = if -s_center_dir + self.radius > -o_center_dir + other.radius {
                self.center - dir * self.radius
            } else {
                other.center - dir * other.radius
            };

            self.center = na::center(&left, &right);
            self.radius = na::distance(&right, &self.center);
        }
    }

    #[inline]
    fn merged(&self, other: &BoundingSphere) -> BoundingSphere {
        let mut res = *self;
        res.merge(other);
        res
    }

    #[inline]
    fn loosen(&mut self, amount: Real) {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        self.radius += amount
    }

    #[inline]
    fn tighten(&mut self, amount: Real) {
        assert!(amount >= 0.0, "The tightening margin must be positive.");
        assert!(amount <= self.radius, "The tightening margin is to large.");
        self.radius -= amount
    }
}
