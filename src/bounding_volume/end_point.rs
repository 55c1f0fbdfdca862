//! Projections of bounding boxes on a single axis, for sort-based broad phases.

use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::Real;
use crate::utils::SortedPair;
use crate::GeometryError;
use core::cmp::Ordering;
use ordered_float::OrderedFloat;

/// A coordinate axis.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The `x` axis.
    X,
    /// The `y` axis.
    Y,
    /// The `z` axis.
    Z,
}

impl Axis {
    /// The three axes, in coordinate order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// The coordinate index of this axis.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl TryFrom<usize> for Axis {
    type Error = GeometryError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Axis::ALL
            .get(index)
            .copied()
            .ok_or(GeometryError::InvalidAxis(index))
    }
}

/// The interval covered by a bounding box along one coordinate axis.
///
/// End points are ordered by `min` only. Two end points with the same `min` compare equal
/// even if they belong to different boxes.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug)]
pub struct EndPoint {
    /// The smallest coordinate of the box along the axis.
    pub min: Real,
    /// The largest coordinate of the box along the axis.
    pub max: Real,
    /// The index of the box in the caller's box list.
    pub aabb_id: usize,
}

impl EndPoint {
    /// Creates a new end point.
    pub fn new(min: Real, max: Real, aabb_id: usize) -> Self {
        Self { min, max, aabb_id }
    }

    /// The end point of `aabb` along `axis`.
    pub fn from_aabb(aabb_id: usize, aabb: &Aabb, axis: Axis) -> Self {
        let i = axis.index();
        Self::new(aabb.mins[i], aabb.maxs[i], aabb_id)
    }

    /// Do the intervals of `self` and `other` overlap? Touching intervals do.
    pub fn overlaps(&self, other: &EndPoint) -> bool {
        self.min <= other.max && other.min <= self.max
    }
}

impl PartialEq for EndPoint {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for EndPoint {}

impl PartialOrd for EndPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EndPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        OrderedFloat(self.min).cmp(&OrderedFloat(other.min))
    }
}

/// One-shot sort and sweep along `axis`, returning the pairs of overlapping boxes.
///
/// The end points are sorted by `min` then swept while maintaining the list of intervals
/// still open. Every pair found along the axis is then checked on all axes, so only boxes
/// that actually intersect are reported. Pairs are sorted by their first then second index.
pub fn sweep_and_prune(aabbs: &[Aabb], axis: Axis) -> Vec<SortedPair<usize>> {
    let mut end_points: Vec<_> = aabbs
        .iter()
        .enumerate()
        .map(|(i, aabb)| EndPoint::from_aabb(i, aabb, axis))
        .collect();
    end_points.sort();

    let mut active: Vec<EndPoint> = Vec::new();
    let mut pairs = Vec::new();

    for end_point in end_points {
        active.retain(|open| open.max >= end_point.min);

        for open in &active {
            if aabbs[open.aabb_id].intersects(&aabbs[end_point.aabb_id]) {
                pairs.push(SortedPair::new(open.aabb_id, end_point.aabb_id));
            }
        }

        active.push(end_point);
    }

    log::trace!(
        "sweep along axis {:?} found {} overlapping pairs among {} boxes",
        axis,
        pairs.len(),
        aabbs.len()
    );

    pairs.sort();
    pairs
}
