//! Various unsorted geometrical and logical operators.

pub use self::center::center;
pub(crate) use self::inv::inv;
pub use self::point_cloud_support_point::{
    point_cloud_support_point, point_cloud_support_point_id,
};
pub use self::sorted_pair::SortedPair;

mod center;
mod inv;
mod point_cloud_support_point;
mod sorted_pair;
