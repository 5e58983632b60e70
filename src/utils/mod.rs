//! Various unsorted geometrical and logical operators.

pub use self::axis::{axis_direction, orthogonal_up, rotation_between_axes};
pub(crate) use self::wops::WBasis;

mod axis;
mod wops;
