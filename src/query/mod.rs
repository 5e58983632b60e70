//! Non-persistent geometric queries.
//!
//! # General cases
//! The most general methods provided by this module are:
//!
//! * [`query::intersection_test()`] to determine if two shapes are intersecting or not.
//! * [`query::sweep_contact_distance()`] to determine how far a capsule, seen as a sphere
//!   swept along its axis, travels before touching another shape.
//!
//! Point containment can be achieved by importing the [`query::PointQuery`] trait.
//!
//! # Specific cases
//! The functions exported by the `details` submodule are more specific versions of the ones described above.
//! For example `intersection_test_cone_segment` tests the intersection between two shapes known at
//! compile-time to be a cone and a segment.
//! The specific functions have the form `[operation]_[shape1]_[shape2]()` where:
//!
//! * `[operation]` can be `intersection_test`, `closest_points`, `clip`, `sat` or `sweep_contact`.
//! * `[shape1]` is the type of the first shape passed to the function, e.g., `cone`, or `hexahedron`.
//!   Can also identify a family of shapes, e.g., `swept_sphere` for spheres, capsules, and segments.
//! * `[shape2]` is the type of the second shape passed to the function.
//!
//! Functions with an `_approximate` suffix replace one of the shapes by a simpler one. Their
//! result may be wrong when the shapes are close to each other, see their documentation.
//!
//! [`query::intersection_test()`]: crate::query::intersection_test()
//! [`query::sweep_contact_distance()`]: crate::query::sweep_contact_distance()
//! [`query::PointQuery`]: crate::query::PointQuery

pub use self::error::Unsupported;
pub use self::intersection_test::intersection_test;
pub use self::point::PointQuery;
pub use self::ray::Ray;
pub use self::sweep_contact::sweep_contact_distance;

mod clip;
pub mod closest_points;
mod error;
mod intersection_test;
pub mod point;
mod ray;
pub mod sat;
mod sweep_contact;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::clip::*;
    pub use super::closest_points::*;
    pub use super::intersection_test::*;
    pub use super::ray::{ray_toi_with_aabb, ray_toi_with_ball, ray_toi_with_capsule};
    pub use super::sat::*;
    pub use super::sweep_contact::*;
}
