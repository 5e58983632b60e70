//! Point inclusion.

#[doc(inline)]
pub use self::point_query::PointQuery;

mod point_capsule;
mod point_cone;
mod point_cuboid;
mod point_cylinder;
mod point_ellipsoid;
mod point_frustum;
#[doc(hidden)]
pub mod point_query;
mod point_sphere;
mod point_torus;
