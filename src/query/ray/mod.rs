//! Ray-casting related definitions and implementations.

#[doc(inline)]
pub use self::ray::Ray;
pub use self::ray_aabb::ray_toi_with_aabb;
pub use self::ray_ball::ray_toi_with_ball;
pub use self::ray_capsule::ray_toi_with_capsule;

#[doc(hidden)]
pub mod ray;
mod ray_aabb;
mod ray_ball;
mod ray_capsule;
