//! Shapes supported by solids3d.
//!
//! Every shape is an immutable value with a position, an orientation, and derived
//! properties computed once at construction. Modifications like
//! [`Shape::with_position`] or [`Shape::scale_by_dimension`] return new shapes.

#[macro_use]
mod shape_properties;

pub use self::capsule::Capsule;
pub use self::cone::Cone;
pub use self::convex_hexahedron::ConvexHexahedron;
pub use self::cuboid::Cuboid;
pub use self::cylinder::Cylinder;
pub use self::ellipsoid::Ellipsoid;
pub use self::frustum::Frustum;
pub use self::hollow_sphere::HollowSphere;
pub use self::line::Line;
pub use self::plane::Plane;
pub use self::segment::Segment;
#[doc(inline)]
pub use self::shape::{Shape, ShapeType};
pub use self::shape_error::ShapeError;
pub use self::single_point::SinglePoint;
pub use self::sphere::Sphere;
pub use self::torus::Torus;

mod capsule;
mod cone;
mod convex_hexahedron;
mod cuboid;
mod cylinder;
mod ellipsoid;
mod frustum;
mod hollow_sphere;
mod line;
mod plane;
mod segment;
#[doc(hidden)]
pub mod shape;
mod shape_error;
mod single_point;
mod sphere;
mod torus;
