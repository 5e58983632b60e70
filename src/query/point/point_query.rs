use crate::math::{Point, Real};
use crate::shape::Shape;

/// Trait of objects that can be tested for point inclusion.
///
/// Every shape is a closed set: points on its boundary are inside of it.
pub trait PointQuery {
    /// Tests if the given point is inside of `self` or on its boundary.
    ///
    /// The point is expressed in world-space.
    fn is_point_within(&self, pt: &Point<Real>) -> bool;
}

impl PointQuery for Shape {
    fn is_point_within(&self, pt: &Point<Real>) -> bool {
        match self {
            Shape::SinglePoint(s) => s.is_point_within(pt),
            Shape::Line(s) => s.is_point_within(pt),
            Shape::Sphere(s) => s.is_point_within(pt),
            Shape::HollowSphere(s) => s.is_point_within(pt),
            Shape::Capsule(s) => s.is_point_within(pt),
            Shape::Cylinder(s) => s.is_point_within(pt),
            Shape::Cone(s) => s.is_point_within(pt),
            Shape::Cuboid(s) => s.is_point_within(pt),
            Shape::Ellipsoid(s) => s.is_point_within(pt),
            Shape::Frustum(s) => s.is_point_within(pt),
            Shape::Torus(s) => s.is_point_within(pt),
        }
    }
}
