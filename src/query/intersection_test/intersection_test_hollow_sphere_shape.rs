use crate::query::intersection_test;
use crate::shape::{HollowSphere, Shape};

/// Intersection test between a hollow sphere and any shape.
///
/// The shape must intersect the outer sphere, and must not lie strictly inside of the cavity.
/// The cavity test is performed with the shape's bounding sphere, so a shape lying in the
/// cavity without its bounding sphere fitting in it is reported as intersecting.
pub fn intersection_test_hollow_sphere_shape(hollow_sphere1: &HollowSphere, shape2: &Shape) -> bool {
    intersection_test(&hollow_sphere1.outer_sphere().into(), shape2)
        && !hollow_sphere1
            .cavity()
            .strictly_contains(&shape2.bounding_sphere())
}

/// Intersection test between any shape and a hollow sphere.
#[inline]
pub fn intersection_test_shape_hollow_sphere(shape1: &Shape, hollow_sphere2: &HollowSphere) -> bool {
    intersection_test_hollow_sphere_shape(hollow_sphere2, shape1)
}
