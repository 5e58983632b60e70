use crate::shape::{Cuboid, Sphere};

/// Intersection test between a cuboid and a sphere.
///
/// The sphere's center is projected on the cuboid in the cuboid's local frame.
#[inline]
pub fn intersection_test_cuboid_sphere(cuboid1: &Cuboid, sphere2: &Sphere) -> bool {
    let center = cuboid1.to_local_point(&sphere2.position());
    let proj = cuboid1.local_aabb().clamp_point(&center);
    let radius = sphere2.radius();

    na::distance_squared(&proj, &center) <= radius * radius
}

/// Intersection test between a sphere and a cuboid.
#[inline]
pub fn intersection_test_sphere_cuboid(sphere1: &Sphere, cuboid2: &Cuboid) -> bool {
    intersection_test_cuboid_sphere(cuboid2, sphere1)
}
