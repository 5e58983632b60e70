//! Implementation details of the `intersection_test` function.

pub use self::intersection_test::intersection_test;
pub use self::intersection_test_cone::{
    intersection_test_cone_cone_approximate, intersection_test_cone_hexahedron_approximate,
    intersection_test_cone_segment, intersection_test_cone_sphere,
    intersection_test_cone_swept_sphere_approximate,
};
pub use self::intersection_test_cuboid_segment::{
    intersection_test_cuboid_segment, intersection_test_segment_cuboid,
};
pub use self::intersection_test_cuboid_sphere::{
    intersection_test_cuboid_sphere, intersection_test_sphere_cuboid,
};
pub use self::intersection_test_ellipsoid::{
    intersection_test_ellipsoid_hexahedron, intersection_test_ellipsoid_segment,
};
pub use self::intersection_test_hexahedron_hexahedron::intersection_test_hexahedron_hexahedron;
pub use self::intersection_test_hollow_sphere_shape::{
    intersection_test_hollow_sphere_shape, intersection_test_shape_hollow_sphere,
};
pub use self::intersection_test_swept_sphere_hexahedron::{
    intersection_test_segment_hexahedron, intersection_test_swept_sphere_hexahedron,
};
pub use self::intersection_test_swept_sphere_swept_sphere::{
    intersection_test_segment_segment, intersection_test_swept_sphere_swept_sphere,
};

mod intersection_test_cone;
mod intersection_test_cuboid_segment;
mod intersection_test_cuboid_sphere;
mod intersection_test_ellipsoid;
mod intersection_test_hexahedron_hexahedron;
mod intersection_test_hollow_sphere_shape;
mod intersection_test_swept_sphere_hexahedron;
mod intersection_test_swept_sphere_swept_sphere;
