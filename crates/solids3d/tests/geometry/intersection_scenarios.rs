use na::{Point3, UnitQuaternion, Vector3};
use solids3d::query::details::intersection_test_hexahedron_hexahedron;
use solids3d::query::PointQuery;
use solids3d::shape::{
    Capsule, Cone, Cuboid, Cylinder, Ellipsoid, Frustum, HollowSphere, Line, Shape, Sphere, Torus,
};
use std::f32::consts::FRAC_PI_2;

#[test]
fn unit_spheres() {
    let a = Shape::from(Sphere::new(Point3::origin(), 1.0));
    let near = Shape::from(Sphere::new(Point3::new(1.5, 0.0, 0.0), 1.0));
    let far = Shape::from(Sphere::new(Point3::new(2.5, 0.0, 0.0), 1.0));

    assert!(a.intersects(&near));
    assert!(!a.intersects(&far));
}

#[test]
fn capsule_point_containment() {
    let capsule = Capsule::new(Point3::origin(), Vector3::new(0.0, 10.0, 0.0), 1.0);

    assert!(capsule.is_point_within(&Point3::origin()));
    assert!(capsule.is_point_within(&Point3::new(0.0, 5.9, 0.0)));
    assert!(!capsule.is_point_within(&Point3::new(5.0, 0.0, 0.0)));
    assert!(!capsule.is_point_within(&Point3::new(0.0, 6.1, 0.0)));
}

#[test]
fn cuboid_corner_inside_frustum() {
    let cuboid = Cuboid::new(Point3::new(9.0, 9.0, 11.0), Vector3::repeat(4.0));
    let frustum = Frustum::new(
        Point3::origin(),
        Vector3::new(0.0, 0.0, 10.0),
        FRAC_PI_2,
        1.0,
        1.0,
    );

    // The corner (7, 7, 9) is strictly inside of the frustum.
    assert!(frustum
        .hexahedron()
        .contains_point(&cuboid.corners()[0]));
    assert!(intersection_test_hexahedron_hexahedron(
        cuboid.hexahedron(),
        frustum.hexahedron()
    ));
    assert!(Shape::from(cuboid).intersects(&frustum.into()));
    assert!(Shape::from(frustum).intersects(&cuboid.into()));
}

#[test]
fn cuboid_outside_frustum_sides() {
    let frustum = Frustum::new(
        Point3::origin(),
        Vector3::new(0.0, 0.0, 10.0),
        FRAC_PI_2,
        1.0,
        1.0,
    );
    // Next to the frustum's right plane `x = z`, within its bounding sphere.
    let cuboid = Cuboid::new(Point3::new(8.0, 0.0, 4.0), Vector3::repeat(2.0));

    assert!(!Shape::from(cuboid).intersects(&frustum.into()));
    assert!(!Shape::from(frustum).intersects(&cuboid.into()));
}

#[test]
fn rotated_cuboids() {
    let a = Cuboid::new(Point3::origin(), Vector3::new(4.0, 1.0, 1.0));
    let b = Cuboid::new(Point3::new(0.0, 1.5, 0.0), Vector3::new(4.0, 1.0, 1.0));
    let crossed = b.with_rotation(UnitQuaternion::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2));

    // The rotated cuboid extends down to `y = -0.5`.
    assert!(!Shape::from(a).intersects(&b.into()));
    assert!(Shape::from(a).intersects(&crossed.into()));
}

#[test]
fn line_through_shapes() {
    let line = Shape::from(Line::between(
        Point3::new(-10.0, 0.5, 0.0),
        Point3::new(10.0, 0.5, 0.0),
    ));

    let shapes = [
        Shape::from(Sphere::new(Point3::origin(), 1.0)),
        Shape::from(Cuboid::new(Point3::origin(), Vector3::repeat(2.0))),
        Shape::from(Ellipsoid::new(Point3::origin(), Vector3::new(3.0, 1.0, 1.0))),
        Shape::from(Cone::new(Point3::origin(), Vector3::new(0.0, 2.0, 0.0), 1.0)),
        Shape::from(Capsule::new(Point3::origin(), Vector3::new(0.0, 0.0, 5.0), 1.0)),
    ];

    for shape in &shapes {
        assert!(line.intersects(shape), "{:?}", shape);
        let above = shape.with_position(Point3::new(0.0, 3.0, 0.0));
        assert!(!line.intersects(&above), "{:?}", above);
    }
}

#[test]
fn hollow_sphere_cavity() {
    let shell = Shape::from(HollowSphere::new(Point3::origin(), 5.0, 4.0).unwrap());
    let inside = Shape::from(Sphere::new(Point3::new(1.0, 0.0, 0.0), 1.0));
    let crossing = Shape::from(Sphere::new(Point3::new(4.0, 0.0, 0.0), 0.5));
    let outside = Shape::from(Sphere::new(Point3::new(7.0, 0.0, 0.0), 1.0));

    assert!(!shell.intersects(&inside));
    assert!(!inside.intersects(&shell));
    assert!(shell.intersects(&crossing));
    assert!(!shell.intersects(&outside));
}

#[test]
fn torus_and_cylinder_are_approximated_by_capsules() {
    let torus = Shape::from(Torus::new(Point3::origin(), 3.0, 1.0).unwrap());
    let in_the_hole = Shape::from(Sphere::new(Point3::origin(), 0.5));
    assert!(torus.intersects(&in_the_hole));

    let cylinder = Shape::from(Cylinder::new(
        Point3::origin(),
        Vector3::new(0.0, 4.0, 0.0),
        1.0,
    ));
    // Close to the cylinder's rim, inside of the capsule's cap.
    let above_rim = Shape::from(Sphere::new(Point3::new(0.0, 2.6, 0.0), 0.5));
    assert!(cylinder.intersects(&above_rim));
}

#[test]
fn cones_meeting_at_their_apexes() {
    let a = Shape::from(Cone::new(
        Point3::new(0.0, -1.0, 0.0),
        Vector3::new(0.0, -2.0, 0.0),
        1.0,
    ));
    let b = Shape::from(Cone::new(
        Point3::new(0.0, 1.0, 0.0),
        Vector3::new(0.0, 2.0, 0.0),
        1.0,
    ));
    let c = b.with_position(Point3::new(0.0, 1.5, 0.0));

    assert!(a.intersects(&b));
    assert!(!a.intersects(&c));
}
