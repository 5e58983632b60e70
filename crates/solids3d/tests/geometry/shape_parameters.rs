use na::{Point3, UnitQuaternion, Vector3};
use solids3d::query::PointQuery;
use solids3d::shape::{
    Cone, Cuboid, Ellipsoid, Frustum, HollowSphere, Line, Shape, ShapeError, ShapeType, Torus,
};

#[test]
fn torus_radii_are_validated() {
    assert_eq!(
        Torus::new(Point3::origin(), 1.0, 3.0),
        Err(ShapeError::InvalidTorusRadii {
            major: 1.0,
            minor: 3.0
        })
    );

    let torus = Torus::new(Point3::origin(), 3.0, 1.0).unwrap();
    assert_eq!(torus.major_radius(), 3.0);
    assert_eq!(torus.minor_radius(), 1.0);
    assert_eq!(torus.containing_radius(), 4.0);
}

#[test]
fn hollow_sphere_radii_are_validated() {
    assert!(matches!(
        HollowSphere::new(Point3::origin(), 1.0, 2.0),
        Err(ShapeError::InvalidHollowSphereRadii { .. })
    ));

    let shell = HollowSphere::new(Point3::origin(), 2.0, 1.0).unwrap();
    assert!(!shell.is_point_within(&Point3::origin()));
    assert!(shell.is_point_within(&Point3::new(0.0, 1.5, 0.0)));
}

#[test]
fn axis_defined_shapes_report_their_parameters() {
    let cone = Cone::new(Point3::new(0.0, 1.0, 0.0), Vector3::new(0.0, 4.0, 0.0), 2.0);
    assert_eq!(cone.axis(), Vector3::new(0.0, 4.0, 0.0));
    assert_eq!(cone.radius(), 2.0);
    assert_eq!(cone.apex(), Point3::new(0.0, -1.0, 0.0));
    assert_eq!(cone.base_center(), Point3::new(0.0, 3.0, 0.0));
    assert_eq!(cone.rotation(), UnitQuaternion::identity());

    let line = Line::between(Point3::origin(), Point3::new(3.0, 4.0, 0.0));
    assert_eq!(line.position(), Point3::new(1.5, 2.0, 0.0));
    assert!(relative_eq!(line.length(), 5.0));
    assert_eq!(line.volume(), 0.0);
}

#[test]
fn frustum_near_distance_is_clamped() {
    let frustum = Frustum::new(
        Point3::origin(),
        Vector3::new(0.0, 0.0, 10.0),
        std::f32::consts::FRAC_PI_2,
        1.0,
        20.0,
    );

    assert_eq!(frustum.near_distance(), 10.0);
    assert_eq!(frustum.far_distance(), 10.0);
    assert_eq!(frustum.volume(), 0.0);
    assert_eq!(frustum.position(), frustum.apex());
}

#[test]
fn rotations_are_kept_by_oriented_shapes() {
    let rot = UnitQuaternion::from_euler_angles(0.3, 0.2, 0.1);
    let cuboid = Cuboid::new(Point3::origin(), Vector3::new(2.0, 4.0, 6.0)).with_rotation(rot);
    let ellipsoid = Ellipsoid::new(Point3::origin(), Vector3::new(1.0, 2.0, 3.0)).with_rotation(rot);

    assert_eq!(cuboid.rotation(), rot);
    assert_eq!(cuboid.extents(), Vector3::new(2.0, 4.0, 6.0));
    assert_eq!(ellipsoid.rotation(), rot);
    assert_eq!(ellipsoid.semi_axes(), Vector3::new(1.0, 2.0, 3.0));
    assert!(relative_eq!(
        Shape::from(cuboid).volume(),
        48.0,
        max_relative = 1.0e-5
    ));
}

#[test]
fn highest_and_lowest_points_bound_vertical_extent() {
    let cuboid = Cuboid::new(Point3::new(0.0, 5.0, 0.0), Vector3::new(2.0, 4.0, 2.0));
    assert!(relative_eq!(cuboid.highest_point().y, 7.0));
    assert!(relative_eq!(cuboid.lowest_point().y, 3.0));

    let shape = Shape::from(Torus::new(Point3::origin(), 3.0, 1.0).unwrap());
    assert_eq!(shape.shape_type(), ShapeType::Torus);
    assert!(relative_eq!(shape.highest_point().y, 1.0));
    assert!(relative_eq!(shape.lowest_point().y, -1.0));
}
