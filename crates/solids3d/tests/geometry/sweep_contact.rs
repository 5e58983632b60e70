use na::{Point3, Vector3};
use solids3d::query::{sweep_contact_distance, Unsupported};
use solids3d::shape::{
    Capsule, Cone, Cuboid, Ellipsoid, Frustum, HollowSphere, Shape, Sphere,
};

fn sweep(radius: f32) -> Capsule {
    Capsule::between(Point3::origin(), Point3::new(0.0, 0.0, 10.0), radius)
}

#[test]
fn sweep_into_sphere_closes_the_gap() {
    let sphere = Shape::from(Sphere::new(Point3::new(0.0, 0.0, 6.0), 2.0));
    let distance = sweep_contact_distance(&sweep(1.0), &sphere).unwrap();

    // 6 - (1 + 2)
    assert!(relative_eq!(distance.unwrap(), 3.0, epsilon = 1.0e-5));
}

#[test]
fn overlapping_start_is_an_immediate_contact() {
    let sphere = Shape::from(Sphere::new(Point3::new(0.0, 0.0, 2.0), 2.0));
    assert_eq!(sweep_contact_distance(&sweep(1.0), &sphere), Ok(Some(0.0)));

    let cuboid = Shape::from(Cuboid::new(Point3::new(0.5, 0.0, 0.0), Vector3::repeat(1.0)));
    assert_eq!(sweep_contact_distance(&sweep(1.0), &cuboid), Ok(Some(0.0)));
}

#[test]
fn sweep_missing_the_target() {
    let aside = Shape::from(Sphere::new(Point3::new(5.0, 0.0, 5.0), 1.0));
    let beyond = Shape::from(Sphere::new(Point3::new(0.0, 0.0, 14.0), 1.0));

    assert_eq!(sweep_contact_distance(&sweep(1.0), &aside), Ok(None));
    assert_eq!(sweep_contact_distance(&sweep(1.0), &beyond), Ok(None));
}

#[test]
fn sweep_into_cuboid_face() {
    let cuboid = Shape::from(Cuboid::new(Point3::new(0.0, 0.0, 8.0), Vector3::repeat(2.0)));
    let distance = sweep_contact_distance(&sweep(0.5), &cuboid).unwrap();

    // The face is at z = 7.
    assert!(relative_eq!(distance.unwrap(), 6.5, epsilon = 1.0e-4));
}

#[test]
fn sweep_out_of_a_hollow_sphere_cavity() {
    let shell = Shape::from(HollowSphere::new(Point3::origin(), 8.0, 6.0).unwrap());
    let distance = sweep_contact_distance(&sweep(1.0), &shell).unwrap();

    assert!(relative_eq!(distance.unwrap(), 5.0, epsilon = 1.0e-4));
}

#[test]
fn unsupported_targets() {
    let targets = [
        Shape::from(Cone::new(Point3::new(0.0, 0.0, 5.0), Vector3::y(), 1.0)),
        Shape::from(Ellipsoid::new(Point3::new(0.0, 0.0, 5.0), Vector3::repeat(1.0))),
        Shape::from(Frustum::new(
            Point3::new(0.0, 0.0, 5.0),
            Vector3::z(),
            1.0,
            1.0,
            0.0,
        )),
    ];

    for target in &targets {
        assert_eq!(sweep_contact_distance(&sweep(1.0), target), Err(Unsupported));
    }
}
