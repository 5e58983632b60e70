use solids3d::math::{Point, Vector};
use solids3d::query::{self, Unsupported};
use solids3d::shape::{Capsule, Cone, Cuboid, Shape, Sphere};

fn main() {
    // A ball of radius 1 moving from the origin to (10, 0, 0).
    let capsule = Capsule::between(Point::origin(), Point::new(10.0, 0.0, 0.0), 1.0);

    let ball_will_touch = Shape::from(Sphere::new(Point::new(6.0, 0.0, 0.0), 2.0));
    let ball_intersecting = Shape::from(Sphere::new(Point::new(1.0, 0.0, 0.0), 1.0));
    let cuboid_wont_touch = Shape::from(Cuboid::new(Point::new(5.0, 5.0, 0.0), Vector::repeat(2.0)));
    let cone = Shape::from(Cone::new(Point::new(5.0, 0.0, 0.0), Vector::y(), 1.0));

    let will_touch = query::sweep_contact_distance(&capsule, &ball_will_touch).unwrap();
    let intersecting = query::sweep_contact_distance(&capsule, &ball_intersecting).unwrap();
    let wont_touch = query::sweep_contact_distance(&capsule, &cuboid_wont_touch).unwrap();

    assert!(will_touch.is_some() && (will_touch.unwrap() - 3.0).abs() < 1.0e-5);
    assert_eq!(intersecting, Some(0.0));
    assert_eq!(wont_touch, None);
    assert_eq!(query::sweep_contact_distance(&capsule, &cone), Err(Unsupported));
}
