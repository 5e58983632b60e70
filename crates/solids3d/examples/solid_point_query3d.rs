use solids3d::math::{Point, Vector};
use solids3d::query::PointQuery;
use solids3d::shape::{Capsule, HollowSphere};

fn main() {
    let capsule = Capsule::new(Point::origin(), Vector::new(0.0, 10.0, 0.0), 1.0);
    let shell = HollowSphere::new(Point::origin(), 2.0, 1.0).unwrap();

    assert!(capsule.is_point_within(&Point::origin()));
    assert!(!capsule.is_point_within(&Point::new(5.0, 0.0, 0.0)));

    // The cavity of a hollow sphere is not part of it.
    assert!(!shell.is_point_within(&Point::origin()));
    assert!(shell.is_point_within(&Point::new(1.5, 0.0, 0.0)));
}
