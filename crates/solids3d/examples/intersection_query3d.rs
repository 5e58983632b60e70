use solids3d::math::{Point, Vector};
use solids3d::query;
use solids3d::shape::{Cuboid, Frustum, Shape, Sphere, Torus};

fn main() {
    let cuboid = Shape::from(Cuboid::new(Point::new(9.0, 9.0, 11.0), Vector::repeat(4.0)));
    let frustum = Shape::from(Frustum::new(
        Point::origin(),
        Vector::new(0.0, 0.0, 10.0),
        std::f32::consts::FRAC_PI_2,
        1.0,
        1.0,
    ));
    let ball_intersecting = Shape::from(Sphere::new(Point::new(5.0, 0.0, 5.0), 1.0));
    let ball_disjoint = Shape::from(Sphere::new(Point::new(5.0, 0.0, -5.0), 1.0));

    assert!(query::intersection_test(&cuboid, &frustum));
    assert!(frustum.intersects(&ball_intersecting));
    assert!(!query::intersection_test(&ball_disjoint, &frustum));

    // Tori are tested through their bounding cylinder: the hole is not detected.
    let torus = Shape::from(Torus::new(Point::origin(), 3.0, 1.0).unwrap());
    let ball_in_hole = Shape::from(Sphere::new(Point::origin(), 0.5));
    assert!(torus.intersects(&ball_in_hole));
}
