use crate::geometry::random_shapes::{rand_point, rand_shape};
use na::{self, Point3, Vector3};
use oorandom::Rand32;
use solids3d::query::PointQuery;
use solids3d::shape::{Capsule, Cone, Cylinder, Line, Shape, SinglePoint, Sphere};

const NUM_PAIRS: usize = 2000;

#[test]
fn intersection_is_symmetric() {
    let mut rng = Rand32::new(42);

    for _ in 0..NUM_PAIRS {
        let a = rand_shape(&mut rng);
        let b = rand_shape(&mut rng);

        assert_eq!(
            a.intersects(&b),
            b.intersects(&a),
            "asymmetric intersection between {:?} and {:?}",
            a,
            b
        );
    }
}

#[test]
fn same_kind_pairs_with_parallel_axes_are_symmetric() {
    let x = Vector3::x();
    let y = Vector3::y();
    let wide_cone = Cone::new(Point3::new(2.0, 0.0, 0.0), x * 4.0, 2.0);
    let pairs: [(Shape, Shape, bool); 8] = [
        (
            wide_cone.into(),
            Cone::new(Point3::new(4.0, 2.2, 0.0), -x * 4.0, 1.0).into(),
            true,
        ),
        (
            wide_cone.into(),
            Cone::new(Point3::new(4.0, 0.8, 0.0), x * 4.0, 1.0).into(),
            true,
        ),
        (
            Capsule::new(Point3::origin(), x * 4.0, 1.0).into(),
            Capsule::new(Point3::new(3.0, 1.5, 0.0), x * 4.0, 1.0).into(),
            true,
        ),
        (
            Capsule::new(Point3::origin(), x * 4.0, 1.0).into(),
            Capsule::new(Point3::new(3.0, 2.5, 0.0), -x * 4.0, 1.0).into(),
            false,
        ),
        (
            Line::new(Point3::origin(), x * 4.0).into(),
            Line::new(Point3::new(3.0, 0.0, 0.0), -x * 4.0).into(),
            true,
        ),
        (
            Line::new(Point3::origin(), x * 4.0).into(),
            Line::new(Point3::new(1.0, 0.5, 0.0), x * 4.0).into(),
            false,
        ),
        (
            Cylinder::new(Point3::origin(), y * 4.0, 1.0).into(),
            Cylinder::new(Point3::new(1.5, 1.0, 0.0), y * 4.0, 1.0).into(),
            true,
        ),
        (
            Cylinder::new(Point3::origin(), y * 4.0, 1.0).into(),
            Cylinder::new(Point3::new(2.5, 3.0, 0.0), -y * 4.0, 1.0).into(),
            false,
        ),
    ];

    for (a, b, expected) in &pairs {
        assert_eq!(a.intersects(b), *expected, "{:?} and {:?}", a, b);
        assert_eq!(b.intersects(a), *expected, "{:?} and {:?}", b, a);
    }
}

#[test]
fn lines_crossing_away_from_the_origin() {
    let crossing = Point3::new(30.3, 20.7, 10.1);
    let dir1 = Vector3::new(1.3, 0.7, -0.4);
    let dir2 = Vector3::new(-0.2, 1.1, 0.9);
    let l1 = Shape::from(Line::between(crossing - dir1 * 4.0, crossing + dir1 * 6.0));
    let l2 = Shape::from(Line::between(crossing - dir2 * 3.0, crossing + dir2 * 2.0));

    assert!(l1.intersects(&l2));
    assert!(l2.intersects(&l1));
    assert!(l1.is_point_within(&crossing));
    assert!(l2.is_point_within(&crossing));
}

#[test]
fn shapes_intersect_themselves() {
    let mut rng = Rand32::new(42);

    for _ in 0..NUM_PAIRS {
        let shape = rand_shape(&mut rng);
        assert!(shape.intersects(&shape), "{:?}", shape);
    }
}

#[test]
fn intersecting_shapes_have_intersecting_bounding_spheres() {
    let mut rng = Rand32::new(42);

    for _ in 0..NUM_PAIRS {
        let a = rand_shape(&mut rng);
        let b = rand_shape(&mut rng);

        if a.intersects(&b) {
            let dist = na::distance(&a.position(), &b.position());
            assert!(dist <= a.containing_radius() + b.containing_radius() + 1.0e-4);
        }
    }
}

#[test]
fn contained_points_are_within_the_containing_radius() {
    let mut rng = Rand32::new(42);

    for _ in 0..200 {
        let shape = rand_shape(&mut rng);

        for _ in 0..50 {
            let pt = shape.position() + rand_point(&mut rng, shape.containing_radius()).coords;

            if shape.is_point_within(&pt) {
                let dist = na::distance(&pt, &shape.position());
                assert!(dist <= shape.containing_radius() + 1.0e-4);
            }
        }
    }
}

#[test]
fn contained_points_intersect_the_shape() {
    let mut rng = Rand32::new(42);
    let mut num_inside = 0;

    for _ in 0..200 {
        let shape = rand_shape(&mut rng);

        for _ in 0..50 {
            let pt = shape.position() + rand_point(&mut rng, shape.containing_radius()).coords;

            if shape.is_point_within(&pt) {
                num_inside += 1;
                let point = Shape::from(SinglePoint::new(pt));
                let ball = Shape::from(Sphere::new(pt, 0.01));

                assert!(shape.intersects(&point), "{:?} at {:?}", shape, pt);
                assert!(point.intersects(&shape), "{:?} at {:?}", shape, pt);
                assert!(shape.intersects(&ball), "{:?} at {:?}", shape, pt);
            }
        }
    }

    // Makes sure the sampling actually tested something.
    assert!(num_inside > 100);
}

#[test]
fn far_away_shapes_never_intersect() {
    let mut rng = Rand32::new(42);

    for _ in 0..NUM_PAIRS {
        let a = rand_shape(&mut rng);
        let b = rand_shape(&mut rng);
        let b = b.with_position(b.position() + Point3::new(100.0, 0.0, 0.0).coords);

        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }
}
