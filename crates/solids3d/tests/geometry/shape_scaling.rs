use crate::geometry::random_shapes::{rand_range, rand_shape};
use na::{Point3, Vector3};
use oorandom::Rand32;
use solids3d::shape::{Capsule, Cuboid, Shape, ShapeError, Sphere, Torus};

#[test]
fn sphere_volume() {
    let sphere = Sphere::new(Point3::origin(), 10.0);
    assert!((sphere.volume() - 4188.79).abs() <= 0.01);
}

#[test]
fn scale_by_dimension_scales_volume_cubically() {
    let mut rng = Rand32::new(42);

    for _ in 0..200 {
        let shape = rand_shape(&mut rng);
        let factor = rand_range(&mut rng, 0.1, 4.0);
        let scaled = shape.scale_by_dimension(factor).unwrap();

        assert_eq!(scaled.shape_type(), shape.shape_type());
        assert_eq!(scaled.position(), shape.position());
        assert!(relative_eq!(
            scaled.volume(),
            shape.volume() * factor.powi(3),
            epsilon = 1.0e-4,
            max_relative = 1.0e-3
        ));
        assert!(relative_eq!(
            scaled.containing_radius(),
            shape.containing_radius() * factor,
            epsilon = 1.0e-4,
            max_relative = 1.0e-3
        ));
    }
}

#[test]
fn scale_volume_scales_volume_linearly() {
    let mut rng = Rand32::new(42);

    for _ in 0..200 {
        let shape = rand_shape(&mut rng);
        let factor = rand_range(&mut rng, 0.1, 8.0);
        let scaled = shape.scale_volume(factor).unwrap();

        assert!(relative_eq!(
            scaled.volume(),
            shape.volume() * factor,
            epsilon = 1.0e-4,
            max_relative = 1.0e-3
        ));
    }
}

#[test]
fn scaling_by_zero_collapses_the_shape() {
    let cuboid = Cuboid::new(Point3::new(1.0, 2.0, 3.0), Vector3::new(1.0, 2.0, 3.0));
    let flat = cuboid.scale_by_dimension(0.0).unwrap();

    assert_eq!(flat.volume(), 0.0);
    assert_eq!(flat.containing_radius(), 0.0);
    assert_eq!(flat.position(), cuboid.position());
}

#[test]
fn negative_scale_factors_are_rejected() {
    let capsule = Shape::from(Capsule::new(Point3::origin(), Vector3::y() * 4.0, 1.0));

    assert_eq!(
        capsule.scale_by_dimension(-2.0),
        Err(ShapeError::NegativeScaleFactor(-2.0))
    );
    assert_eq!(
        capsule.scale_volume(-0.5),
        Err(ShapeError::NegativeScaleFactor(-0.5))
    );
    assert!(capsule.scale_by_dimension(f32::NAN).is_err());
}

#[test]
fn scaled_torus_keeps_its_radii_ratio() {
    let torus = Torus::new(Point3::origin(), 3.0, 1.0).unwrap();
    let scaled = torus.scale_by_dimension(2.0).unwrap();

    assert_eq!(scaled.major_radius(), 6.0);
    assert_eq!(scaled.minor_radius(), 2.0);
    assert_eq!(scaled.smallest_dimension(), 4.0);
}
