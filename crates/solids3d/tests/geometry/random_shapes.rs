use na::{Point3, Unit, UnitQuaternion, Vector3};
use oorandom::Rand32;
use solids3d::shape::{
    Capsule, Cone, Cuboid, Cylinder, Ellipsoid, Frustum, HollowSphere, Line, Shape, SinglePoint,
    Sphere, Torus,
};

pub fn rand_range(rng: &mut Rand32, min: f32, max: f32) -> f32 {
    min + rng.rand_float() * (max - min)
}

pub fn rand_point(rng: &mut Rand32, extent: f32) -> Point3<f32> {
    Point3::new(
        rand_range(rng, -extent, extent),
        rand_range(rng, -extent, extent),
        rand_range(rng, -extent, extent),
    )
}

pub fn rand_vector(rng: &mut Rand32, min_norm: f32, max_norm: f32) -> Vector3<f32> {
    let dir = Unit::try_new(rand_point(rng, 1.0).coords, 1.0e-3).unwrap_or(Vector3::y_axis());
    dir.into_inner() * rand_range(rng, min_norm, max_norm)
}

pub fn rand_rotation(rng: &mut Rand32) -> UnitQuaternion<f32> {
    let axis = Unit::try_new(rand_point(rng, 1.0).coords, 1.0e-3).unwrap_or(Vector3::x_axis());
    UnitQuaternion::from_axis_angle(&axis, rand_range(rng, 0.0, std::f32::consts::TAU))
}

/// A random shape of any type, located near the origin.
pub fn rand_shape(rng: &mut Rand32) -> Shape {
    let pos = rand_point(rng, 3.0);

    let shape: Shape = match rng.rand_range(0..11) {
        0 => SinglePoint::new(pos).into(),
        1 => Line::new(pos, rand_vector(rng, 0.5, 4.0)).into(),
        2 => Sphere::new(pos, rand_range(rng, 0.2, 2.0)).into(),
        3 => {
            let outer = rand_range(rng, 0.5, 3.0);
            HollowSphere::new(pos, outer, outer * rand_range(rng, 0.1, 0.9))
                .unwrap()
                .into()
        }
        4 => Capsule::new(pos, rand_vector(rng, 0.5, 4.0), rand_range(rng, 0.2, 1.5)).into(),
        5 => Cylinder::new(pos, rand_vector(rng, 0.5, 4.0), rand_range(rng, 0.2, 1.5)).into(),
        6 => Cone::new(pos, rand_vector(rng, 0.5, 4.0), rand_range(rng, 0.2, 1.5)).into(),
        7 => Cuboid::new(
            pos,
            Vector3::new(
                rand_range(rng, 0.2, 3.0),
                rand_range(rng, 0.2, 3.0),
                rand_range(rng, 0.2, 3.0),
            ),
        )
        .with_rotation(rand_rotation(rng))
        .into(),
        8 => Ellipsoid::new(
            pos,
            Vector3::new(
                rand_range(rng, 0.2, 2.0),
                rand_range(rng, 0.2, 2.0),
                rand_range(rng, 0.2, 2.0),
            ),
        )
        .with_rotation(rand_rotation(rng))
        .into(),
        9 => {
            let axis = rand_vector(rng, 1.0, 5.0);
            Frustum::new(
                pos,
                axis,
                rand_range(rng, 0.3, 1.5),
                rand_range(rng, 0.5, 2.0),
                axis.norm() * rand_range(rng, 0.0, 0.5),
            )
            .into()
        }
        _ => {
            let minor = rand_range(rng, 0.1, 0.8);
            Torus::new(pos, minor + rand_range(rng, 0.0, 2.0), minor)
                .unwrap()
                .with_rotation(rand_rotation(rng))
                .into()
        }
    };

    shape
}
