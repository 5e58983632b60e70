use crate::math::Real;
use crate::query::details;
use crate::query::Unsupported;
use crate::shape::{Capsule, Shape};
use num::Zero;

/// Computes how far a capsule, seen as a sphere swept along its axis, travels before touching
/// another shape.
///
/// The capsule is interpreted as a sphere of the capsule's radius moving from the capsule's
/// [`start`](Capsule::start) to its [`end`](Capsule::end). When the target is itself a
/// capsule, it is interpreted the same way: a sphere moving from its start to its end during
/// the same time interval.
///
/// # Returns
///
/// * `Ok(Some(distance))` - the distance travelled along the capsule's axis before the first
///   contact, in `[0, length]`. It is zero if the sphere overlaps the target at its start.
/// * `Ok(None)` - the sphere reaches the capsule's end without touching the target.
/// * `Err(Unsupported)` - the target is a cone, an ellipsoid, or a frustum.
///
/// Cylinders and tori are replaced by the same fixed capsules as in
/// [`intersection_test`](crate::query::intersection_test) so the contact may be reported early.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use solids3d::na::{Point3, Vector3};
/// use solids3d::query::sweep_contact_distance;
/// use solids3d::shape::{Capsule, Shape, Sphere};
///
/// let capsule = Capsule::between(Point3::origin(), Point3::new(10.0, 0.0, 0.0), 1.0);
/// let sphere = Shape::from(Sphere::new(Point3::new(5.0, 0.0, 0.0), 1.0));
///
/// let distance = sweep_contact_distance(&capsule, &sphere).unwrap();
/// assert!((distance.unwrap() - 3.0).abs() < 1.0e-5);
/// # }
/// ```
pub fn sweep_contact_distance(capsule: &Capsule, target: &Shape) -> Result<Option<Real>, Unsupported> {
    if matches!(
        target,
        Shape::Cone(_) | Shape::Ellipsoid(_) | Shape::Frustum(_)
    ) {
        return Err(Unsupported);
    }

    let length = capsule.length();

    if length.is_zero() {
        return Ok(capsule.intersects(target).then_some(0.0));
    }

    let toi = sweep_contact_toi(capsule, target);

    Ok(toi
        .filter(|toi| *toi >= 0.0 && *toi <= 1.0)
        .map(|toi| toi * length))
}

/// The fraction of the capsule's axis travelled before the first contact.
fn sweep_contact_toi(capsule: &Capsule, target: &Shape) -> Option<Real> {
    let start = capsule.start();
    let motion = capsule.axis();
    let radius = capsule.radius();

    match target {
        Shape::SinglePoint(p) => {
            details::sweep_contact_ball_ball(&start, &motion, radius, &p.position(), 0.0)
        }
        Shape::Sphere(s) => {
            details::sweep_contact_ball_ball(&start, &motion, radius, &s.position(), s.radius())
        }
        Shape::HollowSphere(h) => {
            details::sweep_contact_ball_hollow_sphere(&start, &motion, radius, h)
        }
        Shape::Capsule(c) => details::sweep_contact_moving_ball_moving_ball(
            &start,
            &motion,
            radius,
            &c.start(),
            &c.axis(),
            c.radius(),
        ),
        Shape::Line(l) => {
            details::sweep_contact_ball_swept_sphere(&start, &motion, radius, &l.segment(), 0.0)
        }
        Shape::Cuboid(c) => details::sweep_contact_ball_cuboid(&start, &motion, radius, c),
        Shape::Cylinder(c) => {
            // A fixed capsule, unlike capsule targets that move along their axis.
            details::sweep_contact_ball_swept_sphere(
                &start,
                &motion,
                radius,
                &c.segment(),
                c.radius(),
            )
        }
        Shape::Torus(t) => sweep_contact_toi(capsule, &t.bounding_cylinder().into()),
        Shape::Cone(_) | Shape::Ellipsoid(_) | Shape::Frustum(_) => None,
    }
}
