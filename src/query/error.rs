use core::fmt;

/// Error indicating that a geometric query is not supported between certain shape combinations.
///
/// The swept-sphere contact query, for example, has no algorithm for cones, ellipsoids and
/// frusta: [`sweep_contact_distance`](crate::query::sweep_contact_distance) returns this error
/// when the target is one of them.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// # use solids3d::query::{sweep_contact_distance, Unsupported};
/// # use solids3d::shape::{Capsule, Cone, Shape};
/// # use solids3d::na::{Point3, Vector3};
/// let capsule = Capsule::new(Point3::origin(), Vector3::new(0.0, 0.0, 10.0), 1.0);
/// let cone = Shape::from(Cone::new(Point3::new(0.0, 0.0, 8.0), Vector3::y(), 1.0));
///
/// match sweep_contact_distance(&capsule, &cone) {
///     Ok(Some(distance)) => println!("Contact after moving {}", distance),
///     Ok(None) => println!("No contact"),
///     Err(Unsupported) => println!("This query is not supported for cones"),
/// }
/// # }
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Unsupported;

impl fmt::Display for Unsupported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad("query not supported between these shapes")
    }
}

impl std::error::Error for Unsupported {}
