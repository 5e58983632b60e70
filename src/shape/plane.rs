use crate::math::{Point, Real, Vector};

/// An infinite plane delimiting a half-space.
///
/// The plane is the set of points `p` such that `normal · p == bias`. Points with a positive
/// signed distance lie on the side the normal points to.
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Plane {
    /// The plane's normal. Unit-length, except for planes of fully degenerate solids where it
    /// is zero.
    pub normal: Vector<Real>,
    /// The signed distance from the origin to the plane, along `normal`.
    pub bias: Real,
}

impl Plane {
    /// Builds the plane with the given normal and passing through `point`.
    #[inline]
    pub fn new(normal: Vector<Real>, point: &Point<Real>) -> Self {
        Self {
            normal,
            bias: normal.dot(&point.coords),
        }
    }

    /// The signed distance from `pt` to this plane.
    #[inline]
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        self.normal.dot(&pt.coords) - self.bias
    }

    /// The orthogonal projection of `pt` on this plane.
    #[inline]
    pub fn project_point(&self, pt: &Point<Real>) -> Point<Real> {
        pt - self.normal * self.signed_distance(pt)
    }
}
