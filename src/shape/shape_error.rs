use crate::math::Real;

/// Error indicating that a shape could not be built, or modified, from the given arguments.
///
/// These are programming errors: they are detected eagerly by the call that introduces the
/// invalid value and are never deferred to a later query.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum ShapeError {
    /// A scale factor must be non-negative (and not `NaN`).
    #[error("the scale factor {0} is negative.")]
    NegativeScaleFactor(Real),
    /// The major radius of a torus must be greater than or equal to its minor radius.
    #[error("the torus major radius {major} is smaller than its minor radius {minor}.")]
    InvalidTorusRadii {
        /// The major radius given to the torus.
        major: Real,
        /// The minor radius given to the torus.
        minor: Real,
    },
    /// The inner radius of a hollow sphere must not exceed its outer radius.
    #[error("the hollow sphere inner radius {inner} exceeds its outer radius {outer}.")]
    InvalidHollowSphereRadii {
        /// The outer radius given to the hollow sphere.
        outer: Real,
        /// The inner radius given to the hollow sphere.
        inner: Real,
    },
}

/// Checks that `factor` can be used to scale a shape.
#[inline]
pub(crate) fn check_scale_factor(factor: Real) -> Result<Real, ShapeError> {
    if factor >= 0.0 {
        Ok(factor)
    } else {
        Err(ShapeError::NegativeScaleFactor(factor))
    }
}

/// The linear scale factor multiplying the volume of every shape by `factor`.
#[inline]
pub(crate) fn volume_scale_to_linear(factor: Real) -> Result<Real, ShapeError> {
    check_scale_factor(factor).map(Real::cbrt)
}
