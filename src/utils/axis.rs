use crate::math::{Real, Rotation, UnitVector, Vector, DEFAULT_EPSILON};
use crate::utils::WBasis;
use na::{RealField, Unit};

/// The unit direction of an axis vector.
///
/// A zero-length axis has no direction; the principal axis `+Y` is used instead.
pub fn axis_direction(axis: &Vector<Real>) -> UnitVector<Real> {
    Unit::try_new(*axis, DEFAULT_EPSILON).unwrap_or_else(|| {
        log::debug!("Degenerate axis {:?}: falling back to the +Y direction.", axis);
        Vector::y_axis()
    })
}

/// The shortest rotation `r` such that `r * from == to`.
///
/// Unlike `Rotation::rotation_between_axis`, this never fails: opposite axes are
/// related by a half-turn around an arbitrary axis orthogonal to `from`.
pub fn rotation_between_axes(from: &UnitVector<Real>, to: &UnitVector<Real>) -> Rotation<Real> {
    Rotation::rotation_between_axis(from, to).unwrap_or_else(|| {
        let [ortho, _] = from.into_inner().orthonormal_basis();
        Rotation::from_axis_angle(&Unit::new_normalize(ortho), Real::pi())
    })
}

/// The direction orthogonal to `dir` that points the most toward `+Y`.
///
/// Returns `None` if `dir` is (anti-)parallel to `+Y`: every orthogonal direction is then
/// horizontal.
pub fn orthogonal_up(dir: &UnitVector<Real>) -> Option<UnitVector<Real>> {
    let up = Vector::y() - dir.into_inner() * dir.y;
    Unit::try_new(up, DEFAULT_EPSILON)
}
