use crate::math::{Point, Real, DEFAULT_EPSILON};
use crate::query::details::closest_points_segment_segment_with_parameters;
use crate::query::PointQuery;
use crate::shape::{Cone, ConvexHexahedron, Segment, Sphere};

/// The inverse of the golden ratio.
const INV_PHI: Real = 0.618_034;
const GOLDEN_SECTION_ITERATIONS: usize = 40;

/// Approximate intersection test between two cones.
///
/// The closest points between both axes are computed, and each cone is replaced by the
/// sphere centered at its closest point, with the radius of its cross-section at that point.
/// This is exact when the cones touch by their apexes or by the sides of their bases, but may
/// miss intersections between wide cones with close-to-parallel axes.
///
/// Parallel axes have infinitely many closest points, and the ones picked depend on which axis
/// comes first. Both orders are tested so the result does not depend on the argument order.
pub fn intersection_test_cone_cone_approximate(cone1: &Cone, cone2: &Cone) -> bool {
    spheres_at_closest_axis_points_intersect(cone1, cone2)
        || spheres_at_closest_axis_points_intersect(cone2, cone1)
}

fn spheres_at_closest_axis_points_intersect(cone1: &Cone, cone2: &Cone) -> bool {
    let axis1 = cone1.segment();
    let axis2 = cone2.segment();
    let (s1, s2) = closest_points_segment_segment_with_parameters(&axis1, &axis2);
    let sum_radius = cone1.radius_at(s1) + cone2.radius_at(s2);

    na::distance_squared(&axis1.point_at(s1), &axis2.point_at(s2)) <= sum_radius * sum_radius
}

/// Approximate intersection test between a cone and a swept sphere.
///
/// The swept sphere is the set of points at a distance smaller than `radius` from `segment`.
/// The cone is replaced by the sphere centered at the point of its axis closest to `segment`,
/// with the radius of the cone's cross-section at that point.
pub fn intersection_test_cone_swept_sphere_approximate(
    cone: &Cone,
    segment: &Segment,
    radius: Real,
) -> bool {
    let axis = cone.segment();
    let (s, t) = closest_points_segment_segment_with_parameters(&axis, segment);
    let sum_radius = cone.radius_at(s) + radius;

    na::distance_squared(&axis.point_at(s), &segment.point_at(t)) <= sum_radius * sum_radius
}

/// Intersection test between a cone and a sphere.
///
/// Because the cone is a solid of revolution, the test is performed in the half-plane
/// containing the cone's axis and the sphere's center. There, the cone's cross-section is the
/// right triangle formed by its apex, the center of its base, and a point of its rim.
pub fn intersection_test_cone_sphere(cone: &Cone, sphere: &Sphere) -> bool {
    let dir = cone.direction();
    let length = cone.length();
    let radius = cone.radius();
    let dpt = sphere.position() - cone.apex();
    let height = dpt.dot(&dir);
    let radial = (dpt - dir.into_inner() * height).norm();

    if height >= 0.0
        && height <= length
        && radial * length <= height * radius
        && radial <= radius
    {
        return true;
    }

    // Coordinates in the half-plane: (height along the axis, distance to the axis).
    let center = Point::new(height, radial, 0.0);
    let rim = Point::new(length, radius, 0.0);
    let slant = Segment::new(Point::origin(), rim);
    let base = Segment::new(Point::new(length, 0.0, 0.0), rim);
    let dist2 = slant
        .distance_squared_to_point(&center)
        .min(base.distance_squared_to_point(&center));

    dist2 <= sphere.radius() * sphere.radius()
}

/// Intersection test between a cone and a segment.
///
/// The segment is first clipped to the slab between the cone's apex and its base. The points
/// `p` of the cone's infinite nappe are the ones where `r·h(p) ≥ L·ρ(p)`, with `h` the height
/// of `p` along the axis and `ρ` its distance to the axis. Squaring this inequality gives a
/// quadratic in the segment's parameter, whose maximum over the clipped range is checked.
pub fn intersection_test_cone_segment(cone: &Cone, segment: &Segment) -> bool {
    let dir = cone.direction();
    let length = cone.length();
    let radius = cone.radius();
    let w = segment.a - cone.apex();
    let v = segment.scaled_direction();
    let h0 = w.dot(&dir);
    let hv = v.dot(&dir);

    if length <= DEFAULT_EPSILON {
        return intersection_test_disk_segment(&cone.apex(), h0, hv, radius, segment);
    }

    // Parameters of the segment between the apex and the base planes.
    let (mut tmin, mut tmax): (Real, Real) = (0.0, 1.0);

    if hv.abs() <= DEFAULT_EPSILON {
        if h0 < 0.0 || h0 > length {
            return false;
        }
    } else {
        let ta = -h0 / hv;
        let tb = (length - h0) / hv;
        tmin = tmin.max(ta.min(tb));
        tmax = tmax.min(ta.max(tb));

        if tmin > tmax {
            return false;
        }
    }

    let hyp2 = radius * radius + length * length;
    let l2 = length * length;
    let a = hyp2 * hv * hv - l2 * v.norm_squared();
    let b = 2.0 * (hyp2 * h0 * hv - l2 * w.dot(&v));
    let c = hyp2 * h0 * h0 - l2 * w.norm_squared();
    let inside = |t: Real| (a * t + b) * t + c >= 0.0;

    if inside(tmin) || inside(tmax) {
        return true;
    }

    // The quadratic is concave: its maximum may lie strictly inside of the range.
    a < 0.0 && {
        let vertex = -b / (2.0 * a);
        vertex > tmin && vertex < tmax && inside(vertex)
    }
}

/// Intersection test between a disk, i.e. a cone with a zero height, and a segment.
///
/// `h0` and `hv` are the heights of the segment's start point and of its direction along the
/// disk's normal.
fn intersection_test_disk_segment(
    center: &Point<Real>,
    h0: Real,
    hv: Real,
    radius: Real,
    segment: &Segment,
) -> bool {
    let radius2 = radius * radius;

    if hv.abs() <= DEFAULT_EPSILON {
        // Parallel to the disk: only coplanar segments can intersect it.
        h0.abs() <= DEFAULT_EPSILON && segment.distance_squared_to_point(center) <= radius2
    } else {
        let t = -h0 / hv;
        (0.0..=1.0).contains(&t)
            && na::distance_squared(&segment.point_at(t), center) <= radius2
    }
}

/// Approximate intersection test between a cone and a convex hexahedron, e.g. a frustum.
///
/// The cone is rejected if it lies fully outside of one of the hexahedron's face planes. It
/// intersects the hexahedron if its apex or the center of its base is inside of the hexahedron,
/// or if one of the hexahedron's corners is inside of the cone. Otherwise, the point of the
/// cone's axis minimizing the gap between the hexahedron and the cone's cross-section at that
/// point is searched for.
pub fn intersection_test_cone_hexahedron_approximate(
    cone: &Cone,
    hexa: &ConvexHexahedron,
) -> bool {
    let apex = cone.apex();
    let base = cone.base_center();
    let dir = cone.direction().into_inner();
    let radius = cone.radius();

    let outside = hexa.planes().iter().any(|plane| {
        let normal = plane.normal;
        let rim_extent = radius * (normal - dir * normal.dot(&dir)).norm();
        plane
            .signed_distance(&apex)
            .min(plane.signed_distance(&base) - rim_extent)
            > 0.0
    });

    if outside {
        return false;
    }

    if hexa.contains_point(&apex)
        || hexa.contains_point(&base)
        || hexa.corners().iter().any(|pt| cone.is_point_within(pt))
    {
        return true;
    }

    // Convex along the axis: distance to a convex set minus a linear radius.
    let axis = cone.segment();
    let gap = |t: Real| hexa.distance_squared_to_point(&axis.point_at(t)).sqrt() - cone.radius_at(t);

    golden_section_min(gap, 0.0, 1.0) <= 0.0
}

/// Approximates the minimum of the convex function `f` over `[lo, hi]`.
///
/// Stops early as soon as a non-positive value is found.
fn golden_section_min(f: impl Fn(Real) -> Real, mut lo: Real, mut hi: Real) -> Real {
    let mut best = f(lo).min(f(hi));
    let mut x1 = hi - INV_PHI * (hi - lo);
    let mut x2 = lo + INV_PHI * (hi - lo);
    let mut f1 = f(x1);
    let mut f2 = f(x2);

    for _ in 0..GOLDEN_SECTION_ITERATIONS {
        best = best.min(f1).min(f2);

        if best <= 0.0 {
            break;
        }

        if f1 < f2 {
            hi = x2;
            x2 = x1;
            f2 = f1;
            x1 = hi - INV_PHI * (hi - lo);
            f1 = f(x1);
        } else {
            lo = x1;
            x1 = x2;
            f1 = f2;
            x2 = lo + INV_PHI * (hi - lo);
            f2 = f(x2);
        }
    }

    best.min(f1).min(f2)
}
