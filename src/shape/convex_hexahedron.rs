//! A convex solid with eight corners and six quadrilateral faces.

use crate::math::{HomogeneousMatrix, Matrix, Point, Real, Vector, DEFAULT_EPSILON};
use crate::query::details::{clip_planes_segment, distance_squared_segment_segment};
use crate::shape::{Plane, Segment};
use na::Unit;

/// The corners of each face, in winding order.
///
/// Corner indices are bit sets: bit 0 is set for the corners on the `+X` side (right),
/// bit 1 for the `+Y` side (up), and bit 2 for the `+Z` side (far).
/// Faces are ordered `-X`, `+X`, `-Y`, `+Y`, `-Z`, `+Z`.
const FACES: [[usize; 4]; 6] = [
    [0, 2, 6, 4],
    [1, 3, 7, 5],
    [0, 1, 5, 4],
    [2, 3, 7, 6],
    [0, 1, 3, 2],
    [4, 5, 7, 6],
];

/// The corners of each edge: every pair of corners differing by exactly one bit.
const EDGES: [[usize; 2]; 12] = [
    [0, 1],
    [2, 3],
    [4, 5],
    [6, 7],
    [0, 2],
    [1, 3],
    [4, 6],
    [5, 7],
    [0, 4],
    [1, 5],
    [2, 6],
    [3, 7],
];

/// A convex hexahedron, i.e., a box-like convex solid.
///
/// This is the common representation of cuboids and frusta used by the intersection tests.
/// Some of its faces may be degenerate (for example the near face of a frustum starting at its
/// apex) in which case the face plane is derived from the hexahedron's frame instead.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct ConvexHexahedron {
    corners: [Point<Real>; 8],
    frame: Matrix<Real>,
    planes: [Plane; 6],
    flat_faces: [bool; 6],
}

impl ConvexHexahedron {
    /// Builds a convex hexahedron from its corners.
    ///
    /// The corners are indexed as described by [`ConvexHexahedron::corners`]. The columns
    /// of `frame` are the directions of the hexahedron's local `+X`, `+Y` and `+Z` axes, i.e.,
    /// from its left side to its right side, from its bottom to its top, and from its near side
    /// to its far side. They orient every face normal, and give the normals of the faces
    /// collapsed to a segment or a point.
    pub fn from_corners(corners: [Point<Real>; 8], frame: Matrix<Real>) -> Self {
        let face_normals = frame
            .try_inverse()
            .map(|inv| inv.transpose())
            .unwrap_or(frame);
        let mut planes = [Plane::new(Vector::zeros(), &Point::origin()); 6];
        let mut flat_faces = [false; 6];

        for (i, face) in FACES.iter().enumerate() {
            let sign = if i % 2 == 0 { -1.0 } else { 1.0 };
            let outward = frame.column(i / 2) * sign;
            let center = face
                .iter()
                .fold(Point::origin(), |acc, id| acc + corners[*id].coords * 0.25);

            // Newell's normal: robust to faces with coincident corners.
            let newell = (0..4).fold(Vector::zeros(), |acc: Vector<Real>, k| {
                let a = corners[face[k]] - center;
                let b = corners[face[(k + 1) % 4]] - center;
                acc + a.cross(&b)
            });

            let normal = match Unit::try_new(newell, DEFAULT_EPSILON) {
                Some(n) if n.dot(&outward) < 0.0 => -n.into_inner(),
                Some(n) => n.into_inner(),
                None => {
                    flat_faces[i] = true;
                    (face_normals.column(i / 2) * sign)
                        .try_normalize(0.0)
                        .unwrap_or_else(Vector::zeros)
                }
            };

            planes[i] = Plane::new(normal, &center);
        }

        Self {
            corners,
            frame,
            planes,
            flat_faces,
        }
    }

    /// The image of this hexahedron by the affine transformation `m`.
    pub fn transformed(&self, m: &HomogeneousMatrix<Real>) -> Self {
        let linear: Matrix<Real> = m.fixed_view::<3, 3>(0, 0).into_owned();
        let corners = self.corners.map(|pt| m.transform_point(&pt));
        Self::from_corners(corners, linear * self.frame)
    }

    /// The eight corners of this hexahedron.
    ///
    /// The corner `i` lies on the right side if `i & 1 != 0`, on the upper side if
    /// `i & 2 != 0`, and on the far side if `i & 4 != 0`.
    #[inline]
    pub fn corners(&self) -> &[Point<Real>; 8] {
        &self.corners
    }

    /// The six bounding planes of this hexahedron, with outward normals.
    #[inline]
    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    /// The twelve edges of this hexahedron.
    pub fn edges(&self) -> [Segment; 12] {
        EDGES.map(|[a, b]| Segment::new(self.corners[a], self.corners[b]))
    }

    /// The centroid of the corners of this hexahedron.
    pub fn center(&self) -> Point<Real> {
        self.corners
            .iter()
            .fold(Point::origin(), |acc, pt| acc + pt.coords / 8.0)
    }

    /// The interval covered by the projection of this hexahedron on `axis`.
    pub fn project_on(&self, axis: &Vector<Real>) -> (Real, Real) {
        self.corners
            .iter()
            .fold((Real::MAX, -Real::MAX), |(min, max), pt| {
                let proj = pt.coords.dot(axis);
                (min.min(proj), max.max(proj))
            })
    }

    /// Tests if `pt` lies inside of this hexahedron or on its boundary.
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        self.planes.iter().all(|plane| plane.signed_distance(pt) <= 0.0)
    }

    /// The squared distance from `pt` to this hexahedron, zero if it is inside.
    pub fn distance_squared_to_point(&self, pt: &Point<Real>) -> Real {
        if self.contains_point(pt) {
            return 0.0;
        }

        let mut best = Real::MAX;

        for (i, face) in FACES.iter().enumerate() {
            if !self.flat_faces[i] {
                let plane = &self.planes[i];
                let proj = plane.project_point(pt);
                let inside = (0..4).all(|k| {
                    let a = self.corners[face[k]];
                    let b = self.corners[face[(k + 1) % 4]];
                    (b - a).cross(&(proj - a)).dot(&plane.normal) >= 0.0
                });

                if inside {
                    best = best.min(plane.signed_distance(pt).powi(2));
                }
            }
        }

        self.edges()
            .iter()
            .fold(best, |best, edge| best.min(edge.distance_squared_to_point(pt)))
    }

    /// Clips the segment `seg` against this hexahedron.
    ///
    /// Returns the parameters, in `[0, 1]`, of the portion of `seg` inside of this
    /// hexahedron, or `None` if the segment lies fully outside.
    pub fn clip_segment(&self, seg: &Segment) -> Option<(Real, Real)> {
        clip_planes_segment(&self.planes, seg)
    }

    /// The squared distance between the segment `seg` and this hexahedron.
    ///
    /// This is zero if the segment crosses the hexahedron. Otherwise the closest points are
    /// either a segment endpoint or a point of one of the hexahedron's edges.
    pub fn distance_squared_to_segment(&self, seg: &Segment) -> Real {
        if self.clip_segment(seg).is_some() {
            return 0.0;
        }

        let endpoints = self
            .distance_squared_to_point(&seg.a)
            .min(self.distance_squared_to_point(&seg.b));

        self.edges().iter().fold(endpoints, |best, edge| {
            best.min(distance_squared_segment_segment(seg, edge))
        })
    }

    /// Tests if the ball with the given center and radius intersects this hexahedron.
    #[inline]
    pub fn intersects_ball(&self, center: &Point<Real>, radius: Real) -> bool {
        self.distance_squared_to_point(center) <= radius * radius
    }
}
