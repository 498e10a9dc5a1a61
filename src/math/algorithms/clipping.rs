// src/math/algorithms/clipping.rs

//! # Polygon Clipping Module
//!
//! Sutherland-Hodgman clipping of a polygon against half-planes.
//! A convex clipper (e.g. an axis-aligned rectangle) is expressed as the
//! intersection of its edge half-planes; a bounded Voronoi cell is the clip
//! rectangle cut by the bisector half-plane of every neighboring site.

use crate::math::{
    error::{MathError, MathResult},
    types::{Bounds2D, Point2D},
    utils::constants,
};

/// A closed half-plane `{ p | (p - origin) · normal <= 0 }`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfPlane {
    pub origin: Point2D,
    pub normal: Point2D,
}

impl HalfPlane {
    pub fn new(origin: Point2D, normal: Point2D) -> Self {
        Self { origin, normal }
    }

    /// The half-plane of points at least as close to `site` as to `other`.
    /// Its boundary is the perpendicular bisector of the two sites.
    pub fn bisector(site: Point2D, other: Point2D) -> Self {
        Self {
            origin: (site + other) * 0.5,
            normal: other - site,
        }
    }

    /// Signed distance scaled by `|normal|`; negative means inside.
    #[inline]
    pub fn signed_distance(&self, point: Point2D) -> f64 {
        (point - self.origin).dot(self.normal)
    }
}

/// Performs Sutherland-Hodgman clipping with a tolerance for on-edge points.
#[derive(Debug, Clone, Copy)]
pub struct PolygonClipper {
    tolerance: f64,
}

impl Default for PolygonClipper {
    /// Default tolerance: `constants::EPSILON`.
    fn default() -> Self {
        Self {
            tolerance: constants::EPSILON,
        }
    }
}

impl PolygonClipper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tolerance for floating-point comparisons used in the clipping process.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance.max(0.0);
        self
    }

    /// Clips the subject polygon against a single half-plane.
    ///
    /// The result keeps the winding of the subject. It may have fewer than
    /// three vertices when the subject lies (almost) entirely outside.
    pub fn clip_to_half_plane(&self, subject: &[Point2D], plane: &HalfPlane) -> Vec<Point2D> {
        let Some(&last) = subject.last() else {
            return Vec::new();
        };

        // `signed_distance` is scaled by the normal length.
        let tolerance = self.tolerance * plane.normal.length();
        let mut output = Vec::with_capacity(subject.len() + 1);
        let mut s = last;
        let mut s_dist = plane.signed_distance(s);

        for &e in subject {
            let e_dist = plane.signed_distance(e);
            let s_inside = s_dist <= tolerance;
            let e_inside = e_dist <= tolerance;

            if e_inside {
                if !s_inside {
                    output.push(crossing_point(s, s_dist, e, e_dist));
                }
                output.push(e);
            } else if s_inside {
                output.push(crossing_point(s, s_dist, e, e_dist));
            }
            s = e;
            s_dist = e_dist;
        }

        dedup_ring(output, self.tolerance)
    }

    /// Clips the subject polygon against every half-plane in turn.
    pub fn clip_to_half_planes<'a, I>(&self, subject: &[Point2D], planes: I) -> Vec<Point2D>
    where
        I: IntoIterator<Item = &'a HalfPlane>,
    {
        let mut current = subject.to_vec();
        for plane in planes {
            if current.len() < 3 {
                current.clear();
                break;
            }
            current = self.clip_to_half_plane(&current, plane);
        }
        current
    }

    /// Clips a polygon against an axis-aligned rectangle.
    /// Returns an empty list if nothing with positive extent remains.
    pub fn clip_polygon_against_rectangle(
        &self,
        subject: &[Point2D],
        clip_bounds: &Bounds2D,
    ) -> MathResult<Vec<Point2D>> {
        if subject.len() < 3 {
            return Err(MathError::InsufficientPoints {
                expected: 3,
                actual: subject.len(),
            });
        }
        if !clip_bounds.is_valid() {
            return Err(MathError::InvalidConfiguration {
                message: "Clip bounds are invalid.".to_string(),
            });
        }

        let planes = rectangle_half_planes(clip_bounds);
        let clipped = self.clip_to_half_planes(subject, planes.iter());
        Ok(if clipped.len() >= 3 { clipped } else { Vec::new() })
    }
}

/// The four inward half-planes of an axis-aligned rectangle.
pub fn rectangle_half_planes(bounds: &Bounds2D) -> [HalfPlane; 4] {
    [
        HalfPlane::new(bounds.min, Point2D::new(-1.0, 0.0)),
        HalfPlane::new(bounds.min, Point2D::new(0.0, -1.0)),
        HalfPlane::new(bounds.max, Point2D::new(1.0, 0.0)),
        HalfPlane::new(bounds.max, Point2D::new(0.0, 1.0)),
    ]
}

/// Point where segment s->e crosses the plane boundary.
#[inline]
fn crossing_point(s: Point2D, s_dist: f64, e: Point2D, e_dist: f64) -> Point2D {
    let denom = s_dist - e_dist;
    if denom.abs() < f64::MIN_POSITIVE {
        return s;
    }
    let t = (s_dist / denom).clamp(0.0, 1.0);
    s + (e - s) * t
}

/// Removes consecutive (and wrap-around) duplicate vertices.
pub fn dedup_ring(points: Vec<Point2D>, tolerance: f64) -> Vec<Point2D> {
    let mut result: Vec<Point2D> = Vec::with_capacity(points.len());
    for p in points {
        if result
            .last()
            .is_none_or(|last: &Point2D| last.distance(p) > tolerance)
        {
            result.push(p);
        }
    }
    while result.len() > 1 {
        let (first, last) = (result[0], result[result.len() - 1]);
        if first.distance(last) > tolerance {
            break;
        }
        result.pop();
    }
    result
}
