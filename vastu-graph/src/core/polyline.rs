//! Polyline geometry carried by graph edges.
//!
//! A polyline is an ordered list of at least two vertices. Distances along
//! the line are measured from the first vertex, so `project` and
//! `interpolate` are inverse operations for points on the line.
//!
//! # Point-to-Segment Projection
//!
//! ```text
//! t = dot(p - a, b - a) / |b - a|²     clamped to [0, 1]
//! foot = a + t * (b - a)
//! ```
//!
//! The polyline projection picks the segment whose foot is closest to `p`
//! (first segment wins on ties) and returns the walked length up to it.

use serde::{Deserialize, Serialize};

use super::Point2D;
use crate::error::{MergeError, Result};

/// Closest point on the segment `a → b` to `p`, as a clamped parameter.
#[inline]
fn segment_parameter(a: Point2D, b: Point2D, p: Point2D) -> f64 {
    let dir = b - a;
    let len_sq = dir.dot(dir);

    if len_sq <= 0.0 {
        // Degenerate segment
        return 0.0;
    }

    ((p - a).dot(dir) / len_sq).clamp(0.0, 1.0)
}

/// An ordered line geometry with two or more vertices.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point2D>", into = "Vec<Point2D>")]
pub struct Polyline {
    points: Vec<Point2D>,
}

impl Polyline {
    /// Create a polyline from its vertices.
    ///
    /// Fails with [`MergeError::GeometryInconsistency`] for fewer than two
    /// vertices or non-finite coordinates.
    pub fn new(points: Vec<Point2D>) -> Result<Self> {
        if points.len() < 2 {
            return Err(MergeError::GeometryInconsistency(format!(
                "a line needs at least 2 vertices, got {}",
                points.len()
            )));
        }
        if !points.iter().all(Point2D::is_finite) {
            return Err(MergeError::GeometryInconsistency(
                "line has non-finite coordinates".to_string(),
            ));
        }
        Ok(Self { points })
    }

    /// Straight two-vertex segment.
    #[inline]
    pub fn segment(start: Point2D, end: Point2D) -> Self {
        Self {
            points: vec![start, end],
        }
    }

    /// Build from vertices that are known to be non-empty, repeating a lone
    /// vertex to form a zero-length line.
    pub(crate) fn from_vertices(mut points: Vec<Point2D>) -> Self {
        if points.len() == 1 {
            points.push(points[0]);
        }
        debug_assert!(points.len() >= 2);
        Self { points }
    }

    /// Vertices in order.
    #[inline]
    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    /// First vertex.
    #[inline]
    pub fn start(&self) -> Point2D {
        self.points[0]
    }

    /// Last vertex.
    #[inline]
    pub fn end(&self) -> Point2D {
        self.points[self.points.len() - 1]
    }

    /// Same vertices in reverse order.
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }

    /// Total length.
    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| w[0].distance(w[1])).sum()
    }

    /// Squared distance from `point` to the closest point on the line.
    pub fn distance_squared_to_point(&self, point: Point2D) -> f64 {
        self.points
            .windows(2)
            .map(|w| {
                let t = segment_parameter(w[0], w[1], point);
                point.distance_squared(w[0].lerp(w[1], t))
            })
            .fold(f64::INFINITY, f64::min)
    }

    /// Distance from `point` to the closest point on the line.
    #[inline]
    pub fn distance_to_point(&self, point: Point2D) -> f64 {
        self.distance_squared_to_point(point).sqrt()
    }

    /// Distance along the line to the point closest to `point`.
    ///
    /// Always in `[0, length]`.
    pub fn project(&self, point: Point2D) -> f64 {
        let mut best_dist_sq = f64::INFINITY;
        let mut best_along = 0.0;
        let mut walked = 0.0;

        for w in self.points.windows(2) {
            let seg_len = w[0].distance(w[1]);
            let t = segment_parameter(w[0], w[1], point);
            let dist_sq = point.distance_squared(w[0].lerp(w[1], t));

            if dist_sq < best_dist_sq {
                best_dist_sq = dist_sq;
                best_along = walked + t * seg_len;
            }
            walked += seg_len;
        }

        best_along
    }

    /// Point at `distance` along the line, clamped to the line's extent.
    pub fn interpolate(&self, distance: f64) -> Point2D {
        if distance <= 0.0 {
            return self.start();
        }

        let mut walked = 0.0;
        for w in self.points.windows(2) {
            let seg_len = w[0].distance(w[1]);
            if seg_len > 0.0 && walked + seg_len >= distance {
                return w[0].lerp(w[1], (distance - walked) / seg_len);
            }
            walked += seg_len;
        }

        self.end()
    }

    /// Check both endpoints against a pair of coordinates.
    pub fn connects(&self, from: Point2D, to: Point2D, epsilon: f64) -> bool {
        self.start().approx_eq(from, epsilon) && self.end().approx_eq(to, epsilon)
    }
}

impl TryFrom<Vec<Point2D>> for Polyline {
    type Error = MergeError;

    fn try_from(points: Vec<Point2D>) -> Result<Self> {
        Self::new(points)
    }
}

impl From<Polyline> for Vec<Point2D> {
    fn from(line: Polyline) -> Self {
        line.points
    }
}
