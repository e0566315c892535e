//! Planar coordinate type.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A 2D coordinate in map units.
///
/// Coordinates are kept in `f64`: street networks routinely span
/// kilometres and `f32` loses sub-metre precision well before that.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    /// X coordinate (easting / longitude).
    pub x: f64,
    /// Y coordinate (northing / latitude).
    pub y: f64,
}

impl Point2D {
    /// Create a new point.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Origin.
    pub const ZERO: Point2D = Point2D { x: 0.0, y: 0.0 };

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(&self, other: Point2D) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Squared distance (avoids sqrt).
    #[inline]
    pub fn distance_squared(&self, other: Point2D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Check that both coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Dot product (as vectors).
    #[inline]
    pub fn dot(&self, other: Point2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Linear interpolation towards `other`.
    ///
    /// - `t = 0`: returns `self`
    /// - `t = 1`: returns `other`
    #[inline]
    pub fn lerp(&self, other: Point2D, t: f64) -> Point2D {
        Point2D::new(
            self.x + t * (other.x - self.x),
            self.y + t * (other.y - self.y),
        )
    }

    /// Check if two points coincide within `epsilon` on both axes.
    #[inline]
    pub fn approx_eq(&self, other: Point2D, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }

    /// Coordinates as an array (R-tree point form).
    #[inline]
    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Point2D::new(x, y)
    }
}

impl Add for Point2D {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Point2D::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point2D {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Point2D::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Point2D {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Point2D::new(self.x * scalar, self.y * scalar)
    }
}
