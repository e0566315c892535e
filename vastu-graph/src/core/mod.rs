//! Geometry types for spatial graphs.
//!
//! - [`Point2D`]: node coordinates
//! - [`Polyline`]: edge geometries with length, projection and interpolation

mod point;
mod polyline;

pub use point::Point2D;
pub use polyline::Polyline;
