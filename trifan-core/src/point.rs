//! Point types and related functionality

use nalgebra::{Point2, Vector2};

/// A 2D point with floating point coordinates
pub type Point2f = Point2<f32>;

/// A 2D vector with floating point components
pub type Vector2f = Vector2<f32>;

/// The raw bit patterns of a point's coordinates.
///
/// Used wherever exact coordinate equality is required (duplicate
/// detection, hashing): two points compare equal exactly when their
/// IEEE-754 representations do.
pub fn coordinate_bits(point: &Point2f) -> [u32; 2] {
    [point.x.to_bits(), point.y.to_bits()]
}
