//! Fan triangulation and its input validation

use std::collections::HashSet;

use trifan_core::{coordinate_bits, Error, Point2f, Result, Triangle};

/// Tolerance on the colinearity cross-product test, sized for inputs
/// that went through 32-bit float precision.
pub const COLINEARITY_EPSILON: f64 = 1e-5;

/// 2D cross product of (p1 - p0) and (p - p0), evaluated in f64.
fn cross(p0: &Point2f, p1: &Point2f, p: &Point2f) -> f64 {
    (f64::from(p1.x) - f64::from(p0.x)) * (f64::from(p.y) - f64::from(p0.y))
        - (f64::from(p.x) - f64::from(p0.x)) * (f64::from(p1.y) - f64::from(p0.y))
}

fn is_colinear(p0: &Point2f, p1: &Point2f, p: &Point2f) -> bool {
    cross(p0, p1, p).abs() < COLINEARITY_EPSILON
}

/// Check that a point set is suitable for fan triangulation.
///
/// Preconditions are checked in a fixed order and the first violation
/// wins: point count, then duplicates, then colinearity.
pub fn validate_point_set(points: &[Point2f]) -> Result<()> {
    if points.len() < 3 {
        return Err(Error::InvalidPointSet(
            "At least 3 points are required.".to_string(),
        ));
    }

    let mut seen = HashSet::with_capacity(points.len());
    for point in points {
        // Exact coordinate equality, compared on the raw bit patterns.
        if !seen.insert(coordinate_bits(point)) {
            return Err(Error::InvalidPointSet(
                "Duplicate points detected.".to_string(),
            ));
        }
    }

    let (p0, p1) = (&points[0], &points[1]);
    if points[2..].iter().all(|p| is_colinear(p0, p1, p)) {
        return Err(Error::InvalidPointSet("Points are colinear.".to_string()));
    }

    Ok(())
}

/// Triangulate a point set as a fan around vertex 0.
///
/// Emits `[0, i, i+1]` for `i` in `1..n-1`, in increasing order and with
/// the indices in exactly that order. A valid input of `n` points yields
/// exactly `n - 2` triangles, every one sharing vertex 0 as apex.
pub fn triangulate(points: &[Point2f]) -> Result<Vec<Triangle>> {
    validate_point_set(points)?;

    let n = points.len() as u32;
    Ok((1..n - 1).map(|i| [0, i, i + 1]).collect())
}
