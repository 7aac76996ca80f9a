//! Geometry primitives shared by every entity builder
//!
//! Reprojection, coordinate-list formatting for WKT bodies, and pivot-based
//! application of the 2x2 entity transform.

use crate::proj;
use crate::types::{Point, Transform2};

/// Project a slice of geographic points (x = longitude, y = latitude,
/// degrees) into RD planar meters, preserving order.
pub fn points_to_rd(points: &[Point]) -> Vec<Point> {
    points.iter().map(|p| proj::wgs84_to_rd(p.y, p.x)).collect()
}

/// Render points as a WKT coordinate list: `x y` pairs joined by commas,
/// in input order.
pub fn coords_list(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{} {}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(",")
}

/// Apply a 2x2 linear transform about the first point of the list.
///
/// Every point is translated so the pivot becomes the origin, run through
/// the matrix, then translated back. An identity transform or an empty
/// list passes through untouched; the skip is required to be bit-identical
/// to not running the matrix at all, so the identity check is exact.
pub fn transform_points(transform: &Transform2, points: Vec<Point>) -> Vec<Point> {
    if points.is_empty() || transform.is_identity() {
        return points;
    }
    let pivot = points[0];
    points
        .into_iter()
        .map(|p| {
            let (x, y) = transform.apply(p.x - pivot.x, p.y - pivot.y);
            Point::new(x + pivot.x, y + pivot.y)
        })
        .collect()
}
