//! Adaptive quadratic and cubic curve flattening
//!
//! Converts parametric curve segments into polyline vertex sequences by
//! recursive midpoint subdivision with a flatness tolerance (the AGG
//! `curve3_div`/`curve4_div` scheme). Angle and cusp refinement are left at
//! their disabled defaults, so subdivision stops purely on the distance
//! criterion. Used by the smoothed polyline builder.
//!
//! Both entry points append the start point, the intermediate vertices and
//! the end point to the output list.

use crate::types::Point;

const RECURSION_LIMIT: usize = 8;
const FLT_EPSILON: f64 = 1.192_092_9e-7;
const PATH_DISTANCE_EPSILON: f64 = 1.0;

/// Flatten a quadratic segment defined by three control points.
///
/// `scale` tightens (>1) or loosens (<1) the flatness tolerance; the
/// converter always passes 1.
pub fn flatten_quadratic(start: Point, control: Point, end: Point, scale: f64, out: &mut Vec<Point>) {
    let tol = PATH_DISTANCE_EPSILON / scale;
    out.push(start);
    recursive_quadratic(start, control, end, tol * tol, 0, out);
    out.push(end);
}

/// Flatten a cubic segment defined by four control points.
pub fn flatten_cubic(
    start: Point,
    control1: Point,
    control2: Point,
    end: Point,
    scale: f64,
    out: &mut Vec<Point>,
) {
    let tol = PATH_DISTANCE_EPSILON / scale;
    out.push(start);
    recursive_cubic(start, control1, control2, end, tol * tol, 0, out);
    out.push(end);
}

fn sq_dist(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dx * dx + dy * dy
}

fn mid(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

fn recursive_quadratic(p1: Point, p2: Point, p3: Point, dist_tol: f64, level: usize, out: &mut Vec<Point>) {
    if level > RECURSION_LIMIT {
        return;
    }

    let p12 = mid(p1, p2);
    let p23 = mid(p2, p3);
    let p123 = mid(p12, p23);

    let dx = p3.x - p1.x;
    let dy = p3.y - p1.y;
    let d = ((p2.x - p3.x) * dy - (p2.y - p3.y) * dx).abs();

    if d > FLT_EPSILON {
        // Regular case: flat enough when the control point deviation
        // squared falls below the tolerance relative to the chord
        if d * d <= dist_tol * (dx * dx + dy * dy) {
            out.push(p123);
            return;
        }
    } else {
        // Collinear case: measure the control point against the chord
        let da = dx * dx + dy * dy;
        let d = if da == 0.0 {
            sq_dist(p1, p2)
        } else {
            let t = ((p2.x - p1.x) * dx + (p2.y - p1.y) * dy) / da;
            if t > 0.0 && t < 1.0 {
                // Degenerate but within the chord, no further subdivision
                return;
            }
            if t <= 0.0 {
                sq_dist(p2, p1)
            } else if t >= 1.0 {
                sq_dist(p2, p3)
            } else {
                sq_dist(p2, Point::new(p1.x + t * dx, p1.y + t * dy))
            }
        };
        if d < dist_tol {
            out.push(p2);
            return;
        }
    }

    recursive_quadratic(p1, p12, p123, dist_tol, level + 1, out);
    recursive_quadratic(p123, p23, p3, dist_tol, level + 1, out);
}

fn recursive_cubic(
    p1: Point,
    p2: Point,
    p3: Point,
    p4: Point,
    dist_tol: f64,
    level: usize,
    out: &mut Vec<Point>,
) {
    if level > RECURSION_LIMIT {
        return;
    }

    let p12 = mid(p1, p2);
    let p23 = mid(p2, p3);
    let p34 = mid(p3, p4);
    let p123 = mid(p12, p23);
    let p234 = mid(p23, p34);
    let p1234 = mid(p123, p234);

    let dx = p4.x - p1.x;
    let dy = p4.y - p1.y;
    let d2 = ((p2.x - p4.x) * dy - (p2.y - p4.y) * dx).abs();
    let d3 = ((p3.x - p4.x) * dy - (p3.y - p4.y) * dx).abs();

    match ((d2 > FLT_EPSILON) as u8) << 1 | (d3 > FLT_EPSILON) as u8 {
        0 => {
            // All points collinear, or the segment has collapsed
            let k = dx * dx + dy * dy;
            let (d2, d3) = if k == 0.0 {
                (sq_dist(p1, p2), sq_dist(p4, p3))
            } else {
                let t2 = ((p2.x - p1.x) * dx + (p2.y - p1.y) * dy) / k;
                let t3 = ((p3.x - p1.x) * dx + (p3.y - p1.y) * dy) / k;
                if t2 > 0.0 && t2 < 1.0 && t3 > 0.0 && t3 < 1.0 {
                    return;
                }
                let d2 = if t2 <= 0.0 {
                    sq_dist(p2, p1)
                } else if t2 >= 1.0 {
                    sq_dist(p2, p4)
                } else {
                    sq_dist(p2, Point::new(p1.x + t2 * dx, p1.y + t2 * dy))
                };
                let d3 = if t3 <= 0.0 {
                    sq_dist(p3, p1)
                } else if t3 >= 1.0 {
                    sq_dist(p3, p4)
                } else {
                    sq_dist(p3, Point::new(p1.x + t3 * dx, p1.y + t3 * dy))
                };
                (d2, d3)
            };
            if d2 > d3 {
                if d2 < dist_tol {
                    out.push(p2);
                    return;
                }
            } else if d3 < dist_tol {
                out.push(p3);
                return;
            }
        }
        1 => {
            // p1, p2, p4 collinear
            if d3 * d3 <= dist_tol * (dx * dx + dy * dy) {
                out.push(p23);
                return;
            }
        }
        2 => {
            // p1, p3, p4 collinear
            if d2 * d2 <= dist_tol * (dx * dx + dy * dy) {
                out.push(p23);
                return;
            }
        }
        _ => {
            let d = d2 + d3;
            if d * d <= dist_tol * (dx * dx + dy * dy) {
                out.push(p23);
                return;
            }
        }
    }

    recursive_cubic(p1, p12, p123, p1234, dist_tol, level + 1, out);
    recursive_cubic(p1234, p234, p34, p4, dist_tol, level + 1, out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadratic_endpoints() {
        let mut out = Vec::new();
        flatten_quadratic(
            Point::new(0.0, 0.0),
            Point::new(50.0, 100.0),
            Point::new(100.0, 0.0),
            1.0,
            &mut out,
        );
        assert_eq!(out.first().copied(), Some(Point::new(0.0, 0.0)));
        assert_eq!(out.last().copied(), Some(Point::new(100.0, 0.0)));
        // A strongly curved segment needs interior vertices
        assert!(out.len() > 4, "only {} points", out.len());
    }

    #[test]
    fn test_quadratic_collinear() {
        let mut out = Vec::new();
        flatten_quadratic(
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(10.0, 0.0),
            1.0,
            &mut out,
        );
        // Straight control polygon flattens to the two endpoints
        assert_eq!(out, vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)]);
    }

    #[test]
    fn test_cubic_endpoints() {
        let mut out = Vec::new();
        flatten_cubic(
            Point::new(0.0, 0.0),
            Point::new(0.0, 100.0),
            Point::new(100.0, 100.0),
            Point::new(100.0, 0.0),
            1.0,
            &mut out,
        );
        assert_eq!(out.first().copied(), Some(Point::new(0.0, 0.0)));
        assert_eq!(out.last().copied(), Some(Point::new(100.0, 0.0)));
        assert!(out.len() > 6, "only {} points", out.len());
    }

    #[test]
    fn test_cubic_interior_points_on_curve() {
        let p1 = Point::new(0.0, 0.0);
        let c1 = Point::new(30.0, 90.0);
        let c2 = Point::new(70.0, 90.0);
        let p2 = Point::new(100.0, 0.0);
        let mut out = Vec::new();
        flatten_cubic(p1, c1, c2, p2, 1.0, &mut out);
        // Every emitted vertex must lie close to the exact curve
        for v in &out {
            let mut best = f64::MAX;
            for i in 0..=1000 {
                let t = i as f64 / 1000.0;
                let u = 1.0 - t;
                let x = u * u * u * p1.x + 3.0 * u * u * t * c1.x + 3.0 * u * t * t * c2.x + t * t * t * p2.x;
                let y = u * u * u * p1.y + 3.0 * u * u * t * c1.y + 3.0 * u * t * t * c2.y + t * t * t * p2.y;
                best = best.min(v.distance(&Point::new(x, y)));
            }
            assert!(best < 1.5, "vertex {:?} is {} off the curve", v, best);
        }
    }

    #[test]
    fn test_tighter_scale_gives_more_points() {
        let run = |scale: f64| {
            let mut out = Vec::new();
            flatten_cubic(
                Point::new(0.0, 0.0),
                Point::new(0.0, 200.0),
                Point::new(200.0, 200.0),
                Point::new(200.0, 0.0),
                scale,
                &mut out,
            );
            out.len()
        };
        assert!(run(10.0) >= run(1.0));
    }
}
