//! 2D point type
//!
//! Points are plain (x, y) pairs. Two coordinate spaces flow through the
//! converter: geographic WGS84 degrees on the input side and planar RD
//! meters after projection. The space is determined by pipeline position,
//! never tagged on the value, so callers must not mix the two.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// A 2D point (or vector - the converter does not distinguish)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Origin point
    pub const ZERO: Point = Point::new(0.0, 0.0);

    /// Midpoint between this point and another
    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new(
            self.x + (other.x - self.x) / 2.0,
            self.y + (other.y - self.y) / 2.0,
        )
    }

    /// Distance to another point
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Exact bitwise equality, used for closed-ring detection where an
    /// epsilon comparison would alter geometry classification
    pub fn bit_eq(&self, other: &Point) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl Default for Point {
    fn default() -> Self {
        Point::ZERO
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, scalar: f64) -> Point {
        Point::new(self.x * scalar, self.y * scalar)
    }
}

impl Div<f64> for Point {
    type Output = Point;
    fn div(self, scalar: f64) -> Point {
        Point::new(self.x / scalar, self.y / scalar)
    }
}
