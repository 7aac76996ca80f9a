//! 2x2 linear transform
//!
//! Rectangle (and symbol) entities carry a rotation/scale matrix without a
//! translation part. The converter applies it about a pivot point rather
//! than the origin, see [`crate::geometry::transform_points`].

use serde::Deserialize;

/// A 2x2 linear transform with m{row}{col} element naming,
/// matching the wire format of the drawing entities
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Transform2 {
    pub m00: f64,
    pub m10: f64,
    pub m01: f64,
    pub m11: f64,
}

impl Transform2 {
    /// Create a transform from its four elements
    pub const fn new(m00: f64, m10: f64, m01: f64, m11: f64) -> Self {
        Transform2 { m00, m10, m01, m11 }
    }

    /// Identity transform
    pub const IDENTITY: Transform2 = Transform2::new(1.0, 0.0, 0.0, 1.0);

    /// Rotation by `angle` radians (counter-clockwise)
    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Transform2::new(cos, sin, -sin, cos)
    }

    /// Exact identity check.
    ///
    /// Identity transforms are skipped entirely so the untouched input
    /// points come through bit-identical, which closed-ring detection
    /// downstream depends on.
    pub fn is_identity(&self) -> bool {
        self.m00 == 1.0 && self.m10 == 0.0 && self.m01 == 0.0 && self.m11 == 1.0
    }

    /// Apply the transform to an (x, y) pair
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (x * self.m00 + y * self.m01, x * self.m10 + y * self.m11)
    }
}

impl Default for Transform2 {
    fn default() -> Self {
        Transform2::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_identity() {
        assert!(Transform2::IDENTITY.is_identity());
        assert!(Transform2::default().is_identity());
        assert!(!Transform2::new(2.0, 0.0, 0.0, 2.0).is_identity());
        assert_eq!(Transform2::IDENTITY.apply(3.0, 4.0), (3.0, 4.0));
    }

    #[test]
    fn test_rotation() {
        let t = Transform2::rotation(PI / 2.0);
        let (x, y) = t.apply(1.0, 0.0);
        assert!(x.abs() < 1e-12);
        assert!((y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_scale() {
        let t = Transform2::new(2.0, 0.0, 0.0, 3.0);
        assert_eq!(t.apply(1.0, 1.0), (2.0, 3.0));
    }

    #[test]
    fn test_deserialize() {
        let t: Transform2 =
            serde_json::from_str(r#"{"m00": 1.0, "m10": 0.0, "m01": 0.0, "m11": 1.0}"#).unwrap();
        assert!(t.is_identity());
    }
}
