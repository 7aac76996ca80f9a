//! Rectangle entity

use super::{EntityBase, FillType, LineType};
use crate::types::{Point, Transform2};
use serde::Deserialize;

/// An axis-aligned rectangle defined by two opposite corners, optionally
/// rotated/scaled by a 2x2 transform pivoted at the first corner
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectangleEntity {
    #[serde(flatten)]
    pub base: EntityBase,
    pub point1: Point,
    pub point2: Point,
    #[serde(default)]
    pub transform: Transform2,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub fill_type: Option<FillType>,
    #[serde(default)]
    pub line_type: Option<LineType>,
    #[serde(default)]
    pub line_width: f64,
    #[serde(default)]
    pub alpha: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_transform_defaults_to_identity() {
        let rect: RectangleEntity = serde_json::from_value(serde_json::json!({
            "id": "r1", "zLevel": 0, "attributes": [],
            "point1": {"x": 5.0, "y": 52.0},
            "point2": {"x": 5.1, "y": 52.1},
            "color": "#000000", "lineWidth": 1.0
        }))
        .unwrap();
        assert!(rect.transform.is_identity());
    }
}
