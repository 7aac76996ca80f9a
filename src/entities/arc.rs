//! Arc entity

use super::{EntityBase, FillType, LineType};
use crate::types::Point;
use serde::Deserialize;

/// A circular or elliptic arc, defined by the two opposite corners of its
/// bounding box and an angular window.
///
/// Whether the arc is a circle or an ellipse is not tagged on the entity;
/// the converter classifies it by comparing the projected half-extents.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArcEntity {
    #[serde(flatten)]
    pub base: EntityBase,
    pub point1: Point,
    pub point2: Point,
    /// Start angle in degrees
    #[serde(default)]
    pub start: f64,
    /// Angular extent in degrees; 360 with start 0 means a full sweep
    #[serde(default)]
    pub extent: f64,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub fill_type: Option<FillType>,
    #[serde(default)]
    pub line_type: Option<LineType>,
    #[serde(default)]
    pub line_width: f64,
}

impl ArcEntity {
    /// Whether the angular window covers the whole circle exactly
    pub fn is_full_sweep(&self) -> bool {
        self.start == 0.0 && self.extent == 360.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_sweep() {
        let mut arc: ArcEntity = serde_json::from_value(serde_json::json!({
            "id": "a1", "zLevel": 0, "attributes": [],
            "point1": {"x": 5.0, "y": 52.0},
            "point2": {"x": 5.01, "y": 52.01},
            "start": 0, "extent": 360,
            "color": "#000000", "lineWidth": 1.0
        }))
        .unwrap();
        assert!(arc.is_full_sweep());
        arc.start = 10.0;
        assert!(!arc.is_full_sweep());
    }
}
