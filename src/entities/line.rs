//! Line entity

use super::{EntityBase, LineType};
use crate::types::Point;
use serde::Deserialize;

/// A straight line between two geographic points
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineEntity {
    #[serde(flatten)]
    pub base: EntityBase,
    pub point1: Point,
    pub point2: Point,
    /// Stroke color as a hex string
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub line_type: Option<LineType>,
    #[serde(default)]
    pub line_width: f64,
    /// Stroke opacity
    #[serde(default)]
    pub alpha: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_flattened_base() {
        let line: LineEntity = serde_json::from_value(serde_json::json!({
            "id": "l1", "zLevel": -1, "attributes": [],
            "point1": {"x": 5.0, "y": 52.0},
            "point2": {"x": 5.2, "y": 52.2},
            "color": "#00ff00", "lineType": {"name": "dashed"},
            "lineWidth": 2.0, "alpha": 0.5
        }))
        .unwrap();
        assert_eq!(line.base.id, "l1");
        assert_eq!(line.base.z_level, -1);
        assert_eq!(line.line_type.unwrap().name, "dashed");
        assert_eq!(line.alpha, Some(0.5));
    }
}
