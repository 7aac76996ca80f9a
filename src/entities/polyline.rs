//! Polyline entity (plain and smoothed)

use super::{EntityBase, FillType, LineType};
use crate::types::Point;
use serde::Deserialize;

/// A polyline or smoothed polyline (spline).
///
/// `type_list` holds one segment type code per position: '0' and '1' pass
/// a vertex through, '2' starts a quadratic curve segment, '3' a cubic
/// one, and a '4' marks the shape as closed. Plain polylines ignore the
/// curve codes entirely; only the trailing '4' matters for them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolyLineEntity {
    #[serde(flatten)]
    pub base: EntityBase,
    #[serde(default)]
    pub type_list: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub line_type: Option<LineType>,
    #[serde(default)]
    pub line_width: f64,
    #[serde(default)]
    pub alpha: Option<f64>,
    #[serde(default)]
    pub draw_outline: bool,
    #[serde(default)]
    pub point_list: Vec<Point>,
    #[serde(default)]
    pub fill_type: Option<FillType>,
}

impl PolyLineEntity {
    /// Whether the shape is closed (polygon rather than line)
    pub fn is_closed(&self) -> bool {
        self.type_list.ends_with('4')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_detection() {
        let mut pl: PolyLineEntity = serde_json::from_value(serde_json::json!({
            "id": "p1", "zLevel": 0, "attributes": [],
            "typeList": "0114",
            "pointList": [
                {"x": 5.0, "y": 52.0},
                {"x": 5.1, "y": 52.0},
                {"x": 5.1, "y": 52.1}
            ],
            "color": "#123456", "lineWidth": 1.0, "alpha": 1.0
        }))
        .unwrap();
        assert!(pl.is_closed());
        pl.type_list = "011".into();
        assert!(!pl.is_closed());
        pl.type_list = "40".into();
        assert!(!pl.is_closed());
    }
}
