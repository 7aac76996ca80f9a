//! Poly-arrow entity

use super::{EntityBase, LineType};
use crate::types::Point;
use serde::Deserialize;

/// A polyline that may carry arrow heads on either end
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolyArrowEntity {
    #[serde(flatten)]
    pub base: EntityBase,
    #[serde(default)]
    pub point_list: Vec<Point>,
    #[serde(default)]
    pub alpha: Option<f64>,
    pub style: ArrowStyle,
}

/// Arrow styling, carried in a nested style record on the wire
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowStyle {
    #[serde(default)]
    pub name: String,
    /// Packed RGB stroke color
    #[serde(default)]
    pub color: i64,
    #[serde(default)]
    pub line_type: Option<LineType>,
    #[serde(default)]
    pub line_weight: f64,
    #[serde(default)]
    pub arrow_width: f64,
    #[serde(default)]
    pub arrow_length: f64,
    #[serde(default)]
    pub arrow_type: i32,
    #[serde(default)]
    pub arrow_start: bool,
    #[serde(default)]
    pub arrow_end: bool,
}

impl ArrowStyle {
    /// Arrow-head code: 0 = none, 1 = start, 2 = end, 3 = both
    pub fn arrow_code(&self) -> u8 {
        match (self.arrow_start, self.arrow_end) {
            (true, true) => 3,
            (true, false) => 1,
            (false, true) => 2,
            (false, false) => 0,
        }
    }
}
