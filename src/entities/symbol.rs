//! Symbol entity

use super::EntityBase;
use crate::types::{Point, Transform2};
use serde::Deserialize;

/// A symbol placement referencing an external icon by identifier.
///
/// Symbols anchor to their parent part's origin; lacking one, to the
/// midpoint of their own bounding box.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolEntity {
    #[serde(flatten)]
    pub base: EntityBase,
    pub symbol: SymbolShape,
}

/// The nested symbol record on the wire
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolShape {
    #[serde(default)]
    pub transform: Transform2,
    /// External icon identifier (an image file name)
    pub symbol_id: String,
    #[serde(default)]
    pub alpha: Option<f64>,
    #[serde(default)]
    pub lower_left: Option<Point>,
    #[serde(default)]
    pub upper_right: Option<Point>,
}

impl SymbolShape {
    /// Midpoint of the bounding box, when both corners are present
    pub fn bounding_box_center(&self) -> Option<Point> {
        match (self.lower_left, self.upper_right) {
            (Some(ll), Some(ur)) => Some(Point::new((ll.x + ur.x) / 2.0, (ll.y + ur.y) / 2.0)),
            _ => None,
        }
    }
}
