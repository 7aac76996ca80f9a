//! Stroke text entity

use super::{EntityBase, FillType};
use crate::types::Point;
use serde::Deserialize;

/// A text label drawn with stroke fonts
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokeTextEntity {
    #[serde(flatten)]
    pub base: EntityBase,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub text_origin: Option<Point>,
    /// Rotation in radians, clockwise from east
    #[serde(default)]
    pub text_angle: f64,
    #[serde(default)]
    pub origin: Point,
    #[serde(default)]
    pub alpha: Option<f64>,
    pub style: StrokeTextStyle,
}

/// The nested text style record on the wire
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokeTextStyle {
    #[serde(default)]
    pub style_name: String,
    #[serde(default)]
    pub character_color: String,
    #[serde(default)]
    pub character_line: f64,
    #[serde(default)]
    pub character_size: f64,
    #[serde(default)]
    pub character_slant: f64,
    #[serde(default)]
    pub character_angle: f64,
    #[serde(default)]
    pub relative_width: f64,
    #[serde(default)]
    pub relative_spacing: f64,
    #[serde(default)]
    pub relative_line_distance: f64,
    #[serde(default)]
    pub mono_spacing: bool,
    /// Keypad-style anchor code 1-9: columns map to left/center/right,
    /// rows to bottom/middle/top
    #[serde(default)]
    pub reference: i32,
    /// 0 means no balloon background behind the text
    #[serde(default)]
    pub balloon_type: i32,
    #[serde(default)]
    pub balloon_line_width: f64,
    #[serde(default)]
    pub balloon_color: String,
    #[serde(default)]
    pub balloon_radius: f64,
    #[serde(default)]
    pub include_reference_pointer: bool,
    #[serde(default)]
    pub balloon_fill_type: Option<FillType>,
    #[serde(default)]
    pub stroke_font_name: String,
}
