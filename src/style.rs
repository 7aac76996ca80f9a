//! Style mapper
//!
//! Derives one normalized [`FeatureStyle`] record from the heterogeneous
//! per-entity-kind style fields. Each builder assembles a [`StyleSource`]
//! view over its own fields and gets back a fully formed record.

use crate::entities::{FillType, LineType};
use crate::feature::FeatureStyle;
use crate::types::{to_hex_color, to_stroke_width};

/// Dash pattern codes
pub const STROKE_SOLID: u8 = 0;
pub const STROKE_DASHED: u8 = 1;
pub const STROKE_DOTTED: u8 = 2;

/// Fill opacity applied whenever an entity carries any fill at all
const FILLED_OPACITY: f64 = 0.5;

/// Borrowed view over the style-bearing fields of an entity
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleSource<'a> {
    pub fill_type: Option<&'a FillType>,
    pub line_type: Option<&'a LineType>,
    pub line_width: Option<f64>,
    pub color: Option<&'a str>,
    pub alpha: Option<f64>,
}

/// Map entity style fields to a normalized feature style.
///
/// Fill opacity is a fixed constant when any fill is present, zero
/// otherwise; the fill color only carries over when the fill's paint
/// supplies one. The dash pattern comes from a substring match on the
/// line-type name, defaulting to solid.
pub fn map_style(src: StyleSource<'_>) -> FeatureStyle {
    let fill_color = src
        .fill_type
        .and_then(|f| f.paint.as_ref())
        .filter(|p| p.color1 != 0)
        .map(|p| to_hex_color(p.color1))
        .unwrap_or_default();

    let stroke_type = match src.line_type.map(|lt| lt.name.as_str()) {
        Some(name) if name.contains("dot") => STROKE_DOTTED,
        Some(name) if name.contains("dash") => STROKE_DASHED,
        _ => STROKE_SOLID,
    };

    FeatureStyle {
        fill_opacity: Some(if src.fill_type.is_some() {
            FILLED_OPACITY
        } else {
            0.0
        }),
        fill_color: Some(fill_color),
        stroke_color: src.color.map(str::to_string),
        stroke_opacity: src.alpha,
        stroke_type: Some(stroke_type),
        stroke_width: src.line_width.map(to_stroke_width),
        ..FeatureStyle::default()
    }
}
