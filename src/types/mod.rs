//! Core value types shared by the data model and the converter

pub mod point;
pub mod transform;

pub use point::Point;
pub use transform::Transform2;

/// Render a numeric RGB color as a `#rrggbb` hex string.
///
/// The upper byte (alpha or garbage, depending on the producer) is masked
/// off; the result is always 7 characters.
pub fn to_hex_color(color: i64) -> String {
    format!("#{:06x}", color & 0xffffff)
}

/// Scale a raw entity line width to a stroke width, floored at 1 unit.
pub fn to_stroke_width(width: f64) -> f64 {
    (width * 1.5).max(1.0)
}
