//! Output feature model
//!
//! One [`Feature`] per converted drawing primitive: a WKT-style geometry
//! string plus an attribute bag and a normalized style bag. Features are
//! built once, fully, and never mutated afterwards; fields that a given
//! entity kind does not produce stay `None` and are omitted from the
//! serialized output.

use serde::Serialize;

/// Geometry family / tool type of a feature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GeometryKind {
    Point,
    LineString,
    Polygon,
    Circle,
}

/// Horizontal label anchoring, derived from the keypad-style reference code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Vertical label anchoring, derived from the keypad-style reference code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextBaseline {
    Bottom,
    Middle,
    Top,
}

/// Attribute bag of an output feature
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureAttributes {
    /// Drawing tool code of the target system
    pub tool: u8,
    /// Geometry family tag
    #[serde(rename = "type")]
    pub kind: GeometryKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_feature: Option<bool>,
    /// Circle radius in planar meters (full-sweep circles only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    /// Resolved symbol code (symbol features only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_direction: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mal_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mal_number: Option<f64>,
}

impl FeatureAttributes {
    /// Attribute bag with only the tool code and geometry family set
    pub fn new(tool: u8, kind: GeometryKind) -> Self {
        FeatureAttributes {
            tool,
            kind,
            scale_feature: None,
            radius: None,
            symbol: None,
            wind_direction: None,
            mal_color: None,
            mal_number: None,
        }
    }
}

/// Normalized style bag of an output feature
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_opacity: Option<f64>,
    /// 0 = solid, 1 = dashed, 2 = dotted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_type: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    /// Arrow heads: 0 = none, 1 = start, 2 = end, 3 = both
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrow: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub halo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_label: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_background_fill: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_background_stroke: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_background_stroke_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_baseline: Option<TextBaseline>,
    /// Label rotation in degrees, 0-360 counter-clockwise
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

/// A single converted output feature
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub show_in_legend: bool,
    pub z_index: i64,
    /// WKT-like geometry string (POINT / LINESTRING / POLYGON)
    pub geometry: String,
    pub attributes: FeatureAttributes,
    pub style: FeatureStyle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_fields_are_omitted() {
        let f = Feature {
            id: "e1".into(),
            name: Some("e1".into()),
            show_in_legend: false,
            z_index: -2,
            geometry: "POINT(1 2)".into(),
            attributes: FeatureAttributes::new(2, GeometryKind::Circle),
            style: FeatureStyle::default(),
        };
        let json = serde_json::to_string(&f).unwrap();
        assert!(json.contains(r#""type":"Circle""#));
        assert!(json.contains(r#""zIndex":-2"#));
        assert!(!json.contains("radius"));
        assert!(json.contains(r#""style":{}"#));
    }

    #[test]
    fn test_text_alignment_serialization() {
        assert_eq!(serde_json::to_string(&TextAlign::Left).unwrap(), "\"left\"");
        assert_eq!(
            serde_json::to_string(&TextBaseline::Middle).unwrap(),
            "\"middle\""
        );
    }

    #[test]
    fn test_attribute_key_names() {
        let mut attrs = FeatureAttributes::new(8, GeometryKind::Point);
        attrs.wind_direction = Some(90.0);
        attrs.mal_color = Some("Rood".into());
        attrs.mal_number = Some(3.0);
        let json = serde_json::to_string(&attrs).unwrap();
        assert!(json.contains(r#""windDirection":90.0"#));
        assert!(json.contains(r#""malColor":"Rood""#));
        assert!(json.contains(r#""malNumber":3.0"#));
    }
}
