//! Action-layer entity types
//!
//! The input data model of the drawing format: one module per entity kind
//! plus the shared base record, the named-attribute bundles, and the closed
//! [`Entity`] sum type the converter dispatches on.
//!
//! Entities are deserialized once per document and never mutated during
//! conversion; builders that need to normalize fields (arc start/extent
//! ordering, for example) do so in local variables.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ConvertError, Result};

pub mod arc;
pub mod line;
pub mod part;
pub mod polyarrow;
pub mod polyline;
pub mod rectangle;
pub mod stroke_text;
pub mod symbol;

pub use arc::ArcEntity;
pub use line::LineEntity;
pub use part::PartEntity;
pub use polyarrow::{ArrowStyle, PolyArrowEntity};
pub use polyline::PolyLineEntity;
pub use rectangle::RectangleEntity;
pub use stroke_text::{StrokeTextEntity, StrokeTextStyle};
pub use symbol::{SymbolEntity, SymbolShape};

/// Fields common to every entity kind
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityBase {
    /// Stable identifier, unique within a document
    pub id: String,
    /// Z-order level; the sign convention changed across format revisions,
    /// see [`crate::config::ZOrderPolicy`]
    #[serde(default)]
    pub z_level: i64,
    /// Free-form named attribute bundles. Keys need not be unique; lookups
    /// take the first match
    #[serde(default)]
    pub attributes: Vec<AttributeBundle>,
}

/// A named bundle of key/value attribute items
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeBundle {
    pub name: String,
    #[serde(default)]
    pub attribute_items: Vec<AttributeItem>,
}

/// One key/value pair inside an attribute bundle
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeItem {
    pub name: String,
    pub attribute_value: Value,
}

impl AttributeBundle {
    /// First item with the given name
    pub fn item(&self, name: &str) -> Option<&Value> {
        self.attribute_items
            .iter()
            .find(|i| i.name == name)
            .map(|i| &i.attribute_value)
    }

    /// Item value as a string, erroring when absent
    pub fn item_str(&self, name: &str) -> Result<String> {
        match self.item(name) {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(v) => Ok(v.to_string()),
            None => Err(ConvertError::MissingAttribute(format!(
                "{}.{}",
                self.name, name
            ))),
        }
    }

    /// Item value as a number, accepting both numeric and stringified
    /// values, erroring when absent or non-numeric
    pub fn item_f64(&self, name: &str) -> Result<f64> {
        let value = self.item(name).ok_or_else(|| {
            ConvertError::MissingAttribute(format!("{}.{}", self.name, name))
        })?;
        match value {
            Value::Number(n) => n.as_f64().ok_or_else(|| {
                ConvertError::Custom(format!("attribute {}.{} is not numeric", self.name, name))
            }),
            Value::String(s) => s.trim().parse().map_err(|_| {
                ConvertError::Custom(format!("attribute {}.{} is not numeric", self.name, name))
            }),
            _ => Err(ConvertError::Custom(format!(
                "attribute {}.{} is not numeric",
                self.name, name
            ))),
        }
    }
}

/// Fill style shared by several entity kinds
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillType {
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub paint: Option<Paint>,
}

/// Paint record inside a fill type
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paint {
    #[serde(default)]
    pub mode: bool,
    /// Packed RGB color
    #[serde(default)]
    pub color1: i64,
    #[serde(default)]
    pub name: String,
}

/// Named line type; only the name matters (dash pattern comes from a
/// substring match on it)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineType {
    #[serde(default)]
    pub name: String,
}

/// Kind tags of the drawing format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Line,
    Arc,
    PolyLine,
    PolyArrow,
    SmoothPolyLine,
    Rectangle,
    Part,
    Symbol,
    StrokeText,
}

impl EntityKind {
    /// Parse a wire kind tag
    pub fn from_tag(tag: &str) -> Option<EntityKind> {
        Some(match tag {
            "Lne" => EntityKind::Line,
            "Arc" => EntityKind::Arc,
            "PLn" => EntityKind::PolyLine,
            "PAr" => EntityKind::PolyArrow,
            "Spl" => EntityKind::SmoothPolyLine,
            "Rct" => EntityKind::Rectangle,
            "Prt" => EntityKind::Part,
            "Syn" => EntityKind::Symbol,
            "STx" => EntityKind::StrokeText,
            _ => return None,
        })
    }

    /// The wire kind tag
    pub fn as_tag(&self) -> &'static str {
        match self {
            EntityKind::Line => "Lne",
            EntityKind::Arc => "Arc",
            EntityKind::PolyLine => "PLn",
            EntityKind::PolyArrow => "PAr",
            EntityKind::SmoothPolyLine => "Spl",
            EntityKind::Rectangle => "Rct",
            EntityKind::Part => "Prt",
            EntityKind::Symbol => "Syn",
            EntityKind::StrokeText => "STx",
        }
    }
}

/// A decoded drawing entity; one variant per supported kind.
///
/// Smoothed and plain polylines share a body type, they differ only in
/// how the converter interprets the segment type codes.
#[derive(Debug, Clone)]
pub enum Entity {
    Line(LineEntity),
    Arc(ArcEntity),
    PolyLine(PolyLineEntity),
    PolyArrow(PolyArrowEntity),
    SmoothPolyLine(PolyLineEntity),
    Rectangle(RectangleEntity),
    Part(PartEntity),
    Symbol(SymbolEntity),
    StrokeText(StrokeTextEntity),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Line(_) => EntityKind::Line,
            Entity::Arc(_) => EntityKind::Arc,
            Entity::PolyLine(_) => EntityKind::PolyLine,
            Entity::PolyArrow(_) => EntityKind::PolyArrow,
            Entity::SmoothPolyLine(_) => EntityKind::SmoothPolyLine,
            Entity::Rectangle(_) => EntityKind::Rectangle,
            Entity::Part(_) => EntityKind::Part,
            Entity::Symbol(_) => EntityKind::Symbol,
            Entity::StrokeText(_) => EntityKind::StrokeText,
        }
    }

    pub fn base(&self) -> &EntityBase {
        match self {
            Entity::Line(e) => &e.base,
            Entity::Arc(e) => &e.base,
            Entity::PolyLine(e) | Entity::SmoothPolyLine(e) => &e.base,
            Entity::PolyArrow(e) => &e.base,
            Entity::Rectangle(e) => &e.base,
            Entity::Part(e) => &e.base,
            Entity::Symbol(e) => &e.base,
            Entity::StrokeText(e) => &e.base,
        }
    }

    pub fn id(&self) -> &str {
        &self.base().id
    }
}

/// An indexed entity record: a decoded entity of a supported kind, or the
/// raw kind tag of one this converter has no builder for.
///
/// Unsupported kinds are legal documents, so the document must still index
/// and traverse them; the failure surfaces per entity during conversion,
/// not while parsing.
#[derive(Debug, Clone)]
pub enum EntityRecord {
    Supported(Entity),
    Unsupported { id: String, kind: String },
}

impl EntityRecord {
    /// Decode one raw wire record.
    ///
    /// A known kind with a body that does not deserialize is a malformed
    /// document and fails hard; an unknown kind is kept as-is.
    pub fn decode(kind_tag: &str, body: Value) -> Result<EntityRecord> {
        fn parse<T: serde::de::DeserializeOwned>(kind: &str, body: Value) -> Result<T> {
            serde_json::from_value(body)
                .map_err(|e| ConvertError::DocumentParse(format!("bad {kind} entity: {e}")))
        }

        let Some(kind) = EntityKind::from_tag(kind_tag) else {
            let id = body
                .get("id")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            return Ok(EntityRecord::Unsupported {
                id,
                kind: kind_tag.to_string(),
            });
        };

        let entity = match kind {
            EntityKind::Line => Entity::Line(parse(kind_tag, body)?),
            EntityKind::Arc => Entity::Arc(parse(kind_tag, body)?),
            EntityKind::PolyLine => Entity::PolyLine(parse(kind_tag, body)?),
            EntityKind::PolyArrow => Entity::PolyArrow(parse(kind_tag, body)?),
            EntityKind::SmoothPolyLine => Entity::SmoothPolyLine(parse(kind_tag, body)?),
            EntityKind::Rectangle => Entity::Rectangle(parse(kind_tag, body)?),
            EntityKind::Part => Entity::Part(parse(kind_tag, body)?),
            EntityKind::Symbol => Entity::Symbol(parse(kind_tag, body)?),
            EntityKind::StrokeText => Entity::StrokeText(parse(kind_tag, body)?),
        };
        Ok(EntityRecord::Supported(entity))
    }

    pub fn id(&self) -> &str {
        match self {
            EntityRecord::Supported(e) => e.id(),
            EntityRecord::Unsupported { id, .. } => id,
        }
    }

    /// Wire kind tag, for diagnostics
    pub fn kind_tag(&self) -> &str {
        match self {
            EntityRecord::Supported(e) => e.kind().as_tag(),
            EntityRecord::Unsupported { kind, .. } => kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_tag_roundtrip() {
        for tag in ["Lne", "Arc", "PLn", "PAr", "Spl", "Rct", "Prt", "Syn", "STx"] {
            let kind = EntityKind::from_tag(tag).unwrap();
            assert_eq!(kind.as_tag(), tag);
        }
        assert_eq!(EntityKind::from_tag("Img"), None);
    }

    #[test]
    fn test_decode_line() {
        let body = json!({
            "id": "e1",
            "zLevel": 2,
            "attributes": [],
            "point1": {"x": 5.0, "y": 52.0},
            "point2": {"x": 5.1, "y": 52.1},
            "color": "#ff0000",
            "lineType": {"name": "Solid"},
            "lineWidth": 1.0,
            "alpha": 1.0
        });
        let record = EntityRecord::decode("Lne", body).unwrap();
        assert_eq!(record.id(), "e1");
        assert_eq!(record.kind_tag(), "Lne");
        match record {
            EntityRecord::Supported(Entity::Line(line)) => {
                assert_eq!(line.base.z_level, 2);
                assert_eq!(line.color, "#ff0000");
            }
            other => panic!("unexpected record: {other:?}"),
        }
    }

    #[test]
    fn test_decode_unknown_kind() {
        let record = EntityRecord::decode("Img", json!({"id": "i1"})).unwrap();
        assert_eq!(record.id(), "i1");
        assert_eq!(record.kind_tag(), "Img");
        assert!(matches!(record, EntityRecord::Unsupported { .. }));
    }

    #[test]
    fn test_decode_malformed_body_is_fatal() {
        let err = EntityRecord::decode("Lne", json!({"id": "e1"})).unwrap_err();
        assert!(matches!(err, ConvertError::DocumentParse(_)));
    }

    #[test]
    fn test_attribute_lookup_takes_first_match() {
        let bundle: AttributeBundle = serde_json::from_value(json!({
            "name": "GasMal",
            "attributeItems": [
                {"name": "Nummer", "attributeValue": "7"},
                {"name": "Nummer", "attributeValue": "9"},
                {"name": "Hoek", "attributeValue": 45.0}
            ]
        }))
        .unwrap();
        assert_eq!(bundle.item_f64("Nummer").unwrap(), 7.0);
        assert_eq!(bundle.item_f64("Hoek").unwrap(), 45.0);
        assert!(matches!(
            bundle.item_f64("Kleur"),
            Err(ConvertError::MissingAttribute(_))
        ));
    }
}
