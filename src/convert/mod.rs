//! Entity converter
//!
//! Dispatches on entity kind and builds one output feature (or several,
//! for composite parts) per drawing entity. The converter borrows the
//! entity index, the symbol table and the options for the duration of one
//! traversal root and accumulates non-fatal notifications as it goes.

mod arc;
mod line;
mod part;
mod polyline;
mod rectangle;
mod symbol;
mod text;

use crate::config::{ConvertOptions, ZOrderPolicy};
use crate::document::EntityIndex;
use crate::entities::{Entity, EntityBase, EntityRecord, PartEntity};
use crate::error::{ConvertError, Result};
use crate::feature::{Feature, FeatureAttributes, FeatureStyle};
use crate::notification::NotificationCollection;
use crate::symbols::SymbolTable;

/// Converts entities of one traversal root into features
pub struct Converter<'a> {
    index: &'a EntityIndex,
    symbols: &'a SymbolTable,
    options: &'a ConvertOptions,
    notes: NotificationCollection,
}

impl<'a> Converter<'a> {
    /// Create a converter over a read-only entity index
    pub fn new(index: &'a EntityIndex, symbols: &'a SymbolTable, options: &'a ConvertOptions) -> Self {
        Converter {
            index,
            symbols,
            options,
            notes: NotificationCollection::new(),
        }
    }

    /// Convert one entity record, recursing into part children.
    ///
    /// Returns the features the entity expands to - possibly none, which
    /// is an explicit drop and not an error. Unsupported kinds always
    /// surface as [`ConvertError::UnsupportedEntityKind`]; the caller
    /// decides whether that aborts anything.
    pub fn convert(
        &mut self,
        record: &EntityRecord,
        parent: Option<&PartEntity>,
    ) -> Result<Vec<Feature>> {
        match record {
            EntityRecord::Unsupported { kind, .. } => {
                Err(ConvertError::UnsupportedEntityKind(kind.clone()))
            }
            EntityRecord::Supported(entity) => match entity {
                Entity::Line(e) => Ok(vec![self.convert_line(e)]),
                Entity::Arc(e) => Ok(self.convert_arc(e)),
                Entity::PolyLine(e) => Ok(vec![self.convert_polyline(e)]),
                Entity::PolyArrow(e) => Ok(vec![self.convert_polyarrow(e)]),
                Entity::SmoothPolyLine(e) => Ok(vec![self.convert_smooth_polyline(e)?]),
                Entity::Rectangle(e) => Ok(vec![self.convert_rectangle(e)]),
                Entity::Part(e) => self.convert_part(e),
                Entity::Symbol(e) => Ok(self.convert_symbol(e, parent)?.into_iter().collect()),
                Entity::StrokeText(e) => Ok(vec![self.convert_text(e, parent)]),
            },
        }
    }

    /// Notifications recorded so far
    pub fn notifications(&self) -> &NotificationCollection {
        &self.notes
    }

    /// Consume the converter, yielding its notifications
    pub fn into_notifications(self) -> NotificationCollection {
        self.notes
    }

    fn z_index(&self, z_level: i64) -> i64 {
        match self.options.z_order {
            ZOrderPolicy::Negated => -z_level,
            ZOrderPolicy::Preserved => z_level,
        }
    }

    /// Assemble a feature with the common base fields (name defaults to
    /// the entity id; builders override it where the format says so)
    fn new_feature(
        &self,
        base: &EntityBase,
        geometry: String,
        attributes: FeatureAttributes,
        style: FeatureStyle,
    ) -> Feature {
        Feature {
            id: base.id.clone(),
            name: Some(base.id.clone()),
            show_in_legend: false,
            z_index: self.z_index(base.z_level),
            geometry,
            attributes,
            style,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_util {
    use super::*;
    use crate::entities::EntityRecord;
    use serde_json::Value;

    /// Decode a raw test entity, panicking on malformed fixtures
    pub fn decode(kind: &str, body: Value) -> EntityRecord {
        EntityRecord::decode(kind, body).expect("test entity should decode")
    }

    /// Run a single record through a fresh converter over an empty index
    pub fn convert_one(record: &EntityRecord) -> Result<Vec<Feature>> {
        convert_with(record, &ConvertOptions::default())
    }

    /// Same as [`convert_one`] with explicit options
    pub fn convert_with(record: &EntityRecord, options: &ConvertOptions) -> Result<Vec<Feature>> {
        let index = EntityIndex::new();
        let mut conv = Converter::new(&index, SymbolTable::standard(), options);
        conv.convert(record, None)
    }
}
