//! Document driver
//!
//! Parses an action layer document, indexes its entities by identifier
//! and converts every top-level entity in declaration order. Individual
//! entity failures are recorded and skipped so one bad entity cannot
//! take down the whole document.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::config::ConvertOptions;
use crate::convert::Converter;
use crate::entities::EntityRecord;
use crate::error::{ConvertError, Result};
use crate::feature::Feature;
use crate::notification::{NotificationCollection, NotificationType};
use crate::symbols::SymbolTable;

/// The only wire format version this converter understands
pub const EXPECTED_VERSION: i64 = 20161115;

/// One entity record as it appears on the wire: a kind tag next to an
/// untyped body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEntity {
    pub entity_identifier: String,
    pub entity: Value,
}

/// Top-level document structure of the wire format
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionLayerDocument {
    pub version: i64,
    #[serde(default)]
    pub top_entity_ids: Vec<String>,
    #[serde(default)]
    pub entity_list: Vec<RawEntity>,
}

/// Read-only entity lookup, keyed by entity identifier.
///
/// Iteration follows insertion order, which is document order.
#[derive(Debug, Default)]
pub struct EntityIndex {
    entities: IndexMap<String, EntityRecord>,
}

impl EntityIndex {
    pub fn new() -> Self {
        EntityIndex {
            entities: IndexMap::new(),
        }
    }

    /// Index every record of a document. A later entity with the same
    /// identifier replaces an earlier one, as the wire format allows.
    pub fn from_document(document: &ActionLayerDocument) -> Result<Self> {
        let mut index = EntityIndex {
            entities: IndexMap::with_capacity(document.entity_list.len()),
        };
        for raw in &document.entity_list {
            index.insert(EntityRecord::decode(
                &raw.entity_identifier,
                raw.entity.clone(),
            )?);
        }
        Ok(index)
    }

    pub fn insert(&mut self, record: EntityRecord) {
        self.entities.insert(record.id().to_string(), record);
    }

    pub fn get(&self, id: &str) -> Option<&EntityRecord> {
        self.entities.get(id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Outcome of a whole-document conversion
#[derive(Debug)]
pub struct ConversionReport {
    /// Features of all successfully converted roots, in declaration order
    pub features: Vec<Feature>,
    /// Top-level entities that converted without error
    pub converted: usize,
    /// Top-level entities the document declared
    pub total: usize,
    /// Everything the run had to say about skipped or odd entities
    pub notifications: NotificationCollection,
}

impl ConversionReport {
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    /// One-line run summary, with the notification log appended when
    /// anything was recorded
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Converted {} out of {} entities resulting in {} new features",
            self.converted,
            self.total,
            self.features.len()
        );
        if !self.notifications.is_empty() {
            summary.push_str(", log:");
            for note in self.notifications.iter() {
                summary.push('\n');
                summary.push_str(&note.to_string());
            }
        }
        summary
    }

    /// The feature list as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.features)?)
    }
}

/// Convert a complete action layer document.
///
/// Fatal errors are a malformed document and an unsupported version.
/// Everything that goes wrong below the document level is captured in
/// the report's notifications instead.
pub fn convert_document(
    json: &str,
    options: &ConvertOptions,
    symbols: &SymbolTable,
) -> Result<ConversionReport> {
    let document: ActionLayerDocument = serde_json::from_str(json)?;
    if document.version != EXPECTED_VERSION {
        return Err(ConvertError::UnsupportedVersion(document.version));
    }

    let index = EntityIndex::from_document(&document)?;

    let roots: Vec<RootOutcome> = if options.parallel {
        convert_roots_parallel(&document.top_entity_ids, &index, options, symbols)
    } else {
        document
            .top_entity_ids
            .iter()
            .map(|id| convert_root(id, &index, options, symbols))
            .collect()
    };

    let mut features = Vec::new();
    let mut notifications = NotificationCollection::new();
    let mut converted = 0usize;
    for outcome in roots {
        features.extend(outcome.features);
        notifications.merge(outcome.notifications);
        if outcome.converted {
            converted += 1;
        }
    }

    Ok(ConversionReport {
        features,
        converted,
        total: document.top_entity_ids.len(),
        notifications,
    })
}

struct RootOutcome {
    features: Vec<Feature>,
    notifications: NotificationCollection,
    converted: bool,
}

/// Convert one top-level entity, turning its errors into notifications
fn convert_root(
    id: &str,
    index: &EntityIndex,
    options: &ConvertOptions,
    symbols: &SymbolTable,
) -> RootOutcome {
    let record = match index.get(id) {
        Some(record) => record,
        None => {
            let mut notifications = NotificationCollection::new();
            notifications.notify(
                NotificationType::Warning,
                None,
                format!("Can't find top entity ID {id}"),
            );
            return RootOutcome {
                features: Vec::new(),
                notifications,
                converted: false,
            };
        }
    };

    let mut converter = Converter::new(index, symbols, options);
    match converter.convert(record, None) {
        Ok(features) => RootOutcome {
            features,
            notifications: converter.into_notifications(),
            converted: true,
        },
        Err(error) => {
            let mut notifications = converter.into_notifications();
            let kind = if error.is_benign() {
                NotificationType::UnsupportedEntity
            } else {
                NotificationType::Error
            };
            notifications.notify(kind, Some(id.to_string()), error.to_string());
            RootOutcome {
                features: Vec::new(),
                notifications,
                converted: false,
            }
        }
    }
}

/// Parallel variant: roots are independent, so they fan out over the
/// rayon pool; collecting keeps declaration order
fn convert_roots_parallel(
    ids: &[String],
    index: &EntityIndex,
    options: &ConvertOptions,
    symbols: &SymbolTable,
) -> Vec<RootOutcome> {
    use rayon::prelude::*;

    ids.par_iter()
        .map(|id| convert_root(id, index, options, symbols))
        .collect()
}
