//! Shared test utilities for plotconv integration tests.
//!
//! Document builders and conversion helpers used across the test crates,
//! imported via `mod common;`.

#![allow(dead_code)]

use plotconv::{convert_document, ConversionReport, ConvertOptions, SymbolTable, EXPECTED_VERSION};
use serde_json::{json, Value};

/// Assemble a document from top-level IDs and wire entity records
pub fn document(top: &[&str], entities: Vec<Value>) -> String {
    json!({
        "version": EXPECTED_VERSION,
        "topEntityIds": top,
        "entityList": entities
    })
    .to_string()
}

/// Wrap an entity body in its wire record
pub fn record(kind: &str, body: Value) -> Value {
    json!({"entityIdentifier": kind, "entity": body})
}

/// A line entity between two fixed WGS84 points
pub fn line(id: &str, z_level: i64) -> Value {
    record(
        "Lne",
        json!({
            "id": id, "zLevel": z_level, "attributes": [],
            "point1": {"x": 5.0, "y": 52.0},
            "point2": {"x": 5.1, "y": 52.05},
            "color": "#112233", "lineWidth": 2.0, "alpha": 1.0
        }),
    )
}

/// A part entity over the given child IDs
pub fn part(id: &str, children: &[&str]) -> Value {
    record(
        "Prt",
        json!({
            "id": id, "zLevel": 0, "attributes": [],
            "children": children,
            "origin": {"x": 5.05, "y": 52.02},
            "name": "Testpart"
        }),
    )
}

/// Convert with default options and the built-in symbol table
pub fn convert(json: &str) -> plotconv::Result<ConversionReport> {
    convert_document(json, &ConvertOptions::default(), SymbolTable::standard())
}

/// Convert with explicit options
pub fn convert_with(json: &str, options: &ConvertOptions) -> plotconv::Result<ConversionReport> {
    convert_document(json, options, SymbolTable::standard())
}
