//! # plotconv
//!
//! A pure Rust converter for action layer drawing documents into GIS-ready
//! features.
//!
//! Action layer documents describe incident plots as a graph of drawing
//! entities (lines, arcs, polylines, composite parts, symbols, stroke
//! text) with WGS84 coordinates. This library converts them into flat
//! feature lists with WKT-style geometry in the Dutch RD (EPSG:28992)
//! plane, plus normalized style and attribute bags.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use plotconv::{convert_document, ConvertOptions, SymbolTable};
//!
//! let json = std::fs::read_to_string("plot.json")?;
//! let report = convert_document(&json, &ConvertOptions::default(), SymbolTable::standard())?;
//!
//! println!("{}", report.summary());
//! println!("{}", report.to_json()?);
//! # Ok::<(), plotconv::ConvertError>(())
//! ```
//!
//! ## Architecture
//!
//! - `document` - document parsing, entity index, top-level driver
//! - `entities` - the input data model, one type per entity kind
//! - `convert` - per-kind feature builders
//! - `proj` - the WGS84 to RD oblique stereographic projection
//! - `feature` - the output feature model
//!
//! Conversion is a depth-first walk over a read-only entity index; one
//! entity failing never aborts the document, it is recorded in the
//! report's notifications instead.

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod convert;
pub mod document;
pub mod entities;
pub mod error;
pub mod feature;
pub mod flatten;
pub mod geometry;
pub mod notification;
pub mod proj;
pub mod style;
pub mod symbols;
pub mod types;

// Re-export the top-level conversion API
pub use config::{ConvertOptions, SymbolAnchorPolicy, UnknownSymbolPolicy, ZOrderPolicy};
pub use convert::Converter;
pub use document::{
    convert_document, ActionLayerDocument, ConversionReport, EntityIndex, EXPECTED_VERSION,
};
pub use error::{ConvertError, Result};
pub use feature::{Feature, FeatureAttributes, FeatureStyle, GeometryKind};
pub use notification::{Notification, NotificationCollection, NotificationType};
pub use symbols::SymbolTable;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
