//! Error types for the plotconv library

use thiserror::Error;

/// Main error type for plot conversion operations
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Malformed input document (bad JSON or an entity body that does not
    /// match its declared kind) - fatal, nothing is converted
    #[error("Document parse error: {0}")]
    DocumentParse(String),

    /// The document carries a version tag other than the expected one -
    /// fatal, nothing is converted
    #[error("Unsupported document version: {0}")]
    UnsupportedVersion(i64),

    /// An entity kind tag the converter has no builder for. Many kinds are
    /// intentionally unimplemented, so callers usually treat this as benign
    /// and skip the entity
    #[error("Unsupported entity kind: {0}")]
    UnsupportedEntityKind(String),

    /// A symbol icon identifier with no mapping and no fallback policy
    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),

    /// A spline segment type code outside the recognized set, or a code
    /// that consumes vertices past the end of the point list
    #[error("Malformed segment code '{code}' at position {position}")]
    MalformedSegmentCode { code: char, position: usize },

    /// A required named attribute (or one of its sub-items) is absent
    #[error("Missing attribute: {0}")]
    MissingAttribute(String),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

/// Result type alias for plot conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;

impl ConvertError {
    /// Whether this error is conventionally expected during conversion of
    /// real-world documents (as opposed to signalling corrupt input).
    ///
    /// Unsupported entity kinds show up in most documents and should be
    /// reported at a lower severity than genuine failures.
    pub fn is_benign(&self) -> bool {
        matches!(self, ConvertError::UnsupportedEntityKind(_))
    }
}

impl From<String> for ConvertError {
    fn from(s: String) -> Self {
        ConvertError::Custom(s)
    }
}

impl From<&str> for ConvertError {
    fn from(s: &str) -> Self {
        ConvertError::Custom(s.to_string())
    }
}

impl From<serde_json::Error> for ConvertError {
    fn from(e: serde_json::Error) -> Self {
        ConvertError::DocumentParse(e.to_string())
    }
}
