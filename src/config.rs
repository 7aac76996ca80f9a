//! Conversion options
//!
//! A handful of behaviors changed between revisions of the drawing format;
//! documents in the wild were produced under both. Rather than hardcoding
//! one side, each decision point is a named policy on [`ConvertOptions`],
//! defaulting to the behavior of the current format revision.

/// How an entity's z-level maps to the output z-index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZOrderPolicy {
    /// z-index = -z-level (current format revision)
    #[default]
    Negated,
    /// z-index = z-level (revisions before the sign flip)
    Preserved,
}

/// When a symbol entity is skipped as a duplicate anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymbolAnchorPolicy {
    /// Skip when the parent part has an origin and the symbol carries its
    /// own bounding box - the part origin already anchors the feature
    /// (current format revision)
    #[default]
    SkipDuplicateAnchor,
    /// Only a missing parent skips the symbol (earlier revisions)
    RequireParentOnly,
}

/// How an icon identifier without a table entry is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownSymbolPolicy {
    /// Fail the entity with [`crate::ConvertError::UnknownSymbol`]
    /// (current format revision)
    #[default]
    Error,
    /// Substitute the generic symbol code (earlier revisions)
    Fallback,
}

/// Options controlling a document conversion
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub z_order: ZOrderPolicy,
    pub symbol_anchor: SymbolAnchorPolicy,
    pub unknown_symbol: UnknownSymbolPolicy,
    /// Arcs whose projected x and y half-extents differ by less than this
    /// are circles, otherwise ellipses. The value is an engineering choice
    /// kept for compatibility, not a geometric identity.
    pub circle_epsilon: f64,
    /// Convert top-level entities on the rayon thread pool. Output order
    /// still follows the declared top-level order.
    pub parallel: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            z_order: ZOrderPolicy::default(),
            symbol_anchor: SymbolAnchorPolicy::default(),
            unknown_symbol: UnknownSymbolPolicy::default(),
            circle_epsilon: 1e-6,
            parallel: false,
        }
    }
}
