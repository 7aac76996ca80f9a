//! Part (composite) entity

use super::{AttributeBundle, EntityBase};
use crate::types::Point;
use serde::Deserialize;

/// Name of the attribute bundle that short-circuits child expansion
pub const GASMAL_ATTRIBUTE: &str = "GasMal";

/// A composite entity referencing child entities by identifier.
///
/// Child order is significant: it becomes feature paint order. A part may
/// instead carry a gas template ("GasMal") attribute bundle, in which case
/// it converts to a single point feature and its children are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartEntity {
    #[serde(flatten)]
    pub base: EntityBase,
    #[serde(default)]
    pub children: Vec<String>,
    #[serde(default)]
    pub layer_invisible: bool,
    /// When set, the part's origin (and child text sizes) are expressed in
    /// scale-invariant pixel units
    #[serde(default)]
    pub pixel_scale: bool,
    #[serde(default)]
    pub origin: Option<Point>,
    #[serde(default)]
    pub name: Option<String>,
}

impl PartEntity {
    /// The gas template bundle, when this part carries one
    pub fn gas_mal(&self) -> Option<&AttributeBundle> {
        self.base
            .attributes
            .iter()
            .find(|a| a.name == GASMAL_ATTRIBUTE)
    }
}
