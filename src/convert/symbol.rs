//! Symbol builder

use super::Converter;
use crate::config::{SymbolAnchorPolicy, UnknownSymbolPolicy};
use crate::entities::{PartEntity, SymbolEntity};
use crate::error::{ConvertError, Result};
use crate::feature::{Feature, FeatureAttributes, FeatureStyle, GeometryKind};
use crate::geometry::{coords_list, points_to_rd};
use crate::symbols::DEFAULT_SYMBOL_CODE;

impl Converter<'_> {
    /// Place a symbol at its parent's origin, or at the midpoint of its
    /// own bounding box when the parent carries no origin.
    ///
    /// Symbols only exist inside a part; without one they yield nothing.
    /// Under [`SymbolAnchorPolicy::SkipDuplicateAnchor`] a symbol that
    /// carries its own bounding box while the parent already has an
    /// origin is dropped as well.
    pub(super) fn convert_symbol(
        &self,
        entity: &SymbolEntity,
        parent: Option<&PartEntity>,
    ) -> Result<Option<Feature>> {
        let parent = match parent {
            Some(parent) => parent,
            None => return Ok(None),
        };
        if self.options.symbol_anchor == SymbolAnchorPolicy::SkipDuplicateAnchor
            && parent.origin.is_some()
            && entity.symbol.lower_left.is_some()
        {
            return Ok(None);
        }

        let code = match self.symbols.get(&entity.symbol.symbol_id) {
            Some(code) => code,
            None => match self.options.unknown_symbol {
                UnknownSymbolPolicy::Error => {
                    return Err(ConvertError::UnknownSymbol(entity.symbol.symbol_id.clone()))
                }
                UnknownSymbolPolicy::Fallback => DEFAULT_SYMBOL_CODE,
            },
        };

        let anchor = match parent.origin.or_else(|| entity.symbol.bounding_box_center()) {
            Some(point) => point,
            None => {
                return Err(ConvertError::Custom(format!(
                    "symbol {} has no anchor point",
                    entity.base.id
                )))
            }
        };
        let points = points_to_rd(&[anchor]);

        let mut attributes = FeatureAttributes::new(5, GeometryKind::Point);
        attributes.scale_feature = Some(!parent.pixel_scale);
        attributes.symbol = Some(code.to_string());

        let style = FeatureStyle {
            label: Some(String::new()),
            font_size: Some(13.0),
            halo: Some("#ffffff".to_string()),
            show_label: Some(false),
            text_color: Some("#000000".to_string()),
            fill_color: Some(String::new()),
            fill_opacity: Some(0.2),
            stroke_color: Some(String::new()),
            ..FeatureStyle::default()
        };

        let mut feature = self.new_feature(
            &entity.base,
            format!("POINT({})", coords_list(&points)),
            attributes,
            style,
        );
        feature.name = parent.name.clone();
        Ok(Some(feature))
    }
}
