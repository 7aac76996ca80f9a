//! Line builder

use super::Converter;
use crate::entities::LineEntity;
use crate::feature::{Feature, FeatureAttributes, GeometryKind};
use crate::geometry::{coords_list, points_to_rd};
use crate::style::{map_style, StyleSource};

impl Converter<'_> {
    pub(super) fn convert_line(&self, entity: &LineEntity) -> Feature {
        let points = points_to_rd(&[entity.point1, entity.point2]);

        let mut attributes = FeatureAttributes::new(4, GeometryKind::LineString);
        attributes.scale_feature = Some(false);

        let mut style = map_style(StyleSource {
            line_type: entity.line_type.as_ref(),
            line_width: Some(entity.line_width),
            color: Some(&entity.color),
            alpha: entity.alpha,
            ..StyleSource::default()
        });
        style.label = Some(String::new());

        self.new_feature(
            &entity.base,
            format!("LINESTRING({})", coords_list(&points)),
            attributes,
            style,
        )
    }
}
