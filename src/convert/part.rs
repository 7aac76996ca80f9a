//! Composite part builder

use super::Converter;
use crate::entities::PartEntity;
use crate::error::Result;
use crate::feature::{Feature, FeatureAttributes, FeatureStyle, GeometryKind};
use crate::geometry::{coords_list, points_to_rd};
use crate::notification::NotificationType;
use crate::types::Point;

impl Converter<'_> {
    /// Expand a part into the features of its children, in child order.
    ///
    /// A part without children yields nothing. A gas template bundle takes
    /// precedence over child expansion. Children missing from the index
    /// are skipped with a warning; child conversion errors propagate.
    pub(super) fn convert_part(&mut self, entity: &PartEntity) -> Result<Vec<Feature>> {
        if entity.children.is_empty() {
            return Ok(Vec::new());
        }

        if entity.gas_mal().is_some() {
            return Ok(vec![self.convert_gas_mal(entity)?]);
        }

        let mut features = Vec::new();
        for child_id in &entity.children {
            match self.index.get(child_id) {
                Some(child) => features.extend(self.convert(child, Some(entity))?),
                None => self.notes.notify(
                    NotificationType::Warning,
                    Some(entity.base.id.clone()),
                    format!("Can't find entity with ID {child_id}"),
                ),
            }
        }
        Ok(features)
    }

    /// One point feature built from the gas template attribute bundle
    fn convert_gas_mal(&self, entity: &PartEntity) -> Result<Feature> {
        // convert_part only calls this when the bundle is present
        let bundle = match entity.gas_mal() {
            Some(bundle) => bundle,
            None => return Err(crate::error::ConvertError::MissingAttribute("GasMal".into())),
        };

        let nummer = bundle.item_f64("Nummer")?;
        let kleur = bundle.item_str("Kleur")?;
        let hoek = bundle.item_f64("Hoek")?;
        let lat = bundle.item_f64("originLat")?;
        let lon = bundle.item_f64("originLon")?;

        let points = points_to_rd(&[Point::new(lon, lat)]);

        let mut attributes = FeatureAttributes::new(8, GeometryKind::Point);
        attributes.wind_direction = Some(hoek);
        attributes.mal_color = Some(kleur);
        attributes.mal_number = Some(nummer);

        Ok(self.new_feature(
            &entity.base,
            format!("POINT({})", coords_list(&points)),
            attributes,
            FeatureStyle::default(),
        ))
    }
}
