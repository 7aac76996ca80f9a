//! Arc builders: circle and ellipse tessellation
//!
//! An arc entity does not say whether it is circular; the converter
//! classifies it by comparing the projected half-extents of its bounding
//! box. Circles get either a center point (full sweep) or a tessellated
//! line; ellipses are sampled with a rational tangent-half-angle
//! parametrization and may close into a polygon.

use super::Converter;
use crate::entities::ArcEntity;
use crate::feature::{Feature, FeatureAttributes, GeometryKind};
use crate::geometry::{coords_list, points_to_rd};
use crate::style::{map_style, StyleSource};
use crate::types::Point;
use std::f64::consts::PI;

/// Angular samples per tessellated arc or ellipse
const ARC_VERTICES: usize = 64;

impl Converter<'_> {
    pub(super) fn convert_arc(&self, entity: &ArcEntity) -> Vec<Feature> {
        if self.is_circle(entity) {
            vec![self.circle_arc(entity)]
        } else {
            self.ellipse_arc(entity).into_iter().collect()
        }
    }

    /// Compare projected half-extents; absolute values keep the decision
    /// symmetric under swapping the two corner points
    fn is_circle(&self, entity: &ArcEntity) -> bool {
        let points = points_to_rd(&[entity.point1, entity.point2]);
        let rx = (points[0].x - points[1].x).abs();
        let ry = (points[0].y - points[1].y).abs();
        (rx - ry).abs() < self.options.circle_epsilon
    }

    fn arc_style(&self, entity: &ArcEntity) -> crate::feature::FeatureStyle {
        let mut style = map_style(StyleSource {
            fill_type: entity.fill_type.as_ref(),
            line_type: entity.line_type.as_ref(),
            line_width: Some(entity.line_width),
            color: Some(&entity.color),
            alpha: None,
        });
        style.label = Some(String::new());
        style
    }

    fn circle_arc(&self, entity: &ArcEntity) -> Feature {
        let points = points_to_rd(&[entity.point1, entity.point2]);
        let mid = points[0].midpoint(&points[1]);
        let radius = (points[1].x - points[0].x).abs() / 2.0;

        if entity.is_full_sweep() {
            let mut attributes = FeatureAttributes::new(2, GeometryKind::Circle);
            attributes.radius = Some(radius);
            return self.new_feature(
                &entity.base,
                format!("POINT({})", coords_list(&[mid])),
                attributes,
                self.arc_style(entity),
            );
        }

        // Partial sweep: sample the angular window. Angles run clockwise
        // on screen, hence the minus on the y term.
        let start_angle = if entity.extent < 360.0 { entity.start } else { 0.0 };
        let mut circle_points = Vec::with_capacity(ARC_VERTICES);
        for i in 0..ARC_VERTICES {
            let angle = (start_angle + i as f64 * entity.extent / ARC_VERTICES as f64).to_radians();
            circle_points.push(Point::new(
                mid.x + radius * angle.cos(),
                mid.y - radius * angle.sin(),
            ));
        }

        self.new_feature(
            &entity.base,
            format!("LINESTRING({})", coords_list(&circle_points)),
            FeatureAttributes::new(4, GeometryKind::LineString),
            self.arc_style(entity),
        )
    }

    /// Tessellate an elliptic arc. Yields nothing when the angular window
    /// contains no sample, which the part-level caller drops silently.
    fn ellipse_arc(&self, entity: &ArcEntity) -> Option<Feature> {
        let points = points_to_rd(&[entity.point1, entity.point2]);
        let mid = points[0].midpoint(&points[1]);
        let rx = (points[1].x - points[0].x).abs() / 2.0;
        let ry = (points[1].y - points[0].y).abs() / 2.0;

        // Normalize to an increasing window in locals; the shared entity
        // stays untouched
        let (start, extent) = if entity.extent < entity.start {
            (entity.extent, entity.start)
        } else {
            (entity.start, entity.extent)
        };

        let mut ellipse_points = Vec::with_capacity(ARC_VERTICES);
        for i in 0..ARC_VERTICES {
            let angle = i as f64 * 360.0 / ARC_VERTICES as f64;
            if angle >= start && angle <= extent {
                let t = (i as f64 * (2.0 * PI / ARC_VERTICES as f64)).tan();
                ellipse_points.push(Point::new(
                    mid.x + rx * (1.0 - t * t) / (1.0 + t * t),
                    mid.y + ry * 2.0 * t / (1.0 + t * t),
                ));
            }
        }

        if ellipse_points.is_empty() {
            return None;
        }

        let is_closed = (start % 360.0).abs() == (extent % 360.0).abs();
        if is_closed {
            let first = ellipse_points[0];
            let last = ellipse_points[ellipse_points.len() - 1];
            if !first.bit_eq(&last) {
                ellipse_points.push(first);
            }
        }

        let coords = coords_list(&ellipse_points);
        let (geometry, attributes) = if is_closed {
            (
                format!("POLYGON(({coords}))"),
                FeatureAttributes::new(3, GeometryKind::Polygon),
            )
        } else {
            (
                format!("LINESTRING({coords})"),
                FeatureAttributes::new(4, GeometryKind::LineString),
            )
        };

        Some(self.new_feature(&entity.base, geometry, attributes, self.arc_style(entity)))
    }
}
