//! Rectangle builder

use super::Converter;
use crate::entities::RectangleEntity;
use crate::feature::{Feature, FeatureAttributes, GeometryKind};
use crate::geometry::{coords_list, points_to_rd, transform_points};
use crate::style::{map_style, StyleSource};
use crate::types::Point;

impl Converter<'_> {
    /// Two opposite corners become a closed five-point ring, rotated
    /// around the first corner when a transform is present
    pub(super) fn convert_rectangle(&self, entity: &RectangleEntity) -> Feature {
        let projected = points_to_rd(&[entity.point1, entity.point2]);
        let (p0, p1) = (projected[0], projected[1]);

        let ring = vec![
            p0,
            Point::new(p1.x, p0.y),
            p1,
            Point::new(p0.x, p1.y),
            p0,
        ];
        let ring = transform_points(&entity.transform, ring);

        let mut style = map_style(StyleSource {
            fill_type: entity.fill_type.as_ref(),
            line_type: entity.line_type.as_ref(),
            line_width: Some(entity.line_width),
            color: Some(&entity.color),
            alpha: entity.alpha,
        });
        style.label = Some(String::new());

        self.new_feature(
            &entity.base,
            format!("POLYGON(({}))", coords_list(&ring)),
            FeatureAttributes::new(3, GeometryKind::Polygon),
            style,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_util::*;
    use crate::feature::GeometryKind;
    use serde_json::json;

    fn rectangle(transform: serde_json::Value) -> serde_json::Value {
        json!({
            "id": "r1", "zLevel": 0, "attributes": [],
            "point1": {"x": 5.0, "y": 52.0},
            "point2": {"x": 5.01, "y": 52.01},
            "transform": transform,
            "color": "#112233", "lineWidth": 1.0, "alpha": 1.0
        })
    }

    #[test]
    fn test_five_point_ring() {
        let record = decode(
            "Rct",
            rectangle(json!({"m00": 1.0, "m10": 0.0, "m01": 0.0, "m11": 1.0})),
        );
        let features = convert_one(&record).unwrap();
        let f = &features[0];
        assert_eq!(f.attributes.tool, 3);
        assert_eq!(f.attributes.kind, GeometryKind::Polygon);
        assert_eq!(f.geometry.matches(',').count(), 4);

        let inner = f
            .geometry
            .strip_prefix("POLYGON((")
            .and_then(|s| s.strip_suffix("))"))
            .unwrap();
        let corners: Vec<&str> = inner.split(',').collect();
        assert_eq!(corners.first(), corners.last());
    }

    #[test]
    fn test_axis_aligned_bbox() {
        let record = decode(
            "Rct",
            rectangle(json!({"m00": 1.0, "m10": 0.0, "m01": 0.0, "m11": 1.0})),
        );
        let features = convert_one(&record).unwrap();
        let inner = features[0]
            .geometry
            .trim_start_matches("POLYGON((")
            .trim_end_matches("))");
        let pts: Vec<(f64, f64)> = inner
            .split(',')
            .map(|c| {
                let mut it = c.split(' ');
                (
                    it.next().unwrap().parse().unwrap(),
                    it.next().unwrap().parse().unwrap(),
                )
            })
            .collect();
        // Corner order p0, (x1 y0), p1, (x0 y1), p0
        assert_eq!(pts[1].1, pts[0].1);
        assert_eq!(pts[1].0, pts[2].0);
        assert_eq!(pts[3].0, pts[0].0);
        assert_eq!(pts[3].1, pts[2].1);
    }

    #[test]
    fn test_rotation_pivots_first_corner() {
        // 90-degree counter-clockwise rotation
        let record = decode(
            "Rct",
            rectangle(json!({"m00": 0.0, "m10": 1.0, "m01": -1.0, "m11": 0.0})),
        );
        let plain = decode(
            "Rct",
            rectangle(json!({"m00": 1.0, "m10": 0.0, "m01": 0.0, "m11": 1.0})),
        );
        let rotated = convert_one(&record).unwrap();
        let straight = convert_one(&plain).unwrap();
        // The pivot corner leads both rings unchanged
        let lead = |g: &str| {
            g.trim_start_matches("POLYGON((")
                .split(',')
                .next()
                .unwrap()
                .to_string()
        };
        assert_eq!(lead(&rotated[0].geometry), lead(&straight[0].geometry));
        assert_ne!(rotated[0].geometry, straight[0].geometry);
    }
}
