//! Stroke text builder

use super::Converter;
use crate::entities::{PartEntity, StrokeTextEntity};
use crate::feature::{Feature, FeatureAttributes, FeatureStyle, GeometryKind, TextAlign, TextBaseline};
use crate::geometry::{coords_list, points_to_rd};
use crate::types::{to_hex_color, to_stroke_width};

/// Label anchoring for a keypad-style reference code.
///
/// Codes run 1-9 like a numeric keypad: the column picks the horizontal
/// alignment and the row the baseline. Codes outside the keypad anchor
/// center/middle.
pub(super) fn keypad_anchor(reference: i32) -> (TextAlign, TextBaseline) {
    let align = match reference {
        1 | 4 | 7 => TextAlign::Left,
        3 | 6 | 9 => TextAlign::Right,
        _ => TextAlign::Center,
    };
    let baseline = match reference {
        1 | 2 | 3 => TextBaseline::Bottom,
        7 | 8 | 9 => TextBaseline::Top,
        _ => TextBaseline::Middle,
    };
    (align, baseline)
}

impl Converter<'_> {
    pub(super) fn convert_text(
        &self,
        entity: &StrokeTextEntity,
        parent: Option<&PartEntity>,
    ) -> Feature {
        let anchor = parent
            .and_then(|p| p.origin)
            .unwrap_or(entity.origin);
        let points = points_to_rd(&[anchor]);

        let scale_feature = !parent.is_some_and(|p| p.pixel_scale);
        let (text_align, text_baseline) = keypad_anchor(entity.style.reference);

        // Scale-invariant text carries its size in pixel units already
        let font_size = if scale_feature {
            entity.style.character_size * 30.0
        } else {
            entity.style.character_size * 1.5
        };

        let balloon = entity.style.balloon_type != 0;
        let background_fill = if balloon {
            entity
                .style
                .balloon_fill_type
                .as_ref()
                .and_then(|f| f.paint.as_ref())
                .map(|p| to_hex_color(p.color1))
                .unwrap_or_default()
        } else {
            String::new()
        };
        let background_stroke = if balloon {
            entity.style.balloon_color.clone()
        } else {
            String::new()
        };

        let style = FeatureStyle {
            label: Some(entity.text.clone()),
            font_size: Some(font_size),
            halo: Some(String::new()),
            show_label: Some(true),
            text_color: Some(entity.style.character_color.clone()),
            text_background_fill: Some(background_fill),
            text_background_stroke: Some(background_stroke),
            text_background_stroke_width: Some(to_stroke_width(entity.style.balloon_line_width)),
            text_align: Some(text_align),
            text_baseline: Some(text_baseline),
            rotation: Some(360.0 - entity.text_angle * 180.0 / std::f64::consts::PI),
            ..FeatureStyle::default()
        };

        let mut attributes = FeatureAttributes::new(1, GeometryKind::Point);
        attributes.scale_feature = Some(scale_feature);

        let mut feature = self.new_feature(
            &entity.base,
            format!("POINT({})", coords_list(&points)),
            attributes,
            style,
        );
        feature.name = Some(entity.text.clone());
        feature
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_util::*;
    use super::*;
    use crate::config::ConvertOptions;
    use crate::document::EntityIndex;
    use crate::entities::EntityRecord;
    use crate::symbols::SymbolTable;
    use serde_json::{json, Value};

    fn text_body(reference: i32, angle: f64, style_extra: Value) -> Value {
        let mut style = json!({
            "characterColor": "#223344",
            "characterSize": 10.0,
            "reference": reference
        });
        if let Value::Object(extra) = style_extra {
            style.as_object_mut().unwrap().extend(extra);
        }
        json!({
            "id": "t1", "zLevel": 1, "attributes": [],
            "text": "Verzamelplaats",
            "origin": {"x": 5.3, "y": 52.1},
            "textAngle": angle,
            "style": style
        })
    }

    fn convert_under_part(text: Value, pixel_scale: bool) -> crate::feature::Feature {
        let mut index = EntityIndex::new();
        index.insert(decode("STx", text));
        let part = EntityRecord::decode(
            "Prt",
            json!({
                "id": "p1", "zLevel": 0, "attributes": [],
                "children": ["t1"],
                "origin": {"x": 5.0, "y": 52.0},
                "pixelScale": pixel_scale
            }),
        )
        .unwrap();
        let options = ConvertOptions::default();
        let mut conv = super::super::Converter::new(&index, SymbolTable::standard(), &options);
        conv.convert(&part, None).unwrap().remove(0)
    }

    #[test]
    fn test_keypad_anchor_table() {
        use TextAlign::*;
        use TextBaseline::*;
        let expected = [
            (1, Left, Bottom),
            (2, Center, Bottom),
            (3, Right, Bottom),
            (4, Left, Middle),
            (5, Center, Middle),
            (6, Right, Middle),
            (7, Left, Top),
            (8, Center, Top),
            (9, Right, Top),
            (0, Center, Middle),
        ];
        for (code, align, baseline) in expected {
            assert_eq!(keypad_anchor(code), (align, baseline), "code {code}");
        }
    }

    #[test]
    fn test_standalone_text() {
        let features = convert_one(&decode("STx", text_body(7, 0.0, json!({})))).unwrap();
        let f = &features[0];
        assert!(f.geometry.starts_with("POINT("));
        assert_eq!(f.attributes.tool, 1);
        assert_eq!(f.attributes.scale_feature, Some(true));
        assert_eq!(f.name.as_deref(), Some("Verzamelplaats"));
        assert_eq!(f.style.label.as_deref(), Some("Verzamelplaats"));
        assert_eq!(f.style.font_size, Some(300.0));
        assert_eq!(f.style.show_label, Some(true));
        assert_eq!(f.style.text_color.as_deref(), Some("#223344"));
        assert_eq!(f.style.text_align, Some(TextAlign::Left));
        assert_eq!(f.style.text_baseline, Some(TextBaseline::Top));
        assert_eq!(f.style.rotation, Some(360.0));
        // No balloon: both background colors stay empty
        assert_eq!(f.style.text_background_fill.as_deref(), Some(""));
        assert_eq!(f.style.text_background_stroke.as_deref(), Some(""));
        assert_eq!(f.style.text_background_stroke_width, Some(1.0));
    }

    #[test]
    fn test_pixel_scale_parent_changes_font_size() {
        let f = convert_under_part(text_body(5, 0.0, json!({})), true);
        assert_eq!(f.attributes.scale_feature, Some(false));
        assert_eq!(f.style.font_size, Some(15.0));
    }

    #[test]
    fn test_parent_origin_wins() {
        let under_part = convert_under_part(text_body(5, 0.0, json!({})), false);
        let standalone = convert_one(&decode("STx", text_body(5, 0.0, json!({})))).unwrap();
        assert_ne!(under_part.geometry, standalone[0].geometry);
    }

    #[test]
    fn test_rotation_from_radians() {
        let f = convert_one(&decode(
            "STx",
            text_body(5, std::f64::consts::FRAC_PI_2, json!({})),
        ))
        .unwrap()
        .remove(0);
        assert_eq!(f.style.rotation, Some(270.0));
    }

    #[test]
    fn test_balloon_background() {
        let f = convert_one(&decode(
            "STx",
            text_body(
                5,
                0.0,
                json!({
                    "balloonType": 1,
                    "balloonColor": "#aabbcc",
                    "balloonLineWidth": 2.0,
                    "balloonFillType": {
                        "paint": {"mode": false, "color1": 0x0000ff, "name": "solid"}
                    }
                }),
            ),
        ))
        .unwrap()
        .remove(0);
        assert_eq!(f.style.text_background_fill.as_deref(), Some("#0000ff"));
        assert_eq!(f.style.text_background_stroke.as_deref(), Some("#aabbcc"));
        assert_eq!(f.style.text_background_stroke_width, Some(3.0));
    }
}
