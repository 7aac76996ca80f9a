//! Polyline, smoothed polyline and poly-arrow builders

use super::Converter;
use crate::entities::{PolyArrowEntity, PolyLineEntity};
use crate::error::{ConvertError, Result};
use crate::feature::{Feature, FeatureAttributes, GeometryKind};
use crate::flatten::{flatten_cubic, flatten_quadratic};
use crate::geometry::{coords_list, points_to_rd};
use crate::style::{map_style, StyleSource};
use crate::types::{to_hex_color, to_stroke_width, Point};

/// Flatness scale passed to the curve flattener (coarsest setting)
const FLATTEN_SCALE: f64 = 1.0;

impl Converter<'_> {
    pub(super) fn convert_polyline(&self, entity: &PolyLineEntity) -> Feature {
        let points = points_to_rd(&entity.point_list);
        // The plain variant only closes on a trailing '4'
        self.polyline_feature(entity, &points, entity.is_closed())
    }

    /// Smoothed variant: walk the segment type codes and flatten curve
    /// segments into the output vertex list. A '4' anywhere in the code
    /// string closes the shape.
    pub(super) fn convert_smooth_polyline(&self, entity: &PolyLineEntity) -> Result<Feature> {
        let points = points_to_rd(&entity.point_list);
        let (smoothed, polygon) = smooth_points(&points, &entity.type_list)?;
        Ok(self.polyline_feature(entity, &smoothed, polygon))
    }

    fn polyline_feature(&self, entity: &PolyLineEntity, points: &[Point], polygon: bool) -> Feature {
        let coords = coords_list(points);

        let (geometry, attributes) = if polygon {
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

        let mut style = map_style(StyleSource {
            fill_type: entity.fill_type.as_ref(),
            line_type: entity.line_type.as_ref(),
            line_width: Some(entity.line_width),
            color: Some(&entity.color),
            alpha: entity.alpha,
        });
        style.label = Some(String::new());

        self.new_feature(&entity.base, geometry, attributes, style)
    }

    pub(super) fn convert_polyarrow(&self, entity: &PolyArrowEntity) -> Feature {
        let points = points_to_rd(&entity.point_list);
        let color = to_hex_color(entity.style.color);

        let mut style = map_style(StyleSource {
            line_type: entity.style.line_type.as_ref(),
            line_width: Some(to_stroke_width(entity.style.line_weight)),
            color: Some(&color),
            alpha: entity.alpha,
            ..StyleSource::default()
        });
        style.label = Some(String::new());
        style.arrow = Some(entity.style.arrow_code());

        self.new_feature(
            &entity.base,
            format!("LINESTRING({})", coords_list(&points)),
            FeatureAttributes::new(4, GeometryKind::LineString),
            style,
        )
    }
}

/// Expand a smoothed polyline's segment type codes over its (already
/// projected) vertices, returning the vertex list and whether a '4'
/// closed the shape.
///
/// Codes '0' and '1' copy one vertex, '2' flattens a quadratic segment
/// over three vertices, '3' a cubic one over four, '4' only marks the
/// shape closed. Anything else, or a code reaching past the vertex list,
/// is malformed.
fn smooth_points(points: &[Point], type_list: &str) -> Result<(Vec<Point>, bool)> {
    let vertex = |idx: usize, code: char, pos: usize| {
        points
            .get(idx)
            .copied()
            .ok_or(ConvertError::MalformedSegmentCode { code, position: pos })
    };

    let first = vertex(0, '0', 0)?;
    let mut out = vec![first];
    let mut idx = 0usize;
    let mut polygon = false;

    for (pos, code) in type_list.chars().enumerate() {
        match code {
            '0' | '1' => {
                out.push(vertex(idx, code, pos)?);
                idx += 1;
            }
            '2' => {
                if idx == 0 {
                    return Err(ConvertError::MalformedSegmentCode { code, position: pos });
                }
                let start = vertex(idx - 1, code, pos)?;
                let control = vertex(idx, code, pos)?;
                let end = vertex(idx + 1, code, pos)?;
                flatten_quadratic(start, control, end, FLATTEN_SCALE, &mut out);
                idx += 2;
            }
            '3' => {
                if idx == 0 {
                    return Err(ConvertError::MalformedSegmentCode { code, position: pos });
                }
                let start = vertex(idx - 1, code, pos)?;
                let control1 = vertex(idx, code, pos)?;
                let control2 = vertex(idx + 1, code, pos)?;
                let end = vertex(idx + 2, code, pos)?;
                flatten_cubic(start, control1, control2, end, FLATTEN_SCALE, &mut out);
                idx += 3;
            }
            '4' => polygon = true,
            other => {
                return Err(ConvertError::MalformedSegmentCode {
                    code: other,
                    position: pos,
                })
            }
        }
    }

    Ok((out, polygon))
}
