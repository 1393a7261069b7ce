//! DXF export.
//!
//! Writes an AutoCAD 2010 drawing in meters with one LINE per segment. Each
//! stroke role gets its own layer, and entity colors are mapped from the
//! style's color tokens onto the AutoCAD color index.

use std::path::Path;

use creasekit_core::{CreasePattern, DashStyle, PatternKind, Segment, StrokeRole};
use ::dxf::entities::{Circle, Entity, EntityType, Line};
use ::dxf::enums::{AcadVersion, DrawingUnits, Units};
use ::dxf::tables::{Layer, LineType};
use ::dxf::{Color, Drawing};
use tracing::{debug, info};

use crate::error::{ExportError, ExportResult};

/// ACI white, used when a color token cannot be mapped.
pub const ACI_DEFAULT: u8 = 7;
/// ACI green, used for the dome reference circle.
pub const ACI_REFERENCE: u8 = 3;
pub const REFERENCE_LAYER: &str = "REFERENCE";

const CONTINUOUS: &str = "CONTINUOUS";

/// Map a style color token to the nearest AutoCAD color index.
///
/// `rgb(r,g,b)` tokens go to the strictly dominant channel, then to the
/// secondary colors when two channels are both bright. Anything unparsable
/// falls back to [`ACI_DEFAULT`].
pub fn aci_color(token: &str) -> u8 {
    let token = token.trim().to_ascii_lowercase();
    if let Some(inner) = token
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let channels: Vec<i64> = inner
            .split(',')
            .filter_map(|c| c.trim().parse().ok())
            .collect();
        let [r, g, b] = channels[..] else {
            return ACI_DEFAULT;
        };
        return if r > g && r > b {
            1
        } else if g > r && g > b {
            3
        } else if b > r && b > g {
            5
        } else if r > 200 && g > 200 {
            2
        } else if g > 200 && b > 200 {
            4
        } else if r > 200 && b > 200 {
            6
        } else {
            ACI_DEFAULT
        };
    }

    match token.as_str() {
        "red" => 1,
        "yellow" => 2,
        "green" => 3,
        "cyan" => 4,
        "blue" => 5,
        "magenta" => 6,
        "black" => 9,
        _ => ACI_DEFAULT,
    }
}

/// Layer name for a stroke role.
pub fn layer_name(role: StrokeRole) -> String {
    role.as_str().to_ascii_uppercase()
}

/// Line type name for a dash style.
pub fn line_type_name(dash: DashStyle) -> &'static str {
    match dash {
        DashStyle::Solid => CONTINUOUS,
        DashStyle::Dash => "DASHED",
        DashStyle::Dot => "DOT",
        DashStyle::DashDot => "DASHDOT",
    }
}

fn dash_pattern(dash: DashStyle) -> Option<Vec<f64>> {
    match dash {
        DashStyle::Solid => None,
        DashStyle::Dash => Some(vec![0.5, -0.25]),
        DashStyle::Dot => Some(vec![0.0, -0.25]),
        DashStyle::DashDot => Some(vec![0.5, -0.25, 0.0, -0.25]),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DxfOptions {
    /// Add a circle of the design radius around the origin for domes.
    pub reference_circle: bool,
}

impl Default for DxfOptions {
    fn default() -> Self {
        Self {
            reference_circle: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DxfExporter {
    options: DxfOptions,
}

impl DxfExporter {
    pub fn new(options: DxfOptions) -> Self {
        Self { options }
    }

    /// Build the drawing for `pattern`.
    pub fn drawing<P: CreasePattern + ?Sized>(&self, pattern: &P) -> ExportResult<Drawing> {
        let segments = pattern.segments();
        if segments.is_empty() {
            return Err(ExportError::EmptyPattern);
        }

        let mut drawing = Drawing::new();
        drawing.header.version = AcadVersion::R2010;
        drawing.header.drawing_units = DrawingUnits::Metric;
        drawing.header.default_drawing_units = Units::Meters;

        add_line_types(&mut drawing, segments);
        add_layers(&mut drawing, segments);

        for segment in segments {
            let line = Line::new(
                ::dxf::Point::new(segment.start.x, segment.start.y, 0.0),
                ::dxf::Point::new(segment.end.x, segment.end.y, 0.0),
            );
            let mut entity = Entity::new(EntityType::Line(line));
            entity.common.layer = layer_name(segment.role());
            entity.common.color = Color::from_index(aci_color(&segment.stroke.color));
            entity.common.line_type_name = line_type_name(segment.stroke.dash).to_string();
            drawing.add_entity(entity);
        }

        let provenance = pattern.provenance();
        if self.options.reference_circle && provenance.kind == PatternKind::RadialDome {
            drawing.add_layer(Layer {
                name: REFERENCE_LAYER.to_string(),
                color: Color::from_index(ACI_REFERENCE),
                ..Default::default()
            });
            let circle = Circle::new(::dxf::Point::origin(), provenance.radius);
            let mut entity = Entity::new(EntityType::Circle(circle));
            entity.common.layer = REFERENCE_LAYER.to_string();
            entity.common.color = Color::from_index(ACI_REFERENCE);
            drawing.add_entity(entity);
        }

        debug!("DXF drawing has {} line entities", segments.len());
        Ok(drawing)
    }

    /// Serialize the drawing for `pattern` as DXF text.
    pub fn render<P: CreasePattern + ?Sized>(&self, pattern: &P) -> ExportResult<Vec<u8>> {
        let drawing = self.drawing(pattern)?;
        let mut buffer = Vec::new();
        drawing.save(&mut buffer)?;
        Ok(buffer)
    }

    pub fn write_to_file<P: CreasePattern + ?Sized>(
        &self,
        pattern: &P,
        path: &Path,
    ) -> ExportResult<()> {
        let bytes = self.render(pattern)?;
        std::fs::write(path, bytes)?;
        info!("Exported DXF to {}", path.display());
        Ok(())
    }
}

fn add_line_types(drawing: &mut Drawing, segments: &[Segment]) {
    let mut seen: Vec<DashStyle> = Vec::new();
    for dash in segments.iter().map(|s| s.stroke.dash) {
        if seen.contains(&dash) {
            continue;
        }
        seen.push(dash);
        if let Some(lengths) = dash_pattern(dash) {
            drawing.add_line_type(LineType {
                name: line_type_name(dash).to_string(),
                description: dash.as_str().to_string(),
                total_pattern_length: lengths.iter().map(|l| l.abs()).sum(),
                dash_dot_space_lengths: lengths,
                ..Default::default()
            });
        }
    }
}

/// One layer per role present, colored after the first segment drawn in it.
fn add_layers(drawing: &mut Drawing, segments: &[Segment]) {
    let mut seen: Vec<StrokeRole> = Vec::new();
    for segment in segments {
        let role = segment.role();
        if seen.contains(&role) {
            continue;
        }
        seen.push(role);
        drawing.add_layer(Layer {
            name: layer_name(role),
            color: Color::from_index(aci_color(&segment.stroke.color)),
            ..Default::default()
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aci_from_rgb() {
        assert_eq!(aci_color("rgb(255,0,0)"), 1);
        assert_eq!(aci_color("rgb(0, 255, 0)"), 3);
        assert_eq!(aci_color("rgb(0,0,255)"), 5);
        assert_eq!(aci_color("rgb(255,255,0)"), 2);
        assert_eq!(aci_color("rgb(0,255,255)"), 4);
        assert_eq!(aci_color("rgb(255,0,255)"), 6);
        assert_eq!(aci_color("rgb(100,100,100)"), ACI_DEFAULT);
    }

    #[test]
    fn test_aci_from_names() {
        assert_eq!(aci_color("black"), 9);
        assert_eq!(aci_color("Blue"), 5);
        assert_eq!(aci_color("#ff0000"), ACI_DEFAULT);
        assert_eq!(aci_color("rgb(1,2)"), ACI_DEFAULT);
    }

    #[test]
    fn test_layer_and_line_type_names() {
        assert_eq!(layer_name(StrokeRole::Mountain), "MOUNTAIN");
        assert_eq!(layer_name(StrokeRole::Connector), "CONNECTOR");
        assert_eq!(line_type_name(DashStyle::Solid), "CONTINUOUS");
        assert_eq!(line_type_name(DashStyle::DashDot), "DASHDOT");
        assert!(dash_pattern(DashStyle::Solid).is_none());
    }
}
