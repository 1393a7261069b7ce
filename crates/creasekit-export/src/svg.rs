//! SVG export.
//!
//! Coordinates are written in pattern units (meters) and the viewBox is the
//! padded bounding box, so the file scales to whatever pixel size the
//! `width`/`height` attributes request. Design parameters are embedded as an
//! RDF metadata block.

use std::path::Path;

use creasekit_core::{Bounds, CreasePattern, DashStyle, Provenance, Segment};
use tracing::{debug, info};

use crate::error::{ExportError, ExportResult};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";
const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

#[derive(Debug, Clone, PartialEq)]
pub struct SvgOptions {
    pub width_px: u32,
    pub height_px: u32,
    /// Padding added on each side, as a fraction of the pattern extent.
    pub padding_ratio: f64,
    /// Multiplier from style widths to SVG stroke widths.
    pub stroke_scale: f64,
    /// Negate y so the pattern reads upright in y-down viewers.
    pub flip_y: bool,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            width_px: 800,
            height_px: 800,
            padding_ratio: 0.1,
            stroke_scale: 0.01,
            flip_y: false,
        }
    }
}

/// `stroke-dasharray` value for a dash style.
pub fn dash_array(dash: DashStyle) -> &'static str {
    match dash {
        DashStyle::Solid => "none",
        DashStyle::Dash => "5,5",
        DashStyle::Dot => "1,3",
        DashStyle::DashDot => "5,2,1,2",
    }
}

/// Shortest round-trip formatting, with negative zero written as `0`.
fn num(value: f64) -> String {
    format!("{}", value + 0.0)
}

#[derive(Debug, Clone, Default)]
pub struct SvgExporter {
    options: SvgOptions,
}

impl SvgExporter {
    pub fn new(options: SvgOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SvgOptions {
        &self.options
    }

    /// Render `pattern` as a complete SVG document.
    pub fn render<P: CreasePattern + ?Sized>(&self, pattern: &P) -> ExportResult<String> {
        let segments = pattern.segments();
        if segments.is_empty() {
            return Err(ExportError::EmptyPattern);
        }

        let oriented: Vec<Segment> = if self.options.flip_y {
            segments
                .iter()
                .map(|s| {
                    let mut flipped = s.clone();
                    flipped.start.y = -s.start.y;
                    flipped.end.y = -s.end.y;
                    flipped
                })
                .collect()
        } else {
            segments.to_vec()
        };

        let bounds = Bounds::of_segments(&oriented)
            .ok_or(ExportError::EmptyPattern)?
            .padded(self.options.padding_ratio);
        let provenance = pattern.provenance();

        let mut lines = Vec::with_capacity(oriented.len() + 6);
        lines.push(r#"<?xml version="1.0" encoding="UTF-8"?>"#.to_string());
        lines.push(format!(
            r#"<svg xmlns="{SVG_NS}" xmlns:xlink="{XLINK_NS}" width="{}px" height="{}px" viewBox="{} {} {} {}" preserveAspectRatio="xMidYMid meet">"#,
            self.options.width_px,
            self.options.height_px,
            num(bounds.min_x),
            num(bounds.min_y),
            num(bounds.width()),
            num(bounds.height()),
        ));
        lines.push(format!("<title>{}</title>", provenance.kind.title()));
        lines.push("<!-- Pattern dimensions in meters -->".to_string());
        lines.push(metadata_block(&provenance));
        lines.push("<!-- Units: All measurements are in meters -->".to_string());

        for segment in &oriented {
            lines.push(self.line_element(segment));
        }
        lines.push("</svg>".to_string());

        debug!(
            "SVG viewBox {:.4}x{:.4} with {} lines",
            bounds.width(),
            bounds.height(),
            oriented.len()
        );
        Ok(lines.join("\n"))
    }

    fn line_element(&self, segment: &Segment) -> String {
        format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" stroke-dasharray="{}" />"#,
            num(segment.start.x),
            num(segment.start.y),
            num(segment.end.x),
            num(segment.end.y),
            escape(&segment.stroke.color),
            num(segment.stroke.width * self.options.stroke_scale),
            dash_array(segment.stroke.dash),
        )
    }

    pub fn write_to_file<P: CreasePattern + ?Sized>(
        &self,
        pattern: &P,
        path: &Path,
    ) -> ExportResult<()> {
        let svg = self.render(pattern)?;
        std::fs::write(path, svg)?;
        info!("Exported SVG to {}", path.display());
        Ok(())
    }
}

fn metadata_block(provenance: &Provenance) -> String {
    let mut fields = vec![
        ("units", "meters".to_string()),
        ("radius", num(provenance.radius)),
        ("segments", provenance.segments.to_string()),
    ];
    if let Some(tiles) = provenance.tiles {
        fields.push(("tiles", tiles.to_string()));
    }
    if let Some(omega) = provenance.omega {
        fields.push(("omega", num(omega)));
    }
    if let Some(height) = provenance.height {
        fields.push(("height", num(height)));
    }
    if let Some(distance) = provenance.distance {
        fields.push(("distance", num(distance)));
    }

    let mut block = format!("<metadata>\n  <rdf:RDF xmlns:rdf=\"{RDF_NS}\">\n    <rdf:Description>\n");
    for (tag, value) in fields {
        block.push_str(&format!("      <{tag}>{value}</{tag}>\n"));
    }
    block.push_str("    </rdf:Description>\n  </rdf:RDF>\n</metadata>");
    block
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
