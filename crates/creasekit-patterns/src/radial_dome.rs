//! Radial dome crease pattern.
//!
//! One wedge is walked outwards from the origin as a polyline of `n` chords,
//! once with the computed headings and once mirrored. The closing fold of
//! each half and two radial spokes complete the wedge, which is then rotated
//! around the origin to cover the dome. A single cut line along the positive
//! x-axis replaces the folds it overlaps.

use std::f64::consts::PI;

use creasekit_core::{
    CreasePattern, PatternGenerator, PatternKind, PatternResult, Point, Provenance, Segment,
    StrokeRole, StyleConfig,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::angles::{derive_dome_geometry, DomeGeometry};
use crate::dedup::{dedup_segments, round_to, TraceDeduplicator};
use crate::validation::{require_radius, require_segments};

/// Segments within this distance of the x-axis count as lying on it.
const AXIS_EPSILON: f64 = 1e-10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadialDomeParameters {
    pub radius: f64,
    pub segments: u32,
}

impl Default for RadialDomeParameters {
    fn default() -> Self {
        Self {
            radius: 5.0,
            segments: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadialDomePattern {
    pub segments: Vec<Segment>,
    pub geometry: DomeGeometry,
}

impl RadialDomePattern {
    /// The cut line, always emitted last.
    pub fn cut_line(&self) -> Option<&Segment> {
        self.segments.last()
    }
}

impl CreasePattern for RadialDomePattern {
    fn segments(&self) -> &[Segment] {
        &self.segments
    }

    fn provenance(&self) -> Provenance {
        Provenance::new(
            PatternKind::RadialDome,
            self.geometry.radius,
            self.geometry.segments,
        )
    }
}

pub struct RadialDomeGenerator {
    params: RadialDomeParameters,
    style: StyleConfig,
}

impl RadialDomeGenerator {
    pub fn new(params: RadialDomeParameters, style: StyleConfig) -> PatternResult<Self> {
        let generator = Self { params, style };
        generator.validate_parameters()?;
        Ok(generator)
    }

    pub fn parameters(&self) -> &RadialDomeParameters {
        &self.params
    }

    /// Walk one half of the wedge and push its folds, closing fold and
    /// spokes onto `out`.
    fn half_wedge(&self, geo: &DomeGeometry, mirrored: bool, out: &mut Vec<Segment>) {
        let n = geo.lengths.len();
        let sign = if mirrored { -1.0 } else { 1.0 };
        let mut cur = Point::origin();
        let mut heading = 0.0_f64;
        let mut spoke_starts = Vec::with_capacity(2);

        for (i, &length) in geo.lengths.iter().enumerate() {
            let next = Point::new(
                cur.x + length * (sign * heading).cos(),
                cur.y + length * (sign * heading).sin(),
            );
            let stroke = if i == 0 {
                self.style.primary_stroke()
            } else {
                self.style.secondary_stroke()
            };
            if i == 0 {
                spoke_starts.push(next);
            }
            out.push(Segment::new(cur, next, stroke));
            cur = next;

            if i + 1 < n {
                let turn = PI - geo.betas[i];
                if i % 2 == 1 {
                    heading -= turn;
                } else {
                    heading += turn;
                }
            }
        }

        let last_vertex = cur;
        spoke_starts.push(Point::origin());
        if geo.segments % 2 == 0 {
            spoke_starts.reverse();
        }

        let odd = (n - 1) % 2 == 1;
        let alpha_l2 = geo.trailing_pair().secondary;
        let closing_heading = if mirrored {
            if odd {
                heading += PI + alpha_l2;
            } else {
                heading -= PI + alpha_l2;
            }
            -heading
        } else {
            if odd {
                heading -= PI - alpha_l2;
            } else {
                heading += PI - alpha_l2;
            }
            heading
        };
        let h_last = geo.closing_height();
        let closing_vertex = Point::new(
            cur.x + h_last * closing_heading.cos(),
            cur.y + h_last * closing_heading.sin(),
        );
        out.push(Segment::new(cur, closing_vertex, self.style.cut_stroke()));

        for (start, end) in spoke_starts.into_iter().zip([last_vertex, closing_vertex]) {
            out.push(Segment::new(start, end, self.style.guide_stroke()));
        }
    }

    /// The deduplicated wedge before rotation.
    pub fn wedge(&self, geo: &DomeGeometry) -> Vec<Segment> {
        let mut segments = Vec::with_capacity(2 * (geo.lengths.len() + 3));
        self.half_wedge(geo, false, &mut segments);
        self.half_wedge(geo, true, &mut segments);
        dedup_segments(segments, self.style.rounding_decimal)
    }

    /// Copies of `wedge` rotated by successive wedge angles over half a turn.
    pub fn tile_wedge(&self, geo: &DomeGeometry, wedge: &[Segment]) -> Vec<Segment> {
        let mut dedup = TraceDeduplicator::new(self.style.rounding_decimal);
        dedup.extend(wedge.iter().cloned());
        for i in 1..geo.radial_segments / 2 {
            let rotation = f64::from(i) * geo.wedge_angle();
            dedup.extend(wedge.iter().map(|s| s.rotated(rotation)));
        }
        dedup.into_segments()
    }

    /// Replace the folds along the positive x-axis with one cut line.
    ///
    /// The first segment is the seed fold on the axis; its far end is pushed
    /// out to the widest x reached and becomes the cut line's end. Excluded
    /// segments are picked in a first pass, the output built in a second.
    fn attach_cut_line(&self, mut segments: Vec<Segment>) -> Vec<Segment> {
        let precision = self.style.rounding_decimal;
        let max_x = segments
            .iter()
            .map(|s| s.end.x)
            .fold(f64::NEG_INFINITY, f64::max);

        let Some(anchor) = segments.first_mut() else {
            return segments;
        };
        anchor.end.x = max_x;
        let cut_end = anchor.end;
        let cut_end_x = round_to(cut_end.x, precision);
        let cut_end_y = round_to(cut_end.y, precision);
        let cut_slope = rounded_slope(Point::origin(), cut_end, precision);

        let excluded: Vec<bool> = segments
            .iter()
            .map(|s| {
                let x1 = round_to(s.start.x, precision);
                let x2 = round_to(s.end.x, precision);
                let mountain = s.role() == StrokeRole::Mountain;

                let on_axis = s.start.y.abs() < AXIS_EPSILON && s.end.y.abs() < AXIS_EPSILON;
                let under_cut = mountain && on_axis && x1.min(x2) >= 0.0 && x1.max(x2) <= cut_end_x;

                let shares_end = x2 == cut_end_x && round_to(s.end.y, precision) == cut_end_y;
                let collinear = rounded_slope(s.start, s.end, precision) == cut_slope;

                under_cut || (!mountain && shares_end && collinear)
            })
            .collect();

        let cut = Segment::new(Point::origin(), cut_end, self.style.cut_stroke());
        let mut kept: Vec<Segment> = segments
            .into_iter()
            .zip(excluded)
            .filter_map(|(s, skip)| (!skip).then_some(s))
            .rev()
            .collect();
        kept.push(cut);
        kept
    }
}

/// Slope of the rounded endpoints, rounded again; vertical is infinite.
fn rounded_slope(start: Point, end: Point, precision: u32) -> f64 {
    let dx = round_to(end.x, precision) - round_to(start.x, precision);
    let dy = round_to(end.y, precision) - round_to(start.y, precision);
    if dx == 0.0 {
        f64::INFINITY
    } else {
        round_to(dy / dx, precision)
    }
}

impl PatternGenerator for RadialDomeGenerator {
    type Output = RadialDomePattern;

    fn validate_parameters(&self) -> PatternResult<()> {
        require_radius(self.params.radius)?;
        require_segments(self.params.segments)?;
        self.style.validate()?;
        Ok(())
    }

    fn generate(&self) -> PatternResult<RadialDomePattern> {
        let geometry = derive_dome_geometry(self.params.radius, self.params.segments)?;
        debug!(
            "Dome geometry: alpha11={:.4} deg, {} radial segments",
            geometry.alpha_11.to_degrees(),
            geometry.radial_segments
        );

        let wedge = self.wedge(&geometry);
        debug!("Wedge has {} segments", wedge.len());

        let full = self.tile_wedge(&geometry, &wedge);
        let segments = self.attach_cut_line(full);

        info!(
            "Generated radial dome with {} segments (r={}, n={})",
            segments.len(),
            self.params.radius,
            self.params.segments
        );

        Ok(RadialDomePattern { segments, geometry })
    }
}
