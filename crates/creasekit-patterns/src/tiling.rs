//! Unit cell assembly, vertical tiling and boundary merging shared by the
//! barrel vault generators.

use creasekit_core::{Point, Segment, Stroke};

use crate::dedup::{dedup_segments, TraceDeduplicator};

/// Two endpoints on the same boundary closer than this are merged.
pub const BOUNDARY_TOLERANCE: f64 = 0.001;

/// One deduplicated vault cell before tiling.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitCell {
    pub segments: Vec<Segment>,
    /// Horizontal fold lines of the cell: `[-2h, 0, 2h]`.
    pub boundary_positions: [f64; 3],
    pub total_width: f64,
}

impl UnitCell {
    /// Close the walk in `builder` with vertical connectors at both ends and
    /// deduplicate it.
    pub(crate) fn finish(
        mut builder: CellBuilder,
        height: f64,
        total_width: f64,
        connector: &Stroke,
        precision: u32,
    ) -> Self {
        let boundary_positions = [-2.0 * height, 0.0, 2.0 * height];
        for x in [0.0, total_width] {
            builder.segments.push(Segment::new(
                Point::new(x, boundary_positions[0]),
                Point::new(x, boundary_positions[2]),
                connector.clone(),
            ));
        }

        Self {
            segments: dedup_segments(builder.segments, precision),
            boundary_positions,
            total_width,
        }
    }

    /// Height of one cell, the vertical pitch of the tiling.
    pub fn pitch(&self) -> f64 {
        self.boundary_positions[2] - self.boundary_positions[0]
    }
}

/// Collects the zigzag folds and valley connectors of a cell walk.
#[derive(Debug)]
pub(crate) struct CellBuilder {
    fold: Stroke,
    valley: Stroke,
    segments: Vec<Segment>,
}

impl CellBuilder {
    pub(crate) fn new(fold: Stroke, valley: Stroke) -> Self {
        Self {
            fold,
            valley,
            segments: Vec::new(),
        }
    }

    pub(crate) fn fold(&mut self, from: Point, to: Point) {
        self.segments
            .push(Segment::new(from, to, self.fold.clone()));
    }

    pub(crate) fn valley(&mut self, from: Point, to: Point) {
        self.segments
            .push(Segment::new(from, to, self.valley.clone()));
    }
}

/// Stack `tiles` copies of `cell` symmetrically about the original.
///
/// Copy `i` is shifted by `±pitch·i`; the result keeps the cell first and is
/// deduplicated as it grows.
pub fn tile_vertically(cell: &[Segment], pitch: f64, tiles: u32, precision: u32) -> Vec<Segment> {
    let mut dedup = TraceDeduplicator::new(precision);
    dedup.extend(cell.iter().cloned());
    for i in 1..tiles {
        let offset = pitch * f64::from(i);
        for segment in cell {
            dedup.push(segment.translated(0.0, offset));
            dedup.push(segment.translated(0.0, -offset));
        }
    }
    dedup.into_segments()
}

fn on_line(segment: &Segment, y: f64) -> bool {
    (segment.start.y - y).abs() < BOUNDARY_TOLERANCE && (segment.end.y - y).abs() < BOUNDARY_TOLERANCE
}

/// Replace the pieces lying on the outer edges with one line per edge.
pub fn merge_boundaries(
    segments: Vec<Segment>,
    y_bottom: f64,
    y_top: f64,
    total_width: f64,
    edge: &Stroke,
) -> Vec<Segment> {
    let mut merged: Vec<Segment> = segments
        .into_iter()
        .filter(|s| !on_line(s, y_bottom) && !on_line(s, y_top))
        .collect();

    for y in [y_bottom, y_top] {
        merged.push(Segment::new(
            Point::new(0.0, y),
            Point::new(total_width, y),
            edge.clone(),
        ));
    }
    merged
}

/// Outer edge positions of `tiles` stacked cells.
pub fn outer_edges(cell: &UnitCell, tiles: u32) -> (f64, f64) {
    let factor = f64::from(2 * tiles - 1);
    (
        cell.boundary_positions[0] * factor,
        cell.boundary_positions[2] * factor,
    )
}
