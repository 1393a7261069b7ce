//! Removal of duplicate and reversed-duplicate segments.
//!
//! Two segments are the same trace when their endpoints agree after rounding
//! to a fixed number of decimals, in either order. Rounding only builds the
//! comparison key; retained segments keep their exact coordinates.

use std::collections::HashSet;

use creasekit_core::Segment;

/// Endpoints scaled by `10^precision` and rounded, `[x1, y1, x2, y2]`.
type SegmentKey = [i64; 4];

/// Round `value` to `precision` decimal places.
pub fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}

/// Incremental deduplicator that keeps first occurrences in arrival order.
#[derive(Debug, Clone)]
pub struct TraceDeduplicator {
    factor: f64,
    seen: HashSet<SegmentKey>,
    segments: Vec<Segment>,
}

impl TraceDeduplicator {
    pub fn new(precision: u32) -> Self {
        Self {
            factor: 10f64.powi(precision as i32),
            seen: HashSet::new(),
            segments: Vec::new(),
        }
    }

    fn scaled(&self, value: f64) -> i64 {
        // Integer keys make -0.0 and 0.0 compare equal.
        (value * self.factor).round() as i64
    }

    fn key(&self, segment: &Segment) -> SegmentKey {
        [
            self.scaled(segment.start.x),
            self.scaled(segment.start.y),
            self.scaled(segment.end.x),
            self.scaled(segment.end.y),
        ]
    }

    /// Add `segment` unless it duplicates one already kept.
    ///
    /// Returns whether the segment was kept.
    pub fn push(&mut self, segment: Segment) -> bool {
        let [x1, y1, x2, y2] = self.key(&segment);
        let forward = [x1, y1, x2, y2];
        let reverse = [x2, y2, x1, y1];
        if self.seen.contains(&forward) || self.seen.contains(&reverse) {
            return false;
        }
        self.seen.insert(forward);
        self.segments.push(segment);
        true
    }

    pub fn extend<I: IntoIterator<Item = Segment>>(&mut self, segments: I) {
        for segment in segments {
            self.push(segment);
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }
}

/// Deduplicate `segments`, keeping first occurrences in order.
pub fn dedup_segments<I>(segments: I, precision: u32) -> Vec<Segment>
where
    I: IntoIterator<Item = Segment>,
{
    let mut dedup = TraceDeduplicator::new(precision);
    dedup.extend(segments);
    dedup.into_segments()
}

#[cfg(test)]
mod tests {
    use super::*;
    use creasekit_core::{DashStyle, Point, Stroke, StrokeRole};

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment::new(
            Point::new(x1, y1),
            Point::new(x2, y2),
            Stroke::new(StrokeRole::Mountain, "red", 1.5, DashStyle::Solid),
        )
    }

    #[test]
    fn test_reversed_duplicate_is_dropped() {
        let first = seg(0.0, 0.0, 1.0, 1.0);
        let out = dedup_segments(vec![first.clone(), seg(1.0, 1.0, 0.0, 0.0)], 4);
        assert_eq!(out, vec![first]);
    }

    #[test]
    fn test_near_duplicates_within_precision() {
        let out = dedup_segments(
            vec![seg(0.0, 0.0, 1.0, 1.0), seg(0.00001, -0.00002, 1.00003, 0.99999)],
            4,
        );
        assert_eq!(out.len(), 1);

        let out = dedup_segments(
            vec![seg(0.0, 0.0, 1.0, 1.0), seg(0.0, 0.0, 1.001, 1.0)],
            4,
        );
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_retained_coordinates_are_not_rounded() {
        let out = dedup_segments(vec![seg(0.123456789, 0.0, 1.0, 0.0)], 2);
        assert_eq!(out[0].start.x, 0.123456789);
    }

    #[test]
    fn test_negative_zero_matches_zero() {
        let out = dedup_segments(vec![seg(0.0, 0.0, 1.0, 0.0), seg(-0.0, -0.0, 1.0, -0.0)], 4);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_incremental_push_reports_kept() {
        let mut dedup = TraceDeduplicator::new(4);
        assert!(dedup.push(seg(0.0, 0.0, 2.0, 0.0)));
        assert!(!dedup.push(seg(2.0, 0.0, 0.0, 0.0)));
        assert!(dedup.push(seg(0.0, 0.0, 0.0, 2.0)));
        assert_eq!(dedup.len(), 2);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.23456, 2), 1.23);
        assert_eq!(round_to(-0.00004, 4), -0.0);
        assert_eq!(round_to(2.5, 0), 3.0);
    }
}
