use creasekit_core::{DashStyle, Point, Segment, Stroke, StrokeRole};
use creasekit_patterns::{dedup_segments, TraceDeduplicator};
use proptest::prelude::*;

fn stroke() -> Stroke {
    Stroke::new(StrokeRole::Valley, "blue", 1.0, DashStyle::Solid)
}

// Coordinates on a coarse grid so duplicates actually occur.
fn segment_strategy() -> impl Strategy<Value = Segment> {
    (0i32..6, 0i32..6, 0i32..6, 0i32..6).prop_map(|(x1, y1, x2, y2)| {
        Segment::new(
            Point::new(f64::from(x1) * 0.5, f64::from(y1) * 0.5),
            Point::new(f64::from(x2) * 0.5, f64::from(y2) * 0.5),
            stroke(),
        )
    })
}

proptest! {
    #[test]
    fn dedup_is_idempotent(segments in prop::collection::vec(segment_strategy(), 0..40)) {
        let once = dedup_segments(segments, 4);
        let twice = dedup_segments(once.clone(), 4);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn reversed_copy_is_removed(segments in prop::collection::vec(segment_strategy(), 1..30), pick in any::<prop::sample::Index>()) {
        let unique = dedup_segments(segments, 4);
        let reversed = unique[pick.index(unique.len())].reversed();

        let mut extended = unique.clone();
        extended.push(reversed);
        prop_assert_eq!(dedup_segments(extended, 4), unique);
    }

    #[test]
    fn first_occurrences_keep_their_order(segments in prop::collection::vec(segment_strategy(), 0..40)) {
        let unique = dedup_segments(segments.clone(), 4);
        let mut cursor = segments.iter();
        for kept in &unique {
            prop_assert!(cursor.any(|s| s == kept));
        }
    }
}

#[test]
fn test_incremental_matches_batch() {
    let segments: Vec<Segment> = (0..10)
        .map(|i| {
            let x = f64::from(i % 4);
            Segment::new(Point::new(x, 0.0), Point::new(x + 1.0, 1.0), stroke())
        })
        .collect();

    let mut incremental = TraceDeduplicator::new(4);
    for s in segments.iter().cloned() {
        incremental.push(s);
    }
    assert_eq!(incremental.len(), 4);
    assert_eq!(incremental.into_segments(), dedup_segments(segments, 4));
}
