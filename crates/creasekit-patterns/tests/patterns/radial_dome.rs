use creasekit_core::{CreasePattern, PatternGenerator, PatternKind, Segment, StrokeRole, StyleConfig};
use creasekit_patterns::{derive_dome_geometry, RadialDomeGenerator, RadialDomeParameters};

fn generator(radius: f64, segments: u32) -> RadialDomeGenerator {
    RadialDomeGenerator::new(
        RadialDomeParameters { radius, segments },
        StyleConfig::radial_dome(),
    )
    .unwrap()
}

fn close(a: &Segment, b: &Segment) -> bool {
    let tol = 1e-6;
    let forward = (a.start.x - b.start.x).abs() < tol
        && (a.start.y - b.start.y).abs() < tol
        && (a.end.x - b.end.x).abs() < tol
        && (a.end.y - b.end.y).abs() < tol;
    let backward = (a.start.x - b.end.x).abs() < tol
        && (a.start.y - b.end.y).abs() < tol
        && (a.end.x - b.start.x).abs() < tol
        && (a.end.y - b.start.y).abs() < tol;
    forward || backward
}

#[test]
fn test_generation_is_deterministic() {
    let a = generator(5.0, 5).generate().unwrap();
    let b = generator(5.0, 5).generate().unwrap();
    assert_eq!(a.segments, b.segments);
}

#[test]
fn test_wedge_copies_cover_half_turn() {
    for n in [3, 4, 5, 6] {
        let gen = generator(5.0, n);
        let geo = derive_dome_geometry(5.0, n).unwrap();
        let wedge = gen.wedge(&geo);
        let full = gen.tile_wedge(&geo, &wedge);
        let copies = (geo.radial_segments / 2) as usize;

        // Neighbouring copies share one spoke.
        assert_eq!(full.len(), copies * (wedge.len() - 1), "n = {n}");
        assert_eq!(full.len() % copies, 0);

        for k in 1..copies {
            let rotation = k as f64 * geo.wedge_angle();
            for seg in &wedge {
                let rotated = seg.rotated(rotation);
                assert!(
                    full.iter().any(|s| close(s, &rotated)),
                    "n = {n}: no copy of {seg:?} at step {k}"
                );
            }
        }
    }
}

#[test]
fn test_single_cut_line_replaces_seed_fold() {
    for n in [3, 4, 5, 6] {
        let pattern = generator(5.0, n).generate().unwrap();
        let geo = &pattern.geometry;
        let wedge_count = (geo.radial_segments / 2) as usize;

        let cuts: Vec<&Segment> = pattern
            .segments
            .iter()
            .filter(|s| s.role() == StrokeRole::Cut && s.start.x == 0.0 && s.start.y == 0.0)
            .collect();
        assert_eq!(cuts.len(), 1, "n = {n}");
        assert_eq!(pattern.cut_line(), Some(cuts[0]));

        let mountains = pattern
            .segments
            .iter()
            .filter(|s| s.role() == StrokeRole::Mountain)
            .count();
        assert_eq!(mountains, wedge_count - 1, "n = {n}");
    }
}

#[test]
fn test_reference_segment_counts() {
    assert_eq!(generator(5.0, 3).generate().unwrap().segments.len(), 107);
    assert_eq!(generator(5.0, 5).generate().unwrap().segments.len(), 389);
    assert_eq!(generator(5.0, 6).generate().unwrap().segments.len(), 629);
}

#[test]
fn test_provenance() {
    let pattern = generator(3.5, 4).generate().unwrap();
    let prov = pattern.provenance();
    assert_eq!(prov.kind, PatternKind::RadialDome);
    assert_eq!(prov.radius, 3.5);
    assert_eq!(prov.segments, 4);
    assert_eq!(prov.tiles, None);
    assert!(pattern.bounds().is_some());
}
