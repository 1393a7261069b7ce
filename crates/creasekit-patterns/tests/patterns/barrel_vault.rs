use creasekit_core::{CreasePattern, DashStyle, PatternGenerator, StrokeRole, StyleConfig};
use creasekit_patterns::{BarrelVaultGenerator, BarrelVaultParameters};

fn generate(params: BarrelVaultParameters) -> creasekit_patterns::BarrelVaultPattern {
    BarrelVaultGenerator::new(params, StyleConfig::barrel_vault())
        .unwrap()
        .generate()
        .unwrap()
}

#[test]
fn test_heights_above_max_match_max() {
    let base = BarrelVaultParameters {
        tiles: 2,
        ..Default::default()
    };
    let clamped = generate(BarrelVaultParameters {
        height: 5.0,
        ..base.clone()
    });
    let at_max = generate(BarrelVaultParameters {
        height: clamped.geometry.max_height,
        ..base
    });

    assert_eq!(clamped.segments, at_max.segments);
    assert_eq!(clamped.geometry.height, at_max.geometry.height);
    assert_eq!(clamped.provenance().height, Some(clamped.geometry.max_height));
}

#[test]
fn test_reference_segment_counts() {
    let counts: Vec<(u32, u32, usize)> = vec![(3, 1, 11), (4, 2, 44), (5, 3, 89), (6, 1, 20), (6, 3, 108)];
    for (segments, tiles, expected) in counts {
        let pattern = generate(BarrelVaultParameters {
            segments,
            tiles,
            ..Default::default()
        });
        assert_eq!(pattern.segments.len(), expected, "n = {segments}, m = {tiles}");
    }
}

#[test]
fn test_outer_edges_span_full_width() {
    let pattern = generate(BarrelVaultParameters {
        tiles: 2,
        ..Default::default()
    });
    let h = pattern.geometry.height;
    let edges: Vec<_> = pattern.segments[pattern.segments.len() - 2..].to_vec();

    assert_eq!(edges[0].start.y, -6.0 * h);
    assert_eq!(edges[1].start.y, 6.0 * h);
    for edge in &edges {
        assert_eq!(edge.start.x, 0.0);
        assert_eq!(edge.end.x, pattern.total_width);
        assert_eq!(edge.role(), StrokeRole::Connector);
        assert_eq!(edge.stroke.dash, DashStyle::Solid);
    }
}

#[test]
fn test_connectors_follow_style() {
    let mut style = StyleConfig::barrel_vault();
    style.guide_dash = DashStyle::DashDot;
    style.guide_width = 0.5;
    let pattern = BarrelVaultGenerator::new(BarrelVaultParameters::default(), style)
        .unwrap()
        .generate()
        .unwrap();

    let verticals: Vec<_> = pattern
        .segments
        .iter()
        .filter(|s| s.start.x == s.end.x && s.role() == StrokeRole::Connector)
        .collect();
    assert_eq!(verticals.len(), 2);
    for v in verticals {
        assert_eq!(v.stroke.dash, DashStyle::DashDot);
        assert_eq!(v.stroke.width, 0.5);
    }
}

#[test]
fn test_all_segments_inside_pattern_bounds() {
    let pattern = generate(BarrelVaultParameters {
        segments: 7,
        tiles: 3,
        height: 0.05,
        ..Default::default()
    });
    let bounds = pattern.bounds().unwrap();
    assert!(bounds.min_x >= -1e-12);
    assert!((bounds.max_x - pattern.total_width).abs() < 1e-9);
    assert!((bounds.max_y - 2.0 * 0.05 * 5.0).abs() < 1e-9);
}
