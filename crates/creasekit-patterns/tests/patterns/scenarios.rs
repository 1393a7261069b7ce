use creasekit_core::{DashStyle, PatternGenerator, Point, Segment, Stroke, StrokeRole, StyleConfig};
use creasekit_patterns::{
    dedup_segments, folding_angle, max_height, segment_angle, segment_length,
    BarrelVaultGenerator, BarrelVaultParameters, RadialDomeGenerator, RadialDomeParameters,
};

#[test]
fn test_angle_relations_for_half_circle_of_six() {
    let theta = segment_angle(180.0, 6);
    assert_eq!(theta, 30.0);

    let s = segment_length(2.0, theta);
    assert!((s - 1.035276).abs() < 1e-6);

    let alpha = folding_angle(theta);
    assert!((alpha - 15.0).abs() < 1e-9);

    let h = max_height(s, alpha);
    assert!((h - 0.138756).abs() < 1e-4);
}

#[test]
fn test_barrel_vault_clamps_default_height() {
    let generator = BarrelVaultGenerator::new(
        BarrelVaultParameters {
            radius: 2.0,
            segments: 6,
            tiles: 1,
            omega: 180.0,
            height: 1.0,
        },
        StyleConfig::barrel_vault(),
    )
    .unwrap();
    let pattern = generator.generate().unwrap();

    assert!((pattern.geometry.height - 0.138756).abs() < 1e-4);
    assert!((pattern.total_width - 6.211656).abs() < 1e-5);
    assert_eq!(
        pattern.boundary_positions,
        [-2.0 * pattern.geometry.height, 0.0, 2.0 * pattern.geometry.height]
    );
}

#[test]
fn test_reversed_pair_keeps_first() {
    let stroke = Stroke::new(StrokeRole::Mountain, "red", 1.5, DashStyle::Solid);
    let first = Segment::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0), stroke.clone());
    let second = Segment::new(Point::new(1.0, 1.0), Point::new(0.0, 0.0), stroke);

    let out = dedup_segments(vec![first.clone(), second], 4);
    assert_eq!(out, vec![first]);
}

#[test]
fn test_dome_segment_count_boundary() {
    let ok = RadialDomeGenerator::new(
        RadialDomeParameters {
            radius: 5.0,
            segments: 3,
        },
        StyleConfig::radial_dome(),
    )
    .unwrap()
    .generate()
    .unwrap();
    assert!(!ok.segments.is_empty());

    assert!(RadialDomeGenerator::new(
        RadialDomeParameters {
            radius: 5.0,
            segments: 2,
        },
        StyleConfig::radial_dome(),
    )
    .is_err());
}
