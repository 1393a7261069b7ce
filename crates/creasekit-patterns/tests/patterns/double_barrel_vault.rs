use creasekit_core::{CreasePattern, PatternGenerator, PatternKind, StrokeRole, StyleConfig};
use creasekit_patterns::{
    double_vault_alpha1, DoubleBarrelVaultGenerator, DoubleBarrelVaultParameters,
};

fn generate(params: DoubleBarrelVaultParameters) -> creasekit_patterns::DoubleBarrelVaultPattern {
    DoubleBarrelVaultGenerator::new(params, StyleConfig::double_barrel_vault())
        .unwrap()
        .generate()
        .unwrap()
}

#[test]
fn test_reference_segment_counts() {
    let counts: Vec<(u32, u32, usize)> = vec![(3, 1, 11), (5, 2, 58), (6, 1, 21), (6, 2, 69)];
    for (segments, tiles, expected) in counts {
        let pattern = generate(DoubleBarrelVaultParameters {
            segments,
            tiles,
            ..Default::default()
        });
        assert_eq!(pattern.segments.len(), expected, "n = {segments}, m = {tiles}");
    }
}

#[test]
fn test_geometry_uses_double_vault_angles() {
    let params = DoubleBarrelVaultParameters::default();
    let pattern = generate(params.clone());
    let alpha1 = double_vault_alpha1(params.distance, params.radius, params.segments).unwrap();
    assert_eq!(pattern.geometry.alpha1, alpha1);
    assert!(pattern.geometry.height > 0.0);
    assert!((pattern.geometry.height - 0.057089).abs() < 1e-6);
}

#[test]
fn test_pattern_shape_mirrors_single_vault() {
    let pattern = generate(DoubleBarrelVaultParameters {
        tiles: 2,
        ..Default::default()
    });
    let h = pattern.geometry.height;
    assert_eq!(pattern.boundary_positions, [-2.0 * h, 0.0, 2.0 * h]);

    let last = &pattern.segments[pattern.segments.len() - 1];
    assert_eq!(last.role(), StrokeRole::Connector);
    assert_eq!(last.start.y, 6.0 * h);

    let prov = pattern.provenance();
    assert_eq!(prov.kind, PatternKind::DoubleBarrelVault);
    assert_eq!(prov.distance, Some(1.0));
    assert_eq!(prov.height, None);
}

#[test]
fn test_touching_centres_rejected() {
    let result = DoubleBarrelVaultGenerator::new(
        DoubleBarrelVaultParameters {
            radius: 2.0,
            distance: 4.0,
            ..Default::default()
        },
        StyleConfig::double_barrel_vault(),
    );
    assert!(result.is_err());
}
