use std::io::Cursor;

use creasekit_core::{CreasePattern, PatternGenerator, StyleConfig};
use creasekit_export::{DxfExporter, DxfOptions};
use creasekit_patterns::{
    DoubleBarrelVaultGenerator, DoubleBarrelVaultParameters, RadialDomeGenerator,
    RadialDomeParameters,
};
use ::dxf::entities::EntityType;
use ::dxf::Drawing;
use tempfile::tempdir;

fn dome() -> creasekit_patterns::RadialDomePattern {
    RadialDomeGenerator::new(RadialDomeParameters::default(), StyleConfig::radial_dome())
        .unwrap()
        .generate()
        .unwrap()
}

fn reload(bytes: &[u8]) -> Drawing {
    Drawing::load(&mut Cursor::new(bytes)).unwrap()
}

#[test]
fn test_dome_dxf_lines_and_reference_circle() {
    let pattern = dome();
    let bytes = DxfExporter::default().render(&pattern).unwrap();
    let drawing = reload(&bytes);

    let lines = drawing
        .entities()
        .filter(|e| matches!(e.specific, EntityType::Line(_)))
        .count();
    assert_eq!(lines, pattern.segments().len());

    let circles: Vec<f64> = drawing
        .entities()
        .filter_map(|e| match e.specific {
            EntityType::Circle(ref c) => Some(c.radius),
            _ => None,
        })
        .collect();
    assert_eq!(circles, vec![5.0]);
}

#[test]
fn test_reference_circle_can_be_disabled() {
    let exporter = DxfExporter::new(DxfOptions {
        reference_circle: false,
    });
    let drawing = reload(&exporter.render(&dome()).unwrap());
    assert!(!drawing
        .entities()
        .any(|e| matches!(e.specific, EntityType::Circle(_))));
}

#[test]
fn test_layers_follow_roles() {
    let pattern = DoubleBarrelVaultGenerator::new(
        DoubleBarrelVaultParameters::default(),
        StyleConfig::double_barrel_vault(),
    )
    .unwrap()
    .generate()
    .unwrap();

    let drawing = reload(&DxfExporter::default().render(&pattern).unwrap());
    let layers: Vec<String> = drawing.layers().map(|l| l.name.clone()).collect();
    for name in ["MOUNTAIN", "VALLEY", "CONNECTOR"] {
        assert!(layers.iter().any(|l| l == name), "missing layer {name}");
    }
    // Vaults never get the dome reference circle.
    assert!(!drawing
        .entities()
        .any(|e| matches!(e.specific, EntityType::Circle(_))));
}

#[test]
fn test_write_dxf_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dome.dxf");
    DxfExporter::default().write_to_file(&dome(), &path).unwrap();

    let drawing = Drawing::load_file(&path).unwrap();
    assert!(drawing.entities().count() > 0);
}
