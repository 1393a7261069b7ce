use creasekit_core::{CreasePattern, PatternGenerator, StyleConfig};
use creasekit_export::{SvgExporter, SvgOptions};
use creasekit_patterns::{
    BarrelVaultGenerator, BarrelVaultParameters, RadialDomeGenerator, RadialDomeParameters,
};
use tempfile::tempdir;

#[test]
fn test_dome_svg_has_one_line_per_segment() {
    let pattern = RadialDomeGenerator::new(RadialDomeParameters::default(), StyleConfig::radial_dome())
        .unwrap()
        .generate()
        .unwrap();

    let svg = SvgExporter::default().render(&pattern).unwrap();
    assert_eq!(svg.matches("<line ").count(), pattern.segments().len());
    assert!(svg.contains("<radius>5</radius>"));
    assert!(svg.contains("<segments>5</segments>"));
    assert!(!svg.contains("<tiles>"));
    assert!(svg.contains(r#"stroke="black""#));
}

#[test]
fn test_barrel_vault_svg_records_clamped_height() {
    let pattern = BarrelVaultGenerator::new(
        BarrelVaultParameters {
            tiles: 2,
            ..Default::default()
        },
        StyleConfig::barrel_vault(),
    )
    .unwrap()
    .generate()
    .unwrap();

    let svg = SvgExporter::default().render(&pattern).unwrap();
    let height = pattern.provenance().height.unwrap();
    assert!(height < 1.0);
    assert!(svg.contains(&format!("<height>{height}</height>")));
    assert!(svg.contains("<tiles>2</tiles>"));
    assert!(svg.contains("<omega>180</omega>"));
}

#[test]
fn test_write_svg_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dome.svg");
    let pattern = RadialDomeGenerator::new(
        RadialDomeParameters {
            radius: 1.0,
            segments: 3,
        },
        StyleConfig::radial_dome(),
    )
    .unwrap()
    .generate()
    .unwrap();

    let exporter = SvgExporter::new(SvgOptions {
        width_px: 1200,
        height_px: 600,
        ..Default::default()
    });
    exporter.write_to_file(&pattern, &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains(r#"width="1200px" height="600px""#));
    assert!(content.ends_with("</svg>"));
}
