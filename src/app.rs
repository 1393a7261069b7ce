//! Drives one generation request from parsed arguments to exported output.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use creasekit_core::{CreasePattern, PatternGenerator, PatternKind, StyleConfig};
use creasekit_export::{DxfExporter, SvgExporter};
use creasekit_patterns::{
    BarrelVaultGenerator, BarrelVaultParameters, BarrelVaultPattern, DoubleBarrelVaultGenerator,
    DoubleBarrelVaultParameters, DoubleBarrelVaultPattern, RadialDomeGenerator,
    RadialDomeParameters, RadialDomePattern,
};
use creasekit_settings::{default_config_path, StyleSettings};
use tracing::info;

use crate::cli::{CliCommand, ExportFormat};

/// A pattern of any supported family.
#[derive(Debug, Clone)]
pub enum GeneratedPattern {
    RadialDome(RadialDomePattern),
    BarrelVault(BarrelVaultPattern),
    DoubleBarrelVault(DoubleBarrelVaultPattern),
}

impl GeneratedPattern {
    pub fn as_pattern(&self) -> &dyn CreasePattern {
        match self {
            Self::RadialDome(p) => p,
            Self::BarrelVault(p) => p,
            Self::DoubleBarrelVault(p) => p,
        }
    }

    /// Human readable account of the derived geometry.
    pub fn summary(&self) -> String {
        let pattern = self.as_pattern();
        let mut text = format!(
            "{} ({} segments)\n",
            pattern.provenance().kind.title(),
            pattern.segments().len()
        );
        match self {
            Self::RadialDome(p) => {
                text.push_str(&p.geometry.to_string());
            }
            Self::BarrelVault(p) => {
                let g = &p.geometry;
                text.push_str(&format!(
                    "theta: {:.4}°\nsegment length: {:.6}\nalpha: {:.4}°\nmax height: {:.6}\nheight: {:.6}{}\nwidth: {:.6}",
                    g.theta,
                    g.segment_length,
                    g.alpha,
                    g.max_height,
                    g.height,
                    if g.is_clamped() { " (clamped)" } else { "" },
                    p.total_width
                ));
            }
            Self::DoubleBarrelVault(p) => {
                let g = &p.geometry;
                text.push_str(&format!(
                    "theta: {:.4}°\nsegment length: {:.6}\nalpha1: {:.4}°\nbeta: {:.4}°\nalpha2: {:.4}°\nheight: {:.6}\nwidth: {:.6}",
                    g.theta, g.segment_length, g.alpha1, g.beta, g.alpha2, g.height, p.total_width
                ));
            }
        }
        text
    }
}

/// Run the generator selected by `command` with `style`.
pub fn generate(command: &CliCommand, style: StyleConfig) -> anyhow::Result<GeneratedPattern> {
    let pattern = match command.kind {
        PatternKind::RadialDome => {
            let defaults = RadialDomeParameters::default();
            let params = RadialDomeParameters {
                radius: command.radius.unwrap_or(defaults.radius),
                segments: command.segments.unwrap_or(defaults.segments),
            };
            GeneratedPattern::RadialDome(RadialDomeGenerator::new(params, style)?.generate()?)
        }
        PatternKind::BarrelVault => {
            let defaults = BarrelVaultParameters::default();
            let params = BarrelVaultParameters {
                radius: command.radius.unwrap_or(defaults.radius),
                segments: command.segments.unwrap_or(defaults.segments),
                tiles: command.tiles.unwrap_or(defaults.tiles),
                omega: command.omega.unwrap_or(defaults.omega),
                height: command.height.unwrap_or(defaults.height),
            };
            GeneratedPattern::BarrelVault(BarrelVaultGenerator::new(params, style)?.generate()?)
        }
        PatternKind::DoubleBarrelVault => {
            let defaults = DoubleBarrelVaultParameters::default();
            let params = DoubleBarrelVaultParameters {
                radius: command.radius.unwrap_or(defaults.radius),
                segments: command.segments.unwrap_or(defaults.segments),
                tiles: command.tiles.unwrap_or(defaults.tiles),
                omega: command.omega.unwrap_or(defaults.omega),
                distance: command.distance.unwrap_or(defaults.distance),
            };
            GeneratedPattern::DoubleBarrelVault(
                DoubleBarrelVaultGenerator::new(params, style)?.generate()?,
            )
        }
    };
    Ok(pattern)
}

/// Style settings from `--style`, or the user config file when present.
pub fn load_styles(path: Option<&Path>) -> anyhow::Result<StyleSettings> {
    match path {
        Some(path) => StyleSettings::load_from_file(path)
            .with_context(|| format!("failed to load style settings {}", path.display())),
        None => Ok(StyleSettings::load_or_default(&default_config_path())?),
    }
}

/// Serialize `pattern` in `format`.
pub fn export(pattern: &dyn CreasePattern, format: ExportFormat) -> anyhow::Result<Vec<u8>> {
    let bytes = match format {
        ExportFormat::Svg => SvgExporter::default().render(pattern)?.into_bytes(),
        ExportFormat::Dxf => DxfExporter::default().render(pattern)?,
    };
    Ok(bytes)
}

pub fn run(command: &CliCommand) -> anyhow::Result<()> {
    let styles = load_styles(command.style.as_deref())?;
    let style = styles.style_for(command.kind).clone();
    let pattern = generate(command, style)?;

    if command.summary {
        eprintln!("{}", pattern.summary());
    }

    match command.output.as_deref() {
        Some(path) => {
            let pattern = pattern.as_pattern();
            match command.format {
                ExportFormat::Svg => SvgExporter::default().write_to_file(pattern, path)?,
                ExportFormat::Dxf => DxfExporter::default().write_to_file(pattern, path)?,
            }
        }
        None => {
            let bytes = export(pattern.as_pattern(), command.format)?;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes)?;
            stdout.flush()?;
            info!("Wrote {} bytes to stdout", bytes.len());
        }
    }
    Ok(())
}
