//! # CreaseKit
//!
//! Crease pattern generator for foldable structures:
//! - Radial (pseudo) domes built from rotated wedges
//! - Barrel vaults and double barrel vaults built from tiled unit cells
//! - SVG and DXF export of the finished patterns
//!
//! ## Architecture
//!
//! CreaseKit is organized as a workspace with multiple crates:
//!
//! 1. **creasekit-core** - Segments, strokes, style, pattern traits, errors
//! 2. **creasekit-patterns** - Angle calculator, deduplicator and generators
//! 3. **creasekit-settings** - Style presets loaded from TOML or JSON
//! 4. **creasekit-export** - SVG and DXF writers
//! 5. **creasekit** - Command-line binary that integrates all crates

pub mod app;
pub mod cli;

pub use app::{export, generate, load_styles, run, GeneratedPattern};
pub use cli::{parse_args, CliCommand, ExportFormat, Invocation, USAGE};

pub use creasekit_core::{
    Bounds, CreasePattern, DashStyle, GeometryError, ParameterError, PatternError,
    PatternGenerator, PatternKind, PatternResult, Point, Provenance, Segment, Stroke, StrokeRole,
    StyleConfig,
};
pub use creasekit_export::{DxfExporter, DxfOptions, ExportError, SvgExporter, SvgOptions};
pub use creasekit_patterns::{
    BarrelVaultGenerator, BarrelVaultParameters, BarrelVaultPattern, DoubleBarrelVaultGenerator,
    DoubleBarrelVaultParameters, DoubleBarrelVaultPattern, RadialDomeGenerator,
    RadialDomeParameters, RadialDomePattern, TraceDeduplicator,
};
pub use creasekit_settings::{SettingsError, StyleSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, leaving stdout for exported patterns
/// - RUST_LOG environment variable support
/// - INFO as the default level
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
