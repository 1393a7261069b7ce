//! Command-line argument parsing.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context};
use creasekit_core::PatternKind;

pub const USAGE: &str = r#"creasekit - crease patterns for foldable domes and vaults

USAGE:
  creasekit <dome|barrel-vault|double-barrel-vault> [options]

OPTIONS:
  --radius <R>       Design radius in meters
  --segments <N>     Number of segments (at least 3)
  --tiles <M>        Vertical repetitions (vaults only)
  --omega <DEG>      Central angle in degrees (vaults only)
  --height <H>       Requested fold height (barrel vault only)
  --distance <A>     Distance between vault centres (double barrel vault only)
  --format <svg|dxf> Output format, defaults to svg
  --style <FILE>     Style settings file (.toml or .json)
  --output <PATH>    Write to PATH instead of stdout
  --summary          Print the derived geometry to stderr
  -h, --help         Show this help
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Svg,
    Dxf,
}

impl ExportFormat {
    /// Guess the format from an output file extension.
    pub fn from_extension(path: &std::path::Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        ext.parse().ok()
    }
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "dxf" => Ok(Self::Dxf),
            other => Err(anyhow!("unknown format `{other}` (expected svg or dxf)")),
        }
    }
}

/// Generation request assembled from the command line.
///
/// Unset options fall back to the generator's parameter defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct CliCommand {
    pub kind: PatternKind,
    pub radius: Option<f64>,
    pub segments: Option<u32>,
    pub tiles: Option<u32>,
    pub omega: Option<f64>,
    pub height: Option<f64>,
    pub distance: Option<f64>,
    pub format: ExportFormat,
    pub style: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub summary: bool,
}

impl CliCommand {
    pub fn new(kind: PatternKind) -> Self {
        Self {
            kind,
            radius: None,
            segments: None,
            tiles: None,
            omega: None,
            height: None,
            distance: None,
            format: ExportFormat::default(),
            style: None,
            output: None,
            summary: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    Help,
    Generate(CliCommand),
}

fn value<T: FromStr>(flag: &str, args: &mut impl Iterator<Item = String>) -> anyhow::Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = args
        .next()
        .ok_or_else(|| anyhow!("missing value for {flag}"))?;
    raw.parse()
        .with_context(|| format!("invalid value `{raw}` for {flag}"))
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I>(args: I) -> anyhow::Result<Invocation>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let Some(first) = args.next() else {
        return Ok(Invocation::Help);
    };
    if matches!(first.as_str(), "-h" | "--help" | "help") {
        return Ok(Invocation::Help);
    }

    let kind: PatternKind = first
        .parse()
        .with_context(|| format!("unknown pattern `{first}`\n\n{USAGE}"))?;
    let mut command = CliCommand::new(kind);
    let mut explicit_format = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--radius" => command.radius = Some(value(&arg, &mut args)?),
            "--segments" => command.segments = Some(value(&arg, &mut args)?),
            "--tiles" => command.tiles = Some(value(&arg, &mut args)?),
            "--omega" => command.omega = Some(value(&arg, &mut args)?),
            "--height" => command.height = Some(value(&arg, &mut args)?),
            "--distance" => command.distance = Some(value(&arg, &mut args)?),
            "--format" => {
                let raw: String = value(&arg, &mut args)?;
                command.format = raw.parse()?;
                explicit_format = true;
            }
            "--style" => command.style = Some(value(&arg, &mut args)?),
            "--output" | "-o" => command.output = Some(value(&arg, &mut args)?),
            "--summary" => command.summary = true,
            "-h" | "--help" => return Ok(Invocation::Help),
            other => bail!("unknown option `{other}`\n\n{USAGE}"),
        }
    }

    if !explicit_format {
        if let Some(format) = command.output.as_deref().and_then(ExportFormat::from_extension) {
            command.format = format;
        }
    }

    check_applicable(&command)?;
    Ok(Invocation::Generate(command))
}

fn check_applicable(command: &CliCommand) -> anyhow::Result<()> {
    let kind = command.kind;
    let vault = kind != PatternKind::RadialDome;
    let rejected = [
        ("--tiles", command.tiles.is_some() && !vault),
        ("--omega", command.omega.is_some() && !vault),
        (
            "--height",
            command.height.is_some() && kind != PatternKind::BarrelVault,
        ),
        (
            "--distance",
            command.distance.is_some() && kind != PatternKind::DoubleBarrelVault,
        ),
    ];
    if let Some((flag, _)) = rejected.iter().find(|(_, bad)| *bad) {
        bail!("{flag} does not apply to {}", kind.title());
    }
    Ok(())
}
