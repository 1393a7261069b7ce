//! Generator and pattern traits shared by every crease pattern family.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ParameterError, PatternResult};
use crate::segment::{Bounds, Segment};

/// The pattern families CreaseKit can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    RadialDome,
    BarrelVault,
    DoubleBarrelVault,
}

impl PatternKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RadialDome => "radial_dome",
            Self::BarrelVault => "barrel_vault",
            Self::DoubleBarrelVault => "double_barrel_vault",
        }
    }

    /// Human readable title used in exported documents.
    pub fn title(&self) -> &'static str {
        match self {
            Self::RadialDome => "Radial Dome",
            Self::BarrelVault => "Barrel Vault",
            Self::DoubleBarrelVault => "Double Barrel Vault",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternKind {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "dome" | "radial_dome" => Ok(Self::RadialDome),
            "barrel" | "barrel_vault" => Ok(Self::BarrelVault),
            "double_barrel" | "double_barrel_vault" => Ok(Self::DoubleBarrelVault),
            other => Err(ParameterError::UnknownPattern(other.to_string())),
        }
    }
}

/// Design parameters recorded alongside a generated pattern.
///
/// `height` is the value actually used for the geometry, which for the
/// barrel vault is the clamped one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    pub kind: PatternKind,
    pub radius: f64,
    pub segments: u32,
    pub tiles: Option<u32>,
    pub omega: Option<f64>,
    pub height: Option<f64>,
    pub distance: Option<f64>,
}

impl Provenance {
    pub fn new(kind: PatternKind, radius: f64, segments: u32) -> Self {
        Self {
            kind,
            radius,
            segments,
            tiles: None,
            omega: None,
            height: None,
            distance: None,
        }
    }

    pub fn with_tiles(mut self, tiles: u32) -> Self {
        self.tiles = Some(tiles);
        self
    }

    pub fn with_omega(mut self, omega: f64) -> Self {
        self.omega = Some(omega);
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = Some(distance);
        self
    }
}

/// A finished crease pattern as consumed by renderers and exporters.
pub trait CreasePattern {
    /// Ordered, deduplicated segments.
    fn segments(&self) -> &[Segment];

    fn provenance(&self) -> Provenance;

    fn bounds(&self) -> Option<Bounds> {
        Bounds::of_segments(self.segments())
    }

    fn is_empty(&self) -> bool {
        self.segments().is_empty()
    }
}

/// A parameterised generator that validates its inputs up front and can
/// then be asked for its pattern any number of times.
pub trait PatternGenerator {
    type Output: CreasePattern;

    fn validate_parameters(&self) -> PatternResult<()>;

    fn generate(&self) -> PatternResult<Self::Output>;
}
