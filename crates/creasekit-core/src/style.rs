//! Resolved style configuration injected into every generator call.
//!
//! A `StyleConfig` is a plain value: whoever owns loading and caching (see the
//! settings crate) resolves it once and passes it in. Generators never mutate
//! or retain it between calls.

use serde::{Deserialize, Serialize};

use crate::error::{ParameterError, ParameterResult};
use crate::segment::{DashStyle, Stroke, StrokeRole};

/// Default number of decimal places used when comparing coordinates.
pub const DEFAULT_ROUNDING_DECIMAL: u32 = 4;

/// Upper bound for the rounding precision; beyond this the scaled integer
/// keys lose meaning for typical design lengths.
pub const MAX_ROUNDING_DECIMAL: u32 = 12;

fn default_cut_color() -> String {
    "black".to_string()
}

fn default_rounding_decimal() -> u32 {
    DEFAULT_ROUNDING_DECIMAL
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Color of the primary fold family (mountain role).
    pub primary_color: String,
    /// Color of the secondary fold family (valley role).
    pub secondary_color: String,
    /// Color of radial guides and connector lines.
    pub guide_color: String,
    /// Color of cut lines and outline edges.
    #[serde(default = "default_cut_color")]
    pub cut_color: String,
    /// Line width of fold lines.
    pub fold_width: f64,
    /// Line width of guides and connectors.
    pub guide_width: f64,
    /// Dash style applied to guides and connectors.
    #[serde(default)]
    pub guide_dash: DashStyle,
    /// Decimal places used for duplicate comparison only.
    #[serde(default = "default_rounding_decimal")]
    pub rounding_decimal: u32,
}

impl StyleConfig {
    /// Defaults of the radial dome page.
    pub fn radial_dome() -> Self {
        Self {
            primary_color: "rgb(0,255,0)".to_string(),
            secondary_color: "rgb(255,0,0)".to_string(),
            guide_color: "rgb(0,0,255)".to_string(),
            cut_color: default_cut_color(),
            fold_width: 1.5,
            guide_width: 1.5,
            guide_dash: DashStyle::Solid,
            rounding_decimal: DEFAULT_ROUNDING_DECIMAL,
        }
    }

    /// Defaults of the barrel vault page.
    pub fn barrel_vault() -> Self {
        Self {
            primary_color: "rgb(255,0,0)".to_string(),
            secondary_color: "rgb(0,0,255)".to_string(),
            guide_color: "black".to_string(),
            cut_color: default_cut_color(),
            fold_width: 1.5,
            guide_width: 1.5,
            guide_dash: DashStyle::Solid,
            rounding_decimal: DEFAULT_ROUNDING_DECIMAL,
        }
    }

    /// Defaults of the double barrel vault page.
    pub fn double_barrel_vault() -> Self {
        Self::barrel_vault()
    }

    pub fn validate(&self) -> ParameterResult<()> {
        for (key, value) in [
            ("primary_color", &self.primary_color),
            ("secondary_color", &self.secondary_color),
            ("guide_color", &self.guide_color),
            ("cut_color", &self.cut_color),
        ] {
            if value.trim().is_empty() {
                return Err(ParameterError::invalid_style(key, "color token is empty"));
            }
        }

        for (key, value) in [
            ("fold_width", self.fold_width),
            ("guide_width", self.guide_width),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ParameterError::invalid_style(
                    key,
                    format!("width must be positive, got {value}"),
                ));
            }
        }

        if self.rounding_decimal > MAX_ROUNDING_DECIMAL {
            return Err(ParameterError::invalid_style(
                "rounding_decimal",
                format!(
                    "at most {MAX_ROUNDING_DECIMAL} decimal places, got {}",
                    self.rounding_decimal
                ),
            ));
        }

        Ok(())
    }

    pub fn primary_stroke(&self) -> Stroke {
        Stroke::new(
            StrokeRole::Mountain,
            &self.primary_color,
            self.fold_width,
            DashStyle::Solid,
        )
    }

    pub fn secondary_stroke(&self) -> Stroke {
        Stroke::new(
            StrokeRole::Valley,
            &self.secondary_color,
            self.fold_width,
            DashStyle::Solid,
        )
    }

    pub fn guide_stroke(&self) -> Stroke {
        Stroke::new(
            StrokeRole::Guide,
            &self.guide_color,
            self.guide_width,
            self.guide_dash,
        )
    }

    pub fn connector_stroke(&self) -> Stroke {
        Stroke::new(
            StrokeRole::Connector,
            &self.guide_color,
            self.guide_width,
            self.guide_dash,
        )
    }

    /// Full-width edge of a tiled pattern: connector color at fold width.
    pub fn boundary_stroke(&self) -> Stroke {
        Stroke::new(
            StrokeRole::Connector,
            &self.guide_color,
            self.fold_width,
            DashStyle::Solid,
        )
    }

    pub fn cut_stroke(&self) -> Stroke {
        Stroke::new(
            StrokeRole::Cut,
            &self.cut_color,
            self.fold_width,
            DashStyle::Solid,
        )
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::barrel_vault()
    }
}
