//! Style settings file handling
//!
//! One [`StyleConfig`] section per pattern family, stored as JSON or TOML.
//! Missing sections fall back to the family's preset.

use std::path::{Path, PathBuf};

use creasekit_core::{PatternKind, StyleConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{SettingsError, SettingsResult};

/// Name of the directory created under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "creasekit";

/// File name of the default style settings.
pub const CONFIG_FILE_NAME: &str = "styles.toml";

/// Serialization format picked from a file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            Some(ext) => Err(SettingsError::UnsupportedFormat(ext.to_string())),
            None => Err(SettingsError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Style presets for every pattern family
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleSettings {
    #[serde(default = "StyleConfig::radial_dome")]
    pub radial_dome: StyleConfig,
    #[serde(default = "StyleConfig::barrel_vault")]
    pub barrel_vault: StyleConfig,
    #[serde(default = "StyleConfig::double_barrel_vault")]
    pub double_barrel_vault: StyleConfig,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            radial_dome: StyleConfig::radial_dome(),
            barrel_vault: StyleConfig::barrel_vault(),
            double_barrel_vault: StyleConfig::double_barrel_vault(),
        }
    }
}

impl StyleSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolved style for one pattern family.
    pub fn style_for(&self, kind: PatternKind) -> &StyleConfig {
        match kind {
            PatternKind::RadialDome => &self.radial_dome,
            PatternKind::BarrelVault => &self.barrel_vault,
            PatternKind::DoubleBarrelVault => &self.double_barrel_vault,
        }
    }

    pub fn style_for_mut(&mut self, kind: PatternKind) -> &mut StyleConfig {
        match kind {
            PatternKind::RadialDome => &mut self.radial_dome,
            PatternKind::BarrelVault => &mut self.barrel_vault,
            PatternKind::DoubleBarrelVault => &mut self.double_barrel_vault,
        }
    }

    /// Load settings from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let settings: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        settings.validate()?;
        info!("Loaded style settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("{}: {}", path.display(), e))
        })?;

        debug!("Saved style settings to {}", path.display());
        Ok(())
    }

    /// Load `path` if it exists, otherwise fall back to the presets.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if !path.exists() {
            warn!(
                "Style settings {} not found, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    pub fn validate(&self) -> SettingsResult<()> {
        for kind in [
            PatternKind::RadialDome,
            PatternKind::BarrelVault,
            PatternKind::DoubleBarrelVault,
        ] {
            self.style_for(kind)
                .validate()
                .map_err(|source| SettingsError::InvalidStyle {
                    section: kind.as_str().to_string(),
                    source,
                })?;
        }
        Ok(())
    }
}

/// Default location of the style settings file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}
