//! CreaseKit Settings Crate
//!
//! Loads and saves per-pattern style presets. Callers resolve a
//! [`creasekit_core::StyleConfig`] here once and hand it to the generators.

pub mod config;
pub mod error;

pub use config::{
    default_config_path, ConfigFormat, StyleSettings, CONFIG_DIR_NAME, CONFIG_FILE_NAME,
};
pub use error::{SettingsError, SettingsResult};
