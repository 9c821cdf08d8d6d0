//! Settings parser for ~/.config/wares/config.toml

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use wares_catalog::DEFAULT_ENDPOINT;
use wares_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "wares";

/// Color scheme selection. `Auto` detects light/dark from the terminal
/// environment; the choice only affects colors, never behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Auto,
    Dark,
    Light,
}

impl FromStr for ThemeMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(ThemeMode::Auto),
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            other => Err(Error::config(format!(
                "unknown theme {other:?} (expected auto, dark, or light)"
            ))),
        }
    }
}

/// Catalog connection settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Endpoint for the product list GET
    pub endpoint: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    pub theme: ThemeMode,
}

/// Top-level settings loaded from the config file
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub catalog: CatalogSettings,
    pub ui: UiSettings,
}

/// Load settings from the user config directory.
///
/// Missing file means defaults. A present-but-broken file logs a warning
/// and falls back to defaults rather than refusing to start.
pub fn load_settings() -> Settings {
    match config_file_path() {
        Some(path) => load_settings_from(&path),
        None => Settings::default(),
    }
}

/// Load settings from an explicit path (used by tests)
pub fn load_settings_from(path: &Path) -> Settings {
    if !path.exists() {
        debug!("no config file at {}, using defaults", path.display());
        return Settings::default();
    }

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            warn!("failed to read config {}: {err}", path.display());
            return Settings::default();
        }
    };

    match toml::from_str(&contents) {
        Ok(settings) => {
            info!("loaded config from {}", path.display());
            settings
        }
        Err(err) => {
            warn!("invalid config {}: {err}", path.display());
            Settings::default()
        }
    }
}

fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}
