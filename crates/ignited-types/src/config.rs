//! Application configuration loaded from `ignited.toml`.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;

/// Locations of the on-disk data files and the default log filter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Persistent preference store (flat TOML table).
    pub store_path: PathBuf,
    /// Controller-skin catalog (`[[skins]]`).
    pub catalog_path: PathBuf,
    /// Game library (`[[games]]`).
    pub library_path: PathBuf,
    /// Patron list (JSON array).
    pub patrons_path: PathBuf,
    /// `env_logger` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("data/preferences.toml"),
            catalog_path: PathBuf::from("data/skins.toml"),
            library_path: PathBuf::from("data/games.toml"),
            patrons_path: PathBuf::from("data/patrons.json"),
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load from a TOML file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            log::warn!(
                "Config '{}' not found -- using defaults",
                path.display()
            );
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&text)?;
        config.resolve_relative_to(path.parent().unwrap_or(Path::new(".")));
        Ok(config)
    }

    /// Make relative data paths relative to the config file's directory.
    fn resolve_relative_to(&mut self, base: &Path) {
        for path in [
            &mut self.store_path,
            &mut self.catalog_path,
            &mut self.library_path,
            &mut self.patrons_path,
        ] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}
