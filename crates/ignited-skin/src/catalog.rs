//! Skin catalog: the queryable collection of installed controller skins.

use std::path::Path;

use serde::Deserialize;

use ignited_types::GameType;
use ignited_types::error::{IgnitedError, Result};

use crate::skin::ControllerSkin;

/// Repository of controller skins.
///
/// Lookups return `Ok(None)` for "not found"; `Err` is reserved for the
/// backing storage failing.
pub trait SkinCatalog: Send + Sync {
    /// First skin of `game_type` with `identifier`.
    fn find_skin(&self, game_type: &GameType, identifier: &str) -> Result<Option<ControllerSkin>>;

    /// First skin of `game_type` flagged as standard.
    fn find_standard_skin(&self, game_type: &GameType) -> Result<Option<ControllerSkin>>;

    /// Every skin of `game_type`, in catalog order.
    fn skins(&self, game_type: &GameType) -> Result<Vec<ControllerSkin>>;
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    skins: Vec<ControllerSkin>,
}

/// A skin catalog held in memory, loadable from a TOML `[[skins]]` list.
#[derive(Debug, Default, Clone)]
pub struct MemoryCatalog {
    skins: Vec<ControllerSkin>,
}

impl MemoryCatalog {
    pub fn new(skins: Vec<ControllerSkin>) -> Self {
        Self { skins }
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(text)?;
        Ok(Self::new(file.skins))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            IgnitedError::Catalog(format!("cannot read '{}': {e}", path.display()))
        })?;
        let catalog = Self::from_toml(&text)?;
        log::info!(
            "Loaded {} controller skins from '{}'",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.skins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skins.is_empty()
    }
}

impl SkinCatalog for MemoryCatalog {
    fn find_skin(&self, game_type: &GameType, identifier: &str) -> Result<Option<ControllerSkin>> {
        Ok(self
            .skins
            .iter()
            .find(|s| &s.game_type == game_type && s.identifier == identifier)
            .cloned())
    }

    fn find_standard_skin(&self, game_type: &GameType) -> Result<Option<ControllerSkin>> {
        Ok(self
            .skins
            .iter()
            .find(|s| &s.game_type == game_type && s.is_standard)
            .cloned())
    }

    fn skins(&self, game_type: &GameType) -> Result<Vec<ControllerSkin>> {
        Ok(self
            .skins
            .iter()
            .filter(|s| &s.game_type == game_type)
            .cloned()
            .collect())
    }
}
