//! TOML-file preference store.
//!
//! The whole explicit-value table is rewritten after every effective
//! change. Registered defaults stay in memory only.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use ignited_types::error::Result;

use crate::memory::{PrefTable, read_lock, write_lock};
use crate::{PrefValue, PreferenceStore};

/// A preference store persisted as a flat TOML table.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    table: RwLock<PrefTable>,
}

impl FileStore {
    /// Open the store at `path`. A missing file starts an empty store; the
    /// file is created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = if path.is_file() {
            let text = std::fs::read_to_string(&path)?;
            toml::from_str::<BTreeMap<String, PrefValue>>(&text)?
        } else {
            log::debug!("Preference file '{}' does not exist yet", path.display());
            BTreeMap::new()
        };
        log::info!(
            "Opened preference store '{}' ({} values)",
            path.display(),
            values.len()
        );
        Ok(Self {
            path,
            table: RwLock::new(PrefTable::with_values(values)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, table: &PrefTable) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let text = toml::to_string(&table.values)?;
        std::fs::write(&self.path, text)?;
        Ok(())
    }

    /// Persist `table`; on failure put `key` back to `previous` so memory
    /// never runs ahead of the file.
    fn persist_or_restore(&self, table: &mut PrefTable, key: &str, previous: Option<PrefValue>) -> Result<()> {
        let result = self.persist(table);
        if let Err(e) = &result {
            log::warn!("Failed to write '{}', reverting '{key}': {e}", self.path.display());
            table.apply(key, previous);
        }
        result
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<PrefValue>> {
        Ok(read_lock(&self.table)?.effective(key).cloned())
    }

    fn set(&self, key: &str, value: Option<PrefValue>) -> Result<()> {
        let mut table = write_lock(&self.table)?;
        let previous = table.values.get(key).cloned();
        table.apply(key, value);
        self.persist_or_restore(&mut table, key, previous)
    }

    fn set_if_changed(&self, key: &str, value: Option<PrefValue>) -> Result<bool> {
        let mut table = write_lock(&self.table)?;
        let previous = table.values.get(key).cloned();
        if !table.apply_if_changed(key, value) {
            return Ok(false);
        }
        self.persist_or_restore(&mut table, key, previous)?;
        Ok(true)
    }

    fn register_defaults(&self, defaults: BTreeMap<String, PrefValue>) -> Result<()> {
        write_lock(&self.table)?.register_defaults(defaults);
        Ok(())
    }
}
