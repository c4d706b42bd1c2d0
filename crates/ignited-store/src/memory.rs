//! In-memory preference store.
//!
//! Useful for unit tests and ephemeral sessions. Explicit values and
//! registered defaults live in two `BTreeMap`s behind a single `RwLock`.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use ignited_types::error::{IgnitedError, Result};

use crate::{PrefValue, PreferenceStore};

/// Explicit values plus registered defaults. Shared by the memory and file
/// stores.
#[derive(Debug, Default, Clone)]
pub(crate) struct PrefTable {
    pub(crate) values: BTreeMap<String, PrefValue>,
    defaults: BTreeMap<String, PrefValue>,
}

impl PrefTable {
    pub(crate) fn with_values(values: BTreeMap<String, PrefValue>) -> Self {
        Self {
            values,
            defaults: BTreeMap::new(),
        }
    }

    pub(crate) fn effective(&self, key: &str) -> Option<&PrefValue> {
        self.values.get(key).or_else(|| self.defaults.get(key))
    }

    pub(crate) fn apply(&mut self, key: &str, value: Option<PrefValue>) {
        match value {
            Some(v) => {
                self.values.insert(key.to_string(), v);
            },
            None => {
                self.values.remove(key);
            },
        }
    }

    /// Apply `value` only if the effective value changes. Numbers compare by
    /// value. Returns whether the table was modified.
    pub(crate) fn apply_if_changed(&mut self, key: &str, value: Option<PrefValue>) -> bool {
        let after = value.as_ref().or_else(|| self.defaults.get(key));
        let unchanged = match (self.effective(key), after) {
            (Some(before), Some(after)) => before.same_value(after),
            (None, None) => true,
            _ => false,
        };
        if unchanged {
            return false;
        }
        self.apply(key, value);
        true
    }

    pub(crate) fn register_defaults(&mut self, defaults: BTreeMap<String, PrefValue>) {
        self.defaults.extend(defaults);
    }
}

pub(crate) fn read_lock(lock: &RwLock<PrefTable>) -> Result<RwLockReadGuard<'_, PrefTable>> {
    lock.read()
        .map_err(|_| IgnitedError::Store("preference lock poisoned".into()))
}

pub(crate) fn write_lock(lock: &RwLock<PrefTable>) -> Result<RwLockWriteGuard<'_, PrefTable>> {
    lock.write()
        .map_err(|_| IgnitedError::Store("preference lock poisoned".into()))
}

/// A fully in-memory preference store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    table: RwLock<PrefTable>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with explicit values.
    pub fn with_values(values: BTreeMap<String, PrefValue>) -> Self {
        Self {
            table: RwLock::new(PrefTable::with_values(values)),
        }
    }

    /// Snapshot of the explicit (non-default) values.
    pub fn explicit_values(&self) -> Result<BTreeMap<String, PrefValue>> {
        Ok(read_lock(&self.table)?.values.clone())
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<PrefValue>> {
        Ok(read_lock(&self.table)?.effective(key).cloned())
    }

    fn set(&self, key: &str, value: Option<PrefValue>) -> Result<()> {
        write_lock(&self.table)?.apply(key, value);
        Ok(())
    }

    fn set_if_changed(&self, key: &str, value: Option<PrefValue>) -> Result<bool> {
        Ok(write_lock(&self.table)?.apply_if_changed(key, value))
    }

    fn register_defaults(&self, defaults: BTreeMap<String, PrefValue>) -> Result<()> {
        write_lock(&self.table)?.register_defaults(defaults);
        Ok(())
    }
}
