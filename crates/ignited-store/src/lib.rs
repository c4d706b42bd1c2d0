//! Key-value preference store for Ignited.
//!
//! Consumers receive a [`PreferenceStore`] explicitly instead of reaching for
//! a process-wide defaults singleton. Two implementations ship here: an
//! in-memory store for tests and ephemeral sessions, and a TOML-file store
//! for persistence across restarts. Change notification is a separate
//! [`EventBus`] so the store stays a plain get/set interface.

pub mod events;
pub mod file;
pub mod memory;
pub mod value;

pub use events::{EventBus, SettingsEvent};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use value::PrefValue;

use std::collections::BTreeMap;

use ignited_types::error::Result;

/// A string-keyed store of primitive preference values.
///
/// Registered defaults answer reads for keys without an explicit value but
/// are never persisted.
pub trait PreferenceStore: Send + Sync {
    /// Effective value for `key`: the explicit value, else the registered
    /// default, else `None`.
    fn get(&self, key: &str) -> Result<Option<PrefValue>>;

    /// Store `value` under `key`. `None` removes the explicit value.
    fn set(&self, key: &str, value: Option<PrefValue>) -> Result<()>;

    /// Compare-before-write. Writes only if the effective value would change
    /// and returns whether it did. The comparison and write happen under one
    /// lock, so concurrent callers for the same key are serialized.
    fn set_if_changed(&self, key: &str, value: Option<PrefValue>) -> Result<bool>;

    /// Merge `defaults` into the registered defaults.
    fn register_defaults(&self, defaults: BTreeMap<String, PrefValue>) -> Result<()>;

    fn get_string(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get(key)?.and_then(|v| v.as_str().map(str::to_string)))
    }

    fn get_bool(&self, key: &str) -> Result<Option<bool>> {
        Ok(self.get(key)?.and_then(|v| v.as_bool()))
    }

    fn get_int(&self, key: &str) -> Result<Option<i64>> {
        Ok(self.get(key)?.and_then(|v| v.as_int()))
    }

    fn get_float(&self, key: &str) -> Result<Option<f64>> {
        Ok(self.get(key)?.and_then(|v| v.as_float()))
    }

    fn get_list(&self, key: &str) -> Result<Option<Vec<String>>> {
        Ok(self.get(key)?.and_then(|v| v.as_list().map(<[String]>::to_vec)))
    }
}
