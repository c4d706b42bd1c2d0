//! Reading and writing feature state in the preference store.

use ignited_store::{EventBus, PrefValue, PreferenceStore, SettingsEvent};
use ignited_types::error::{IgnitedError, Result};

use crate::feature::Feature;

/// Feature flags and option values, backed by a preference store.
///
/// The enabled flag lives under the feature key and each option under
/// `<feature>.<option>`. Every effective change publishes
/// [`SettingsEvent::Feature`] with the feature key.
pub struct FeatureStore<'a> {
    store: &'a dyn PreferenceStore,
    events: &'a EventBus,
}

impl<'a> FeatureStore<'a> {
    pub fn new(store: &'a dyn PreferenceStore, events: &'a EventBus) -> Self {
        Self { store, events }
    }

    /// Whether `feature` is switched on. Unreadable state counts as off.
    pub fn is_enabled(&self, feature: &Feature) -> bool {
        match self.store.get_bool(feature.key) {
            Ok(enabled) => enabled.unwrap_or(false),
            Err(e) => {
                log::warn!("Reading feature '{}' failed: {e}", feature.key);
                false
            },
        }
    }

    pub fn set_enabled(&self, feature: &Feature, enabled: bool) -> Result<bool> {
        let changed = self.store.set_if_changed(feature.key, Some(enabled.into()))?;
        if changed {
            log::debug!("Feature '{}' enabled: {enabled}", feature.key);
            self.notify(feature);
        }
        Ok(changed)
    }

    /// Stored value of an option, else its declared default.
    pub fn option_value(&self, feature: &Feature, option_key: &str) -> Result<Option<PrefValue>> {
        let option = feature.option(option_key).ok_or_else(|| unknown_option(feature, option_key))?;
        let stored = self.store.get(&feature.option_store_key(option))?;
        Ok(stored.or_else(|| option.default.clone()))
    }

    /// Store `value` for an option after validating it. `None` clears the
    /// stored value so the default applies again.
    ///
    /// Setting a restore-defaults option to `true` instead clears every
    /// option of the feature; the restore option itself stays `false`.
    pub fn set_option(&self, feature: &Feature, option_key: &str, value: Option<PrefValue>) -> Result<bool> {
        let option = feature.option(option_key).ok_or_else(|| unknown_option(feature, option_key))?;
        option.validate(value.as_ref())?;

        if option.restores_defaults {
            if value.as_ref().and_then(PrefValue::as_bool) == Some(true) {
                return self.reset_options(feature);
            }
            return Ok(false);
        }

        let changed = self.store.set_if_changed(&feature.option_store_key(option), value)?;
        if changed {
            log::debug!("Feature option '{}.{option_key}' changed", feature.key);
            self.notify(feature);
        }
        Ok(changed)
    }

    /// Clear every stored option of `feature`. Publishes once if anything
    /// changed.
    pub fn reset_options(&self, feature: &Feature) -> Result<bool> {
        let mut changed = false;
        for option in &feature.options {
            changed |= self.store.set_if_changed(&feature.option_store_key(option), None)?;
        }
        if changed {
            log::debug!("Feature '{}' options reset", feature.key);
            self.notify(feature);
        }
        Ok(changed)
    }

    fn notify(&self, feature: &Feature) {
        self.events.publish(SettingsEvent::Feature {
            key: feature.key.to_string(),
        });
    }
}

fn unknown_option(feature: &Feature, option_key: &str) -> IgnitedError {
    IgnitedError::Feature(format!("'{}' has no option '{option_key}'", feature.key))
}
