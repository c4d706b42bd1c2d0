//! Feature option declarations and value validation.

use ignited_store::PrefValue;
use ignited_types::error::{IgnitedError, Result};

/// Inclusive numeric range with a step, for slider options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderRange {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Whether `value` lies in the range and on a step boundary.
    pub fn contains(&self, value: f64) -> bool {
        if !(self.min..=self.max).contains(&value) {
            return false;
        }
        if self.step <= 0.0 {
            return true;
        }
        let steps = (value - self.min) / self.step;
        (steps - steps.round()).abs() < 1e-9
    }
}

/// Declaration of one option of a feature.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionSpec {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Value used while nothing is stored. `None` means the option is unset
    /// by default.
    pub default: Option<PrefValue>,
    /// Allowed values for picker options.
    pub values: Option<Vec<PrefValue>>,
    pub range: Option<SliderRange>,
    /// Label for the unset state of a picker.
    pub nil_description: Option<&'static str>,
    /// Setting this option to `true` resets every option of its feature.
    pub restores_defaults: bool,
}

impl OptionSpec {
    fn base(key: &'static str, name: &'static str, description: &'static str) -> Self {
        Self {
            key,
            name,
            description,
            default: None,
            values: None,
            range: None,
            nil_description: None,
            restores_defaults: false,
        }
    }

    pub fn toggle(key: &'static str, name: &'static str, description: &'static str, default: bool) -> Self {
        Self {
            default: Some(default.into()),
            ..Self::base(key, name, description)
        }
    }

    pub fn picker(
        key: &'static str,
        name: &'static str,
        description: &'static str,
        default: PrefValue,
        values: Vec<PrefValue>,
    ) -> Self {
        Self {
            default: Some(default),
            values: Some(values),
            ..Self::base(key, name, description)
        }
    }

    /// A picker whose default is "no value", labelled `nil_description`.
    pub fn optional_picker(
        key: &'static str,
        name: &'static str,
        description: &'static str,
        values: Vec<PrefValue>,
        nil_description: &'static str,
    ) -> Self {
        Self {
            values: Some(values),
            nil_description: Some(nil_description),
            ..Self::base(key, name, description)
        }
    }

    pub fn slider(
        key: &'static str,
        name: &'static str,
        description: &'static str,
        default: f64,
        range: SliderRange,
    ) -> Self {
        Self {
            default: Some(default.into()),
            range: Some(range),
            ..Self::base(key, name, description)
        }
    }

    pub fn restore_defaults(key: &'static str) -> Self {
        Self {
            default: Some(false.into()),
            restores_defaults: true,
            ..Self::base(
                key,
                "Restore Defaults",
                "Reset all options to their default values.",
            )
        }
    }

    /// Check that `value` may be stored for this option. `None` (clear) is
    /// always allowed.
    pub fn validate(&self, value: Option<&PrefValue>) -> Result<()> {
        let Some(value) = value else {
            return Ok(());
        };

        if let Some(values) = &self.values {
            if !values.contains(value) {
                return Err(IgnitedError::Feature(format!(
                    "{value} is not an allowed value for '{}'",
                    self.key
                )));
            }
            return Ok(());
        }

        if let Some(range) = &self.range {
            let number = value.as_float().ok_or_else(|| {
                IgnitedError::Feature(format!("'{}' expects a number, got {value}", self.key))
            })?;
            if !range.contains(number) {
                return Err(IgnitedError::Feature(format!(
                    "{number} is outside {}..={} (step {}) for '{}'",
                    range.min, range.max, range.step, self.key
                )));
            }
            return Ok(());
        }

        match &self.default {
            Some(default) if std::mem::discriminant(default) != std::mem::discriminant(value) => {
                Err(IgnitedError::Feature(format!(
                    "'{}' expects a value like {default}, got {value}",
                    self.key
                )))
            },
            _ => Ok(()),
        }
    }
}
