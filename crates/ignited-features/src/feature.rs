//! Feature declarations.

use crate::option::OptionSpec;

/// A user-toggleable feature and its options.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    /// Store key of the enabled flag; option keys are prefixed with it.
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub options: Vec<OptionSpec>,
}

impl Feature {
    pub fn new(key: &'static str, name: &'static str, description: &'static str, options: Vec<OptionSpec>) -> Self {
        Self {
            key,
            name,
            description,
            options,
        }
    }

    pub fn option(&self, key: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|o| o.key == key)
    }

    /// Store key of one of this feature's options.
    pub fn option_store_key(&self, option: &OptionSpec) -> String {
        format!("{}.{}", self.key, option.key)
    }
}
