//! Preference-store keys for system-level skin choices.

use ignited_types::{DisplayType, Traits};

/// Display-type component of a preference key.
///
/// Standard and edge-to-edge share a slot.
pub fn display_type_bucket(display_type: DisplayType) -> &'static str {
    match display_type {
        DisplayType::Standard => "standard",
        DisplayType::EdgeToEdge => "standard",
        DisplayType::SplitView => "splitview",
    }
}

/// Key under which the preferred skin identifier for `category` is stored,
/// e.g. `nes-portrait-standard-controller`.
///
/// The device is not part of the key.
pub fn preferred_skin_key(category: &str, traits: &Traits) -> String {
    format!(
        "{category}-{}-{}-controller",
        traits.orientation.as_str(),
        display_type_bucket(traits.display_type)
    )
}
