//! Controller skin records and trait support checks.

use serde::{Deserialize, Serialize};

use ignited_types::{Device, DisplayType, GameType, Orientation, Traits};

/// One device/display/orientation combination a skin provides a layout for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Representation {
    pub device: Device,
    pub display_type: DisplayType,
    pub orientation: Orientation,
    /// Alternate layout, only used when alternate representations are
    /// enabled.
    #[serde(default)]
    pub alt: bool,
}

impl Representation {
    fn matches(&self, traits: &Traits) -> bool {
        self.device == traits.device
            && self.display_type == traits.display_type
            && self.orientation == traits.orientation
    }
}

/// A stored controller skin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerSkin {
    pub identifier: String,
    pub name: String,
    pub game_type: GameType,
    /// The built-in skin used when nothing else is chosen.
    #[serde(default)]
    pub is_standard: bool,
    #[serde(default)]
    pub representations: Vec<Representation>,
}

impl ControllerSkin {
    /// Whether the skin has a layout for exactly `traits`.
    ///
    /// With `alt` enabled both alternate and regular representations count;
    /// otherwise only regular ones do.
    pub fn supports(&self, traits: &Traits, alt: bool) -> bool {
        self.representations
            .iter()
            .any(|r| r.matches(traits) && (alt || !r.alt))
    }

    /// The traits this skin would actually be drawn with for `traits`.
    ///
    /// On iPhone, standard and edge-to-edge layouts stand in for each other
    /// when the exact display type is missing. Returns `None` if neither
    /// matches.
    pub fn supported_traits(&self, traits: &Traits, alt: bool) -> Option<Traits> {
        if self.supports(traits, alt) {
            return Some(*traits);
        }
        if traits.device != Device::Iphone {
            return None;
        }
        let fallback = match traits.display_type {
            DisplayType::EdgeToEdge => DisplayType::Standard,
            DisplayType::Standard => DisplayType::EdgeToEdge,
            DisplayType::SplitView => return None,
        };
        let fallback = Traits {
            display_type: fallback,
            ..*traits
        };
        self.supports(&fallback, alt).then_some(fallback)
    }
}
