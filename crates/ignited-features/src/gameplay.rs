//! Gameplay features: game screenshots and save-state rewind.

use std::fmt;

use ignited_store::PrefValue;
use ignited_types::error::Result;

use crate::feature::Feature;
use crate::option::{OptionSpec, SliderRange};
use crate::state::FeatureStore;

pub const GAME_SCREENSHOTS: &str = "gameScreenshots";
pub const SAVE_STATE_REWIND: &str = "saveStateRewind";

/// Export scale for screenshots. No size means the original resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenshotSize {
    X5,
    X4,
    X3,
    X2,
}

impl ScreenshotSize {
    pub const ALL: [Self; 4] = [Self::X5, Self::X4, Self::X3, Self::X2];

    pub fn factor(self) -> i64 {
        match self {
            Self::X5 => 5,
            Self::X4 => 4,
            Self::X3 => 3,
            Self::X2 => 2,
        }
    }

    /// Accepts integer or float factors; anything else is `None`.
    pub fn from_value(value: &PrefValue) -> Option<Self> {
        let factor = value.as_float()?;
        Self::ALL.into_iter().find(|s| s.factor() as f64 == factor)
    }
}

impl fmt::Display for ScreenshotSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x Size", self.factor())
    }
}

pub fn game_screenshots_feature() -> Feature {
    Feature::new(
        GAME_SCREENSHOTS,
        "Game Screenshots",
        "Enable to take screenshots of the game screen.",
        vec![
            OptionSpec::toggle(
                "saveToFiles",
                "Save to Files",
                "Save the screenshot to the app's directory in Files.",
                true,
            ),
            OptionSpec::toggle(
                "saveToPhotos",
                "Save to Photos",
                "Save the screenshot to the Photo Library.",
                false,
            ),
            OptionSpec::optional_picker(
                "size",
                "Image Size",
                "Choose the size of screenshots. This only increases the export size, it does not increase the quality.",
                ScreenshotSize::ALL
                    .into_iter()
                    .map(|s| PrefValue::Int(s.factor()))
                    .collect(),
                "Original Size",
            ),
            OptionSpec::restore_defaults("resetGameScreenshots"),
        ],
    )
}

pub fn save_state_rewind_feature() -> Feature {
    Feature::new(
        SAVE_STATE_REWIND,
        "Rewind",
        "Enable to periodically save the game state so you can rewind to it.",
        vec![
            OptionSpec::slider(
                "interval",
                "Interval",
                "Change how often the game state should be saved.",
                15.0,
                SliderRange::new(3.0, 15.0, 1.0),
            ),
            OptionSpec::toggle(
                "keepStates",
                "Keep Save States",
                "Enable to keep save states even after quitting a game. This lets you use rewind as a secondary auto-save method. Disable to use rewind purely as a convenience feature. States will be deleted when quitting a game.",
                true,
            ),
            OptionSpec::restore_defaults("resetSaveStateRewind"),
        ],
    )
}

/// Effective screenshot options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameScreenshotOptions {
    pub save_to_files: bool,
    pub save_to_photos: bool,
    pub size: Option<ScreenshotSize>,
}

impl Default for GameScreenshotOptions {
    fn default() -> Self {
        Self {
            save_to_files: true,
            save_to_photos: false,
            size: None,
        }
    }
}

impl GameScreenshotOptions {
    pub fn load(features: &FeatureStore<'_>, feature: &Feature) -> Result<Self> {
        let defaults = Self::default();
        let bool_option = |key: &str, default: bool| -> Result<bool> {
            Ok(features
                .option_value(feature, key)?
                .and_then(|v| v.as_bool())
                .unwrap_or(default))
        };
        Ok(Self {
            save_to_files: bool_option("saveToFiles", defaults.save_to_files)?,
            save_to_photos: bool_option("saveToPhotos", defaults.save_to_photos)?,
            size: features
                .option_value(feature, "size")?
                .as_ref()
                .and_then(ScreenshotSize::from_value),
        })
    }
}

/// Effective rewind options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaveStateRewindOptions {
    /// Seconds between rewind states.
    pub interval: f64,
    pub keep_states: bool,
}

impl Default for SaveStateRewindOptions {
    fn default() -> Self {
        Self {
            interval: 15.0,
            keep_states: true,
        }
    }
}

impl SaveStateRewindOptions {
    pub fn load(features: &FeatureStore<'_>, feature: &Feature) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            interval: features
                .option_value(feature, "interval")?
                .and_then(|v| v.as_float())
                .unwrap_or(defaults.interval),
            keep_states: features
                .option_value(feature, "keepStates")?
                .and_then(|v| v.as_bool())
                .unwrap_or(defaults.keep_states),
        })
    }
}
