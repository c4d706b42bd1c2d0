//! The built-in feature containers.

use ignited_store::PrefValue;

use crate::container::FeatureContainer;
use crate::feature::Feature;
use crate::gameplay::{game_screenshots_feature, save_state_rewind_feature};
use crate::option::{OptionSpec, SliderRange};

macro_rules! container {
    ($name:ident, $title:literal) => {
        #[derive(Debug, Clone)]
        pub struct $name {
            features: Vec<Feature>,
        }

        impl FeatureContainer for $name {
            fn name(&self) -> &'static str {
                $title
            }

            fn features(&self) -> &[Feature] {
                &self.features
            }
        }
    };
}

container!(GbcFeatures, "Game Boy Color");
container!(N64Features, "Nintendo 64");
container!(GameplayFeatures, "Gameplay");
container!(UserInterfaceFeatures, "User Interface");

fn strings(values: &[&str]) -> Vec<PrefValue> {
    values.iter().map(|v| PrefValue::from(*v)).collect()
}

impl Default for GbcFeatures {
    fn default() -> Self {
        Self {
            features: vec![Feature::new(
                "palettes",
                "Game Boy Palettes",
                "Enable to change the color palette used for GB games.",
                vec![
                    OptionSpec::picker(
                        "palette",
                        "Palette",
                        "Choose the color palette used for GB games.",
                        "studio".into(),
                        strings(&["studio", "pocket", "light", "darkGreen", "grayscale"]),
                    ),
                    OptionSpec::restore_defaults("resetPalettes"),
                ],
            )],
        }
    }
}

impl Default for N64Features {
    fn default() -> Self {
        Self {
            features: vec![Feature::new(
                "n64graphics",
                "Graphics",
                "Enable to customize the graphics options.",
                vec![
                    OptionSpec::picker(
                        "graphicsAPI",
                        "Graphics API",
                        "Choose the rendering API used for N64 games.",
                        "openGLES2".into(),
                        strings(&["openGLES2", "openGLES3"]),
                    ),
                    OptionSpec::picker(
                        "resolution",
                        "Resolution",
                        "Choose the internal rendering resolution.",
                        "1x".into(),
                        strings(&["1x", "2x", "4x"]),
                    ),
                    OptionSpec::restore_defaults("resetN64Graphics"),
                ],
            )],
        }
    }
}

impl Default for GameplayFeatures {
    fn default() -> Self {
        Self {
            features: vec![game_screenshots_feature(), save_state_rewind_feature()],
        }
    }
}

impl GameplayFeatures {
    pub fn game_screenshots(&self) -> &Feature {
        &self.features[0]
    }

    pub fn save_state_rewind(&self) -> &Feature {
        &self.features[1]
    }
}

impl Default for UserInterfaceFeatures {
    fn default() -> Self {
        Self {
            features: vec![
                Feature::new(
                    "toastNotifications",
                    "Toast Notifications",
                    "Show brief notifications when saving, loading and changing settings in game.",
                    vec![
                        OptionSpec::slider(
                            "duration",
                            "Duration",
                            "How long toasts stay on screen, in seconds.",
                            1.5,
                            SliderRange::new(1.0, 5.0, 0.5),
                        ),
                        OptionSpec::restore_defaults("resetToastNotifications"),
                    ],
                ),
                Feature::new(
                    "statusBar",
                    "Status Bar",
                    "Show the status bar while playing.",
                    vec![OptionSpec::toggle(
                        "useDarkStyle",
                        "Dark Style",
                        "Use dark status bar text.",
                        false,
                    )],
                ),
                Feature::new(
                    "randomGame",
                    "Random Game",
                    "Add a button to start a random game from the current collection.",
                    Vec::new(),
                ),
                Feature::new(
                    "darkMode",
                    "Dark Mode",
                    "Always use the dark appearance.",
                    Vec::new(),
                ),
            ],
        }
    }
}
