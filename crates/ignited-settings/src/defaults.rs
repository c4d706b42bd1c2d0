//! Default values registered with the preference store at startup.

use std::collections::BTreeMap;

use ignited_store::PrefValue;
use ignited_types::System;

use crate::cores::{MELONDS_CORE, preferred_core_key};
use crate::names;
use crate::values::{ArtworkSize, GameShortcutsMode, RawEnum, ScreenshotScale, SkinDebugDevice, ThemeColor};

pub const LAST_UPDATE_SHOWN: i64 = 1;
pub const TRANSLUCENT_CONTROLLER_SKIN_OPACITY: f64 = 0.7;
pub const GAME_VOLUME: f64 = 1.0;
pub const REWIND_TIMER_INTERVAL: i64 = 15;
pub const FAST_FORWARD_SPEED: f64 = 4.0;

/// Every registered default, keyed by store key.
pub fn registered_defaults() -> BTreeMap<String, PrefValue> {
    let entries: Vec<(&str, PrefValue)> = vec![
        (names::LAST_UPDATE_SHOWN, LAST_UPDATE_SHOWN.into()),
        (names::THEME_COLOR, ThemeColor::default().raw().into()),
        (names::GAME_ARTWORK_SIZE, ArtworkSize::default().raw().into()),
        (
            names::TRANSLUCENT_CONTROLLER_SKIN_OPACITY,
            TRANSLUCENT_CONTROLLER_SKIN_OPACITY.into(),
        ),
        (names::GAME_SHORTCUTS_MODE, GameShortcutsMode::default().raw().into()),
        (names::SORT_SAVE_STATES_BY_OLDEST_FIRST, false.into()),
        (names::IS_PREVIEWS_ENABLED, true.into()),
        (names::IS_ALT_JIT_ENABLED, false.into()),
        (names::AUTO_LOAD_SAVE, true.into()),
        (names::RESPECT_SILENT_MODE, true.into()),
        (names::PLAY_OVER_OTHER_MEDIA, true.into()),
        (names::GAME_VOLUME, GAME_VOLUME.into()),
        (names::SCREENSHOT_SAVE_TO_FILES, true.into()),
        (names::SCREENSHOT_SAVE_TO_PHOTOS, false.into()),
        (
            names::SCREENSHOT_IMAGE_SCALE,
            ScreenshotScale::default().factor().into(),
        ),
        (names::IS_REWIND_ENABLED, false.into()),
        (names::REWIND_TIMER_INTERVAL, REWIND_TIMER_INTERVAL.into()),
        (names::IS_UNSAFE_FAST_FORWARD_SPEEDS_ENABLED, false.into()),
        (names::IS_PROMPT_SPEED_ENABLED, true.into()),
        (names::FAST_FORWARD_SPEED, FAST_FORWARD_SPEED.into()),
        (names::IS_USE_ALT_REPRESENTATIONS_ENABLED_KEY, false.into()),
        (names::IS_ALT_REPRESENTATIONS_AVAILABLE, false.into()),
        (names::IS_ALWAYS_SHOW_CONTROLLER_SKIN_ENABLED, false.into()),
        (names::IS_DEBUG_MODE_ENABLED, false.into()),
        (names::IS_SKIN_DEBUG_MODE_ENABLED, false.into()),
        (names::SKIN_DEBUG_DEVICE, SkinDebugDevice::default().raw().into()),
        (names::GAME_SHORTCUT_IDENTIFIERS, PrefValue::List(Vec::new())),
    ];

    let mut defaults: BTreeMap<String, PrefValue> = entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    defaults.insert(
        preferred_core_key(&System::Ds.game_type()),
        MELONDS_CORE.into(),
    );
    defaults
}
