//! Setting names. Each doubles as the store key unless noted.

pub const LAST_UPDATE_SHOWN: &str = "lastUpdateShown";
pub const THEME_COLOR: &str = "themeColor";
pub const GAME_ARTWORK_SIZE: &str = "gameArtworkSize";
pub const LOCAL_CONTROLLER_PLAYER_INDEX: &str = "localControllerPlayerIndex";
pub const TRANSLUCENT_CONTROLLER_SKIN_OPACITY: &str = "translucentControllerSkinOpacity";
pub const GAME_SHORTCUTS_MODE: &str = "gameShortcutsMode";
pub const GAME_SHORTCUT_IDENTIFIERS: &str = "gameShortcutIdentifiers";
pub const PREVIOUS_GAME_COLLECTION_IDENTIFIER: &str = "previousGameCollectionIdentifier";
pub const SYNCING_SERVICE: &str = "syncingService";
pub const SORT_SAVE_STATES_BY_OLDEST_FIRST: &str = "sortSaveStatesByOldestFirst";
pub const IS_PREVIEWS_ENABLED: &str = "isPreviewsEnabled";
pub const IS_ALT_JIT_ENABLED: &str = "isAltJITEnabled";
pub const AUTO_LOAD_SAVE: &str = "autoLoadSave";
pub const RESPECT_SILENT_MODE: &str = "respectSilentMode";
pub const PLAY_OVER_OTHER_MEDIA: &str = "playOverOtherMedia";
pub const GAME_VOLUME: &str = "gameVolume";
pub const IS_REWIND_ENABLED: &str = "isRewindEnabled";
pub const REWIND_TIMER_INTERVAL: &str = "rewindTimerInterval";
pub const IS_UNSAFE_FAST_FORWARD_SPEEDS_ENABLED: &str = "isUnsafeFastForwardSpeedsEnabled";
pub const IS_PROMPT_SPEED_ENABLED: &str = "isPromptSpeedEnabled";
pub const FAST_FORWARD_SPEED: &str = "fastForwardSpeed";
pub const IS_ALT_REPRESENTATIONS_ENABLED: &str = "isAltRepresentationsEnabled";
/// Store key behind [`IS_ALT_REPRESENTATIONS_ENABLED`].
pub const IS_USE_ALT_REPRESENTATIONS_ENABLED_KEY: &str = "isUseAltRepresentationsEnabled";
pub const IS_ALT_REPRESENTATIONS_AVAILABLE: &str = "isAltRepresentationsAvailable";
pub const IS_ALWAYS_SHOW_CONTROLLER_SKIN_ENABLED: &str = "isAlwaysShowControllerSkinEnabled";
pub const IS_DEBUG_MODE_ENABLED: &str = "isDebugModeEnabled";
pub const IS_SKIN_DEBUG_MODE_ENABLED: &str = "isSkinDebugModeEnabled";
pub const SKIN_DEBUG_DEVICE: &str = "skinDebugDevice";
pub const SCREENSHOT_SAVE_TO_FILES: &str = "screenshotSaveToFiles";
pub const SCREENSHOT_SAVE_TO_PHOTOS: &str = "screenshotSaveToPhotos";
pub const SCREENSHOT_IMAGE_SCALE: &str = "screenshotImageScale";
