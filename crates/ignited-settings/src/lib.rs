//! Typed user settings for Ignited.
//!
//! [`Settings`] wraps an injected [`PreferenceStore`] and publishes a
//! [`SettingsEvent`] on an [`EventBus`] when a setting changes. Reads never
//! fail: a store error is logged and the default is returned.

pub mod cores;
pub mod defaults;
pub mod names;
pub mod values;

pub use values::{
    ArtworkSize, GameShortcutsMode, RawEnum, ScreenshotScale, SkinDebugDevice, SyncingService,
    ThemeColor,
};

use std::sync::{Arc, Mutex};

use ignited_skin::{ControllerSkin, Game, GameLibrary, PreferredSkinResolver, SkinCatalog};
use ignited_store::{EventBus, PrefValue, PreferenceStore, SettingsEvent};
use ignited_types::error::{IgnitedError, Result};
use ignited_types::{GameType, SkinScope, System, Traits};

use crate::cores::{cores_for, preferred_core_key};

/// Log a failed read and treat it as "no value".
fn logged<T>(key: &str, result: Result<Option<T>>) -> Option<T> {
    result.unwrap_or_else(|e| {
        log::warn!("Failed to read setting '{key}': {e}");
        None
    })
}

/// User settings backed by an injected store.
pub struct Settings {
    store: Arc<dyn PreferenceStore>,
    catalog: Arc<dyn SkinCatalog>,
    library: Arc<dyn GameLibrary>,
    events: Arc<EventBus>,
    /// Process-local; never persisted.
    local_controller_player_index: Mutex<Option<u8>>,
}

impl Settings {
    /// Wrap `store`, registering every default.
    pub fn new(
        store: Arc<dyn PreferenceStore>,
        catalog: Arc<dyn SkinCatalog>,
        library: Arc<dyn GameLibrary>,
        events: Arc<EventBus>,
    ) -> Result<Self> {
        store.register_defaults(defaults::registered_defaults())?;
        Ok(Self {
            store,
            catalog,
            library,
            events,
            local_controller_player_index: Mutex::new(Some(0)),
        })
    }

    pub fn store(&self) -> &Arc<dyn PreferenceStore> {
        &self.store
    }

    pub fn events(&self) -> &Arc<EventBus> {
        &self.events
    }

    // -- helpers --

    fn read_bool(&self, key: &str, default: bool) -> bool {
        logged(key, self.store.get_bool(key)).unwrap_or(default)
    }

    fn read_int(&self, key: &str, default: i64) -> i64 {
        logged(key, self.store.get_int(key)).unwrap_or(default)
    }

    fn read_float(&self, key: &str, default: f64) -> f64 {
        logged(key, self.store.get_float(key)).unwrap_or(default)
    }

    fn read_string(&self, key: &str) -> Option<String> {
        logged(key, self.store.get_string(key))
    }

    fn read_enum<T: RawEnum + Default>(&self, key: &str) -> T {
        self.read_string(key)
            .and_then(|raw| T::from_raw(&raw))
            .unwrap_or_default()
    }

    fn write_quietly(&self, key: &str, value: Option<PrefValue>) -> Result<()> {
        self.store.set(key, value)
    }

    fn write_and_notify(&self, key: &str, name: &'static str, value: Option<PrefValue>) -> Result<()> {
        self.store.set(key, value)?;
        self.events.publish(SettingsEvent::Changed { name });
        Ok(())
    }

    fn write_if_changed(&self, key: &str, name: &'static str, value: Option<PrefValue>) -> Result<bool> {
        let changed = self.store.set_if_changed(key, value)?;
        if changed {
            self.events.publish(SettingsEvent::Changed { name });
        }
        Ok(changed)
    }

    // -- update --

    pub fn last_update_shown(&self) -> i64 {
        self.read_int(names::LAST_UPDATE_SHOWN, defaults::LAST_UPDATE_SHOWN)
    }

    pub fn set_last_update_shown(&self, value: i64) -> Result<()> {
        self.write_quietly(names::LAST_UPDATE_SHOWN, Some(value.into()))
    }

    // -- theme and artwork --

    pub fn theme_color(&self) -> ThemeColor {
        self.read_enum(names::THEME_COLOR)
    }

    pub fn set_theme_color(&self, value: ThemeColor) -> Result<()> {
        self.write_and_notify(names::THEME_COLOR, names::THEME_COLOR, Some(value.raw().into()))
    }

    pub fn game_artwork_size(&self) -> ArtworkSize {
        self.read_enum(names::GAME_ARTWORK_SIZE)
    }

    pub fn set_game_artwork_size(&self, value: ArtworkSize) -> Result<()> {
        self.write_and_notify(
            names::GAME_ARTWORK_SIZE,
            names::GAME_ARTWORK_SIZE,
            Some(value.raw().into()),
        )
    }

    // -- controllers --

    pub fn local_controller_player_index(&self) -> Option<u8> {
        *self
            .local_controller_player_index
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    pub fn set_local_controller_player_index(&self, value: Option<u8>) {
        let mut index = self
            .local_controller_player_index
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if *index == value {
            return;
        }
        *index = value;
        drop(index);
        self.events.publish(SettingsEvent::Changed {
            name: names::LOCAL_CONTROLLER_PLAYER_INDEX,
        });
    }

    pub fn translucent_controller_skin_opacity(&self) -> f64 {
        self.read_float(
            names::TRANSLUCENT_CONTROLLER_SKIN_OPACITY,
            defaults::TRANSLUCENT_CONTROLLER_SKIN_OPACITY,
        )
    }

    pub fn set_translucent_controller_skin_opacity(&self, value: f64) -> Result<bool> {
        self.write_if_changed(
            names::TRANSLUCENT_CONTROLLER_SKIN_OPACITY,
            names::TRANSLUCENT_CONTROLLER_SKIN_OPACITY,
            Some(value.into()),
        )
    }

    // -- library --

    pub fn previous_game_collection_identifier(&self) -> Option<String> {
        self.read_string(names::PREVIOUS_GAME_COLLECTION_IDENTIFIER)
    }

    pub fn set_previous_game_collection_identifier(&self, value: Option<&str>) -> Result<()> {
        self.write_quietly(
            names::PREVIOUS_GAME_COLLECTION_IDENTIFIER,
            value.map(PrefValue::from),
        )
    }

    pub fn game_shortcuts_mode(&self) -> GameShortcutsMode {
        self.read_enum(names::GAME_SHORTCUTS_MODE)
    }

    pub fn set_game_shortcuts_mode(&self, value: GameShortcutsMode) -> Result<()> {
        self.write_quietly(names::GAME_SHORTCUTS_MODE, Some(value.raw().into()))
    }

    pub fn game_shortcut_identifiers(&self) -> Vec<String> {
        logged(
            names::GAME_SHORTCUT_IDENTIFIERS,
            self.store.get_list(names::GAME_SHORTCUT_IDENTIFIERS),
        )
        .unwrap_or_default()
    }

    /// Shortcut games in stored order. Games missing from the library are
    /// skipped.
    pub fn game_shortcuts(&self) -> Vec<Game> {
        self.game_shortcut_identifiers()
            .iter()
            .filter_map(|id| match self.library.find_game(id) {
                Ok(game) => game,
                Err(e) => {
                    log::warn!("Failed to look up shortcut game '{id}': {e}");
                    None
                },
            })
            .collect()
    }

    pub fn set_game_shortcuts(&self, games: &[Game]) -> Result<()> {
        let identifiers: Vec<String> = games.iter().map(|g| g.identifier.clone()).collect();
        self.write_quietly(names::GAME_SHORTCUT_IDENTIFIERS, Some(identifiers.into()))
    }

    pub fn syncing_service(&self) -> Option<SyncingService> {
        self.read_string(names::SYNCING_SERVICE)
            .and_then(|raw| SyncingService::from_raw(&raw))
    }

    pub fn set_syncing_service(&self, value: Option<SyncingService>) -> Result<()> {
        self.write_and_notify(
            names::SYNCING_SERVICE,
            names::SYNCING_SERVICE,
            value.map(|s| s.raw().into()),
        )
    }

    pub fn sort_save_states_by_oldest_first(&self) -> bool {
        self.read_bool(names::SORT_SAVE_STATES_BY_OLDEST_FIRST, false)
    }

    pub fn set_sort_save_states_by_oldest_first(&self, value: bool) -> Result<()> {
        self.write_quietly(names::SORT_SAVE_STATES_BY_OLDEST_FIRST, Some(value.into()))
    }

    pub fn is_previews_enabled(&self) -> bool {
        self.read_bool(names::IS_PREVIEWS_ENABLED, true)
    }

    pub fn set_previews_enabled(&self, value: bool) -> Result<()> {
        self.write_quietly(names::IS_PREVIEWS_ENABLED, Some(value.into()))
    }

    // -- emulation --

    pub fn is_alt_jit_enabled(&self) -> bool {
        self.read_bool(names::IS_ALT_JIT_ENABLED, false)
    }

    pub fn set_alt_jit_enabled(&self, value: bool) -> Result<()> {
        self.write_and_notify(names::IS_ALT_JIT_ENABLED, names::IS_ALT_JIT_ENABLED, Some(value.into()))
    }

    pub fn auto_load_save(&self) -> bool {
        self.read_bool(names::AUTO_LOAD_SAVE, true)
    }

    pub fn set_auto_load_save(&self, value: bool) -> Result<()> {
        self.write_and_notify(names::AUTO_LOAD_SAVE, names::AUTO_LOAD_SAVE, Some(value.into()))
    }

    // -- audio --

    pub fn respect_silent_mode(&self) -> bool {
        self.read_bool(names::RESPECT_SILENT_MODE, true)
    }

    pub fn set_respect_silent_mode(&self, value: bool) -> Result<()> {
        self.write_and_notify(names::RESPECT_SILENT_MODE, names::RESPECT_SILENT_MODE, Some(value.into()))
    }

    pub fn play_over_other_media(&self) -> bool {
        self.read_bool(names::PLAY_OVER_OTHER_MEDIA, true)
    }

    pub fn set_play_over_other_media(&self, value: bool) -> Result<()> {
        self.write_and_notify(
            names::PLAY_OVER_OTHER_MEDIA,
            names::PLAY_OVER_OTHER_MEDIA,
            Some(value.into()),
        )
    }

    pub fn game_volume(&self) -> f64 {
        self.read_float(names::GAME_VOLUME, defaults::GAME_VOLUME)
    }

    pub fn set_game_volume(&self, value: f64) -> Result<bool> {
        self.write_if_changed(names::GAME_VOLUME, names::GAME_VOLUME, Some(value.into()))
    }

    // -- rewind --

    pub fn is_rewind_enabled(&self) -> bool {
        self.read_bool(names::IS_REWIND_ENABLED, false)
    }

    pub fn set_rewind_enabled(&self, value: bool) -> Result<()> {
        self.write_and_notify(names::IS_REWIND_ENABLED, names::IS_REWIND_ENABLED, Some(value.into()))
    }

    /// Seconds between rewind save states.
    pub fn rewind_timer_interval(&self) -> i64 {
        self.read_int(names::REWIND_TIMER_INTERVAL, defaults::REWIND_TIMER_INTERVAL)
    }

    pub fn set_rewind_timer_interval(&self, value: i64) -> Result<()> {
        self.write_and_notify(
            names::REWIND_TIMER_INTERVAL,
            names::REWIND_TIMER_INTERVAL,
            Some(value.into()),
        )
    }

    // -- fast forward --

    pub fn is_unsafe_fast_forward_speeds_enabled(&self) -> bool {
        self.read_bool(names::IS_UNSAFE_FAST_FORWARD_SPEEDS_ENABLED, false)
    }

    pub fn set_unsafe_fast_forward_speeds_enabled(&self, value: bool) -> Result<()> {
        self.write_and_notify(
            names::IS_UNSAFE_FAST_FORWARD_SPEEDS_ENABLED,
            names::IS_UNSAFE_FAST_FORWARD_SPEEDS_ENABLED,
            Some(value.into()),
        )
    }

    pub fn is_prompt_speed_enabled(&self) -> bool {
        self.read_bool(names::IS_PROMPT_SPEED_ENABLED, true)
    }

    pub fn set_prompt_speed_enabled(&self, value: bool) -> Result<()> {
        self.write_and_notify(
            names::IS_PROMPT_SPEED_ENABLED,
            names::IS_PROMPT_SPEED_ENABLED,
            Some(value.into()),
        )
    }

    pub fn fast_forward_speed(&self) -> f64 {
        self.read_float(names::FAST_FORWARD_SPEED, defaults::FAST_FORWARD_SPEED)
    }

    pub fn set_fast_forward_speed(&self, value: f64) -> Result<()> {
        self.write_and_notify(names::FAST_FORWARD_SPEED, names::FAST_FORWARD_SPEED, Some(value.into()))
    }

    // -- controller skins --

    pub fn is_alt_representations_enabled(&self) -> bool {
        self.read_bool(names::IS_USE_ALT_REPRESENTATIONS_ENABLED_KEY, false)
    }

    pub fn set_alt_representations_enabled(&self, value: bool) -> Result<()> {
        self.write_and_notify(
            names::IS_USE_ALT_REPRESENTATIONS_ENABLED_KEY,
            names::IS_ALT_REPRESENTATIONS_ENABLED,
            Some(value.into()),
        )
    }

    pub fn is_alt_representations_available(&self) -> bool {
        self.read_bool(names::IS_ALT_REPRESENTATIONS_AVAILABLE, false)
    }

    pub fn set_alt_representations_available(&self, value: bool) -> Result<()> {
        self.write_and_notify(
            names::IS_ALT_REPRESENTATIONS_AVAILABLE,
            names::IS_ALT_REPRESENTATIONS_AVAILABLE,
            Some(value.into()),
        )
    }

    pub fn is_always_show_controller_skin_enabled(&self) -> bool {
        self.read_bool(names::IS_ALWAYS_SHOW_CONTROLLER_SKIN_ENABLED, false)
    }

    pub fn set_always_show_controller_skin_enabled(&self, value: bool) -> Result<()> {
        self.write_and_notify(
            names::IS_ALWAYS_SHOW_CONTROLLER_SKIN_ENABLED,
            names::IS_ALWAYS_SHOW_CONTROLLER_SKIN_ENABLED,
            Some(value.into()),
        )
    }

    // -- debug --

    pub fn is_debug_mode_enabled(&self) -> bool {
        self.read_bool(names::IS_DEBUG_MODE_ENABLED, false)
    }

    pub fn set_debug_mode_enabled(&self, value: bool) -> Result<()> {
        self.write_and_notify(names::IS_DEBUG_MODE_ENABLED, names::IS_DEBUG_MODE_ENABLED, Some(value.into()))
    }

    pub fn is_skin_debug_mode_enabled(&self) -> bool {
        self.read_bool(names::IS_SKIN_DEBUG_MODE_ENABLED, false)
    }

    pub fn set_skin_debug_mode_enabled(&self, value: bool) -> Result<()> {
        self.write_and_notify(
            names::IS_SKIN_DEBUG_MODE_ENABLED,
            names::IS_SKIN_DEBUG_MODE_ENABLED,
            Some(value.into()),
        )
    }

    pub fn skin_debug_device(&self) -> SkinDebugDevice {
        self.read_enum(names::SKIN_DEBUG_DEVICE)
    }

    pub fn set_skin_debug_device(&self, value: SkinDebugDevice) -> Result<()> {
        self.write_and_notify(
            names::SKIN_DEBUG_DEVICE,
            names::SKIN_DEBUG_DEVICE,
            Some(value.raw().into()),
        )
    }

    // -- screenshots --

    pub fn screenshot_save_to_files(&self) -> bool {
        self.read_bool(names::SCREENSHOT_SAVE_TO_FILES, true)
    }

    pub fn set_screenshot_save_to_files(&self, value: bool) -> Result<()> {
        self.write_and_notify(
            names::SCREENSHOT_SAVE_TO_FILES,
            names::SCREENSHOT_SAVE_TO_FILES,
            Some(value.into()),
        )
    }

    pub fn screenshot_save_to_photos(&self) -> bool {
        self.read_bool(names::SCREENSHOT_SAVE_TO_PHOTOS, false)
    }

    pub fn set_screenshot_save_to_photos(&self, value: bool) -> Result<()> {
        self.write_and_notify(
            names::SCREENSHOT_SAVE_TO_PHOTOS,
            names::SCREENSHOT_SAVE_TO_PHOTOS,
            Some(value.into()),
        )
    }

    pub fn screenshot_image_scale(&self) -> ScreenshotScale {
        logged(
            names::SCREENSHOT_IMAGE_SCALE,
            self.store.get_float(names::SCREENSHOT_IMAGE_SCALE),
        )
        .and_then(ScreenshotScale::from_factor)
        .unwrap_or_default()
    }

    pub fn set_screenshot_image_scale(&self, value: ScreenshotScale) -> Result<()> {
        self.write_and_notify(
            names::SCREENSHOT_IMAGE_SCALE,
            names::SCREENSHOT_IMAGE_SCALE,
            Some(value.factor().into()),
        )
    }

    // -- cores --

    /// Preferred core for `game_type`, if one is stored and still known.
    pub fn preferred_core(&self, game_type: &GameType) -> Option<&'static str> {
        let key = preferred_core_key(game_type);
        let identifier = self.read_string(&key)?;
        let system = System::from_game_type(game_type)?;
        cores_for(system).iter().copied().find(|c| *c == identifier)
    }

    pub fn set_preferred_core(&self, game_type: &GameType, core: &str) -> Result<()> {
        let system = System::from_game_type(game_type)
            .ok_or_else(|| IgnitedError::Config(format!("unknown game type: {game_type}")))?;
        if !cores_for(system).iter().any(|c| *c == core) {
            return Err(IgnitedError::Config(format!(
                "core '{core}' cannot run {system}"
            )));
        }
        let key = preferred_core_key(game_type);
        self.store.set(&key, Some(core.into()))?;
        self.events.publish(SettingsEvent::PreferredCore {
            key,
            core: core.to_string(),
        });
        Ok(())
    }

    // -- preferred controller skins --

    pub fn skin_resolver(&self) -> PreferredSkinResolver<'_> {
        PreferredSkinResolver::new(&*self.store, &*self.catalog, &*self.library, &self.events)
    }

    pub fn preferred_controller_skin(&self, scope: &SkinScope, traits: &Traits) -> Option<ControllerSkin> {
        self.skin_resolver()
            .resolve(scope, traits, self.is_alt_representations_enabled())
    }

    pub fn preferred_controller_skin_for_system(
        &self,
        system: System,
        traits: &Traits,
    ) -> Option<ControllerSkin> {
        self.skin_resolver().preferred_skin_for_system(system, traits)
    }

    pub fn preferred_controller_skin_for_game(&self, game: &Game, traits: &Traits) -> Option<ControllerSkin> {
        self.skin_resolver()
            .preferred_skin_for_game(game, traits, self.is_alt_representations_enabled())
    }

    pub fn set_preferred_controller_skin_for_system(
        &self,
        skin: Option<&ControllerSkin>,
        system: System,
        traits: &Traits,
    ) -> Result<bool> {
        self.skin_resolver()
            .set_preferred_skin_for_system(skin, system, traits)
    }

    pub fn set_preferred_controller_skin_for_game(
        &self,
        skin: Option<&ControllerSkin>,
        game: &Game,
        traits: &Traits,
    ) -> Result<bool> {
        self.skin_resolver()
            .set_preferred_skin_for_game(skin, game, traits)
    }
}
