//! Preferred controller-skin resolution.
//!
//! Resolution order for a game:
//! 1. The game's own skin for the requested orientation, if it supports the
//!    requested traits (standard and edge-to-edge stand in for each other)
//! 2. The system-level preference stored under [`preferred_skin_key`]
//! 3. The system's standard skin, which is then stored as the system-level
//!    preference
//!
//! Storage failures are logged and treated as "not found"; resolution never
//! fails, it may only come back empty.

use ignited_store::{EventBus, PrefValue, PreferenceStore, SettingsEvent};
use ignited_types::error::Result;
use ignited_types::{SkinScope, System, Traits};

use crate::catalog::SkinCatalog;
use crate::key::preferred_skin_key;
use crate::library::{Game, GameLibrary};
use crate::skin::ControllerSkin;

/// Resolves and records preferred controller skins against injected
/// storage.
pub struct PreferredSkinResolver<'a> {
    store: &'a dyn PreferenceStore,
    catalog: &'a dyn SkinCatalog,
    library: &'a dyn GameLibrary,
    events: &'a EventBus,
}

impl<'a> PreferredSkinResolver<'a> {
    pub fn new(
        store: &'a dyn PreferenceStore,
        catalog: &'a dyn SkinCatalog,
        library: &'a dyn GameLibrary,
        events: &'a EventBus,
    ) -> Self {
        Self {
            store,
            catalog,
            library,
            events,
        }
    }

    /// Resolve for either a system or a game.
    ///
    /// A game missing from the library falls back to the scope's system, if
    /// known.
    pub fn resolve(&self, scope: &SkinScope, traits: &Traits, alt: bool) -> Option<ControllerSkin> {
        match scope {
            SkinScope::System(system) => self.preferred_skin_for_system(*system, traits),
            SkinScope::Game { identifier, system } => {
                match self.library.find_game(identifier) {
                    Ok(Some(game)) => return self.preferred_skin_for_game(&game, traits, alt),
                    Ok(None) => log::warn!("Game '{identifier}' not in library"),
                    Err(e) => log::warn!("Failed to look up game '{identifier}': {e}"),
                }
                system.and_then(|s| self.preferred_skin_for_system(s, traits))
            },
        }
    }

    /// The skin to show for `system` under `traits`.
    pub fn preferred_skin_for_system(&self, system: System, traits: &Traits) -> Option<ControllerSkin> {
        let game_type = system.game_type();
        let key = preferred_skin_key(system.short_name(), traits);

        let identifier = self.store.get_string(&key).unwrap_or_else(|e| {
            log::warn!("Failed to read '{key}': {e}");
            None
        });

        if let Some(identifier) = identifier {
            match self.catalog.find_skin(&game_type, &identifier) {
                Ok(Some(skin)) => return Some(skin),
                Ok(None) => log::debug!("Preferred skin '{identifier}' for {system} is gone"),
                Err(e) => log::warn!("Failed to fetch skin '{identifier}' for {system}: {e}"),
            }
        }

        let standard = match self.catalog.find_standard_skin(&game_type) {
            Ok(skin) => skin?,
            Err(e) => {
                log::warn!("Failed to fetch standard skin for {system}: {e}");
                return None;
            },
        };

        if let Err(e) = self.set_preferred_skin_for_system(Some(&standard), system, traits) {
            log::warn!("Failed to store standard skin as preference for {system}: {e}");
        }
        Some(standard)
    }

    /// The skin to show for `game` under `traits`.
    ///
    /// `alt` enables alternate skin representations.
    pub fn preferred_skin_for_game(&self, game: &Game, traits: &Traits, alt: bool) -> Option<ControllerSkin> {
        if let Some(identifier) = game.preferred_skin(traits.orientation) {
            match self.catalog.find_skin(&game.game_type, identifier) {
                Ok(Some(skin)) if skin.supported_traits(traits, alt).is_some() => return Some(skin),
                Ok(Some(_)) => log::debug!(
                    "Skin '{identifier}' of game '{}' does not support {traits}",
                    game.identifier
                ),
                Ok(None) => log::debug!(
                    "Skin '{identifier}' of game '{}' is gone",
                    game.identifier
                ),
                Err(e) => log::warn!(
                    "Failed to fetch skin '{identifier}' of game '{}': {e}",
                    game.identifier
                ),
            }
        }

        let system = game.system()?;
        self.preferred_skin_for_system(system, traits)
    }

    /// Record `skin` as the system-level preference. `None` clears it.
    ///
    /// Returns whether the stored value changed; a change event is
    /// published only then.
    pub fn set_preferred_skin_for_system(
        &self,
        skin: Option<&ControllerSkin>,
        system: System,
        traits: &Traits,
    ) -> Result<bool> {
        let key = preferred_skin_key(system.short_name(), traits);
        let value = skin.map(|s| PrefValue::from(s.identifier.as_str()));
        if !self.store.set_if_changed(&key, value)? {
            return Ok(false);
        }
        log::debug!("Stored '{key}' = {:?}", skin.map(|s| &s.identifier));
        self.events.publish(SettingsEvent::PreferredControllerSkin {
            skin: skin.map(|s| s.identifier.clone()),
            scope: SkinScope::System(system),
            traits: *traits,
        });
        Ok(true)
    }

    /// Record `skin` as the game's choice for `traits.orientation`. `None`
    /// clears it.
    pub fn set_preferred_skin_for_game(
        &self,
        skin: Option<&ControllerSkin>,
        game: &Game,
        traits: &Traits,
    ) -> Result<bool> {
        let changed = self.library.set_preferred_skin(
            &game.identifier,
            traits.orientation,
            skin.map(|s| s.identifier.as_str()),
        )?;
        if !changed {
            return Ok(false);
        }
        self.events.publish(SettingsEvent::PreferredControllerSkin {
            skin: skin.map(|s| s.identifier.clone()),
            scope: SkinScope::Game {
                identifier: game.identifier.clone(),
                system: game.system(),
            },
            traits: *traits,
        });
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use ignited_store::MemoryStore;
    use ignited_types::error::IgnitedError;
    use ignited_types::{Device, DisplayType, GameType, Orientation};

    use super::*;
    use crate::catalog::MemoryCatalog;
    use crate::library::MemoryLibrary;
    use crate::skin::Representation;

    /// Counts mutating calls and can be told to fail reads or writes.
    #[derive(Default)]
    struct CountingStore {
        inner: MemoryStore,
        writes: AtomicUsize,
        fail_reads: bool,
        fail_writes: bool,
    }

    impl CountingStore {
        fn writes(&self) -> usize {
            self.writes.load(Ordering::SeqCst)
        }
    }

    impl PreferenceStore for CountingStore {
        fn get(&self, key: &str) -> Result<Option<PrefValue>> {
            if self.fail_reads {
                return Err(IgnitedError::Store("disk gone".into()));
            }
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: Option<PrefValue>) -> Result<()> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            if self.fail_writes {
                return Err(IgnitedError::Store("read-only".into()));
            }
            self.inner.set(key, value)
        }

        fn set_if_changed(&self, key: &str, value: Option<PrefValue>) -> Result<bool> {
            if self.fail_writes {
                return Err(IgnitedError::Store("read-only".into()));
            }
            let changed = self.inner.set_if_changed(key, value)?;
            if changed {
                self.writes.fetch_add(1, Ordering::SeqCst);
            }
            Ok(changed)
        }

        fn register_defaults(&self, defaults: BTreeMap<String, PrefValue>) -> Result<()> {
            self.inner.register_defaults(defaults)
        }
    }

    struct FailingCatalog;

    impl SkinCatalog for FailingCatalog {
        fn find_skin(&self, _: &GameType, _: &str) -> Result<Option<ControllerSkin>> {
            Err(IgnitedError::Catalog("database locked".into()))
        }

        fn find_standard_skin(&self, _: &GameType) -> Result<Option<ControllerSkin>> {
            Err(IgnitedError::Catalog("database locked".into()))
        }

        fn skins(&self, _: &GameType) -> Result<Vec<ControllerSkin>> {
            Err(IgnitedError::Catalog("database locked".into()))
        }
    }

    fn portrait() -> Traits {
        Traits::iphone(DisplayType::EdgeToEdge, Orientation::Portrait)
    }

    fn skin(id: &str, system: System, is_standard: bool, reps: &[(DisplayType, Orientation)]) -> ControllerSkin {
        ControllerSkin {
            identifier: id.into(),
            name: id.into(),
            game_type: system.game_type(),
            is_standard,
            representations: reps
                .iter()
                .map(|&(display_type, orientation)| Representation {
                    device: Device::Iphone,
                    display_type,
                    orientation,
                    alt: false,
                })
                .collect(),
        }
    }

    fn nes_catalog() -> MemoryCatalog {
        MemoryCatalog::new(vec![
            skin(
                "nes.custom",
                System::Nes,
                false,
                &[(DisplayType::Standard, Orientation::Portrait)],
            ),
            skin(
                "nes.landscape-only",
                System::Nes,
                false,
                &[(DisplayType::Standard, Orientation::Landscape)],
            ),
            skin(
                "nes.standard",
                System::Nes,
                true,
                &[
                    (DisplayType::Standard, Orientation::Portrait),
                    (DisplayType::EdgeToEdge, Orientation::Portrait),
                    (DisplayType::Standard, Orientation::Landscape),
                ],
            ),
        ])
    }

    fn nes_game(portrait_skin: Option<&str>) -> Game {
        Game {
            identifier: "smb".into(),
            name: "Super Mario Bros.".into(),
            game_type: System::Nes.game_type(),
            preferred_portrait_skin: portrait_skin.map(str::to_string),
            preferred_landscape_skin: None,
        }
    }

    #[test]
    fn no_preference_and_no_standard_skin_is_none_without_write() {
        let store = CountingStore::default();
        let catalog = MemoryCatalog::default();
        let library = MemoryLibrary::default();
        let events = EventBus::new();
        let rx = events.subscribe();
        let resolver = PreferredSkinResolver::new(&store, &catalog, &library, &events);

        assert!(resolver.preferred_skin_for_system(System::Gba, &portrait()).is_none());
        assert_eq!(store.writes(), 0);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn standard_skin_written_back_exactly_once() {
        let store = CountingStore::default();
        let catalog = nes_catalog();
        let library = MemoryLibrary::default();
        let events = EventBus::new();
        let rx = events.subscribe();
        let resolver = PreferredSkinResolver::new(&store, &catalog, &library, &events);

        let first = resolver.preferred_skin_for_system(System::Nes, &portrait()).unwrap();
        assert_eq!(first.identifier, "nes.standard");
        assert_eq!(store.writes(), 1);
        assert_eq!(
            store
                .get_string("nes-portrait-standard-controller")
                .unwrap()
                .as_deref(),
            Some("nes.standard")
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            SettingsEvent::PreferredControllerSkin {
                skin: Some("nes.standard".into()),
                scope: SkinScope::System(System::Nes),
                traits: portrait(),
            }
        );

        let second = resolver.preferred_skin_for_system(System::Nes, &portrait()).unwrap();
        assert_eq!(second, first);
        assert_eq!(store.writes(), 1);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn stored_preference_wins_over_standard() {
        let store = CountingStore::default();
        store
            .inner
            .set("nes-portrait-standard-controller", Some("nes.custom".into()))
            .unwrap();
        let catalog = nes_catalog();
        let library = MemoryLibrary::default();
        let events = EventBus::new();
        let resolver = PreferredSkinResolver::new(&store, &catalog, &library, &events);

        let skin = resolver.preferred_skin_for_system(System::Nes, &portrait()).unwrap();
        assert_eq!(skin.identifier, "nes.custom");
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn game_skin_with_only_alt_layout_follows_alt_flag() {
        let mut alt_only = skin(
            "nes.alt-only",
            System::Nes,
            false,
            &[(DisplayType::EdgeToEdge, Orientation::Portrait)],
        );
        alt_only.representations[0].alt = true;
        let mut skins = nes_catalog().skins(&System::Nes.game_type()).unwrap();
        skins.push(alt_only);
        let catalog = MemoryCatalog::new(skins);
        let store = CountingStore::default();
        let game = nes_game(Some("nes.alt-only"));
        let library = MemoryLibrary::new([game.clone()]);
        let events = EventBus::new();
        let resolver = PreferredSkinResolver::new(&store, &catalog, &library, &events);

        let with_alt = resolver.preferred_skin_for_game(&game, &portrait(), true).unwrap();
        assert_eq!(with_alt.identifier, "nes.alt-only");
        assert_eq!(store.writes(), 0);

        let without_alt = resolver.preferred_skin_for_game(&game, &portrait(), false).unwrap();
        assert_eq!(without_alt.identifier, "nes.standard");

        let scope = SkinScope::Game {
            identifier: "smb".into(),
            system: Some(System::Nes),
        };
        assert_eq!(
            resolver.resolve(&scope, &portrait(), true).unwrap().identifier,
            "nes.alt-only"
        );
    }

    #[test]
    fn dangling_preference_falls_back_to_standard_and_replaces_it() {
        let store = CountingStore::default();
        store
            .inner
            .set("nes-portrait-standard-controller", Some("deleted.skin".into()))
            .unwrap();
        let catalog = nes_catalog();
        let library = MemoryLibrary::default();
        let events = EventBus::new();
        let resolver = PreferredSkinResolver::new(&store, &catalog, &library, &events);

        let skin = resolver.preferred_skin_for_system(System::Nes, &portrait()).unwrap();
        assert_eq!(skin.identifier, "nes.standard");
        assert_eq!(
            store
                .get_string("nes-portrait-standard-controller")
                .unwrap()
                .as_deref(),
            Some("nes.standard")
        );
    }

    #[test]
    fn edge_to_edge_and_standard_share_system_preference() {
        let store = CountingStore::default();
        let catalog = nes_catalog();
        let library = MemoryLibrary::default();
        let events = EventBus::new();
        let resolver = PreferredSkinResolver::new(&store, &catalog, &library, &events);

        let custom = catalog
            .find_skin(&System::Nes.game_type(), "nes.custom")
            .unwrap()
            .unwrap();
        let standard_traits = Traits::iphone(DisplayType::Standard, Orientation::Portrait);
        resolver
            .set_preferred_skin_for_system(Some(&custom), System::Nes, &standard_traits)
            .unwrap();

        let skin = resolver.preferred_skin_for_system(System::Nes, &portrait()).unwrap();
        assert_eq!(skin.identifier, "nes.custom");
    }

    #[test]
    fn setting_same_skin_twice_notifies_once() {
        let store = CountingStore::default();
        let catalog = nes_catalog();
        let library = MemoryLibrary::default();
        let events = EventBus::new();
        let rx = events.subscribe();
        let resolver = PreferredSkinResolver::new(&store, &catalog, &library, &events);
        let custom = catalog
            .find_skin(&System::Nes.game_type(), "nes.custom")
            .unwrap()
            .unwrap();

        assert!(
            resolver
                .set_preferred_skin_for_system(Some(&custom), System::Nes, &portrait())
                .unwrap()
        );
        assert!(
            !resolver
                .set_preferred_skin_for_system(Some(&custom), System::Nes, &portrait())
                .unwrap()
        );
        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn clearing_system_preference() {
        let store = CountingStore::default();
        let catalog = nes_catalog();
        let library = MemoryLibrary::default();
        let events = EventBus::new();
        let resolver = PreferredSkinResolver::new(&store, &catalog, &library, &events);
        assert!(!resolver.set_preferred_skin_for_system(None, System::Nes, &portrait()).unwrap());
        resolver.preferred_skin_for_system(System::Nes, &portrait());
        assert!(resolver.set_preferred_skin_for_system(None, System::Nes, &portrait()).unwrap());
        assert_eq!(store.get("nes-portrait-standard-controller").unwrap(), None);
    }

    #[test]
    fn game_skin_used_when_it_supports_traits() {
        let store = CountingStore::default();
        let catalog = nes_catalog();
        let library = MemoryLibrary::default();
        let events = EventBus::new();
        let resolver = PreferredSkinResolver::new(&store, &catalog, &library, &events);

        // nes.custom has only a standard portrait layout; edge-to-edge falls back.
        let skin = resolver
            .preferred_skin_for_game(&nes_game(Some("nes.custom")), &portrait(), false)
            .unwrap();
        assert_eq!(skin.identifier, "nes.custom");
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn unsupported_game_skin_falls_through_to_system() {
        let store = CountingStore::default();
        let catalog = nes_catalog();
        let library = MemoryLibrary::default();
        let events = EventBus::new();
        let resolver = PreferredSkinResolver::new(&store, &catalog, &library, &events);

        let skin = resolver
            .preferred_skin_for_game(&nes_game(Some("nes.landscape-only")), &portrait(), false)
            .unwrap();
        assert_eq!(skin.identifier, "nes.standard");
        assert_eq!(
            store
                .get_string("nes-portrait-standard-controller")
                .unwrap()
                .as_deref(),
            Some("nes.standard")
        );
    }

    #[test]
    fn game_without_known_system_and_no_skin_is_none() {
        let store = CountingStore::default();
        let catalog = nes_catalog();
        let library = MemoryLibrary::default();
        let events = EventBus::new();
        let resolver = PreferredSkinResolver::new(&store, &catalog, &library, &events);
        let game = Game {
            game_type: GameType::new("com.example.psx"),
            ..nes_game(None)
        };
        assert!(resolver.preferred_skin_for_game(&game, &portrait(), false).is_none());
    }

    #[test]
    fn resolve_game_scope_uses_library() {
        let store = CountingStore::default();
        let catalog = nes_catalog();
        let library = MemoryLibrary::new([nes_game(Some("nes.custom"))]);
        let events = EventBus::new();
        let resolver = PreferredSkinResolver::new(&store, &catalog, &library, &events);
        let scope = SkinScope::Game {
            identifier: "smb".into(),
            system: Some(System::Nes),
        };
        let skin = resolver.resolve(&scope, &portrait(), false).unwrap();
        assert_eq!(skin.identifier, "nes.custom");
    }

    #[test]
    fn resolve_unknown_game_falls_back_to_scope_system() {
        let store = CountingStore::default();
        let catalog = nes_catalog();
        let library = MemoryLibrary::default();
        let events = EventBus::new();
        let resolver = PreferredSkinResolver::new(&store, &catalog, &library, &events);
        let scope = SkinScope::Game {
            identifier: "missing".into(),
            system: Some(System::Nes),
        };
        let skin = resolver.resolve(&scope, &portrait(), false).unwrap();
        assert_eq!(skin.identifier, "nes.standard");
    }

    #[test]
    fn set_game_skin_notifies_only_on_change() {
        let store = CountingStore::default();
        let catalog = nes_catalog();
        let library = MemoryLibrary::new([nes_game(None)]);
        let events = EventBus::new();
        let rx = events.subscribe();
        let resolver = PreferredSkinResolver::new(&store, &catalog, &library, &events);
        let game = nes_game(None);
        let custom = catalog
            .find_skin(&System::Nes.game_type(), "nes.custom")
            .unwrap()
            .unwrap();

        assert!(
            resolver
                .set_preferred_skin_for_game(Some(&custom), &game, &portrait())
                .unwrap()
        );
        assert!(
            !resolver
                .set_preferred_skin_for_game(Some(&custom), &game, &portrait())
                .unwrap()
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            SettingsEvent::PreferredControllerSkin {
                skin: Some("nes.custom".into()),
                scope: SkinScope::Game {
                    identifier: "smb".into(),
                    system: Some(System::Nes),
                },
                traits: portrait(),
            }
        );
        assert!(rx.try_recv().is_err());

        let stored = library.find_game("smb").unwrap().unwrap();
        assert_eq!(stored.preferred_skin(Orientation::Portrait), Some("nes.custom"));
    }

    #[test]
    fn catalog_failure_degrades_to_none() {
        let store = CountingStore::default();
        let library = MemoryLibrary::default();
        let events = EventBus::new();
        let resolver = PreferredSkinResolver::new(&store, &FailingCatalog, &library, &events);
        assert!(resolver.preferred_skin_for_system(System::Nes, &portrait()).is_none());
        assert!(
            resolver
                .preferred_skin_for_game(&nes_game(Some("nes.custom")), &portrait(), false)
                .is_none()
        );
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn store_read_failure_degrades_to_standard() {
        let store = CountingStore {
            fail_reads: true,
            ..CountingStore::default()
        };
        let catalog = nes_catalog();
        let library = MemoryLibrary::default();
        let events = EventBus::new();
        let resolver = PreferredSkinResolver::new(&store, &catalog, &library, &events);
        let skin = resolver.preferred_skin_for_system(System::Nes, &portrait()).unwrap();
        assert_eq!(skin.identifier, "nes.standard");
    }

    #[test]
    fn store_write_failure_still_returns_standard() {
        let store = CountingStore {
            fail_writes: true,
            ..CountingStore::default()
        };
        let catalog = nes_catalog();
        let library = MemoryLibrary::default();
        let events = EventBus::new();
        let rx = events.subscribe();
        let resolver = PreferredSkinResolver::new(&store, &catalog, &library, &events);
        let skin = resolver.preferred_skin_for_system(System::Nes, &portrait()).unwrap();
        assert_eq!(skin.identifier, "nes.standard");
        assert!(rx.try_recv().is_err());
    }
}
