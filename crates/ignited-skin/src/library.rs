//! Game library: games and their per-orientation controller-skin choices.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use ignited_types::error::{IgnitedError, Result};
use ignited_types::{GameType, Orientation, System};

/// A game in the user's library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub identifier: String,
    pub name: String,
    pub game_type: GameType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_portrait_skin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_landscape_skin: Option<String>,
}

impl Game {
    /// Identifier of the skin chosen for `orientation`, if any.
    pub fn preferred_skin(&self, orientation: Orientation) -> Option<&str> {
        match orientation {
            Orientation::Portrait => self.preferred_portrait_skin.as_deref(),
            Orientation::Landscape => self.preferred_landscape_skin.as_deref(),
        }
    }

    fn preferred_skin_mut(&mut self, orientation: Orientation) -> &mut Option<String> {
        match orientation {
            Orientation::Portrait => &mut self.preferred_portrait_skin,
            Orientation::Landscape => &mut self.preferred_landscape_skin,
        }
    }

    pub fn system(&self) -> Option<System> {
        System::from_game_type(&self.game_type)
    }
}

/// Repository of games.
pub trait GameLibrary: Send + Sync {
    fn find_game(&self, identifier: &str) -> Result<Option<Game>>;

    /// Store the skin chosen for one orientation of a game. Returns whether
    /// the stored value changed.
    fn set_preferred_skin(
        &self,
        game_identifier: &str,
        orientation: Orientation,
        skin_identifier: Option<&str>,
    ) -> Result<bool>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct LibraryFile {
    #[serde(default)]
    games: Vec<Game>,
}

/// A game library held in memory, loadable from and savable to a TOML
/// `[[games]]` list.
#[derive(Debug, Default)]
pub struct MemoryLibrary {
    games: RwLock<BTreeMap<String, Game>>,
}

impl MemoryLibrary {
    pub fn new(games: impl IntoIterator<Item = Game>) -> Self {
        let games = games
            .into_iter()
            .map(|g| (g.identifier.clone(), g))
            .collect();
        Self {
            games: RwLock::new(games),
        }
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let file: LibraryFile = toml::from_str(text)?;
        Ok(Self::new(file.games))
    }

    /// Load from `path`. A missing file yields an empty library.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            log::debug!("Game library '{}' does not exist yet", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let file = LibraryFile {
            games: self.read()?.values().cloned().collect(),
        };
        std::fs::write(path, toml::to_string(&file)?)?;
        Ok(())
    }

    pub fn insert(&self, game: Game) -> Result<()> {
        self.write()?.insert(game.identifier.clone(), game);
        Ok(())
    }

    pub fn games(&self) -> Result<Vec<Game>> {
        Ok(self.read()?.values().cloned().collect())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<String, Game>>> {
        self.games
            .read()
            .map_err(|_| IgnitedError::Library("game library lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<String, Game>>> {
        self.games
            .write()
            .map_err(|_| IgnitedError::Library("game library lock poisoned".into()))
    }
}

impl GameLibrary for MemoryLibrary {
    fn find_game(&self, identifier: &str) -> Result<Option<Game>> {
        Ok(self.read()?.get(identifier).cloned())
    }

    fn set_preferred_skin(
        &self,
        game_identifier: &str,
        orientation: Orientation,
        skin_identifier: Option<&str>,
    ) -> Result<bool> {
        let mut games = self.write()?;
        let game = games
            .get_mut(game_identifier)
            .ok_or_else(|| IgnitedError::Library(format!("no such game: {game_identifier}")))?;
        let slot = game.preferred_skin_mut(orientation);
        if slot.as_deref() == skin_identifier {
            return Ok(false);
        }
        *slot = skin_identifier.map(str::to_string);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIBRARY: &str = r#"
[[games]]
identifier = "a1b2"
name = "Super Mario Bros."
game_type = "com.rileytestut.delta.game.nes"
preferred_portrait_skin = "com.delta.nes.custom"

[[games]]
identifier = "c3d4"
name = "Pokemon Emerald"
game_type = "com.rileytestut.delta.game.gba"
"#;

    #[test]
    fn parse_library() {
        let library = MemoryLibrary::from_toml(LIBRARY).unwrap();
        let game = library.find_game("a1b2").unwrap().unwrap();
        assert_eq!(game.system(), Some(System::Nes));
        assert_eq!(
            game.preferred_skin(Orientation::Portrait),
            Some("com.delta.nes.custom")
        );
        assert_eq!(game.preferred_skin(Orientation::Landscape), None);
    }

    #[test]
    fn set_preferred_skin_reports_change() {
        let library = MemoryLibrary::from_toml(LIBRARY).unwrap();
        assert!(
            library
                .set_preferred_skin("c3d4", Orientation::Landscape, Some("skin"))
                .unwrap()
        );
        assert!(
            !library
                .set_preferred_skin("c3d4", Orientation::Landscape, Some("skin"))
                .unwrap()
        );
        let game = library.find_game("c3d4").unwrap().unwrap();
        assert_eq!(game.preferred_skin(Orientation::Landscape), Some("skin"));
    }

    #[test]
    fn clearing_preferred_skin() {
        let library = MemoryLibrary::from_toml(LIBRARY).unwrap();
        assert!(
            library
                .set_preferred_skin("a1b2", Orientation::Portrait, None)
                .unwrap()
        );
        let game = library.find_game("a1b2").unwrap().unwrap();
        assert_eq!(game.preferred_skin(Orientation::Portrait), None);
    }

    #[test]
    fn unknown_game_is_library_error() {
        let library = MemoryLibrary::default();
        let err = library
            .set_preferred_skin("zzz", Orientation::Portrait, None)
            .unwrap_err();
        assert!(matches!(err, IgnitedError::Library(_)));
    }

    #[test]
    fn save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.toml");
        let library = MemoryLibrary::from_toml(LIBRARY).unwrap();
        library
            .set_preferred_skin("c3d4", Orientation::Portrait, Some("com.delta.gba.standard"))
            .unwrap();
        library.save(&path).unwrap();

        let reloaded = MemoryLibrary::load(&path).unwrap();
        assert_eq!(reloaded.games().unwrap().len(), 2);
        let game = reloaded.find_game("c3d4").unwrap().unwrap();
        assert_eq!(
            game.preferred_skin(Orientation::Portrait),
            Some("com.delta.gba.standard")
        );
    }

    #[test]
    fn missing_file_is_empty_library() {
        let dir = tempfile::tempdir().unwrap();
        let library = MemoryLibrary::load(&dir.path().join("games.toml")).unwrap();
        assert!(library.games().unwrap().is_empty());
    }
}
