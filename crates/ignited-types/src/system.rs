//! Game systems (consoles) and their game-type identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IgnitedError;

const GAME_TYPE_PREFIX: &str = "com.rileytestut.delta.game.";

/// Identifier for the kind of game a record belongs to.
///
/// Skins and games are scoped by game type; a [`System`] maps onto exactly
/// one game type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameType(pub String);

impl GameType {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A supported console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum System {
    Nes,
    Snes,
    Gbc,
    Gba,
    N64,
    Ds,
    Genesis,
}

impl System {
    pub const ALL: [System; 7] = [
        System::Nes,
        System::Snes,
        System::Gbc,
        System::Gba,
        System::N64,
        System::Ds,
        System::Genesis,
    ];

    /// Short name used when deriving preference keys.
    pub fn short_name(self) -> &'static str {
        match self {
            Self::Nes => "nes",
            Self::Snes => "snes",
            Self::Gbc => "gbc",
            Self::Gba => "gba",
            Self::N64 => "n64",
            Self::Ds => "ds",
            Self::Genesis => "genesis",
        }
    }

    /// Human-readable console name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Nes => "Nintendo",
            Self::Snes => "Super Nintendo",
            Self::Gbc => "Game Boy Color",
            Self::Gba => "Game Boy Advance",
            Self::N64 => "Nintendo 64",
            Self::Ds => "Nintendo DS",
            Self::Genesis => "Sega Genesis",
        }
    }

    pub fn game_type(self) -> GameType {
        GameType(format!("{GAME_TYPE_PREFIX}{}", self.short_name()))
    }

    /// Map a game type back onto its system. Unknown types yield `None`.
    pub fn from_game_type(game_type: &GameType) -> Option<Self> {
        let short = game_type.as_str().strip_prefix(GAME_TYPE_PREFIX)?;
        Self::ALL.into_iter().find(|s| s.short_name() == short)
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for System {
    type Err = IgnitedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|sys| sys.short_name() == lower)
            .ok_or_else(|| IgnitedError::Parse(format!("unknown system: {s}")))
    }
}
