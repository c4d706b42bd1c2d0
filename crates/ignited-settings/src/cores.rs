//! Emulator cores available per system.

use ignited_types::{GameType, System};

pub const MELONDS_CORE: &str = "com.rileytestut.MelonDSDeltaCore";
pub const DS_CORE: &str = "com.rileytestut.DSDeltaCore";

/// Core identifiers able to run `system`, default first.
pub fn cores_for(system: System) -> &'static [&'static str] {
    match system {
        System::Nes => &["com.rileytestut.NESDeltaCore"],
        System::Snes => &["com.rileytestut.SNESDeltaCore"],
        System::Gbc => &["com.rileytestut.GBCDeltaCore"],
        System::Gba => &["com.rileytestut.GBADeltaCore"],
        System::N64 => &["com.rileytestut.N64DeltaCore"],
        System::Ds => &[MELONDS_CORE, DS_CORE],
        System::Genesis => &["com.rileytestut.GPGXDeltaCore"],
    }
}

/// Store key for the preferred core of `game_type`.
pub fn preferred_core_key(game_type: &GameType) -> String {
    format!("core.{game_type}")
}
