//! Enumerated setting values and their stored raw representations.

use std::fmt;

/// A setting value stored as a fixed raw string.
pub trait RawEnum: Sized + Copy + 'static {
    const ALL: &'static [Self];

    fn raw(self) -> &'static str;

    /// Parse a stored raw value. Unknown values yield `None`.
    fn from_raw(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.raw() == raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeColor {
    #[default]
    Orange,
    Purple,
    Blue,
    Red,
    Green,
    Teal,
    Pink,
    Yellow,
    Mint,
}

impl RawEnum for ThemeColor {
    const ALL: &'static [Self] = &[
        Self::Orange,
        Self::Purple,
        Self::Blue,
        Self::Red,
        Self::Green,
        Self::Teal,
        Self::Pink,
        Self::Yellow,
        Self::Mint,
    ];

    fn raw(self) -> &'static str {
        match self {
            Self::Orange => "orange",
            Self::Purple => "purple",
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Green => "green",
            Self::Teal => "teal",
            Self::Pink => "pink",
            Self::Yellow => "yellow",
            Self::Mint => "mint",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArtworkSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl RawEnum for ArtworkSize {
    const ALL: &'static [Self] = &[Self::Small, Self::Medium, Self::Large];

    fn raw(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// How the home-screen game shortcuts are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameShortcutsMode {
    #[default]
    Recent,
    Manual,
}

impl RawEnum for GameShortcutsMode {
    const ALL: &'static [Self] = &[Self::Recent, Self::Manual];

    fn raw(self) -> &'static str {
        match self {
            Self::Recent => "recent",
            Self::Manual => "manual",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncingService {
    Dropbox,
    GoogleDrive,
}

impl RawEnum for SyncingService {
    const ALL: &'static [Self] = &[Self::Dropbox, Self::GoogleDrive];

    fn raw(self) -> &'static str {
        match self {
            Self::Dropbox => "dropbox",
            Self::GoogleDrive => "googleDrive",
        }
    }
}

/// Device shape simulated while debugging skins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkinDebugDevice {
    Standard,
    #[default]
    EdgeToEdge,
    Ipad,
    SplitView,
}

impl RawEnum for SkinDebugDevice {
    const ALL: &'static [Self] = &[Self::Standard, Self::EdgeToEdge, Self::Ipad, Self::SplitView];

    fn raw(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::EdgeToEdge => "edgeToEdge",
            Self::Ipad => "ipad",
            Self::SplitView => "splitView",
        }
    }
}

/// Screenshot export scale. Stored as its numeric factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenshotScale {
    #[default]
    X1,
    X2,
    X3,
    X4,
    X5,
}

impl ScreenshotScale {
    pub const ALL: [ScreenshotScale; 5] = [Self::X1, Self::X2, Self::X3, Self::X4, Self::X5];

    pub fn factor(self) -> f64 {
        match self {
            Self::X1 => 1.0,
            Self::X2 => 2.0,
            Self::X3 => 3.0,
            Self::X4 => 4.0,
            Self::X5 => 5.0,
        }
    }

    pub fn from_factor(factor: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.factor() == factor)
    }
}

impl fmt::Display for ScreenshotScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.factor())
    }
}
