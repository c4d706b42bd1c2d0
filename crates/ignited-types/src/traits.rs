//! Controller-skin trait context: the device, display type, and orientation
//! a skin is requested for, plus the scope a preference is stored under.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IgnitedError;
use crate::system::System;

/// Device class a skin representation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Device {
    #[default]
    Iphone,
    Ipad,
    Tv,
}

/// Shape of the screen area the controls are drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DisplayType {
    /// Devices with a home button.
    #[default]
    Standard,
    /// Full-screen devices without a home button.
    EdgeToEdge,
    /// iPad multitasking.
    SplitView,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Device {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Iphone => "iphone",
            Self::Ipad => "ipad",
            Self::Tv => "tv",
        }
    }
}

impl DisplayType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::EdgeToEdge => "edgeToEdge",
            Self::SplitView => "splitView",
        }
    }
}

impl Orientation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }
}

impl FromStr for Device {
    type Err = IgnitedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "iphone" => Ok(Self::Iphone),
            "ipad" => Ok(Self::Ipad),
            "tv" => Ok(Self::Tv),
            _ => Err(IgnitedError::Parse(format!("unknown device: {s}"))),
        }
    }
}

impl FromStr for DisplayType {
    type Err = IgnitedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match folded.as_str() {
            "standard" => Ok(Self::Standard),
            "edgetoedge" => Ok(Self::EdgeToEdge),
            "splitview" => Ok(Self::SplitView),
            _ => Err(IgnitedError::Parse(format!("unknown display type: {s}"))),
        }
    }
}

impl FromStr for Orientation {
    type Err = IgnitedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "portrait" => Ok(Self::Portrait),
            "landscape" => Ok(Self::Landscape),
            _ => Err(IgnitedError::Parse(format!("unknown orientation: {s}"))),
        }
    }
}

/// The context a controller skin is requested under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Traits {
    pub device: Device,
    pub display_type: DisplayType,
    pub orientation: Orientation,
}

impl Traits {
    pub fn new(device: Device, display_type: DisplayType, orientation: Orientation) -> Self {
        Self {
            device,
            display_type,
            orientation,
        }
    }

    /// iPhone traits, the common case.
    pub fn iphone(display_type: DisplayType, orientation: Orientation) -> Self {
        Self::new(Device::Iphone, display_type, orientation)
    }
}

impl fmt::Display for Traits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.device.as_str(),
            self.display_type.as_str(),
            self.orientation.as_str()
        )
    }
}

/// What a controller-skin preference is stored for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SkinScope {
    /// Category-level preference shared by every game of a system.
    System(System),
    /// Preference attached to a single game.
    Game {
        identifier: String,
        system: Option<System>,
    },
}

impl fmt::Display for SkinScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::System(system) => write!(f, "system {system}"),
            Self::Game { identifier, .. } => write!(f, "game {identifier}"),
        }
    }
}
