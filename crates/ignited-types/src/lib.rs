//! Foundation types for Ignited settings.
//!
//! This crate contains the vocabulary shared by every Ignited crate: game
//! systems, controller-skin traits, preference scopes, application
//! configuration, and error types.

pub mod config;
pub mod error;
pub mod system;
pub mod traits;

pub use config::AppConfig;
pub use error::{IgnitedError, Result};
pub use system::{GameType, System};
pub use traits::{Device, DisplayType, Orientation, SkinScope, Traits};
