//! Controller skins -- the on-screen control layouts drawn over a game.
//!
//! Skins live in a [`SkinCatalog`], games (with their per-orientation skin
//! choices) in a [`GameLibrary`]. The [`PreferredSkinResolver`] picks the
//! skin to show for a game or system under a given set of [`Traits`],
//! falling back from the game's own choice to the system preference and
//! finally to the system's standard skin.
//!
//! [`Traits`]: ignited_types::Traits

pub mod catalog;
pub mod key;
pub mod library;
pub mod resolver;
pub mod skin;

pub use catalog::{MemoryCatalog, SkinCatalog};
pub use key::{display_type_bucket, preferred_skin_key};
pub use library::{Game, GameLibrary, MemoryLibrary};
pub use resolver::PreferredSkinResolver;
pub use skin::{ControllerSkin, Representation};
