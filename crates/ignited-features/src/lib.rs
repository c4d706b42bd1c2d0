//! Feature flags with typed options.
//!
//! A [`Feature`] is a named, user-toggleable capability with zero or more
//! [`OptionSpec`]s. Features are grouped into [`FeatureContainer`]s (one per
//! console plus gameplay and user-interface groups). Flag and option state
//! lives in the injected preference store and is read and written through
//! [`FeatureStore`].

pub mod container;
pub mod containers;
pub mod feature;
pub mod gameplay;
pub mod option;
pub mod state;

pub use container::FeatureContainer;
pub use containers::{GameplayFeatures, GbcFeatures, N64Features, UserInterfaceFeatures};
pub use feature::Feature;
pub use gameplay::{GameScreenshotOptions, SaveStateRewindOptions, ScreenshotSize};
pub use option::{OptionSpec, SliderRange};
pub use state::FeatureStore;
