//! Plain-text renderings of the settings screens.

use ignited_features::{
    Feature, FeatureContainer, FeatureStore, GameScreenshotOptions, OptionSpec,
    SaveStateRewindOptions, UserInterfaceFeatures,
};
use ignited_settings::{RawEnum, Settings};

use crate::patrons::Patron;

const PATRONS_FOOTER: &str = "These individuals have become patrons of the highest tier. \
Their monetary contributions help make the continued development of this app possible.";

const USER_INTERFACE_FOOTER: &str =
    "These features affect the way the user interface looks and functions.";

pub fn render_patrons(patrons: &[Patron]) -> String {
    let mut lines = vec![PATRONS_FOOTER.to_string(), String::new()];
    for patron in patrons {
        match (patron.url(), &patron.link_name) {
            (Some(url), Some(label)) => lines.push(format!("{}  {label} <{url}>", patron.name)),
            (Some(url), None) => lines.push(format!("{}  <{url}>", patron.name)),
            _ => lines.push(patron.name.clone()),
        }
    }
    lines.join("\n")
}

/// Features of `container` in alphabetical order, each with its state and
/// options.
pub fn render_features(container: &dyn FeatureContainer, features: &FeatureStore<'_>) -> String {
    let mut lines = vec![format!("== {} ==", container.name())];
    for feature in container.sorted_features() {
        lines.push(String::new());
        lines.extend(feature_section(feature, features));
    }
    lines.join("\n")
}

pub fn render_user_interface_features(
    container: &UserInterfaceFeatures,
    features: &FeatureStore<'_>,
) -> String {
    format!("{USER_INTERFACE_FOOTER}\n\n{}", render_features(container, features))
}

fn feature_section(feature: &Feature, features: &FeatureStore<'_>) -> Vec<String> {
    let state = if features.is_enabled(feature) { "on" } else { "off" };
    let mut lines = vec![
        format!("[{state}] {}", feature.name),
        format!("      {}", feature.description),
    ];
    for option in feature.options.iter().filter(|o| !o.restores_defaults) {
        lines.push(format!("      {}: {}", option.name, option_label(feature, option, features)));
    }
    lines
}

fn option_label(feature: &Feature, option: &OptionSpec, features: &FeatureStore<'_>) -> String {
    match features.option_value(feature, option.key) {
        Ok(Some(value)) => value.to_string(),
        Ok(None) => option.nil_description.unwrap_or("none").to_string(),
        Err(e) => {
            log::warn!("Failed to read option '{}.{}': {e}", feature.key, option.key);
            "?".to_string()
        },
    }
}

pub fn render_screenshot_options(options: &GameScreenshotOptions) -> String {
    let size = options
        .size
        .map_or_else(|| "Original Size".to_string(), |s| s.to_string());
    [
        "Game Screenshots".to_string(),
        format!("  Save to Files:  {}", yes_no(options.save_to_files)),
        format!("  Save to Photos: {}", yes_no(options.save_to_photos)),
        format!("  Image Size:     {size}"),
    ]
    .join("\n")
}

pub fn render_rewind_options(options: &SaveStateRewindOptions) -> String {
    [
        "Rewind".to_string(),
        format!("  Interval:         {:.0}s", options.interval),
        format!("  Keep Save States: {}", yes_no(options.keep_states)),
    ]
    .join("\n")
}

pub fn render_settings(settings: &Settings) -> String {
    let syncing = settings
        .syncing_service()
        .map_or("none", |s| s.raw());
    let rows: Vec<(&str, String)> = vec![
        ("Theme", settings.theme_color().raw().to_string()),
        ("Artwork size", settings.game_artwork_size().raw().to_string()),
        ("Game volume", format!("{:.2}", settings.game_volume())),
        ("Respect silent mode", yes_no(settings.respect_silent_mode()).into()),
        ("Play over other media", yes_no(settings.play_over_other_media()).into()),
        ("Auto-load save", yes_no(settings.auto_load_save()).into()),
        ("Skin opacity", format!("{:.2}", settings.translucent_controller_skin_opacity())),
        (
            "Alt representations",
            yes_no(settings.is_alt_representations_enabled()).into(),
        ),
        ("Rewind", yes_no(settings.is_rewind_enabled()).into()),
        ("Rewind interval", format!("{}s", settings.rewind_timer_interval())),
        ("Fast forward speed", format!("{}x", settings.fast_forward_speed())),
        (
            "Unsafe fast forward speeds",
            yes_no(settings.is_unsafe_fast_forward_speeds_enabled()).into(),
        ),
        ("Screenshot scale", settings.screenshot_image_scale().to_string()),
        ("Shortcuts mode", settings.game_shortcuts_mode().raw().to_string()),
        ("Syncing service", syncing.to_string()),
        ("Debug mode", yes_no(settings.is_debug_mode_enabled()).into()),
    ];
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(label, value)| format!("{label:<width$}  {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
