//! Ignited command-line front end.
//!
//! Usage: `ignited-app [config.toml] <command>` where command is one of
//! `settings`, `features`, `patrons` or
//! `skin <system> <orientation> <display-type> [game-id]`.

mod patrons;
mod views;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};

use ignited_features::{
    FeatureContainer, FeatureStore, GameScreenshotOptions, GameplayFeatures, GbcFeatures,
    N64Features, SaveStateRewindOptions, UserInterfaceFeatures,
};
use ignited_settings::Settings;
use ignited_skin::{MemoryCatalog, MemoryLibrary, SkinCatalog};
use ignited_store::{EventBus, FileStore};
use ignited_types::{AppConfig, DisplayType, Orientation, SkinScope, System, Traits};

use patrons::PatronsModel;

const DEFAULT_CONFIG: &str = "ignited.toml";
const USAGE: &str =
    "usage: ignited-app [config.toml] <settings|features|patrons|skin <system> <orientation> <display-type> [game-id]>";

fn main() -> Result<()> {
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let config_path = if args.first().is_some_and(|a| a.ends_with(".toml")) {
        PathBuf::from(args.remove(0))
    } else {
        PathBuf::from(DEFAULT_CONFIG)
    };

    let config = AppConfig::load(&config_path)
        .with_context(|| format!("loading config '{}'", config_path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_filter))
        .init();
    log::info!("Using config '{}'", config_path.display());

    let Some(command) = args.first() else {
        bail!(USAGE);
    };

    match command.as_str() {
        "patrons" => show_patrons(&config.patrons_path),
        "settings" => {
            let settings = open_settings(&config)?;
            println!("{}", views::render_settings(&settings));
            Ok(())
        },
        "features" => {
            let settings = open_settings(&config)?;
            show_features(&settings)
        },
        "skin" => {
            let settings = open_settings(&config)?;
            show_skin(&settings, &args[1..])
        },
        other => bail!("unknown command '{other}'\n{USAGE}"),
    }
}

fn open_settings(config: &AppConfig) -> Result<Settings> {
    let store = FileStore::open(&config.store_path)
        .with_context(|| format!("opening store '{}'", config.store_path.display()))?;
    let catalog = MemoryCatalog::load(&config.catalog_path).unwrap_or_else(|e| {
        log::warn!("Skin catalog unavailable, continuing without skins: {e}");
        MemoryCatalog::new(Vec::new())
    });
    let library = MemoryLibrary::load(&config.library_path)
        .with_context(|| format!("loading library '{}'", config.library_path.display()))?;
    log::info!(
        "Loaded {} skins and {} games",
        catalog.len(),
        library.games()?.len()
    );

    let catalog: Arc<dyn SkinCatalog> = Arc::new(catalog);
    Ok(Settings::new(
        Arc::new(store),
        catalog,
        Arc::new(library),
        Arc::new(EventBus::new()),
    )?)
}

fn show_patrons(path: &Path) -> Result<()> {
    let mut model = PatronsModel::new();
    model.load(path);
    match (model.patrons(), model.error()) {
        (Some(patrons), _) => {
            println!("{}", views::render_patrons(patrons));
            Ok(())
        },
        (None, Some(e)) => bail!("unable to load patrons: {e}"),
        (None, None) => Ok(()),
    }
}

fn show_features(settings: &Settings) -> Result<()> {
    let features = FeatureStore::new(settings.store().as_ref(), settings.events().as_ref());

    let ui = UserInterfaceFeatures::default();
    println!("{}\n", views::render_user_interface_features(&ui, &features));

    let gameplay = GameplayFeatures::default();
    let gbc = GbcFeatures::default();
    let n64 = N64Features::default();
    let containers: [&dyn FeatureContainer; 3] = [&gameplay, &gbc, &n64];
    for container in containers {
        println!("{}\n", views::render_features(container, &features));
    }

    if features.is_enabled(gameplay.game_screenshots()) {
        let options = GameScreenshotOptions::load(&features, gameplay.game_screenshots())?;
        println!("{}\n", views::render_screenshot_options(&options));
    }
    if features.is_enabled(gameplay.save_state_rewind()) {
        let options = SaveStateRewindOptions::load(&features, gameplay.save_state_rewind())?;
        println!("{}", views::render_rewind_options(&options));
    }
    Ok(())
}

fn show_skin(settings: &Settings, args: &[String]) -> Result<()> {
    let [system, orientation, display_type, rest @ ..] = args else {
        bail!(USAGE);
    };
    let system: System = system.parse()?;
    let orientation: Orientation = orientation.parse()?;
    let display_type: DisplayType = display_type.parse()?;
    let traits = Traits::iphone(display_type, orientation);

    let scope = match rest.first() {
        Some(game) => SkinScope::Game {
            identifier: game.clone(),
            system: Some(system),
        },
        None => SkinScope::System(system),
    };

    match settings.preferred_controller_skin(&scope, &traits) {
        Some(skin) => println!("{scope} ({traits}): {} [{}]", skin.name, skin.identifier),
        None => println!("{scope} ({traits}): no controller skin available"),
    }
    Ok(())
}
