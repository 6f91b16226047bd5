//! Prints a text preview of screen definitions.
//!
//! With file arguments each file is loaded and previewed. Without arguments every
//! definition in the configured directory is previewed.

use std::{env, path::Path};

use anyhow::Context;
use steel_gui::{CONFIG_PATH, DefinitionStore, GuiConfig, GuiDefinition, logger, preview};
use steel_gui_core::ScreenRegistry;
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    let config = GuiConfig::load_or_create(Path::new(CONFIG_PATH))
        .with_context(|| format!("loading {CONFIG_PATH}"))?;
    logger::init(&config.log_level).context("installing logger")?;

    let registry = ScreenRegistry::vanilla();
    let paths: Vec<String> = env::args().skip(1).collect();

    if paths.is_empty() {
        let store = DefinitionStore::load_dir(&config.definitions_dir)?;
        if store.is_empty() {
            warn!(
                "No definitions found in {}",
                config.definitions_dir.display()
            );
        }
        for name in store.names() {
            let gui = store.build(name, &registry, &config)?;
            info!("Previewing {name}");
            println!("{}", preview::render(&gui));
        }
        return Ok(());
    }

    for path in paths {
        let gui = GuiDefinition::load(Path::new(&path))
            .and_then(|definition| definition.build(&registry, &config))
            .with_context(|| format!("building {path}"))?;
        info!("Previewing {path}");
        println!("{}", preview::render(&gui));
    }
    Ok(())
}
