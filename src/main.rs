use std::path::{Path, PathBuf};

use anyhow::Result;
use dino_facts::app::DinoFactsApp;
use dino_facts::config::{config_path, load_config};
use dino_facts::data::loader::load_file;
use dino_facts::data::sample::sample_catalog;
use dino_facts::state::AppState;
use dino_facts::DinosaurCatalog;
use eframe::egui;

/// Open the requested dataset, falling back to the embedded sample.
///
/// The second element carries the load error to show in the status bar.
fn initial_catalog(data_path: Option<&Path>) -> Result<(DinosaurCatalog, Option<String>)> {
    let mut status = None;
    if let Some(path) = data_path {
        match load_file(path) {
            Ok(catalog) => return Ok((catalog, None)),
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                status = Some(format!("Error: {e:#}"));
            }
        }
    }
    Ok((sample_catalog()?, status))
}

fn main() -> Result<()> {
    env_logger::init();

    let config = load_config(&config_path())?;
    let data_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or(config.data_path);

    let (catalog, status) = initial_catalog(data_path.as_deref())?;
    let mut state = AppState::new(&config.query);
    state.set_catalog(catalog);
    state.status_message = status;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Dino Facts – Dinosaur Viewer",
        options,
        Box::new(|_cc| Ok(Box::new(DinoFactsApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("running viewer: {e}"))
}
