// main.rs - Game of Life window: eframe owns the window from start-up to teardown

use anyhow::{Context, anyhow};
use conway::GameConfig;
use eframe::egui;

mod logging;
mod painter;
mod ui;

use ui::LifeApp;

const WINDOW_TITLE: &str = "Game of Life";

fn main() -> anyhow::Result<()> {
    logging::init();

    let config = GameConfig::DEFAULT;
    let app = LifeApp::new(&config).context("could not build the starting grid")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size())
            .with_resizable(false),
        ..Default::default()
    };

    tracing::info!(
        rows = config.n_rows,
        cols = config.n_cols,
        cell_size = config.cell_size,
        fps = config.fps,
        "opening window"
    );

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|e| {
        tracing::error!("window start-up failed: {e}");
        anyhow!("could not open the {WINDOW_TITLE} window: {e}")
    })
}
