mod app;
mod color;
mod ui;

use app::PadelExplorerApp;
use eframe::egui;
use padel_explorer::config::AppConfig;

fn main() -> eframe::Result {
    env_logger::init();

    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Ignoring settings, using defaults: {e:#}");
        AppConfig::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Padel Racket Explorer",
        options,
        Box::new(move |_cc| Ok(Box::new(PadelExplorerApp::new(&config)))),
    )
}
