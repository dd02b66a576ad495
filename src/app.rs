use eframe::egui;

use padel_explorer::config::AppConfig;
use padel_explorer::data::cache::session_table;
use padel_explorer::state::AppState;

use crate::ui::{cards, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PadelExplorerApp {
    pub state: AppState,
    cards_per_row: usize,
}

impl PadelExplorerApp {
    /// Build the app and load the configured catalog once for the session.
    pub fn new(config: &AppConfig) -> Self {
        let mut state = AppState::new(config.default_sort);
        match session_table(&config.data_path) {
            Ok(table) => state.set_table(table),
            Err(e) => {
                log::error!("Failed to load {}: {e}", config.data_path.display());
                state.set_load_error(&e);
            }
        }
        Self {
            state,
            cards_per_row: config.cards_per_row,
        }
    }
}

impl eframe::App for PadelExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: metrics and results ----
        egui::CentralPanel::default().show(ctx, |ui| {
            cards::results(ui, &self.state, self.cards_per_row);
        });
    }
}
