use std::sync::Arc;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use padel_explorer::data::loader::load_file;
use padel_explorer::data::{Rating, SortDirection, SortField};
use padel_explorer::state::{AppState, Selection, ViewMode};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters & Sorting");
    ui.separator();

    if state.table.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    let mut changed = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Search & overall ----
            ui.strong("Search & Overall Rating");
            changed |= ui
                .add(
                    egui::TextEdit::singleline(&mut state.name_search)
                        .hint_text("Enter racket name..."),
                )
                .changed();
            if let Some(sel) = state.ratings.get_mut(&Rating::Overall) {
                changed |= int_range(ui, Rating::Overall.label(), sel);
            }
            ui.separator();

            // ---- Price ----
            ui.strong("Price Range");
            match &mut state.price {
                Some(sel) => changed |= price_range(ui, sel),
                None => {
                    ui.label(RichText::new("No prices in this dataset").italics());
                }
            }
            changed |= ui
                .checkbox(&mut state.include_missing_price, "Include rackets without price")
                .changed();
            ui.separator();

            // ---- Performance attributes ----
            ui.strong("Performance Attributes");
            for rating in Rating::ALL.into_iter().filter(|r| *r != Rating::Overall) {
                if let Some(sel) = state.ratings.get_mut(&rating) {
                    changed |= int_range(ui, rating.label(), sel);
                }
            }
            ui.separator();

            // ---- Sorting ----
            ui.strong("Sort by");
            egui::ComboBox::from_id_salt("sort_by")
                .selected_text(state.sort.field.column())
                .show_ui(ui, |ui: &mut Ui| {
                    for field in SortField::ALL {
                        changed |= ui
                            .selectable_value(&mut state.sort.field, field, field.column())
                            .changed();
                    }
                });
            ui.horizontal(|ui: &mut Ui| {
                changed |= ui
                    .radio_value(&mut state.sort.direction, SortDirection::Descending, "desc")
                    .changed();
                changed |= ui
                    .radio_value(&mut state.sort.direction, SortDirection::Ascending, "asc")
                    .changed();
            });
            ui.separator();

            if ui.button("Reset filters").clicked() {
                state.reset_filters();
            }
        });

    // Recompute the view only after an actual control change.
    if changed {
        state.refresh();
    }
}

/// Min/max slider pair for an integer rating. Keeps `min <= max`.
fn int_range(ui: &mut Ui, label: &str, sel: &mut Selection<i64>) -> bool {
    let bounds = sel.bounds.min..=sel.bounds.max;
    ui.label(label);
    let min_changed = ui
        .add(egui::Slider::new(&mut sel.value.min, bounds.clone()).text("min"))
        .changed();
    let max_changed = ui
        .add(egui::Slider::new(&mut sel.value.max, bounds).text("max"))
        .changed();
    if min_changed && sel.value.min > sel.value.max {
        sel.value.max = sel.value.min;
    }
    if max_changed && sel.value.max < sel.value.min {
        sel.value.min = sel.value.max;
    }
    min_changed || max_changed
}

/// Min/max slider pair for price, stepping in whole euros.
fn price_range(ui: &mut Ui, sel: &mut Selection<f64>) -> bool {
    let bounds = sel.bounds.min..=sel.bounds.max;
    let min_changed = ui
        .add(
            egui::Slider::new(&mut sel.value.min, bounds.clone())
                .step_by(1.0)
                .prefix("€")
                .text("min"),
        )
        .changed();
    let max_changed = ui
        .add(
            egui::Slider::new(&mut sel.value.max, bounds)
                .step_by(1.0)
                .prefix("€")
                .text("max"),
        )
        .changed();
    if min_changed && sel.value.min > sel.value.max {
        sel.value.max = sel.value.min;
    }
    if max_changed && sel.value.max < sel.value.min {
        sel.value.min = sel.value.max;
    }
    min_changed || max_changed
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(table) = &state.table {
            ui.label(format!(
                "{} rackets loaded, {} shown",
                table.len(),
                state.view.summary.shown_count
            ));
            ui.separator();
            ui.selectable_value(&mut state.view_mode, ViewMode::Cards, "Cards");
            ui.selectable_value(&mut state.view_mode, ViewMode::Table, "Table");
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Replace the window's table with one picked by the user.
///
/// This bypasses the session cache, which only ever holds the start-up file.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open racket catalog")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match load_file(&path) {
            Ok(table) => state.set_table(Arc::new(table)),
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                state.set_load_error(&e);
            }
        }
    }
}
