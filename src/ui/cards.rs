use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use padel_explorer::data::{Racket, RacketTable, Rating, Summary, ValueRange};
use padel_explorer::state::{AppState, ViewMode};

use super::format::{format_avg_price, format_count, format_price, PRICE_UNAVAILABLE};
use crate::color::rating_color;

const CARD_WIDTH: f32 = 240.0;
const EMPTY_MESSAGE: &str = "No rackets match your current filters. Try adjusting the filter criteria.";

// ---------------------------------------------------------------------------
// Results (central panel)
// ---------------------------------------------------------------------------

/// Render metrics and the matching rackets.
pub fn results(ui: &mut Ui, state: &AppState, cards_per_row: usize) {
    let Some(table) = &state.table else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No catalog loaded  (File → Open…)");
        });
        return;
    };

    ui.heading("🎾 Padel Racket Explorer");
    ui.label("Find your perfect padel racket from our comprehensive database");
    ui.separator();

    metrics(ui, &state.view.summary);
    ui.separator();

    if state.view.is_empty() {
        ui.colored_label(Color32::from_rgb(204, 136, 0), EMPTY_MESSAGE);
        return;
    }

    ui.strong(format!(
        "🎾 Rackets ({} found)",
        format_count(state.view.summary.shown_count)
    ));

    match state.view_mode {
        ViewMode::Cards => card_grid(ui, state, table, cards_per_row),
        ViewMode::Table => racket_table(ui, state, table),
    }
}

fn metrics(ui: &mut Ui, summary: &Summary) {
    ui.columns(4, |cols: &mut [Ui]| {
        metric(&mut cols[0], "Total Rackets", format_count(summary.shown_count));
        metric(&mut cols[1], "With Price", format_count(summary.with_price_count));
        metric(&mut cols[2], "Without Price", format_count(summary.without_price_count));
        if summary.shown_count > 0 {
            metric(&mut cols[3], "Avg Price", format_avg_price(summary.avg_price));
        }
    });
}

fn metric(ui: &mut Ui, label: &str, value: String) {
    ui.label(RichText::new(label).small());
    ui.label(RichText::new(value).size(24.0).strong());
}

// ---------------------------------------------------------------------------
// Card grid
// ---------------------------------------------------------------------------

fn card_grid(ui: &mut Ui, state: &AppState, table: &RacketTable, cards_per_row: usize) {
    let overall_bounds = state.overall_bounds();
    let per_row = cards_per_row.max(1);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            egui::Grid::new("racket_cards")
                .num_columns(per_row)
                .spacing([12.0, 12.0])
                .show(ui, |ui: &mut Ui| {
                    for (i, racket) in state.view.rackets(table).enumerate() {
                        racket_card(ui, i, racket, overall_bounds);
                        if (i + 1) % per_row == 0 {
                            ui.end_row();
                        }
                    }
                });
        });
}

fn racket_card(ui: &mut Ui, index: usize, racket: &Racket, overall_bounds: Option<ValueRange<i64>>) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.set_width(CARD_WIDTH);
        ui.vertical(|ui: &mut Ui| {
            ui.label(RichText::new(racket.display_name()).size(18.0).strong());

            ui.label(
                RichText::new(format!(" Overall: {} ", racket.overall))
                    .strong()
                    .color(Color32::WHITE)
                    .background_color(rating_color(racket.overall, overall_bounds)),
            );

            match racket.price {
                Some(price) => ui.label(
                    RichText::new(format_price(price))
                        .size(20.0)
                        .strong()
                        .color(Color32::from_rgb(39, 174, 96)),
                ),
                None => ui.label(RichText::new(PRICE_UNAVAILABLE).italics().color(Color32::GRAY)),
            };

            egui::Grid::new(("racket_stats", index))
                .num_columns(2)
                .show(ui, |ui: &mut Ui| {
                    for rating in Rating::ALL.into_iter().filter(|r| *r != Rating::Overall) {
                        ui.strong(format!("{}:", rating.label()));
                        ui.label(racket.rating(rating).to_string());
                        ui.end_row();
                    }
                });
        });
    });
}

// ---------------------------------------------------------------------------
// Compact table
// ---------------------------------------------------------------------------

fn racket_table(ui: &mut Ui, state: &AppState, table: &RacketTable) {
    const HEADERS: [&str; 8] = [
        "Name",
        "Overall",
        "Price",
        "Power",
        "Control",
        "Rebound",
        "Omgang",
        "Sweet Spot",
    ];

    let rows: Vec<&Racket> = state.view.rackets(table).collect();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::remainder().at_least(160.0))
        .columns(Column::auto().at_least(60.0), HEADERS.len() - 1)
        .header(20.0, |mut header| {
            for title in HEADERS {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, rows.len(), |mut row| {
                let racket = rows[row.index()];
                row.col(|ui: &mut Ui| {
                    ui.label(racket.display_name());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(racket.overall.to_string());
                });
                row.col(|ui: &mut Ui| {
                    match racket.price {
                        Some(price) => ui.label(format_price(price)),
                        None => ui.label(RichText::new("—").color(Color32::GRAY)),
                    };
                });
                for rating in [
                    Rating::Power,
                    Rating::Control,
                    Rating::Rebound,
                    Rating::Omgang,
                    Rating::Sweetspot,
                ] {
                    row.col(|ui: &mut Ui| {
                        ui.label(racket.rating(rating).to_string());
                    });
                }
            });
        });
}
