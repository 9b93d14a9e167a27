use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::stats::display_label;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Filtered table (central panel, browser variant)
// ---------------------------------------------------------------------------

/// Render the filtered rows as a striped table in source column order.
pub fn table_view(ui: &mut Ui, state: &AppState) {
    let Some(table) = &state.table else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a rankings CSV to browse programs  (File → Open…)");
        });
        return;
    };

    if state.visible.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No programs match the current filters.");
        });
        return;
    }

    egui::ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .columns(Column::auto().at_least(90.0), table.columns.len())
            .header(22.0, |mut header| {
                for column in &table.columns {
                    header.col(|ui| {
                        ui.strong(display_label(column));
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, state.visible.len(), |mut row| {
                    let program = &table.rows[state.visible[row.index()]];
                    for column in &table.columns {
                        row.col(|ui| {
                            let text = program
                                .cell(column)
                                .map(|cell| cell.to_string())
                                .unwrap_or_default();
                            ui.label(text);
                        });
                    }
                });
            });
    });
}
