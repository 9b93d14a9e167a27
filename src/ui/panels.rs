use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::export::ExportCache;
use crate::data::stats::display_label;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – cascading filter selectors
// ---------------------------------------------------------------------------

/// Render the cascade as one combo box per stage. Options always come from
/// the table as narrowed by the stages above, so the selectors can never
/// offer a combination with no matching rows.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    if state.table.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    // Clone the stages so we can mutate state once the loop is done.
    let stages = state.stages.clone();
    let mut pending: Option<(usize, Option<String>)> = None;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (k, stage) in stages.iter().enumerate() {
                ui.strong(display_label(stage.column));

                let selected_text = stage
                    .selection
                    .clone()
                    .unwrap_or_else(|| "All".to_string());
                egui::ComboBox::from_id_salt(stage.column)
                    .selected_text(selected_text)
                    .width(ui.available_width() - 8.0)
                    .show_ui(ui, |ui: &mut Ui| {
                        if ui
                            .selectable_label(stage.selection.is_none(), "All")
                            .clicked()
                        {
                            pending = Some((k, None));
                        }
                        for option in &stage.options {
                            let is_selected =
                                stage.selection.as_deref() == Some(option.as_str());
                            if ui.selectable_label(is_selected, option).clicked() {
                                pending = Some((k, Some(option.clone())));
                            }
                        }
                    });
                ui.add_space(8.0);
            }
        });

    if let Some((stage, selection)) = pending {
        state.select(stage, selection);
    }
}

// ---------------------------------------------------------------------------
// Top bars
// ---------------------------------------------------------------------------

/// Menu / toolbar for the browser variant, with the CSV download action.
pub fn browser_top_bar(ui: &mut Ui, state: &mut AppState, export: &mut ExportCache) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        let counts = state
            .table
            .as_ref()
            .map(|table| (table.len(), state.visible.len()));
        if let Some((total, matching)) = counts {
            ui.label(format!("{total} programs loaded, {matching} matching"));
            ui.separator();
            if ui.button("Download CSV").clicked() {
                save_csv_dialog(state, export);
            }
        }

        status_label(ui, state);
    });
}

/// Menu / toolbar for the dashboard variant.
pub fn dashboard_top_bar(ui: &mut Ui, state: &mut AppState) {
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
                "{} programs loaded, {} matching",
                table.len(),
                state.visible.len()
            ));
        }

        status_label(ui, state);
    });
}

fn status_label(ui: &mut Ui, state: &AppState) {
    if let Some(msg) = &state.status_message {
        ui.label(RichText::new(msg).color(Color32::RED));
    }
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open rankings data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.open(&path);
    }
}

fn save_csv_dialog(state: &mut AppState, export: &mut ExportCache) {
    let Some(table) = state.table.clone() else {
        return;
    };
    let Some(path) = rfd::FileDialog::new()
        .set_title("Save filtered programs")
        .set_file_name("filtered_programs.csv")
        .add_filter("CSV", &["csv"])
        .save_file()
    else {
        return;
    };

    let written = match export.bytes(&table, &state.visible) {
        Ok(bytes) => std::fs::write(&path, bytes).map_err(anyhow::Error::from),
        Err(e) => Err(anyhow::Error::from(e)),
    };
    match written {
        Ok(()) => {
            log::info!("Wrote {} rows to {}", state.visible.len(), path.display());
            state.status_message = None;
        }
        Err(e) => {
            log::error!("Failed to export CSV: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
