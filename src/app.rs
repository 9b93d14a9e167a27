use eframe::egui;

use crate::config::AppConfig;
use crate::data::export::ExportCache;
use crate::data::filter::BROWSER_CASCADE;
use crate::state::AppState;
use crate::ui::{panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation – browser variant
// ---------------------------------------------------------------------------

/// Cascading filters on the left, the filtered table in the middle, and a
/// CSV download in the top bar.
pub struct BrowserApp {
    pub state: AppState,
    pub export: ExportCache,
}

impl BrowserApp {
    pub fn new(config: &AppConfig) -> Self {
        let mut state = AppState::new(&BROWSER_CASCADE);
        if let Some(path) = &config.data_path {
            state.open(path);
        }
        Self {
            state,
            export: ExportCache::new(),
        }
    }
}

impl eframe::App for BrowserApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::browser_top_bar(ui, &mut self.state, &mut self.export);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: filtered table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            table::table_view(ui, &self.state);
        });
    }
}
