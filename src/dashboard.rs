use eframe::egui;

use crate::color::MetricColors;
use crate::config::AppConfig;
use crate::data::filter::DASHBOARD_CASCADE;
use crate::state::AppState;
use crate::ui::{bars, panels};

// ---------------------------------------------------------------------------
// eframe App implementation – dashboard variant
// ---------------------------------------------------------------------------

/// Per-university statistics: pick a country, level, and university, and the
/// best-ranked matching program's QS scores render as percentage bars.
pub struct DashboardApp {
    pub state: AppState,
    pub colors: MetricColors,
}

impl DashboardApp {
    pub fn new(config: &AppConfig) -> Self {
        let mut state = AppState::new(&DASHBOARD_CASCADE);
        if let Some(path) = &config.data_path {
            state.open(path);
        }
        Self {
            state,
            colors: MetricColors::default(),
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::dashboard_top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: score bars ----
        egui::CentralPanel::default().show(ctx, |ui| {
            bars::university_stats(ui, &self.state, &self.colors);
        });
    }
}
