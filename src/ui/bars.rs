use eframe::egui::{self, Ui};
use egui_plot::{Bar, BarChart, Plot};

use crate::color::MetricColors;
use crate::data::model::{PROGRAM, RANKING, UNIVERSITY};
use crate::data::stats::metric_summary;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// University stats (central panel, dashboard variant)
// ---------------------------------------------------------------------------

/// Render the representative row's QS metrics as horizontal percentage bars.
/// Bar length is the raw score against a 0–100 axis; out-of-range scores
/// simply overflow the axis. Metrics without a score get a "no data" line
/// instead of a bar.
pub fn university_stats(ui: &mut Ui, state: &AppState, colors: &MetricColors) {
    if state.table.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a rankings CSV to view university stats  (File → Open…)");
        });
        return;
    }

    let Some(row) = state.representative() else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No data available for this selection.");
        });
        return;
    };

    ui.heading(row.text(UNIVERSITY).unwrap_or("Unknown university"));
    match row.number(RANKING) {
        Some(rank) => ui.label(format!("World ranking: #{rank:.0}")),
        None => ui.label("World ranking: n/a"),
    };
    if let Some(program) = row.text(PROGRAM) {
        ui.label(format!("Best-ranked program: {program}"));
    }
    ui.separator();

    let metrics = metric_summary(row);
    let slots = metrics.len();

    // First metric on top: slot (slots - 1 - i) on the value axis.
    let chart_bars: Vec<Bar> = metrics
        .iter()
        .enumerate()
        .filter_map(|(i, metric)| {
            let value = metric.value?;
            Some(
                Bar::new((slots - 1 - i) as f64, value)
                    .name(&metric.label)
                    .fill(colors.color_for(metric.column))
                    .width(0.6),
            )
        })
        .collect();

    let labels: Vec<String> = metrics.iter().rev().map(|m| m.label.clone()).collect();

    Plot::new("university_stats")
        .height(ui.available_height() * 0.55)
        .x_axis_label("Score")
        .include_x(0.0)
        .include_x(100.0)
        .y_axis_min_width(190.0)
        .y_axis_formatter(move |mark, _range| {
            let slot = mark.value.round();
            if slot < 0.0 || (mark.value - slot).abs() > 1e-6 {
                return String::new();
            }
            labels.get(slot as usize).cloned().unwrap_or_default()
        })
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(chart_bars).horizontal());
        });

    ui.separator();

    egui::Grid::new("metric_values")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui: &mut Ui| {
            for metric in &metrics {
                ui.colored_label(colors.color_for(metric.column), &metric.label);
                match metric.value {
                    Some(value) => ui.label(format!("{value:.1}")),
                    None => ui.label("no data"),
                };
                ui.end_row();
            }
        });
}
