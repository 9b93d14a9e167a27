use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::METRIC_COLUMNS;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Hue step close to the golden angle, so consecutive entries land far
/// apart on the wheel regardless of palette size.
const HUE_STEP: f32 = 137.5;

/// Generates `n` distinct colours by walking the hue wheel in golden-angle
/// steps from a blue anchor, alternating lightness so neighbouring bars
/// also differ in tone.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = (210.0 + i as f32 * HUE_STEP) % 360.0;
            let lightness = if i % 2 == 0 { 0.45 } else { 0.58 };
            let hsl = Hsl::new(hue, 0.68, lightness);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: metric column → Color32
// ---------------------------------------------------------------------------

/// Assigns each QS metric column a stable distinct colour for its score bar.
#[derive(Debug, Clone)]
pub struct MetricColors {
    mapping: BTreeMap<&'static str, Color32>,
    fallback: Color32,
}

impl Default for MetricColors {
    fn default() -> Self {
        let palette = generate_palette(METRIC_COLUMNS.len());
        let mapping: BTreeMap<&'static str, Color32> = METRIC_COLUMNS
            .iter()
            .copied()
            .zip(palette)
            .collect();

        MetricColors {
            mapping,
            fallback: Color32::GRAY,
        }
    }
}

impl MetricColors {
    /// Look up the bar colour for a metric column.
    pub fn color_for(&self, column: &str) -> Color32 {
        self.mapping
            .get(column)
            .copied()
            .unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size_and_distinct_entries() {
        let palette = generate_palette(METRIC_COLUMNS.len());
        assert_eq!(palette.len(), METRIC_COLUMNS.len());
        let mut unique = palette.clone();
        unique.sort_by_key(|c| (c.r(), c.g(), c.b()));
        unique.dedup();
        assert_eq!(unique.len(), palette.len());
    }

    #[test]
    fn every_metric_has_a_colour() {
        let colors = MetricColors::default();
        for column in METRIC_COLUMNS {
            assert_ne!(colors.color_for(column), colors.fallback);
        }
        assert_eq!(colors.color_for("not_a_metric"), colors.fallback);
    }
}
