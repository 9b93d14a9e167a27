use std::path::Path;

use eframe::egui;
use uniscope::app::BrowserApp;
use uniscope::config::{AppConfig, CONFIG_FILE};

fn main() -> eframe::Result {
    env_logger::init();

    let config = AppConfig::load_or_default(Path::new(CONFIG_FILE));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Uniscope – Program Rankings",
        options,
        Box::new(move |_cc| Ok(Box::new(BrowserApp::new(&config)))),
    )
}
