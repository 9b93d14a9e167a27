use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "uniscope.json";

/// Optional startup configuration. Missing file means defaults; a malformed
/// file is logged and ignored so a bad config never blocks the app.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Rankings CSV to load on startup.
    pub data_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn load_or_default(path: &Path) -> AppConfig {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(_) => return AppConfig::default(),
        };
        match serde_json::from_str(&text) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring malformed config {}: {e}", path.display());
                AppConfig::default()
            }
        }
    }
}
