use std::path::Path;
use std::sync::Arc;

use crate::data::filter::{run_cascade, CascadeStage};
use crate::data::loader::TableCache;
use crate::data::model::{ProgramRow, RankingTable};
use crate::data::stats;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering. Both variants (browser and
/// dashboard) use the same state machine and differ only in their cascade
/// column order.
pub struct AppState {
    /// Filter columns in cascade order.
    cascade: &'static [&'static str],

    /// Memoized table loads (per path + mtime).
    cache: TableCache,

    /// Loaded dataset (None until a file is opened). Immutable once loaded.
    pub table: Option<Arc<RankingTable>>,

    /// Evaluated cascade stages: per-stage options and surviving selection.
    pub stages: Vec<CascadeStage>,

    /// Indices of rows passing the current cascade (cached).
    pub visible: Vec<usize>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(cascade: &'static [&'static str]) -> Self {
        Self {
            cascade,
            cache: TableCache::new(),
            table: None,
            stages: Vec::new(),
            visible: Vec::new(),
            status_message: None,
        }
    }

    /// Load (or re-use the cached) table at `path` and reset the cascade.
    pub fn open(&mut self, path: &Path) {
        match self.cache.load(path) {
            Ok(table) => {
                log::info!(
                    "Loaded {} programs with columns {:?}",
                    table.len(),
                    table.columns
                );
                self.table = Some(table);
                self.stages.clear();
                self.status_message = None;
                self.refilter();
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Set one stage's selection (`None` = "All") and re-run the cascade.
    pub fn select(&mut self, stage: usize, selection: Option<String>) {
        if let Some(s) = self.stages.get_mut(stage) {
            s.selection = selection;
        }
        self.refilter();
    }

    /// Recompute stage options and visible rows from the immutable table.
    /// Every interaction goes through here; selections invalidated by an
    /// upstream change fall back to "All".
    pub fn refilter(&mut self) {
        let Some(table) = &self.table else {
            self.stages.clear();
            self.visible.clear();
            return;
        };
        let selections: Vec<Option<String>> = self
            .stages
            .iter()
            .map(|s| s.selection.clone())
            .collect();
        let result = run_cascade(table, self.cascade, &selections);
        self.stages = result.stages;
        self.visible = result.indices;
    }

    /// The stats row for the current selection (dashboard variant):
    /// best-ranked visible row, or `None` when nothing matches.
    pub fn representative(&self) -> Option<&ProgramRow> {
        let table = self.table.as_deref()?;
        stats::representative_row(table, &self.visible)
    }
}
