use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use thiserror::Error;

use super::model::{CellValue, ProgramRow, RankingTable, NUMERIC_COLUMNS};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("parsing CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV file has no header row")]
    EmptyHeader,
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Parse a rankings table from any CSV reader. The first record is the
/// header; its order is preserved in [`RankingTable::columns`].
///
/// Cells in the known numeric columns (`ranking` plus the ten QS scores) are
/// coerced best-effort: unparseable or empty values become
/// [`CellValue::Missing`] rather than failing the load. All other columns
/// load as text.
pub fn read_table<R: Read>(reader: R) -> Result<RankingTable, LoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let columns: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    if columns.is_empty() || columns.iter().all(|c| c.is_empty()) {
        return Err(LoadError::EmptyHeader);
    }

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;

        let mut cells = BTreeMap::new();
        for (idx, raw) in record.iter().enumerate() {
            let Some(column) = columns.get(idx) else {
                continue;
            };
            cells.insert(column.clone(), parse_cell(column, raw));
        }
        rows.push(ProgramRow { cells });
    }

    Ok(RankingTable { columns, rows })
}

/// Load a rankings table from a CSV file on disk.
pub fn load_table(path: &Path) -> Result<RankingTable, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_table(BufReader::new(file))
}

fn parse_cell(column: &str, raw: &str) -> CellValue {
    let raw = raw.trim();
    if raw.is_empty() {
        return CellValue::Missing;
    }
    if NUMERIC_COLUMNS.contains(&column) {
        match raw.parse::<f64>() {
            Ok(v) => CellValue::Number(v),
            Err(_) => CellValue::Missing,
        }
    } else {
        CellValue::Text(raw.to_string())
    }
}

// ---------------------------------------------------------------------------
// TableCache – load once per (path, mtime)
// ---------------------------------------------------------------------------

/// Memoizes loaded tables keyed by source path and modification time, so
/// repeated renders of the same dataset never re-read the disk. The cached
/// table is shared as an `Arc` and treated as immutable by all consumers;
/// a changed mtime invalidates the entry and reloads.
#[derive(Debug, Default)]
pub struct TableCache {
    entries: HashMap<PathBuf, (SystemTime, Arc<RankingTable>)>,
}

impl TableCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the table for `path`, reloading only when the file changed.
    pub fn load(&mut self, path: &Path) -> Result<Arc<RankingTable>, LoadError> {
        let modified = std::fs::metadata(path)
            .and_then(|m| m.modified())
            .map_err(|source| LoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        if let Some((stamp, table)) = self.entries.get(path) {
            if *stamp == modified {
                return Ok(Arc::clone(table));
            }
        }

        let table = Arc::new(load_table(path)?);
        self.entries
            .insert(path.to_path_buf(), (modified, Arc::clone(&table)));
        Ok(table)
    }
}
