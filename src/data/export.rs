use std::io;
use std::sync::Arc;

use thiserror::Error;

use super::model::{CellValue, RankingTable};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("serializing CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("finishing CSV output: {0}")]
    Io(#[from] io::Error),
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

/// Serialize the selected rows to UTF-8 CSV bytes: header in table column
/// order, no index column, missing cells as empty fields. Output is
/// deterministic, so identical content always yields identical bytes, and
/// re-parsing the bytes reproduces the filtered table.
pub fn to_csv_bytes(table: &RankingTable, indices: &[usize]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&table.columns)?;

    for &idx in indices {
        let row = &table.rows[idx];
        let record: Vec<String> = table
            .columns
            .iter()
            .map(|column| {
                row.cell(column)
                    .map(CellValue::csv_field)
                    .unwrap_or_default()
            })
            .collect();
        writer.write_record(&record)?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(bytes)
}

// ---------------------------------------------------------------------------
// ExportCache – serialize once per filtered selection
// ---------------------------------------------------------------------------

/// Memoizes the exported bytes for the most recent (table, selection) pair,
/// so repeated renders of an unchanged filter state reuse the buffer instead
/// of re-serializing. Tables are immutable after load, which makes the Arc
/// identity plus the index subset a faithful content key.
#[derive(Debug, Default)]
pub struct ExportCache {
    entry: Option<CacheEntry>,
}

#[derive(Debug)]
struct CacheEntry {
    table: Arc<RankingTable>,
    indices: Vec<usize>,
    bytes: Vec<u8>,
}

impl ExportCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// CSV bytes for the given selection, serialized at most once per
    /// distinct selection.
    pub fn bytes(
        &mut self,
        table: &Arc<RankingTable>,
        indices: &[usize],
    ) -> Result<&[u8], ExportError> {
        let fresh = matches!(
            &self.entry,
            Some(entry) if Arc::ptr_eq(&entry.table, table) && entry.indices == indices
        );
        if !fresh {
            let bytes = to_csv_bytes(table, indices)?;
            self.entry = Some(CacheEntry {
                table: Arc::clone(table),
                indices: indices.to_vec(),
                bytes,
            });
        }
        Ok(self
            .entry
            .as_ref()
            .map(|entry| entry.bytes.as_slice())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{apply_filters, ColumnFilter};
    use crate::data::loader::read_table;
    use crate::data::model::COUNTRY;

    const SAMPLE: &str = "\
education_level,country,university,program,ranking,qs_overall_score
Masters,USA,MIT,CS,1,95.4
Masters,USA,MIT,EE,1,
Bachelors,UK,Oxford,Law,3,88";

    fn sample() -> RankingTable {
        read_table(SAMPLE.as_bytes()).unwrap()
    }

    #[test]
    fn export_round_trips_through_the_loader() {
        let table = sample();
        let indices = apply_filters(&table, &[ColumnFilter::value(COUNTRY, "USA")]);
        let bytes = to_csv_bytes(&table, &indices).unwrap();

        let reparsed = read_table(bytes.as_slice()).unwrap();
        assert_eq!(reparsed.columns, table.columns);
        assert_eq!(reparsed.len(), 2);
        assert_eq!(reparsed.rows[0], table.rows[indices[0]]);
        assert_eq!(reparsed.rows[1], table.rows[indices[1]]);
    }

    #[test]
    fn export_is_deterministic() {
        let table = sample();
        let indices: Vec<usize> = (0..table.len()).collect();
        let first = to_csv_bytes(&table, &indices).unwrap();
        let second = to_csv_bytes(&table, &indices).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_cells_export_as_empty_fields() {
        let table = sample();
        let bytes = to_csv_bytes(&table, &[1]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.ends_with("Masters,USA,MIT,EE,1,\n"));
    }

    #[test]
    fn exporting_no_rows_yields_just_the_header() {
        let table = sample();
        let bytes = to_csv_bytes(&table, &[]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text,
            "education_level,country,university,program,ranking,qs_overall_score\n"
        );
    }

    #[test]
    fn cache_reuses_bytes_for_unchanged_selection() {
        let table = Arc::new(sample());
        let indices = vec![0, 2];
        let mut cache = ExportCache::new();

        let first = cache.bytes(&table, &indices).unwrap().to_vec();
        let second = cache.bytes(&table, &indices).unwrap().to_vec();
        assert_eq!(first, second);

        let narrowed = cache.bytes(&table, &[0]).unwrap();
        assert_ne!(first, narrowed);
    }
}
