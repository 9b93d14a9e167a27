use std::cmp::Ordering;

use super::model::{ProgramRow, RankingTable, METRIC_COLUMNS, RANKING};

// ---------------------------------------------------------------------------
// Ranking sort
// ---------------------------------------------------------------------------

/// Sort row indices ascending by the numeric `ranking` column. Rows with a
/// missing ranking sort after every ranked row; ties keep their input order
/// (the sort is stable).
pub fn sort_by_ranking(table: &RankingTable, indices: &[usize]) -> Vec<usize> {
    let mut sorted = indices.to_vec();
    sorted.sort_by(|&a, &b| {
        match (table.rows[a].number(RANKING), table.rows[b].number(RANKING)) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
    sorted
}

// ---------------------------------------------------------------------------
// Representative row
// ---------------------------------------------------------------------------

/// The row summarizing a university when several programs match: the first
/// row by ranking order. `None` on an empty subset; callers render a
/// "no data available" state instead of failing.
pub fn representative_row<'a>(
    table: &'a RankingTable,
    indices: &[usize],
) -> Option<&'a ProgramRow> {
    let sorted = sort_by_ranking(table, indices);
    sorted.first().map(|&idx| &table.rows[idx])
}

// ---------------------------------------------------------------------------
// Metric formatting
// ---------------------------------------------------------------------------

/// One QS metric prepared for display: the source column, a human-readable
/// label, and the score if the row has one. Scores are percentages (0–100
/// by convention) and are passed through unclamped.
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub column: &'static str,
    pub label: String,
    pub value: Option<f64>,
}

/// Extract the ten QS metrics from a stats row. A missing or non-numeric
/// cell yields `value: None` for that metric only; the others are
/// unaffected.
pub fn metric_summary(row: &ProgramRow) -> Vec<Metric> {
    METRIC_COLUMNS
        .iter()
        .map(|&column| Metric {
            column,
            label: display_label(column),
            value: row.number(column),
        })
        .collect()
}

/// Turn a snake_case column name into a display label:
/// `academic_reputation` → `Academic Reputation`.
pub fn display_label(column: &str) -> String {
    column
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
