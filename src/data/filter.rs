use std::collections::BTreeSet;

use super::model::{
    ProgramRow, RankingTable, COUNTRY, EDUCATION_LEVEL, PROGRAM, UNIVERSITY,
};

// ---------------------------------------------------------------------------
// Cascade orders
// ---------------------------------------------------------------------------

/// Filter order in the browser: each stage's options are computed from the
/// table already narrowed by the stages before it.
pub const BROWSER_CASCADE: [&str; 4] = [EDUCATION_LEVEL, COUNTRY, UNIVERSITY, PROGRAM];

/// Filter order in the per-university dashboard.
pub const DASHBOARD_CASCADE: [&str; 3] = [COUNTRY, EDUCATION_LEVEL, UNIVERSITY];

// ---------------------------------------------------------------------------
// ColumnFilter – one equality constraint
// ---------------------------------------------------------------------------

/// A single equality constraint on a categorical column. A `None` selection
/// is the "All" sentinel: no constraint, the table passes through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnFilter {
    pub column: String,
    pub selection: Option<String>,
}

impl ColumnFilter {
    pub fn all(column: &str) -> Self {
        Self {
            column: column.to_string(),
            selection: None,
        }
    }

    pub fn value(column: &str, value: impl Into<String>) -> Self {
        Self {
            column: column.to_string(),
            selection: Some(value.into()),
        }
    }

    /// Rows with a missing or non-text cell never match a concrete selection.
    fn matches(&self, row: &ProgramRow) -> bool {
        match &self.selection {
            None => true,
            Some(wanted) => row.text(&self.column) == Some(wanted.as_str()),
        }
    }
}

// ---------------------------------------------------------------------------
// Pure filtering primitives
// ---------------------------------------------------------------------------

/// Indices of rows satisfying every filter conjunctively. Filters with the
/// "All" sentinel impose no constraint. An empty result is not an error.
pub fn apply_filters(table: &RankingTable, filters: &[ColumnFilter]) -> Vec<usize> {
    table
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| filters.iter().all(|f| f.matches(row)))
        .map(|(i, _)| i)
        .collect()
}

/// Sorted distinct values of `next_column` within the table narrowed by
/// `applied`. Options are never derived from the unfiltered table, so a
/// later selector can only offer combinations consistent with earlier
/// choices.
pub fn filter_options(
    table: &RankingTable,
    applied: &[ColumnFilter],
    next_column: &str,
) -> Vec<String> {
    let narrowed = apply_filters(table, applied);
    distinct_text(table, &narrowed, next_column)
}

fn distinct_text(table: &RankingTable, indices: &[usize], column: &str) -> Vec<String> {
    let mut distinct: BTreeSet<&str> = BTreeSet::new();
    for &idx in indices {
        if let Some(text) = table.rows[idx].text(column) {
            distinct.insert(text);
        }
    }
    distinct.into_iter().map(str::to_string).collect()
}

// ---------------------------------------------------------------------------
// Cascade evaluation
// ---------------------------------------------------------------------------

/// One evaluated stage of a cascade: the column it constrains, the options a
/// selector may offer, and the selection that survived validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeStage {
    pub column: &'static str,
    pub options: Vec<String>,
    pub selection: Option<String>,
}

/// The outcome of evaluating a full cascade against a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeResult {
    pub stages: Vec<CascadeStage>,
    /// Rows satisfying every surviving selection.
    pub indices: Vec<usize>,
}

/// Evaluate an ordered cascade in one pass, narrowing the candidate rows
/// stage by stage. A selection that is no longer offered by its stage (an
/// upstream choice invalidated it) falls back to "All" instead of silently
/// constraining on an impossible value. Missing trailing selections are
/// treated as "All".
pub fn run_cascade(
    table: &RankingTable,
    columns: &[&'static str],
    selections: &[Option<String>],
) -> CascadeResult {
    let mut narrowed: Vec<usize> = (0..table.len()).collect();
    let mut stages = Vec::with_capacity(columns.len());

    for (k, &column) in columns.iter().enumerate() {
        let options = distinct_text(table, &narrowed, column);
        let selection = selections
            .get(k)
            .cloned()
            .flatten()
            .filter(|wanted| options.iter().any(|o| o == wanted));

        if let Some(wanted) = &selection {
            narrowed.retain(|&i| table.rows[i].text(column) == Some(wanted.as_str()));
        }
        stages.push(CascadeStage {
            column,
            options,
            selection,
        });
    }

    CascadeResult {
        stages,
        indices: narrowed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::read_table;

    const SAMPLE: &str = "\
education_level,country,university,program,ranking
Masters,USA,MIT,CS,1
Masters,USA,MIT,EE,1
Masters,USA,Stanford,CS,2
Masters,UK,Oxford,Law,3
Bachelors,UK,Oxford,History,3
Bachelors,Germany,TUM,CS,12";

    fn sample() -> RankingTable {
        read_table(SAMPLE.as_bytes()).unwrap()
    }

    #[test]
    fn filters_apply_conjunctively() {
        let table = sample();
        let filters = [
            ColumnFilter::value(EDUCATION_LEVEL, "Masters"),
            ColumnFilter::value(COUNTRY, "USA"),
            ColumnFilter::value(UNIVERSITY, "MIT"),
        ];
        let indices = apply_filters(&table, &filters);
        assert_eq!(indices, vec![0, 1]);
        for &idx in &indices {
            let row = &table.rows[idx];
            assert_eq!(row.text(EDUCATION_LEVEL), Some("Masters"));
            assert_eq!(row.text(COUNTRY), Some("USA"));
            assert_eq!(row.text(UNIVERSITY), Some("MIT"));
        }
    }

    #[test]
    fn all_sentinel_leaves_table_unchanged() {
        let table = sample();
        let filters = [
            ColumnFilter::all(EDUCATION_LEVEL),
            ColumnFilter::all(COUNTRY),
        ];
        assert_eq!(apply_filters(&table, &filters).len(), table.len());
    }

    #[test]
    fn options_are_sorted_and_derived_from_narrowed_table() {
        let table = sample();

        let unconstrained = filter_options(&table, &[], COUNTRY);
        assert_eq!(unconstrained, vec!["Germany", "UK", "USA"]);

        // After choosing Bachelors, USA must no longer be offered.
        let applied = [ColumnFilter::value(EDUCATION_LEVEL, "Bachelors")];
        let narrowed = filter_options(&table, &applied, COUNTRY);
        assert_eq!(narrowed, vec!["Germany", "UK"]);
    }

    #[test]
    fn downstream_options_subset_upstream_values() {
        let table = sample();
        let applied = [
            ColumnFilter::value(EDUCATION_LEVEL, "Masters"),
            ColumnFilter::value(COUNTRY, "USA"),
        ];
        let universities = filter_options(&table, &applied, UNIVERSITY);
        assert_eq!(universities, vec!["MIT", "Stanford"]);

        // Each offered option must correspond to at least one surviving row.
        for uni in &universities {
            let mut filters = applied.to_vec();
            filters.push(ColumnFilter::value(UNIVERSITY, uni.clone()));
            assert!(!apply_filters(&table, &filters).is_empty());
        }
    }

    #[test]
    fn zero_row_stage_empties_everything_downstream() {
        let table = sample();
        let applied = [
            ColumnFilter::value(EDUCATION_LEVEL, "Bachelors"),
            ColumnFilter::value(COUNTRY, "USA"),
        ];
        assert!(apply_filters(&table, &applied).is_empty());
        assert!(filter_options(&table, &applied, UNIVERSITY).is_empty());
        assert!(filter_options(&table, &applied, PROGRAM).is_empty());
    }

    #[test]
    fn cascade_narrows_stage_by_stage() {
        let table = sample();
        let selections = vec![
            Some("Masters".to_string()),
            Some("USA".to_string()),
            Some("MIT".to_string()),
            None,
        ];
        let result = run_cascade(&table, &BROWSER_CASCADE, &selections);

        assert_eq!(result.indices, vec![0, 1]);
        assert_eq!(result.stages[1].options, vec!["UK", "USA"]);
        assert_eq!(result.stages[2].options, vec!["MIT", "Stanford"]);
        assert_eq!(result.stages[3].options, vec!["CS", "EE"]);
    }

    #[test]
    fn cascade_drops_selections_invalidated_upstream() {
        let table = sample();
        // Oxford was picked while browsing the UK; switching the country to
        // USA must reset the university stage to "All" rather than filter on
        // a combination no row can satisfy.
        let selections = vec![
            Some("Masters".to_string()),
            Some("USA".to_string()),
            Some("Oxford".to_string()),
        ];
        let result = run_cascade(&table, &BROWSER_CASCADE, &selections);
        assert_eq!(result.stages[2].selection, None);
        assert_eq!(result.indices, vec![0, 1, 2]);
    }

    #[test]
    fn cascade_with_no_selections_offers_full_option_sets() {
        let table = sample();
        let result = run_cascade(&table, &BROWSER_CASCADE, &[]);
        assert_eq!(result.indices.len(), table.len());
        assert_eq!(result.stages[0].options, vec!["Bachelors", "Masters"]);
    }

    #[test]
    fn cascade_on_empty_table_is_empty_not_an_error() {
        let table = read_table("education_level,country,university,program\n".as_bytes())
            .unwrap();
        let result = run_cascade(&table, &BROWSER_CASCADE, &[]);
        assert!(result.indices.is_empty());
        assert!(result.stages.iter().all(|s| s.options.is_empty()));
    }
}
