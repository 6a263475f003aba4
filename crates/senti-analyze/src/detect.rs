//! Text-likeness heuristic over table columns.

use std::collections::BTreeSet;

use tracing::debug;

use senti_model::{ColumnProfile, DetectorOptions, Table};

/// Classify which columns of `table` are text-like and profile them.
///
/// A column qualifies when, over its non-missing values, the text fraction
/// strictly exceeds `min_text_fraction` and the mean text length strictly
/// exceeds `min_avg_len`. Columns with no non-missing values never qualify.
/// The result preserves table column order; an empty result is a valid
/// outcome the caller reports as "no text columns found".
///
/// Pure and deterministic for a given table and options.
pub fn detect_text_columns(table: &Table, options: &DetectorOptions) -> Vec<ColumnProfile> {
    let mut profiles = Vec::new();
    for (idx, name) in table.columns.iter().enumerate() {
        let mut non_missing = 0usize;
        let mut text_count = 0usize;
        let mut text_chars = 0usize;
        let mut uniques = BTreeSet::new();
        for cell in table.column(idx) {
            if cell.is_missing() {
                continue;
            }
            non_missing += 1;
            uniques.insert(cell.display().into_owned());
            if let Some(text) = cell.as_text() {
                text_count += 1;
                text_chars += text.chars().count();
            }
        }
        if non_missing == 0 || text_count == 0 {
            debug!(column = %name, "skipped: no non-missing text entries");
            continue;
        }
        let text_fraction = text_count as f64 / non_missing as f64;
        let avg_entry_len = text_chars as f64 / text_count as f64;
        if text_fraction > options.min_text_fraction && avg_entry_len > options.min_avg_len {
            profiles.push(ColumnProfile {
                name: name.clone(),
                avg_entry_len,
                unique_entries: uniques.len(),
            });
        } else {
            debug!(
                column = %name,
                text_fraction,
                avg_entry_len,
                "skipped: below text-likeness thresholds"
            );
        }
    }
    profiles
}
