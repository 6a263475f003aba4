#![deny(unsafe_code)]

use std::path::Path;

use tracing::debug;

use senti_model::{CellValue, Result, ScanError, Table};

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}')
}

/// Infer the typed value of one trimmed cell: empty is missing, anything that
/// parses as `f64` is numeric, everything else is text.
fn infer_cell(raw: &str) -> CellValue {
    let value = normalize_cell(raw);
    if value.is_empty() {
        return CellValue::Missing;
    }
    match value.parse::<f64>() {
        Ok(number) => CellValue::Number(number),
        Err(_) => CellValue::Text(value.to_string()),
    }
}

/// Read a delimited file with a header row into a [`Table`].
///
/// Cells are trimmed and BOM-stripped, fully blank rows are skipped, and
/// records are padded with missing cells (or truncated) to the header width
/// so every row has the same length.
///
/// # Errors
///
/// Returns [`ScanError::Load`] when the path cannot be opened or a record
/// cannot be parsed.
pub fn read_csv_table(path: &Path) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|error| ScanError::load(path, error.to_string()))?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(|error| ScanError::load(path, error.to_string()))?
        .iter()
        .map(normalize_header)
        .collect();

    let mut table = Table::new(headers);
    for record in reader.records() {
        let record = record.map_err(|error| ScanError::load(path, error.to_string()))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let mut cells = Vec::with_capacity(table.column_count());
        for idx in 0..table.column_count() {
            cells.push(infer_cell(record.get(idx).unwrap_or("")));
        }
        table.push_row(cells);
    }
    debug!(
        path = %path.display(),
        columns = table.column_count(),
        rows = table.row_count(),
        "loaded csv table"
    );
    Ok(table)
}
