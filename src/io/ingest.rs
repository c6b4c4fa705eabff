//! CSV ingest.
//!
//! Reads a certificates file fully into a `Table`:
//! - header names trimmed, BOM stripped
//! - cells trimmed; empty cells and common NA markers become missing
//! - short rows padded with missing cells, long rows rejected
//! - column types inferred once every row is in

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use tracing::info;

use crate::data::{Column, Table};
use crate::error::AppError;

/// Cell values read as missing, in addition to the empty string.
const NA_MARKERS: [&str; 9] = ["NA", "N/A", "n/a", "NULL", "null", "NaN", "nan", "#N/A", "<NA>"];

/// Load a comma-separated file into memory.
pub fn load_table(path: &Path) -> Result<Table, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::read(format!("Failed to open CSV '{}': {e}", path.display())))?;

    let table = read_table(file)
        .map_err(|e| AppError::read(format!("Failed to read CSV '{}': {}", path.display(), e.message())))?;

    info!(
        path = %path.display(),
        rows = table.n_rows(),
        columns = table.n_cols(),
        "loaded certificates"
    );
    Ok(table)
}

/// Parse CSV from any reader. The first record is the header.
pub fn read_table<R: Read>(reader: R) -> Result<Table, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| AppError::read(format!("Failed to read CSV headers: {e}")))?
        .clone();
    let names = header_names(&headers);

    let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); names.len()];

    for result in reader.records() {
        let record = result.map_err(|e| AppError::read(format!("CSV parse error: {e}")))?;

        if record.len() > names.len() {
            // Quoted cells may span lines, so ask the reader where the record began.
            let line = record.position().map_or(0, |p| p.line());
            return Err(AppError::read(format!(
                "Line {line}: expected {} fields, found {}.",
                names.len(),
                record.len()
            )));
        }

        for (col, column_cells) in cells.iter_mut().enumerate() {
            column_cells.push(record.get(col).and_then(parse_cell));
        }
    }

    let columns = names
        .into_iter()
        .zip(cells)
        .map(|(name, column_cells)| Column::infer(name, column_cells))
        .collect();

    Table::from_columns(columns)
}

fn header_names(headers: &StringRecord) -> Vec<String> {
    headers
        .iter()
        .map(|name| name.trim().trim_start_matches('\u{feff}').to_string())
        .collect()
}

fn parse_cell(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() || NA_MARKERS.contains(&raw) {
        None
    } else {
        Some(raw.to_string())
    }
}
