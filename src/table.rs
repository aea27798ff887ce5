//! CSV ingestion and positional schema slicing
//!
//! The source file is a delimited text file with a header row and at least
//! [`MIN_COLUMNS`] columns. Column meaning is positional: input features
//! are the two columns at [`INPUT_COLUMNS`], targets are every column
//! except the trailing [`TARGET_TAIL_DROPPED`]. Header names are read but
//! not interpreted.

use crate::error::{RepartirError, Result};
use csv::ReaderBuilder;
use ndarray::{s, Array2};
use std::path::Path;

/// Minimum number of columns the positional schema supports.
pub const MIN_COLUMNS: usize = 6;

/// Zero-indexed column range holding the input features.
pub const INPUT_COLUMNS: std::ops::Range<usize> = 4..6;

/// Number of trailing columns excluded from the target block.
pub const TARGET_TAIL_DROPPED: usize = 2;

/// Load a CSV file into a dense `f32` table.
///
/// Fails fast on a missing file, ragged rows, or non-numeric cells; the
/// error message names the offending row so malformed exports are easy to
/// track down.
pub fn load_csv(path: &Path) -> Result<Array2<f32>> {
    if !path.exists() {
        return Err(RepartirError::DatasetNotFound { path: path.to_path_buf() });
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| RepartirError::parsing(path, e.to_string()))?;

    let mut cells: Vec<f32> = Vec::new();
    let mut n_cols = 0usize;
    let mut n_rows = 0usize;

    for (i, record) in reader.records().enumerate() {
        // Data rows are 1-indexed in messages; the header is row 0.
        let row = i + 1;
        let record = record.map_err(|e| {
            RepartirError::parsing(path, format!("row {row}: {e}"))
        })?;

        if n_rows == 0 {
            n_cols = record.len();
        } else if record.len() != n_cols {
            return Err(RepartirError::parsing(
                path,
                format!("row {row}: found {} fields, expected {n_cols}", record.len()),
            ));
        }

        for (col, cell) in record.iter().enumerate() {
            let value: f32 = cell.trim().parse().map_err(|_| {
                RepartirError::parsing(
                    path,
                    format!("row {row}, column {col}: '{cell}' is not numeric"),
                )
            })?;
            cells.push(value);
        }
        n_rows += 1;
    }

    Array2::from_shape_vec((n_rows, n_cols), cells)
        .map_err(|e| RepartirError::parsing(path, e.to_string()))
}

/// Slice a table into its (inputs, targets) blocks.
///
/// Checked before any split is attempted, so a too-narrow file never
/// reaches the splitting stage.
pub fn slice_schema(table: &Array2<f32>, path: &Path) -> Result<(Array2<f32>, Array2<f32>)> {
    let columns = table.ncols();
    if columns < MIN_COLUMNS {
        return Err(RepartirError::SchemaTooNarrow {
            path: path.to_path_buf(),
            columns,
            required: MIN_COLUMNS,
        });
    }

    let inputs = table.slice(s![.., INPUT_COLUMNS.start..INPUT_COLUMNS.end]).to_owned();
    let targets = table.slice(s![.., ..columns - TARGET_TAIL_DROPPED]).to_owned();
    Ok((inputs, targets))
}
