//! Benchmark result records.
//!
//! Each benchmark run writes one file holding a single line of colon
//! separated fields:
//!
//! ```text
//! id:time_ms:nodes:solved
//! ```
//!
//! The aggregator only ever looks at the one field its metric needs, so
//! [`read_field`] is lenient about the rest of the line.

use std::path::Path;

use crate::errors::{GraphError, Result};

const SEPARATOR: char = ':';

/// The literal that marks a solved run.
pub const SOLVED: &str = "true";

/// Read the first line of a result file.
pub fn read_first_line(path: &Path) -> Result<String> {
    let contents = std::fs::read_to_string(path).map_err(|e| GraphError::io(path, e))?;
    Ok(contents
        .lines()
        .next()
        .unwrap_or_default()
        .trim_end_matches(['\r', '\n'])
        .to_string())
}

/// Extract the field at `index` from the first line of the file at `path`.
pub fn read_field(path: &Path, index: usize) -> Result<String> {
    let line = read_first_line(path)?;
    field(&line, index)
        .map(str::to_string)
        .ok_or_else(|| GraphError::MissingField {
            path: path.to_path_buf(),
            index,
        })
}

/// Field at `index` of a record line.
pub fn field(line: &str, index: usize) -> Option<&str> {
    line.split(SEPARATOR).nth(index)
}

/// Parse a field as a float, naming the file on failure.
pub fn parse_number(path: &Path, field: &str) -> Result<f64> {
    field
        .trim()
        .parse::<f64>()
        .map_err(|source| GraphError::InvalidNumber {
            path: path.to_path_buf(),
            field: field.to_string(),
            source,
        })
}
