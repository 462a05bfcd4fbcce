use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while aggregating results or rendering charts.
///
/// A missing results directory is never an error; it only means the
/// benchmark has not produced data for that configuration yet.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Result record in {path} has no field at index {index}")]
    MissingField { path: PathBuf, index: usize },

    #[error("Field {field:?} in {path} is not a number: {source}")]
    InvalidNumber {
        path: PathBuf,
        field: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("Results directory {0} exists but contains no records")]
    EmptyDirectory(PathBuf),

    #[error("Failed to render chart {chart:?}: {message}")]
    Render { chart: String, message: String },

    #[error("Configuration validation error: {0}")]
    ValidationError(String),

    #[cfg(feature = "serde")]
    #[error("Failed to serialize JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl GraphError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GraphError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for charting operations
pub type Result<T> = std::result::Result<T, GraphError>;
