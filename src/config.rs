use std::path::PathBuf;

use crate::errors::{GraphError, Result};

/// Where the benchmark results live, relative to the working directory.
pub const DEFAULT_RESULTS_DIR: &str = "../results";
/// Where rendered charts are written, relative to the working directory.
pub const DEFAULT_GRAPHS_DIR: &str = "../graphs";

/// Configuration for a charting run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrapherConfig {
    /// Root of the `{variant}/{axis}/{value}/{run}` results tree
    pub results_dir: PathBuf,
    /// Directory the charts are written to; created if missing
    pub graphs_dir: PathBuf,
    /// Also write each chart's data as JSON next to the SVG
    pub write_summary: bool,
}

impl Default for GrapherConfig {
    fn default() -> Self {
        Self {
            results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
            graphs_dir: PathBuf::from(DEFAULT_GRAPHS_DIR),
            write_summary: false,
        }
    }
}

impl GrapherConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.results_dir.as_os_str().is_empty() {
            return Err(GraphError::ValidationError(
                "results_dir must not be empty".to_string(),
            ));
        }

        if self.graphs_dir.as_os_str().is_empty() {
            return Err(GraphError::ValidationError(
                "graphs_dir must not be empty".to_string(),
            ));
        }

        // A missing results root just means nothing has been collected yet,
        // but a file in its place is a mistake.
        if self.results_dir.exists() && !self.results_dir.is_dir() {
            return Err(GraphError::ValidationError(format!(
                "results_dir is not a directory: {}",
                self.results_dir.display()
            )));
        }

        if self.graphs_dir.exists() && !self.graphs_dir.is_dir() {
            return Err(GraphError::ValidationError(format!(
                "graphs_dir is not a directory: {}",
                self.graphs_dir.display()
            )));
        }

        #[cfg(not(feature = "serde"))]
        if self.write_summary {
            return Err(GraphError::ValidationError(
                "write_summary requires the serde feature".to_string(),
            ));
        }

        Ok(())
    }
}
