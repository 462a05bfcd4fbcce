use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument, trace};

use crate::errors::{GraphError, Result};
use crate::metric::{mean, solved_percent, Metric};
use crate::record::{parse_number, read_field, SOLVED};
use crate::variant::SolverVariant;

#[cfg(feature = "serde")]
use serde::Serialize;

/// One plotted point: an axis value and the reduced metric for it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Point {
    pub x: u32,
    pub y: f64,
}

/// The curve for one solver variant. Its legend label and colour come from
/// the variant.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Series {
    pub variant: SolverVariant,
    pub points: Vec<Point>,
}

impl Series {
    pub fn new(variant: SolverVariant) -> Self {
        Self {
            variant,
            points: Vec::new(),
        }
    }

    pub fn xs(&self) -> Vec<u32> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }
}

/// Directory holding the runs of `variant` for one axis value.
pub fn results_dir(root: &Path, variant: SolverVariant, axis_dir: &str, value: u32) -> PathBuf {
    root.join(variant.dir_name())
        .join(axis_dir)
        .join(value.to_string())
}

/// List the result files in `dir`, sorted by name.
///
/// Returns `Ok(None)` when the directory does not exist.
pub fn list_results(dir: &Path) -> Result<Option<Vec<PathBuf>>> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(GraphError::io(dir, e)),
    };

    let mut files = entries
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| GraphError::io(dir, e))?;
    files.sort();
    Ok(Some(files))
}

/// Reduce every result file in `dir` to one value for `metric`.
///
/// An existing directory with no files is an error for every metric.
pub fn reduce_dir(dir: &Path, files: &[PathBuf], metric: Metric) -> Result<f64> {
    let index = metric.field_index();
    let reduced = if metric.is_numeric() {
        let readings = files
            .iter()
            .map(|path| parse_number(path, &read_field(path, index)?))
            .collect::<Result<Vec<f64>>>()?;
        mean(&readings)
    } else {
        let readings = files
            .iter()
            .map(|path| Ok(read_field(path, index)? == SOLVED))
            .collect::<Result<Vec<bool>>>()?;
        solved_percent(&readings)
    };

    reduced.ok_or_else(|| GraphError::EmptyDirectory(dir.to_path_buf()))
}

/// Build the series for one variant along one axis.
///
/// Axis values with no results directory are left out of the series.
#[instrument(level = "debug", skip(values))]
pub fn collect_series(
    root: &Path,
    variant: SolverVariant,
    axis_dir: &str,
    values: &[u32],
    metric: Metric,
) -> Result<Series> {
    let mut series = Series::new(variant);

    for &value in values {
        let dir = results_dir(root, variant, axis_dir, value);
        let Some(files) = list_results(&dir)? else {
            debug!(?dir, "No results collected, skipping");
            continue;
        };

        let y = reduce_dir(&dir, &files, metric)?;
        trace!(value, y, runs = files.len(), "Reduced results");
        series.points.push(Point { x: value, y });
    }

    debug!(points = series.points.len(), "Collected series");
    Ok(series)
}
