use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::aggregate::{collect_series, Series};
use crate::axis::Axis;
use crate::errors::Result;
use crate::metric::Metric;
use crate::plan::PlotPlan;
use crate::variant::SolverVariant;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Everything needed to draw one comparison chart.
///
/// This is the chart's metadata independent of the output document, so two
/// charts built from the same results compare equal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Chart {
    pub axis: Axis,
    pub metric: Metric,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// One curve per solver variant, in [`SolverVariant::ALL`] order
    pub series: Vec<Series>,
}

impl Chart {
    /// File stem shared by every output written for this chart.
    pub fn file_stem(&self) -> String {
        file_stem(self.axis, self.metric)
    }

    /// Path of the rendered chart under `graphs_dir`.
    pub fn pdf_path(&self, graphs_dir: &Path) -> PathBuf {
        graphs_dir.join(self.file_stem()).with_extension("pdf")
    }

    /// Path of the JSON summary under `graphs_dir`.
    pub fn json_path(&self, graphs_dir: &Path) -> PathBuf {
        graphs_dir.join(self.file_stem()).with_extension("json")
    }

    /// Total number of plotted points across every curve.
    pub fn num_points(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// `{axis}-{focus}`, e.g. `pile-time`.
pub fn file_stem(axis: Axis, metric: Metric) -> String {
    format!("{}-{}", axis.dir_name(), metric.focus())
}

/// Aggregate the results under `results_dir` into a chart for `plan`.
#[instrument(level = "debug", skip(plan), fields(axis = %plan.axis, metric = %plan.metric))]
pub fn build_chart(results_dir: &Path, plan: &PlotPlan) -> Result<Chart> {
    let series = SolverVariant::ALL
        .iter()
        .map(|&variant| {
            collect_series(
                results_dir,
                variant,
                plan.axis.dir_name(),
                plan.axis.values(),
                plan.metric,
            )
        })
        .collect::<Result<Vec<_>>>()?;

    let chart = Chart {
        axis: plan.axis,
        metric: plan.metric,
        title: plan.title.to_string(),
        x_label: plan.axis.label().to_string(),
        y_label: plan.metric.y_label().to_string(),
        series,
    };
    debug!(points = chart.num_points(), "Built chart");
    Ok(chart)
}
