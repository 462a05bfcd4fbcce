use std::path::PathBuf;

use tracing::{info, instrument};

use crate::chart::build_chart;
use crate::config::GrapherConfig;
use crate::errors::{GraphError, Result};
use crate::plan::{PlotPlan, PLOTS};
use crate::render::write_pdf;

/// Build and write the chart for one plan entry, returning the PDF path.
#[instrument(level = "debug", skip(config, plan), fields(axis = %plan.axis, metric = %plan.metric))]
pub fn render_plan(config: &GrapherConfig, plan: &PlotPlan) -> Result<PathBuf> {
    let chart = build_chart(&config.results_dir, plan)?;

    let pdf_path = chart.pdf_path(&config.graphs_dir);
    write_pdf(&chart, &pdf_path)?;
    info!("Saving {}", pdf_path.display());

    #[cfg(feature = "serde")]
    if config.write_summary {
        let json_path = chart.json_path(&config.graphs_dir);
        std::fs::write(&json_path, chart.to_json()?).map_err(|e| GraphError::io(&json_path, e))?;
        info!("Saving {}", json_path.display());
    }

    Ok(pdf_path)
}

/// Render every entry of `plans` in order, stopping at the first error.
pub fn run_plans(config: &GrapherConfig, plans: &[PlotPlan]) -> Result<Vec<PathBuf>> {
    config.validate()?;
    std::fs::create_dir_all(&config.graphs_dir).map_err(|e| GraphError::io(&config.graphs_dir, e))?;

    plans.iter().map(|plan| render_plan(config, plan)).collect()
}

/// Render the full fixed set of charts.
pub fn run(config: &GrapherConfig) -> Result<Vec<PathBuf>> {
    info!(
        results_dir = %config.results_dir.display(),
        graphs_dir = %config.graphs_dir.display(),
        charts = PLOTS.len(),
        "Rendering charts"
    );
    run_plans(config, &PLOTS)
}
