use clap::Parser;
use solver_charts::cli::Args;
use solver_charts::config::GrapherConfig;
use solver_charts::{runner, Result};

fn main() -> Result<()> {
    let args = Args::parse();
    args.tracing.init_tracing();

    let config = GrapherConfig::from(args);
    let written = runner::run(&config)?;
    tracing::info!(charts = written.len(), "Done");

    Ok(())
}
