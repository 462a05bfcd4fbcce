//! Command line arguments and tracing setup for the `solver-charts` binary.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::{GrapherConfig, DEFAULT_GRAPHS_DIR, DEFAULT_RESULTS_DIR};

#[derive(Parser, Debug)]
#[command(
    name = "solver-charts",
    about = "Chart patience solver benchmark results",
    long_about = "Aggregates the benchmark result tree by pile count, deck size, suit count,\n\
                  rank count and seed, then renders one comparison chart per axis and metric."
)]
pub struct Args {
    /// Root of the benchmark results tree
    #[arg(long = "results-dir", default_value = DEFAULT_RESULTS_DIR)]
    pub results_dir: PathBuf,

    /// Directory the charts are written to
    #[arg(long = "graphs-dir", default_value = DEFAULT_GRAPHS_DIR)]
    pub graphs_dir: PathBuf,

    /// Also write each chart's data as JSON
    #[arg(long = "summary")]
    pub summary: bool,

    #[command(flatten)]
    pub tracing: TracingArgs,
}

impl From<Args> for GrapherConfig {
    fn from(args: Args) -> Self {
        Self {
            results_dir: args.results_dir,
            graphs_dir: args.graphs_dir,
            write_summary: args.summary,
        }
    }
}

/// Logging flags shared by every subcommand.
#[derive(clap::Args, Debug, Clone)]
pub struct TracingArgs {
    /// More log output; repeat for trace level
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Only log warnings and errors
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbosity")]
    pub quiet: bool,

    #[arg(long = "log-format", value_enum, default_value_t, global = true)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// One line per event
    #[default]
    Compact,
    /// Newline delimited JSON
    Json,
}

impl TracingArgs {
    /// The level implied by the flags, ignoring `RUST_LOG`.
    pub fn level(&self) -> &'static str {
        match (self.quiet, self.verbosity) {
            (true, _) => "warn",
            (false, 0) => "info",
            (false, 1) => "debug",
            (false, _) => "trace",
        }
    }

    /// Filter directive applying [`TracingArgs::level`] to this crate and
    /// its dependencies.
    pub fn directive(&self) -> String {
        let level = self.level();
        format!("{level},{}={level}", env!("CARGO_CRATE_NAME"))
    }

    /// `RUST_LOG` when set, the verbosity flags otherwise.
    pub fn filter(&self) -> EnvFilter {
        match std::env::var(EnvFilter::DEFAULT_ENV) {
            Ok(_) => EnvFilter::from_default_env(),
            Err(_) => EnvFilter::new(self.directive()),
        }
    }

    /// Install the global subscriber.
    ///
    /// # Panics
    ///
    /// Panics if a global subscriber is already set.
    pub fn init_tracing(&self) {
        let builder = tracing_subscriber::fmt().with_env_filter(self.filter());
        match self.log_format {
            LogFormat::Compact => builder.compact().init(),
            LogFormat::Json => builder.json().init(),
        }
    }
}
