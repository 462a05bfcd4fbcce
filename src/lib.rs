//! Charts for the Black Hole and Worm Hole patience solver benchmark.
//!
//! The benchmark writes one result file per run into a tree laid out as
//! `{variant}/{axis}/{value}/{run}`. This crate reduces the runs for every
//! axis value to a single point (mean time, mean node count, or percentage
//! solved) and draws one curve per solver variant.
//!
//! # Example
//!
//! ```no_run
//! use solver_charts::config::GrapherConfig;
//! use solver_charts::runner;
//!
//! let config = GrapherConfig {
//!     results_dir: "results".into(),
//!     graphs_dir: "graphs".into(),
//!     write_summary: true,
//! };
//! for path in runner::run(&config)? {
//!     println!("{}", path.display());
//! }
//! # Ok::<(), solver_charts::GraphError>(())
//! ```

pub mod aggregate;
pub mod axis;
pub mod chart;
pub mod cli;
pub mod config;
pub mod errors;
pub mod metric;
pub mod plan;
pub mod record;
pub mod render;
pub mod runner;
pub mod variant;

pub use errors::{GraphError, Result};
