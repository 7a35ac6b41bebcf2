//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    cauchy::{Cauchy, Method},
    config::{RunConfig, RunConfigBuilder, StreamPolicy},
    error::{ConfigError, GraphError},
    rng::Lcg,
    runner::{ModeReport, SampleRunner},
    sample::Mode,
    stats::{Stats, cauchy_stats, lcg_stats},
};

pub use render::{Canvas, Histogram, Target, plot_histogram};

/// Generate, summarise and plot every mode with `config`.
///
/// # Errors
/// The first histogram or I/O failure.
pub fn run_all(config: RunConfig) -> Result<Vec<ModeReport>, GraphError> {
    SampleRunner::new(config).run_all()
}
