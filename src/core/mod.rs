//! Aggregates the generation + statistics layer.

pub mod bounds;
pub mod cauchy;
pub mod config;
pub mod constants;
pub mod error;
pub mod rng;
pub mod runner;
pub mod sample;
pub mod stats;

// re-export frequently-used items for convenience
pub use cauchy::{Cauchy, Method};
pub use config::{PlotConfig, PlotConfigBuilder, RunConfig, RunConfigBuilder, StreamPolicy};
pub use constants::{DEFAULT_SAMPLES, DEFAULT_SEED, LCG_A, LCG_C, LCG_M};
pub use error::{ConfigError, GraphError};
pub use rng::Lcg;
pub use runner::{ModeReport, SampleRunner};
pub use sample::{Mode, filter_for_histogram};
pub use stats::{Stats, cauchy_stats, lcg_stats};
