use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::constants::{DEFAULT_OUT_DIR, DEFAULT_SAMPLES, DEFAULT_SEED};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "lcg-cauchy",
    version,
    about = "LCG and Cauchy pseudo-random samples with statistics and braille histograms"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate all three samples in order (LCG, Cauchy, Cauchy no tangent)
    Run(RunArgs),
    /// Raw LCG output, mean and standard deviation
    Lcg(RunArgs),
    /// Cauchy via the tangent transform, quartiles
    Cauchy(RunArgs),
    /// Cauchy via rejection sampling and tail folding, quartiles
    CauchyNoTangent(RunArgs),
    /// Print example invocations
    Examples,
}

/// Flags shared by every generating subcommand.
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Numbers generated per mode
    #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLES)]
    pub samples: usize,

    /// Generator seed
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Restart the generator from the seed for every mode instead of
    /// continuing one stream
    #[arg(long)]
    pub reseed: bool,

    /// Directory receiving the histogram files
    #[arg(short, long, default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Also draw each histogram in the terminal
    #[arg(long)]
    pub preview: bool,

    /// Emit debug-level diagnostics
    #[arg(long)]
    pub debug: bool,
}
