mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::core::{error::GraphError, sample::Mode};

/// `RUST_LOG` wins; otherwise `info`, or `debug` for this crate with `--debug`.
fn init_tracing(debug: bool) {
    let fallback = if debug {
        "info,lcg_cauchy=debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

pub fn run() -> Result<(), GraphError> {
    let cli = parse::Cli::parse();
    match cli.cmd {
        parse::Command::Run(a) => {
            init_tracing(a.debug);
            handlers::generate(&a, &Mode::ALL)
        }
        parse::Command::Lcg(a) => {
            init_tracing(a.debug);
            handlers::generate(&a, &[Mode::Lcg])
        }
        parse::Command::Cauchy(a) => {
            init_tracing(a.debug);
            handlers::generate(&a, &[Mode::Cauchy])
        }
        parse::Command::CauchyNoTangent(a) => {
            init_tracing(a.debug);
            handlers::generate(&a, &[Mode::CauchyNoTangent])
        }
        parse::Command::Examples => {
            handlers::examples();
            Ok(())
        }
    }
}
