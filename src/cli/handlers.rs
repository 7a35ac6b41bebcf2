use std::{fmt::Write, io};

use crate::core::{
    config::{RunConfig, StreamPolicy},
    error::GraphError,
    runner::{ModeReport, SampleRunner},
    sample::Mode,
    stats::Stats,
};

use super::parse::RunArgs;

fn run_config(a: &RunArgs) -> Result<RunConfig, GraphError> {
    let stream = if a.reseed {
        StreamPolicy::ReseedPerMode
    } else {
        StreamPolicy::Shared
    };
    Ok(RunConfig::builder()
        .samples(a.samples)
        .seed(a.seed)
        .stream(stream)
        .out_dir(&a.out_dir)
        .preview(a.preview)
        .build()?)
}

/// Console text for one finished mode.
pub(crate) fn format_report(r: &ModeReport) -> String {
    let what = match r.mode {
        Mode::Lcg => "numbers using LGC",
        Mode::Cauchy => "Cauchy numbers",
        Mode::CauchyNoTangent => "Cauchy numbers without using tangent",
    };
    let heading = match r.stats {
        Stats::Moments { .. } => format!("{} stats (normalized)", r.mode),
        Stats::Quartiles { .. } => format!("{} stats", r.mode),
    };

    let mut s = String::new();
    let _ = writeln!(s, "Generating {what} took {:?}", r.elapsed);
    let _ = writeln!(s, "{heading}:\n{}", r.stats);
    s
}

/// Generate `modes` in order with one runner, reporting to stdout.
pub fn generate(a: &RunArgs, modes: &[Mode]) -> Result<(), GraphError> {
    generate_into(a, modes, &mut io::stdout().lock())
}

/// Each mode's report is written before its histogram is drawn, so a fatal
/// plotting error still leaves the timing and statistics on screen.
fn generate_into<W: io::Write>(
    a: &RunArgs,
    modes: &[Mode],
    out: &mut W,
) -> Result<(), GraphError> {
    let cfg = run_config(a)?;
    writeln!(out, "Generating {} numbers\n", cfg.samples)?;

    let mut runner = SampleRunner::new(cfg);
    for &mode in modes {
        let (shown, report) = runner.generate(mode)?;
        writeln!(out, "{}", format_report(&report))?;
        out.flush()?;
        runner.plot(mode, &shown)?;
    }
    Ok(())
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "cargo run --release --"; // adjust if you install the binary
    println!(
        "
Example invocations
-------------------
• Everything, 10M per mode : {bin} run
• Quick look              : {bin} run -n 100000 --preview
• One mode                : {bin} cauchy-no-tangent
• Independent streams     : {bin} run --reseed
• Other seed / directory  : {bin} lcg --seed 7 --out-dir /tmp/plots
• Debug logging           : {bin} run --debug   (or RUST_LOG=lcg_cauchy=debug)
"
    );
}
