//! Drives the generation modes of one run.
//!
//! Per mode: generate `samples` values → filter a display copy (Cauchy
//! only) → statistics (sorts the sample) → histogram. The display copy is
//! taken before the statistics so it keeps generation order.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::{
    core::{
        config::{RunConfig, StreamPolicy},
        error::GraphError,
        rng::Lcg,
        sample::{Mode, filter_for_histogram},
        stats::{Stats, cauchy_stats, lcg_stats},
    },
    render::{Canvas, Target, plot_histogram, plot_path},
};

/// Everything a mode produced, minus the sample itself.
#[derive(Clone, Debug)]
pub struct ModeReport {
    pub mode: Mode,
    pub samples: usize,
    pub plotted: usize,
    pub elapsed: Duration,
    pub stats: Stats,
}

/// Owns the run's generator; hands it to each mode in turn.
pub struct SampleRunner {
    config: RunConfig,
    rng: Lcg,
}

impl SampleRunner {
    #[must_use]
    pub fn new(config: RunConfig) -> Self {
        let rng = Lcg::seed(config.seed);
        Self { config, rng }
    }

    #[inline]
    #[must_use]
    pub fn rng(&self) -> &Lcg {
        &self.rng
    }

    /// Generate one mode's sample and its statistics, without plotting.
    ///
    /// Returns the display sample (filtered for Cauchy modes) alongside the
    /// report.
    ///
    /// # Errors
    /// [`GraphError::EmptyData`] if the sample is empty.
    pub fn generate(&mut self, mode: Mode) -> Result<(Vec<f64>, ModeReport), GraphError> {
        if self.config.stream == StreamPolicy::ReseedPerMode {
            debug!(%mode, seed = self.config.seed, "reseeding generator");
            self.rng = Lcg::seed(self.config.seed);
        }

        let n = self.config.samples;
        let start = Instant::now();
        let mut sample = mode.generate(&mut self.rng, n);
        let elapsed = start.elapsed();
        info!(%mode, n, ?elapsed, "sample generated");

        let (shown, stats) = if mode.clips_for_display() {
            let shown = filter_for_histogram(&sample);
            let kept = shown.len();
            debug!(%mode, kept, "filtered to histogram window");
            let stats = cauchy_stats(&mut sample)?;
            (shown, stats)
        } else {
            let stats = lcg_stats(&sample)?;
            (sample, stats)
        };

        let report = ModeReport {
            mode,
            samples: n,
            plotted: shown.len(),
            elapsed,
            stats,
        };
        Ok((shown, report))
    }

    /// Write the histogram of `shown` to the plot directory, and to the
    /// terminal with `preview`.
    ///
    /// # Errors
    /// Any histogram or I/O failure; these end the run.
    pub fn plot(&self, mode: Mode, shown: &[f64]) -> Result<(), GraphError> {
        let path = plot_path(&self.config.out_dir, mode.title());
        plot_histogram(shown, mode.title(), Canvas::File, Target::File(&path))?;
        info!(%mode, path = %path.display(), "histogram written");

        if self.config.preview {
            plot_histogram(shown, mode.title(), Canvas::Terminal, Target::Stdout)?;
        }
        Ok(())
    }

    /// Generate, summarise and plot one mode.
    ///
    /// # Errors
    /// Any histogram or I/O failure; these end the run.
    pub fn run_mode(&mut self, mode: Mode) -> Result<ModeReport, GraphError> {
        let (shown, report) = self.generate(mode)?;
        self.plot(mode, &shown)?;
        Ok(report)
    }

    /// All modes in run order.
    ///
    /// # Errors
    /// Stops at the first failing mode.
    pub fn run_all(&mut self) -> Result<Vec<ModeReport>, GraphError> {
        Mode::ALL.iter().map(|&m| self.run_mode(m)).collect()
    }
}
