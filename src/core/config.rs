//! Run-time configuration objects + fluent builders.
//!
//! * [`RunConfig`]  - what a run generates and where the plots go
//! * [`PlotConfig`] - immutable parameters handed to the renderer

use std::path::PathBuf;

use crate::core::{
    constants::{DEFAULT_OUT_DIR, DEFAULT_SAMPLES, DEFAULT_SEED},
    error::ConfigError,
};

/// Whether the modes of one run share a single stream.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum StreamPolicy {
    /// Seed once; each mode continues where the previous one stopped.
    #[default]
    Shared,
    /// Every mode starts from a fresh generator with the same seed.
    ReseedPerMode,
}

// --- Run ---

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub samples: usize,
    pub seed: u64,
    pub stream: StreamPolicy,
    pub out_dir: PathBuf,
    pub preview: bool,
}

impl RunConfig {
    #[inline]
    #[must_use]
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::default()
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            seed: DEFAULT_SEED,
            stream: StreamPolicy::Shared,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            preview: false,
        }
    }
}

#[derive(Debug, Default)]
pub struct RunConfigBuilder {
    samples: Option<usize>,
    seed: Option<u64>,
    stream: Option<StreamPolicy>,
    out_dir: Option<PathBuf>,
    preview: bool,
}

impl RunConfigBuilder {
    #[inline]
    #[must_use]
    pub fn samples(mut self, n: usize) -> Self {
        self.samples = Some(n);
        self
    }
    #[inline]
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
    #[inline]
    #[must_use]
    pub fn stream(mut self, policy: StreamPolicy) -> Self {
        self.stream = Some(policy);
        self
    }
    #[inline]
    #[must_use]
    pub fn out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = Some(dir.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn preview(mut self, on: bool) -> Self {
        self.preview = on;
        self
    }

    /// # Errors
    /// [`ConfigError::InvalidSampleSize`] when `samples` is zero.
    pub fn build(self) -> Result<RunConfig, ConfigError> {
        let samples = self.samples.unwrap_or(DEFAULT_SAMPLES);
        if samples == 0 {
            return Err(ConfigError::InvalidSampleSize(samples));
        }
        Ok(RunConfig {
            samples,
            seed: self.seed.unwrap_or(DEFAULT_SEED),
            stream: self.stream.unwrap_or_default(),
            out_dir: self
                .out_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR)),
            preview: self.preview,
        })
    }
}

// --- Plot ---

/// Immutable parameters handed to the renderer.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    pub title: String,
    pub subtitle: Option<String>,
    pub y_max: f64,
    pub x_chars: usize,
    pub y_chars: usize,
}

impl PlotConfig {
    #[inline]
    #[must_use]
    pub fn builder(x_chars: usize, y_chars: usize) -> PlotConfigBuilder {
        PlotConfigBuilder::new(x_chars, y_chars)
    }
}

/// Fluent builder with zero allocation until `build`.
#[derive(Debug)]
pub struct PlotConfigBuilder {
    x_chars: usize,
    y_chars: usize,
    title: Option<String>,
    subtitle: Option<String>,
    y_max: Option<f64>,
}

impl PlotConfigBuilder {
    pub(crate) fn new(x_chars: usize, y_chars: usize) -> Self {
        Self {
            x_chars,
            y_chars,
            title: None,
            subtitle: None,
            y_max: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = Some(t.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn subtitle(mut self, s: impl Into<String>) -> Self {
        self.subtitle = Some(s.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn y_max(mut self, v: f64) -> Self {
        self.y_max = Some(v);
        self
    }

    /// # Errors
    /// [`ConfigError::MissingField`] without a `y_max`,
    /// [`ConfigError::InvalidCanvas`] for a zero-sized grid.
    pub fn build(self) -> Result<PlotConfig, ConfigError> {
        let y_max = self.y_max.ok_or(ConfigError::MissingField("y_max"))?;
        if self.x_chars == 0 || self.y_chars == 0 {
            return Err(ConfigError::InvalidCanvas {
                width: self.x_chars,
                height: self.y_chars,
            });
        }
        Ok(PlotConfig {
            title: self.title.unwrap_or_default(),
            subtitle: self.subtitle,
            // bars are drawn from zero, keep the span positive
            y_max: y_max.max(1.0),
            x_chars: self.x_chars,
            y_chars: self.y_chars,
        })
    }
}
