//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

/// Precise configuration faults.
#[derive(Debug)]
pub enum ConfigError {
    MissingField(&'static str),
    InvalidSampleSize(usize),
    InvalidCanvas { width: usize, height: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingField(x) => write!(f, "configuration missing field `{x}`"),
            ConfigError::InvalidSampleSize(n) => {
                write!(f, "sample size must be > 0, got {n}")
            }
            ConfigError::InvalidCanvas { width, height } => {
                write!(f, "canvas {width}×{height} has no area")
            }
        }
    }
}
impl Error for ConfigError {}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug)]
pub enum GraphError {
    Io(io::Error),
    Config(ConfigError),
    InvalidBinCount(usize),
    GraphTooSmall {
        want_w: usize,
        want_h: usize,
        got_w: usize,
        got_h: usize,
    },
    EmptyData,
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::Io(e) => write!(f, "{e}"),
            GraphError::Config(e) => write!(f, "{e}"),
            GraphError::InvalidBinCount(n) => {
                write!(f, "histogram needs at least one bin, got {n}")
            }
            GraphError::GraphTooSmall {
                want_w,
                want_h,
                got_w,
                got_h,
            } => write!(
                f,
                "canvas too small: need ≥{want_w}×{want_h}, got {got_w}×{got_h}"
            ),
            GraphError::EmptyData => write!(f, "data set is empty"),
        }
    }
}

impl Error for GraphError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GraphError::Io(e) => Some(e),
            GraphError::Config(e) => Some(e),
            _ => None,
        }
    }
}

// automatic conversions
impl From<io::Error> for GraphError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ConfigError> for GraphError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
