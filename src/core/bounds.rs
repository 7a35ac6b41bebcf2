//! Geometry helpers: value range + terminal size plumbing.

use terminal_size::{Height, Width, terminal_size};

use crate::core::constants::{
    BORDER_WIDTH, FILE_CANVAS_HEIGHT, FILE_CANVAS_WIDTH, LABEL_GUTTER, MIN_GRAPH_HEIGHT,
    MIN_GRAPH_WIDTH,
};

/// Inclusive value range without any padding.
///
/// * If the sample is empty or contains only non-finite values the
///   fallback is `(0.0, 1.0)`.
/// * If *all* finite values are identical we expand by +-0.5 so the bins
///   still have non-zero width.
#[must_use]
pub fn value_bounds(values: &[f64]) -> (f64, f64) {
    let (mut low, mut high) = (f64::INFINITY, f64::NEG_INFINITY);

    for &v in values {
        if v.is_finite() {
            low = low.min(v);
            high = high.max(v);
        }
    }

    // All values were non-finite or there were none at all.
    if !low.is_finite() || !high.is_finite() {
        return (0.0, 1.0);
    }

    // Degenerate sample - give it some breathing room.
    if (high - low).abs() < f64::EPSILON {
        return (low - 0.5, high + 0.5);
    }

    (low, high)
}

/// Current terminal geometry (80×30 fallback).
#[inline]
#[must_use]
pub fn terminal_geometry() -> (Width, Height) {
    terminal_size().unwrap_or((Width(80), Height(30)))
}

/// Convert terminal dimensions to a graph char grid.
/// Leaves space for borders + labels.
#[inline]
#[must_use]
pub fn graph_dims((w, h): (Width, Height), label_width: usize) -> (usize, usize) {
    let x_chars = std::cmp::max(
        MIN_GRAPH_WIDTH,
        usize::from(w.0).saturating_sub(BORDER_WIDTH + LABEL_GUTTER + label_width + 1),
    );
    let y_chars = std::cmp::max(MIN_GRAPH_HEIGHT, usize::from(h.0).saturating_sub(5));
    (x_chars, y_chars)
}

/// Fixed grid used for plot files, independent of the terminal.
#[inline]
#[must_use]
pub const fn file_dims() -> (usize, usize) {
    (FILE_CANVAS_WIDTH, FILE_CANVAS_HEIGHT)
}

/// How wide will the y-axis labels be for `0..=y_max`?
#[inline]
#[must_use]
pub fn y_label_width(y_max: f64, decimals: usize) -> usize {
    let high = format!("{y_max:.decimals$}").len();
    let low = format!("{:.decimals$}", 0.0).len();
    low.max(high)
}
