//! Histogram rendering: bin → reduce to half-columns → braille → frame.

pub mod braille;
pub mod frame;
pub mod histogram;

use std::path::{Path, PathBuf};

use tracing::debug;

pub use braille::{BraillePlot, preprocess_to_braille};
pub use frame::{Renderer, Target};
pub use histogram::{Histogram, bin_count};

use crate::core::{
    bounds::{file_dims, graph_dims, terminal_geometry, y_label_width},
    config::PlotConfig,
    constants::{BRAILLE_HORIZONTAL_RESOLUTION as HR, DECIMAL_PRECISION},
    error::GraphError,
};

/// Grid the histogram is drawn on.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Canvas {
    /// Fixed size, independent of where the program runs.
    File,
    /// Current terminal size.
    Terminal,
}

impl Canvas {
    /// `(x_chars, y_chars)` once the y-label width is known.
    #[must_use]
    pub fn dims(self, label_width: usize) -> (usize, usize) {
        match self {
            Canvas::File => file_dims(),
            Canvas::Terminal => graph_dims(terminal_geometry(), label_width),
        }
    }
}

/// Plot file for `title` under `dir`.
#[must_use]
pub fn plot_path(dir: &Path, title: &str) -> PathBuf {
    dir.join(format!("{title}.txt"))
}

/// Bin `values` (1% of their count), draw them on `canvas` and send the
/// frame to `target`.
///
/// # Errors
/// * [`GraphError::EmptyData`] / [`GraphError::InvalidBinCount`] when the
///   histogram cannot be built
/// * [`GraphError::GraphTooSmall`] / [`GraphError::Io`] from the renderer
#[allow(clippy::cast_precision_loss)]
pub fn plot_histogram(
    values: &[f64],
    title: &str,
    canvas: Canvas,
    target: Target<'_>,
) -> Result<Histogram, GraphError> {
    let bins = bin_count(values.len());
    let hist = Histogram::build(values, bins)?;

    let peak = hist.peak() as f64;
    let (x_chars, y_chars) = canvas.dims(y_label_width(peak, DECIMAL_PRECISION));
    let columns = hist.columns(x_chars * HR);
    debug!(
        title,
        bins,
        values = values.len(),
        x_chars,
        y_chars,
        "rendering histogram"
    );

    let cfg = PlotConfig::builder(x_chars, y_chars)
        .title(title)
        .subtitle(format!(
            "[{:.2}, {:.2}]  n = {}  bins = {}",
            hist.lo,
            hist.hi,
            values.len(),
            bins
        ))
        .y_max(peak)
        .build()?;

    let plot = preprocess_to_braille(&columns, &cfg)?;
    Renderer::new().render(&cfg, &plot, target)?;
    Ok(hist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn too_few_values_for_a_bin() {
        let dir = std::env::temp_dir().join("lcg-cauchy-few-values");
        let path = plot_path(&dir, "t");
        let err = plot_histogram(&[1.0; 99], "t", Canvas::File, Target::File(&path)).unwrap_err();
        assert!(matches!(err, GraphError::InvalidBinCount(0)));
        assert!(!path.exists());
    }

    #[test]
    fn empty_input_is_fatal() {
        let dir = std::env::temp_dir().join("lcg-cauchy-empty");
        let path = plot_path(&dir, "t");
        let err = plot_histogram(&[], "t", Canvas::File, Target::File(&path)).unwrap_err();
        assert!(matches!(err, GraphError::EmptyData));
    }

    #[test]
    fn file_canvas_has_fixed_size() {
        let dir = std::env::temp_dir().join("lcg-cauchy-file-canvas");
        let _ = fs::remove_dir_all(&dir);
        let path = plot_path(&dir, "Uniform");

        let values: Vec<f64> = (0..5_000).map(|i| f64::from(i % 100)).collect();
        let hist = plot_histogram(&values, "Uniform", Canvas::File, Target::File(&path)).unwrap();
        assert_eq!(hist.bins(), 50);
        assert_eq!(hist.total(), 5_000);

        let text = fs::read_to_string(&path).unwrap();
        let (w, h) = file_dims();
        assert_eq!(text.lines().count(), h + 4);
        assert!(text.lines().nth(2).unwrap().chars().count() > w);
        assert!(text.contains("bins = 50"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn path_is_title_under_dir() {
        assert_eq!(
            plot_path(Path::new("plots"), "Cauchy Generator"),
            PathBuf::from("plots/Cauchy Generator.txt")
        );
    }
}
