//! Histogram columns to UTF-8 braille grid, zero intermediate buffers.
//!
//! ### Workflow
//! 1. `preprocess_to_braille` maps per-half-column bar heights into
//!    pixel-space spans (`BarStep`), one entry per *half* column. A bar
//!    always reaches the bottom row, so each span is contiguous.
//! 2. `encode_braille_into_frame` fills a caller-supplied buffer laid out
//!    row-major with exactly three bytes per character cell. Every braille
//!    scalar U+2800..U+28FF encodes to the fixed pattern
//!    `E2 A0/.. A0+((mask>>6)&3)  80|mask&0x3F`, so we write bytes directly
//!    without `char::encode_utf8` or any temporary mask array.
//!
//! The intersection of a contiguous vertical range with a 4-pixel braille
//! cell is one of 11 canonical patterns (full, top/bottom triplet,
//! top/middle/bottom pair, the four single dots, and empty). The bit-mask
//! of each pattern is pre-computed for the left and the right half-column.

use crate::core::{
    config::PlotConfig, constants::BRAILLE_VERTICAL_RESOLUTION, error::GraphError,
};

/// Pixel-space span inside one half-column, `top <= bottom`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarStep {
    pub top: usize,
    pub bottom: usize,
}

/// One entry per half-column; `None` is an empty bar.
pub struct BraillePlot {
    pub steps: Vec<Option<BarStep>>,
}

// --- Pre-Computed Masks ---

/// Pattern enumeration (11 entries):
///
/// 0 empty (⠀), 1 full (⡇), 2 top-three (⠇), 3 bottom-three(⡆), 4 top-two (⠃), 5 middle-two (⠆), 6 bottom-two (⡄),
/// 7 dot-zero (⠁), 8 dot-one (⠂), 9 dot-two (⠄), 10 dot-three (⡀)
const LEFT_MASKS: [u8; 11] = [
    0x00, 0x47, 0x07, 0x46, 0x03, 0x06, 0x44, 0x01, 0x02, 0x04, 0x40,
];
/// Pattern enumeration (11 entries):
///
/// 0 empty (⠀), 1 full (⢸), 2 top-three (⠸), 3 bottom-three(⢰), 4 top-two (⠘), 5 middle-two (⠰), 6 bottom-two (⢠),
/// 7 dot-zero (⠈), 8 dot-one (⠐), 9 dot-two (⠠), 10 dot-three (⢀)
const RIGHT_MASKS: [u8; 11] = [
    0x00, 0xB8, 0x38, 0xB0, 0x18, 0x30, 0xA0, 0x08, 0x10, 0x20, 0x80,
];

/// Map `(low, high)` pixel offsets inside a 4-row cell to the pattern id.
#[inline]
const fn pattern_id(low: usize, high: usize) -> usize {
    match (low, high) {
        (0, 3) => 1,  // full
        (0, 2) => 2,  // top-3
        (1, 3) => 3,  // bottom-3
        (0, 1) => 4,  // top-2
        (1, 2) => 5,  // middle-2
        (2, 3) => 6,  // bottom-2
        (0, 0) => 7,  // single-0
        (1, 1) => 8,  // single-1
        (2, 2) => 9,  // single-2
        (3, 3) => 10, // single-3
        _ => 0,       // empty / no overlap
    }
}

/// Turn bar heights (counts) into pixel spans for `config`'s grid.
///
/// Non-zero bars are at least one dot tall so sparse bins stay visible.
///
/// # Errors
/// [`GraphError::EmptyData`] if `heights` is empty.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn preprocess_to_braille(
    heights: &[u64],
    config: &PlotConfig,
) -> Result<BraillePlot, GraphError> {
    if heights.is_empty() {
        return Err(GraphError::EmptyData);
    }

    let vert_px = config.y_chars * BRAILLE_VERTICAL_RESOLUTION;
    let bottom = vert_px - 1;

    // λ : [0, y_max] → number of lit dots
    let lit = |h: u64| -> usize {
        if h == 0 {
            return 0;
        }
        let r = (h as f64 / config.y_max).clamp(0.0, 1.0) * vert_px as f64;
        (r.round() as usize).clamp(1, vert_px)
    };

    let steps = heights
        .iter()
        .map(|&h| match lit(h) {
            0 => None,
            n => Some(BarStep {
                top: vert_px - n,
                bottom,
            }),
        })
        .collect();

    Ok(BraillePlot { steps })
}

#[inline]
fn cell_pattern(step: Option<&Option<BarStep>>, row_top: usize, row_bottom: usize) -> usize {
    match step {
        Some(Some(s)) if s.bottom >= row_top && s.top <= row_bottom => pattern_id(
            s.top.max(row_top) - row_top,
            s.bottom.min(row_bottom) - row_top,
        ),
        _ => 0,
    }
}

/// Encode `plot` straight into `buf`, which is the full frame buffer.
///
/// * `offset` -- byte index of the first braille cell (row 0, col 0)
/// * `row_stride` -- bytes between successive graph rows in `buf`
pub fn encode_braille_into_frame(
    buf: &mut [u8],
    offset: usize,
    row_stride: usize,
    plot: &BraillePlot,
    x_chars: usize,
    y_chars: usize,
) {
    debug_assert!(
        buf.len() >= offset + row_stride * (y_chars - 1) + x_chars * 3,
        "frame buffer too small"
    );

    for row in 0..y_chars {
        let row_top = row * BRAILLE_VERTICAL_RESOLUTION;
        let row_bottom = row_top + 3;
        let row_base = offset + row * row_stride;

        for col in 0..x_chars {
            let left_index = col * 2;
            let left = cell_pattern(plot.steps.get(left_index), row_top, row_bottom);
            let right = cell_pattern(plot.steps.get(left_index + 1), row_top, row_bottom);

            // https://en.wikipedia.org/wiki/Braille_Patterns
            let mask = LEFT_MASKS[left] | RIGHT_MASKS[right];
            let cell = row_base + col * 3;
            buf[cell] = 0xE2;
            // bits 6-7: the two bottom dots
            buf[cell + 1] = 0xA0 | ((mask >> 6) & 0x03);
            // bits 0-5: the classic six dots
            buf[cell + 2] = 0x80 | (mask & 0x3F);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(x: usize, y: usize, y_max: f64) -> PlotConfig {
        PlotConfig::builder(x, y).y_max(y_max).build().unwrap()
    }

    fn render(plot: &BraillePlot, x: usize, y: usize) -> Vec<String> {
        let stride = x * 3;
        let mut buf = vec![0u8; stride * y];
        encode_braille_into_frame(&mut buf, 0, stride, plot, x, y);
        buf.chunks(stride)
            .map(|r| String::from_utf8(r.to_vec()).unwrap())
            .collect()
    }

    #[test]
    fn empty_heights_error() {
        assert!(matches!(
            preprocess_to_braille(&[], &cfg(2, 2, 1.0)),
            Err(GraphError::EmptyData)
        ));
    }

    #[test]
    fn bars_reach_the_bottom() {
        let plot = preprocess_to_braille(&[10, 5, 0, 1], &cfg(2, 2, 10.0)).unwrap();
        assert_eq!(plot.steps[0], Some(BarStep { top: 0, bottom: 7 }));
        assert_eq!(plot.steps[1], Some(BarStep { top: 4, bottom: 7 }));
        assert_eq!(plot.steps[2], None);
        // 1/10 of 8 dots rounds to 1
        assert_eq!(plot.steps[3], Some(BarStep { top: 7, bottom: 7 }));
    }

    #[test]
    fn tiny_bars_stay_visible() {
        let plot = preprocess_to_braille(&[1], &cfg(1, 1, 1_000_000.0)).unwrap();
        assert_eq!(plot.steps[0], Some(BarStep { top: 3, bottom: 3 }));
    }

    #[test]
    fn full_and_half_columns_encode() {
        let plot = preprocess_to_braille(&[10, 5], &cfg(1, 2, 10.0)).unwrap();
        let rows = render(&plot, 1, 2);
        // top row: only the left column is lit
        assert_eq!(rows[0], "⡇");
        // bottom row: both columns full
        assert_eq!(rows[1], "⣿");
    }

    #[test]
    fn empty_grid_is_blank_braille() {
        let plot = preprocess_to_braille(&[0, 0, 0, 0], &cfg(2, 1, 1.0)).unwrap();
        assert_eq!(render(&plot, 2, 1), ["⠀⠀"]);
    }

    #[test]
    fn patterns_are_exhaustive() {
        let mut seen = [false; 11];
        for low in 0..4 {
            for high in low..4 {
                seen[pattern_id(low, high)] = true;
            }
        }
        assert!(seen[1..].iter().all(|&s| s));
    }
}
