//! Framed braille chart:
//! - title centred in the top rule, subtitle in the bottom rule
//! - y labels (peak count / 0) on the first and last graph rows
//! - one contiguous byte buffer per frame, written in a single call

use std::{
    fs,
    io::{Write, stdout},
    path::Path,
};

use crate::{
    core::{
        bounds::y_label_width,
        config::PlotConfig,
        constants::{DECIMAL_PRECISION, LABEL_GUTTER, MIN_GRAPH_HEIGHT, MIN_GRAPH_WIDTH},
        error::GraphError,
    },
    render::braille::{BraillePlot, encode_braille_into_frame},
};

/// Two spaces in front, one space behind
const TITLE_PADDING: usize = 3;

// Box-drawing glyphs
const TL: &str = "┌";
const TR: &str = "┐";
const BL: &str = "└";
const BR: &str = "┘";
const H: &str = "─";
const V: &str = "│";

const V_B: &[u8] = V.as_bytes();

// --- Helpers ---

/// Write centred text between horizontal rules.
fn push_centered(buf: &mut String, text: &str, width: usize) {
    let inner = width.saturating_sub(TITLE_PADDING);
    let len = text.chars().count();
    if len == 0 || len > inner {
        buf.push_str(&H.repeat(width));
        return;
    }
    let pad_left = (inner - len) / 2;
    let pad_right = inner - len - pad_left;

    buf.push_str(&H.repeat(pad_left));
    buf.push_str("  "); // 2-char left padding
    buf.push_str(text);
    buf.push(' '); // 1-char right padding
    buf.push_str(&H.repeat(pad_right));
}

/// Where a finished frame goes.
#[derive(Clone, Copy, Debug)]
pub enum Target<'a> {
    File(&'a Path),
    Stdout,
}

#[derive(Default)]
pub struct Renderer {
    chrome_top: Vec<u8>,
    chrome_bot: Vec<u8>,
    graph_buf: Vec<u8>,
}

impl Renderer {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn refresh_chrome(&mut self, cfg: &PlotConfig, label_width: usize) {
        let inner = cfg.x_chars + label_width + LABEL_GUTTER;

        // --- top ---
        let mut top = String::new();
        top.push_str(TL);
        push_centered(&mut top, &cfg.title, inner);
        top.push_str(TR);
        top.push('\n');

        top.push_str(V);
        top.push_str(&" ".repeat(inner));
        top.push_str(V);
        top.push('\n');

        self.chrome_top.clear();
        self.chrome_top.extend_from_slice(top.as_bytes());

        // --- bottom ---
        let mut bot = String::new();
        bot.push_str(V);
        bot.push_str(&" ".repeat(inner));
        bot.push_str(V);
        bot.push('\n');

        bot.push_str(BL);
        if let Some(sub) = &cfg.subtitle {
            push_centered(&mut bot, sub, inner);
        } else {
            bot.push_str(&H.repeat(inner));
        }
        bot.push_str(BR);
        bot.push('\n');

        self.chrome_bot.clear();
        self.chrome_bot.extend_from_slice(bot.as_bytes());
    }

    /// Build the whole graph area (all rows) directly into `self.graph_buf`.
    fn fill_graph_rows(
        &mut self,
        cfg: &PlotConfig,
        plot: &BraillePlot,
        label_width: usize,
    ) -> Result<(), GraphError> {
        if cfg.x_chars < MIN_GRAPH_WIDTH || cfg.y_chars < MIN_GRAPH_HEIGHT {
            return Err(GraphError::GraphTooSmall {
                want_w: MIN_GRAPH_WIDTH,
                want_h: MIN_GRAPH_HEIGHT,
                got_w: cfg.x_chars,
                got_h: cfg.y_chars,
            });
        }

        let high_label = format!("{:.*}", DECIMAL_PRECISION, cfg.y_max);
        let low_label = format!("{:.*}", DECIMAL_PRECISION, 0.0);

        // Per-row byte layout
        let braille_bytes = cfg.x_chars * 3; // 3 bytes per glyph
        let prefix_bytes = V_B.len() + label_width + LABEL_GUTTER;
        let row_bytes = prefix_bytes + braille_bytes + V_B.len(); // (no '\n')

        let stride = row_bytes + 1; // include '\n'
        self.graph_buf.clear();
        self.graph_buf.resize(stride * cfg.y_chars, b' ');

        for r in 0..cfg.y_chars {
            let base = r * stride;

            // Left border; label field + gutter are already spaces
            self.graph_buf[base..base + V_B.len()].copy_from_slice(V_B);

            // Right border
            let right = base + prefix_bytes + braille_bytes;
            self.graph_buf[right..right + V_B.len()].copy_from_slice(V_B);

            self.graph_buf[base + row_bytes] = b'\n';
        }

        // Y labels (top / bottom rows only), right-aligned
        let top_off = V_B.len() + label_width - high_label.len();
        self.graph_buf[top_off..top_off + high_label.len()].copy_from_slice(high_label.as_bytes());

        let last_row_base = (cfg.y_chars - 1) * stride;
        let bot_off = last_row_base + V_B.len() + label_width - low_label.len();
        self.graph_buf[bot_off..bot_off + low_label.len()].copy_from_slice(low_label.as_bytes());

        encode_braille_into_frame(
            &mut self.graph_buf,
            prefix_bytes,
            stride,
            plot,
            cfg.x_chars,
            cfg.y_chars,
        );

        Ok(())
    }

    /// Assemble one frame: chrome top, graph rows, chrome bottom.
    ///
    /// # Errors
    /// [`GraphError::GraphTooSmall`] below the minimum grid.
    pub fn frame(
        &mut self,
        config: &PlotConfig,
        plot: &BraillePlot,
    ) -> Result<Vec<u8>, GraphError> {
        let label_width = y_label_width(config.y_max, DECIMAL_PRECISION);
        self.fill_graph_rows(config, plot, label_width)?;
        self.refresh_chrome(config, label_width);

        let mut out = Vec::with_capacity(
            self.chrome_top.len() + self.graph_buf.len() + self.chrome_bot.len(),
        );
        out.extend_from_slice(&self.chrome_top);
        out.extend_from_slice(&self.graph_buf);
        out.extend_from_slice(&self.chrome_bot);
        Ok(out)
    }

    /// Main render entry.
    ///
    /// # Errors
    /// Frame construction errors and I/O failures.
    pub fn render(
        &mut self,
        config: &PlotConfig,
        plot: &BraillePlot,
        target: Target<'_>,
    ) -> Result<(), GraphError> {
        let frame = self.frame(config, plot)?;
        match target {
            Target::File(path) => {
                if let Some(dir) = path.parent() {
                    fs::create_dir_all(dir)?;
                }
                fs::write(path, &frame)?;
            }
            Target::Stdout => {
                let mut term = stdout().lock();
                term.write_all(&frame)?;
                term.flush()?;
            }
        }
        Ok(())
    }
}
