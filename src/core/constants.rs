//! A collection of constants.

// --- Generator ---

/// LCG multiplier (glibc `rand`).
pub const LCG_A: u64 = 1_103_515_245;
/// LCG increment (glibc `rand`).
pub const LCG_C: u64 = 12_345;
/// LCG modulus, 2^31. Every emitted value lies in `[0, LCG_M)`.
pub const LCG_M: u64 = 1 << 31;

/// Seed used when none is given.
pub const DEFAULT_SEED: u64 = 42;
/// Numbers generated per mode.
pub const DEFAULT_SAMPLES: usize = 10_000_000;

// --- Cauchy ---

/// Location parameter of the generated distribution.
pub const CAUCHY_X0: f64 = 0.0;
/// Scale parameter of the generated distribution.
pub const CAUCHY_GAMMA: f64 = 1.0;

/// `2 / π`, peak of the scaled density on `[-1, 1]`.
pub const TWO_OVER_PI: f64 = 2.0 / std::f64::consts::PI;

/// Cauchy values outside `[-HISTOGRAM_LIMIT, HISTOGRAM_LIMIT]` are dropped
/// before plotting, the tails would flatten the histogram to a spike.
pub const HISTOGRAM_LIMIT: f64 = 4.0;

// --- Histogram ---

/// One bin per hundred plotted values.
pub const BIN_FRACTION: f64 = 0.01;

/// Output directory for histogram files.
pub const DEFAULT_OUT_DIR: &str = "plots";

/// File canvas, in character cells (288 × 144 braille dots, 2:1).
pub const FILE_CANVAS_WIDTH: usize = 144;
/// File canvas, in character cells.
pub const FILE_CANVAS_HEIGHT: usize = 36;

// --- Frame ---

/// The left and right border characters
pub const BORDER_WIDTH: usize = 2;
/// One character of space between y axis labels and the plotted data
pub const LABEL_GUTTER: usize = 1;

/// Graph must be at least 7 characters tall
pub const MIN_GRAPH_HEIGHT: usize = 7;
/// Graph must be at least 14 characters wide
pub const MIN_GRAPH_WIDTH: usize = 14;

/// Braille has 2 horizontal dots and four vertical dots that can be either off or on
pub const BRAILLE_HORIZONTAL_RESOLUTION: usize = 2;
/// Braille has 2 horizontal dots and four vertical dots that can be either off or on
pub const BRAILLE_VERTICAL_RESOLUTION: usize = 4;

/// Axis labels are rounded to the first decimal place.
///
/// 14.832 becomes 14.8
pub const DECIMAL_PRECISION: usize = 1;
