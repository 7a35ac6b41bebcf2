//! Generation modes and the display filter.

use std::fmt;

use crate::core::{
    cauchy::{Cauchy, Method},
    constants::HISTOGRAM_LIMIT,
    rng::Lcg,
};

/// The three sample kinds a run produces, in run order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    Lcg,
    Cauchy,
    CauchyNoTangent,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Lcg, Mode::Cauchy, Mode::CauchyNoTangent];

    /// Histogram title; also the plot file stem.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Mode::Lcg => "Linear Congruential Generator",
            Mode::Cauchy => "Cauchy Generator",
            Mode::CauchyNoTangent => "Cauchy Generator no tangent",
        }
    }

    /// Label used in the console report.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Mode::Lcg => "LGC",
            Mode::Cauchy => "Cauchy",
            Mode::CauchyNoTangent => "Cauchy no tangent",
        }
    }

    /// Draw `n` values for this mode.
    ///
    /// LCG values are the raw register outputs as `f64`.
    #[allow(clippy::cast_precision_loss)]
    pub fn generate(self, rng: &mut Lcg, n: usize) -> Vec<f64> {
        match self {
            Mode::Lcg => {
                let mut out = Vec::with_capacity(n);
                for _ in 0..n {
                    out.push(rng.next() as f64);
                }
                out
            }
            Mode::Cauchy => Cauchy::default().sample_n(Method::Tangent, rng, n),
            Mode::CauchyNoTangent => Cauchy::default().sample_n(Method::Rejection, rng, n),
        }
    }

    /// Cauchy samples are clipped before plotting; LCG samples are not.
    #[must_use]
    pub fn clips_for_display(self) -> bool {
        !matches!(self, Mode::Lcg)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Values within `[-HISTOGRAM_LIMIT, HISTOGRAM_LIMIT]`, original order kept.
#[must_use]
pub fn filter_for_histogram(sample: &[f64]) -> Vec<f64> {
    sample
        .iter()
        .copied()
        .filter(|x| (-HISTOGRAM_LIMIT..=HISTOGRAM_LIMIT).contains(x))
        .collect()
}
