//! Descriptive statistics over one generated sample.
//!
//! # Conventions
//!
//! - **Moments** use plain left-to-right summation in two passes and the
//!   *population* variance (denominator `n`). Both results are divided by
//!   the LCG modulus so they read as fractions of the generator's range.
//! - **Quartiles** are order statistics at truncated indices `n/4`, `n/2`
//!   and `3n/4`; no interpolation. The median of an even-sized sample is
//!   the mean of the two middle elements.

use std::fmt;

use crate::core::{constants::LCG_M, error::GraphError};

/// Summary handed to the report.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Stats {
    /// Normalised mean and standard deviation of raw LCG output.
    Moments { mean: f64, std_dev: f64 },
    /// Order statistics of a Cauchy sample.
    Quartiles {
        q1: f64,
        median: f64,
        q3: f64,
        iqr: f64,
    },
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stats::Moments { mean, std_dev } => {
                writeln!(f, "\tMean: {mean:.6}")?;
                write!(f, "\tStandard deviation: {std_dev:.6}")
            }
            Stats::Quartiles {
                q1,
                median,
                q3,
                iqr,
            } => {
                writeln!(f, "\t1st quartile: {q1:.6}")?;
                writeln!(f, "\tMedian: {median:.6}")?;
                writeln!(f, "\t3rd quartile: {q3:.6}")?;
                write!(f, "\tInterquartile range: {iqr:.6}")
            }
        }
    }
}

/// Mean and population standard deviation, both divided by `LCG_M`.
///
/// # Errors
/// [`GraphError::EmptyData`] if `sample` is empty.
///
/// # Examples
/// ```
/// use lcg_cauchy::core::stats::{Stats, lcg_stats};
/// let m = (1u64 << 31) as f64;
/// let Stats::Moments { mean, std_dev } = lcg_stats(&[0.0, m]).unwrap() else {
///     unreachable!()
/// };
/// assert_eq!(mean, 0.5);
/// assert_eq!(std_dev, 0.5);
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn lcg_stats(sample: &[f64]) -> Result<Stats, GraphError> {
    if sample.is_empty() {
        return Err(GraphError::EmptyData);
    }
    let n = sample.len() as f64;

    let mut sum = 0.0;
    for &x in sample {
        sum += x;
    }
    let mean = sum / n;

    let mut squares = 0.0;
    for &x in sample {
        let d = x - mean;
        squares += d * d;
    }
    let std_dev = (squares / n).sqrt();

    let m = LCG_M as f64;
    Ok(Stats::Moments {
        mean: mean / m,
        std_dev: std_dev / m,
    })
}

/// Quartiles, median and IQR. **Sorts `sample` in place.**
///
/// Callers that still need generation order must copy or filter first.
///
/// # Errors
/// [`GraphError::EmptyData`] if `sample` is empty.
#[allow(clippy::manual_midpoint)]
pub fn cauchy_stats(sample: &mut [f64]) -> Result<Stats, GraphError> {
    let n = sample.len();
    if n == 0 {
        return Err(GraphError::EmptyData);
    }
    sample.sort_unstable_by(f64::total_cmp);

    let mut median = sample[n / 2];
    if n % 2 == 0 {
        // plain sum-and-halve; `f64::midpoint` rounds differently near overflow
        median = (median + sample[n / 2 - 1]) / 2.0;
    }

    let q1 = sample[n / 4];
    let q3 = sample[(3 * n) / 4];

    Ok(Stats::Quartiles {
        q1,
        median,
        q3,
        iqr: q3 - q1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{constants::DEFAULT_SEED, rng::Lcg};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    fn quartiles(s: Stats) -> (f64, f64, f64, f64) {
        match s {
            Stats::Quartiles {
                q1,
                median,
                q3,
                iqr,
            } => (q1, median, q3, iqr),
            Stats::Moments { .. } => panic!("expected quartiles"),
        }
    }

    // --- lcg_stats ---

    #[test]
    fn moments_divide_by_n() {
        let m = (1u64 << 31) as f64;
        let v: Vec<f64> = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]
            .iter()
            .map(|x| x * m)
            .collect();
        let Stats::Moments { mean, std_dev } = lcg_stats(&v).unwrap() else {
            panic!("expected moments");
        };
        assert_relative_eq!(mean, 5.0);
        assert_relative_eq!(std_dev, 2.0);
    }

    #[test]
    fn moments_of_constant() {
        let Stats::Moments { std_dev, .. } = lcg_stats(&[12_345.0; 50]).unwrap() else {
            panic!("expected moments");
        };
        assert_eq!(std_dev, 0.0);
    }

    #[test]
    fn moments_empty() {
        assert!(matches!(lcg_stats(&[]), Err(GraphError::EmptyData)));
    }

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn thousand_lcg_values_look_uniform() {
        let mut rng = Lcg::seed(DEFAULT_SEED);
        let v: Vec<f64> = (0..1_000).map(|_| rng.next() as f64).collect();
        let Stats::Moments { mean, std_dev } = lcg_stats(&v).unwrap() else {
            panic!("expected moments");
        };
        assert_abs_diff_eq!(mean, 0.5, epsilon = 0.01);
        assert_abs_diff_eq!(std_dev, 1.0 / 12f64.sqrt(), epsilon = 0.01);
        assert_abs_diff_eq!(mean, 0.508_239_345_842_972_4, epsilon = 1e-12);
        assert_abs_diff_eq!(std_dev, 0.291_498_961_564_659_6, epsilon = 1e-12);
    }

    // --- cauchy_stats ---

    #[test]
    fn odd_median_is_middle_element() {
        let mut v = vec![5.0, 1.0, 4.0, 2.0, 3.0];
        let (q1, median, q3, iqr) = quartiles(cauchy_stats(&mut v).unwrap());
        assert_eq!(median, 3.0);
        assert_eq!(q1, 2.0); // index 1
        assert_eq!(q3, 4.0); // index 3
        assert_eq!(iqr, 2.0);
    }

    #[test]
    fn even_median_averages_middle_pair() {
        let mut v = vec![8.0, 1.0, 7.0, 2.0, 6.0, 3.0, 5.0, 4.0];
        let (q1, median, q3, iqr) = quartiles(cauchy_stats(&mut v).unwrap());
        assert_eq!(median, 4.5);
        assert_eq!(q1, 3.0); // index 2
        assert_eq!(q3, 7.0); // index 6
        assert_eq!(iqr, 4.0);
    }

    #[test]
    fn indices_truncate() {
        // n = 10: q1 at 2, q3 at 7, median mean of 4 and 5
        let mut v: Vec<f64> = (0..10).rev().map(f64::from).collect();
        let (q1, median, q3, _) = quartiles(cauchy_stats(&mut v).unwrap());
        assert_eq!(q1, 2.0);
        assert_eq!(median, 4.5);
        assert_eq!(q3, 7.0);
    }

    #[test]
    fn single_element() {
        let mut v = vec![-3.5];
        let (q1, median, q3, iqr) = quartiles(cauchy_stats(&mut v).unwrap());
        assert_eq!((q1, median, q3, iqr), (-3.5, -3.5, -3.5, 0.0));
    }

    #[test]
    fn sorts_in_place() {
        let mut v = vec![3.0, f64::MAX, -1.0, 0.0];
        cauchy_stats(&mut v).unwrap();
        assert_eq!(v, [-1.0, 0.0, 3.0, f64::MAX]);
    }

    #[test]
    fn quartiles_empty() {
        assert!(matches!(
            cauchy_stats(&mut Vec::new()),
            Err(GraphError::EmptyData)
        ));
    }

    #[test]
    fn report_format() {
        let s = Stats::Moments {
            mean: 0.5,
            std_dev: 0.25,
        };
        assert_eq!(
            s.to_string(),
            "\tMean: 0.500000\n\tStandard deviation: 0.250000"
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn quartiles_are_ordered(mut data in proptest::collection::vec(-1e9_f64..1e9, 4..=200)) {
            let (q1, median, q3, iqr) = quartiles(cauchy_stats(&mut data).unwrap());
            prop_assert!(q1 <= median && median <= q3, "{} {} {}", q1, median, q3);
            prop_assert!(iqr >= 0.0);
        }

        #[test]
        fn odd_median_exact(mut data in proptest::collection::vec(-1e9_f64..1e9, 1..=99)) {
            if data.len() % 2 == 0 {
                data.pop();
            }
            let mut sorted = data.clone();
            sorted.sort_by(f64::total_cmp);
            let (_, median, _, _) = quartiles(cauchy_stats(&mut data).unwrap());
            prop_assert_eq!(median.to_bits(), sorted[sorted.len() / 2].to_bits());
        }
    }
}
