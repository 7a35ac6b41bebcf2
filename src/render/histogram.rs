//! Equal-width histogram + reduction onto braille half-columns.
//!
//! * [`Histogram::build`] - count values into `bins` equal-width buckets
//! * [`Histogram::columns`] - fold the buckets onto a fixed number of
//!   half-columns, each keeping the tallest bucket it covers
//!
//! A sample of ten million values asks for 100 000 bins, far more than any
//! canvas has dots, so the reduction is what actually reaches the screen.

use crate::core::{bounds::value_bounds, constants::BIN_FRACTION, error::GraphError};

/// Number of bins for a sample of `len` values (1%, truncated).
#[inline]
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn bin_count(len: usize) -> usize {
    (len as f64 * BIN_FRACTION) as usize
}

#[derive(Clone, Debug)]
pub struct Histogram {
    pub lo: f64,
    pub hi: f64,
    pub counts: Vec<u64>,
}

impl Histogram {
    /// # Errors
    /// * [`GraphError::EmptyData`] for an empty sample
    /// * [`GraphError::InvalidBinCount`] when `bins == 0`
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn build(values: &[f64], bins: usize) -> Result<Self, GraphError> {
        if values.is_empty() {
            return Err(GraphError::EmptyData);
        }
        if bins == 0 {
            return Err(GraphError::InvalidBinCount(bins));
        }

        let (lo, hi) = value_bounds(values);
        let width = (hi - lo) / bins as f64;
        let mut counts = vec![0u64; bins];

        for &v in values {
            if !v.is_finite() {
                continue;
            }
            // last bin is closed on the right
            let idx = (((v - lo) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }

        Ok(Self { lo, hi, counts })
    }

    #[inline]
    #[must_use]
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    #[inline]
    #[must_use]
    pub fn peak(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Reduce the bins onto `target` half-columns.
    ///
    /// Bucket `i` covers bins `[i·n/target, (i+1)·n/target)`. With fewer
    /// bins than columns every bin is stretched over the columns that map
    /// onto it, so the result always has exactly `target` entries.
    #[must_use]
    pub fn columns(&self, target: usize) -> Vec<u64> {
        let n = self.counts.len();
        if target == 0 || n == 0 {
            return Vec::new();
        }
        if n <= target {
            return (0..target).map(|i| self.counts[i * n / target]).collect();
        }

        let mut out = Vec::with_capacity(target);
        for i in 0..target {
            let start = i * n / target;
            let end = (i + 1) * n / target;
            let high = self.counts[start..end].iter().copied().max().unwrap_or(0);
            out.push(high);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn one_percent_bins() {
        assert_eq!(bin_count(10_000_000), 100_000);
        assert_eq!(bin_count(1_000), 10);
        assert_eq!(bin_count(199), 1);
        assert_eq!(bin_count(99), 0);
    }

    #[test]
    fn zero_bins_is_an_error() {
        let err = Histogram::build(&[1.0, 2.0], 0).unwrap_err();
        assert!(matches!(err, GraphError::InvalidBinCount(0)));
    }

    #[test]
    fn empty_is_an_error() {
        assert!(matches!(Histogram::build(&[], 4), Err(GraphError::EmptyData)));
    }

    #[test]
    fn counts_land_in_expected_bins() {
        let h = Histogram::build(&[0.0, 0.1, 0.5, 0.9, 1.0], 2).unwrap();
        assert_eq!((h.lo, h.hi), (0.0, 1.0));
        // 0.5 opens the second bin, 1.0 closes it
        assert_eq!(h.counts, [2, 3]);
        assert_eq!(h.total(), 5);
        assert_eq!(h.peak(), 3);
    }

    #[test]
    fn flat_sample_gets_one_populated_bin() {
        let h = Histogram::build(&[3.0; 10], 5).unwrap();
        assert_eq!(h.total(), 10);
        assert_eq!(h.counts.iter().filter(|&&c| c > 0).count(), 1);
    }

    #[test]
    fn columns_keep_bucket_maximum() {
        let h = Histogram {
            lo: 0.0,
            hi: 1.0,
            counts: vec![1, 5, 2, 2, 9, 0],
        };
        assert_eq!(h.columns(3), [5, 2, 9]);
    }

    #[test]
    fn columns_stretch_few_bins() {
        let h = Histogram {
            lo: 0.0,
            hi: 1.0,
            counts: vec![4, 7],
        };
        assert_eq!(h.columns(4), [4, 4, 7, 7]);
        assert!(h.columns(0).is_empty());
    }

    proptest! {
        #[test]
        fn every_value_is_counted(
            data in proptest::collection::vec(-1e6_f64..1e6, 1..500),
            bins in 1_usize..64,
        ) {
            let h = Histogram::build(&data, bins).unwrap();
            prop_assert_eq!(h.bins(), bins);
            prop_assert_eq!(h.total(), data.len() as u64);
        }

        #[test]
        fn columns_have_target_length(
            counts in proptest::collection::vec(0_u64..1000, 1..400),
            target in 1_usize..300,
        ) {
            let h = Histogram { lo: 0.0, hi: 1.0, counts };
            let cols = h.columns(target);
            prop_assert_eq!(cols.len(), target);
            prop_assert!(cols.iter().all(|&c| c <= h.peak()));
        }
    }
}
