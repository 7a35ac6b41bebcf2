//! Linear congruential generator, the single source of randomness.
//!
//! `r(n+1) = (A · r(n) + C) mod M` with the glibc constants and M = 2^31.
//! Every consumer borrows the same `Lcg` mutably, so the order of calls is
//! part of the output: two runs with the same seed and the same call
//! sequence produce bit-identical samples.

use crate::core::constants::{LCG_A, LCG_C, LCG_M};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lcg(u64);

impl Lcg {
    #[must_use]
    pub fn seed(seed: u64) -> Self {
        Self(seed)
    }

    /// Current register value. After the first step it is always `< LCG_M`.
    #[inline]
    #[must_use]
    pub fn state(&self) -> u64 {
        self.0
    }

    /// Advance the register and return the new value.
    ///
    /// The seed itself is never emitted. A seed above `LCG_M` wraps in 64-bit
    /// arithmetic on the first step; from then on `A · r + C` fits in a u64.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> u64 {
        self.0 = LCG_A.wrapping_mul(self.0).wrapping_add(LCG_C) % LCG_M;
        self.0
    }

    /// Uniform value in `[lo, hi)`.
    #[inline]
    #[allow(clippy::cast_precision_loss)]
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        let x_norm = self.next() as f64 / LCG_M as f64;
        x_norm * (hi - lo) + lo
    }
}
