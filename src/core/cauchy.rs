//! Uniform → Cauchy transforms.
//!
//! Both methods draw from the caller's [`Lcg`], so the number of draws per
//! variate is part of the stream contract:
//! * [`Method::Tangent`]   - one draw
//! * [`Method::Rejection`] - three or four draws

use std::f64::consts::PI;

use crate::core::{
    constants::{CAUCHY_GAMMA, CAUCHY_X0, TWO_OVER_PI},
    rng::Lcg,
};

/// Envelope offset of the rejection step.
const TWO_OVER_PI_MINUS_HALF: f64 = TWO_OVER_PI - 0.5;

/// How uniform variates become Cauchy variates.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Method {
    /// Inverse CDF: `tan(π · u)`.
    Tangent,
    /// Density acceptance test with a one-shot redraw, then tail folding.
    Rejection,
}

/// Location/scale pair applied to a standard variate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cauchy {
    pub x0: f64,
    pub gamma: f64,
}

impl Default for Cauchy {
    fn default() -> Self {
        Self {
            x0: CAUCHY_X0,
            gamma: CAUCHY_GAMMA,
        }
    }
}

impl Cauchy {
    /// One variate drawn with `method`.
    #[inline]
    pub fn sample(&self, method: Method, rng: &mut Lcg) -> f64 {
        let x = match method {
            Method::Tangent => tangent(rng),
            Method::Rejection => rejection(rng),
        };
        self.x0 + self.gamma * x
    }

    /// `n` variates in draw order.
    pub fn sample_n(&self, method: Method, rng: &mut Lcg, n: usize) -> Vec<f64> {
        let mut out = Vec::with_capacity(n);
        for _ in 0..n {
            out.push(self.sample(method, rng));
        }
        out
    }
}

/// Scaled Cauchy density, `(2/π) / (1 + x²)` on `[-1, 1]` and zero outside.
#[inline]
#[must_use]
pub fn density(x: f64) -> f64 {
    if (-1.0..=1.0).contains(&x) {
        TWO_OVER_PI / (1.0 + x * x)
    } else {
        0.0
    }
}

/// `true` when `(x, y)` falls under the envelope.
#[inline]
#[must_use]
pub fn accepts(x: f64, y: f64) -> bool {
    y <= 2.0 * (density(x) - TWO_OVER_PI_MINUS_HALF)
}

/// Reciprocal folding that grows the tails beyond `[-1, 1]`.
///
/// Applied only when `t < 0.5`. Zero folds to `f64::MAX`, never to infinity.
#[inline]
#[must_use]
pub fn fold_tail(x: f64, t: f64) -> f64 {
    if t >= 0.5 {
        x
    } else if x == 0.0 {
        f64::MAX
    } else {
        1.0 / x
    }
}

#[inline]
fn tangent(rng: &mut Lcg) -> f64 {
    (rng.uniform(-0.5, 0.5) * PI).tan()
}

#[inline]
fn rejection(rng: &mut Lcg) -> f64 {
    let mut x = rng.uniform(-1.0, 1.0);
    let y = rng.uniform(0.0, 1.0);

    // A rejected candidate is replaced once and the replacement is kept
    // without a second test.
    if !accepts(x, y) {
        x = rng.uniform(-1.0, 1.0);
    }

    let t = rng.uniform(0.0, 1.0);
    fold_tail(x, t)
}
