// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Naive numeric differentiation and integration over `f64` functions.
//!
//! No error estimation or adaptive stepping; accuracy is whatever the step
//! size gives.

/// Step count used by [`integrate_default`].
pub const DEFAULT_INTEGRATION_STEPS: u32 = 1_000_000;

/// Forward difference `(f(a + h) - f(a)) / h`.
///
/// # Examples
/// ```
/// use mars_math::differentiate;
/// let slope = differentiate(|x| x * x, 3.0, 1e-6);
/// assert!((slope - 6.0).abs() < 1e-4);
/// ```
pub fn differentiate<F>(f: F, a: f64, h: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    (f(a + h) - f(a)) / h
}

/// Left Riemann sum of `f` over `[a, b]` with `steps` strips.
///
/// `steps == 0` yields `0.0`. Reversed bounds give a negated result.
pub fn integrate<F>(f: F, a: f64, b: f64, steps: u32) -> f64
where
    F: Fn(f64) -> f64,
{
    if steps == 0 {
        return 0.0;
    }
    let dx = (b - a) / f64::from(steps);
    (0..steps).map(|i| f(a + f64::from(i) * dx) * dx).sum()
}

/// [`integrate`] with [`DEFAULT_INTEGRATION_STEPS`] strips.
pub fn integrate_default<F>(f: F, a: f64, b: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    integrate(f, a, b, DEFAULT_INTEGRATION_STEPS)
}
