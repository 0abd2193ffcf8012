// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Degree/radian conversion.

use crate::scalar::Real;

/// Archimedes' constant.
pub const PI: f64 = core::f64::consts::PI;

/// Full turn in radians.
pub const TAU: f64 = core::f64::consts::TAU;

/// Converts degrees to radians in the precision of the input.
///
/// # Examples
/// ```
/// use mars_math::{deg_to_rad, PI};
/// assert!((deg_to_rad(180.0_f64) - PI).abs() < 1e-15);
/// assert!((deg_to_rad(90.0_f32) - core::f32::consts::FRAC_PI_2).abs() < 1e-6);
/// ```
pub fn deg_to_rad<F: Real>(angle: F) -> F {
    angle * F::PI() / F::from_f64(180.0)
}

/// Converts radians to degrees in the precision of the input.
pub fn rad_to_deg<F: Real>(angle: F) -> F {
    angle * F::from_f64(180.0) / F::PI()
}
