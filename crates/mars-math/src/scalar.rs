// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Numeric element traits for the generic vector and matrix types.
//!
//! Three tiers keep each operation available exactly where it makes sense:
//!
//! - [`Scalar`]: any element type (`f32`, `f64`, `i32`, `u32`, `i64`, `u64`).
//!   Arithmetic, comparison, `as`-style conversion and styled output.
//! - [`SignedScalar`]: adds unary negation. Required by cofactor signs and the
//!   cross product.
//! - [`Real`]: floating point only. Required by inverse, projection and
//!   rotation constructors, and by the precision parameter of `dot`/`length`.
//!
//! Conversions between element types use `as` semantics (truncation for
//! float→int, saturation at the integer bounds). This mirrors what callers
//! get when they build integer vectors from floating-point coordinates.

use core::fmt;
use core::ops::Neg;

use num_traits::{AsPrimitive, Float, FloatConst, Num};

use crate::display::{write_float, write_int, DisplayStyle};

/// Element type of every vector and matrix.
///
/// Arithmetic operators come from [`Num`]; conversion into `f32`/`f64` comes
/// from [`AsPrimitive`], which never fails.
pub trait Scalar:
    Copy
    + fmt::Debug
    + PartialEq
    + PartialOrd
    + Num
    + AsPrimitive<f32>
    + AsPrimitive<f64>
    + Send
    + Sync
    + 'static
{
    /// Additive identity.
    const ZERO: Self;

    /// Multiplicative identity.
    const ONE: Self;

    /// Converts an `f64` into this element type with `as` semantics.
    fn from_f64(value: f64) -> Self;

    /// Widens the value to `f64`.
    fn as_f64(self) -> f64 {
        <Self as AsPrimitive<f64>>::as_(self)
    }

    /// Returns the smaller of two values; `self` wins ties and unordered pairs.
    fn min_of(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }

    /// Returns the larger of two values; `self` wins ties and unordered pairs.
    fn max_of(self, other: Self) -> Self {
        if self < other {
            other
        } else {
            self
        }
    }

    /// Writes the value honouring a [`DisplayStyle`].
    fn write_styled(self, f: &mut fmt::Formatter<'_>, style: &DisplayStyle) -> fmt::Result;
}

/// Converts between element types with `as` semantics.
pub(crate) fn convert<T, U>(value: T) -> U
where
    T: AsPrimitive<U>,
    U: Copy + 'static,
{
    value.as_()
}

/// Element types that support unary negation.
pub trait SignedScalar: Scalar + Neg<Output = Self> {}

/// Floating-point element types.
pub trait Real: SignedScalar + Float + FloatConst {}

macro_rules! impl_float_scalar {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            fn from_f64(value: f64) -> Self {
                value as $t
            }

            fn write_styled(self, f: &mut fmt::Formatter<'_>, style: &DisplayStyle) -> fmt::Result {
                write_float(f, self, style)
            }
        }

        impl SignedScalar for $t {}
        impl Real for $t {}
    )*};
}

macro_rules! impl_int_scalar {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            fn from_f64(value: f64) -> Self {
                value as $t
            }

            fn write_styled(self, f: &mut fmt::Formatter<'_>, style: &DisplayStyle) -> fmt::Result {
                write_int(f, self, style)
            }
        }
    )*};
}

impl_float_scalar!(f32, f64);
impl_int_scalar!(i32, u32, i64, u64);

impl SignedScalar for i32 {}
impl SignedScalar for i64 {}
