// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Two, three and four component vectors, generic over the element type.
//!
//! All vectors are `Copy` values with public `x`/`y`/`z`/`w` fields. The
//! colour (`r`/`g`/`b`/`a`) and texture (`s`/`t`/`p`/`q`) names are accessor
//! methods over the same fields.
//!
//! Precision-sensitive operations (`dot`, `length`, `lerp`) take the output
//! float type as a type parameter so integer vectors can still be measured
//! and `f32` vectors can be accumulated in `f64`:
//!
//! ```
//! use mars_math::Vector3;
//! let v = Vector3::new(3_i32, 4, 0);
//! assert_eq!(v.length::<f64>(), 5.0);
//! ```
//!
//! Normalising a zero-length vector returns it unchanged.

/// Arithmetic operators and styled output shared by every vector type.
macro_rules! impl_vector_common {
    ($V:ident { $($f:ident),+ }) => {
        impl<T: $crate::Scalar> ::core::ops::Add for $V<T> {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self { $($f: self.$f + rhs.$f),+ }
            }
        }

        impl<T: $crate::Scalar> ::core::ops::Sub for $V<T> {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self { $($f: self.$f - rhs.$f),+ }
            }
        }

        impl<T: $crate::Scalar> ::core::ops::Mul<T> for $V<T> {
            type Output = Self;
            fn mul(self, rhs: T) -> Self {
                Self { $($f: self.$f * rhs),+ }
            }
        }

        impl<T: $crate::Scalar> ::core::ops::Div<T> for $V<T> {
            type Output = Self;
            fn div(self, rhs: T) -> Self {
                Self { $($f: self.$f / rhs),+ }
            }
        }

        impl<T: $crate::SignedScalar> ::core::ops::Neg for $V<T> {
            type Output = Self;
            fn neg(self) -> Self {
                Self { $($f: -self.$f),+ }
            }
        }

        impl<T: $crate::Scalar> ::core::ops::AddAssign for $V<T> {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl<T: $crate::Scalar> ::core::ops::SubAssign for $V<T> {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl<T: $crate::Scalar> ::core::ops::MulAssign<T> for $V<T> {
            fn mul_assign(&mut self, rhs: T) {
                *self = *self * rhs;
            }
        }

        impl<T: $crate::Scalar> ::core::ops::DivAssign<T> for $V<T> {
            fn div_assign(&mut self, rhs: T) {
                *self = *self / rhs;
            }
        }

        impl<T: $crate::Scalar> $crate::StyledDisplay for $V<T> {
            fn fmt_styled(
                &self,
                f: &mut ::core::fmt::Formatter<'_>,
                style: &$crate::DisplayStyle,
            ) -> ::core::fmt::Result {
                for (idx, c) in self.to_array().into_iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    $crate::Scalar::write_styled(c, f, style)?;
                }
                Ok(())
            }
        }

        impl<T: $crate::Scalar> ::core::fmt::Display for $V<T> {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                let style = $crate::DisplayStyle::for_formatter(f);
                $crate::StyledDisplay::fmt_styled(self, f, &style)
            }
        }
    };
}

/// `scalar * vector` for the concrete element types.
macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {$(
        impl ::core::ops::Mul<Vector2<$t>> for $t {
            type Output = Vector2<$t>;
            fn mul(self, rhs: Vector2<$t>) -> Vector2<$t> {
                rhs * self
            }
        }

        impl ::core::ops::Mul<Vector3<$t>> for $t {
            type Output = Vector3<$t>;
            fn mul(self, rhs: Vector3<$t>) -> Vector3<$t> {
                rhs * self
            }
        }

        impl ::core::ops::Mul<Vector4<$t>> for $t {
            type Output = Vector4<$t>;
            fn mul(self, rhs: Vector4<$t>) -> Vector4<$t> {
                rhs * self
            }
        }
    )*};
}

mod vec2;
mod vec3;
mod vec4;

pub use vec2::Vector2;
pub use vec3::Vector3;
pub use vec4::Vector4;

impl_scalar_lhs_mul!(f32, f64, i32, u32, i64, u64);

/// Shorthand for `Vector2<f32>`.
pub type Float2 = Vector2<f32>;
/// Shorthand for `Vector2<f64>`.
pub type Double2 = Vector2<f64>;
/// Shorthand for `Vector2<i32>`.
pub type Int2 = Vector2<i32>;
/// Shorthand for `Vector2<u32>`.
pub type Uint2 = Vector2<u32>;
/// Shorthand for `Vector3<f32>`.
pub type Float3 = Vector3<f32>;
/// Shorthand for `Vector3<f64>`.
pub type Double3 = Vector3<f64>;
/// Shorthand for `Vector3<i32>`.
pub type Int3 = Vector3<i32>;
/// Shorthand for `Vector3<u32>`.
pub type Uint3 = Vector3<u32>;
/// Shorthand for `Vector4<f32>`.
pub type Float4 = Vector4<f32>;
/// Shorthand for `Vector4<f64>`.
pub type Double4 = Vector4<f64>;
/// Shorthand for `Vector4<i32>`.
pub type Int4 = Vector4<i32>;
/// Shorthand for `Vector4<u32>`.
pub type Uint4 = Vector4<u32>;
