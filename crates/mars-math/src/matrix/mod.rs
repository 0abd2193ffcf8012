// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Square matrices (2x2, 3x3, 4x4), generic over the element type.
//!
//! Storage is row-major: `new` takes elements row by row and `at(row, col)`
//! reads one back. Vectors are columns, so `m * v` computes
//! `result[r] = Σ_c m[r][c] * v[c]` and transform composition reads right
//! to left (`a * b` applies `b` first).
//!
//! Determinants are expanded along the first row. `vec_det` exposes the
//! signed terms of that expansion; summing them gives `det`, and for the
//! 3x3 case with a row of ones they are the cross product.
//!
//! Inverting a singular matrix returns the input unchanged rather than
//! failing.

/// Storage, accessors, products and styled output shared by every matrix.
macro_rules! impl_matrix_common {
    ($M:ident, $V:ident, $n:literal) => {
        impl<T: $crate::Scalar> $M<T> {
            /// All elements zero.
            pub const ZERO: Self = Self::new([T::ZERO; $n * $n]);

            /// Creates a matrix from elements in row-major order.
            pub const fn new(data: [T; $n * $n]) -> Self {
                Self { data }
            }

            /// Returns the elements in row-major order.
            pub fn to_array(self) -> [T; $n * $n] {
                self.data
            }

            /// Element at `row`, `col`.
            ///
            /// # Panics
            /// If either index is out of range.
            pub fn at(&self, row: usize, col: usize) -> T {
                self.data[row * $n + col]
            }

            /// Row `index` as a vector.
            pub fn row(&self, index: usize) -> $V<T> {
                $V::from(::core::array::from_fn::<T, $n, _>(|col| self.at(index, col)))
            }

            /// Column `index` as a vector.
            pub fn col(&self, index: usize) -> $V<T> {
                $V::from(::core::array::from_fn::<T, $n, _>(|row| self.at(row, index)))
            }

            /// Swaps rows and columns.
            pub fn transpose(&self) -> Self {
                Self::new(::core::array::from_fn(|idx| self.at(idx % $n, idx / $n)))
            }

            /// Applies `f` to every element.
            pub fn map<U: $crate::Scalar>(&self, f: impl FnMut(T) -> U) -> $M<U> {
                $M::new(self.data.map(f))
            }

            /// Converts every element to `U` with `as` semantics.
            pub fn cast<U: $crate::Scalar>(&self) -> $M<U>
            where
                T: ::num_traits::AsPrimitive<U>,
            {
                self.map($crate::scalar::convert)
            }
        }

        impl<T: $crate::Scalar> Default for $M<T> {
            fn default() -> Self {
                Self::ZERO
            }
        }

        impl<T: $crate::Scalar> From<[T; $n * $n]> for $M<T> {
            fn from(data: [T; $n * $n]) -> Self {
                Self::new(data)
            }
        }

        impl<T: $crate::Scalar> ::core::ops::Mul<$V<T>> for $M<T> {
            type Output = $V<T>;

            /// Sum of the columns weighted by the vector's components.
            fn mul(self, rhs: $V<T>) -> $V<T> {
                let weights = rhs.to_array();
                let mut out = $V::ZERO;
                for (col, weight) in weights.into_iter().enumerate() {
                    out += self.col(col) * weight;
                }
                out
            }
        }

        impl<T: $crate::Scalar> ::core::ops::Mul for $M<T> {
            type Output = Self;

            /// Transforms each column of `rhs` by `self`, lays the results
            /// out as rows, then transposes them back into columns.
            fn mul(self, rhs: Self) -> Self {
                let transformed: [[T; $n]; $n] =
                    ::core::array::from_fn(|col| (self * rhs.col(col)).to_array());
                Self::new(::core::array::from_fn(|idx| transformed[idx / $n][idx % $n]))
                    .transpose()
            }
        }

        impl<T: $crate::Scalar> ::core::ops::MulAssign for $M<T> {
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl<T: $crate::Scalar> $crate::StyledDisplay for $M<T> {
            fn fmt_styled(
                &self,
                f: &mut ::core::fmt::Formatter<'_>,
                style: &$crate::DisplayStyle,
            ) -> ::core::fmt::Result {
                for row in 0..$n {
                    if row > 0 {
                        f.write_str("\n")?;
                    }
                    $crate::StyledDisplay::fmt_styled(&self.row(row), f, style)?;
                }
                Ok(())
            }
        }

        impl<T: $crate::Scalar> ::core::fmt::Display for $M<T> {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                let style = $crate::DisplayStyle::for_formatter(f);
                $crate::StyledDisplay::fmt_styled(self, f, &style)
            }
        }
    };
}

mod mat2;
mod mat3;
mod mat4;

pub use mat2::Matrix2;
pub use mat3::Matrix3;
pub use mat4::{ClipConvention, Matrix4};

/// `(-1)^(row + col)`: checkerboard sign of a cofactor.
fn cofactor_sign<T: crate::SignedScalar>(row: usize, col: usize, value: T) -> T {
    if (row + col) % 2 == 0 {
        value
    } else {
        -value
    }
}

/// Shorthand for `Matrix2<f32>`.
pub type Float2x2 = Matrix2<f32>;
/// Shorthand for `Matrix2<f64>`.
pub type Double2x2 = Matrix2<f64>;
/// Shorthand for `Matrix2<i32>`.
pub type Int2x2 = Matrix2<i32>;
/// Shorthand for `Matrix2<u32>`.
pub type Uint2x2 = Matrix2<u32>;
/// Shorthand for `Matrix3<f32>`.
pub type Float3x3 = Matrix3<f32>;
/// Shorthand for `Matrix3<f64>`.
pub type Double3x3 = Matrix3<f64>;
/// Shorthand for `Matrix3<i32>`.
pub type Int3x3 = Matrix3<i32>;
/// Shorthand for `Matrix3<u32>`.
pub type Uint3x3 = Matrix3<u32>;
/// Shorthand for `Matrix4<f32>`.
pub type Float4x4 = Matrix4<f32>;
/// Shorthand for `Matrix4<f64>`.
pub type Double4x4 = Matrix4<f64>;
/// Shorthand for `Matrix4<i32>`.
pub type Int4x4 = Matrix4<i32>;
/// Shorthand for `Matrix4<u32>`.
pub type Uint4x4 = Matrix4<u32>;
