// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use tracing::trace;

use crate::scalar::{Real, Scalar, SignedScalar};
use crate::vector::Vector2;

/// 2x2 matrix, row-major.
///
/// ```text
/// | a b |
/// | c d |
/// ```
///
/// # Examples
/// ```
/// use mars_math::Matrix2;
/// let m = Matrix2::new([1, 2, 3, 4]);
/// assert_eq!(m.det::<f64>(), -2.0);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix2<T> {
    data: [T; 4],
}

impl_matrix_common!(Matrix2, Vector2, 2);

impl<T: Scalar> Matrix2<T> {
    /// Multiplicative identity.
    pub const IDENTITY: Self = Self::new([T::ONE, T::ZERO, T::ZERO, T::ONE]);

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Diagonal matrix with `diagonal` on the main diagonal.
    pub fn from_diagonal(diagonal: Vector2<T>) -> Self {
        Self::new([diagonal.x, T::ZERO, T::ZERO, diagonal.y])
    }

    /// Builds a matrix from its rows.
    pub fn from_rows(r0: Vector2<T>, r1: Vector2<T>) -> Self {
        Self::new([r0.x, r0.y, r1.x, r1.y])
    }

    /// Determinant `ad - bc`, computed in precision `U`.
    pub fn det<U: Real>(&self) -> U
    where
        T: num_traits::AsPrimitive<U>,
    {
        self.cast::<U>().det_raw()
    }
}

impl<T: SignedScalar> Matrix2<T> {
    /// The two terms of the determinant: `(a·d, -b·c)`.
    pub fn vec_det(&self) -> Vector2<T> {
        let [a, b, c, d] = self.data;
        Vector2::new(a * d, -(b * c))
    }

    /// Determinant in the element type.
    pub(crate) fn det_raw(&self) -> T {
        let terms = self.vec_det();
        terms.x + terms.y
    }
}

impl<T: Real> Matrix2<T> {
    /// Inverse `(d, -b, -c, a) / det`.
    ///
    /// A singular matrix (determinant exactly zero) is returned unchanged.
    pub fn inverse(&self) -> Self {
        let det = self.det_raw();
        if det == T::ZERO {
            trace!(target: "mars_math::matrix", "inverse of singular Matrix2; returning input");
            return *self;
        }
        let [a, b, c, d] = self.data;
        Self::new([d, -b, -c, a]).map(|v| v / det)
    }
}
