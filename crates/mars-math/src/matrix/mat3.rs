// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use num_traits::AsPrimitive;
use tracing::trace;

use super::{cofactor_sign, Matrix2};
use crate::scalar::{Real, Scalar, SignedScalar};
use crate::vector::Vector3;

/// 3x3 matrix, row-major.
///
/// ```text
/// | a b c |
/// | d e f |
/// | g h i |
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix3<T> {
    data: [T; 9],
}

impl_matrix_common!(Matrix3, Vector3, 3);

impl<T: Scalar> Matrix3<T> {
    /// Multiplicative identity.
    pub const IDENTITY: Self = Self::new([
        T::ONE, T::ZERO, T::ZERO,
        T::ZERO, T::ONE, T::ZERO,
        T::ZERO, T::ZERO, T::ONE,
    ]);

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Diagonal matrix with `diagonal` on the main diagonal.
    pub fn from_diagonal(diagonal: Vector3<T>) -> Self {
        Self::new([
            diagonal.x, T::ZERO, T::ZERO,
            T::ZERO, diagonal.y, T::ZERO,
            T::ZERO, T::ZERO, diagonal.z,
        ])
    }

    /// Builds a matrix from its rows.
    pub fn from_rows(r0: Vector3<T>, r1: Vector3<T>, r2: Vector3<T>) -> Self {
        Self::new([r0.x, r0.y, r0.z, r1.x, r1.y, r1.z, r2.x, r2.y, r2.z])
    }

    /// The 2x2 matrix left after deleting `row` and `col`.
    pub fn minor(&self, row: usize, col: usize) -> Matrix2<T> {
        Matrix2::new(core::array::from_fn(|idx| {
            let r = idx / 2;
            let c = idx % 2;
            self.at(r + usize::from(r >= row), c + usize::from(c >= col))
        }))
    }

    /// Determinant by first-row cofactor expansion, in precision `U`.
    pub fn det<U: Real>(&self) -> U
    where
        T: AsPrimitive<U>,
    {
        self.cast::<U>().det_raw()
    }
}

impl<T: SignedScalar> Matrix3<T> {
    /// Signed first-row cofactor terms `(+a·M00, -b·M01, +c·M02)`.
    ///
    /// Their sum is the determinant. With a first row of ones and two
    /// vectors below it, this is their cross product.
    pub fn vec_det(&self) -> Vector3<T> {
        Vector3::from(core::array::from_fn(|col| {
            cofactor_sign(0, col, self.at(0, col) * self.minor(0, col).det_raw())
        }))
    }

    pub(crate) fn det_raw(&self) -> T {
        let terms = self.vec_det();
        terms.x + terms.y + terms.z
    }
}

impl<T: Real> Matrix3<T> {
    /// Adjugate divided by the determinant.
    ///
    /// A singular matrix (determinant exactly zero) is returned unchanged.
    pub fn inverse(&self) -> Self {
        let det = self.det_raw();
        if det == T::ZERO {
            trace!(target: "mars_math::matrix", "inverse of singular Matrix3; returning input");
            return *self;
        }
        Self::new(core::array::from_fn(|idx| {
            let (row, col) = (idx / 3, idx % 3);
            cofactor_sign(row, col, self.minor(col, row).det_raw()) / det
        }))
    }
}

impl<T: Scalar> From<Matrix2<T>> for Matrix3<T> {
    /// Embeds `m` in the upper-left corner of the identity.
    fn from(m: Matrix2<T>) -> Self {
        let [a, b, c, d] = m.to_array();
        Self::new([a, b, T::ZERO, c, d, T::ZERO, T::ZERO, T::ZERO, T::ONE])
    }
}
