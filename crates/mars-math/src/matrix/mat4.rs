// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use num_traits::AsPrimitive;
use tracing::trace;

use super::{cofactor_sign, Matrix3};
use crate::quat::Quaternion;
use crate::scalar::{Real, Scalar, SignedScalar};
use crate::vector::{Vector3, Vector4};

/// Handedness and depth range for the projection constructors.
///
/// The default is left-handed (+Z into the screen) with depth mapped to
/// `[0, 1]`, near plane at 0. `reverse_z` maps near to 1 and far to 0;
/// `right_handed` looks down -Z instead.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClipConvention {
    /// Map the near plane to depth 1 and the far plane to depth 0.
    pub reverse_z: bool,
    /// View space looks down -Z.
    pub right_handed: bool,
}

impl ClipConvention {
    /// Left-handed, near at depth 0.
    pub const LEFT_HANDED: Self = Self::new(false, false);

    /// Right-handed, near at depth 0.
    pub const RIGHT_HANDED: Self = Self::new(false, true);

    /// Creates a convention from its two switches.
    pub const fn new(reverse_z: bool, right_handed: bool) -> Self {
        Self {
            reverse_z,
            right_handed,
        }
    }

    /// Returns a copy with the depth direction flipped to near = 1.
    pub const fn reversed(mut self) -> Self {
        self.reverse_z = true;
        self
    }

    /// `w` coefficient of view-space `z`: +1 left-handed, -1 right-handed.
    fn depth_sign<T: Real>(self) -> T {
        if self.right_handed {
            -T::ONE
        } else {
            T::ONE
        }
    }

    /// `(C, E)` of the perspective depth row `z' = C·z + E`, `w' = D·z`.
    fn perspective_depth<T: Real>(self, near: T, far: T) -> (T, T) {
        let d = self.depth_sign::<T>();
        let (num, offset) = if self.reverse_z {
            (-near, far)
        } else {
            (far, near)
        };
        let c = d * num / (far - near);
        (c, -d * offset * c)
    }
}

/// 4x4 matrix, row-major, applied to column vectors (`m * v`).
///
/// ```text
/// | a b c d |
/// | e f g h |
/// | i j k l |
/// | m n o p |
/// ```
///
/// Translation lives in the last column (`d`, `h`, `l`).
///
/// # Examples
/// ```
/// use mars_math::{Matrix4, Vector3};
/// let t = Matrix4::translation(Vector3::new(5.0_f32, -3.0, 2.0));
/// let p = t * Vector3::new(2.0, 4.0, -1.0).extend(1.0);
/// assert_eq!(p.truncate(), Vector3::new(7.0, 1.0, 1.0));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix4<T> {
    data: [T; 16],
}

impl_matrix_common!(Matrix4, Vector4, 4);

impl<T: Scalar> Matrix4<T> {
    /// Multiplicative identity.
    pub const IDENTITY: Self = Self::new([
        T::ONE, T::ZERO, T::ZERO, T::ZERO,
        T::ZERO, T::ONE, T::ZERO, T::ZERO,
        T::ZERO, T::ZERO, T::ONE, T::ZERO,
        T::ZERO, T::ZERO, T::ZERO, T::ONE,
    ]);

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Diagonal matrix with `diagonal` on the main diagonal.
    pub fn from_diagonal(diagonal: Vector4<T>) -> Self {
        Self::new([
            diagonal.x, T::ZERO, T::ZERO, T::ZERO,
            T::ZERO, diagonal.y, T::ZERO, T::ZERO,
            T::ZERO, T::ZERO, diagonal.z, T::ZERO,
            T::ZERO, T::ZERO, T::ZERO, diagonal.w,
        ])
    }

    /// Builds a matrix from its rows.
    pub fn from_rows(r0: Vector4<T>, r1: Vector4<T>, r2: Vector4<T>, r3: Vector4<T>) -> Self {
        let rows = [r0.to_array(), r1.to_array(), r2.to_array(), r3.to_array()];
        Self::new(core::array::from_fn(|idx| rows[idx / 4][idx % 4]))
    }

    /// Translation by `offset`.
    pub fn translation(offset: Vector3<T>) -> Self {
        let mut data = Self::IDENTITY.data;
        data[3] = offset.x;
        data[7] = offset.y;
        data[11] = offset.z;
        Self::new(data)
    }

    /// Non-uniform scale along the three axes.
    pub fn scale(factors: Vector3<T>) -> Self {
        Self::from_diagonal(factors.extend(T::ONE))
    }

    /// The 3x3 matrix left after deleting `row` and `col`.
    pub fn minor(&self, row: usize, col: usize) -> Matrix3<T> {
        Matrix3::new(core::array::from_fn(|idx| {
            let r = idx / 3;
            let c = idx % 3;
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

impl<T: SignedScalar> Matrix4<T> {
    /// Signed first-row cofactor terms `(+a·M00, -b·M01, +c·M02, -d·M03)`.
    pub fn vec_det(&self) -> Vector4<T> {
        Vector4::from(core::array::from_fn(|col| {
            cofactor_sign(0, col, self.at(0, col) * self.minor(0, col).det_raw())
        }))
    }

    pub(crate) fn det_raw(&self) -> T {
        let terms = self.vec_det();
        terms.x + terms.y + terms.z + terms.w
    }
}

impl<T: Real> Matrix4<T> {
    /// Adjugate divided by the determinant.
    ///
    /// A singular matrix (determinant exactly zero) is returned unchanged.
    pub fn inverse(&self) -> Self {
        let det = self.det_raw();
        if det == T::ZERO {
            trace!(target: "mars_math::matrix", "inverse of singular Matrix4; returning input");
            return *self;
        }
        Self::new(core::array::from_fn(|idx| {
            let (row, col) = (idx / 4, idx % 4);
            cofactor_sign(row, col, self.minor(col, row).det_raw()) / det
        }))
    }

    /// Rotation by `angle` radians about `axis` (right-hand rule).
    ///
    /// `axis` must be unit length; it is not normalised here.
    pub fn rotation(angle: T, axis: Vector3<T>) -> Self {
        let (s, c) = angle.sin_cos();
        let omc = T::ONE - c;
        let Vector3 { x, y, z } = axis;
        let o = T::ZERO;
        let l = T::ONE;
        Self::new([
            x * x * omc + c,     x * y * omc - z * s, x * z * omc + y * s, o,
            x * y * omc + z * s, y * y * omc + c,     y * z * omc - x * s, o,
            x * z * omc - y * s, y * z * omc + x * s, z * z * omc + c,     o,
            o,                   o,                   o,                   l,
        ])
    }

    /// Rotation by `angle` radians about +X.
    pub fn rotation_x(angle: T) -> Self {
        Self::rotation(angle, Vector3::UNIT_X)
    }

    /// Rotation by `angle` radians about +Y.
    pub fn rotation_y(angle: T) -> Self {
        Self::rotation(angle, Vector3::UNIT_Y)
    }

    /// Rotation by `angle` radians about +Z.
    pub fn rotation_z(angle: T) -> Self {
        Self::rotation(angle, Vector3::UNIT_Z)
    }

    /// Rotation matrix of `q`; forwards to [`Quaternion::to_rotation_matrix4`].
    pub fn from_quaternion(q: &Quaternion) -> Self {
        q.to_rotation_matrix4()
    }

    /// Orthographic projection of the box `[left, right] × [bottom, top] ×
    /// [near, far]` onto x, y in `[-1, 1]` and depth in `[0, 1]`.
    ///
    /// For a right-handed `clip` the box spans `z` in `[-far, -near]`.
    pub fn orthographic(
        left: T,
        right: T,
        bottom: T,
        top: T,
        near: T,
        far: T,
        clip: ClipConvention,
    ) -> Self {
        let (near, far) = if clip.reverse_z { (far, near) } else { (near, far) };
        let two = T::ONE + T::ONE;
        let a = two / (right - left);
        let b = two / (top - bottom);
        let x = -(right + left) / (right - left);
        let y = -(top + bottom) / (top - bottom);
        let (c, z) = if clip.right_handed {
            let c = T::ONE / (near - far);
            (c, near * c)
        } else {
            let c = T::ONE / (far - near);
            (c, -near * c)
        };
        let o = T::ZERO;
        Self::new([
            a, o, o, x,
            o, b, o, y,
            o, o, c, z,
            o, o, o, T::ONE,
        ])
    }

    /// Symmetric perspective projection; `fov_y` is the full vertical field
    /// of view in radians and `aspect` is width over height.
    ///
    /// # Examples
    /// ```
    /// use mars_math::{ClipConvention, Matrix4, Vector4};
    /// let p = Matrix4::perspective(1.2_f64, 1.5, 0.1, 100.0, ClipConvention::default());
    /// let near = p * Vector4::new(0.0, 0.0, 0.1, 1.0);
    /// assert!((near.z / near.w).abs() < 1e-12);
    /// ```
    pub fn perspective(fov_y: T, aspect: T, near: T, far: T, clip: ClipConvention) -> Self {
        let two = T::ONE + T::ONE;
        let half_tan = (fov_y / two).tan();
        let a = T::ONE / (aspect * half_tan);
        let b = T::ONE / half_tan;
        let d = clip.depth_sign::<T>();
        let (c, e) = clip.perspective_depth(near, far);
        let o = T::ZERO;
        Self::new([
            a, o, o, o,
            o, b, o, o,
            o, o, c, e,
            o, o, d, o,
        ])
    }

    /// Asymmetric perspective projection from four half-angles in radians,
    /// measured from the view direction (`left` and `down` are usually
    /// negative). This is the form head-mounted displays report per eye.
    pub fn perspective_offset(
        left: T,
        right: T,
        down: T,
        up: T,
        near: T,
        far: T,
        clip: ClipConvention,
    ) -> Self {
        let (tan_left, tan_right) = (left.tan(), right.tan());
        let (tan_down, tan_up) = (down.tan(), up.tan());
        let tan_width = tan_right - tan_left;
        let tan_height = tan_up - tan_down;

        let two = T::ONE + T::ONE;
        let a = two / tan_width;
        let b = two / tan_height;
        let d = clip.depth_sign::<T>();
        let x = -d * (tan_right + tan_left) / tan_width;
        let y = -d * (tan_up + tan_down) / tan_height;
        let (c, e) = clip.perspective_depth(near, far);
        let o = T::ZERO;
        Self::new([
            a, o, x, o,
            o, b, y, o,
            o, o, c, e,
            o, o, d, o,
        ])
    }
}

impl<T: Scalar> From<Matrix3<T>> for Matrix4<T> {
    /// Embeds `m` in the upper-left corner of the identity.
    fn from(m: Matrix3<T>) -> Self {
        let o = T::ZERO;
        let [a, b, c, d, e, f, g, h, i] = m.to_array();
        Self::new([
            a, b, c, o,
            d, e, f, o,
            g, h, i, o,
            o, o, o, T::ONE,
        ])
    }
}
