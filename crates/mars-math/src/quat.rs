// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Double-precision quaternions.
//!
//! Components are `s + i·𝐢 + j·𝐣 + k·𝐤` with `s` the scalar part. Rotation
//! conversions normalise a local copy before use, so callers may pass
//! quaternions that have drifted from unit length.

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use tracing::trace;

use crate::display::{DisplayStyle, StyledDisplay};
use crate::matrix::Matrix4;
use crate::scalar::Scalar;
use crate::vector::{Vector3, Vector4};

/// Below this `sin(θ/2)` the axis extracted by
/// [`Quaternion::scaled_axis`] is left unscaled.
const AXIS_SCALE_GUARD: f64 = 0.001;

/// Quaternion with `f64` components.
///
/// `Default` is the zero quaternion; use [`Quaternion::identity`] for "no
/// rotation".
///
/// # Examples
/// ```
/// use mars_math::{Quaternion, Vector3};
/// let q = Quaternion::from_axis_angle(core::f64::consts::FRAC_PI_2, &Vector3::new(0.0, 0.0, 1.0));
/// let v = Vector3::new(1.0_f64, 0.0, 0.0).rotate_quaternion(&q);
/// assert!((v.x).abs() < 1e-12 && (v.y - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion {
    /// Scalar (real) part.
    pub s: f64,
    /// First imaginary component.
    pub i: f64,
    /// Second imaginary component.
    pub j: f64,
    /// Third imaginary component.
    pub k: f64,
}

impl Quaternion {
    /// Creates a quaternion from components.
    pub const fn new(s: f64, i: f64, j: f64, k: f64) -> Self {
        Self { s, i, j, k }
    }

    /// The rotation that does nothing: `1 + 0𝐢 + 0𝐣 + 0𝐤`.
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Rotation of `angle` radians about `axis`.
    ///
    /// `axis` should be unit length. The result is normalised either way, but
    /// a longer axis shifts weight off `s` and encodes a larger angle.
    pub fn from_axis_angle<T: Scalar>(angle: f64, axis: &Vector3<T>) -> Self {
        let (sin_half, cos_half) = (angle / 2.0).sin_cos();
        Self::new(
            cos_half,
            axis.x.as_f64() * sin_half,
            axis.y.as_f64() * sin_half,
            axis.z.as_f64() * sin_half,
        )
        .normalise()
    }

    /// Components as `(s, i, j, k)`.
    pub fn to_array(self) -> [f64; 4] {
        [self.s, self.i, self.j, self.k]
    }

    /// Components packed `x = s, y = i, z = j, w = k`.
    pub fn to_vector4<T: Scalar>(&self) -> Vector4<T> {
        Vector4::new(
            T::from_f64(self.s),
            T::from_f64(self.i),
            T::from_f64(self.j),
            T::from_f64(self.k),
        )
    }

    /// Negates the imaginary part.
    pub fn conjugate(&self) -> Self {
        Self::new(self.s, -self.i, -self.j, -self.k)
    }

    /// Four-dimensional dot product.
    pub fn dot(&self, other: &Self) -> f64 {
        self.s * other.s + self.i * other.i + self.j * other.j + self.k * other.k
    }

    /// Magnitude.
    pub fn length(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit quaternion in the same direction; zero is returned unchanged.
    pub fn normalise(&self) -> Self {
        let len = self.length();
        if len > 0.0 {
            Self::new(self.s / len, self.i / len, self.j / len, self.k / len)
        } else {
            trace!(target: "mars_math::quat", "normalise on zero quaternion; returning input");
            *self
        }
    }

    /// Normalises in place.
    pub fn normalise_mut(&mut self) {
        *self = self.normalise();
    }

    /// Rotation axis of the normalised quaternion, rescaled by
    /// `1 / sin(θ/2)` when that is well defined.
    pub fn scaled_axis<T: Scalar>(&self) -> Vector3<T> {
        let q = self.normalise();
        let mut axis = Vector3::new(q.i, q.j, q.k).normalise();
        let theta = 2.0 * q.s.acos();
        let denom = (theta / 2.0).sin();
        if denom > AXIS_SCALE_GUARD {
            axis /= denom;
        } else {
            trace!(target: "mars_math::quat", denom, "axis scale guard hit; leaving axis unscaled");
        }
        Vector3::new(T::from_f64(axis.x), T::from_f64(axis.y), T::from_f64(axis.z))
    }

    /// Rotation matrix equivalent to this quaternion (normalised first).
    pub fn to_rotation_matrix4<T: Scalar>(&self) -> Matrix4<T> {
        let Self { s, i, j, k } = self.normalise();
        let m = [
            1.0 - 2.0 * (j * j + k * k),
            2.0 * (i * j - k * s),
            2.0 * (i * k + j * s),
            0.0,
            2.0 * (i * j + k * s),
            1.0 - 2.0 * (i * i + k * k),
            2.0 * (j * k - i * s),
            0.0,
            2.0 * (i * k - j * s),
            2.0 * (j * k + i * s),
            1.0 - 2.0 * (i * i + j * j),
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        ];
        Matrix4::new(m.map(T::from_f64))
    }

    /// Rotation quaternion recovered from the upper 3x3 of `m`.
    ///
    /// Picks the numerically safest of four extractions: positive trace,
    /// then whichever diagonal element is largest.
    pub fn from_rotation_matrix4<T: Scalar>(m: &Matrix4<T>) -> Self {
        let at = |row, col| m.at(row, col).as_f64();
        let (m00, m01, m02) = (at(0, 0), at(0, 1), at(0, 2));
        let (m10, m11, m12) = (at(1, 0), at(1, 1), at(1, 2));
        let (m20, m21, m22) = (at(2, 0), at(2, 1), at(2, 2));

        let trace = m00 + m11 + m22;
        let q = if trace > 0.0 {
            let s = ((1.0 + trace) / 4.0).sqrt();
            let d = 4.0 * s;
            Self::new(s, (m21 - m12) / d, (m02 - m20) / d, (m10 - m01) / d)
        } else if m00 > m11 && m00 > m22 {
            let scale = ((1.0 + m00 - m11 - m22) / 4.0).sqrt();
            let d = 4.0 * scale;
            Self::new((m21 - m12) / d, scale, (m01 + m10) / d, (m02 + m20) / d)
        } else if m11 > m22 {
            let scale = ((1.0 + m11 - m00 - m22) / 4.0).sqrt();
            let d = 4.0 * scale;
            Self::new((m02 - m20) / d, (m01 + m10) / d, scale, (m12 + m21) / d)
        } else {
            let scale = ((1.0 + m22 - m00 - m11) / 4.0).sqrt();
            let d = 4.0 * scale;
            Self::new((m10 - m01) / d, (m02 + m20) / d, (m12 + m21) / d, scale)
        };
        q.normalise()
    }

    /// Euler angles `(roll, pitch, yaw)` in radians (X, then Y, then Z).
    ///
    /// Pitch saturates at ±π/2 when the quaternion sits on the gimbal-lock
    /// boundary.
    pub fn to_euler_angles<T: Scalar>(&self) -> Vector3<T> {
        let Self { s, i, j, k } = *self;

        let roll = (2.0 * (s * i + j * k)).atan2(1.0 - 2.0 * (i * i + j * j));

        let sinp = 2.0 * (s * j - k * i);
        let pitch = if sinp.abs() >= 1.0 {
            core::f64::consts::FRAC_PI_2.copysign(sinp)
        } else {
            sinp.asin()
        };

        let yaw = (2.0 * (s * k + i * j)).atan2(1.0 - 2.0 * (j * j + k * k));

        Vector3::new(T::from_f64(roll), T::from_f64(pitch), T::from_f64(yaw))
    }

    /// Inverse of [`Quaternion::to_euler_angles`]; `angles` is
    /// `(roll, pitch, yaw)` in radians.
    pub fn from_euler_angles<T: Scalar>(angles: &Vector3<T>) -> Self {
        let (sr, cr) = (angles.x.as_f64() / 2.0).sin_cos();
        let (sp, cp) = (angles.y.as_f64() / 2.0).sin_cos();
        let (sy, cy) = (angles.z.as_f64() / 2.0).sin_cos();
        Self::new(
            cr * cp * cy + sr * sp * sy,
            sr * cp * cy - cr * sp * sy,
            cr * sp * cy + sr * cp * sy,
            cr * cp * sy - sr * sp * cy,
        )
    }
}

impl From<[f64; 4]> for Quaternion {
    fn from([s, i, j, k]: [f64; 4]) -> Self {
        Self::new(s, i, j, k)
    }
}

impl<T: Scalar> From<Vector4<T>> for Quaternion {
    /// `x → s`, `y → i`, `z → j`, `w → k`.
    fn from(v: Vector4<T>) -> Self {
        Self::new(v.x.as_f64(), v.y.as_f64(), v.z.as_f64(), v.w.as_f64())
    }
}

impl Add for Quaternion {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.s + rhs.s, self.i + rhs.i, self.j + rhs.j, self.k + rhs.k)
    }
}

impl Sub for Quaternion {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.s - rhs.s, self.i - rhs.i, self.j - rhs.j, self.k - rhs.k)
    }
}

impl Neg for Quaternion {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.s, -self.i, -self.j, -self.k)
    }
}

impl AddAssign for Quaternion {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Quaternion {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for Quaternion {
    type Output = Self;

    /// Hamilton product; `a * b` applies `b` first when used as rotations.
    fn mul(self, rhs: Self) -> Self {
        let (a, b) = (self, rhs);
        Self::new(
            a.s * b.s - a.i * b.i - a.j * b.j - a.k * b.k,
            a.s * b.i + a.i * b.s + a.j * b.k - a.k * b.j,
            a.s * b.j - a.i * b.k + a.j * b.s + a.k * b.i,
            a.s * b.k + a.i * b.j - a.j * b.i + a.k * b.s,
        )
    }
}

impl MulAssign for Quaternion {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> Mul<Vector3<T>> for Quaternion {
    type Output = Self;

    /// Product with `v` lifted to the pure quaternion `0 + v`.
    fn mul(self, v: Vector3<T>) -> Self {
        self * Self::new(0.0, v.x.as_f64(), v.y.as_f64(), v.z.as_f64())
    }
}

impl<T: Scalar> MulAssign<Vector3<T>> for Quaternion {
    fn mul_assign(&mut self, v: Vector3<T>) {
        *self = *self * v;
    }
}

impl StyledDisplay for Quaternion {
    fn fmt_styled(&self, f: &mut fmt::Formatter<'_>, style: &DisplayStyle) -> fmt::Result {
        self.s.write_styled(f, style)?;
        for (value, unit) in [(self.i, 'i'), (self.j, 'j'), (self.k, 'k')] {
            f.write_str(", ")?;
            value.write_styled(f, style)?;
            write!(f, "{unit}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = DisplayStyle::for_formatter(f);
        self.fmt_styled(f, &style)
    }
}
