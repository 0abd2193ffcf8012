// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use num_traits::AsPrimitive;
use tracing::trace;

use crate::coord::{CoordCartesian3D, CoordSpherical};
use crate::matrix::Matrix3;
use crate::quat::Quaternion;
use crate::scalar::{convert, Real, Scalar, SignedScalar};
use crate::vector::{Vector2, Vector4};

/// Three-component vector.
///
/// * May represent a point, a direction or an RGB colour depending on the
///   calling context; the type does not distinguish them.
/// * Use [`crate::Matrix4`] with [`Vector3::extend`] to apply affine
///   transforms (`w = 1` for points, `w = 0` for directions).
///
/// # Examples
/// ```
/// use mars_math::Vector3;
/// let z = Vector3::new(1.0_f32, 0.0, 0.0).cross(&Vector3::new(0.0, 1.0, 0.0));
/// assert_eq!(z, Vector3::new(0.0, 0.0, 1.0));
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector3<T> {
    /// First component (also `r`, `s`).
    pub x: T,
    /// Second component (also `g`, `t`).
    pub y: T,
    /// Third component (also `b`, `p`).
    pub z: T,
}

impl<T: Scalar> Vector3<T> {
    /// All components zero.
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO, T::ZERO);

    /// All components one.
    pub const ONE: Self = Self::new(T::ONE, T::ONE, T::ONE);

    /// Unit vector along +X.
    pub const UNIT_X: Self = Self::new(T::ONE, T::ZERO, T::ZERO);

    /// Unit vector along +Y.
    pub const UNIT_Y: Self = Self::new(T::ZERO, T::ONE, T::ZERO);

    /// Unit vector along +Z.
    pub const UNIT_Z: Self = Self::new(T::ZERO, T::ZERO, T::ONE);

    /// Creates a vector from components.
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with every component set to `value`.
    pub const fn splat(value: T) -> Self {
        Self::new(value, value, value)
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    /// Red channel alias of `x`.
    pub fn r(&self) -> T {
        self.x
    }

    /// Green channel alias of `y`.
    pub fn g(&self) -> T {
        self.y
    }

    /// Blue channel alias of `z`.
    pub fn b(&self) -> T {
        self.z
    }

    /// Texture coordinate alias of `x`.
    pub fn s(&self) -> T {
        self.x
    }

    /// Texture coordinate alias of `y`.
    pub fn t(&self) -> T {
        self.y
    }

    /// Texture coordinate alias of `z`.
    pub fn p(&self) -> T {
        self.z
    }

    /// Converts every component to `U` with `as` semantics.
    pub fn cast<U: Scalar>(&self) -> Vector3<U>
    where
        T: AsPrimitive<U>,
    {
        Vector3::new(convert(self.x), convert(self.y), convert(self.z))
    }

    /// Dot product accumulated in precision `U`.
    ///
    /// Components are converted to `U` before multiplying, so integer
    /// vectors cannot overflow and `f32` input can be summed in `f64`.
    pub fn dot<U: Real>(&self, other: &Self) -> U
    where
        T: AsPrimitive<U>,
    {
        let (a, b) = (self.cast::<U>(), other.cast::<U>());
        a.x * b.x + a.y * b.y + a.z * b.z
    }

    /// Static form of [`Self::dot`].
    pub fn dot_of<U: Real>(a: &Self, b: &Self) -> U
    where
        T: AsPrimitive<U>,
    {
        a.dot(b)
    }

    /// Squared length in precision `U`.
    pub fn length_squared<U: Real>(&self) -> U
    where
        T: AsPrimitive<U>,
    {
        self.dot(self)
    }

    /// Length (magnitude) in precision `U`.
    pub fn length<U: Real>(&self) -> U
    where
        T: AsPrimitive<U>,
    {
        self.length_squared::<U>().sqrt()
    }

    /// Returns the unit vector pointing the same way.
    ///
    /// A zero-length vector is returned unchanged so callers can detect it.
    pub fn normalise(&self) -> Self {
        let len = self.length::<f64>();
        if len > 0.0 {
            Self::new(
                T::from_f64(self.x.as_f64() / len),
                T::from_f64(self.y.as_f64() / len),
                T::from_f64(self.z.as_f64() / len),
            )
        } else {
            trace!(
                target: "mars_math::vector",
                "normalise on zero-length Vector3; returning input"
            );
            *self
        }
    }

    /// Normalises in place.
    pub fn normalise_mut(&mut self) {
        *self = self.normalise();
    }

    /// Component-wise minimum.
    pub fn min(self, other: Self) -> Self {
        Self::new(
            self.x.min_of(other.x),
            self.y.min_of(other.y),
            self.z.min_of(other.z),
        )
    }

    /// Component-wise maximum.
    pub fn max(self, other: Self) -> Self {
        Self::new(
            self.x.max_of(other.x),
            self.y.max_of(other.y),
            self.z.max_of(other.z),
        )
    }

    /// Linear interpolation `start + (end - start) * t` in precision `U`.
    ///
    /// `t` is not clamped; values outside `[0, 1]` extrapolate.
    pub fn lerp<U: Real>(start: &Self, end: &Self, t: U) -> Vector3<U>
    where
        T: AsPrimitive<U>,
    {
        let start = start.cast::<U>();
        let end = end.cast::<U>();
        start + (end - start) * t
    }

    /// Rotates by `q` using the sandwich product `q * v * conj(q)`.
    ///
    /// `v` is lifted to a pure quaternion and the product is read back through
    /// [`Quaternion::scaled_axis`]. The product is pure, so the result is the
    /// unit direction of the rotated vector; the input's length is dropped.
    /// `q` is expected to be unit length and is used as given.
    ///
    /// ```
    /// use mars_math::{Quaternion, Vector3};
    /// use core::f64::consts::FRAC_PI_2;
    /// let q = Quaternion::from_axis_angle(FRAC_PI_2, &Vector3::new(0.0, 0.0, 1.0));
    /// let v = Vector3::new(2.0_f64, 0.0, 0.0).rotate_quaternion(&q);
    /// assert!(v.x.abs() < 1e-12 && (v.y - 1.0).abs() < 1e-12);
    /// ```
    pub fn rotate_quaternion(&self, q: &Quaternion) -> Self {
        ((*q * *self) * q.conjugate()).scaled_axis()
    }

    /// Rotates by `theta` radians about `axis`.
    pub fn rotate_axis_angle(&self, theta: f64, axis: &Self) -> Self {
        self.rotate_quaternion(&Quaternion::from_axis_angle(theta, axis))
    }

    /// Appends `w` to make a [`Vector4`].
    pub fn extend(self, w: T) -> Vector4<T> {
        Vector4::new(self.x, self.y, self.z, w)
    }

    /// Drops `z`.
    pub fn truncate(self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }
}

impl<T: SignedScalar> Vector3<T> {
    /// Cross product (right-hand rule).
    ///
    /// Expands the vector determinant of the matrix whose rows are
    /// `(1, 1, 1)`, `self` and `other`.
    pub fn cross(&self, other: &Self) -> Self {
        Matrix3::from_rows(Self::ONE, *self, *other).vec_det()
    }
}

impl_vector_common!(Vector3 { x, y, z });

impl<T> From<[T; 3]> for Vector3<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Self { x, y, z }
    }
}

impl<T: Scalar> From<CoordCartesian3D> for Vector3<T> {
    fn from(c: CoordCartesian3D) -> Self {
        Self::new(T::from_f64(c.x), T::from_f64(c.y), T::from_f64(c.z))
    }
}

impl<T: Scalar> From<CoordSpherical> for Vector3<T> {
    fn from(c: CoordSpherical) -> Self {
        Self::from(c.to_cartesian_3d())
    }
}

impl<T: Scalar> From<Vector4<T>> for Vector3<T> {
    fn from(v: Vector4<T>) -> Self {
        v.truncate()
    }
}
