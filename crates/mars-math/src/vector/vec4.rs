// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use num_traits::AsPrimitive;
use tracing::trace;

use crate::scalar::{convert, Real, Scalar};
use crate::vector::{Vector2, Vector3};

/// Four-component vector; the homogeneous operand of [`crate::Matrix4`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector4<T> {
    /// First component (also `r`, `s`).
    pub x: T,
    /// Second component (also `g`, `t`).
    pub y: T,
    /// Third component (also `b`, `p`).
    pub z: T,
    /// Fourth component (also `a`, `q`).
    pub w: T,
}

impl<T: Scalar> Vector4<T> {
    /// All components zero.
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ZERO);

    /// All components one.
    pub const ONE: Self = Self::new(T::ONE, T::ONE, T::ONE, T::ONE);

    /// Unit vector along +X.
    pub const UNIT_X: Self = Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO);

    /// Unit vector along +Y.
    pub const UNIT_Y: Self = Self::new(T::ZERO, T::ONE, T::ZERO, T::ZERO);

    /// Unit vector along +Z.
    pub const UNIT_Z: Self = Self::new(T::ZERO, T::ZERO, T::ONE, T::ZERO);

    /// Unit vector along +W.
    pub const UNIT_W: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE);

    /// Creates a vector from components.
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a vector with every component set to `value`.
    pub const fn splat(value: T) -> Self {
        Self::new(value, value, value, value)
    }

    /// Packs `a` into `x, y` and `b` into `z, w`.
    pub fn from_vec2_pair(a: Vector2<T>, b: Vector2<T>) -> Self {
        Self::new(a.x, a.y, b.x, b.y)
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [T; 4] {
        [self.x, self.y, self.z, self.w]
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

    /// Alpha channel alias of `w`.
    pub fn a(&self) -> T {
        self.w
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

    /// Texture coordinate alias of `w`.
    pub fn q(&self) -> T {
        self.w
    }

    /// Converts every component to `U` with `as` semantics.
    pub fn cast<U: Scalar>(&self) -> Vector4<U>
    where
        T: AsPrimitive<U>,
    {
        Vector4::new(
            convert(self.x),
            convert(self.y),
            convert(self.z),
            convert(self.w),
        )
    }

    /// Dot product accumulated in precision `U`.
    pub fn dot<U: Real>(&self, other: &Self) -> U
    where
        T: AsPrimitive<U>,
    {
        let (a, b) = (self.cast::<U>(), other.cast::<U>());
        a.x * b.x + a.y * b.y + a.z * b.z + a.w * b.w
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
    /// A zero-length vector is returned unchanged.
    pub fn normalise(&self) -> Self {
        let len = self.length::<f64>();
        if len > 0.0 {
            Self::new(
                T::from_f64(self.x.as_f64() / len),
                T::from_f64(self.y.as_f64() / len),
                T::from_f64(self.z.as_f64() / len),
                T::from_f64(self.w.as_f64() / len),
            )
        } else {
            trace!(
                target: "mars_math::vector",
                "normalise on zero-length Vector4; returning input"
            );
            *self
        }
    }

    /// Normalises in place.
    pub fn normalise_mut(&mut self) {
        *self = self.normalise();
    }

    /// Component-wise minimum; independent of either vector's magnitude.
    pub fn min(self, other: Self) -> Self {
        Self::new(
            self.x.min_of(other.x),
            self.y.min_of(other.y),
            self.z.min_of(other.z),
            self.w.min_of(other.w),
        )
    }

    /// Component-wise maximum; independent of either vector's magnitude.
    pub fn max(self, other: Self) -> Self {
        Self::new(
            self.x.max_of(other.x),
            self.y.max_of(other.y),
            self.z.max_of(other.z),
            self.w.max_of(other.w),
        )
    }

    /// Linear interpolation `start + (end - start) * t` in precision `U`.
    ///
    /// `t` is not clamped; values outside `[0, 1]` extrapolate. All four
    /// components interpolate, including `w`.
    pub fn lerp<U: Real>(start: &Self, end: &Self, t: U) -> Vector4<U>
    where
        T: AsPrimitive<U>,
    {
        let start = start.cast::<U>();
        let end = end.cast::<U>();
        start + (end - start) * t
    }

    /// Drops `w`.
    pub fn truncate(self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl_vector_common!(Vector4 { x, y, z, w });

impl<T> From<[T; 4]> for Vector4<T> {
    fn from([x, y, z, w]: [T; 4]) -> Self {
        Self { x, y, z, w }
    }
}
