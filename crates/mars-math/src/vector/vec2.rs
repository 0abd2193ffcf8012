// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use num_traits::AsPrimitive;
use tracing::trace;

use crate::angle::deg_to_rad;
use crate::coord::{CoordCartesian2D, CoordPolar};
use crate::scalar::{convert, Real, Scalar};
use crate::vector::Vector3;

/// Two-component vector.
///
/// # Examples
/// ```
/// use mars_math::Vector2;
/// let v = Vector2::new(1.0_f64, 0.0).rotate_deg(90.0);
/// assert!(v.x.abs() < 1e-12 && (v.y - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector2<T> {
    /// First component (also `r`, `s`).
    pub x: T,
    /// Second component (also `g`, `t`).
    pub y: T,
}

impl<T: Scalar> Vector2<T> {
    /// All components zero.
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO);

    /// All components one.
    pub const ONE: Self = Self::new(T::ONE, T::ONE);

    /// Unit vector along +X.
    pub const UNIT_X: Self = Self::new(T::ONE, T::ZERO);

    /// Unit vector along +Y.
    pub const UNIT_Y: Self = Self::new(T::ZERO, T::ONE);

    /// Creates a vector from components.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Creates a vector with every component set to `value`.
    pub const fn splat(value: T) -> Self {
        Self::new(value, value)
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [T; 2] {
        [self.x, self.y]
    }

    /// Red channel alias of `x`.
    pub fn r(&self) -> T {
        self.x
    }

    /// Green channel alias of `y`.
    pub fn g(&self) -> T {
        self.y
    }

    /// Texture coordinate alias of `x`.
    pub fn s(&self) -> T {
        self.x
    }

    /// Texture coordinate alias of `y`.
    pub fn t(&self) -> T {
        self.y
    }

    /// Converts every component to `U` with `as` semantics.
    pub fn cast<U: Scalar>(&self) -> Vector2<U>
    where
        T: AsPrimitive<U>,
    {
        Vector2::new(convert(self.x), convert(self.y))
    }

    /// Dot product accumulated in precision `U`.
    pub fn dot<U: Real>(&self, other: &Self) -> U
    where
        T: AsPrimitive<U>,
    {
        let (a, b) = (self.cast::<U>(), other.cast::<U>());
        a.x * b.x + a.y * b.y
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
            )
        } else {
            trace!(
                target: "mars_math::vector",
                "normalise on zero-length Vector2; returning input"
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
        Self::new(self.x.min_of(other.x), self.y.min_of(other.y))
    }

    /// Component-wise maximum.
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max_of(other.x), self.y.max_of(other.y))
    }

    /// Linear interpolation `start + (end - start) * t` in precision `U`.
    ///
    /// `t` is not clamped; values outside `[0, 1]` extrapolate.
    pub fn lerp<U: Real>(start: &Self, end: &Self, t: U) -> Vector2<U>
    where
        T: AsPrimitive<U>,
    {
        let start = start.cast::<U>();
        let end = end.cast::<U>();
        start + (end - start) * t
    }

    /// Rotates counter-clockwise by `theta` radians.
    pub fn rotate_rad(&self, theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        let x = self.x.as_f64();
        let y = self.y.as_f64();
        Self::new(T::from_f64(x * cos - y * sin), T::from_f64(x * sin + y * cos))
    }

    /// Rotates counter-clockwise by `theta` degrees.
    pub fn rotate_deg(&self, theta: f64) -> Self {
        self.rotate_rad(deg_to_rad(theta))
    }

    /// Appends `z` to make a [`Vector3`].
    pub fn extend(self, z: T) -> Vector3<T> {
        Vector3::new(self.x, self.y, z)
    }
}

impl_vector_common!(Vector2 { x, y });

impl<T> From<[T; 2]> for Vector2<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self { x, y }
    }
}

impl<T: Scalar> From<CoordCartesian2D> for Vector2<T> {
    fn from(c: CoordCartesian2D) -> Self {
        Self::new(T::from_f64(c.x), T::from_f64(c.y))
    }
}

impl<T: Scalar> From<CoordPolar> for Vector2<T> {
    fn from(c: CoordPolar) -> Self {
        Self::from(c.to_cartesian_2d())
    }
}
