// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Cartesian, polar and spherical coordinate tuples.
//!
//! These exist to feed the [`crate::Vector2`] and [`crate::Vector3`]
//! constructors. Angles are radians; radii are not range-checked.

/// 2D Cartesian coordinates.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoordCartesian2D {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

/// Polar coordinates: radius and angle from +X (radians).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoordPolar {
    /// Radius.
    pub r: f64,
    /// Angle from +X, radians.
    pub theta: f64,
}

/// 3D Cartesian coordinates.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoordCartesian3D {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

/// Spherical coordinates (physics convention).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoordSpherical {
    /// Radius.
    pub r: f64,
    /// Polar angle from +Z, radians.
    pub theta: f64,
    /// Azimuth from +X in the XY plane, radians.
    pub phi: f64,
}

impl CoordCartesian2D {
    /// Creates the coordinate pair.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Converts to polar form; `theta` comes from `atan2(y, x)`.
    pub fn to_polar(&self) -> CoordPolar {
        CoordPolar::new(self.x.hypot(self.y), self.y.atan2(self.x))
    }
}

impl CoordPolar {
    /// Creates the coordinate pair.
    pub const fn new(r: f64, theta: f64) -> Self {
        Self { r, theta }
    }

    /// Converts to Cartesian form.
    pub fn to_cartesian_2d(&self) -> CoordCartesian2D {
        let (sin, cos) = self.theta.sin_cos();
        CoordCartesian2D::new(self.r * cos, self.r * sin)
    }
}

impl CoordCartesian3D {
    /// Creates the coordinate triple.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Converts to spherical form.
    ///
    /// The origin has no defined polar angle; it yields `theta = NaN`.
    pub fn to_spherical(&self) -> CoordSpherical {
        let r = (self.x * self.x + self.y * self.y + self.z * self.z).sqrt();
        CoordSpherical::new(r, (self.z / r).acos(), self.y.atan2(self.x))
    }
}

impl CoordSpherical {
    /// Creates the coordinate triple.
    pub const fn new(r: f64, theta: f64, phi: f64) -> Self {
        Self { r, theta, phi }
    }

    /// Converts to Cartesian form.
    pub fn to_cartesian_3d(&self) -> CoordCartesian3D {
        let (sin_t, cos_t) = self.theta.sin_cos();
        let (sin_p, cos_p) = self.phi.sin_cos();
        CoordCartesian3D::new(
            self.r * sin_t * cos_p,
            self.r * sin_t * sin_p,
            self.r * cos_t,
        )
    }
}

impl From<CoordPolar> for CoordCartesian2D {
    fn from(c: CoordPolar) -> Self {
        c.to_cartesian_2d()
    }
}

impl From<CoordCartesian2D> for CoordPolar {
    fn from(c: CoordCartesian2D) -> Self {
        c.to_polar()
    }
}

impl From<CoordSpherical> for CoordCartesian3D {
    fn from(c: CoordSpherical) -> Self {
        c.to_cartesian_3d()
    }
}

impl From<CoordCartesian3D> for CoordSpherical {
    fn from(c: CoordCartesian3D) -> Self {
        c.to_spherical()
    }
}
