// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! mars-math: generic vectors, matrices and quaternions for graphics and
//! simulation code.
//!
//! Everything here is a stateless `Copy` value type. Vectors and matrices
//! are generic over the element type ([`Scalar`]); quaternions are `f64`.
//! Matrices are row-major and act on column vectors, so transforms compose
//! right to left.
//!
//! No operation fails. Degenerate input degrades to a documented passthrough
//! (normalising a zero vector, inverting a singular matrix) and emits a
//! `tracing` event at `TRACE` level.
//!
//! # Examples
//! ```
//! use mars_math::prelude::*;
//!
//! let model = Matrix4::translation(Vector3::new(0.0_f32, 0.0, 5.0))
//!     * Matrix4::rotation_y(core::f32::consts::FRAC_PI_2);
//! let p = model * Vector4::new(1.0, 0.0, 0.0, 1.0);
//! assert!((p.z - 4.0).abs() < 1e-6);
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]

mod angle;
mod calculus;
mod coord;
mod display;
mod matrix;
mod quat;
mod scalar;
mod utility;
mod vector;

pub use angle::{deg_to_rad, rad_to_deg, PI, TAU};
pub use calculus::{differentiate, integrate, integrate_default, DEFAULT_INTEGRATION_STEPS};
pub use coord::{CoordCartesian2D, CoordCartesian3D, CoordPolar, CoordSpherical};
pub use display::{DisplayStyle, DisplayStyleError, Styled, StyledDisplay};
pub use matrix::{
    ClipConvention, Double2x2, Double3x3, Double4x4, Float2x2, Float3x3, Float4x4, Int2x2,
    Int3x3, Int4x4, Matrix2, Matrix3, Matrix4, Uint2x2, Uint3x3, Uint4x4,
};
pub use quat::Quaternion;
pub use scalar::{Real, Scalar, SignedScalar};
pub use utility::{is_power_of_2, next_power_of_2};
pub use vector::{
    Double2, Double3, Double4, Float2, Float3, Float4, Int2, Int3, Int4, Uint2, Uint3, Uint4,
    Vector2, Vector3, Vector4,
};

/// The types and traits most callers need, for glob import.
pub mod prelude {
    pub use crate::{
        ClipConvention, Matrix2, Matrix3, Matrix4, Quaternion, Real, Scalar, SignedScalar,
        StyledDisplay, Vector2, Vector3, Vector4,
    };
}
