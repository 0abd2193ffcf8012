// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(dead_code)]

use mars_math::{Matrix4, Quaternion, Vector3, Vector4};

/// Absolute tolerance used by the helpers below.
pub const ABS_TOL: f64 = 1e-9;
/// Relative tolerance, scaled by the larger magnitude.
pub const REL_TOL: f64 = 1e-9;

/// Asserts `a ≈ b` under a mixed absolute/relative tolerance.
pub fn approx_eq(a: f64, b: f64) {
    approx_eq_tol(a, b, ABS_TOL);
}

/// Asserts `a ≈ b` with a caller-supplied absolute tolerance floor.
pub fn approx_eq_tol(a: f64, b: f64, abs_tol: f64) {
    let diff = (a - b).abs();
    let scale = a.abs().max(b.abs());
    let tol = abs_tol.max(REL_TOL * scale);
    assert!(diff <= tol, "expected {b}, got {a} (diff {diff}, tol {tol})");
}

/// Component-wise [`approx_eq`] over slices of equal length.
pub fn approx_eq_slice(a: &[f64], b: &[f64]) {
    assert_eq!(a.len(), b.len(), "length mismatch: {a:?} vs {b:?}");
    for (idx, (x, y)) in a.iter().zip(b).enumerate() {
        let diff = (x - y).abs();
        let tol = ABS_TOL.max(REL_TOL * x.abs().max(y.abs()));
        assert!(diff <= tol, "index {idx}: {a:?} vs {b:?}, diff={diff}, tol={tol}");
    }
}

/// Like [`approx_eq_slice`] with a caller-supplied absolute tolerance.
pub fn approx_eq_slice_tol(a: &[f64], b: &[f64], tol: f64) {
    assert_eq!(a.len(), b.len(), "length mismatch: {a:?} vs {b:?}");
    for (idx, (x, y)) in a.iter().zip(b).enumerate() {
        let diff = (x - y).abs();
        assert!(diff <= tol, "index {idx}: {a:?} vs {b:?}, diff={diff}, tol={tol}");
    }
}

pub fn approx_vec3(a: Vector3<f64>, b: Vector3<f64>) {
    approx_eq_slice(&a.to_array(), &b.to_array());
}

pub fn approx_vec4(a: Vector4<f64>, b: Vector4<f64>) {
    approx_eq_slice(&a.to_array(), &b.to_array());
}

pub fn approx_mat4(a: Matrix4<f64>, b: Matrix4<f64>, tol: f64) {
    approx_eq_slice_tol(&a.to_array(), &b.to_array(), tol);
}

/// Quaternions `q` and `-q` encode the same rotation; accepts either sign.
pub fn approx_same_rotation(a: Quaternion, b: Quaternion, tol: f64) {
    let same = a.to_array().iter().zip(b.to_array()).all(|(x, y)| (x - y).abs() <= tol);
    let flipped = a.to_array().iter().zip(b.to_array()).all(|(x, y)| (x + y).abs() <= tol);
    assert!(same || flipped, "{a:?} is not ±{b:?} within {tol}");
}
