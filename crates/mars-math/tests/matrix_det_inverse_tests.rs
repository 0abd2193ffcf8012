// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
mod common;

use common::{approx_eq_slice, approx_mat4};
use mars_math::{Double2x2, Matrix2, Matrix3, Matrix4, Vector3, Vector4};

#[test]
fn det_2x2_worked_example() {
    assert_eq!(Matrix2::new([1, 2, 3, 4]).det::<f64>(), -2.0);
    assert_eq!(
        Matrix2::new([1.0_f32, 2.0, 3.0, 4.0]).vec_det(),
        mars_math::Vector2::new(4.0, -6.0)
    );
}

#[test]
fn det_3x3_and_4x4_worked_examples() {
    let m3 = Matrix3::new([6, 1, 1, 4, -2, 5, 2, 8, 7]);
    assert_eq!(m3.det::<f64>(), -306.0);

    let m4 = Matrix4::new([1, 0, 2, -1, 3, 0, 0, 5, 2, 1, 4, -3, 1, 0, 5, 0]);
    assert_eq!(m4.det::<f64>(), 30.0);
    let terms = m4.vec_det();
    assert_eq!(terms.x + terms.y + terms.z + terms.w, 30);
}

#[test]
fn vec_det_signs_alternate_along_the_first_row() {
    let m3 = Matrix3::new([6, 1, 1, 4, -2, 5, 2, 8, 7]);
    // +6·(-54), -1·(18), +1·(36)
    assert_eq!(m3.vec_det(), Vector3::new(-324, -18, 36));
}

#[test]
fn singular_matrices_have_zero_det() {
    assert_eq!(Matrix3::new([1, 2, 3, 4, 5, 6, 7, 8, 9]).det::<f32>(), 0.0);
    assert_eq!(Matrix4::<i32>::ZERO.det::<f64>(), 0.0);
}

#[test]
fn inverse_2x2_worked_example() {
    let inv = Double2x2::new([4.0, 7.0, 2.0, 6.0]).inverse();
    approx_eq_slice(&inv.to_array(), &[0.6, -0.7, -0.2, 0.4]);
}

#[test]
fn inverse_3x3_worked_example() {
    let m = Matrix3::new([2.0_f64, 0.0, 1.0, 1.0, 3.0, 2.0, 1.0, 1.0, 2.0]);
    approx_eq_slice(
        &m.inverse().to_array(),
        &[2.0 / 3.0, 1.0 / 6.0, -0.5, 0.0, 0.5, -0.5, -1.0 / 3.0, -1.0 / 3.0, 1.0],
    );
    approx_eq_slice(&(m * m.inverse()).to_array(), &Matrix3::<f64>::IDENTITY.to_array());
}

#[test]
fn inverse_4x4_worked_example() {
    let m = Matrix4::new([
        2.0_f64, 0.0, 0.0, 1.0, //
        0.0, 3.0, 0.0, 2.0, //
        1.0, 0.0, 4.0, 3.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);
    let expected = Matrix4::new([
        0.5, 0.0, 0.0, -0.5, //
        0.0, 1.0 / 3.0, 0.0, -2.0 / 3.0, //
        -0.125, 0.0, 0.25, -0.625, //
        0.0, 0.0, 0.0, 1.0,
    ]);
    approx_mat4(m.inverse(), expected, 1e-12);
    approx_mat4(m * m.inverse(), Matrix4::identity(), 1e-12);
}

#[test]
fn singular_inverse_returns_input() {
    let m2 = Matrix2::new([1.0_f32, 2.0, 2.0, 4.0]);
    assert_eq!(m2.inverse(), m2);
    let m3 = Matrix3::new([1.0_f64, 2.0, 3.0, 2.0, 4.0, 6.0, 0.0, 1.0, 5.0]);
    assert_eq!(m3.inverse(), m3);
    let m4 = Matrix4::from_diagonal(Vector4::new(1.0_f64, 2.0, 0.0, 4.0));
    assert_eq!(m4.inverse(), m4);
}

#[test]
fn transform_inverse_undoes_transform() {
    let axis = Vector3::new(1.0_f64, 2.0, 2.0).normalise();
    let m = Matrix4::translation(Vector3::new(1.0, -2.0, 3.0))
        * Matrix4::rotation(0.7, axis)
        * Matrix4::scale(Vector3::new(2.0, 0.5, 4.0));
    let p = Vector4::new(0.3, -1.7, 2.2, 1.0);
    let back = m.inverse() * (m * p);
    approx_eq_slice(&back.to_array(), &p.to_array());
}
