// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
mod common;

use common::{approx_eq, approx_vec3};
use mars_math::{
    CoordCartesian2D, CoordPolar, CoordSpherical, Float3, Int2, Quaternion, Vector2, Vector3,
    Vector4,
};

#[test]
fn cross_follows_right_hand_rule() {
    let x = Vector3::new(1.0_f32, 0.0, 0.0);
    let y = Vector3::new(0.0_f32, 1.0, 0.0);
    assert_eq!(x.cross(&y), Vector3::new(0.0, 0.0, 1.0));
    assert_eq!(y.cross(&x), Vector3::new(0.0, 0.0, -1.0));
}

#[test]
fn cross_matches_component_formula_for_integers() {
    let a = Vector3::new(3_i64, -7, 2);
    let b = Vector3::new(-4_i64, 5, 9);
    let expected = Vector3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    );
    assert_eq!(a.cross(&b), expected);
    assert_eq!(a.dot::<f64>(&a.cross(&b)), 0.0);
}

#[test]
fn dot_and_length_choose_output_precision() {
    let v = Vector3::new(2_u32, 3, 6);
    assert_eq!(v.dot::<f64>(&v), 49.0);
    assert_eq!(v.length::<f32>(), 7.0);
    assert_eq!(Vector2::dot_of::<f64>(&Vector2::new(1, 2), &Vector2::new(3, 4)), 11.0);
}

#[test]
fn normalise_gives_unit_length() {
    let v = Vector4::new(1.0_f64, -2.0, 3.0, -4.0).normalise();
    approx_eq(v.length::<f64>(), 1.0);
}

#[test]
fn normalise_zero_vector_returns_input() {
    assert_eq!(Vector2::<f32>::ZERO.normalise(), Vector2::ZERO);
    assert_eq!(Vector3::<i32>::ZERO.normalise(), Vector3::ZERO);
    let mut v = Vector4::<f64>::ZERO;
    v.normalise_mut();
    assert_eq!(v, Vector4::ZERO);
}

#[test]
fn min_max_are_component_wise() {
    let a = Vector3::new(1, 8, -3);
    let b = Vector3::new(4, 2, -5);
    assert_eq!(a.min(b), Vector3::new(1, 2, -5));
    assert_eq!(a.max(b), Vector3::new(4, 8, -3));
}

#[test]
fn lerp_hits_endpoints_and_extrapolates() {
    let a = Vector3::new(1_i32, 2, 3);
    let b = Vector3::new(5_i32, -2, 7);
    assert_eq!(Vector3::lerp(&a, &b, 0.0_f64), a.cast::<f64>());
    assert_eq!(Vector3::lerp(&a, &b, 1.0_f64), b.cast::<f64>());
    assert_eq!(Vector3::lerp(&a, &b, 0.5_f64), Vector3::new(3.0, 0.0, 5.0));
    assert_eq!(Vector3::lerp(&a, &b, 2.0_f64), Vector3::new(9.0, -6.0, 11.0));
}

#[test]
fn operators_cover_vector_and_scalar_forms() {
    let mut v = Vector2::new(1.0_f32, 2.0) + Vector2::new(3.0, 4.0);
    assert_eq!(v, Vector2::new(4.0, 6.0));
    v -= Vector2::splat(1.0);
    assert_eq!(v, Vector2::new(3.0, 5.0));
    v *= 2.0;
    assert_eq!(v, Vector2::new(6.0, 10.0));
    v /= 4.0;
    assert_eq!(v, Vector2::new(1.5, 2.5));
    assert_eq!(-v, Vector2::new(-1.5, -2.5));
    assert_eq!(2.0_f32 * v, v * 2.0);
    assert_ne!(v, Vector2::new(1.5, 2.6));
}

#[test]
fn equality_requires_every_component() {
    let a = Int2::new(1, 2);
    assert_ne!(a, Int2::new(1, 3));
    assert_ne!(a, Int2::new(0, 2));
    assert_eq!(a, Int2::from([1, 2]));
}

#[test]
fn rotate_2d_by_degrees_and_radians() {
    let v = Vector2::new(2.0_f64, 0.0);
    let r = v.rotate_deg(90.0);
    approx_eq(r.x, 0.0);
    approx_eq(r.y, 2.0);
    let back = r.rotate_rad(-core::f64::consts::FRAC_PI_2);
    approx_eq(back.x, 2.0);
    approx_eq(back.y, 0.0);
}

#[test]
fn rotate_quaternion_keeps_unit_vectors_unit() {
    let q = Quaternion::from_axis_angle(core::f64::consts::FRAC_PI_2, &Vector3::new(0.0, 0.0, 1.0));
    let v = Vector3::new(0.6_f64, 0.0, 0.8).rotate_quaternion(&q);
    approx_vec3(v, Vector3::new(0.0, 0.6, 0.8));
    approx_eq(v.length::<f64>(), 1.0);
}

#[test]
fn rotate_quaternion_returns_direction_of_long_vector() {
    let q = Quaternion::from_axis_angle(core::f64::consts::FRAC_PI_2, &Vector3::new(0.0, 0.0, 1.0));
    let v = Vector3::new(2.0_f64, 0.0, 0.0).rotate_quaternion(&q);
    approx_vec3(v, Vector3::new(0.0, 1.0, 0.0));

    let v = Vector3::new(3.0_f64, 0.0, 4.0).rotate_quaternion(&q);
    approx_vec3(v, Vector3::new(0.0, 0.6, 0.8));
}

#[test]
fn rotate_quaternion_of_zero_vector_is_zero() {
    let q = Quaternion::from_axis_angle(0.4, &Vector3::new(0.0, 1.0, 0.0));
    assert_eq!(Vector3::<f64>::ZERO.rotate_quaternion(&q), Vector3::ZERO);
}

#[test]
fn integer_dot_and_length_accumulate_in_the_output_type() {
    let v = Vector3::new(50_000_i32, 50_000, 0);
    assert_eq!(v.dot::<f64>(&v), 5.0e9);
    approx_eq(v.length::<f64>(), 50_000.0 * 2.0_f64.sqrt());

    let big = Vector2::new(u32::MAX, u32::MAX);
    let wide = f64::from(u32::MAX);
    assert_eq!(big.length_squared::<f64>(), 2.0 * wide * wide);
}

#[test]
fn f32_dot_accumulates_in_f64() {
    let a = Vector3::new(1.0e4_f32, 1.0e-4, 0.0);
    let wide = Vector3::new(1.0e4_f64, f64::from(1.0e-4_f32), 0.0);
    assert_eq!(a.dot::<f64>(&a), wide.dot::<f64>(&wide));
    assert!(a.dot::<f64>(&a) > 1.0e8);
    assert_eq!(Vector3::dot_of::<f64>(&a, &a), a.dot::<f64>(&a));
}

#[test]
fn rotate_axis_angle_about_x() {
    let v = Vector3::new(0.0_f64, 1.0, 0.0)
        .rotate_axis_angle(core::f64::consts::FRAC_PI_2, &Vector3::UNIT_X);
    approx_vec3(v, Vector3::new(0.0, 0.0, 1.0));
}

#[test]
fn dimension_changes_keep_components() {
    let v2 = Vector2::new(1, 2);
    let v3 = v2.extend(3);
    let v4 = v3.extend(4);
    assert_eq!(v4, Vector4::new(1, 2, 3, 4));
    assert_eq!(Vector3::from(v4), v3);
    assert_eq!(v3.truncate(), v2);
    assert_eq!(Vector4::from_vec2_pair(v2, Vector2::new(3, 4)), v4);
}

#[test]
fn colour_and_texture_aliases() {
    let c = Vector4::new(0.1_f32, 0.2, 0.3, 0.4);
    assert_eq!([c.r(), c.g(), c.b(), c.a()], c.to_array());
    assert_eq!([c.s(), c.t(), c.p(), c.q()], c.to_array());
}

#[test]
fn cast_uses_as_semantics() {
    let v = Float3::new(1.9, -1.9, 300.5);
    assert_eq!(v.cast::<i32>(), Vector3::new(1, -1, 300));
    assert_eq!(v.cast::<u32>(), Vector3::new(1, 0, 300));
}

#[test]
fn vectors_from_coordinates() {
    let p: Vector2<f64> = CoordPolar::new(2.0, core::f64::consts::FRAC_PI_2).into();
    approx_eq(p.x, 0.0);
    approx_eq(p.y, 2.0);
    let c: Vector2<i32> = CoordCartesian2D::new(3.7, -1.2).into();
    assert_eq!(c, Vector2::new(3, -1));
    let s: Vector3<f64> = CoordSpherical::new(1.0, 0.0, 0.0).into();
    approx_vec3(s, Vector3::new(0.0, 0.0, 1.0));
}
