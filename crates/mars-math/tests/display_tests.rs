// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
use mars_math::{
    DisplayStyle, DisplayStyleError, Matrix2, Matrix3, Quaternion, StyledDisplay, Vector2,
    Vector3, Vector4,
};

#[test]
fn default_style_is_three_decimals_with_sign() {
    assert_eq!(DisplayStyle::default(), DisplayStyle::new(3, true, true));
    let v = Vector3::new(1.0_f32, -2.5, 0.0);
    assert_eq!(v.to_string(), "+1.000, -2.500, +0.000");
}

#[test]
fn formatter_precision_overrides_digits() {
    let v = Vector2::new(1.0_f64, -2.26);
    assert_eq!(format!("{v:.1}"), "+1.0, -2.3");
    assert_eq!(format!("{v:.0}"), "+1, -2");
}

#[test]
fn integers_ignore_precision_but_keep_sign() {
    let v = Vector4::new(3_i32, -4, 0, 12);
    assert_eq!(v.to_string(), "+3, -4, +0, +12");
    let plain = DisplayStyle::new(6, false, false);
    assert_eq!(v.styled(plain).to_string(), "3, -4, 0, 12");
}

#[test]
fn scientific_notation() {
    let style: DisplayStyle = "precision=2, scientific".parse().unwrap();
    let v = Vector2::new(1500.0_f64, -0.025);
    assert_eq!(v.styled(style).to_string(), "+1.50e3, -2.50e-2");
    let unsigned = style.with_precision(1);
    let unsigned = DisplayStyle { force_sign: false, ..unsigned };
    assert_eq!(v.styled(unsigned).to_string(), "1.5e3, -2.5e-2");
}

#[test]
fn matrices_print_one_row_per_line() {
    assert_eq!(Matrix2::new([1, 2, 3, 4]).to_string(), "+1, +2\n+3, +4");
    let m = Matrix3::<f32>::identity();
    let style = DisplayStyle::new(1, false, true);
    assert_eq!(
        m.styled(style).to_string(),
        "1.0, 0.0, 0.0\n0.0, 1.0, 0.0\n0.0, 0.0, 1.0"
    );
}

#[test]
fn quaternions_label_imaginary_parts() {
    assert_eq!(
        Quaternion::identity().to_string(),
        "+1.000, +0.000i, +0.000j, +0.000k"
    );
    let q = Quaternion::new(0.5, -1.0, 2.0, -0.25);
    assert_eq!(
        q.styled(DisplayStyle::new(2, false, true)).to_string(),
        "0.50, -1.00i, 2.00j, -0.25k"
    );
}

#[test]
fn parse_errors_render_readably() {
    let err = "colour=red".parse::<DisplayStyle>().unwrap_err();
    assert_eq!(err, DisplayStyleError::UnknownKey("colour".into()));
    assert_eq!(err.to_string(), "unknown display option: colour");

    let err = "force_sign=maybe".parse::<DisplayStyle>().unwrap_err();
    assert_eq!(err.to_string(), "invalid value for force_sign: maybe");

    let err = "precision=x".parse::<DisplayStyle>().unwrap_err();
    assert_eq!(err.to_string(), "invalid precision: x");
}

#[test]
fn later_options_win() {
    let style: DisplayStyle = "no_force_sign, force_sign, scientific, fixed".parse().unwrap();
    assert_eq!(style, DisplayStyle::default());
}

#[cfg(feature = "serde")]
mod persistence {
    use super::*;

    #[test]
    fn display_style_round_trips_through_json() {
        let style = DisplayStyle::new(5, false, false);
        let json = serde_json::to_string(&style).unwrap();
        assert_eq!(json, r#"{"precision":5,"force_sign":false,"fixed_notation":false}"#);
        let back: DisplayStyle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, style);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let style: DisplayStyle = serde_json::from_str(r#"{"precision":1}"#).unwrap();
        assert_eq!(style, DisplayStyle::default().with_precision(1));
        let style: DisplayStyle = serde_json::from_str("{}").unwrap();
        assert_eq!(style, DisplayStyle::default());
    }

    #[test]
    fn value_types_serialise_their_components() {
        let v = Vector3::new(1.5_f64, -2.0, 0.25);
        assert_eq!(serde_json::to_string(&v).unwrap(), r#"{"x":1.5,"y":-2.0,"z":0.25}"#);
        let m: Matrix2<i32> = serde_json::from_str(r#"{"data":[1,2,3,4]}"#).unwrap();
        assert_eq!(m, Matrix2::new([1, 2, 3, 4]));
        let q: Quaternion = serde_json::from_str(r#"{"s":1.0,"i":0.0,"j":0.0,"k":0.0}"#).unwrap();
        assert_eq!(q, Quaternion::identity());
    }
}
