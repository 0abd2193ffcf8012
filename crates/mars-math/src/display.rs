// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Text rendering for vectors, matrices and quaternions.
//!
//! Every value type implements [`fmt::Display`] using the default
//! [`DisplayStyle`] (three decimals, explicit `+`, fixed notation). A
//! formatter precision (`{:.5}`) overrides the digit count. For any other
//! convention wrap the value with [`Styled`] via `value.styled(style)`.
//!
//! `DisplayStyle` is plain configuration: it parses from a short
//! comma-separated string and, with the `serde` feature, round-trips through
//! any serde format so tools can persist it alongside their other settings.

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// Output convention for styled rendering.
///
/// # Examples
/// ```
/// use mars_math::{DisplayStyle, StyledDisplay, Vector2};
/// let style: DisplayStyle = "precision=1,no_force_sign".parse().unwrap();
/// let v = Vector2::new(1.5_f32, -2.0);
/// assert_eq!(v.styled(style).to_string(), "1.5, -2.0");
/// assert_eq!(v.to_string(), "+1.500, -2.000");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayStyle {
    /// Digits after the decimal point (or after the leading digit in
    /// scientific notation). Ignored for integer elements.
    pub precision: usize,
    /// Print `+` in front of non-negative values.
    pub force_sign: bool,
    /// Use fixed-point notation; when `false`, floats print in scientific
    /// notation.
    pub fixed_notation: bool,
}

impl DisplayStyle {
    /// Digit count used by [`DisplayStyle::default`].
    pub const DEFAULT_PRECISION: usize = 3;

    /// Creates a style from its three options.
    pub const fn new(precision: usize, force_sign: bool, fixed_notation: bool) -> Self {
        Self {
            precision,
            force_sign,
            fixed_notation,
        }
    }

    /// Returns a copy with `precision` replaced.
    pub const fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Default style adjusted by the formatter's precision, if one was given.
    pub(crate) fn for_formatter(f: &fmt::Formatter<'_>) -> Self {
        let style = Self::default();
        match f.precision() {
            Some(precision) => style.with_precision(precision),
            None => style,
        }
    }
}

impl Default for DisplayStyle {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PRECISION, true, true)
    }
}

/// Failure while parsing a [`DisplayStyle`] from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisplayStyleError {
    /// The option name is not recognised.
    #[error("unknown display option: {0}")]
    UnknownKey(String),
    /// `precision` was given a value that is not a non-negative integer.
    #[error("invalid precision: {0}")]
    InvalidPrecision(String),
    /// A boolean option was given a value other than `true`/`false`.
    #[error("invalid value for {key}: {value}")]
    InvalidFlag {
        /// Option name.
        key: String,
        /// Rejected value.
        value: String,
    },
    /// `precision` appeared without `=N`.
    #[error("missing value for {0}")]
    MissingValue(String),
}

impl FromStr for DisplayStyle {
    type Err = DisplayStyleError;

    /// Parses `precision=N`, `force_sign`, `no_force_sign`, `fixed`,
    /// `scientific`, `force_sign=BOOL` and `fixed_notation=BOOL`, separated by
    /// commas. Options not mentioned keep their default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut style = Self::default();
        for item in s.split(',').map(str::trim).filter(|item| !item.is_empty()) {
            let (key, value) = match item.split_once('=') {
                Some((key, value)) => (key.trim(), Some(value.trim())),
                None => (item, None),
            };
            match (key, value) {
                ("precision", Some(v)) => {
                    style.precision = v
                        .parse()
                        .map_err(|_| DisplayStyleError::InvalidPrecision(v.to_owned()))?;
                }
                ("precision", None) => {
                    return Err(DisplayStyleError::MissingValue(key.to_owned()));
                }
                ("force_sign", None) => style.force_sign = true,
                ("no_force_sign", None) => style.force_sign = false,
                ("fixed", None) => style.fixed_notation = true,
                ("scientific", None) => style.fixed_notation = false,
                ("force_sign", Some(v)) => style.force_sign = parse_flag(key, v)?,
                ("fixed_notation", Some(v)) => style.fixed_notation = parse_flag(key, v)?,
                _ => return Err(DisplayStyleError::UnknownKey(key.to_owned())),
            }
        }
        Ok(style)
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, DisplayStyleError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(DisplayStyleError::InvalidFlag {
            key: key.to_owned(),
            value: value.to_owned(),
        }),
    }
}

/// Writes a floating-point component.
pub(crate) fn write_float<F>(
    f: &mut fmt::Formatter<'_>,
    value: F,
    style: &DisplayStyle,
) -> fmt::Result
where
    F: fmt::Display + fmt::LowerExp,
{
    let p = style.precision;
    match (style.fixed_notation, style.force_sign) {
        (true, true) => write!(f, "{value:+.p$}"),
        (true, false) => write!(f, "{value:.p$}"),
        (false, true) => write!(f, "{value:+.p$e}"),
        (false, false) => write!(f, "{value:.p$e}"),
    }
}

/// Writes an integer component; only `force_sign` applies.
pub(crate) fn write_int<I>(
    f: &mut fmt::Formatter<'_>,
    value: I,
    style: &DisplayStyle,
) -> fmt::Result
where
    I: fmt::Display,
{
    if style.force_sign {
        write!(f, "{value:+}")
    } else {
        write!(f, "{value}")
    }
}

/// Values that render under an explicit [`DisplayStyle`].
pub trait StyledDisplay {
    /// Writes `self` using `style`.
    fn fmt_styled(&self, f: &mut fmt::Formatter<'_>, style: &DisplayStyle) -> fmt::Result;

    /// Wraps `self` so `Display` uses `style`.
    fn styled(&self, style: DisplayStyle) -> Styled<'_, Self> {
        Styled { value: self, style }
    }
}

/// `Display` adaptor returned by [`StyledDisplay::styled`].
#[derive(Debug)]
pub struct Styled<'a, V: ?Sized> {
    value: &'a V,
    style: DisplayStyle,
}

impl<V: StyledDisplay + ?Sized> fmt::Display for Styled<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt_styled(f, &self.style)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn empty_string_parses_to_default() {
        assert_eq!("".parse::<DisplayStyle>(), Ok(DisplayStyle::default()));
        assert_eq!(" , ".parse::<DisplayStyle>(), Ok(DisplayStyle::default()));
    }

    #[test]
    fn flags_and_precision_parse() {
        let style: DisplayStyle = "precision = 5, no_force_sign, scientific".parse().unwrap();
        assert_eq!(style, DisplayStyle::new(5, false, false));
        let style: DisplayStyle = "force_sign=false,fixed_notation=true".parse().unwrap();
        assert_eq!(style, DisplayStyle::new(3, false, true));
    }

    #[test]
    fn bad_input_is_reported() {
        assert_eq!(
            "precision=-1".parse::<DisplayStyle>(),
            Err(DisplayStyleError::InvalidPrecision("-1".into()))
        );
        assert_eq!(
            "precision".parse::<DisplayStyle>(),
            Err(DisplayStyleError::MissingValue("precision".into()))
        );
        assert_eq!(
            "colour".parse::<DisplayStyle>(),
            Err(DisplayStyleError::UnknownKey("colour".into()))
        );
        assert!(matches!(
            "fixed_notation=yes".parse::<DisplayStyle>(),
            Err(DisplayStyleError::InvalidFlag { .. })
        ));
    }
}
