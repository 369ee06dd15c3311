//! Normalization of hex strings and `rgb()` triplets.
//!
//! Malformed strings are errors. Numeric values outside the permitted range
//! are clipped silently.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use crate::error::{Error, Result};
use crate::types::{IntegerRgb, PercentRgb};

static HEX_COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([a-fA-F0-9]{3}|[a-fA-F0-9]{6})$").expect("hex color pattern is valid")
});

/// Normalize a hexadecimal color value to `#rrggbb`, lowercase.
///
/// The three-digit shorthand `#abc` expands to `#aabbcc`.
pub fn normalize_hex(hex_value: &str) -> Result<String> {
    let digits = HEX_COLOR_RE
        .captures(hex_value)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| Error::InvalidFormat {
            value: hex_value.to_string(),
        })?
        .as_str();

    let mut normalized = String::with_capacity(7);
    normalized.push('#');
    if digits.len() == 3 {
        for c in digits.chars() {
            normalized.push(c);
            normalized.push(c);
        }
    } else {
        normalized.push_str(digits);
    }
    normalized.make_ascii_lowercase();
    Ok(normalized)
}

fn normalize_integer_rgb(value: i64) -> i64 {
    value.clamp(0, 255)
}

/// Clip each component of an integer triplet into 0–255.
#[must_use]
pub fn normalize_integer_triplet(rgb: IntegerRgb) -> IntegerRgb {
    rgb.map(normalize_integer_rgb)
}

/// Numeric part of a percentage component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Percent {
    Integer(i64),
    Float(f64),
}

impl Percent {
    /// Parse the text before the first `%`.
    ///
    /// A value with a decimal point or an exponent is a float, anything
    /// else must be an integer.
    pub(crate) fn parse(value: &str) -> Result<Self> {
        let number = percent_number(value);
        let invalid = || Error::InvalidPercent {
            value: value.to_string(),
        };
        if number.contains(['.', 'e', 'E']) {
            number.parse().map(Self::Float).map_err(|_| invalid())
        } else {
            number.parse().map(Self::Integer).map_err(|_| invalid())
        }
    }

    fn clamped(self) -> Self {
        match self {
            Self::Integer(n) if n < 0 => Self::Integer(0),
            Self::Integer(n) if n > 100 => Self::Integer(100),
            Self::Float(f) if f < 0.0 => Self::Integer(0),
            Self::Float(f) if f > 100.0 => Self::Integer(100),
            other => other,
        }
    }
}

/// The text of a percentage component before its first `%`.
pub(crate) fn percent_number(value: &str) -> &str {
    value.split_once('%').map_or(value, |(number, _)| number)
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}%"),
            // Fixed notation with at least one fractional digit, so 50.0
            // prints "50.0" and 1e-5 prints "0.00001". Both parse back as
            // the same float.
            Self::Float(v) => {
                let text = v.to_string();
                if text.contains('.') {
                    write!(f, "{text}%")
                } else {
                    write!(f, "{text}.0%")
                }
            }
        }
    }
}

fn normalize_percent_rgb(value: &str) -> Result<String> {
    Ok(Percent::parse(value)?.clamped().to_string())
}

/// Clip each component of a percentage triplet into 0%–100%.
pub fn normalize_percent_triplet(rgb: &PercentRgb) -> Result<PercentRgb> {
    Ok(PercentRgb::new(
        normalize_percent_rgb(&rgb.red)?,
        normalize_percent_rgb(&rgb.green)?,
        normalize_percent_rgb(&rgb.blue)?,
    ))
}
