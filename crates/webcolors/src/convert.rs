//! Conversions between color names, hex values and `rgb()` triplets.
//!
//! Every function normalizes its input first, so callers may pass
//! shorthand hex, mixed-case names or out-of-range components.

use crate::error::{Error, Result};
use crate::normalize::{
    normalize_hex, normalize_integer_triplet, normalize_percent_triplet, percent_number,
};
use crate::specification::Specification;
use crate::tables;
use crate::types::{IntegerRgb, PercentRgb};

// =============================================================================
// From names
// =============================================================================

/// Convert a color name to a normalized hex value.
///
/// The name is matched case-insensitively.
pub fn name_to_hex(name: &str, spec: Specification) -> Result<String> {
    let normalized = name.to_lowercase();
    match tables::names_to_hex(spec).get(&normalized) {
        Some(hex) => Ok((*hex).to_string()),
        None => {
            tracing::debug!(name, %spec, "color name lookup missed");
            Err(Error::NameNotFound {
                name: name.to_string(),
                spec,
            })
        }
    }
}

/// Convert a color name to an integer `rgb()` triplet.
pub fn name_to_rgb(name: &str, spec: Specification) -> Result<IntegerRgb> {
    hex_to_rgb(&name_to_hex(name, spec)?)
}

/// Convert a color name to a percentage `rgb()` triplet.
pub fn name_to_rgb_percent(name: &str, spec: Specification) -> Result<PercentRgb> {
    Ok(rgb_to_rgb_percent(name_to_rgb(name, spec)?))
}

// =============================================================================
// From hex
// =============================================================================

/// Convert a hex value to its canonical color name in `spec`.
pub fn hex_to_name(hex_value: &str, spec: Specification) -> Result<String> {
    let normalized = normalize_hex(hex_value)?;
    match tables::hex_to_names(spec).get(normalized.as_str()) {
        Some(name) => Ok((*name).to_string()),
        None => {
            tracing::debug!(hex = hex_value, %spec, "hex lookup missed");
            Err(Error::HexNotFound {
                hex: hex_value.to_string(),
                spec,
            })
        }
    }
}

/// Convert a hex value to an integer `rgb()` triplet.
pub fn hex_to_rgb(hex_value: &str) -> Result<IntegerRgb> {
    let normalized = normalize_hex(hex_value)?;
    let value = i64::from_str_radix(&normalized[1..], 16).map_err(|_| Error::InvalidFormat {
        value: hex_value.to_string(),
    })?;
    Ok(IntegerRgb::new(value >> 16, (value >> 8) & 0xff, value & 0xff))
}

/// Convert a hex value to a percentage `rgb()` triplet.
pub fn hex_to_rgb_percent(hex_value: &str) -> Result<PercentRgb> {
    Ok(rgb_to_rgb_percent(hex_to_rgb(hex_value)?))
}

// =============================================================================
// From integer triplets
// =============================================================================

/// Convert an integer triplet to its canonical color name in `spec`.
pub fn rgb_to_name(rgb: IntegerRgb, spec: Specification) -> Result<String> {
    hex_to_name(&rgb_to_hex(rgb), spec)
}

/// Convert an integer triplet to a normalized hex value.
#[must_use]
pub fn rgb_to_hex(rgb: IntegerRgb) -> String {
    let IntegerRgb { red, green, blue } = normalize_integer_triplet(rgb);
    format!("#{red:02x}{green:02x}{blue:02x}")
}

fn integer_to_percent(value: i64) -> String {
    match value {
        255 => "100%".to_string(),
        128 => "50%".to_string(),
        64 => "25%".to_string(),
        32 => "12.5%".to_string(),
        16 => "6.25%".to_string(),
        0 => "0%".to_string(),
        _ => format!("{:.2}%", value as f64 / 255.0 * 100.0),
    }
}

/// Convert an integer triplet to a percentage triplet.
///
/// 0, 16, 32, 64, 128 and 255 map to exact percentages. Every other value
/// is rounded to two decimal places, so converting back is not guaranteed
/// to reproduce the original integer.
#[must_use]
pub fn rgb_to_rgb_percent(rgb: IntegerRgb) -> PercentRgb {
    let IntegerRgb { red, green, blue } = normalize_integer_triplet(rgb);
    PercentRgb::new(
        integer_to_percent(red),
        integer_to_percent(green),
        integer_to_percent(blue),
    )
}

// =============================================================================
// From percentage triplets
// =============================================================================

/// Convert a percentage triplet to its canonical color name in `spec`.
pub fn rgb_percent_to_name(rgb: &PercentRgb, spec: Specification) -> Result<String> {
    rgb_to_name(rgb_percent_to_rgb(rgb)?, spec)
}

/// Convert a percentage triplet to a normalized hex value.
pub fn rgb_percent_to_hex(rgb: &PercentRgb) -> Result<String> {
    Ok(rgb_to_hex(rgb_percent_to_rgb(rgb)?))
}

fn percent_to_integer(value: &str) -> Result<i64> {
    let percent: f64 = percent_number(value)
        .parse()
        .map_err(|_| Error::InvalidPercent {
            value: value.to_string(),
        })?;
    // Ties go to the even integer: "50%" is 127.5, which becomes 128.
    Ok((percent / 100.0 * 255.0).round_ties_even() as i64)
}

/// Convert a percentage triplet to an integer triplet.
pub fn rgb_percent_to_rgb(rgb: &PercentRgb) -> Result<IntegerRgb> {
    let PercentRgb { red, green, blue } = normalize_percent_triplet(rgb)?;
    Ok(IntegerRgb::new(
        percent_to_integer(&red)?,
        percent_to_integer(&green)?,
        percent_to_integer(&blue)?,
    ))
}

// =============================================================================
// ColorConverter
// =============================================================================

/// Name conversions bound to one specification.
///
/// Useful when a caller always works against the same color list, typically
/// the one chosen in [`crate::config::ColorConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorConverter {
    spec: Specification,
}

impl ColorConverter {
    #[must_use]
    pub const fn new(spec: Specification) -> Self {
        Self { spec }
    }

    #[must_use]
    pub const fn specification(&self) -> Specification {
        self.spec
    }

    pub fn name_to_hex(&self, name: &str) -> Result<String> {
        name_to_hex(name, self.spec)
    }

    pub fn name_to_rgb(&self, name: &str) -> Result<IntegerRgb> {
        name_to_rgb(name, self.spec)
    }

    pub fn name_to_rgb_percent(&self, name: &str) -> Result<PercentRgb> {
        name_to_rgb_percent(name, self.spec)
    }

    pub fn hex_to_name(&self, hex_value: &str) -> Result<String> {
        hex_to_name(hex_value, self.spec)
    }

    pub fn rgb_to_name(&self, rgb: IntegerRgb) -> Result<String> {
        rgb_to_name(rgb, self.spec)
    }

    pub fn rgb_percent_to_name(&self, rgb: &PercentRgb) -> Result<String> {
        rgb_percent_to_name(rgb, self.spec)
    }
}
