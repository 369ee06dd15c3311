//! Color value triplets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An `rgb()` triplet of integers.
///
/// Components may be out of range when supplied by a caller; every function
/// in this crate clamps them to 0–255 before use and only ever returns
/// in-range triplets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntegerRgb {
    pub red: i64,
    pub green: i64,
    pub blue: i64,
}

impl IntegerRgb {
    #[must_use]
    pub const fn new(red: i64, green: i64, blue: i64) -> Self {
        Self { red, green, blue }
    }

    /// Apply `f` to each component in red, green, blue order.
    #[must_use]
    pub fn map(self, mut f: impl FnMut(i64) -> i64) -> Self {
        Self::new(f(self.red), f(self.green), f(self.blue))
    }
}

impl From<(i64, i64, i64)> for IntegerRgb {
    fn from((red, green, blue): (i64, i64, i64)) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<Html5SimpleColor> for IntegerRgb {
    fn from(color: Html5SimpleColor) -> Self {
        Self::new(
            i64::from(color.red),
            i64::from(color.green),
            i64::from(color.blue),
        )
    }
}

impl fmt::Display for IntegerRgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

/// An `rgb()` triplet of percentages such as `("50%", "12.5%", "0%")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PercentRgb {
    pub red: String,
    pub green: String,
    pub blue: String,
}

impl PercentRgb {
    #[must_use]
    pub fn new(red: impl Into<String>, green: impl Into<String>, blue: impl Into<String>) -> Self {
        Self {
            red: red.into(),
            green: green.into(),
            blue: blue.into(),
        }
    }

    /// Components in red, green, blue order.
    #[must_use]
    pub fn components(&self) -> [&str; 3] {
        [&self.red, &self.green, &self.blue]
    }
}

impl From<(&str, &str, &str)> for PercentRgb {
    fn from((red, green, blue): (&str, &str, &str)) -> Self {
        Self::new(red, green, blue)
    }
}

impl fmt::Display for PercentRgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

/// Result of the HTML5 simple and legacy color parsing algorithms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Html5SimpleColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Html5SimpleColor {
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

impl From<(u8, u8, u8)> for Html5SimpleColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

impl fmt::Display for Html5SimpleColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}
