//! Specification identifiers selecting a named-color table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A web standard that defines a fixed list of color names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Specification {
    /// HTML 4.01, sixteen colors.
    Html4,
    /// CSS 2, identical to HTML 4.
    Css2,
    /// CSS 2.1, HTML 4 plus `orange`.
    Css21,
    /// CSS 3 color module (the SVG color keywords).
    #[default]
    Css3,
    /// The colorhexa.com list of named colors.
    ColorHexa,
}

impl Specification {
    /// Every supported specification, in documentation order.
    pub const ALL: [Self; 5] = [
        Self::Html4,
        Self::Css2,
        Self::Css21,
        Self::Css3,
        Self::ColorHexa,
    ];

    /// Stable identifier used for parsing, display and serialization.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Html4 => "html4",
            Self::Css2 => "css2",
            Self::Css21 => "css21",
            Self::Css3 => "css3",
            Self::ColorHexa => "color_hexa",
        }
    }

    /// Comma-separated identifiers of every supported specification.
    #[must_use]
    pub fn supported_list() -> String {
        Self::ALL
            .iter()
            .map(|spec| spec.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for Specification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Specification {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|spec| spec.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnsupportedSpecification {
                spec: s.to_string(),
            })
    }
}
