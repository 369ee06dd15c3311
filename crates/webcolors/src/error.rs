//! Error types for webcolors

use thiserror::Error;

use crate::specification::Specification;

/// Result type alias using the library's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for webcolors
///
/// Malformed strings always error. Out-of-range numeric components are not
/// errors; the normalizers clamp them instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Value does not match `#` followed by 3 or 6 hex digits
    #[error("'{value}' is not a valid hexadecimal color value.")]
    InvalidFormat { value: String },

    /// Percentage component whose numeric part does not parse
    #[error("'{value}' is not a valid percentage color component.")]
    InvalidPercent { value: String },

    /// Specification identifier outside the supported set
    #[error(
        "{spec} is not a supported specification for color name lookups; supported specifications are: {}.",
        Specification::supported_list()
    )]
    UnsupportedSpecification { spec: String },

    /// Name has no entry in the chosen specification
    #[error("'{name}' is not defined as a named color in {spec}")]
    NameNotFound { name: String, spec: Specification },

    /// Hex value has no name in the chosen specification
    #[error("'{hex}' has no defined color name in {spec}")]
    HexNotFound { hex: String, spec: Specification },

    /// Simple color input that is not exactly seven characters long
    #[error("An HTML5 simple color must be a string exactly seven characters long, got {length}.")]
    InvalidLength { length: usize },

    /// Simple color input that does not start with `#`
    #[error("An HTML5 simple color must begin with the character '#' (U+0023).")]
    MissingHashPrefix,

    /// Simple color input whose last six characters are not all hex digits
    #[error("An HTML5 simple color must contain exactly six ASCII hex digits, got '{input}'.")]
    InvalidHexDigits { input: String },

    /// Legacy color input that is the empty string
    #[error("HTML5 legacy color parsing forbids empty string as a value.")]
    EmptyInput,

    /// Legacy color input that is the keyword "transparent"
    #[error("HTML5 legacy color parsing forbids \"transparent\" as a value.")]
    TransparentNotAllowed,

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl Error {
    /// Whether the error was caused by a lookup miss rather than bad input.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NameNotFound { .. } | Self::HexNotFound { .. })
    }
}

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    ParseFailed(String),

    #[error("Failed to serialize config: {0}")]
    SerializeFailed(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}
