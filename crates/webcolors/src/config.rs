//! Configuration for callers embedding webcolors.
//!
//! Configuration is parsed from TOML text supplied by the caller; this crate
//! never reads files or the environment itself.
//!
//! ```toml
//! default_spec = "css21"
//!
//! [logging]
//! level = "debug"
//! format = "json"
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::convert::ColorConverter;
use crate::error::{ConfigError, Result};
use crate::logging::{LogConfig, LogLevel};
use crate::specification::Specification;

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output for interactive use
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => f.write_str("pretty"),
            Self::Json => f.write_str("json"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(format!("unknown log format: {s}. Expected one of: pretty, json")),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    /// Specification used when a caller does not name one
    pub default_spec: Specification,

    /// Logging settings for [`crate::logging::init_logging`]
    pub logging: LogConfig,
}

impl ColorConfig {
    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration back to TOML text.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeFailed(e.to_string()))?)
    }

    /// Check values serde cannot check on its own.
    pub fn validate(&self) -> Result<()> {
        self.logging
            .level
            .parse::<LogLevel>()
            .map_err(ConfigError::ValidationError)?;
        Ok(())
    }

    /// A converter bound to [`Self::default_spec`].
    #[must_use]
    pub fn converter(&self) -> ColorConverter {
        ColorConverter::new(self.default_spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn log_format_from_str() {
        assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert_eq!("PRETTY".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("Json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert!("invalid".parse::<LogFormat>().is_err());
    }

    #[test]
    fn log_format_display() {
        assert_eq!(LogFormat::Pretty.to_string(), "pretty");
        assert_eq!(LogFormat::Json.to_string(), "json");
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = ColorConfig::from_toml_str("").unwrap();
        assert_eq!(config.default_spec, Specification::Css3);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn parses_full_config() {
        let config = ColorConfig::from_toml_str(
            r#"
            default_spec = "css21"

            [logging]
            level = "debug"
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.default_spec, Specification::Css21);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.converter().name_to_hex("orange").unwrap(), "#ffa500");
    }

    #[test]
    fn rejects_unknown_specification() {
        let err = ColorConfig::from_toml_str(r#"default_spec = "css4""#).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ParseFailed(_))));
    }

    #[test]
    fn rejects_bad_log_level() {
        let err = ColorConfig::from_toml_str("[logging]\nlevel = \"loud\"").unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ValidationError(_))));
    }

    #[test]
    fn toml_roundtrip() {
        let mut config = ColorConfig::default();
        config.default_spec = Specification::ColorHexa;
        config.logging.format = LogFormat::Json;

        let text = config.to_toml_string().unwrap();
        assert!(text.contains("default_spec = \"color_hexa\""));
        let parsed = ColorConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed.default_spec, Specification::ColorHexa);
        assert_eq!(parsed.logging.format, LogFormat::Json);
    }
}
