//! Structured logging for webcolors
//!
//! The library itself only emits `tracing` events: `debug` for lookup misses
//! and `trace` for branch decisions in the HTML5 legacy color parser. Nothing
//! is printed unless the embedding program installs a subscriber, either its
//! own or the one built by [`init_logging`].
//!
//! # Usage
//!
//! ```ignore
//! use webcolors::logging::{init_logging, LogConfig};
//! use webcolors::config::LogFormat;
//!
//! let config = LogConfig {
//!     level: "debug".to_string(),
//!     format: LogFormat::Json,
//! };
//! init_logging(&config)?;
//! ```

pub use crate::config::LogFormat;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::level_filters::LevelFilter;
use tracing::{Level, Subscriber};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::time::SystemTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

static LOGGING_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Level filter (trace, debug, info, warn, error), overridden by `RUST_LOG`
    pub level: String,

    /// Output format (pretty or json)
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl LogConfig {
    /// The configured level, parsed.
    pub fn log_level(&self) -> Result<LogLevel, LogError> {
        self.level.parse().map_err(LogError::InvalidLevel)
    }
}

/// Error type for logging initialization
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("logging already initialized")]
    AlreadyInitialized,

    #[error("invalid log level: {0}")]
    InvalidLevel(String),

    #[error("failed to set global subscriber: {0}")]
    SetSubscriber(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Filter admitting `level` and everything more severe.
fn level_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::new("").add_directive(LevelFilter::from(Level::from(level)).into())
}

/// Subscriber writing events in `format` to `writer`.
fn build_subscriber<W>(
    format: LogFormat,
    filter: EnvFilter,
    writer: W,
) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Pretty => Box::new(
            registry.with(
                fmt::layer()
                    .with_writer(writer)
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false)
                    .with_ansi(false),
            ),
        ),
        LogFormat::Json => Box::new(
            registry.with(
                fmt::layer()
                    .json()
                    .with_timer(SystemTime)
                    .with_writer(writer)
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_list(false)
                    .flatten_event(true),
            ),
        ),
    }
}

/// Install the global subscriber, writing to stderr.
///
/// The level is validated before anything is installed. Only the first
/// successful call installs; later calls return
/// `Err(LogError::AlreadyInitialized)`.
///
/// `RUST_LOG` overrides the configured level, e.g. `RUST_LOG=webcolors=trace`.
pub fn init_logging(config: &LogConfig) -> Result<(), LogError> {
    let level = config.log_level()?;

    if is_logging_initialized() {
        return Err(LogError::AlreadyInitialized);
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| level_filter(level));
    tracing::subscriber::set_global_default(build_subscriber(
        config.format,
        filter,
        std::io::stderr,
    ))?;
    let _ = LOGGING_INITIALIZED.set(());

    tracing::info!(
        log_level = %config.level,
        log_format = %config.format,
        "logging initialized"
    );

    Ok(())
}

/// Whether [`init_logging`] has installed the global subscriber.
pub fn is_logging_initialized() -> bool {
    LOGGING_INITIALIZED.get().is_some()
}

/// Log levels accepted in [`LogConfig::level`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(format!(
                "unknown log level: {s}. Expected one of: trace, debug, info, warn, error"
            )),
        }
    }
}
