//! Logging setup for the `servicemap` binary
//!
//! Console output always goes through a `tracing-subscriber` fmt layer with an
//! `EnvFilter` (`RUST_LOG` overrides the requested level). When a log file is
//! configured, a second plain-text layer appends to it at debug level or the
//! requested level, whichever is more verbose.
//!
//! ```no_run
//! use servicemap_core::logging::{init_logging, LoggingConfig};
//! use tracing::Level;
//!
//! let config = LoggingConfig::with_level(Level::DEBUG).with_log_file("data/go/app/logs.log");
//! init_logging(&config).unwrap();
//! ```

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// File name of the log written next to the output files
pub const LOG_FILE_NAME: &str = "logs.log";

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum level shown on the console
    pub level: Level,

    /// Append a plain-text copy of the log to this file
    pub log_file: Option<PathBuf>,

    /// Include the module target in console lines
    pub include_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            log_file: None,
            include_target: false,
        }
    }
}

impl LoggingConfig {
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Level recorded in the log file
    pub fn file_level(&self) -> Level {
        self.level.max(Level::DEBUG)
    }
}

/// Parse a command-line level name (case-insensitive)
///
/// `default` keeps `INFO`; `warning` is an alias of `warn`; `fatal` and
/// `panic` map to `ERROR`. Unknown names are returned as the error so the
/// caller can report them once logging is up.
///
/// ```
/// use servicemap_core::logging::parse_level;
/// use tracing::Level;
///
/// assert_eq!(parse_level("warning"), Ok(Level::WARN));
/// assert_eq!(parse_level("default"), Ok(Level::INFO));
/// assert!(parse_level("loud").is_err());
/// ```
pub fn parse_level(level_str: &str) -> std::result::Result<Level, String> {
    match level_str.to_lowercase().as_str() {
        "default" | "info" => Ok(Level::INFO),
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "warn" | "warning" => Ok(Level::WARN),
        "error" | "fatal" | "panic" => Ok(Level::ERROR),
        _ => Err(format!(
            "Invalid log level '{}', defaulting to INFO. Valid levels: default, trace, debug, info, warning, error, fatal, panic",
            level_str
        )),
    }
}

/// Install the global subscriber
///
/// Fails only when the log file cannot be opened. A second call is a no-op.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let file_layer = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(false)
                    .with_writer(Mutex::new(file))
                    .with_filter(LevelFilter::from_level(config.file_level())),
            )
        }
        None => None,
    };

    let console_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(config.level).into())
        .from_env_lossy();
    let console_layer = fmt::layer()
        .with_target(config.include_target)
        .with_writer(std::io::stderr)
        .with_filter(console_filter);

    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
    Ok(())
}
