use std::path::PathBuf;

use thiserror::Error;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, prelude::*, EnvFilter};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to create log directory: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid log filter directive: {0}")]
    FilterError(#[from] ParseError),

    #[error("A global tracing subscriber is already installed: {0}")]
    InitError(#[from] TryInitError),
}

/// # Logging Options
///
/// Controls where log records go. Console output is always on; the JSON file
/// layer is added only when `log_dir` is set.
#[derive(Debug, Clone)]
pub struct LoggingOptions {
    /// Filter used when `RUST_LOG` is not set (e.g. `"info"`, `"lib_wanted=debug"`).
    pub level: String,
    /// Directory for daily-rotated JSON log files.
    pub log_dir: Option<PathBuf>,
    /// Prefix of the rotated log files.
    pub file_prefix: String,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: None,
            file_prefix: "wanted".to_string(),
        }
    }
}

/// Builds the filter: `RUST_LOG` wins over the configured level.
fn env_filter(level: &str) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))
}

/// Installs the global subscriber.
///
/// The returned guard flushes the non-blocking file writer when dropped, so
/// keep it alive for the lifetime of the program. It is `None` when file
/// logging is off.
pub fn setup_logging(options: &LoggingOptions) -> Result<Option<WorkerGuard>, LoggingError> {
    let filter = env_filter(&options.level)?;

    let console_layer = fmt::layer().with_target(true).with_ansi(true);

    let (file_layer, guard) = match &options.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender = rolling::daily(dir, &options.file_prefix);
            let (writer, guard) = non_blocking(file_appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer).json();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    info!(level = %options.level, file = options.log_dir.is_some(), "Logging initialized");
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_directive_is_rejected() {
        // RUST_LOG would take precedence over the configured level.
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert!(env_filter("lib_wanted=notalevel").is_err());
    }

    #[test]
    fn plain_level_is_accepted() {
        assert!(env_filter("debug").is_ok());
    }
}
