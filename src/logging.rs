//! Logging setup for the freshness-check binary

use std::path::PathBuf;

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::LOG_FILTER_ENV;

/// Directives used when `FRESHNESS_CHECK_LOG` is unset or invalid
const DEFAULT_FILTER: &str = "warn";

/// Where log records are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Human-readable lines on standard error
    Stderr,
    /// JSON lines appended to a file
    File(PathBuf),
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to prepare log file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid log file path: {0}")]
    InvalidPath(PathBuf),

    #[error("Failed to install subscriber: {0}")]
    Init(#[source] Box<dyn std::error::Error + Send + Sync>),
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global `tracing` subscriber
///
/// For [`LogTarget::File`] the returned guard flushes pending records when
/// dropped and must be held for as long as logging is needed.
pub fn init_logging(target: LogTarget) -> Result<Option<WorkerGuard>, LoggingError> {
    match target {
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(LoggingError::Init)?;
            Ok(None)
        }
        LogTarget::File(path) => {
            let (Some(dir), Some(file_name)) = (path.parent(), path.file_name()) else {
                return Err(LoggingError::InvalidPath(path));
            };
            std::fs::create_dir_all(dir)?;

            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);

            tracing_subscriber::fmt()
                .json()
                .with_env_filter(env_filter())
                .with_writer(writer)
                .with_ansi(false)
                .try_init()
                .map_err(LoggingError::Init)?;
            Ok(Some(guard))
        }
    }
}
