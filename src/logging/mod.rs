//! Tracing subscriber initialization.
//!
//! The terminal belongs to the dashboard, so logs go to a file. Follow them
//! with `tail -f` from another terminal.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to create log directory
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// Directory that could not be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Log path has no file name component
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// Tracing subscriber already initialized
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Split a log path into the directory to create and the file name.
fn split_log_path(log_path: &Path) -> Result<(PathBuf, String), LoggingError> {
    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    // A bare file name logs into the current directory
    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok((directory, file_name.to_string()))
}

/// Initialize the global subscriber writing to `log_path`.
///
/// Respects `RUST_LOG`, defaulting to `info`. Creates the log directory if
/// needed. Writes go through a background worker; keep the returned guard
/// alive until exit so buffered lines are flushed.
///
/// # Errors
///
/// Returns `LoggingError` if the path is unusable, the directory cannot be
/// created, or a subscriber is already installed.
pub fn init(log_path: &Path) -> Result<WorkerGuard, LoggingError> {
    let (directory, file_name) = split_log_path(log_path)?;

    std::fs::create_dir_all(&directory).map_err(|source| LoggingError::DirectoryCreation {
        path: directory.clone(),
        source,
    })?;

    let file_appender = tracing_appender::rolling::never(&directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)?;

    Ok(guard)
}
