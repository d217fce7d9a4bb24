//! Error types for commentdash.
//!
//! Hierarchical taxonomy built with `thiserror`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Startup and terminal failures that end the process
//!   - `ConfigError` - Config file read/parse failures
//!   - `LoggingError` - Log file setup failures
//!   - `TuiError` - Terminal/TUI failures
//! - [`FetchError`] - Remote or file record source failures
//! - [`StorageError`] - Durable key-value store failures
//!
//! # Recovery Strategy
//!
//! Fetch errors are non-fatal: the message is shown on screen and the
//! collection stays empty. Storage errors are non-fatal: writes are logged
//! and dropped, unreadable state falls back to defaults. Neither reaches
//! [`AppError`]; only config, logging and terminal errors abort the run.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::view::TuiError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error returned by the binary's `run`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Log file could not be set up.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal setup, drawing or restore failed.
    #[error("Terminal error: {0}")]
    Terminal(#[from] TuiError),
}

/// Failures of the record source collaborator.
///
/// `Display` output is the user-visible error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("HTTP error! status: {status}")]
    Status {
        /// Numeric HTTP status code.
        status: u16,
    },

    /// The request never produced a response (DNS, connect, timeout...).
    #[error("Network error: {0}")]
    Transport(String),

    /// The response body did not match the expected schema.
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// Local JSON file could not be read.
    #[error("Failed to read {path}: {reason}")]
    File {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// The fetch worker ended without delivering a result.
    #[error("Request was abandoned before completing")]
    Abandoned,
}

/// Failures of the durable key-value store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Store file could not be read or written.
    #[error("Storage I/O error at {path}: {source}")]
    Io {
        /// Store file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Store file is not a JSON object.
    #[error("Storage file {path} is corrupt: {reason}")]
    Corrupt {
        /// Store file path.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// Value could not be serialized.
    #[error("Failed to serialize value: {0}")]
    Serialize(String),
}
