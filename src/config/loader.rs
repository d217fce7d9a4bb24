//! Configuration file loading with precedence handling.

use crate::model::PageSize;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Default comments endpoint.
pub const DEFAULT_COMMENTS_URL: &str = "https://jsonplaceholder.typicode.com/comments";

/// Default users endpoint (profile page).
pub const DEFAULT_USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Env var naming an explicit config file.
pub const CONFIG_ENV: &str = "COMMENTDASH_CONFIG";
/// Env var overriding the comments endpoint.
pub const COMMENTS_URL_ENV: &str = "COMMENTDASH_COMMENTS_URL";
/// Env var overriding the users endpoint.
pub const USERS_URL_ENV: &str = "COMMENTDASH_USERS_URL";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML or unknown/ill-typed fields.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional; anything unspecified falls back to defaults.
/// Corresponds to `~/.config/commentdash/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Endpoint returning the comment array.
    #[serde(default)]
    pub comments_url: Option<String>,

    /// Endpoint returning the user array.
    #[serde(default)]
    pub users_url: Option<String>,

    /// HTTP timeout for both endpoints.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Page size used when no filter state has been persisted yet.
    #[serde(default)]
    pub default_page_size: Option<PageSize>,

    /// Where filter state is persisted.
    #[serde(default)]
    pub state_file_path: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Comments endpoint.
    pub comments_url: String,
    /// Users endpoint for the profile page.
    pub users_url: String,
    /// Timeout applied to every request.
    pub request_timeout: Duration,
    /// Page size used when no filter state is stored.
    pub default_page_size: PageSize,
    /// JSON file holding the persisted filter state.
    pub state_file_path: PathBuf,
    /// Log file.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            comments_url: DEFAULT_COMMENTS_URL.to_string(),
            users_url: DEFAULT_USERS_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            default_page_size: PageSize::default(),
            state_file_path: crate::storage::default_state_path(),
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/commentdash/commentdash.log` on Linux, or the
/// platform equivalent. Falls back to the current directory when no state
/// directory is known.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("commentdash").join("commentdash.log")
    } else {
        PathBuf::from("commentdash.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/commentdash/config.toml` on Linux. `None` if no config
/// directory can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("commentdash").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `COMMENTDASH_CONFIG` environment variable
/// 3. Default path `~/.config/commentdash/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        comments_url: config.comments_url.unwrap_or(defaults.comments_url),
        users_url: config.users_url.unwrap_or(defaults.users_url),
        request_timeout: config
            .request_timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout),
        default_page_size: config
            .default_page_size
            .unwrap_or(defaults.default_page_size),
        state_file_path: config.state_file_path.unwrap_or(defaults.state_file_path),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks `COMMENTDASH_COMMENTS_URL` and `COMMENTDASH_USERS_URL`.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(url) = std::env::var(COMMENTS_URL_ENV) {
        config.comments_url = url;
    }

    if let Ok(url) = std::env::var(USERS_URL_ENV) {
        config.users_url = url;
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// Only flags the user actually passed override anything.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    comments_url_override: Option<String>,
    users_url_override: Option<String>,
    page_size_override: Option<PageSize>,
) -> ResolvedConfig {
    if let Some(url) = comments_url_override {
        config.comments_url = url;
    }

    if let Some(url) = users_url_override {
        config.users_url = url;
    }

    if let Some(page_size) = page_size_override {
        config.default_page_size = page_size;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
