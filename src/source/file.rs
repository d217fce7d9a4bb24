//! Offline record source: a JSON file holding the same array the comments
//! endpoint returns.

use crate::model::{Comment, FetchError};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::info;

/// Read and decode a JSON document from disk.
///
/// # Errors
///
/// Returns `FetchError::File` if the file cannot be read or decoded.
pub fn load_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, FetchError> {
    let text = fs::read_to_string(path).map_err(|e| FetchError::File {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    serde_json::from_str(&text).map_err(|e| FetchError::File {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Load the comment collection from a JSON file.
///
/// # Errors
///
/// Returns `FetchError::File` if the file is missing or is not an array of
/// comment records.
pub fn load_comments_file(path: &Path) -> Result<Vec<Comment>, FetchError> {
    let comments: Vec<Comment> = load_json_file(path)?;
    info!(path = %path.display(), count = comments.len(), "Loaded comments from file");
    Ok(comments)
}
