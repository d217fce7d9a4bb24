//! JSON-file backed key-value store.

use super::KeyValueStore;
use crate::model::StorageError;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Resolve default state file path.
///
/// Returns `~/.local/state/commentdash/storage.json` on Unix-like systems,
/// or the platform equivalent. Falls back to the current directory.
pub fn default_state_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("commentdash").join("storage.json")
    } else {
        PathBuf::from("commentdash-storage.json")
    }
}

/// Key-value store persisted as one JSON object.
///
/// The whole object is rewritten on every `set`. Writes go to a sibling
/// temporary file first and are renamed into place.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: Map<String, Value>,
}

impl JsonFileStore {
    /// Open the store at `path`.
    ///
    /// A missing file yields an empty store.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the file exists but cannot be read, or
    /// `StorageError::Corrupt` if it is not a JSON object.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();

        if !path.exists() {
            debug!(path = %path.display(), "Storage file missing, starting empty");
            return Ok(Self {
                path,
                entries: Map::new(),
            });
        }

        let contents = std::fs::read_to_string(&path).map_err(|source| StorageError::Io {
            path: path.clone(),
            source,
        })?;

        let entries = match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Object(map)) => map,
            Ok(other) => {
                return Err(StorageError::Corrupt {
                    path,
                    reason: format!("expected JSON object, found {}", json_kind(&other)),
                })
            }
            Err(e) => {
                return Err(StorageError::Corrupt {
                    path,
                    reason: e.to_string(),
                })
            }
        };

        Ok(Self { path, entries })
    }

    /// Open the store, starting empty if the existing file is unusable.
    ///
    /// The unusable file is left untouched until the first `set`.
    pub fn open_or_empty(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::open(path.clone()) {
            Ok(store) => store,
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable storage file");
                Self {
                    path,
                    entries: Map::new(),
                }
            }
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        let io_err = |source| StorageError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let body = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| StorageError::Serialize(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, body).map_err(io_err)?;
        std::fs::rename(&tmp, &self.path).map_err(io_err)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value);
        self.flush()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
