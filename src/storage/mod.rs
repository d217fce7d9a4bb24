//! Durable key-value storage for UI preferences.
//!
//! The dashboard persists a small amount of state under fixed keys, the same
//! way a browser page uses local storage. Two implementations:
//! - [`JsonFileStore`]: a single JSON object on disk (production)
//! - [`MemoryStore`]: process-local map, used by tests

use crate::model::StorageError;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

pub mod file;

pub use file::{default_state_path, JsonFileStore};

/// Minimal get/set store keyed by string.
///
/// `get` never fails: unreadable or missing values are simply absent.
pub trait KeyValueStore: fmt::Debug {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<Value>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value could not be made durable.
    fn set(&mut self, key: &str, value: Value) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Option<Value> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// In-memory store. Nothing survives the process.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, Value>,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a single entry.
    pub fn with_entry(key: impl Into<String>, value: Value) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value);
        Self { entries }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}
