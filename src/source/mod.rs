//! Record sources.
//!
//! Comments come from the remote endpoint by default, or from a local JSON
//! file when one is given. Either way the result arrives through a
//! [`FetchHandle`] so the UI treats both identically.

use crate::model::{Comment, User};
use std::path::PathBuf;
use std::time::Duration;

pub mod file;
pub mod remote;

pub use file::{load_comments_file, load_json_file};
pub use remote::{fetch_json, spawn_fetch, FetchHandle};

/// Where the comment collection comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSource {
    /// GET the collection from an HTTP endpoint.
    Remote {
        /// Comments endpoint.
        url: String,
        /// Request timeout.
        timeout: Duration,
    },
    /// Read the collection from a JSON file, once.
    File(PathBuf),
}

impl RecordSource {
    /// Start loading the comment collection.
    ///
    /// Remote sources fetch on a worker thread. File sources load
    /// synchronously and return an already-completed handle.
    pub fn start(&self) -> FetchHandle<Vec<Comment>> {
        match self {
            RecordSource::Remote { url, timeout } => spawn_fetch(url.clone(), *timeout),
            RecordSource::File(path) => FetchHandle::ready(load_comments_file(path)),
        }
    }
}

/// Where the user profile list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSource {
    /// Users endpoint.
    pub url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl ProfileSource {
    /// Start fetching the user list on a worker thread.
    pub fn start(&self) -> FetchHandle<Vec<User>> {
        spawn_fetch(self.url.clone(), self.timeout)
    }
}
