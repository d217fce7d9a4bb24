//! HTTP record source.
//!
//! Fetches run on a worker thread so the UI loop never blocks. The result
//! comes back through a [`FetchHandle`]; dropping the handle abandons the
//! request and the worker discards whatever it later receives.

use crate::model::FetchError;
use serde::de::DeserializeOwned;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;
use tracing::{debug, error, info};

/// GET `url` and decode the JSON body as `T`.
///
/// # Errors
///
/// - `FetchError::Transport` if no response arrives (including timeout)
/// - `FetchError::Status` for non-2xx responses
/// - `FetchError::Decode` if the body does not match `T`
pub fn fetch_json<T: DeserializeOwned>(url: &str, timeout: Duration) -> Result<T, FetchError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| FetchError::Transport(format!("Failed to create HTTP client: {}", e)))?;

    let response = client
        .get(url)
        .header("Accept", "application/json")
        .send()
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
        });
    }

    response
        .json::<T>()
        .map_err(|e| FetchError::Decode(e.to_string()))
}

/// Receiving end of a one-shot fetch.
///
/// Yields the result at most once. Dropping the handle before the result
/// arrives discards it.
#[derive(Debug)]
pub struct FetchHandle<T> {
    rx: Receiver<Result<T, FetchError>>,
    delivered: bool,
}

impl<T> FetchHandle<T> {
    /// A handle whose result is already available.
    pub fn ready(result: Result<T, FetchError>) -> Self {
        let (tx, rx) = mpsc::channel();
        // Receiver is alive, send cannot fail.
        let _ = tx.send(result);
        Self {
            rx,
            delivered: false,
        }
    }

    /// Non-blocking check for the result.
    ///
    /// Returns `Some` exactly once: the fetch outcome, or
    /// `FetchError::Abandoned` if the worker died without sending.
    pub fn poll(&mut self) -> Option<Result<T, FetchError>> {
        if self.delivered {
            return None;
        }

        match self.rx.try_recv() {
            Ok(result) => {
                self.delivered = true;
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.delivered = true;
                Some(Err(FetchError::Abandoned))
            }
        }
    }

    /// Whether the result has been handed out.
    pub fn is_finished(&self) -> bool {
        self.delivered
    }
}

/// Start fetching `url` on a worker thread.
pub fn spawn_fetch<T>(url: impl Into<String>, timeout: Duration) -> FetchHandle<T>
where
    T: DeserializeOwned + Send + 'static,
{
    let url = url.into();
    let (tx, rx) = mpsc::channel();

    let spawned = thread::Builder::new()
        .name("fetch".to_string())
        .spawn(move || {
            debug!(%url, "Fetch started");
            let result = fetch_json::<T>(&url, timeout);
            match &result {
                Ok(_) => info!(%url, "Fetch completed"),
                Err(e) => error!(%url, error = %e, "Fetch failed"),
            }
            if tx.send(result).is_err() {
                debug!(%url, "Requester gone, discarding fetch result");
            }
        });

    if let Err(e) = spawned {
        error!(error = %e, "Failed to spawn fetch worker");
        return FetchHandle::ready(Err(FetchError::Transport(e.to_string())));
    }

    FetchHandle {
        rx,
        delivered: false,
    }
}
