//! Fetch controller - issues the one request of an activation and records
//! its outcome in the store

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::app::store::StateStore;
use crate::constants::FETCH_ERROR_PREFIX;
use crate::diagnostics::DiagnosticSink;
use crate::models::FetchState;
use crate::network::{FetchError, Fetcher};

pub struct FetchController {
    store: StateStore,
    fetcher: Arc<dyn Fetcher>,
    sink: Arc<dyn DiagnosticSink>,
    started: AtomicBool,
}

impl FetchController {
    pub fn new(store: StateStore, fetcher: Arc<dyn Fetcher>, sink: Arc<dyn DiagnosticSink>) -> Self {
        FetchController {
            store,
            fetcher,
            sink,
            started: AtomicBool::new(false),
        }
    }

    /// Move the store to `Loading` and spawn the request.
    ///
    /// Must run inside a tokio runtime. Only the first call does anything;
    /// later calls return `None` without touching the network.
    pub fn start(&self, endpoint: &str) -> Option<JoinHandle<()>> {
        if self.started.swap(true, Ordering::SeqCst) {
            tracing::warn!(endpoint, "Fetch already started for this activation");
            return None;
        }

        self.store.set(FetchState::Loading);

        let store = self.store.clone();
        let fetcher = Arc::clone(&self.fetcher);
        let sink = Arc::clone(&self.sink);
        let endpoint = endpoint.to_string();

        Some(tokio::spawn(async move {
            let outcome = fetcher.fetch(&endpoint).await;
            settle(&store, sink.as_ref(), outcome);
        }))
    }

    pub fn has_started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }
}

/// Write the terminal state for `outcome`
fn settle(store: &StateStore, sink: &dyn DiagnosticSink, outcome: Result<serde_json::Value, FetchError>) {
    match outcome {
        Ok(payload) => {
            store.set(FetchState::Success(payload));
        }
        Err(err) => {
            tracing::debug!(kind = err.kind(), "Fetch failed");
            let message = err.to_string();
            sink.error(&format!("{}: {}", FETCH_ERROR_PREFIX, message));
            store.set(FetchState::Error(message));
        }
    }
}
