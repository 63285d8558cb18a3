//! State store - the single current `FetchState` plus its subscribers
//!
//! The store does not police transitions; `FetchController` is the only
//! writer and keeps them in order. Once detached, the store ignores writes so
//! a response that outlives its surface cannot reach anyone.
//!
//! Notification is serialized with `detach` and unsubscription: once either
//! returns, the affected callbacks will not run again. Callbacks may call
//! `get`, but must not `set`, `detach` or drop a `Subscription` of the store
//! that is notifying them.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use crate::models::FetchState;

type Callback = Arc<dyn Fn(&FetchState) + Send + Sync>;

struct Inner {
    state: FetchState,
    subscribers: Vec<(u64, Callback)>,
    next_subscriber_id: u64,
    detached: bool,
}

struct Shared {
    /// Held for the whole of a notification round
    notify: Mutex<()>,
    inner: Mutex<Inner>,
}

impl Shared {
    fn inner(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn notifying(&self) -> MutexGuard<'_, ()> {
        self.notify.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Shared handle to one activation's fetch state
#[derive(Clone)]
pub struct StateStore {
    shared: Arc<Shared>,
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStore {
    pub fn new() -> Self {
        StateStore {
            shared: Arc::new(Shared {
                notify: Mutex::new(()),
                inner: Mutex::new(Inner {
                    state: FetchState::Idle,
                    subscribers: Vec::new(),
                    next_subscriber_id: 1,
                    detached: false,
                }),
            }),
        }
    }

    /// Current state (cloned)
    pub fn get(&self) -> FetchState {
        self.shared.inner().state.clone()
    }

    /// Replace the state and notify subscribers in registration order.
    ///
    /// Returns `false` when the store is detached; the write is dropped and
    /// nobody is notified.
    pub fn set(&self, state: FetchState) -> bool {
        let _round = self.shared.notifying();

        let callbacks: Vec<Callback> = {
            let mut inner = self.shared.inner();
            if inner.detached {
                tracing::debug!(state = state.as_str(), "Ignoring write to detached store");
                return false;
            }
            tracing::debug!(from = inner.state.as_str(), to = state.as_str(), "Fetch state changed");
            inner.state = state.clone();
            inner.subscribers.iter().map(|(_, cb)| Arc::clone(cb)).collect()
        };

        // State lock released so callbacks may read the store
        for callback in callbacks {
            callback(&state);
        }
        true
    }

    /// Register a callback run after every accepted `set`
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&FetchState) + Send + Sync + 'static,
    {
        let mut inner = self.shared.inner();
        let id = inner.next_subscriber_id;
        inner.next_subscriber_id += 1;
        inner.subscribers.push((id, Arc::new(callback)));

        Subscription {
            id,
            store: Arc::downgrade(&self.shared),
        }
    }

    /// Disconnect the store from its surface; later writes are ignored.
    ///
    /// Waits for a notification round already in progress to finish.
    pub fn detach(&self) {
        let _round = self.shared.notifying();
        let mut inner = self.shared.inner();
        inner.detached = true;
        inner.subscribers.clear();
    }

    pub fn is_detached(&self) -> bool {
        self.shared.inner().detached
    }

    pub fn subscriber_count(&self) -> usize {
        self.shared.inner().subscribers.len()
    }
}

/// Handle returned by `StateStore::subscribe`; dropping it unsubscribes
pub struct Subscription {
    id: u64,
    store: Weak<Shared>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(shared) = self.store.upgrade() {
            let _round = shared.notifying();
            shared.inner().subscribers.retain(|(id, _)| *id != self.id);
        }
    }
}
