//! Fetch panel - the component lifecycle
//!
//! `activate` wires a fresh store to the renderer and starts the fetch;
//! `deactivate` detaches the store. The request itself is never cancelled.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::app::controller::FetchController;
use crate::app::store::{StateStore, Subscription};
use crate::config::Config;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::messages::DisplayTree;
use crate::network::{Fetcher, HttpFetcher};
use crate::renderer::render;

/// Component definition; each `activate` call yields an independent instance
#[derive(Clone)]
pub struct FetchPanel {
    config: Config,
    fetcher: Arc<dyn Fetcher>,
    sink: Arc<dyn DiagnosticSink>,
}

impl FetchPanel {
    /// Panel using the reqwest client and `tracing` diagnostics
    pub fn new(config: Config) -> Self {
        Self::with_parts(config, Arc::new(HttpFetcher::new()), Arc::new(TracingSink))
    }

    pub fn with_parts(config: Config, fetcher: Arc<dyn Fetcher>, sink: Arc<dyn DiagnosticSink>) -> Self {
        FetchPanel {
            config,
            fetcher,
            sink,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Mount one instance. `on_render` receives the initial tree right away
    /// and a new one after every state change until deactivation.
    ///
    /// Must run inside a tokio runtime.
    pub fn activate<F>(&self, on_render: F) -> Activation
    where
        F: Fn(DisplayTree) + Send + Sync + 'static,
    {
        tracing::info!(endpoint = %self.config.endpoint, "Activating fetch panel");

        let store = StateStore::new();
        let on_render = Arc::new(on_render);

        let subscription = {
            let on_render = Arc::clone(&on_render);
            store.subscribe(move |state| on_render(render(state)))
        };
        on_render(render(&store.get()));

        let controller = FetchController::new(store.clone(), Arc::clone(&self.fetcher), Arc::clone(&self.sink));
        let task = controller.start(&self.config.endpoint);

        Activation {
            store,
            subscription,
            _controller: controller,
            task,
        }
    }
}

/// One mounted instance of the panel
pub struct Activation {
    store: StateStore,
    subscription: Subscription,
    _controller: FetchController,
    task: Option<JoinHandle<()>>,
}

impl Activation {
    pub fn store(&self) -> &StateStore {
        &self.store
    }

    /// Whether the fetch has reached `Success` or `Error`
    pub fn is_settled(&self) -> bool {
        self.store.get().is_terminal()
    }

    /// Re-render the current state without touching the network
    pub fn render(&self) -> DisplayTree {
        render(&self.store.get())
    }

    /// Unmount. The store stops accepting writes; the in-flight request, if
    /// any, keeps running and its handle is returned.
    pub fn deactivate(self) -> Option<JoinHandle<()>> {
        tracing::info!(
            state = self.store.get().as_str(),
            in_flight = !self.is_settled(),
            "Deactivating fetch panel"
        );
        self.store.detach();
        self.subscription.unsubscribe();
        self.task
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HEADING;
    use crate::diagnostics::MemorySink;
    use crate::models::FetchState;
    use crate::network::FetchError;
    use futures_util::future::{BoxFuture, FutureExt};
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use tokio::sync::Notify;

    /// Holds every request until `release` is called, then answers with `outcome`
    struct GatedFetcher {
        calls: AtomicUsize,
        gate: Notify,
        outcome: fn() -> Result<Value, FetchError>,
    }

    impl GatedFetcher {
        fn new(outcome: fn() -> Result<Value, FetchError>) -> Arc<Self> {
            Arc::new(GatedFetcher {
                calls: AtomicUsize::new(0),
                gate: Notify::new(),
                outcome,
            })
        }

        fn release(&self) {
            self.gate.notify_one();
        }
    }

    impl Fetcher for GatedFetcher {
        fn fetch<'a>(&'a self, _url: &'a str) -> BoxFuture<'a, Result<Value, FetchError>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            async move {
                self.gate.notified().await;
                (self.outcome)()
            }
            .boxed()
        }
    }

    fn panel(fetcher: Arc<GatedFetcher>, sink: Arc<MemorySink>) -> FetchPanel {
        FetchPanel::with_parts(Config::default(), fetcher, sink)
    }

    fn collector() -> (Arc<Mutex<Vec<DisplayTree>>>, impl Fn(DisplayTree) + Send + Sync + 'static) {
        let trees = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&trees);
        (trees, move |tree| sink.lock().unwrap().push(tree))
    }

    #[tokio::test]
    async fn test_success_renders_payload() {
        let fetcher = GatedFetcher::new(|| Ok(json!({"a": 1})));
        let (trees, on_render) = collector();
        let activation = panel(fetcher.clone(), Arc::new(MemorySink::new())).activate(on_render);

        assert_eq!(activation.store().get(), FetchState::Loading);
        assert!(!activation.is_settled());
        fetcher.release();
        let task = activation.deactivate_after_settle().await;
        assert!(task.is_none());

        let trees = trees.lock().unwrap();
        // Idle, Loading, Success
        assert_eq!(trees.len(), 3);
        assert_eq!(trees[0].to_text(), HEADING);
        assert_eq!(trees[1].to_text(), HEADING);
        assert_eq!(trees[2].to_text(), "Data from API:\n{\n  \"a\": 1\n}");
    }

    #[tokio::test]
    async fn test_transport_failure_renders_heading_only() {
        let fetcher = GatedFetcher::new(|| Err(FetchError::Transport("Connection failed: refused".into())));
        let sink = Arc::new(MemorySink::new());
        let (trees, on_render) = collector();
        let mut activation = panel(fetcher.clone(), sink.clone()).activate(on_render);

        fetcher.release();
        activation.settled().await;

        assert_eq!(
            activation.store().get(),
            FetchState::Error("Connection failed: refused".into())
        );
        assert_eq!(trees.lock().unwrap().last().unwrap().to_text(), HEADING);
        assert_eq!(sink.entries(), vec!["Error fetching data: Connection failed: refused"]);
    }

    #[tokio::test]
    async fn test_rerendering_never_refetches() {
        let fetcher = GatedFetcher::new(|| Ok(json!(true)));
        let (_trees, on_render) = collector();
        let mut activation = panel(fetcher.clone(), Arc::new(MemorySink::new())).activate(on_render);

        for _ in 0..10 {
            assert_eq!(activation.render().to_text(), HEADING);
        }
        fetcher.release();
        activation.settled().await;
        activation.render();

        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_deactivate_before_response_is_harmless() {
        let fetcher = GatedFetcher::new(|| Ok(json!({"stale": true})));
        let panel = panel(fetcher.clone(), Arc::new(MemorySink::new()));
        let (old_trees, on_render) = collector();
        let first = panel.activate(on_render);
        let first_store = first.store().clone();

        let pending = first.deactivate().unwrap();
        fetcher.release();
        pending.await.unwrap();

        assert_eq!(first_store.get(), FetchState::Loading);
        assert_eq!(old_trees.lock().unwrap().len(), 2);

        let (new_trees, on_render) = collector();
        let mut second = panel.activate(on_render);
        assert_eq!(second.store().get(), FetchState::Loading);
        fetcher.release();
        second.settled().await;

        assert_eq!(second.store().get(), FetchState::Success(json!({"stale": true})));
        assert_eq!(new_trees.lock().unwrap().len(), 3);
        assert_eq!(old_trees.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_activations_are_independent() {
        let ok = GatedFetcher::new(|| Ok(json!({"n": 1})));
        let failing = GatedFetcher::new(|| Err(FetchError::Status { status: 503 }));
        let sink = Arc::new(MemorySink::new());

        let (ok_trees, on_ok) = collector();
        let (failing_trees, on_failing) = collector();
        let mut a = panel(ok.clone(), sink.clone()).activate(on_ok);
        let mut b = panel(failing.clone(), sink.clone()).activate(on_failing);

        failing.release();
        b.settled().await;
        assert_eq!(a.store().get(), FetchState::Loading);
        assert!(matches!(b.store().get(), FetchState::Error(_)));

        ok.release();
        a.settled().await;
        assert_eq!(a.store().get(), FetchState::Success(json!({"n": 1})));
        assert!(matches!(b.store().get(), FetchState::Error(_)));

        assert_eq!(ok_trees.lock().unwrap().len(), 3);
        assert_eq!(failing_trees.lock().unwrap().len(), 3);
        assert_eq!(sink.len(), 1);
    }

    impl Activation {
        async fn settled(&mut self) {
            if let Some(task) = self.task.take() {
                task.await.unwrap();
            }
        }

        async fn deactivate_after_settle(mut self) -> Option<JoinHandle<()>> {
            self.settled().await;
            self.deactivate()
        }
    }
}
