//! App actor - mounts the fetch panel and relays its renders to the UI

use tokio::sync::mpsc;

use crate::app::panel::{Activation, FetchPanel};
use crate::messages::{RenderState, UiEvent};

/// Owns the panel and its current activation
pub struct AppActor {
    panel: FetchPanel,
    current: Option<Activation>,
    generation: u64,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(panel: FetchPanel, render_tx: mpsc::UnboundedSender<RenderState>) -> Self {
        AppActor {
            panel,
            current: None,
            generation: 0,
            render_tx,
        }
    }

    /// Run the actor message loop. The panel is mounted on entry.
    pub async fn run(mut self, mut ui_rx: mpsc::UnboundedReceiver<UiEvent>) {
        self.mount();

        while let Some(event) = ui_rx.recv().await {
            if self.handle_ui_event(event) {
                break;
            }
        }

        self.unmount();
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            UiEvent::Reload => {
                self.unmount();
                self.mount();
            }
            UiEvent::ToggleMount => {
                if self.current.is_some() {
                    self.unmount();
                } else {
                    self.mount();
                }
            }
            UiEvent::Quit => return true,
        }

        false
    }

    fn mount(&mut self) {
        self.generation += 1;
        let generation = self.generation;
        let endpoint = self.panel.endpoint().to_string();
        let render_tx = self.render_tx.clone();

        self.current = Some(self.panel.activate(move |tree| {
            let _ = render_tx.send(RenderState::mounted(generation, &endpoint, tree));
        }));
    }

    fn unmount(&mut self) {
        if let Some(activation) = self.current.take() {
            // Dropping the handle leaves the request to finish on its own
            drop(activation.deactivate());
            let _ = self
                .render_tx
                .send(RenderState::unmounted(self.generation, self.panel.endpoint()));
        }
    }
}
