//! # fetchpane
//!
//! A terminal panel that fetches one JSON endpoint and shows the result.
//!
//! ## Lifecycle
//! Each activation owns a fresh `StateStore` that moves through
//! `Idle -> Loading -> Success | Error` exactly once. Failures are reported
//! to a `DiagnosticSink` and never shown in the panel.
//!
//! ## Architecture
//! - UI Layer (Ratatui) - synchronous drawing of `DisplayTree`s
//! - App Layer - store, controller, panel lifecycle, app actor
//! - Network Layer (reqwest on Tokio) - the single GET

pub mod app;
pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod messages;
pub mod models;
pub mod network;
pub mod renderer;
pub mod ui;

// Re-export commonly used types
pub use app::{Activation, AppActor, FetchController, FetchPanel, StateStore, Subscription};
pub use config::Config;
pub use diagnostics::{DiagnosticSink, MemorySink, TracingSink};
pub use messages::{DisplayNode, DisplayTree, RenderState, UiEvent};
pub use models::FetchState;
pub use network::{FetchError, Fetcher, HttpFetcher};
pub use renderer::render;
