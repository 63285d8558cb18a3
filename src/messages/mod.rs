//! Message types for inter-layer communication.
//!
//! This module defines what flows from the UI to the App layer and back,
//! plus the display tree the renderer produces.

pub mod display;
pub mod render;
pub mod ui_events;

pub use display::{DisplayNode, DisplayTree};
pub use render::RenderState;
pub use ui_events::{key_to_action, KeyAction, UiEvent};
