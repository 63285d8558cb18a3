//! App layer - the fetch-state lifecycle and the actor hosting it
//!
//! The store holds one activation's `FetchState`, the controller fills it,
//! the panel ties both to the renderer, and the actor mounts panels on
//! behalf of the UI.

pub mod actor;
pub mod controller;
pub mod panel;
pub mod store;

pub use actor::AppActor;
pub use controller::FetchController;
pub use panel::{Activation, FetchPanel};
pub use store::{StateStore, Subscription};
