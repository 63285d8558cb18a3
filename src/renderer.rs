//! Renderer - pure mapping from `FetchState` to a `DisplayTree`

use crate::constants::HEADING;
use crate::messages::{DisplayNode, DisplayTree};
use crate::models::FetchState;

/// Render one state. Errors show the heading only; their text goes to the
/// diagnostic sink, never to the panel.
pub fn render(state: &FetchState) -> DisplayTree {
    let mut children = vec![DisplayNode::Heading(HEADING.to_string())];

    if let FetchState::Success(payload) = state {
        let formatted =
            serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string());
        children.push(DisplayNode::Preformatted(formatted));
    }

    DisplayTree::new(children)
}
