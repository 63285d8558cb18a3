//! Render state - snapshot sent from the App layer to the UI for drawing

use crate::messages::DisplayTree;

/// Everything the terminal needs to draw one frame
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    /// Sequence number of the activation this tree belongs to
    pub generation: u64,
    /// Whether a panel is currently mounted
    pub mounted: bool,
    pub endpoint: String,
    /// Latest tree from the renderer; `None` while unmounted
    pub tree: Option<DisplayTree>,
}

impl RenderState {
    pub fn mounted(generation: u64, endpoint: &str, tree: DisplayTree) -> Self {
        RenderState {
            generation,
            mounted: true,
            endpoint: endpoint.to_string(),
            tree: Some(tree),
        }
    }

    pub fn unmounted(generation: u64, endpoint: &str) -> Self {
        RenderState {
            generation,
            mounted: false,
            endpoint: endpoint.to_string(),
            tree: None,
        }
    }

    /// Whether this snapshot should replace `current` on screen.
    ///
    /// Older generations are stale, and so is a mounted snapshot of a
    /// generation that has already been unmounted.
    pub fn supersedes(&self, current: &RenderState) -> bool {
        match self.generation.cmp(&current.generation) {
            std::cmp::Ordering::Greater => true,
            std::cmp::Ordering::Less => false,
            std::cmp::Ordering::Equal => current.mounted || !self.mounted,
        }
    }
}
