use serde_json::Value;

/// Lifecycle of a single fetch, one variant at a time.
///
/// Legal progressions are `Idle -> Loading -> Success | Error`; the terminal
/// variants never change again within one activation.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum FetchState {
    /// Nothing issued yet
    #[default]
    Idle,
    /// Request in flight
    Loading,
    /// Decoded response body, unvalidated
    Success(Value),
    /// Diagnostic message; the payload is discarded
    Error(String),
}

impl FetchState {
    pub fn as_str(&self) -> &str {
        match self {
            FetchState::Idle => "idle",
            FetchState::Loading => "loading",
            FetchState::Success(_) => "success",
            FetchState::Error(_) => "error",
        }
    }

    /// Whether no further transition can follow
    pub fn is_terminal(&self) -> bool {
        matches!(self, FetchState::Success(_) | FetchState::Error(_))
    }

    /// Whether `next` may directly follow `self` in one activation
    pub fn can_transition_to(&self, next: &FetchState) -> bool {
        matches!(
            (self, next),
            (FetchState::Idle, FetchState::Loading)
                | (FetchState::Loading, FetchState::Success(_))
                | (FetchState::Loading, FetchState::Error(_))
        )
    }
}
