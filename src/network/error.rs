//! Failure taxonomy for a single fetch

use thiserror::Error;

/// Why a fetch produced no payload.
///
/// All variants end up as `FetchState::Error`; the text only matters for
/// diagnostics.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection-level failure: refused, DNS, broken body stream
    #[error("{0}")]
    Transport(String),

    /// The server answered with a non-2xx status
    #[error("Request failed with status code {status}")]
    Status { status: u16 },

    /// The body was not valid JSON
    #[error("Invalid JSON in response body: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    /// Build a transport error from a reqwest failure
    pub fn transport(err: &reqwest::Error) -> Self {
        let message = if err.is_connect() {
            format!("Connection failed: {}", err)
        } else if err.is_body() || err.is_decode() {
            format!("Error reading body: {}", err)
        } else {
            format!("Request failed: {}", err)
        };
        FetchError::Transport(message)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Transport(_) => "transport",
            FetchError::Status { .. } => "status",
            FetchError::Parse(_) => "parse",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let err = FetchError::Status { status: 404 };
        assert_eq!(err.to_string(), "Request failed with status code 404");
        assert_eq!(err.kind(), "status");
    }

    #[test]
    fn test_parse_error_from_serde() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = FetchError::from(source);
        assert_eq!(err.kind(), "parse");
        assert!(err.to_string().starts_with("Invalid JSON in response body"));
    }
}
