//! Diagnostic sinks - where fetch failures are reported
//!
//! Failures never reach the rendered output; they are only written here.

use std::sync::{Mutex, PoisonError};

/// Receives one record per failed fetch
pub trait DiagnosticSink: Send + Sync {
    fn error(&self, message: &str);
}

/// Forwards diagnostics to the global `tracing` subscriber
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn error(&self, message: &str) {
        tracing::error!(target: "fetchpane::fetch", "{}", message);
    }
}

/// Keeps diagnostics in memory so they can be inspected later
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every recorded message, oldest first
    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for MemorySink {
    fn error(&self, message: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_records_in_order() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.error("first");
        sink.error("second");

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.entries(), vec!["first", "second"]);
    }
}
