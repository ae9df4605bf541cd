//! Diagnostics sink
//!
//! Catalog and playback failures are recovered into friendly UI states; the
//! raw failure detail goes here instead. The sink is injected wherever it is
//! needed so the core carries no ambient global state.

use std::sync::Mutex;

/// Fire-and-forget collector for raw error detail.
pub trait DiagnosticsSink: Send + Sync {
    /// Record one failure. `context` names the operation, `detail` is the
    /// raw error text that must not reach the user.
    fn record_error(&self, context: &str, detail: &str);
}

/// Forwards error detail to the tracing pipeline.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticsSink for LogSink {
    fn record_error(&self, context: &str, detail: &str) {
        tracing::error!(context, detail, "operation failed");
    }
}

/// Captures records in memory so tests can assert on them.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<(String, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<(String, String)> {
        self.records.lock().expect("sink poisoned").clone()
    }
}

impl DiagnosticsSink for MemorySink {
    fn record_error(&self, context: &str, detail: &str) {
        self.records
            .lock()
            .expect("sink poisoned")
            .push((context.to_string(), detail.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_captures_records() {
        let sink = MemorySink::new();
        sink.record_error("catalog fetch", "connection refused");
        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].0, "catalog fetch");
        assert_eq!(records[0].1, "connection refused");
    }
}
