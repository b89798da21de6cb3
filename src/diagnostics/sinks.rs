//! Diagnostic sinks

use super::types::Diagnostic;
use std::sync::{Arc, Mutex};

/// Receiver of diagnostic reports
pub trait DiagnosticSink: Send + Sync {
    /// Report a diagnostic
    fn report(&self, diagnostic: Diagnostic);
}

/// Routes diagnostics to `tracing` at warn level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        tracing::warn!(
            kind = diagnostic.kind.as_str(),
            context = %diagnostic.context,
            "Pagination Error - {}",
            diagnostic.message
        );
    }
}

/// Keeps every diagnostic in memory
///
/// Cloning shares the underlying buffer, so one handle can be given to the
/// controller and another kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    entries: Arc<Mutex<Vec<Diagnostic>>>,
}

impl CollectingSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all diagnostics reported so far
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Number of diagnostics reported so far
    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    /// Check if nothing was reported
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all collected diagnostics
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: Diagnostic) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(diagnostic);
        }
    }
}
