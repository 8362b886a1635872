//! Collection point for diagnostics produced by concurrent analyses.

use crate::diagnostic::Diagnostic;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Accumulates diagnostics from many threads.
///
/// Rules run over method bodies in parallel and all report here, so every
/// method takes `&self`. Alongside the shared sink of a whole run, the
/// engine also uses short-lived private sinks to hold one rule's output
/// while severity overrides are applied; [`take_all`](Self::take_all)
/// exists for that hand-off. The error tally is kept in an atomic so
/// exit-status checks never contend with emitting threads.
pub struct DiagnosticSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
    error_count: AtomicUsize,
}

impl DiagnosticSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self {
            diagnostics: Mutex::new(Vec::new()),
            error_count: AtomicUsize::new(0),
        }
    }

    /// Records a diagnostic, counting it toward the error tally if its
    /// severity fails the run.
    pub fn emit(&self, diag: Diagnostic) {
        if diag.severity.is_error() {
            self.error_count.fetch_add(1, Ordering::Relaxed);
        }
        let mut diagnostics = self.diagnostics.lock().unwrap();
        diagnostics.push(diag);
    }

    /// Whether any error-severity diagnostic has been recorded.
    pub fn has_errors(&self) -> bool {
        self.error_count.load(Ordering::Relaxed) > 0
    }

    /// The number of error-severity diagnostics recorded.
    pub fn error_count(&self) -> usize {
        self.error_count.load(Ordering::Relaxed)
    }

    /// Drains every recorded diagnostic out of the sink.
    ///
    /// The error tally is cumulative and survives draining.
    pub fn take_all(&self) -> Vec<Diagnostic> {
        let mut diagnostics = self.diagnostics.lock().unwrap();
        std::mem::take(&mut *diagnostics)
    }

    /// Clones the recorded diagnostics without draining them.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let diagnostics = self.diagnostics.lock().unwrap();
        diagnostics.clone()
    }
}

impl Default for DiagnosticSink {
    fn default() -> Self {
        Self::new()
    }
}
