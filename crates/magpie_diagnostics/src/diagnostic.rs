//! The diagnostic itself: everything a rule reports about one finding.

use crate::code::DiagnosticCode;
use crate::label::Label;
use crate::severity::Severity;
use crate::suggested_fix::SuggestedFix;
use magpie_source::Span;
use serde::{Deserialize, Serialize};

/// A structured finding reported by a rule.
///
/// Each diagnostic carries a severity, the code of the rule that produced
/// it, a primary message and span, and optionally secondary labels, notes,
/// help text, and a machine-applicable fix.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Diagnostic {
    /// How serious the finding is. Rules set a default; configuration may
    /// rewrite it before the diagnostic reaches the shared sink.
    pub severity: Severity,
    /// The code of the rule that produced this diagnostic.
    pub code: DiagnosticCode,
    /// The headline message.
    pub message: String,
    /// Where the finding is. May be the dummy span for findings with no
    /// location, such as model validation failures.
    pub primary_span: Span,
    /// Underlined spans with their own captions.
    pub labels: Vec<Label>,
    /// Footnotes rendered as "note: ...".
    pub notes: Vec<String>,
    /// Suggestions rendered as "help: ...".
    pub help: Vec<String>,
    /// A machine-applicable fix, if the model carried spans for one.
    pub fix: Option<SuggestedFix>,
}

impl Diagnostic {
    /// An error-severity diagnostic.
    pub fn error(code: DiagnosticCode, message: impl Into<String>, span: Span) -> Self {
        Self::new(Severity::Error, code, message, span)
    }

    /// A warning-severity diagnostic.
    pub fn warning(code: DiagnosticCode, message: impl Into<String>, span: Span) -> Self {
        Self::new(Severity::Warning, code, message, span)
    }

    /// Creates a diagnostic at an arbitrary severity. Rules use this so a
    /// configuration layer can pick the severity per rule.
    pub fn new(
        severity: Severity,
        code: DiagnosticCode,
        message: impl Into<String>,
        span: Span,
    ) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            primary_span: span,
            labels: Vec::new(),
            notes: Vec::new(),
            help: Vec::new(),
            fix: None,
        }
    }

    /// Attaches a span annotation.
    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }

    /// Attaches a "note:" footnote.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Attaches a "help:" suggestion.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help.push(help.into());
        self
    }

    /// Attaches a machine-applicable fix.
    pub fn with_fix(mut self, fix: SuggestedFix) -> Self {
        self.fix = Some(fix);
        self
    }
}
