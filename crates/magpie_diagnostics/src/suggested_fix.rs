//! Machine-applicable fix suggestions attached to diagnostics.

use magpie_source::Span;
use serde::{Deserialize, Serialize};

/// One text edit: replace the span's text with `new_text`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Replacement {
    /// What to replace.
    pub span: Span,
    /// What to put there instead.
    pub new_text: String,
}

/// An edit a downstream tool could make to resolve a finding.
///
/// Magpie never rewrites source itself; a fix rides on the diagnostic so an
/// editor or batch rewriter can offer it. The edits in `replacements` are
/// meant to be applied together. Fixes are only attached when the model
/// carried real spans for the text involved.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SuggestedFix {
    /// Describes the change in the imperative ("change the type of 'fs'").
    pub message: String,
    /// The edits implementing the change.
    pub replacements: Vec<Replacement>,
}

impl SuggestedFix {
    /// A fix consisting of one edit.
    pub fn replace(message: impl Into<String>, span: Span, new_text: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            replacements: vec![Replacement {
                span,
                new_text: new_text.into(),
            }],
        }
    }
}
