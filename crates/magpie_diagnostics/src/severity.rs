//! Severity levels for analysis findings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How serious a finding is.
///
/// The variants are declared least severe first so the derived
/// `PartialOrd`/`Ord` ranks them; reports sort on this and the exit status
/// of a run depends only on whether anything reached [`Severity::Error`].
/// Rules declare a default severity and configuration may rewrite it, so
/// the level a diagnostic carries is final only once it reaches the sink.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum Severity {
    /// An actionable suggestion attached to another finding.
    Help,
    /// Context attached to another finding, or a standalone advisory such
    /// as a stale source file.
    Note,
    /// A finding worth reviewing that does not fail the run.
    Warning,
    /// A finding that fails the run.
    Error,
}

impl Severity {
    /// Whether this level fails the run.
    pub fn is_error(self) -> bool {
        matches!(self, Severity::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Help => "help",
            Severity::Note => "note",
            Severity::Warning => "warning",
            Severity::Error => "error",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranking_follows_declaration_order() {
        let mut levels = [
            Severity::Error,
            Severity::Help,
            Severity::Warning,
            Severity::Note,
        ];
        levels.sort();
        assert_eq!(
            levels,
            [
                Severity::Help,
                Severity::Note,
                Severity::Warning,
                Severity::Error
            ]
        );
    }

    #[test]
    fn only_error_fails_the_run() {
        assert!(Severity::Error.is_error());
        for level in [Severity::Help, Severity::Note, Severity::Warning] {
            assert!(!level.is_error());
        }
    }

    #[test]
    fn renders_lowercase() {
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(Severity::Note.to_string(), "note");
        assert_eq!(Severity::Help.to_string(), "help");
    }

    #[test]
    fn serde_uses_variant_names() {
        // JSON reports carry the severity; the wire form is the variant name.
        let json = serde_json::to_string(&Severity::Warning).unwrap();
        assert_eq!(json, "\"Warning\"");
        let back: Severity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Severity::Warning);
    }
}
