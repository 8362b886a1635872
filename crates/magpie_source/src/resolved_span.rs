//! Line/column form of a span, ready for display.

use std::fmt;
use std::path::PathBuf;

/// A span translated into 1-indexed line and column coordinates.
///
/// This is the display form of a [`Span`](crate::Span); byte offsets never
/// reach the user. Produced by
/// [`SourceDb::resolve_span`](crate::SourceDb::resolve_span), which needs
/// the file's content to know where lines begin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSpan {
    /// Path of the file, as the model recorded it.
    pub file_path: PathBuf,
    /// Line the span starts on, 1-indexed.
    pub start_line: u32,
    /// Column the span starts at, 1-indexed.
    pub start_col: u32,
    /// Line the span ends on, 1-indexed.
    pub end_line: u32,
    /// Column of the last character, 1-indexed.
    pub end_col: u32,
}

impl fmt::Display for ResolvedSpan {
    /// Formats as `path:line:col`, pointing at the start of the span.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.file_path.display(),
            self.start_line,
            self.start_col
        )
    }
}
