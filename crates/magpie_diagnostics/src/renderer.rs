//! Diagnostic rendering for terminal output.

use crate::diagnostic::Diagnostic;
use crate::label::LabelStyle;
use crate::severity::Severity;
use magpie_source::SourceDb;

/// A rendering strategy for diagnostics.
pub trait DiagnosticRenderer {
    /// Formats one diagnostic, resolving its spans against `source_db`.
    fn render(&self, diag: &Diagnostic, source_db: &SourceDb) -> String;
}

/// rustc-style rendering for terminals.
///
/// Output follows the familiar shape:
/// ```text
/// warning[A101]: parameter 's' of 'CanRead' could be declared as 'Stream'
///   --> src/Reader.cs:10:22
///    |
/// 10 | bool CanRead(FileStream s) => s.CanRead;
///    |              ^^^^^^^^^^^^ declared as 'FileStream'
///    |
///    = help: consider declaring 's' as 'Stream'
/// ```
///
/// Spans come from an externally produced model, so any location that does
/// not resolve against the source database is rendered without the source
/// excerpt rather than failing.
pub struct TerminalRenderer {
    /// Whether to wrap severities in ANSI color codes.
    pub color: bool,
}

impl TerminalRenderer {
    /// A renderer that emits ANSI colors when `color` is true.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, severity: Severity, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        let code = match severity {
            Severity::Error => "\x1b[1;31m",
            Severity::Warning => "\x1b[1;33m",
            Severity::Note => "\x1b[1;36m",
            Severity::Help => "\x1b[1;32m",
        };
        format!("{code}{text}\x1b[0m")
    }
}

impl DiagnosticRenderer for TerminalRenderer {
    fn render(&self, diag: &Diagnostic, source_db: &SourceDb) -> String {
        let mut out = String::new();

        // severity[CODE]: message
        let heading = format!("{}[{}]", diag.severity, diag.code);
        out.push_str(&format!(
            "{}: {}\n",
            self.paint(diag.severity, &heading),
            diag.message
        ));

        // Location block, only when the span resolves.
        let span = diag.primary_span;
        if !span.is_dummy() {
            if let Some(resolved) = source_db.resolve_span(span) {
                out.push_str(&format!("  --> {resolved}\n"));

                if let Some(file) = source_db.file(span.file) {
                    let (line, col) = file.line_col(span.start);
                    if let Some(line_content) = source_line_at(&file.content, span.start) {
                        let line_num = format!("{line}");
                        let padding = " ".repeat(line_num.len());

                        out.push_str(&format!("{padding} |\n"));
                        out.push_str(&format!("{line_num} | {line_content}\n"));

                        let carets = "^".repeat(span.len().max(1) as usize);
                        let col_padding = " ".repeat((col as usize).saturating_sub(1));
                        let primary_msg = diag
                            .labels
                            .iter()
                            .find(|l| l.style == LabelStyle::Primary)
                            .map(|l| format!(" {}", l.message))
                            .unwrap_or_default();

                        out.push_str(&format!("{padding} | {col_padding}{carets}{primary_msg}\n"));
                    }
                }
            }
        }

        // Footnotes render whether or not the location did.
        for note in &diag.notes {
            out.push_str(&format!("   = note: {note}\n"));
        }
        for help in &diag.help {
            out.push_str(&format!("   = help: {help}\n"));
        }

        out
    }
}

/// Extracts the line of source containing the given byte offset, or `None`
/// if the offset falls outside the text or inside a UTF-8 sequence.
fn source_line_at(content: &str, byte_offset: u32) -> Option<&str> {
    let offset = byte_offset as usize;
    if offset > content.len() || !content.is_char_boundary(offset) {
        return None;
    }
    let start = content[..offset].rfind('\n').map_or(0, |pos| pos + 1);
    let end = content[offset..]
        .find('\n')
        .map_or(content.len(), |pos| offset + pos);
    Some(&content[start..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::{Category, DiagnosticCode};
    use crate::label::Label;
    use magpie_source::{FileId, Span};

    #[test]
    fn render_warning_with_span() {
        let mut source_db = SourceDb::new();
        let file_id = source_db.add_source(
            "Reader.cs",
            "bool CanRead(FileStream s) => s.CanRead;\n".to_string(),
        );

        let code = DiagnosticCode::new(Category::Api, 101);
        let span = Span::new(file_id, 13, 25);
        let diag = Diagnostic::warning(code, "parameter 's' could be declared as 'Stream'", span)
            .with_label(Label::primary(span, "declared as 'FileStream'"));

        let renderer = TerminalRenderer::new(false);
        let output = renderer.render(&diag, &source_db);

        assert!(output.contains("warning[A101]: parameter 's' could be declared as 'Stream'"));
        assert!(output.contains("--> Reader.cs:1:14"));
        assert!(output.contains("bool CanRead(FileStream s) => s.CanRead;"));
        assert!(output.contains("^^^^^^^^^^^^ declared as 'FileStream'"));
    }

    #[test]
    fn render_notes_and_help() {
        let source_db = SourceDb::new();
        let code = DiagnosticCode::new(Category::Api, 101);
        let diag = Diagnostic::warning(code, "parameter type is overly specific", Span::DUMMY)
            .with_note("every use of 's' is satisfied by 'Stream'")
            .with_help("consider declaring 's' as 'Stream'");

        let renderer = TerminalRenderer::new(false);
        let output = renderer.render(&diag, &source_db);

        assert!(output.contains("= note: every use of 's' is satisfied by 'Stream'"));
        assert!(output.contains("= help: consider declaring 's' as 'Stream'"));
    }

    #[test]
    fn render_dummy_span_no_location() {
        let source_db = SourceDb::new();
        let code = DiagnosticCode::new(Category::Error, 1);
        let diag = Diagnostic::error(code, "invalid model", Span::DUMMY);

        let renderer = TerminalRenderer::new(false);
        let output = renderer.render(&diag, &source_db);

        assert!(output.contains("error[E001]: invalid model"));
        assert!(!output.contains("-->"));
    }

    #[test]
    fn render_unresolvable_span_degrades() {
        let source_db = SourceDb::new();
        let code = DiagnosticCode::new(Category::Api, 101);
        let span = Span::new(FileId::from_raw(7), 0, 4);
        let diag = Diagnostic::warning(code, "parameter type is overly specific", span);

        let renderer = TerminalRenderer::new(false);
        let output = renderer.render(&diag, &source_db);

        assert!(output.contains("warning[A101]"));
        assert!(!output.contains("-->"));
    }

    #[test]
    fn color_wraps_heading() {
        let source_db = SourceDb::new();
        let code = DiagnosticCode::new(Category::Error, 1);
        let diag = Diagnostic::error(code, "invalid model", Span::DUMMY);

        let renderer = TerminalRenderer::new(true);
        let output = renderer.render(&diag, &source_db);

        assert!(output.contains("\x1b[1;31merror[E001]\x1b[0m"));
    }
}
