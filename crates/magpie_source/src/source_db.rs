//! Database of source file snapshots backing an analysis session.

use crate::file_id::FileId;
use crate::resolved_span::ResolvedSpan;
use crate::source_file::SourceFile;
use crate::span::Span;
use std::io;
use std::path::{Path, PathBuf};

/// Owns the source text for every file a model references and turns spans
/// into line/column coordinates for diagnostics.
///
/// Files are registered in model export order so that the dense `FileId`
/// indices a host assigned line up with positions in this database. Lookups
/// never panic; a span pointing at a file the database does not hold simply
/// resolves to `None`.
pub struct SourceDb {
    files: Vec<SourceFile>,
}

impl SourceDb {
    /// An empty database.
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Reads a file from disk and registers it, returning the assigned id.
    pub fn load_file(&mut self, path: &Path) -> Result<FileId, io::Error> {
        let content = std::fs::read_to_string(path)?;
        Ok(self.add_source(path, content))
    }

    /// Adds a source file from an in-memory string.
    ///
    /// `name` becomes the path shown in diagnostics.
    pub fn add_source(&mut self, name: impl Into<PathBuf>, content: String) -> FileId {
        let id = FileId::from_raw(self.files.len() as u32);
        let file = SourceFile::new(id, name.into(), content);
        self.files.push(file);
        id
    }

    /// Returns the [`SourceFile`] for the given [`FileId`], or `None` if the
    /// id is the dummy id or out of range.
    pub fn file(&self, id: FileId) -> Option<&SourceFile> {
        self.files.get(id.as_raw() as usize)
    }

    /// Returns the number of files in the database.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns `true` if no files have been registered.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Resolves a [`Span`] to human-readable line/column coordinates, or
    /// `None` if the span's file is not in the database.
    pub fn resolve_span(&self, span: Span) -> Option<ResolvedSpan> {
        let file = self.file(span.file)?;
        let (start_line, start_col) = file.line_col(span.start);
        let (end_line, end_col) = file.line_col(span.end.saturating_sub(1).max(span.start));
        Some(ResolvedSpan {
            file_path: file.path.clone(),
            start_line,
            start_col,
            end_line,
            end_col,
        })
    }

    /// Returns the source text corresponding to a [`Span`], or `None` if the
    /// file is unknown or the range is invalid.
    pub fn snippet(&self, span: Span) -> Option<&str> {
        self.file(span.file)?.snippet(span.start, span.end)
    }
}

impl Default for SourceDb {
    fn default() -> Self {
        Self::new()
    }
}
