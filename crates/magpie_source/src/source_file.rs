//! In-memory copy of one source file, indexed by line for rendering.

use crate::file_id::FileId;
use magpie_common::ContentHash;
use std::path::PathBuf;

/// A snapshot of one source file referenced by a model.
///
/// Stores the file's text along with precomputed line-start offsets for
/// efficient line/column resolution during diagnostic rendering, and a
/// content hash so a host can tell whether the file has drifted since the
/// model was exported.
pub struct SourceFile {
    /// The identifier of this file within the [`SourceDb`](crate::SourceDb).
    pub id: FileId,
    /// The filesystem path of this file (or a synthetic name for in-memory
    /// sources).
    pub path: PathBuf,
    /// The text the line index and snippets are computed from.
    pub content: String,
    /// Offset of each line's first byte; line 1 starts at offset 0.
    line_starts: Vec<u32>,
    /// Hash of the file content for staleness checks.
    pub content_hash: ContentHash,
}

impl SourceFile {
    /// Builds the snapshot, indexing line starts and hashing the text up
    /// front.
    pub fn new(id: FileId, path: PathBuf, content: String) -> Self {
        let line_starts = compute_line_starts(&content);
        let content_hash = ContentHash::from_bytes(content.as_bytes());
        Self {
            id,
            path,
            content,
            line_starts,
            content_hash,
        }
    }

    /// Resolves a byte offset to 1-based line and column numbers.
    ///
    /// Uses binary search on the precomputed line-start offsets. Offsets past
    /// the end of the file resolve to the last line.
    pub fn line_col(&self, byte_offset: u32) -> (u32, u32) {
        let line_idx = match self.line_starts.binary_search(&byte_offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        };
        let line = (line_idx as u32) + 1;
        let col = byte_offset - self.line_starts[line_idx] + 1;
        (line, col)
    }

    /// Returns the substring of the file content between byte offsets, or
    /// `None` if the range is out of bounds or splits a UTF-8 character.
    /// Spans come from an externally produced model, so a bad range must not
    /// abort rendering.
    pub fn snippet(&self, start: u32, end: u32) -> Option<&str> {
        self.content.get(start as usize..end as usize)
    }
}

/// Every offset that follows a newline, plus 0 for the first line.
fn compute_line_starts(content: &str) -> Vec<u32> {
    let mut starts = vec![0u32];
    for (i, byte) in content.bytes().enumerate() {
        if byte == b'\n' {
            starts.push((i + 1) as u32);
        }
    }
    starts
}
