//! Byte ranges into exported source files. Every finding points at one.

use crate::file_id::FileId;
use serde::{Deserialize, Serialize};

/// A half-open byte range in one source file.
///
/// Spans track the location of declarations, parameters, and body operations
/// back to their origin in source code. The `start` is inclusive and `end`
/// is exclusive.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Span {
    /// File the range lies in.
    pub file: FileId,
    /// First byte of the range.
    pub start: u32,
    /// One past the last byte of the range.
    pub end: u32,
}

impl Span {
    /// The span used when the model supplied no location.
    pub const DUMMY: Span = Span {
        file: FileId::DUMMY,
        start: 0,
        end: 0,
    };

    /// A span covering `start..end` in `file`.
    pub fn new(file: FileId, start: u32, end: u32) -> Self {
        Self { file, start, end }
    }

    /// Merges two spans into one covering both.
    ///
    /// A dummy operand yields the other span unchanged. Spans from different
    /// files have no covering span; the merge is the dummy span. Model spans
    /// are host-produced, so that case is degraded rather than rejected.
    pub fn merge(self, other: Span) -> Span {
        if self.is_dummy() {
            return other;
        }
        if other.is_dummy() {
            return self;
        }
        if self.file != other.file {
            return Span::DUMMY;
        }
        Span {
            file: self.file,
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Length in bytes. An inverted range counts as zero.
    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// `true` when the span covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `true` for [`Span::DUMMY`] and any other span in the dummy file.
    pub fn is_dummy(&self) -> bool {
        self.file == FileId::DUMMY
    }
}
