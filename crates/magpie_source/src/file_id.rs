//! Opaque identifier for source files referenced by a model.

use serde::{Deserialize, Serialize};

/// Identifies one source file within a model and its [`SourceDb`].
///
/// A host assigns ids densely, in export order, when it writes the model;
/// the analyzer registers files in the same order so the indices line up.
/// Spans carry a `FileId` to tie a byte range to its file.
///
/// [`SourceDb`]: crate::SourceDb
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct FileId(u32);

impl FileId {
    /// The id carried by synthetic spans — locations a host made up for
    /// declarations that have no source, and the dummy span itself.
    pub const DUMMY: FileId = FileId(u32::MAX);

    /// Wraps a raw index.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Unwraps to the raw index.
    pub fn as_raw(self) -> u32 {
        self.0
    }
}
