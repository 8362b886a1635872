//! Content hashing for detecting stale source snapshots.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 128-bit XXH3 hash of a file's content.
///
/// A host records one of these per source file when it exports a model.
/// The analyzer recomputes the hash over whatever is on disk at check time;
/// a mismatch means the file drifted after export and its spans may no
/// longer line up. Equal hashes are taken to mean equal content.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentHash([u8; 16]);

impl ContentHash {
    /// Hashes a byte slice.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self(xxhash_rust::xxh3::xxh3_128(data).to_le_bytes())
    }

    /// Whether `data` hashes to this value.
    pub fn matches(self, data: &[u8]) -> bool {
        Self::from_bytes(data) == self
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|byte| write!(f, "{byte:02x}"))
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The full 32 hex chars drown out everything else in model dumps.
        write!(
            f,
            "ContentHash({:02x}{:02x}{:02x}{:02x}..)",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}
