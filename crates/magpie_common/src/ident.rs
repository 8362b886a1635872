//! Interned names. Every identifier in a model is a `u32` handle into one
//! shared interner, so comparing names never touches string data.

use lasso::ThreadedRodeo;
use serde::{Deserialize, Serialize};

/// A unique identifier for any named entity in a semantic model.
///
/// Identifiers are interned strings represented as a `u32` index into the
/// interner owned by the enclosing model. This provides O(1) equality
/// comparison and O(1) cloning for type, member, method, parameter, and
/// local names.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Ident(u32);

impl Ident {
    /// Wraps a raw `u32` index as an `Ident`.
    ///
    /// Deserialized models are the usual producer of raw indices; code that
    /// has a string goes through [`Interner::get_or_intern`] instead.
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }

    /// The raw `u32` index behind this identifier.
    pub fn as_raw(self) -> u32 {
        self.0
    }
}

// SAFETY: the wrapped `u32` always fits in `usize` on the platforms we build
// for, and `try_from_usize` rejects anything that does not fit back in `u32`.
unsafe impl lasso::Key for Ident {
    fn into_usize(self) -> usize {
        self.0 as usize
    }

    fn try_from_usize(int: usize) -> Option<Self> {
        u32::try_from(int).ok().map(Ident)
    }
}

/// Thread-safe string interner backed by [`lasso::ThreadedRodeo`].
///
/// Every name in a semantic model is interned so that rules and renderers
/// can compare and copy names without touching string data. The interner is
/// serialized together with the model it belongs to, which keeps identifiers
/// resolvable after a model round-trips through a host process.
#[derive(Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Interner {
    rodeo: ThreadedRodeo<Ident>,
}

impl Interner {
    /// An interner with nothing interned yet.
    pub fn new() -> Self {
        Self {
            rodeo: ThreadedRodeo::new(),
        }
    }

    /// Interns a name and returns its [`Ident`]. A name that was interned
    /// before comes back as the same identifier without allocating.
    pub fn get_or_intern(&self, s: &str) -> Ident {
        self.rodeo.get_or_intern(s)
    }

    /// Resolves an [`Ident`] back to the name it was interned from.
    ///
    /// # Panics
    ///
    /// Panics if the identifier came from a different interner.
    pub fn resolve(&self, ident: Ident) -> &str {
        self.rodeo.resolve(&ident)
    }

    /// Resolves an [`Ident`], returning `None` if this interner does not
    /// know it. Display paths use this so a malformed model renders as
    /// placeholder text instead of aborting the session.
    pub fn try_resolve(&self, ident: Ident) -> Option<&str> {
        self.rodeo.try_resolve(&ident)
    }
}

impl Default for Interner {
    fn default() -> Self {
        Self::new()
    }
}
