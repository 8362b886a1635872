//! Dense storage keyed by opaque ids.
//!
//! Every entity table in a model (types, members, methods) is an [`Arena`]:
//! items sit contiguously in allocation order and an id is just the index
//! it was allocated at, wrapped in a newtype.

use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

/// An id newtype usable as an arena key.
///
/// `from_raw` and `as_raw` must be inverses; the arena stores nothing but
/// the items, so the id carries the index.
pub trait ArenaId: Copy {
    /// Wraps a raw index.
    fn from_raw(index: u32) -> Self;

    /// Unwraps to the raw index.
    fn as_raw(self) -> u32;
}

/// Append-only storage with O(1) id lookup.
///
/// Ids stay valid for the arena's lifetime because nothing is ever removed
/// or reordered. Indexing with `[]` panics on a bad id; model data comes
/// from an external host, so code handling host-produced ids goes through
/// [`try_get`](Arena::try_get) and treats `None` as a malformed reference.
/// The id marker is phantom, so only the items serialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arena<I: ArenaId, T> {
    items: Vec<T>,
    #[serde(skip)]
    _marker: PhantomData<I>,
}

impl<I: ArenaId, T> Default for Arena<I, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: ArenaId, T> Arena<I, T> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Appends an item and returns the id it was stored under.
    pub fn alloc(&mut self, item: T) -> I {
        let id = I::from_raw(self.items.len() as u32);
        self.items.push(item);
        id
    }

    /// Looks up an id, panicking if it is out of bounds.
    pub fn get(&self, id: I) -> &T {
        &self.items[id.as_raw() as usize]
    }

    /// Looks up an id that may not be valid.
    pub fn try_get(&self, id: I) -> Option<&T> {
        self.items.get(id.as_raw() as usize)
    }

    /// Mutable lookup, panicking if the id is out of bounds.
    pub fn get_mut(&mut self, id: I) -> &mut T {
        &mut self.items[id.as_raw() as usize]
    }

    /// The number of items stored.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the arena holds nothing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates `(id, item)` pairs in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (I, &T)> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| (I::from_raw(i as u32), item))
    }

    /// Iterates the items alone, in allocation order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<I: ArenaId, T> Index<I> for Arena<I, T> {
    type Output = T;

    fn index(&self, id: I) -> &T {
        self.get(id)
    }
}

impl<I: ArenaId, T> IndexMut<I> for Arena<I, T> {
    fn index_mut(&mut self, id: I) -> &mut T {
        self.get_mut(id)
    }
}
