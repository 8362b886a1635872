//! Shared foundational types for the Magpie analysis toolkit.
//!
//! This crate holds the small pieces that every other crate in the
//! workspace depends on: interned identifiers, content hashing, and
//! cooperative cancellation. It deliberately has no knowledge of the
//! semantic model or of any analysis rule.

#![warn(missing_docs)]

pub mod cancel;
pub mod hash;
pub mod ident;

pub use cancel::{CancelToken, Cancelled};
pub use hash::ContentHash;
pub use ident::{Ident, Interner};
