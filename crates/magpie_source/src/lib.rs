//! Source file management, span tracking, and location resolution for
//! diagnostics.
//!
//! This crate provides the [`SourceDb`] for holding source text alongside an
//! analysed model, [`FileId`] and [`Span`] types for tracking source
//! locations, and [`ResolvedSpan`] for converting byte offsets to
//! human-readable line/column coordinates.
//!
//! Spans originate in a model exported by a host process, so nothing here
//! panics on an unknown file or an out-of-range offset; lookups return
//! `Option` and renderers degrade to location-free output.

#![warn(missing_docs)]

pub mod file_id;
pub mod resolved_span;
pub mod source_db;
pub mod source_file;
pub mod span;

pub use file_id::FileId;
pub use resolved_span::ResolvedSpan;
pub use source_db::SourceDb;
pub use source_file::SourceFile;
pub use span::Span;
