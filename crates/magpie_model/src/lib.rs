//! The Magpie semantic model — a host-exported snapshot of an object-oriented
//! codebase.
//!
//! This crate defines the core model types including [`Compilation`],
//! [`TypeDef`], [`MemberDef`], and [`MethodDef`] that analysis rules consume,
//! plus the [`TypeModel`] capability exposing the subtype lattice. A host
//! compiler exports one [`Compilation`] per analysed project; the model is a
//! plain data snapshot, so everything here serializes with `serde`.

#![warn(missing_docs)]

pub mod arena;
pub mod body;
pub mod compilation;
pub mod ids;
pub mod lattice;
pub mod member;
pub mod method;
pub mod types;
pub mod validate;

pub use arena::{Arena, ArenaId};
pub use body::{Body, Local, Operation, ValueRef};
pub use compilation::{Compilation, SourceFileRecord};
pub use ids::{LocalId, MemberId, MethodId, ParamId, TypeId};
pub use lattice::TypeModel;
pub use member::{MemberDef, MemberKind};
pub use method::{MethodDef, Param};
pub use types::{SpecialType, TypeDef, TypeKind};
pub use validate::ModelError;
