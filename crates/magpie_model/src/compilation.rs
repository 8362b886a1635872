//! The top-level compilation container.
//!
//! A [`Compilation`] holds everything a host exports for one analysed
//! project: the type, member, and method tables, the interner backing every
//! name in them, and the list of source files spans point into. It is the
//! input to every analysis rule.

use crate::arena::Arena;
use crate::ids::{MemberId, MethodId, TypeId};
use crate::member::{MemberDef, MemberKind};
use crate::method::MethodDef;
use crate::types::{SpecialType, TypeDef, TypeKind};
use magpie_common::{ContentHash, Ident, Interner};
use magpie_source::{FileId, Span};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Display fallback for names and types a malformed model fails to resolve.
pub const UNKNOWN_NAME: &str = "<unknown>";

/// One source file referenced by a compilation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFileRecord {
    /// The path of the file as the host saw it.
    pub path: PathBuf,
    /// Hash of the file content at export time, if the host recorded one.
    /// Lets a consumer detect that the file drifted after export.
    pub hash: Option<ContentHash>,
}

/// A complete semantic model of one analysed project.
///
/// The universal base type is created by [`Compilation::new`] and always
/// present; every other type is assignable to it. Hosts append types,
/// members, and methods in any order, then hand the finished model to the
/// analysis engine. IDs are dense indices in append order.
#[derive(Debug, Serialize, Deserialize)]
pub struct Compilation {
    /// Interned names for every entity in the model.
    pub names: Interner,
    /// Source files spans refer to, indexed by [`FileId`].
    pub files: Vec<SourceFileRecord>,
    /// All type declarations.
    pub types: Arena<TypeId, TypeDef>,
    /// All field, property, and event declarations.
    pub members: Arena<MemberId, MemberDef>,
    /// All method declarations.
    pub methods: Arena<MethodId, MethodDef>,
    universal_base: TypeId,
}

impl Compilation {
    /// Creates a compilation containing only the universal base type.
    pub fn new() -> Self {
        let names = Interner::new();
        let object_name = names.get_or_intern("object");
        let mut types = Arena::new();
        let universal_base = types.alloc(TypeDef {
            id: TypeId::from_raw(0),
            name: object_name,
            kind: TypeKind::Class,
            special: SpecialType::Object,
            base: None,
            interfaces: Vec::new(),
            span: Span::DUMMY,
        });
        Self {
            names,
            files: Vec::new(),
            types,
            members: Arena::new(),
            methods: Arena::new(),
            universal_base,
        }
    }

    /// The universal base type every type in the model is assignable to.
    pub fn universal_base_type(&self) -> TypeId {
        self.universal_base
    }

    /// Interns a name in this compilation's interner.
    pub fn intern(&self, name: &str) -> Ident {
        self.names.get_or_intern(name)
    }

    /// Registers a source file and returns its [`FileId`].
    pub fn add_file(&mut self, path: impl Into<PathBuf>) -> FileId {
        let id = FileId::from_raw(self.files.len() as u32);
        self.files.push(SourceFileRecord {
            path: path.into(),
            hash: None,
        });
        id
    }

    /// Adds a class. A class with no explicit base derives from the
    /// universal base type.
    pub fn add_class(&mut self, name: &str, base: Option<TypeId>) -> TypeId {
        let name = self.intern(name);
        let universal = self.universal_base;
        self.alloc_type(|id| TypeDef {
            id,
            name,
            kind: TypeKind::Class,
            special: SpecialType::None,
            base: Some(base.unwrap_or(universal)),
            interfaces: Vec::new(),
            span: Span::DUMMY,
        })
    }

    /// Adds a struct.
    pub fn add_struct(&mut self, name: &str) -> TypeId {
        let name = self.intern(name);
        let universal = self.universal_base;
        self.alloc_type(|id| TypeDef {
            id,
            name,
            kind: TypeKind::Struct,
            special: SpecialType::None,
            base: Some(universal),
            interfaces: Vec::new(),
            span: Span::DUMMY,
        })
    }

    /// Adds an interface extending the given base interfaces.
    pub fn add_interface(&mut self, name: &str, bases: Vec<TypeId>) -> TypeId {
        let name = self.intern(name);
        self.alloc_type(|id| TypeDef {
            id,
            name,
            kind: TypeKind::Interface,
            special: SpecialType::None,
            base: None,
            interfaces: bases,
            span: Span::DUMMY,
        })
    }

    /// Adds a well-known builtin type such as `string` or `int`.
    pub fn add_builtin(&mut self, name: &str, special: SpecialType) -> TypeId {
        let name = self.intern(name);
        let universal = self.universal_base;
        self.alloc_type(|id| TypeDef {
            id,
            name,
            kind: TypeKind::Class,
            special,
            base: Some(universal),
            interfaces: Vec::new(),
            span: Span::DUMMY,
        })
    }

    /// Records that `ty` directly implements (or, for an interface,
    /// extends) `iface`.
    pub fn implement(&mut self, ty: TypeId, iface: TypeId) {
        self.types[ty].interfaces.push(iface);
    }

    /// Adds a member declared on `owner` and returns its ID.
    pub fn add_member(&mut self, owner: TypeId, name: &str, kind: MemberKind, ty: TypeId) -> MemberId {
        let name = self.intern(name);
        let id = MemberId::from_raw(self.members.len() as u32);
        self.members.alloc(MemberDef {
            id,
            name,
            owner,
            kind,
            ty,
            span: Span::DUMMY,
        });
        id
    }

    /// Adds a method, assigning its ID.
    pub fn add_method(&mut self, mut method: MethodDef) -> MethodId {
        let id = MethodId::from_raw(self.methods.len() as u32);
        method.id = id;
        self.methods.alloc(method);
        id
    }

    /// Resolves an interned name, falling back to [`UNKNOWN_NAME`] when the
    /// interner does not know it.
    pub fn resolve_name(&self, name: Ident) -> &str {
        self.names.try_resolve(name).unwrap_or(UNKNOWN_NAME)
    }

    /// The display name of a type, tolerant of dangling IDs.
    pub fn type_name(&self, ty: TypeId) -> &str {
        self.types
            .try_get(ty)
            .map(|t| self.resolve_name(t.name))
            .unwrap_or(UNKNOWN_NAME)
    }

    /// The display name of a method, tolerant of dangling IDs.
    pub fn method_name(&self, method: MethodId) -> &str {
        self.methods
            .try_get(method)
            .map(|m| self.resolve_name(m.name))
            .unwrap_or(UNKNOWN_NAME)
    }
}

impl Compilation {
    fn alloc_type(&mut self, build: impl FnOnce(TypeId) -> TypeDef) -> TypeId {
        let id = TypeId::from_raw(self.types.len() as u32);
        self.types.alloc(build(id));
        id
    }
}

impl Default for Compilation {
    fn default() -> Self {
        Self::new()
    }
}
