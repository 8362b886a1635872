//! Type definitions — the nodes of the subtype lattice.

use crate::ids::TypeId;
use magpie_common::Ident;
use magpie_source::Span;
use serde::{Deserialize, Serialize};

/// The flavor of a type declaration.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum TypeKind {
    /// A reference type with single inheritance.
    Class,
    /// A value type. Structs never have a base class of their own and pass
    /// by copy, so signature rules leave struct parameters alone.
    Struct,
    /// An interface. Interfaces may extend any number of base interfaces,
    /// which is where diamond shapes in the lattice come from.
    Interface,
}

/// Well-known types the host marks specially.
///
/// Parameters declared with a special type are left alone by signature
/// rules: there is nothing useful to generalize a `string` or an `int` to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum SpecialType {
    /// An ordinary user-defined type.
    None,
    /// The universal base type every other type derives from.
    Object,
    /// The built-in string type.
    String,
    /// The built-in boolean type.
    Boolean,
    /// The built-in 32-bit integer type.
    Int32,
    /// The built-in 64-bit integer type.
    Int64,
    /// The built-in double-precision float type.
    Float64,
    /// The built-in character type.
    Char,
}

/// A type declaration in the compilation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeDef {
    /// The unique ID of this type in the compilation.
    pub id: TypeId,
    /// The type name.
    pub name: Ident,
    /// Whether this is a class, struct, or interface.
    pub kind: TypeKind,
    /// Well-known type marker, or [`SpecialType::None`] for ordinary types.
    pub special: SpecialType,
    /// The base class, if any. `None` for the universal base type and for
    /// interfaces.
    pub base: Option<TypeId>,
    /// Interfaces this type implements directly (for classes and structs) or
    /// extends directly (for interfaces).
    pub interfaces: Vec<TypeId>,
    /// The source span of the type declaration.
    pub span: Span,
}

impl TypeDef {
    /// Returns `true` if this type is a value type.
    pub fn is_value_type(&self) -> bool {
        self.kind == TypeKind::Struct
    }

    /// Returns `true` if this type is an interface.
    pub fn is_interface(&self) -> bool {
        self.kind == TypeKind::Interface
    }

    /// Returns `true` if the host marked this as a well-known builtin.
    pub fn is_special(&self) -> bool {
        self.special != SpecialType::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mk_type(kind: TypeKind, special: SpecialType) -> TypeDef {
        TypeDef {
            id: TypeId::from_raw(0),
            name: Ident::from_raw(0),
            kind,
            special,
            base: None,
            interfaces: Vec::new(),
            span: Span::DUMMY,
        }
    }

    #[test]
    fn struct_is_value_type() {
        assert!(mk_type(TypeKind::Struct, SpecialType::None).is_value_type());
        assert!(!mk_type(TypeKind::Class, SpecialType::None).is_value_type());
    }

    #[test]
    fn interface_flag() {
        assert!(mk_type(TypeKind::Interface, SpecialType::None).is_interface());
        assert!(!mk_type(TypeKind::Class, SpecialType::None).is_interface());
    }

    #[test]
    fn special_flag() {
        assert!(mk_type(TypeKind::Class, SpecialType::String).is_special());
        assert!(!mk_type(TypeKind::Class, SpecialType::None).is_special());
    }

    #[test]
    fn serde_roundtrip() {
        let ty = mk_type(TypeKind::Interface, SpecialType::None);
        let json = serde_json::to_string(&ty).unwrap();
        let back: TypeDef = serde_json::from_str(&json).unwrap();
        assert_eq!(back.kind, TypeKind::Interface);
        assert!(back.base.is_none());
    }
}
