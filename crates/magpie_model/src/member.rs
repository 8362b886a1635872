//! Non-method member definitions: fields, properties, and events.

use crate::ids::{MemberId, TypeId};
use magpie_common::Ident;
use magpie_source::Span;
use serde::{Deserialize, Serialize};

/// The flavor of a non-method member.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum MemberKind {
    /// An instance field.
    Field,
    /// A property with accessors.
    Property,
    /// An event.
    Event,
}

/// A field, property, or event declaration.
///
/// The `owner` is the type that declares the member, which is what accessing
/// the member through a value actually requires of that value's type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberDef {
    /// The unique ID of this member in the compilation.
    pub id: MemberId,
    /// The member name.
    pub name: Ident,
    /// The type that declares this member.
    pub owner: TypeId,
    /// Whether this is a field, property, or event.
    pub kind: MemberKind,
    /// The member's value type.
    pub ty: TypeId,
    /// The source span of the member declaration.
    pub span: Span,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_roundtrip() {
        let m = MemberDef {
            id: MemberId::from_raw(3),
            name: Ident::from_raw(1),
            owner: TypeId::from_raw(0),
            kind: MemberKind::Property,
            ty: TypeId::from_raw(2),
            span: Span::DUMMY,
        };
        let json = serde_json::to_string(&m).unwrap();
        let back: MemberDef = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, m.id);
        assert_eq!(back.kind, MemberKind::Property);
        assert_eq!(back.owner, m.owner);
    }
}
