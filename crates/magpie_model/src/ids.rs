//! Opaque ID newtypes for all model entities.
//!
//! Each ID is a thin `u32` wrapper that is `Copy`, `Hash`, and
//! `Serialize`/`Deserialize`. Type, member, and method IDs are created by
//! [`Arena::alloc`](crate::arena::Arena::alloc); parameter and local IDs
//! index into the owning method's `params` and `body.locals` vectors.

use crate::arena::ArenaId;
use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
        pub struct $name(u32);

        impl $name {
            /// Wraps a raw index.
            pub fn from_raw(index: u32) -> Self {
                Self(index)
            }

            /// Unwraps to the raw index.
            pub fn as_raw(self) -> u32 {
                self.0
            }
        }

        impl ArenaId for $name {
            fn from_raw(index: u32) -> Self {
                $name::from_raw(index)
            }

            fn as_raw(self) -> u32 {
                $name::as_raw(self)
            }
        }
    };
}

define_id!(
    /// Identifies a type (class, struct, or interface) in a compilation.
    TypeId
);

define_id!(
    /// Identifies a field, property, or event in a compilation.
    MemberId
);

define_id!(
    /// Identifies a method in a compilation.
    MethodId
);

define_id!(
    /// Identifies a parameter by position within its owning method.
    ParamId
);

define_id!(
    /// Identifies a local variable by position within its owning body.
    LocalId
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn raw_roundtrip_and_identity() {
        assert_eq!(TypeId::from_raw(42).as_raw(), 42);
        assert_eq!(MethodId::from_raw(7), MethodId::from_raw(7));
        assert_ne!(MethodId::from_raw(7), MethodId::from_raw(8));
    }

    #[test]
    fn ids_deduplicate_in_sets() {
        let set: HashSet<TypeId> = [1, 2, 1].into_iter().map(TypeId::from_raw).collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn serde_is_transparent() {
        let json = serde_json::to_string(&ParamId::from_raw(99)).unwrap();
        assert_eq!(json, "99");
        let restored: ParamId = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, ParamId::from_raw(99));
    }

    #[test]
    fn every_entity_kind_has_an_id() {
        let _ = (
            TypeId::from_raw(0),
            MemberId::from_raw(0),
            MethodId::from_raw(0),
            ParamId::from_raw(0),
            LocalId::from_raw(0),
        );
    }
}
