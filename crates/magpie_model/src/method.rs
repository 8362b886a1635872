//! Method definitions and their parameters.

use crate::body::Body;
use crate::ids::{MethodId, ParamId, TypeId};
use magpie_common::Ident;
use magpie_source::Span;
use serde::{Deserialize, Serialize};

/// A formal parameter of a method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Param {
    /// The parameter name.
    pub name: Ident,
    /// The declared parameter type.
    pub ty: TypeId,
    /// `true` for an explicit receiver parameter (`this`-style).
    pub is_receiver: bool,
    /// `true` for parameters the host compiler synthesised rather than the
    /// author writing them (for example a property setter's value).
    pub is_implicit: bool,
    /// The source span of the whole parameter declaration.
    pub span: Span,
    /// The source span of just the type annotation, which is what a
    /// signature fix replaces.
    pub ty_span: Span,
}

impl Param {
    /// Creates an ordinary explicit parameter with dummy spans.
    pub fn new(name: Ident, ty: TypeId) -> Self {
        Self {
            name,
            ty,
            is_receiver: false,
            is_implicit: false,
            span: Span::DUMMY,
            ty_span: Span::DUMMY,
        }
    }
}

/// A method declaration, optionally carrying a body.
///
/// Methods whose signatures are constrained from outside (overrides, virtual
/// methods, interface implementations) carry flags so signature rules can
/// leave them alone: changing such a signature is not that method's decision
/// to make.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodDef {
    /// The unique ID of this method in the compilation.
    pub id: MethodId,
    /// The method name.
    pub name: Ident,
    /// The type that declares this method.
    pub owner: TypeId,
    /// `true` if this method overrides a base method.
    pub is_override: bool,
    /// `true` if this method is declared virtual or abstract.
    pub is_virtual: bool,
    /// `true` if this method implements an interface member, explicitly or
    /// implicitly.
    pub implements_interface: bool,
    /// The formal parameters, indexed by [`ParamId`].
    pub params: Vec<Param>,
    /// The declared return type.
    pub return_type: TypeId,
    /// The method body, or `None` for abstract and extern methods.
    pub body: Option<Body>,
    /// The source span of the method declaration.
    pub span: Span,
}

impl MethodDef {
    /// Creates a method with no flags, parameters, or body. The ID is
    /// assigned when the method is added to a
    /// [`Compilation`](crate::Compilation).
    pub fn new(name: Ident, owner: TypeId, return_type: TypeId) -> Self {
        Self {
            id: MethodId::from_raw(0),
            name,
            owner,
            is_override: false,
            is_virtual: false,
            implements_interface: false,
            params: Vec::new(),
            return_type,
            body: None,
            span: Span::DUMMY,
        }
    }

    /// Returns the parameter with the given ID, or `None` if the ID is out
    /// of range for this method.
    pub fn param(&self, id: ParamId) -> Option<&Param> {
        self.params.get(id.as_raw() as usize)
    }

    /// Iterates over `(ParamId, &Param)` pairs in declaration order.
    pub fn params_with_ids(&self) -> impl Iterator<Item = (ParamId, &Param)> {
        self.params
            .iter()
            .enumerate()
            .map(|(i, p)| (ParamId::from_raw(i as u32), p))
    }

    /// Returns `true` if this method's signature is constrained externally
    /// and signature rules must not touch it.
    pub fn signature_is_constrained(&self) -> bool {
        self.is_override || self.is_virtual || self.implements_interface
    }
}
