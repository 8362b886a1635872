//! Method bodies as flat operation lists.
//!
//! A host exports each body as the sequence of operations it contains, in a
//! deterministic order that need not match runtime execution order. Rules
//! make a single pass over the list; there is no nested expression tree to
//! recurse into, because each operation already names the values it touches.

use crate::ids::{LocalId, MemberId, MethodId, ParamId, TypeId};
use magpie_common::Ident;
use magpie_source::Span;
use serde::{Deserialize, Serialize};

/// A local variable declared inside a method body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Local {
    /// The local's name.
    pub name: Ident,
    /// The local's declared type.
    pub ty: TypeId,
    /// The source span of the declaration.
    pub span: Span,
}

/// A method body: its locals and its operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    /// Local variables, indexed by [`LocalId`].
    pub locals: Vec<Local>,
    /// The operations of the body in host traversal order.
    pub ops: Vec<Operation>,
}

impl Body {
    /// Creates an empty body.
    pub fn new() -> Self {
        Self {
            locals: Vec::new(),
            ops: Vec::new(),
        }
    }

    /// Returns the local with the given ID, or `None` if the ID is out of
    /// range for this body.
    pub fn local(&self, id: LocalId) -> Option<&Local> {
        self.locals.get(id.as_raw() as usize)
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::new()
    }
}

/// A reference to a value an operation reads or writes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ValueRef {
    /// The implicit receiver of the enclosing instance method.
    This,
    /// One of the enclosing method's parameters.
    Param(ParamId),
    /// One of the body's local variables.
    Local(LocalId),
    /// A literal constant.
    Literal,
    /// Any other computed value (a call result, an arithmetic expression, a
    /// field read used as an operand).
    Computed,
}

impl ValueRef {
    /// Returns the parameter this value denotes, if it denotes one directly.
    pub fn as_param(self) -> Option<ParamId> {
        match self {
            ValueRef::Param(id) => Some(id),
            _ => None,
        }
    }
}

/// One operation inside a method body.
///
/// The variants cover exactly what signature and usage rules need to see:
/// which values flow where, and through which declared symbols. Anything the
/// host cannot express in these terms it exports as operands of kind
/// [`ValueRef::Computed`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Operation {
    /// A value passed as the argument at position `index` of a call to
    /// `callee`.
    Argument {
        /// The method being called.
        callee: MethodId,
        /// The zero-based position of the formal parameter receiving the
        /// value.
        index: u32,
        /// The value being passed.
        value: ValueRef,
        /// The source span of the argument expression.
        span: Span,
    },
    /// A field, property, or event accessed through a receiver value.
    MemberAccess {
        /// The member being accessed.
        member: MemberId,
        /// The value the member is accessed on.
        receiver: ValueRef,
        /// The source span of the access expression.
        span: Span,
    },
    /// An instance method invoked on a receiver value.
    Invocation {
        /// The method being invoked.
        method: MethodId,
        /// The value the method is invoked on.
        receiver: ValueRef,
        /// The source span of the invocation expression.
        span: Span,
    },
    /// A runtime type test (`is`-style) applied to a value.
    TypeTest {
        /// The value being tested.
        value: ValueRef,
        /// The type tested against.
        tested: TypeId,
        /// The source span of the test expression.
        span: Span,
    },
    /// An explicit cast of a value.
    Cast {
        /// The value being cast.
        value: ValueRef,
        /// The target type of the cast.
        target: TypeId,
        /// The source span of the cast expression.
        span: Span,
    },
    /// A local variable declaration, optionally with an initializer.
    LocalInit {
        /// The local being declared.
        local: LocalId,
        /// The initializer value, if any.
        value: Option<ValueRef>,
        /// The source span of the declaration.
        span: Span,
    },
    /// An assignment of one value to another storage location.
    Assignment {
        /// The storage location being written.
        target: ValueRef,
        /// The value being written.
        value: ValueRef,
        /// The source span of the assignment.
        span: Span,
    },
    /// A return from the method, optionally carrying a value.
    Return {
        /// The returned value, if any.
        value: Option<ValueRef>,
        /// The source span of the return.
        span: Span,
    },
}

impl Operation {
    /// Returns the source span of this operation.
    pub fn span(&self) -> Span {
        match self {
            Operation::Argument { span, .. }
            | Operation::MemberAccess { span, .. }
            | Operation::Invocation { span, .. }
            | Operation::TypeTest { span, .. }
            | Operation::Cast { span, .. }
            | Operation::LocalInit { span, .. }
            | Operation::Assignment { span, .. }
            | Operation::Return { span, .. } => *span,
        }
    }
}
