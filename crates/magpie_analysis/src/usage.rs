//! Per-parameter usage state: what a method body requires of a parameter.
//!
//! Every operation that touches a tracked parameter either *requires*
//! something of its type (calling a member on it, passing it somewhere) or
//! makes the parameter's flow untrackable (casting it, reassigning it). The
//! [`UsageState`] folds those observations into a small summary the resolver
//! turns into a suggestion at body end.

use magpie_model::{TypeId, TypeModel};

/// Accumulated type requirements for one parameter of one method body.
///
/// The state machine has three phases: unconstrained (no qualifying usage
/// seen yet), narrowing (requirements accumulating), and escaped (terminal).
/// Once escaped, the most-derived requirement is pinned to the declared type
/// and no later observation changes anything.
#[derive(Debug, Clone)]
pub struct UsageState {
    declared: TypeId,
    most_derived: Option<TypeId>,
    required: Vec<TypeId>,
    escaped: bool,
}

impl UsageState {
    /// Creates the unconstrained state for a parameter declared with the
    /// given type.
    pub fn new(declared: TypeId) -> Self {
        Self {
            declared,
            most_derived: None,
            required: Vec::new(),
            escaped: false,
        }
    }

    /// The parameter's declared type.
    pub fn declared(&self) -> TypeId {
        self.declared
    }

    /// `true` once the parameter's flow can no longer be tracked.
    pub fn escaped(&self) -> bool {
        self.escaped
    }

    /// The most specific requirement seen so far, or `None` before the
    /// first qualifying usage. Pinned to the declared type after an escape.
    pub fn most_derived(&self) -> Option<TypeId> {
        self.most_derived
    }

    /// The distinct required types seen so far, in first-seen order.
    pub fn required(&self) -> &[TypeId] {
        &self.required
    }

    /// Folds one required type into the state.
    ///
    /// A requirement the declared type itself cannot satisfy means the
    /// operation was misread somewhere; the state escapes rather than
    /// accumulate an impossible constraint. Otherwise the requirement joins
    /// the set, and the most-derived marker moves to the new type when it
    /// is-a the current marker. Incomparable pairs leave the marker alone;
    /// the resolver re-examines the whole set anyway.
    pub fn record_requirement(&mut self, model: &dyn TypeModel, required: TypeId) {
        if self.escaped {
            return;
        }
        if !model.is_assignable_to(self.declared, required) {
            self.record_escape();
            return;
        }
        if !self.required.contains(&required) {
            self.required.push(required);
        }
        self.most_derived = match self.most_derived {
            None => Some(required),
            Some(current) if model.is_assignable_to(required, current) => Some(required),
            Some(current) => Some(current),
        };
    }

    /// Freezes the state: the parameter's value flowed somewhere the
    /// analysis cannot follow. Terminal; later observations are no-ops.
    pub fn record_escape(&mut self) {
        self.escaped = true;
        self.most_derived = Some(self.declared);
    }
}
