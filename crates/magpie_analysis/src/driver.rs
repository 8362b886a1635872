//! Per-method signature analysis.
//!
//! [`analyze_method`] walks one exported body, folds every operation that
//! touches a tracked parameter into that parameter's
//! [`UsageState`](crate::usage::UsageState), and resolves each final state
//! into at most one [`Suggestion`].

use magpie_common::CancelToken;
use magpie_model::{Compilation, MethodDef, Operation, Param, ParamId, TypeId, ValueRef};

use crate::resolve::resolve_suggestion;
use crate::usage::UsageState;

/// A sound signature generalization for one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    /// The parameter whose type can be widened.
    pub param: ParamId,
    /// The type the parameter is declared with today.
    pub declared: TypeId,
    /// The more general type the body actually requires.
    pub suggested: TypeId,
}

/// Analyses one method and returns the parameter generalizations its body
/// supports.
///
/// Methods whose signatures are constrained from outside (overrides, virtual
/// declarations, interface implementations) and methods without a body
/// produce nothing. Receiver, implicit, value-type, and builtin-type
/// parameters are never tracked. Operations that reference IDs outside the
/// model escape the parameter they touch instead of panicking, so a
/// malformed export degrades to fewer suggestions rather than wrong ones.
pub fn analyze_method(
    comp: &Compilation,
    method: &MethodDef,
    cancel: &CancelToken,
) -> Vec<Suggestion> {
    if method.signature_is_constrained() {
        return Vec::new();
    }
    let Some(body) = &method.body else {
        return Vec::new();
    };

    let mut states: Vec<Option<UsageState>> = method
        .params_with_ids()
        .map(|(_, p)| tracks_param(comp, p).then(|| UsageState::new(p.ty)))
        .collect();
    if states.iter().all(Option::is_none) {
        return Vec::new();
    }

    for op in &body.ops {
        if cancel.is_cancelled() {
            // A partially walked body could miss a later escape, so no
            // verdict is the only sound answer.
            return Vec::new();
        }
        record_op(comp, op, &mut states);
    }

    let mut suggestions = Vec::new();
    for (index, state) in states.iter().enumerate() {
        let Some(state) = state else { continue };
        if let Some(suggested) = resolve_suggestion(state, comp) {
            suggestions.push(Suggestion {
                param: ParamId::from_raw(index as u32),
                declared: state.declared(),
                suggested,
            });
        }
    }
    suggestions
}

/// Whether the analysis follows this parameter at all.
fn tracks_param(comp: &Compilation, param: &Param) -> bool {
    if param.is_receiver || param.is_implicit {
        return false;
    }
    match comp.types.try_get(param.ty) {
        Some(ty) => !ty.is_value_type() && !ty.is_special(),
        None => false,
    }
}

fn record_op(comp: &Compilation, op: &Operation, states: &mut [Option<UsageState>]) {
    match op {
        Operation::Argument {
            callee,
            index,
            value,
            ..
        } => {
            let Some(state) = param_state(states, *value) else {
                return;
            };
            let formal = comp
                .methods
                .try_get(*callee)
                .and_then(|m| m.params.get(*index as usize));
            match formal {
                Some(formal) => state.record_requirement(comp, formal.ty),
                None => state.record_escape(),
            }
        }
        Operation::MemberAccess {
            member, receiver, ..
        } => {
            let Some(state) = param_state(states, *receiver) else {
                return;
            };
            match comp.members.try_get(*member) {
                Some(m) => state.record_requirement(comp, m.owner),
                None => state.record_escape(),
            }
        }
        Operation::Invocation {
            method, receiver, ..
        } => {
            let Some(state) = param_state(states, *receiver) else {
                return;
            };
            match comp.methods.try_get(*method) {
                Some(m) => state.record_requirement(comp, m.owner),
                None => state.record_escape(),
            }
        }
        Operation::TypeTest { value, .. } | Operation::Cast { value, .. } => {
            if let Some(state) = param_state(states, *value) {
                state.record_escape();
            }
        }
        Operation::LocalInit {
            value: Some(value), ..
        } => {
            if let Some(state) = param_state(states, *value) {
                state.record_escape();
            }
        }
        // A bare declaration binds nothing.
        Operation::LocalInit { value: None, .. } => {}
        Operation::Assignment { target, value, .. } => {
            if let Some(state) = param_state(states, *target) {
                state.record_escape();
            }
            if let Some(state) = param_state(states, *value) {
                state.record_escape();
            }
        }
        // What a caller does with the returned value is outside this
        // method's body, so a return constrains nothing here.
        Operation::Return { .. } => {}
    }
}

fn param_state(states: &mut [Option<UsageState>], value: ValueRef) -> Option<&mut UsageState> {
    let id = value.as_param()?;
    states.get_mut(id.as_raw() as usize)?.as_mut()
}
