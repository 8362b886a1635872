//! Suggestion resolution: turning a folded [`UsageState`] into a verdict.

use magpie_model::{TypeId, TypeModel};

use crate::usage::UsageState;

/// Picks the replacement type to suggest for a parameter, if any.
///
/// The candidate is the requirement that satisfies every other requirement
/// in the set, computed over the whole set rather than trusting the fold's
/// running marker. The fold records requirements one at a time and its
/// marker depends on arrival order when types are incomparable; re-deriving
/// the answer here makes the verdict independent of the order the body was
/// walked in. A candidate only survives when it is strictly more general
/// than the declared type and more specific than the universal base, so
/// suggestions are never churn.
pub fn resolve_suggestion(state: &UsageState, model: &dyn TypeModel) -> Option<TypeId> {
    if state.escaped() {
        return None;
    }
    let most = state.most_derived()?;
    let declared = state.declared();
    if most == declared || most == model.universal_base() {
        return None;
    }
    let required = state.required();
    let candidate = *required
        .iter()
        .find(|c| required.iter().all(|r| model.is_assignable_to(**c, *r)))?;
    if candidate == declared || candidate == model.universal_base() {
        return None;
    }
    Some(candidate)
}
