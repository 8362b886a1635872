//! Analysis rules and engine for host-exported semantic models.
//!
//! This crate implements the rules that inspect a [`Compilation`] for API
//! shape problems, and the [`AnalysisEngine`] that runs them. Rules operate
//! per method so the engine can fan bodies out across threads; each
//! method's analysis is self-contained and keeps no state between bodies.
//!
//! The built-in rule A101 reports parameters declared with a more derived
//! type than their method body requires. Its machinery lives in three
//! layers: [`usage`] folds body operations into per-parameter states,
//! [`resolve`] turns a final state into a replacement type, and [`driver`]
//! walks a method and ties the two together.

#![warn(missing_docs)]

mod engine;
mod rules;

pub mod driver;
pub mod resolve;
pub mod usage;

pub use driver::{analyze_method, Suggestion};
pub use engine::AnalysisEngine;
pub use resolve::resolve_suggestion;
pub use rules::register_builtin_rules;
pub use rules::OverspecificParameter;
pub use usage::UsageState;

use magpie_common::CancelToken;
use magpie_diagnostics::{DiagnosticCode, DiagnosticSink, Severity};
use magpie_model::{Compilation, MethodDef};

/// A single analysis rule that checks one method at a time.
///
/// Each rule has a unique diagnostic code, a short kebab-case name, a
/// description, and a default severity. The `check_method` method is called
/// for every method in the compilation, potentially from many threads at
/// once, and emits findings through the provided sink. Rules must not keep
/// state across calls.
pub trait Rule: Send + Sync {
    /// Returns the diagnostic code for this rule (e.g. A101).
    fn code(&self) -> DiagnosticCode;

    /// Returns the short kebab-case name of this rule
    /// (e.g. "overspecific-parameter").
    fn name(&self) -> &str;

    /// Returns a human-readable description of what this rule checks.
    fn description(&self) -> &str;

    /// Returns the default severity for diagnostics emitted by this rule.
    fn default_severity(&self) -> Severity;

    /// Checks a single method and emits diagnostics to the sink. The cancel
    /// token is polled at loop boundaries; a cancelled rule simply returns
    /// early without emitting partial findings.
    fn check_method(
        &self,
        method: &MethodDef,
        comp: &Compilation,
        sink: &DiagnosticSink,
        cancel: &CancelToken,
    );
}
