//! All built-in analysis rule implementations.
//!
//! This module re-exports the individual rule types and provides
//! `register_builtin_rules` to add them to an `AnalysisEngine`.

mod a101;

pub use a101::OverspecificParameter;

use crate::AnalysisEngine;

/// Registers all built-in rules with the engine.
pub fn register_builtin_rules(engine: &mut AnalysisEngine) {
    engine.register(Box::new(OverspecificParameter));
}
