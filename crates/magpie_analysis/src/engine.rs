//! Analysis engine that manages rule registration, configuration, and
//! execution.
//!
//! The `AnalysisEngine` accepts a `RulesConfig` to control which rules are
//! denied, allowed, or warned, then runs each enabled rule over every method
//! in the compilation. Methods are independent, so the engine fans them out
//! across a rayon pool.

use std::collections::HashSet;

use magpie_common::CancelToken;
use magpie_config::RulesConfig;
use magpie_diagnostics::{DiagnosticSink, Severity};
use magpie_model::{Compilation, MethodDef};
use rayon::prelude::*;

use crate::rules::register_builtin_rules;
use crate::Rule;

/// The engine that orchestrates running analysis rules on a compilation.
///
/// The rule set is fixed at construction time, together with the
/// `RulesConfig` overrides: `allow` suppresses a rule, `deny` promotes it to
/// error severity, and `warn` caps it at warning severity. A config entry may
/// name a rule either by its name or by its diagnostic code.
pub struct AnalysisEngine {
    /// All registered rules.
    rules: Vec<Box<dyn Rule>>,
    /// Rules promoted to error severity.
    denied: HashSet<String>,
    /// Rules suppressed entirely.
    allowed: HashSet<String>,
    /// Rules forced to warning severity.
    warned: HashSet<String>,
}

impl AnalysisEngine {
    /// Creates an engine configured by the given `RulesConfig`.
    ///
    /// Every builtin rule is included. Rules listed in `config.deny` report
    /// at error severity, rules in `config.allow` are suppressed entirely,
    /// and rules in `config.warn` report at warning severity regardless of
    /// their default.
    pub fn new(config: &RulesConfig) -> Self {
        let denied: HashSet<String> = config.deny.iter().cloned().collect();
        let allowed: HashSet<String> = config.allow.iter().cloned().collect();
        let warned: HashSet<String> = config.warn.iter().cloned().collect();

        let mut engine = Self {
            rules: Vec::new(),
            denied,
            allowed,
            warned,
        };

        register_builtin_rules(&mut engine);
        engine
    }

    /// Creates an engine with default configuration (no overrides).
    pub fn with_defaults() -> Self {
        Self::new(&RulesConfig::default())
    }

    /// Registers a rule with the engine.
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// The number of rules the engine carries.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// The names of every rule the engine carries.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Iterates over the registered rules.
    pub fn rules(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    /// Runs all enabled rules on every method in the compilation.
    ///
    /// Methods are processed in parallel. Each rule writes into a
    /// per-invocation sink first so the engine can rewrite severities
    /// before forwarding to the shared sink. Once `cancel` trips, methods
    /// not yet started are skipped; diagnostics already forwarded stay.
    pub fn run(&self, comp: &Compilation, sink: &DiagnosticSink, cancel: &CancelToken) {
        let methods: Vec<&MethodDef> = comp.methods.values().collect();
        methods.par_iter().for_each(|method| {
            if cancel.is_cancelled() {
                return;
            }
            for rule in &self.rules {
                if listed(&self.allowed, rule.as_ref()) {
                    continue;
                }

                let temp_sink = DiagnosticSink::new();
                rule.check_method(method, comp, &temp_sink, cancel);

                let is_denied = listed(&self.denied, rule.as_ref());
                let is_warned = listed(&self.warned, rule.as_ref());
                for mut diag in temp_sink.take_all() {
                    if is_denied {
                        diag.severity = Severity::Error;
                    } else if is_warned {
                        diag.severity = Severity::Warning;
                    }
                    sink.emit(diag);
                }
            }
        });
    }
}

/// Config lists may identify a rule by name (`overspecific-parameter`) or by
/// code (`A101`).
fn listed(set: &HashSet<String>, rule: &dyn Rule) -> bool {
    set.contains(rule.name()) || set.contains(&rule.code().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use magpie_diagnostics::{Category, Diagnostic, DiagnosticCode};
    use magpie_model::MethodDef;
    use magpie_source::Span;

    struct DummyRule;
    impl Rule for DummyRule {
        fn code(&self) -> DiagnosticCode {
            DiagnosticCode::new(Category::Warning, 999)
        }
        fn name(&self) -> &str {
            "dummy-rule"
        }
        fn description(&self) -> &str {
            "a test rule"
        }
        fn default_severity(&self) -> Severity {
            Severity::Warning
        }
        fn check_method(
            &self,
            _method: &MethodDef,
            _comp: &Compilation,
            sink: &DiagnosticSink,
            _cancel: &CancelToken,
        ) {
            sink.emit(Diagnostic::warning(self.code(), "dummy warning", Span::DUMMY));
        }
    }

    struct LoudRule;
    impl Rule for LoudRule {
        fn code(&self) -> DiagnosticCode {
            DiagnosticCode::new(Category::Usage, 998)
        }
        fn name(&self) -> &str {
            "loud-rule"
        }
        fn description(&self) -> &str {
            "a rule that errors by default"
        }
        fn default_severity(&self) -> Severity {
            Severity::Error
        }
        fn check_method(
            &self,
            _method: &MethodDef,
            _comp: &Compilation,
            sink: &DiagnosticSink,
            _cancel: &CancelToken,
        ) {
            sink.emit(Diagnostic::error(self.code(), "loud error", Span::DUMMY));
        }
    }

    fn mk_comp(method_count: usize) -> Compilation {
        let mut comp = Compilation::new();
        let owner = comp.universal_base_type();
        for i in 0..method_count {
            let name = comp.intern(&format!("M{i}"));
            comp.add_method(MethodDef::new(name, owner, owner));
        }
        comp
    }

    fn rules_config(deny: &[&str], allow: &[&str], warn: &[&str]) -> RulesConfig {
        RulesConfig {
            deny: deny.iter().map(|s| s.to_string()).collect(),
            allow: allow.iter().map(|s| s.to_string()).collect(),
            warn: warn.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn engine_registers_builtin_rules() {
        let engine = AnalysisEngine::with_defaults();
        assert_eq!(engine.rule_count(), 1);
    }

    #[test]
    fn engine_custom_rule() {
        let mut engine = AnalysisEngine::with_defaults();
        let initial_count = engine.rule_count();
        engine.register(Box::new(DummyRule));
        assert_eq!(engine.rule_count(), initial_count + 1);
    }

    #[test]
    fn engine_run_emits_diagnostics() {
        let mut engine = AnalysisEngine::with_defaults();
        engine.register(Box::new(DummyRule));
        let comp = mk_comp(1);
        let sink = DiagnosticSink::new();
        engine.run(&comp, &sink, &CancelToken::new());
        let diags = sink.take_all();
        assert!(diags.iter().any(|d| d.message == "dummy warning"));
    }

    #[test]
    fn engine_run_covers_every_method() {
        let mut engine = AnalysisEngine::with_defaults();
        engine.register(Box::new(DummyRule));
        let comp = mk_comp(8);
        let sink = DiagnosticSink::new();
        engine.run(&comp, &sink, &CancelToken::new());
        let dummy_count = sink
            .take_all()
            .iter()
            .filter(|d| d.message == "dummy warning")
            .count();
        assert_eq!(dummy_count, 8);
    }

    #[test]
    fn engine_allow_suppresses_rule() {
        let config = rules_config(&[], &["dummy-rule"], &[]);
        let mut engine = AnalysisEngine::new(&config);
        engine.register(Box::new(DummyRule));
        let comp = mk_comp(1);
        let sink = DiagnosticSink::new();
        engine.run(&comp, &sink, &CancelToken::new());
        let diags = sink.take_all();
        assert!(
            !diags.iter().any(|d| d.message == "dummy warning"),
            "allowed rule should be suppressed"
        );
    }

    #[test]
    fn engine_allow_accepts_code() {
        let config = rules_config(&[], &["W999"], &[]);
        let mut engine = AnalysisEngine::new(&config);
        engine.register(Box::new(DummyRule));
        let comp = mk_comp(1);
        let sink = DiagnosticSink::new();
        engine.run(&comp, &sink, &CancelToken::new());
        assert!(sink.take_all().is_empty());
    }

    #[test]
    fn engine_deny_promotes_severity() {
        let config = rules_config(&["dummy-rule"], &[], &[]);
        let mut engine = AnalysisEngine::new(&config);
        engine.register(Box::new(DummyRule));
        let comp = mk_comp(1);
        let sink = DiagnosticSink::new();
        engine.run(&comp, &sink, &CancelToken::new());
        let diags = sink.take_all();
        let dummy_diags: Vec<_> = diags
            .iter()
            .filter(|d| d.message == "dummy warning")
            .collect();
        assert!(!dummy_diags.is_empty());
        assert_eq!(dummy_diags[0].severity, Severity::Error);
    }

    #[test]
    fn engine_warn_caps_severity() {
        let config = rules_config(&[], &[], &["loud-rule"]);
        let mut engine = AnalysisEngine::new(&config);
        engine.register(Box::new(LoudRule));
        let comp = mk_comp(1);
        let sink = DiagnosticSink::new();
        engine.run(&comp, &sink, &CancelToken::new());
        let diags = sink.take_all();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Warning);
        assert!(!sink.has_errors());
    }

    #[test]
    fn engine_rule_names() {
        let engine = AnalysisEngine::with_defaults();
        let names = engine.rule_names();
        assert!(names.contains(&"overspecific-parameter"));
    }

    #[test]
    fn cancelled_run_emits_nothing() {
        let mut engine = AnalysisEngine::with_defaults();
        engine.register(Box::new(DummyRule));
        let comp = mk_comp(4);
        let sink = DiagnosticSink::new();
        let cancel = CancelToken::new();
        cancel.cancel();
        engine.run(&comp, &sink, &cancel);
        assert!(sink.take_all().is_empty());
    }
}
