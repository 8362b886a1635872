//! A101: Overspecific parameter — a parameter is declared with a more
//! derived type than its method body requires.

use magpie_common::CancelToken;
use magpie_diagnostics::{
    Category, Diagnostic, DiagnosticCode, DiagnosticSink, Label, Severity, SuggestedFix,
};
use magpie_model::{Compilation, MethodDef, Param};

use crate::driver::{analyze_method, Suggestion};
use crate::Rule;

/// Detects parameters whose declared type is more derived than anything the
/// method body requires of them, and names the most general sound
/// replacement.
///
/// Overrides, virtual methods, and interface implementations are excluded
/// because their signatures are not theirs to change. Receiver, implicit,
/// value-type, and builtin-type parameters are never reported.
pub struct OverspecificParameter;

impl Rule for OverspecificParameter {
    fn code(&self) -> DiagnosticCode {
        DiagnosticCode::new(Category::Api, 101)
    }

    fn name(&self) -> &str {
        "overspecific-parameter"
    }

    fn description(&self) -> &str {
        "parameter is declared with a more derived type than its method requires"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check_method(
        &self,
        method: &MethodDef,
        comp: &Compilation,
        sink: &DiagnosticSink,
        cancel: &CancelToken,
    ) {
        for suggestion in analyze_method(comp, method, cancel) {
            let Some(param) = method.param(suggestion.param) else {
                continue;
            };
            sink.emit(self.diagnostic(comp, method, param, &suggestion));
        }
    }
}

impl OverspecificParameter {
    fn diagnostic(
        &self,
        comp: &Compilation,
        method: &MethodDef,
        param: &Param,
        suggestion: &Suggestion,
    ) -> Diagnostic {
        let param_name = comp.resolve_name(param.name);
        let method_name = comp.resolve_name(method.name);
        let declared = comp.type_name(suggestion.declared);
        let suggested = comp.type_name(suggestion.suggested);

        let mut diag = Diagnostic::warning(
            self.code(),
            format!("parameter '{param_name}' of '{method_name}' could be declared as '{suggested}'"),
            param.span,
        )
        .with_label(Label::primary(param.span, format!("declared as '{declared}'")))
        .with_note(format!(
            "every use of '{param_name}' is satisfied by '{suggested}'"
        ))
        .with_help(format!("callers could then pass any '{suggested}'"));

        if !param.ty_span.is_dummy() {
            diag = diag.with_fix(SuggestedFix::replace(
                format!("change the type of '{param_name}' to '{suggested}'"),
                param.ty_span,
                suggested,
            ));
        }
        diag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use magpie_model::{Body, MethodId, Operation, ParamId, ValueRef};
    use magpie_source::Span;

    // void Copy(FileStream fs) { Helper(fs); } with Helper(Stream value).
    fn mk_fixture() -> (Compilation, MethodId, MethodId) {
        let mut comp = Compilation::new();
        let stream = comp.add_class("Stream", None);
        let file_stream = comp.add_class("FileStream", Some(stream));

        let helper_name = comp.intern("Helper");
        let value = comp.intern("value");
        let object = comp.universal_base_type();
        let mut helper = MethodDef::new(helper_name, object, object);
        helper.params.push(Param::new(value, stream));
        let helper = comp.add_method(helper);

        let file = comp.add_file("Copier.cs");
        let copy_name = comp.intern("Copy");
        let fs = comp.intern("fs");
        let mut copy = MethodDef::new(copy_name, object, object);
        let mut param = Param::new(fs, file_stream);
        param.span = Span::new(file, 10, 23);
        param.ty_span = Span::new(file, 10, 20);
        copy.params.push(param);
        copy.body = Some(Body {
            locals: Vec::new(),
            ops: vec![Operation::Argument {
                callee: helper,
                index: 0,
                value: ValueRef::Param(ParamId::from_raw(0)),
                span: Span::DUMMY,
            }],
        });
        let copy = comp.add_method(copy);
        (comp, helper, copy)
    }

    fn check(comp: &Compilation, method: MethodId) -> Vec<Diagnostic> {
        let sink = DiagnosticSink::new();
        OverspecificParameter.check_method(
            &comp.methods[method],
            comp,
            &sink,
            &CancelToken::new(),
        );
        sink.take_all()
    }

    #[test]
    fn overspecific_parameter_fires() {
        let (comp, _, copy) = mk_fixture();
        let diags = check(&comp, copy);

        assert_eq!(diags.len(), 1);
        let diag = &diags[0];
        assert_eq!(diag.code, DiagnosticCode::new(Category::Api, 101));
        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(
            diag.message,
            "parameter 'fs' of 'Copy' could be declared as 'Stream'"
        );
        assert_eq!(diag.labels[0].message, "declared as 'FileStream'");
        assert_eq!(diag.primary_span, comp.methods[copy].params[0].span);
    }

    #[test]
    fn fix_targets_the_type_annotation() {
        let (comp, _, copy) = mk_fixture();
        let diags = check(&comp, copy);

        let fix = diags[0].fix.as_ref().unwrap();
        assert_eq!(fix.replacements.len(), 1);
        assert_eq!(fix.replacements[0].span, comp.methods[copy].params[0].ty_span);
        assert_eq!(fix.replacements[0].new_text, "Stream");
    }

    #[test]
    fn fix_omitted_without_type_span() {
        let (mut comp, _, copy) = mk_fixture();
        comp.methods[copy].params[0].ty_span = Span::DUMMY;
        let diags = check(&comp, copy);

        assert_eq!(diags.len(), 1);
        assert!(diags[0].fix.is_none());
    }

    #[test]
    fn constrained_method_is_silent() {
        let (mut comp, _, copy) = mk_fixture();
        comp.methods[copy].is_override = true;

        assert!(check(&comp, copy).is_empty());
    }

    #[test]
    fn exact_parameter_is_silent() {
        let (mut comp, helper, copy) = mk_fixture();
        // Redeclare the helper parameter as FileStream; the forwarding now
        // requires exactly the declared type.
        let declared = comp.methods[copy].params[0].ty;
        comp.methods[helper].params[0].ty = declared;

        assert!(check(&comp, copy).is_empty());
    }
}
