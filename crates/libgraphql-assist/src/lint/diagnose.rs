use crate::LineIndex;
use crate::Schema;
use crate::executable::ExecutableDocument;
use crate::lint::Diagnostic;
use crate::lint::DiagnosticCategory;
use crate::lint::DocumentValidator;
use crate::lint::Severity;
use crate::lint::Validator;

/// [`lint_with_validator()`] using the [`DocumentValidator`].
///
/// ```
/// # use libgraphql_assist::lint::DiagnosticCategory;
/// # use libgraphql_assist::lint::lint;
/// let diagnostics = lint("qeury", None);
/// assert_eq!(diagnostics.len(), 1);
/// assert_eq!(diagnostics[0].category(), DiagnosticCategory::Syntax);
/// ```
pub fn lint(source: &str, schema: Option<&Schema>) -> Vec<Diagnostic> {
    lint_with_validator(source, schema, &DocumentValidator)
}

/// Diagnose `source`.
///
/// A document that fails to parse yields exactly one syntax diagnostic,
/// spanning the offending token, and is not validated. Otherwise, when a
/// `schema` is given, each node of each error `validator` reports becomes
/// one validation diagnostic, in the order reported.
pub fn lint_with_validator(
    source: &str,
    schema: Option<&Schema>,
    validator: &dyn Validator,
) -> Vec<Diagnostic> {
    let line_index = LineIndex::new(source);
    let document = match ExecutableDocument::parse(source) {
        Ok(document) => document,
        Err(err) => return vec![Diagnostic::from_syntax_error(&err, &line_index)],
    };
    let Some(schema) = schema else {
        log::debug!("no schema loaded, skipping validation");
        return vec![];
    };

    let errors = validator.validate(schema, &document);
    log::debug!("validation reported {} error(s)", errors.len());
    errors.iter()
        .flat_map(|error| error.nodes().iter().map(|node| Diagnostic {
            category: DiagnosticCategory::Validation,
            message: error.message().to_string(),
            severity: Severity::Error,
            span: line_index.span(node.highlight()),
        }))
        .collect()
}
