//! Positioned diagnostics for a GraphQL document.
//!
//! [`lint()`] reports the first syntax error of a document, or, when it
//! parses and a [`Schema`](crate::Schema) is available, every error found by
//! a [`Validator`].

mod diagnose;
mod diagnostic;
mod document_validator;
mod source_node;
mod validation_error;
mod validator;

pub use diagnose::lint;
pub use diagnose::lint_with_validator;
pub use diagnostic::Diagnostic;
pub use diagnostic::DiagnosticCategory;
pub use diagnostic::Severity;
pub use document_validator::DocumentValidator;
pub use source_node::SourceNode;
pub use validation_error::ValidationError;
pub use validator::Validator;
