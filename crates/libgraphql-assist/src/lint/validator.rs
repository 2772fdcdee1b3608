use crate::Schema;
use crate::executable::ExecutableDocument;
use crate::lint::ValidationError;

/// Checks a parsed document against a schema.
///
/// [`DocumentValidator`](crate::lint::DocumentValidator) is the stock
/// implementation; [`lint_with_validator()`](crate::lint::lint_with_validator)
/// accepts any other.
pub trait Validator {
    fn validate(
        &self,
        schema: &Schema,
        document: &ExecutableDocument,
    ) -> Vec<ValidationError>;
}
