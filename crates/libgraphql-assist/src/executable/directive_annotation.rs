use crate::ByteSpan;
use crate::executable::Argument;
use crate::executable::Name;

/// A directive applied to an operation, field, fragment or variable, e.g.
/// `@include(if: $withBody)`.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation {
    pub(crate) arguments: Vec<Argument>,
    pub(crate) name: Name,
    pub(crate) span: ByteSpan,
}
impl DirectiveAnnotation {
    pub fn arguments(&self) -> &[Argument] {
        self.arguments.as_slice()
    }

    /// The directive's name, without the `@`.
    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn span(&self) -> ByteSpan {
        self.span
    }
}
