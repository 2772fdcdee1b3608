use crate::ByteSpan;

/// The part of a document a [`ValidationError`](crate::lint::ValidationError)
/// is about.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourceNode {
    pub(crate) is_variable: bool,
    pub(crate) name: Option<ByteSpan>,
    pub(crate) span: ByteSpan,
    pub(crate) variable: Option<ByteSpan>,
}
impl SourceNode {
    /// A node without any notable sub-node.
    pub fn new(span: ByteSpan) -> Self {
        Self {
            is_variable: false,
            name: None,
            span,
            variable: None,
        }
    }

    /// A node with a name, e.g. a field, an argument, or a fragment spread.
    pub fn named(span: ByteSpan, name: ByteSpan) -> Self {
        Self {
            name: Some(name),
            ..Self::new(span)
        }
    }

    /// A `$variable` reference. `name` excludes the `$`.
    pub fn variable_reference(span: ByteSpan, name: ByteSpan) -> Self {
        Self {
            is_variable: true,
            name: Some(name),
            ..Self::new(span)
        }
    }

    /// A node that declares a variable, e.g. `$id: ID!`.
    pub fn with_variable(span: ByteSpan, variable: ByteSpan) -> Self {
        Self {
            variable: Some(variable),
            ..Self::new(span)
        }
    }

    /// The span a diagnostic should underline.
    ///
    /// That is the declared variable of a node which is not itself a
    /// variable reference, else the node's name, else the whole node.
    pub fn highlight(&self) -> ByteSpan {
        match (self.is_variable, self.variable, self.name) {
            (false, Some(variable), _) => variable,
            (_, _, Some(name)) => name,
            _ => self.span,
        }
    }

    pub fn is_variable(&self) -> bool {
        self.is_variable
    }

    pub fn name(&self) -> Option<ByteSpan> {
        self.name
    }

    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn variable(&self) -> Option<ByteSpan> {
        self.variable
    }
}
