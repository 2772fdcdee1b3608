use crate::ByteSpan;
use crate::executable::DirectiveAnnotation;
use crate::executable::Name;
use crate::executable::SelectionSet;
use crate::executable::TypeRef;
use crate::executable::Value;
use crate::types::DirectiveLocation;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
impl OperationKind {
    pub fn directive_location(&self) -> DirectiveLocation {
        match self {
            Self::Mutation => DirectiveLocation::Mutation,
            Self::Query => DirectiveLocation::Query,
            Self::Subscription => DirectiveLocation::Subscription,
        }
    }
}

/// A query, mutation or subscription. `{ ... }` alone is an anonymous
/// query.
#[derive(Clone, Debug, PartialEq)]
pub struct Operation {
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) kind: OperationKind,
    pub(crate) name: Option<Name>,
    pub(crate) selection_set: SelectionSet,
    pub(crate) span: ByteSpan,
    pub(crate) variable_definitions: Vec<VariableDefinition>,
}
impl Operation {
    pub fn directives(&self) -> &[DirectiveAnnotation] {
        self.directives.as_slice()
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> Option<&Name> {
        self.name.as_ref()
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn variable_definitions(&self) -> &[VariableDefinition] {
        self.variable_definitions.as_slice()
    }
}

/// `$name: Type = default` in an operation's variable list.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition {
    pub(crate) default_value: Option<Value>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) span: ByteSpan,
    pub(crate) type_ref: TypeRef,
    /// The variable's name, without the `$`.
    pub(crate) variable: Name,
    /// Span of `$name`.
    pub(crate) variable_span: ByteSpan,
}
impl VariableDefinition {
    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        self.directives.as_slice()
    }

    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }

    pub fn variable(&self) -> &Name {
        &self.variable
    }

    pub fn variable_span(&self) -> ByteSpan {
        self.variable_span
    }
}
