use crate::ByteSpan;
use crate::executable::DirectiveAnnotation;
use crate::executable::Name;
use crate::executable::SelectionSet;

/// `fragment name on Type { ... }`.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition {
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: Name,
    pub(crate) selection_set: SelectionSet,
    pub(crate) span: ByteSpan,
    pub(crate) type_condition: Name,
}
impl FragmentDefinition {
    pub fn directives(&self) -> &[DirectiveAnnotation] {
        self.directives.as_slice()
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn type_condition(&self) -> &Name {
        &self.type_condition
    }
}

/// `...name` inside a selection set.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread {
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: Name,
    pub(crate) span: ByteSpan,
}
impl FragmentSpread {
    pub fn directives(&self) -> &[DirectiveAnnotation] {
        self.directives.as_slice()
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn span(&self) -> ByteSpan {
        self.span
    }
}

/// `... on Type { ... }`, or `... { ... }` without a type condition.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) selection_set: SelectionSet,
    pub(crate) span: ByteSpan,
    pub(crate) type_condition: Option<Name>,
}
impl InlineFragment {
    pub fn directives(&self) -> &[DirectiveAnnotation] {
        self.directives.as_slice()
    }

    pub fn selection_set(&self) -> &SelectionSet {
        &self.selection_set
    }

    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn type_condition(&self) -> Option<&Name> {
        self.type_condition.as_ref()
    }
}
