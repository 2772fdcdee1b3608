use crate::ByteSpan;
use crate::executable::Argument;
use crate::executable::DirectiveAnnotation;
use crate::executable::FragmentSpread;
use crate::executable::InlineFragment;
use crate::executable::Name;

#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet {
    pub(crate) selections: Vec<Selection>,
    pub(crate) span: ByteSpan,
}
impl SelectionSet {
    pub fn selections(&self) -> &[Selection] {
        self.selections.as_slice()
    }

    pub fn span(&self) -> ByteSpan {
        self.span
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

/// A field selection, e.g. `pic: picture(size: 64) @include(if: $x) { url }`.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub(crate) alias: Option<Name>,
    pub(crate) arguments: Vec<Argument>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: Name,
    pub(crate) selection_set: Option<SelectionSet>,
    pub(crate) span: ByteSpan,
}
impl Field {
    pub fn alias(&self) -> Option<&Name> {
        self.alias.as_ref()
    }

    pub fn arguments(&self) -> &[Argument] {
        self.arguments.as_slice()
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        self.directives.as_slice()
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn selection_set(&self) -> Option<&SelectionSet> {
        self.selection_set.as_ref()
    }

    pub fn span(&self) -> ByteSpan {
        self.span
    }
}
