//! A spanned model of an executable GraphQL document (operations and
//! fragments), lowered from `apollo-parser`'s lossless syntax tree.
//!
//! Every node records the [`ByteSpan`](crate::ByteSpan) of its source text
//! with surrounding whitespace, commas and comments trimmed off.

mod directive_annotation;
mod executable_document;
mod fragment;
mod lower;
mod name;
mod operation;
mod selection;
mod syntax_error;
mod type_ref;
mod value;

pub use directive_annotation::DirectiveAnnotation;
pub use executable_document::ExecutableDefinition;
pub use executable_document::ExecutableDocument;
pub use executable_document::NonExecutableDefinition;
pub use fragment::FragmentDefinition;
pub use fragment::FragmentSpread;
pub use fragment::InlineFragment;
pub use name::Name;
pub use operation::Operation;
pub use operation::OperationKind;
pub use operation::VariableDefinition;
pub use selection::Field;
pub use selection::Selection;
pub use selection::SelectionSet;
pub use syntax_error::SyntaxError;
pub use type_ref::TypeRef;
pub use value::Argument;
pub use value::ObjectField;
pub use value::Value;
pub use value::ValueKind;
