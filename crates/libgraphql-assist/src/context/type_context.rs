use crate::context::ContextType;
use crate::types::Directive;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputField;
use crate::types::Parameter;
use indexmap::IndexMap;

/// Everything known about the types surrounding a cursor.
///
/// Produced by [`resolve_context()`](crate::context::resolve_context). Every
/// member borrows from the [`Schema`](crate::Schema) it was resolved against;
/// an absent member means that part of the context could not be determined.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TypeContext<'schema> {
    pub(crate) arg_def: Option<&'schema Parameter>,
    pub(crate) arg_defs: Option<&'schema IndexMap<String, Parameter>>,
    pub(crate) directive_def: Option<&'schema Directive>,
    pub(crate) field_def: Option<&'schema Field>,
    pub(crate) input_type: Option<ContextType<'schema>>,
    pub(crate) object_field_defs: Option<&'schema IndexMap<String, InputField>>,
    pub(crate) parent_type: Option<&'schema GraphQLType>,
    pub(crate) type_: Option<ContextType<'schema>>,
}
impl<'schema> TypeContext<'schema> {
    /// The argument currently being written.
    pub fn arg_def(&self) -> Option<&'schema Parameter> {
        self.arg_def
    }

    /// Arguments of the field or directive whose argument list encloses the
    /// cursor.
    pub fn arg_defs(&self) -> Option<&'schema IndexMap<String, Parameter>> {
        self.arg_defs
    }

    pub fn directive_def(&self) -> Option<&'schema Directive> {
        self.directive_def
    }

    pub fn field_def(&self) -> Option<&'schema Field> {
        self.field_def
    }

    /// The type expected of the input value being written.
    pub fn input_type(&self) -> Option<ContextType<'schema>> {
        self.input_type
    }

    /// Fields of the input object literal being written.
    pub fn object_field_defs(&self) -> Option<&'schema IndexMap<String, InputField>> {
        self.object_field_defs
    }

    /// The named type of the innermost enclosing selection set.
    pub fn parent_type(&self) -> Option<&'schema GraphQLType> {
        self.parent_type
    }

    /// The type of the innermost enclosing operation, fragment or field.
    pub fn type_(&self) -> Option<ContextType<'schema>> {
        self.type_
    }
}
