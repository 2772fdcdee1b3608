use crate::ast;
use crate::loc;
use crate::schema::Schema;
use crate::types::DeprecationState;
use crate::types::GraphQLType;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use std::path::Path;

/// Represents a defined field on an [`ObjectType`](crate::types::ObjectType)
/// or [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) deprecation_state: DeprecationState,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, Parameter>,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Field {
    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        field: &ast::schema::Field,
    ) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::from_pos(file_path, field.position),
            deprecation_state: DeprecationState::from_ast(&field.directives),
            description: field.description.to_owned(),
            name: field.name.to_string(),
            parameters: field.arguments.iter().map(|input_val| (
                input_val.name.to_string(),
                Parameter::from_ast(file_path, input_val),
            )).collect(),
            type_annotation: TypeAnnotation::from_ast_type(&field.field_type),
        }
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn deprecation_state(&self) -> &DeprecationState {
        &self.deprecation_state
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The arguments this field accepts, in declaration order.
    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }

    /// The innermost named type of this field's annotation.
    pub fn named_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Option<&'schema GraphQLType> {
        self.type_annotation.innermost_named_type(schema)
    }
}
