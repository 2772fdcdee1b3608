use crate::ast;
use crate::loc;
use crate::types::DeprecationState;
use crate::types::TypeAnnotation;
use std::path::Path;

/// Represents an
/// [input field](https://spec.graphql.org/October2021/#InputFieldsDefinition)
/// defined on an [`InputObjectType`](crate::types::InputObjectType).
#[derive(Clone, Debug, PartialEq)]
pub struct InputField {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) default_value: Option<String>,
    pub(crate) deprecation_state: DeprecationState,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl InputField {
    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        input_val: &ast::schema::InputValue,
    ) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::from_pos(file_path, input_val.position),
            default_value: input_val.default_value.as_ref().map(|val| val.to_string()),
            deprecation_state: DeprecationState::from_ast(&input_val.directives),
            description: input_val.description.to_owned(),
            name: input_val.name.to_string(),
            type_annotation: TypeAnnotation::from_ast_type(&input_val.value_type),
        }
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
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

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
