use crate::ast;
use crate::loc;
use crate::types::DeprecationState;
use crate::types::TypeAnnotation;
use std::path::Path;

/// An argument declared on a [`Field`](crate::types::Field) or a
/// [`Directive`](crate::types::Directive).
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) default_value: Option<String>,
    pub(crate) deprecation_state: DeprecationState,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Parameter {
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

    /// The default value, printed as GraphQL source text.
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    pub fn deprecation_state(&self) -> &DeprecationState {
        &self.deprecation_state
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// A parameter must be provided when it is non-null and has no default.
    pub fn is_required(&self) -> bool {
        !self.type_annotation.nullable() && self.default_value.is_none()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
