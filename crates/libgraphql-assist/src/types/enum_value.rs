use crate::ast;
use crate::loc;
use crate::types::DeprecationState;
use std::path::Path;

/// Represents an
/// [enum value](https://spec.graphql.org/October2021/#sec-Enum-Value) defined
/// within a specific [`EnumType`](crate::types::EnumType).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) deprecation_state: DeprecationState,
    pub(crate) description: Option<String>,
    pub(crate) enum_type_name: String,
    pub(crate) name: String,
}
impl EnumValue {
    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        enum_type_name: &str,
        value: &ast::schema::EnumValue,
    ) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::from_pos(file_path, value.position),
            deprecation_state: DeprecationState::from_ast(&value.directives),
            description: value.description.to_owned(),
            enum_type_name: enum_type_name.to_string(),
            name: value.name.to_string(),
        }
    }

    /// The [`SchemaDefLocation`](loc::SchemaDefLocation) indicating where this
    /// [`EnumValue`] was defined within the schema.
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn deprecation_state(&self) -> &DeprecationState {
        &self.deprecation_state
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The name of the [`EnumType`](crate::types::EnumType) to which this
    /// value belongs.
    pub fn enum_type_name(&self) -> &str {
        self.enum_type_name.as_str()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
