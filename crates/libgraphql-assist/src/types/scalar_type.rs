use crate::ast;
use crate::loc;
use std::path::Path;

/// Represents a custom
/// [scalar type](https://spec.graphql.org/October2021/#sec-Scalars) defined
/// within some [`Schema`](crate::schema::Schema).
///
/// The five built-in scalars are not [`ScalarType`]s; they have their own
/// [`GraphQLType`](crate::types::GraphQLType) variants.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
}
impl ScalarType {
    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        def: &ast::schema::ScalarType,
    ) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::from_pos(file_path, def.position),
            description: def.description.to_owned(),
            name: def.name.to_string(),
        }
    }

    /// The [loc::SchemaDefLocation] indicating where this [ScalarType] was
    /// defined within the schema.
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    /// The description of this [`ScalarType`] as defined in the schema
    /// (e.g. in a """-string immediately before the type definition).
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
