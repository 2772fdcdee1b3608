use crate::ast;
use crate::loc;
use crate::types::EnumValue;
use indexmap::IndexMap;
use std::path::Path;

/// Represents an
/// [enum type](https://spec.graphql.org/October2021/#sec-Enums) defined
/// within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) values: IndexMap<String, EnumValue>,
}
impl EnumType {
    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        def: &ast::schema::EnumType,
    ) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::from_pos(file_path, def.position),
            description: def.description.to_owned(),
            name: def.name.to_string(),
            values: IndexMap::new(),
        }
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The values of this enum in schema definition order.
    pub fn values(&self) -> &IndexMap<String, EnumValue> {
        &self.values
    }
}
