use crate::ast;
use crate::loc;
use crate::types::InputField;
use indexmap::IndexMap;
use std::path::Path;

/// Represents an
/// [input object type](https://spec.graphql.org/October2021/#sec-Input-Objects)
/// defined within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) fields: IndexMap<String, InputField>,
    pub(crate) name: String,
}
impl InputObjectType {
    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        def: &ast::schema::InputObjectType,
    ) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::from_pos(file_path, def.position),
            description: def.description.to_owned(),
            fields: IndexMap::new(),
            name: def.name.to_string(),
        }
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn fields(&self) -> &IndexMap<String, InputField> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
