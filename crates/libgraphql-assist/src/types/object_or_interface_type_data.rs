use crate::ast;
use crate::loc;
use crate::types::Field;
use crate::types::ObjectOrInterfaceType;
use indexmap::IndexMap;
use inherent::inherent;
use std::path::Path;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ObjectOrInterfaceTypeData {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) interfaces: Vec<String>,
    pub(crate) name: String,
}
impl ObjectOrInterfaceTypeData {
    /// Fields are not copied here: the
    /// [`SchemaBuilder`](crate::schema::SchemaBuilder) adds them one at a time
    /// so it can report duplicates.
    pub(crate) fn new(
        file_path: Option<&Path>,
        position: graphql_parser::Pos,
        name: &str,
        description: Option<&str>,
        interfaces: &[String],
    ) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::from_pos(file_path, position),
            description: description.map(str::to_string),
            fields: IndexMap::new(),
            interfaces: interfaces.to_vec(),
            name: name.to_string(),
        }
    }

    pub(crate) fn from_ast_object(
        file_path: Option<&Path>,
        def: &ast::schema::ObjectType,
    ) -> Self {
        Self::new(
            file_path,
            def.position,
            def.name.as_str(),
            def.description.as_deref(),
            &def.implements_interfaces,
        )
    }

    pub(crate) fn from_ast_interface(
        file_path: Option<&Path>,
        def: &ast::schema::InterfaceType,
    ) -> Self {
        Self::new(
            file_path,
            def.position,
            def.name.as_str(),
            def.description.as_deref(),
            &def.implements_interfaces,
        )
    }
}

#[inherent]
impl ObjectOrInterfaceType for ObjectOrInterfaceTypeData {
    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    pub fn interface_names(&self) -> &Vec<String> {
        &self.interfaces
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
