use crate::ast;
use crate::loc;
use crate::schema::Schema;
use crate::types::GraphQLType;
use std::path::Path;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions) defined
/// within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) members: Vec<String>,
    pub(crate) name: String,
}
impl UnionType {
    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        def: &ast::schema::UnionType,
    ) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::from_pos(file_path, def.position),
            description: def.description.to_owned(),
            members: vec![],
            name: def.name.to_string(),
        }
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The member types of this union, in declaration order.
    pub fn members<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Vec<&'schema GraphQLType> {
        self.members
            .iter()
            .filter_map(|member_name| schema.lookup_type(member_name))
            .collect()
    }

    pub fn member_names(&self) -> &Vec<String> {
        &self.members
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
