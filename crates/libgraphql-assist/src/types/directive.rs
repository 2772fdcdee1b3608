use crate::ast;
use crate::loc;
use crate::types::DirectiveLocation;
use crate::types::Parameter;
use indexmap::IndexMap;
use std::path::Path;

/// Represents a defined directive (either built-in or declared with
/// `directive @name ... on ...` in the schema).
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) locations: Vec<DirectiveLocation>,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, Parameter>,
    pub(crate) repeatable: bool,
}
impl Directive {
    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        def: &ast::schema::DirectiveDefinition,
    ) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::from_pos(file_path, def.position),
            description: def.description.to_owned(),
            locations: def.locations
                .iter()
                .filter_map(|location| DirectiveLocation::from_name(location.as_str()))
                .collect(),
            name: def.name.to_string(),
            parameters: def.arguments.iter().map(|input_val| (
                input_val.name.to_string(),
                Parameter::from_ast(file_path, input_val),
            )).collect(),
            repeatable: def.repeatable,
        }
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_builtin(&self) -> bool {
        self.def_location.is_builtin()
    }

    pub fn is_repeatable(&self) -> bool {
        self.repeatable
    }

    pub fn locations(&self) -> &Vec<DirectiveLocation> {
        &self.locations
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Whether this directive may annotate a field selection.
    pub fn on_field(&self) -> bool {
        self.locations.contains(&DirectiveLocation::Field)
    }

    /// Whether this directive may annotate a fragment definition, a fragment
    /// spread, or an inline fragment.
    pub fn on_fragment(&self) -> bool {
        self.locations.iter().any(|location| matches!(
            location,
            DirectiveLocation::FragmentDefinition
                | DirectiveLocation::FragmentSpread
                | DirectiveLocation::InlineFragment,
        ))
    }

    /// Whether this directive may annotate a query, mutation, or subscription
    /// operation.
    pub fn on_operation(&self) -> bool {
        self.locations.iter().any(|location| matches!(
            location,
            DirectiveLocation::Query
                | DirectiveLocation::Mutation
                | DirectiveLocation::Subscription,
        ))
    }

    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }
}
