use crate::schema::MetaFields;
use crate::schema::SchemaBuilder;
use crate::types::Directive;
use crate::types::Field;
use crate::types::GraphQLType;
use indexmap::IndexMap;

/// Represents a fully typechecked and immutable GraphQL schema.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) directive_defs: IndexMap<String, Directive>,
    pub(crate) meta_fields: MetaFields,
    pub(crate) mutation_type: Option<String>,
    pub(crate) query_type: String,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    /// Returns an [`IndexMap<String, Directive>`] containing all directives
    /// defined within this [`Schema`].
    ///
    /// [^note] This map includes both directives defined while building this
    /// [`Schema`] as well as implicitly-defined, built-in directives like
    /// `@deprecated`.
    pub fn all_directives(&self) -> &IndexMap<String, Directive> {
        &self.directive_defs
    }

    /// Returns an [`IndexMap<String, GraphQLType>`] containing all types
    /// defined within this [`Schema`].
    ///
    /// [^note] This map includes both types defined while building this
    /// [`Schema`] as well as implicitly-defined, built-in types like
    /// [`GraphQLType::Bool`] and the introspection types (`__Schema`,
    /// `__Type`, ...). Built-in scalars come first, then types in the order
    /// they were loaded, then the introspection types.
    pub fn all_types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Whether `graphql_type` is this schema's Query root operation type.
    pub fn is_query_type(&self, graphql_type: &GraphQLType) -> bool {
        graphql_type.name() == self.query_type
    }

    pub fn lookup_directive(&self, name: &str) -> Option<&Directive> {
        self.directive_defs.get(name)
    }

    pub fn lookup_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    /// Returns this [`Schema`]'s Mutation root operation type (if one was
    /// defined).
    ///
    /// GraphQL [defines an object type named "Mutation" as the _default_
    /// Mutation type](https://spec.graphql.org/October2021/#sec-Root-Operation-Types.Default-Root-Operation-Type-Names),
    /// but a `schema { ... }` block may name a different type; this accessor
    /// factors in any such override.
    pub fn mutation_type(&self) -> Option<&GraphQLType> {
        self.mutation_type
            .as_ref()
            .and_then(|type_name| self.types.get(type_name.as_str()))
    }

    /// Returns this [`Schema`]'s Query root operation type, honoring any
    /// `schema { query: ... }` override.
    pub fn query_type(&self) -> &GraphQLType {
        // SchemaBuilder::build() refuses to produce a Schema whose query type
        // is missing from the types map.
        &self.types[self.query_type.as_str()]
    }

    /// Returns this [`Schema`]'s Subscription root operation type (if one was
    /// defined), honoring any `schema { subscription: ... }` override.
    pub fn subscription_type(&self) -> Option<&GraphQLType> {
        self.subscription_type
            .as_ref()
            .and_then(|type_name| self.types.get(type_name.as_str()))
    }

    /// The `__schema: __Schema!` meta field, selectable on the query root.
    pub fn schema_meta_field_def(&self) -> &Field {
        &self.meta_fields.schema
    }

    /// The `__type(name: String!): __Type` meta field, selectable on the
    /// query root.
    pub fn type_meta_field_def(&self) -> &Field {
        &self.meta_fields.type_
    }

    /// The `__typename: String!` meta field, selectable on every composite
    /// type.
    pub fn typename_meta_field_def(&self) -> &Field {
        &self.meta_fields.typename
    }
}
