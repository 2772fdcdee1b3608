use crate::schema::Schema;
use crate::types::GraphQLType;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NamedTypeAnnotation {
    pub(crate) nullable: bool,
    pub(crate) type_name: String,
}
impl NamedTypeAnnotation {
    /// Look up the annotated type in `schema`.
    ///
    /// Annotations built by [`SchemaBuilder`](crate::schema::SchemaBuilder)
    /// always resolve against the [`Schema`] they belong to.
    pub fn graphql_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Option<&'schema GraphQLType> {
        schema.lookup_type(self.type_name.as_str())
    }

    pub fn graphql_type_name(&self) -> &str {
        self.type_name.as_str()
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }
}
