mod introspection;
mod schema;
pub(crate) mod schema_builder;
mod type_validation_error;

pub(crate) use introspection::MetaFields;
pub use schema::Schema;
pub use schema_builder::GraphQLOperationType;
pub use schema_builder::NamedTypeDefLocation;
pub use schema_builder::SchemaBuilder;
pub use schema_builder::SchemaBuildError;
pub use type_validation_error::TypeValidationError;

#[cfg(test)]
mod tests;
