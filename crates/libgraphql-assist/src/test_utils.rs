use crate::schema::Schema;
use crate::schema::SchemaBuilder;

pub(crate) const BLOG_SCHEMA_SDL: &str = include_str!("../fixtures/blog.graphql");

/// A small schema with an interface and a union, for exercising abstract
/// types.
pub(crate) const NODE_SCHEMA_SDL: &str = r#"
interface Node { id: ID! }
type A implements Node { id: ID! a: String }
type B implements Node { id: ID! b: String }
type C { id: ID! }
union SearchResult = A | C
type Query {
  node(id: ID!): Node
  search(term: String!): [SearchResult!]!
}
type Mutation { touch(id: ID!): Node }
type Subscription { nodeChanged: Node }
directive @cached(ttl: Int = 60) on QUERY | FIELD
directive @trace on FRAGMENT_SPREAD | INLINE_FRAGMENT
"#;

pub(crate) fn blog_schema() -> Schema {
    SchemaBuilder::new()
        .load_str(Some("blog.graphql".into()), BLOG_SCHEMA_SDL)
        .and_then(SchemaBuilder::build)
        .expect("blog schema builds")
}

pub(crate) fn node_schema() -> Schema {
    SchemaBuilder::new()
        .load_str(Some("node.graphql".into()), NODE_SCHEMA_SDL)
        .and_then(SchemaBuilder::build)
        .expect("node schema builds")
}
