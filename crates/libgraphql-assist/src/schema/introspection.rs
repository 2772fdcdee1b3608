use crate::loc;
use crate::types::DeprecationState;
use crate::types::Field;
use crate::types::NamedTypeAnnotation;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// Directives every schema supports without declaring them.
pub(crate) const BUILTIN_DIRECTIVES_SDL: &str = r#"
"Directs the executor to include this field or fragment only when the `if` argument is true."
directive @include(
  "Included when true."
  if: Boolean!
) on FIELD | FRAGMENT_SPREAD | INLINE_FRAGMENT

"Directs the executor to skip this field or fragment when the `if` argument is true."
directive @skip(
  "Skipped when true."
  if: Boolean!
) on FIELD | FRAGMENT_SPREAD | INLINE_FRAGMENT

"Marks an element of a GraphQL schema as no longer supported."
directive @deprecated(
  "Explains why this element was deprecated, usually also including a suggestion for how to access supported similar data."
  reason: String = "No longer supported"
) on FIELD_DEFINITION | ARGUMENT_DEFINITION | INPUT_FIELD_DEFINITION | ENUM_VALUE

"Exposes a URL that specifies the behavior of this scalar."
directive @specifiedBy(
  "The URL that specifies the behavior of this scalar."
  url: String!
) on SCALAR
"#;

/// The types reachable from the `__schema` and `__type` meta fields.
pub(crate) const INTROSPECTION_SDL: &str = r#"
"A GraphQL Schema defines the capabilities of a GraphQL server. It exposes all available types and directives on the server, as well as the entry points for query, mutation, and subscription operations."
type __Schema {
  description: String
  "A list of all types supported by this server."
  types: [__Type!]!
  "The type that query operations will be rooted at."
  queryType: __Type!
  "If this server supports mutation, the type that mutation operations will be rooted at."
  mutationType: __Type
  "If this server support subscription, the type that subscription operations will be rooted at."
  subscriptionType: __Type
  "A list of all directives supported by this server."
  directives: [__Directive!]!
}

"The fundamental unit of any GraphQL Schema is the type. There are many kinds of types in GraphQL as represented by the `__TypeKind` enum."
type __Type {
  kind: __TypeKind!
  name: String
  description: String
  specifiedByURL: String
  fields(includeDeprecated: Boolean = false): [__Field!]
  interfaces: [__Type!]
  possibleTypes: [__Type!]
  enumValues(includeDeprecated: Boolean = false): [__EnumValue!]
  inputFields(includeDeprecated: Boolean = false): [__InputValue!]
  ofType: __Type
}

"An enum describing what kind of type a given `__Type` is."
enum __TypeKind {
  "Indicates this type is a scalar."
  SCALAR
  "Indicates this type is an object. `fields` and `interfaces` are valid fields."
  OBJECT
  "Indicates this type is an interface. `fields`, `interfaces`, and `possibleTypes` are valid fields."
  INTERFACE
  "Indicates this type is a union. `possibleTypes` is a valid field."
  UNION
  "Indicates this type is an enum. `enumValues` is a valid field."
  ENUM
  "Indicates this type is an input object. `inputFields` is a valid field."
  INPUT_OBJECT
  "Indicates this type is a list. `ofType` is a valid field."
  LIST
  "Indicates this type is a non-null. `ofType` is a valid field."
  NON_NULL
}

"Object and Interface types are described by a list of Fields, each of which has a name, potentially a list of arguments, and a return type."
type __Field {
  name: String!
  description: String
  args(includeDeprecated: Boolean = false): [__InputValue!]!
  type: __Type!
  isDeprecated: Boolean!
  deprecationReason: String
}

"Arguments provided to Fields or Directives and the input fields of an InputObject are represented as Input Values which describe their type and optionally a default value."
type __InputValue {
  name: String!
  description: String
  type: __Type!
  "A GraphQL-formatted string representing the default value for this input value."
  defaultValue: String
  isDeprecated: Boolean!
  deprecationReason: String
}

"One possible value for a given Enum. Enum values are unique values, not a placeholder for a string or numeric value. However an Enum value is returned in a JSON response as a string."
type __EnumValue {
  name: String!
  description: String
  isDeprecated: Boolean!
  deprecationReason: String
}

"A Directive provides a way to describe alternate runtime execution and type validation behavior in a GraphQL document."
type __Directive {
  name: String!
  description: String
  isRepeatable: Boolean!
  locations: [__DirectiveLocation!]!
  args(includeDeprecated: Boolean = false): [__InputValue!]!
}

"A Directive can be adjacent to many parts of the GraphQL language, a __DirectiveLocation describes one such possible adjacencies."
enum __DirectiveLocation {
  QUERY
  MUTATION
  SUBSCRIPTION
  FIELD
  FRAGMENT_DEFINITION
  FRAGMENT_SPREAD
  INLINE_FRAGMENT
  VARIABLE_DEFINITION
  SCHEMA
  SCALAR
  OBJECT
  FIELD_DEFINITION
  ARGUMENT_DEFINITION
  INTERFACE
  UNION
  ENUM
  ENUM_VALUE
  INPUT_OBJECT
  INPUT_FIELD_DEFINITION
}
"#;

/// The implicit fields every selection may use: `__typename` on any
/// composite type, `__schema` and `__type` on the query root.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct MetaFields {
    pub(crate) schema: Field,
    pub(crate) type_: Field,
    pub(crate) typename: Field,
}
impl MetaFields {
    pub(crate) fn new() -> Self {
        let type_name_param = Parameter {
            def_location: loc::SchemaDefLocation::GraphQLBuiltIn,
            default_value: None,
            deprecation_state: DeprecationState::NotDeprecated,
            description: None,
            name: "name".to_string(),
            type_annotation: named_annotation("String", false),
        };

        Self {
            schema: meta_field(
                "__schema",
                "Access the current type schema of this server.",
                named_annotation("__Schema", false),
                IndexMap::new(),
            ),
            type_: meta_field(
                "__type",
                "Request the type information of a single type.",
                named_annotation("__Type", true),
                IndexMap::from([("name".to_string(), type_name_param)]),
            ),
            typename: meta_field(
                "__typename",
                "The name of the current Object type at runtime.",
                named_annotation("String", false),
                IndexMap::new(),
            ),
        }
    }
}

fn meta_field(
    name: &str,
    description: &str,
    type_annotation: TypeAnnotation,
    parameters: IndexMap<String, Parameter>,
) -> Field {
    Field {
        def_location: loc::SchemaDefLocation::GraphQLBuiltIn,
        deprecation_state: DeprecationState::NotDeprecated,
        description: Some(description.to_string()),
        name: name.to_string(),
        parameters,
        type_annotation,
    }
}

fn named_annotation(type_name: &str, nullable: bool) -> TypeAnnotation {
    TypeAnnotation::Named(NamedTypeAnnotation {
        nullable,
        type_name: type_name.to_string(),
    })
}
