use crate::loc;
use crate::schema::Schema;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLTypeKind;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use indexmap::IndexMap;

/// Represents a defined GraphQL type
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLType {
    Bool,
    Enum(EnumType),
    Float,
    ID,
    InputObject(InputObjectType),
    Int,
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    String,
    Union(UnionType),
}
impl GraphQLType {
    /// Borrow the [`EnumType`] if this is a [`GraphQLType::Enum`].
    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(enum_type) = self {
            Some(enum_type)
        } else {
            None
        }
    }

    /// Borrow the [`InputObjectType`] if this is a
    /// [`GraphQLType::InputObject`].
    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(inputobj_type) = self {
            Some(inputobj_type)
        } else {
            None
        }
    }

    /// Borrow the [`ObjectType`] if this is a [`GraphQLType::Object`].
    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(obj_type) = self {
            Some(obj_type)
        } else {
            None
        }
    }

    /// Borrow the [`UnionType`] if this is a [`GraphQLType::Union`].
    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(union_type) = self {
            Some(union_type)
        } else {
            None
        }
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        match self {
            GraphQLType::Bool
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::String =>
                &loc::SchemaDefLocation::GraphQLBuiltIn,
            GraphQLType::Enum(t) => t.def_location(),
            GraphQLType::InputObject(t) => t.def_location(),
            GraphQLType::Interface(t) => t.def_location(),
            GraphQLType::Object(t) => t.def_location(),
            GraphQLType::Scalar(t) => t.def_location(),
            GraphQLType::Union(t) => t.def_location(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            GraphQLType::Bool => Some(
                "The `Boolean` scalar type represents `true` or `false`.",
            ),
            GraphQLType::Float => Some(
                "The `Float` scalar type represents signed double-precision \
                fractional values as specified by \
                [IEEE 754](https://en.wikipedia.org/wiki/IEEE_floating_point).",
            ),
            GraphQLType::ID => Some(
                "The `ID` scalar type represents a unique identifier, often \
                used to refetch an object or as key for a cache. The ID type \
                appears in a JSON response as a String; however, it is not \
                intended to be human-readable. When expected as an input \
                type, any string (such as `\"4\"`) or integer (such as `4`) \
                input value will be accepted as an ID.",
            ),
            GraphQLType::Int => Some(
                "The `Int` scalar type represents non-fractional signed whole \
                numeric values. Int can represent values between -(2^31) and \
                2^31 - 1.",
            ),
            GraphQLType::String => Some(
                "The `String` scalar type represents textual data, represented \
                as UTF-8 character sequences. The String type is most often \
                used by GraphQL to represent free-form human-readable text.",
            ),
            GraphQLType::Enum(t) => t.description(),
            GraphQLType::InputObject(t) => t.description(),
            GraphQLType::Interface(t) => t.description(),
            GraphQLType::Object(t) => t.description(),
            GraphQLType::Scalar(t) => t.description(),
            GraphQLType::Union(t) => t.description(),
        }
    }

    /// The values of this type if it is an enum.
    pub fn enum_values(&self) -> Option<&IndexMap<String, EnumValue>> {
        self.as_enum().map(|enum_type| enum_type.values())
    }

    /// The fields of this type if it is an object or an interface.
    pub fn fields(&self) -> Option<&IndexMap<String, Field>> {
        match self {
            GraphQLType::Interface(t) => Some(t.fields()),
            GraphQLType::Object(t) => Some(t.fields()),
            _ => None,
        }
    }

    /// The input fields of this type if it is an input object.
    pub fn input_fields(&self) -> Option<&IndexMap<String, InputField>> {
        self.as_input_object().map(|inputobj_type| inputobj_type.fields())
    }

    pub fn is_abstract(&self) -> bool {
        self.kind().is_abstract()
    }

    pub fn is_composite(&self) -> bool {
        self.kind().is_composite()
    }

    pub fn is_input_type(&self) -> bool {
        self.kind().is_input_type()
    }

    pub fn is_leaf(&self) -> bool {
        self.kind().is_leaf()
    }

    pub fn kind(&self) -> GraphQLTypeKind {
        self.into()
    }

    pub fn name(&self) -> &str {
        match self {
            GraphQLType::Bool => "Boolean",
            GraphQLType::Float => "Float",
            GraphQLType::ID => "ID",
            GraphQLType::Int => "Int",
            GraphQLType::String => "String",
            GraphQLType::Enum(t) => t.name(),
            GraphQLType::InputObject(t) => t.name(),
            GraphQLType::Interface(t) => t.name(),
            GraphQLType::Object(t) => t.name(),
            GraphQLType::Scalar(t) => t.name(),
            GraphQLType::Union(t) => t.name(),
        }
    }

    /// The concrete object types a value of this type may have at runtime.
    ///
    /// An object type is its own only possible type, an interface's possible
    /// types are the object types that implement it, and a union's are its
    /// members. Non-composite types have none.
    pub fn possible_types<'schema>(
        &'schema self,
        schema: &'schema Schema,
    ) -> Vec<&'schema GraphQLType> {
        match self {
            GraphQLType::Object(_) => vec![self],

            GraphQLType::Interface(iface_type) => schema.all_types()
                .values()
                .filter(|t| t.as_object().is_some_and(|obj_type| {
                    obj_type.interface_names().iter().any(|iface_name| {
                        iface_name == iface_type.name()
                    })
                }))
                .collect(),

            GraphQLType::Union(union_type) => union_type.members(schema),

            _ => vec![],
        }
    }
}
