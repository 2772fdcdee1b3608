use crate::types::GraphQLType;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum GraphQLTypeKind {
    Bool,
    Enum,
    Float,
    ID,
    InputObject,
    Int,
    Interface,
    Object,
    Scalar,
    String,
    Union,
}
impl GraphQLTypeKind {
    pub fn name(&self) -> &str {
        match self {
            Self::Bool => "Boolean",
            Self::Enum => "Enum",
            Self::Float => "Float",
            Self::ID => "ID",
            Self::InputObject => "InputObject",
            Self::Int => "Int",
            Self::Interface => "Interface",
            Self::Object => "Object",
            Self::Scalar => "Scalar",
            Self::String => "String",
            Self::Union => "Union",
        }
    }

    /// Interfaces and unions: types whose runtime value is one of several
    /// concrete object types.
    pub fn is_abstract(&self) -> bool {
        matches!(self, Self::Interface | Self::Union)
    }

    /// Types that can carry a selection set.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Interface | Self::Object | Self::Union)
    }

    /// Types that may appear as the type of an argument, input field, or
    /// variable.
    pub fn is_input_type(&self) -> bool {
        !self.is_composite()
    }

    /// Types that terminate a selection (scalars and enums).
    pub fn is_leaf(&self) -> bool {
        !matches!(
            self,
            Self::InputObject | Self::Interface | Self::Object | Self::Union,
        )
    }
}
impl std::convert::From<&GraphQLType> for GraphQLTypeKind {
    fn from(value: &GraphQLType) -> Self {
        match value {
            GraphQLType::Bool => GraphQLTypeKind::Bool,
            GraphQLType::Enum(_) => GraphQLTypeKind::Enum,
            GraphQLType::Float => GraphQLTypeKind::Float,
            GraphQLType::ID => GraphQLTypeKind::ID,
            GraphQLType::InputObject(_) => GraphQLTypeKind::InputObject,
            GraphQLType::Int => GraphQLTypeKind::Int,
            GraphQLType::Interface(_) => GraphQLTypeKind::Interface,
            GraphQLType::Object(_) => GraphQLTypeKind::Object,
            GraphQLType::Scalar(_) => GraphQLTypeKind::Scalar,
            GraphQLType::String => GraphQLTypeKind::String,
            GraphQLType::Union(_) => GraphQLTypeKind::Union,
        }
    }
}
