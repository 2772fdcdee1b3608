use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::TypeAnnotation;

/// The type a position in a document is known to have.
///
/// Operation roots and fragment type conditions name a [`GraphQLType`]
/// directly; fields, arguments and input fields carry a (possibly wrapped)
/// [`TypeAnnotation`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ContextType<'schema> {
    Annotated(&'schema TypeAnnotation),
    Named(&'schema GraphQLType),
}
impl<'schema> ContextType<'schema> {
    pub fn as_annotation(&self) -> Option<&'schema TypeAnnotation> {
        match self {
            Self::Annotated(annot) => Some(annot),
            Self::Named(_) => None,
        }
    }

    /// The named type underneath every list and non-null wrapper.
    pub fn named_type(&self, schema: &'schema Schema) -> Option<&'schema GraphQLType> {
        match self {
            Self::Annotated(annot) => annot.innermost_named_type(schema),
            Self::Named(graphql_type) => Some(graphql_type),
        }
    }

    /// The element type if this is a list type. Nullability of the list
    /// itself does not matter.
    pub fn list_element_type(&self) -> Option<ContextType<'schema>> {
        self.as_annotation()
            .and_then(TypeAnnotation::list_element_type)
            .map(ContextType::Annotated)
    }
}
impl<'schema> std::convert::From<&'schema GraphQLType> for ContextType<'schema> {
    fn from(value: &'schema GraphQLType) -> Self {
        Self::Named(value)
    }
}
impl<'schema> std::convert::From<&'schema TypeAnnotation> for ContextType<'schema> {
    fn from(value: &'schema TypeAnnotation) -> Self {
        Self::Annotated(value)
    }
}
impl std::fmt::Display for ContextType<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Annotated(annot) => write!(f, "{annot}"),
            Self::Named(graphql_type) => f.write_str(graphql_type.name()),
        }
    }
}
impl serde::Serialize for ContextType<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
