use crate::ast;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::ListTypeAnnotation;
use crate::types::NamedTypeAnnotation;

/// Represents the annotated type for a [`Field`](crate::types::Field),
/// [`InputField`](crate::types::InputField), or
/// [`Parameter`](crate::types::Parameter).
///
/// Non-null wrapping is folded into each layer's `nullable` flag, so
/// `[Int!]!` is a non-nullable list of non-nullable named `Int`s.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}
impl TypeAnnotation {
    /// Unwrap the [`ListTypeAnnotation`] if this annotation is one.
    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation> {
        if let Self::List(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Unwrap the [`NamedTypeAnnotation`] if this annotation is one.
    pub fn as_named_annotation(&self) -> Option<&NamedTypeAnnotation> {
        if let Self::Named(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    pub(crate) fn from_ast_type(ast_type: &ast::schema::Type) -> Self {
        Self::from_ast_type_impl(ast_type, /* nullable = */ true)
    }

    fn from_ast_type_impl(ast_type: &ast::schema::Type, nullable: bool) -> Self {
        match ast_type {
            graphql_parser::schema::Type::ListType(inner) =>
                Self::List(ListTypeAnnotation {
                    inner_type_annotation: Box::new(Self::from_ast_type_impl(
                        inner,
                        true,
                    )),
                    nullable,
                }),

            graphql_parser::schema::Type::NamedType(name) =>
                Self::Named(NamedTypeAnnotation {
                    nullable,
                    type_name: name.to_string(),
                }),

            graphql_parser::schema::Type::NonNullType(inner) =>
                Self::from_ast_type_impl(inner, false),
        }
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the inner-most
    /// [`NamedTypeAnnotation`] from it.
    pub fn innermost_named_type_annotation(&self) -> &NamedTypeAnnotation {
        match self {
            TypeAnnotation::List(ListTypeAnnotation { inner_type_annotation, .. })
                => inner_type_annotation.innermost_named_type_annotation(),
            TypeAnnotation::Named(named_annot)
                => named_annot,
        }
    }

    /// The [`GraphQLType`] at the bottom of every list layer.
    pub fn innermost_named_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Option<&'schema GraphQLType> {
        self.innermost_named_type_annotation().graphql_type(schema)
    }

    /// The element annotation if this is a list (of either nullability).
    pub fn list_element_type(&self) -> Option<&TypeAnnotation> {
        self.as_list_annotation()
            .map(|list_annot| list_annot.inner_type_annotation())
    }

    /// Indicates if this [`TypeAnnotation`] is [nullable or
    /// non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null).
    pub fn nullable(&self) -> bool {
        match self {
            TypeAnnotation::List(ListTypeAnnotation { nullable, .. }) => *nullable,
            TypeAnnotation::Named(NamedTypeAnnotation { nullable, .. }) => *nullable,
        }
    }
}
impl std::convert::From<ListTypeAnnotation> for TypeAnnotation {
    fn from(value: ListTypeAnnotation) -> Self {
        Self::List(value)
    }
}
impl std::convert::From<NamedTypeAnnotation> for TypeAnnotation {
    fn from(value: NamedTypeAnnotation) -> Self {
        Self::Named(value)
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeAnnotation::List(list_annot) =>
                write!(f, "[{}]", list_annot.inner_type_annotation)?,
            TypeAnnotation::Named(named_annot) =>
                write!(f, "{}", named_annot.type_name)?,
        }
        if !self.nullable() {
            write!(f, "!")?;
        }
        Ok(())
    }
}
