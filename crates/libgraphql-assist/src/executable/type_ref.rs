use crate::ByteSpan;
use crate::executable::Name;

/// A type reference in a variable definition, e.g. `[ID!]!`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TypeRef {
    List {
        inner: Box<TypeRef>,
        span: ByteSpan,
    },
    Named(Name),
    NonNull {
        inner: Box<TypeRef>,
        span: ByteSpan,
    },
}
impl TypeRef {
    /// The name at the bottom of every list and non-null wrapper.
    pub fn innermost_name(&self) -> &Name {
        match self {
            Self::List { inner, .. } | Self::NonNull { inner, .. } =>
                inner.innermost_name(),
            Self::Named(name) => name,
        }
    }

    pub fn span(&self) -> ByteSpan {
        match self {
            Self::List { span, .. } | Self::NonNull { span, .. } => *span,
            Self::Named(name) => name.span,
        }
    }
}
impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List { inner, .. } => write!(f, "[{inner}]"),
            Self::Named(name) => write!(f, "{name}"),
            Self::NonNull { inner, .. } => write!(f, "{inner}!"),
        }
    }
}
