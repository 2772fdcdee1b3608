//! Reconstruction of the type information at a cursor from its
//! [`ParserState`](crate::state::ParserState) chain.

mod context_type;
mod resolve;
mod type_context;

pub use context_type::ContextType;
pub use resolve::resolve_context;
pub use resolve::resolve_field;
pub use type_context::TypeContext;
