//! Schema-aware editing assistance for GraphQL documents.
//!
//! Two independent entry points are provided:
//!
//! - [`hint::complete()`] resolves the type context at the cursor from a
//!   chain of [`ParserState`]s and produces ranked completion candidates.
//! - [`lint::lint()`] parses a document and converts syntax and validation
//!   failures into positioned [`lint::Diagnostic`]s.
//!
//! Both are pure functions of their inputs; every call takes the [`Schema`]
//! it should consult explicitly.

mod ast;
mod byte_span;
pub mod context;
pub mod executable;
mod file_reader;
pub mod hint;
mod line_index;
pub mod lint;
pub mod loc;
pub mod ranking;
pub mod schema;
mod source_position;
mod source_span;
pub mod state;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use byte_span::ByteSpan;
pub use file_reader::ReadContentError;
pub use file_reader::read_content;
pub use line_index::LineIndex;
pub use schema::Schema;
pub use source_position::SourcePosition;
pub use source_span::SourceSpan;
pub use state::ParserState;
pub use state::StateKind;
