//! Schema-aware completion at a cursor.
//!
//! [`complete()`] classifies the innermost [`ParserState`](crate::ParserState)
//! into a [`GrammarPosition`], resolves the surrounding
//! [`TypeContext`](crate::context::TypeContext), collects the candidates that
//! position allows and ranks them against the token being typed.

mod candidate_entry;
mod collectors;
mod complete;
mod completions;
mod cursor_token;
mod grammar_position;

pub use candidate_entry::CandidateEntry;
pub use complete::complete;
pub use completions::Completions;
pub use cursor_token::CursorToken;
pub use grammar_position::GrammarPosition;

#[cfg(test)]
mod tests;
