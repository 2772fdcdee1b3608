//! The editor-side parse state: a backward-linked chain of [`ParserState`]s,
//! one per nested grammatical production enclosing the cursor.

mod parser_state;
mod state_frame;
mod state_kind;

pub use parser_state::ParserState;
pub use state_frame::StateFrame;
pub use state_frame::with_state_chain;
pub use state_kind::StateKind;
