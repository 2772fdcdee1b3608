use crate::state::ParserState;
use crate::state::StateKind;

/// An owned, serializable description of one [`ParserState`].
///
/// A list of frames (outermost first) is how callers that cannot hand over
/// borrowed chains, such as the `graphql-assist` CLI reading JSON, describe
/// the parse state.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct StateFrame {
    pub kind: StateKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub step: usize,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
}
impl StateFrame {
    fn to_state<'a>(&self, prev: Option<&'a ParserState<'a>>) -> ParserState<'a> {
        ParserState {
            kind: self.kind,
            name: self.name.to_owned(),
            prev,
            step: self.step,
            type_name: self.type_name.to_owned(),
        }
    }
}
impl std::convert::From<&ParserState<'_>> for StateFrame {
    fn from(state: &ParserState<'_>) -> Self {
        Self {
            kind: state.kind,
            name: state.name.to_owned(),
            step: state.step,
            type_name: state.type_name.to_owned(),
        }
    }
}

/// Link `frames` (outermost first) into a [`ParserState`] chain and call `f`
/// with the innermost state. Returns `None` when `frames` is empty.
///
/// Each state lives on its own stack frame while the chain is borrowed.
pub fn with_state_chain<R>(
    frames: &[StateFrame],
    f: impl FnOnce(&ParserState<'_>) -> R,
) -> Option<R> {
    link_frames(frames, None, f)
}

fn link_frames<'a, R>(
    frames: &[StateFrame],
    prev: Option<&'a ParserState<'a>>,
    f: impl FnOnce(&ParserState<'_>) -> R,
) -> Option<R> {
    let (frame, rest) = frames.split_first()?;
    let state = frame.to_state(prev);
    if rest.is_empty() {
        Some(f(&state))
    } else {
        link_frames(rest, Some(&state), f)
    }
}
