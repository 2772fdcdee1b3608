use crate::hint::CandidateEntry;

/// Ranked suggestions for a cursor and the byte range of the source they
/// replace.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Completions<'schema> {
    pub(crate) candidates: Vec<CandidateEntry<'schema>>,
    pub(crate) replace_from: usize,
    pub(crate) replace_to: usize,
}
impl<'schema> Completions<'schema> {
    /// The suggestions, best first.
    pub fn candidates(&self) -> &[CandidateEntry<'schema>] {
        self.candidates.as_slice()
    }

    pub fn candidate_texts(&self) -> Vec<&'schema str> {
        self.candidates.iter().map(|candidate| candidate.text).collect()
    }

    pub fn replace_from(&self) -> usize {
        self.replace_from
    }

    pub fn replace_to(&self) -> usize {
        self.replace_to
    }
}
