use crate::context::ContextType;
use crate::ranking::RankedText;

/// One completion suggestion.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CandidateEntry<'schema> {
    pub(crate) text: &'schema str,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub(crate) type_: Option<ContextType<'schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<&'schema str>,
}
impl<'schema> CandidateEntry<'schema> {
    /// The text to insert.
    pub fn text(&self) -> &'schema str {
        self.text
    }

    /// The type of the suggested field, argument or value, if it has one.
    pub fn type_(&self) -> Option<ContextType<'schema>> {
        self.type_
    }

    pub fn description(&self) -> Option<&'schema str> {
        self.description
    }
}
impl RankedText for CandidateEntry<'_> {
    fn ranked_text(&self) -> &str {
        self.text
    }
}
