use crate::lint::SourceNode;

/// One rule violation, possibly involving several parts of the document.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValidationError {
    pub(crate) message: String,
    pub(crate) nodes: Vec<SourceNode>,
}
impl ValidationError {
    pub fn new(message: impl Into<String>, nodes: Vec<SourceNode>) -> Self {
        Self {
            message: message.into(),
            nodes,
        }
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    pub fn nodes(&self) -> &[SourceNode] {
        self.nodes.as_slice()
    }
}
