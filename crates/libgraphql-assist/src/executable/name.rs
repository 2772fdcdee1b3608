use crate::ByteSpan;

/// An identifier and where it appears.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Name {
    pub(crate) span: ByteSpan,
    pub(crate) value: String,
}
impl Name {
    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn value(&self) -> &str {
        self.value.as_str()
    }
}
impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.value.as_str())
    }
}
