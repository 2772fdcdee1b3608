use crate::ByteSpan;
use crate::SourcePosition;

/// A span of document text from `start_inclusive` up to (but not including)
/// `end_exclusive`.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct SourceSpan {
    pub start_inclusive: SourcePosition,
    pub end_exclusive: SourcePosition,
}

impl SourceSpan {
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
        }
    }

    /// Discard line/column information and keep only the byte offsets.
    pub fn byte_span(&self) -> ByteSpan {
        ByteSpan::new(
            self.start_inclusive.byte_offset(),
            self.end_exclusive.byte_offset(),
        )
    }
}
