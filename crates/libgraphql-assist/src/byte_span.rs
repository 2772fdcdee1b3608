/// Half-open interval `[start, end)` of byte offsets into a document's
/// source text. Both offsets are 0-based.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub struct ByteSpan {
    /// Byte offset of the first byte covered by this span (inclusive).
    pub start: usize,
    /// Byte offset one past the last byte covered by this span (exclusive).
    pub end: usize,
}

impl ByteSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A zero-width span sitting at `offset`.
    pub fn empty_at(offset: usize) -> Self {
        Self { start: offset, end: offset }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Borrow the text covered by this span, or `None` if the span does not
    /// fall on char boundaries of `source`.
    pub fn text<'src>(&self, source: &'src str) -> Option<&'src str> {
        source.get(self.start..self.end)
    }
}
