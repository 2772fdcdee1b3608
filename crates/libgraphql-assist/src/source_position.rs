/// A resolved position inside a document.
///
/// **All values are 0-based.** `col_utf8` counts characters from the start
/// of the line, `col_utf16` counts UTF-16 code units (what most editors and
/// LSP clients call "character"), and `byte_offset` is relative to the start
/// of the whole document.
///
/// For ASCII text both columns are equal.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub struct SourcePosition {
    line: usize,
    col_utf8: usize,
    col_utf16: usize,
    byte_offset: usize,
}

impl SourcePosition {
    pub fn new(
        line: usize,
        col_utf8: usize,
        col_utf16: usize,
        byte_offset: usize,
    ) -> Self {
        Self {
            line,
            col_utf8,
            col_utf16,
            byte_offset,
        }
    }

    /// The 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// The 0-based character count within the line.
    pub fn col_utf8(&self) -> usize {
        self.col_utf8
    }

    /// The 0-based UTF-16 code unit offset within the line.
    pub fn col_utf16(&self) -> usize {
        self.col_utf16
    }

    /// The 0-based byte offset from the start of the document.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }
}
