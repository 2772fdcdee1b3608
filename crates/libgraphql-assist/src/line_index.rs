use crate::ByteSpan;
use crate::SourcePosition;
use crate::SourceSpan;

/// Maps byte offsets within a document to line/column [`SourcePosition`]s.
///
/// `\n`, `\r\n`, and a lone `\r` each terminate a line, matching the
/// GraphQL definition of a `LineTerminator`.
#[derive(Clone, Debug)]
pub struct LineIndex<'src> {
    line_starts: Vec<usize>,
    source: &'src str,
}

impl<'src> LineIndex<'src> {
    pub fn new(source: &'src str) -> Self {
        let bytes = source.as_bytes();
        let mut line_starts = vec![0];
        let mut idx = 0;
        while idx < bytes.len() {
            match bytes[idx] {
                b'\r' if bytes.get(idx + 1) == Some(&b'\n') => {
                    line_starts.push(idx + 2);
                    idx += 2;
                    continue;
                },
                b'\r' | b'\n' => line_starts.push(idx + 1),
                _ => (),
            }
            idx += 1;
        }

        Self {
            line_starts,
            source,
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Resolve `byte_offset` to a [`SourcePosition`].
    ///
    /// Offsets past the end of the document clamp to the end; offsets inside
    /// a multi-byte character snap back to the start of that character.
    pub fn position(&self, byte_offset: usize) -> SourcePosition {
        let mut offset = byte_offset.min(self.source.len());
        while !self.source.is_char_boundary(offset) {
            offset -= 1;
        }

        let line = self.line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let line_text = &self.source[self.line_starts[line]..offset];

        SourcePosition::new(
            line,
            line_text.chars().count(),
            line_text.encode_utf16().count(),
            offset,
        )
    }

    /// Resolve a 0-based `line` and UTF-8 `col` to a byte offset, clamping to
    /// the end of the line (or document).
    pub fn offset_of(&self, line: usize, col: usize) -> usize {
        let Some(&line_start) = self.line_starts.get(line) else {
            return self.source.len();
        };
        let line_end = self.line_starts
            .get(line + 1)
            .copied()
            .unwrap_or(self.source.len());

        self.source[line_start..line_end]
            .char_indices()
            .nth(col)
            .map(|(idx, _)| line_start + idx)
            .unwrap_or(line_end)
    }

    pub fn span(&self, span: ByteSpan) -> SourceSpan {
        SourceSpan::new(self.position(span.start), self.position(span.end))
    }
}
