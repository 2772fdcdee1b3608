/// The lexical token under the cursor, as reported by the editor's
/// tokenizer. `start` and `end` are byte offsets into the document.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CursorToken {
    pub text: String,
    pub start: usize,
    pub end: usize,
}
impl CursorToken {
    pub fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }

    /// Whether the token is whitespace between other tokens (or empty).
    pub fn is_whitespace(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// The text to rank candidates against. Whitespace has none.
    pub fn partial_text(&self) -> &str {
        if self.is_whitespace() {
            ""
        } else {
            self.text.as_str()
        }
    }

    /// Where an accepted candidate starts replacing source text.
    ///
    /// Completing after whitespace inserts at the token's end. A token that
    /// begins with punctuation (`@`, `$`, `(`, ...) keeps its first char.
    pub fn replace_from(&self) -> usize {
        match self.text.chars().next() {
            _ if self.is_whitespace() => self.end,
            Some(first) if first.is_ascii_alphanumeric() || first == '_' => self.start,
            Some(first) => (self.start + first.len_utf8()).min(self.end),
            None => self.end,
        }
    }
}
