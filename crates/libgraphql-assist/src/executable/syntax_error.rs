use crate::ByteSpan;
use apollo_parser::Lexer;
use apollo_parser::TokenKind;

/// The first syntax error in a document.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("Syntax Error: Unexpected {unexpected} ({reason})")]
pub struct SyntaxError {
    pub(crate) reason: String,
    pub(crate) span: ByteSpan,
    pub(crate) unexpected: String,
}
impl SyntaxError {
    pub(crate) fn from_parse_error(source: &str, err: &apollo_parser::Error) -> Self {
        let (span, unexpected) = unexpected_token_at(source, err.index());
        Self {
            reason: err.message().to_string(),
            span,
            unexpected,
        }
    }

    /// What the parser did not expect to find, e.g. `Name "qeury"`.
    pub fn unexpected(&self) -> &str {
        self.unexpected.as_str()
    }

    /// The parser's own account of what went wrong.
    pub fn reason(&self) -> &str {
        self.reason.as_str()
    }

    /// The offending token.
    pub fn span(&self) -> ByteSpan {
        self.span
    }
}

/// Describe the first significant token ending after `offset`, or the end
/// of the document if there is none.
fn unexpected_token_at(source: &str, offset: usize) -> (ByteSpan, String) {
    for item in Lexer::new(source) {
        let (kind, data, index) = match &item {
            Ok(token) => (Some(token.kind()), token.data(), token.index()),
            Err(err) => (None, err.data(), err.index()),
        };
        if matches!(
            kind,
            Some(TokenKind::Whitespace | TokenKind::Comment | TokenKind::Comma),
        ) {
            continue;
        }
        let span = ByteSpan::new(index, index + data.len());
        if span.end > offset || kind == Some(TokenKind::Eof) {
            return (span, describe_token(kind, data));
        }
    }
    (ByteSpan::empty_at(source.len()), "<EOF>".to_string())
}

fn describe_token(kind: Option<TokenKind>, data: &str) -> String {
    match kind {
        Some(TokenKind::Eof) => "<EOF>".to_string(),
        Some(TokenKind::Float) => format!("Float \"{data}\""),
        Some(TokenKind::Int) => format!("Int \"{data}\""),
        Some(TokenKind::Name) => format!("Name \"{data}\""),
        Some(TokenKind::StringValue) => format!("String {data}"),
        _ => format!("\"{data}\""),
    }
}
