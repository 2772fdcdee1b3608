use crate::LineIndex;
use crate::SourceSpan;
use crate::executable::SyntaxError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticCategory {
    /// The document failed to parse.
    Syntax,
    /// The document parsed but is invalid against the schema.
    Validation,
}
impl std::fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Syntax => "syntax",
            Self::Validation => "validation",
        })
    }
}

/// Every diagnostic is currently reported as an error.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
}

/// A message attached to a span of the document.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct Diagnostic {
    pub(crate) category: DiagnosticCategory,
    pub(crate) message: String,
    pub(crate) severity: Severity,
    pub(crate) span: SourceSpan,
}
impl Diagnostic {
    pub(crate) fn from_syntax_error(err: &SyntaxError, line_index: &LineIndex<'_>) -> Self {
        Self {
            category: DiagnosticCategory::Syntax,
            message: err.to_string(),
            severity: Severity::Error,
            span: line_index.span(err.span()),
        }
    }

    pub fn category(&self) -> DiagnosticCategory {
        self.category
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn span(&self) -> &SourceSpan {
        &self.span
    }
}
impl std::fmt::Display for Diagnostic {
    /// `line:col: category error: message`, with 1-based line and column.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let start = &self.span.start_inclusive;
        write!(
            f,
            "{}:{}: {} error: {}",
            start.line() + 1,
            start.col_utf8() + 1,
            self.category,
            self.message,
        )
    }
}
