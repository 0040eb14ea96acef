use crate::error::{SyntaxError, TypeError};

/// Which pipeline stage produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Raised by the lexer or the parser.
    Syntax,
    /// Raised by the evaluator.
    Type,
}

/// A rendering-agnostic description of a pipeline failure.
///
/// Both [`SyntaxError`] and [`TypeError`] convert into a `Diagnostic`, which is
/// what the crate-level [`run`](crate::run) returns. The host chooses how to
/// present it; the `Display` impl gives the default layout of source line,
/// caret and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind:        DiagnosticKind,
    pub message:     String,
    /// The 1-indexed source line.
    pub line:        usize,
    /// Zero-based caret column within `source_line`, when known.
    pub column:      Option<usize>,
    pub source_line: Option<String>,
}

impl From<SyntaxError> for Diagnostic {
    fn from(err: SyntaxError) -> Self {
        Self { kind:        DiagnosticKind::Syntax,
               message:     err.message(),
               line:        err.line,
               column:      Some(err.column),
               source_line: Some(err.source_line), }
    }
}

impl From<TypeError> for Diagnostic {
    fn from(err: TypeError) -> Self {
        Self { kind:        DiagnosticKind::Type,
               message:     err.to_string(),
               line:        err.line(),
               column:      None,
               source_line: None, }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(source_line) = &self.source_line {
            writeln!(f, "{source_line}")?;
            if let Some(column) = self.column {
                writeln!(f, "{}^", " ".repeat(column))?;
            }
        }
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Diagnostic {}
