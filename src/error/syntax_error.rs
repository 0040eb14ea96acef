/// The different ways tokenizing or parsing can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// A numeric literal contained a second `.` or ended in `.`.
    InvalidNumericLiteral,
    /// A string literal had no closing `"`.
    UnterminatedString,
    /// A char literal had no closing `'`.
    UnterminatedChar,
    /// A char literal was written as `''`.
    EmptyCharLiteral,
    /// A char literal held more than one character.
    InvalidCharLiteral,
    /// The parser expected something else at this position.
    Expected(String),
    /// A literal zero was used as a divisor.
    DivisionByZero,
    /// An integer literal does not fit in 64 bits.
    LiteralTooLarge,
}

impl std::fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidNumericLiteral => write!(f, "invalid numeric literal"),
            Self::UnterminatedString => write!(f, "unterminated string literal"),
            Self::UnterminatedChar => write!(f, "unterminated char literal"),
            Self::EmptyCharLiteral => write!(f, "empty char literal"),
            Self::InvalidCharLiteral => write!(f, "invalid char literal"),
            Self::Expected(expected) => write!(f, "'{expected}'"),
            Self::DivisionByZero => write!(f, "'division by zero'"),
            Self::LiteralTooLarge => write!(f, "'integer literal too large'"),
        }
    }
}

/// A located syntax error.
///
/// `column` is zero-based and counts characters of `source_line`, so the
/// caret can be drawn by padding with `column` spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// What went wrong.
    pub kind:        SyntaxErrorKind,
    /// The 1-indexed source line.
    pub line:        usize,
    /// Caret position within `source_line`.
    pub column:      usize,
    /// The text of the offending line.
    pub source_line: String,
}

impl SyntaxError {
    #[must_use]
    pub fn new(kind: SyntaxErrorKind,
               line: usize,
               column: usize,
               source_line: impl Into<String>)
               -> Self {
        Self { kind,
               line,
               column,
               source_line: source_line.into() }
    }

    /// Returns the one-line message without the source snippet.
    ///
    /// ## Example
    /// ```
    /// use albus::error::{SyntaxError, SyntaxErrorKind};
    ///
    /// let err = SyntaxError::new(SyntaxErrorKind::Expected(";".to_string()), 3, 9, "let x = 5");
    /// assert_eq!(err.message(), "Syntax Error: ';' on line 3");
    /// ```
    #[must_use]
    pub fn message(&self) -> String {
        format!("Syntax Error: {} on line {}", self.kind, self.line)
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.source_line)?;
        writeln!(f, "{}^", " ".repeat(self.column))?;
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SyntaxError {}
