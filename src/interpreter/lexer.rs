use logos::Logos;

use crate::error::{SyntaxError, SyntaxErrorKind};

/// The kind of a lexical token.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized token kinds in the language. `BadToken`
/// and `Eof` are never matched from source directly; the lexer emits them for
/// unrecognized characters and at the end of input.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(extras = LexerExtras)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \r]+")]
pub enum TokenKind {
    /// `;`
    #[token(";")]
    SemiColon,
    /// `:`
    #[token(":")]
    Colon,
    /// `=`
    #[token("=")]
    SingleEquals,
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Modulo,
    /// `!`
    #[token("!")]
    Exclamation,
    /// `==`
    #[token("==")]
    DoubleEquals,
    /// `!=`
    #[token("!=")]
    NotEquals,
    /// `>`
    #[token(">")]
    GreaterThan,
    /// `<`
    #[token("<")]
    LessThan,
    /// `>=`
    #[token(">=")]
    GreaterThanEquals,
    /// `<=`
    #[token("<=")]
    LessThanEquals,

    /// Integer literals such as `42`.
    #[regex("[0-9]+")]
    Integer,
    /// Float literals such as `3.14`. Exactly one `.` with digits on both
    /// sides.
    #[regex(r"[0-9]+\.[0-9.]*", float_literal)]
    Float,
    /// Char literals such as `'a'`, quotes included.
    #[regex("'[^']*'", char_literal)]
    #[regex("'[^']*", unterminated_char)]
    Char,
    /// String literals such as `"hello"`, quotes included.
    #[regex(r#""[^"]*""#, string_literal)]
    #[regex(r#""[^"]*"#, unterminated_string)]
    String,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,

    /// Identifier tokens; a run of ASCII letters such as `x` or `total`.
    #[regex("[a-zA-Z]+")]
    Identifier,
    /// `let`
    #[token("let")]
    Let,
    /// `mut`
    #[token("mut")]
    Mut,
    /// `while`
    #[token("while")]
    While,
    /// `if`
    #[token("if")]
    If,

    /// A character no other rule accepts.
    BadToken,
    /// End of input.
    Eof,

    /// Line breaks. Counted, never emitted.
    #[token("\n", newline)]
    NewLine,
}

/// Fatal lexing failures reported by the token callbacks.
///
/// `UnrecognizedCharacter` is what logos produces when no rule matches; the
/// lexer turns it into a `BadToken` instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    #[default]
    UnrecognizedCharacter,
    /// `offset` is the byte position of the offending `.` within the literal.
    InvalidNumericLiteral {
        offset: usize,
    },
    UnterminatedString,
    UnterminatedChar,
    EmptyCharLiteral,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number and the byte offset where that line
/// starts, for caret placement in diagnostics.
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// A token together with the exact text it was scanned from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind:   TokenKind,
    /// The source text of the token. Empty for `Eof`.
    pub lexeme: String,
    /// The 1-indexed line the token starts on.
    pub line:   usize,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               line }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line {}: ^{}^  {:?}", self.line, self.lexeme, self.kind)
    }
}

/// Converts source text into tokens.
///
/// Whitespace (spaces, `\r`, `\n`) separates tokens and newlines advance the
/// line counter. Two-character operators win over their one-character
/// prefixes, so `==` is a single `DoubleEquals` while `= =` is two
/// `SingleEquals`. Characters no rule accepts become `BadToken`s, which the
/// parser rejects later. The returned list always ends in `Eof`.
///
/// # Errors
/// Returns a `SyntaxError` for malformed numeric literals, unterminated string
/// or char literals, and empty char literals. No tokens are returned in that
/// case.
///
/// # Example
/// ```
/// use albus::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("1 == 2.5").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Integer, TokenKind::DoubleEquals, TokenKind::Float, TokenKind::Eof]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    loop {
        // Skipped whitespace never holds a newline, so this is the start line
        // of whatever comes next.
        let line = lexer.extras.line;
        let Some(result) = lexer.next() else {
            break;
        };

        match result {
            Ok(TokenKind::NewLine) => {},
            Ok(kind) => tokens.push(Token::new(kind, lexer.slice(), line)),
            Err(error) => {
                let span = lexer.span();
                let (kind, position) = match error {
                    LexErrorKind::UnrecognizedCharacter => {
                        let lexeme = source.get(span).unwrap_or_default();
                        tokens.push(Token::new(TokenKind::BadToken, lexeme, line));
                        continue;
                    },
                    LexErrorKind::InvalidNumericLiteral { offset } => {
                        (SyntaxErrorKind::InvalidNumericLiteral, span.start + offset)
                    },
                    LexErrorKind::UnterminatedString => {
                        (SyntaxErrorKind::UnterminatedString, span.start)
                    },
                    LexErrorKind::UnterminatedChar => (SyntaxErrorKind::UnterminatedChar, span.start),
                    LexErrorKind::EmptyCharLiteral => (SyntaxErrorKind::EmptyCharLiteral, span.start),
                };
                return Err(located_error(source, kind, line, lexer.extras.line_start, position));
            },
        }
    }

    tokens.push(Token::new(TokenKind::Eof, "", lexer.extras.line));

    Ok(tokens)
}

/// Builds a `SyntaxError` pointing at byte `position` of the line starting at
/// `line_start`.
fn located_error(source: &str,
                 kind: SyntaxErrorKind,
                 line: usize,
                 line_start: usize,
                 position: usize)
                 -> SyntaxError {
    let rest = &source[line_start..];
    let source_line = rest.split('\n').next().unwrap_or_default().trim_end_matches('\r');
    let column = source[line_start..position].chars().count();

    SyntaxError::new(kind, line, column, source_line)
}

fn newline(lex: &mut logos::Lexer<TokenKind>) {
    lex.extras.line += 1;
    lex.extras.line_start = lex.span().end;
}

/// Advances the line counter past newlines embedded in a quoted literal.
fn count_embedded_newlines(lex: &mut logos::Lexer<TokenKind>) {
    let start = lex.span().start;
    for (index, _) in lex.slice().match_indices('\n') {
        lex.extras.line += 1;
        lex.extras.line_start = start + index + 1;
    }
}

/// Rejects float literals with a second `.` or a trailing `.`.
fn float_literal(lex: &mut logos::Lexer<TokenKind>) -> Result<(), LexErrorKind> {
    let slice = lex.slice();

    if let Some((offset, _)) = slice.match_indices('.').nth(1) {
        return Err(LexErrorKind::InvalidNumericLiteral { offset });
    }
    if slice.ends_with('.') {
        return Err(LexErrorKind::InvalidNumericLiteral { offset: slice.len() - 1 });
    }

    Ok(())
}

fn char_literal(lex: &mut logos::Lexer<TokenKind>) -> Result<(), LexErrorKind> {
    if lex.slice() == "''" {
        return Err(LexErrorKind::EmptyCharLiteral);
    }
    count_embedded_newlines(lex);

    Ok(())
}

fn string_literal(lex: &mut logos::Lexer<TokenKind>) {
    count_embedded_newlines(lex);
}

fn unterminated_char(_: &mut logos::Lexer<TokenKind>) -> Result<(), LexErrorKind> {
    Err(LexErrorKind::UnterminatedChar)
}

fn unterminated_string(_: &mut logos::Lexer<TokenKind>) -> Result<(), LexErrorKind> {
    Err(LexErrorKind::UnterminatedString)
}
