use crate::{
    error::{SyntaxError, SyntaxErrorKind},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

/// Stands in for `Eof` when a token list was not produced by `tokenize` and
/// lacks one.
static END_OF_INPUT: Token = Token { kind:   TokenKind::Eof,
                                     lexeme: String::new(),
                                     line:   1, };

impl<'a> Parser<'a> {
    /// Returns the current token without consuming it.
    pub(in crate::interpreter::parser) fn peek(&self) -> &'a Token {
        self.tokens.get(self.current).unwrap_or(&END_OF_INPUT)
    }

    pub(in crate::interpreter::parser) fn advance(&mut self) -> &'a Token {
        let token = self.peek();
        if self.current < self.tokens.len() {
            self.current += 1;
        }
        token
    }

    pub(in crate::interpreter::parser) fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    /// Consumes the current token if it has the given kind.
    pub(in crate::interpreter::parser) fn check(&mut self, kind: TokenKind) -> bool {
        if self.peek().kind == kind {
            self.advance();
            return true;
        }
        false
    }

    /// Consumes and returns a token of the given kind, or fails with
    /// `Syntax Error: '<expected>'` pointing at the current token.
    pub(in crate::interpreter::parser) fn expect(&mut self,
                                                 kind: TokenKind,
                                                 expected: &str)
                                                 -> ParseResult<&'a Token> {
        if self.peek().kind == kind {
            return Ok(self.advance());
        }
        Err(self.error_at(self.current, SyntaxErrorKind::Expected(expected.to_string())))
    }

    /// Builds a `SyntaxError` for the token at `index`.
    ///
    /// The parser only sees tokens, so the offending line is rebuilt from the
    /// lexemes on that line joined by single spaces. The caret column is the
    /// summed length of the preceding lexemes plus one space after each.
    pub(in crate::interpreter::parser) fn error_at(&self,
                                                   index: usize,
                                                   kind: SyntaxErrorKind)
                                                   -> SyntaxError {
        let index = index.min(self.tokens.len().saturating_sub(1));
        let Some(failing) = self.tokens.get(index) else {
            return SyntaxError::new(kind, END_OF_INPUT.line, 0, "");
        };

        let line = failing.line;
        let mut column = 0;
        let mut lexemes = Vec::new();

        for (i, token) in self.tokens.iter().enumerate().filter(|(_, t)| t.line == line) {
            if i < index {
                column += token.lexeme.chars().count() + 1;
            }
            lexemes.push(token.lexeme.as_str());
        }

        let source_line = lexemes.join(" ");
        SyntaxError::new(kind, line, column, source_line.trim_end())
    }
}
