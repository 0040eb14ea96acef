use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::SyntaxErrorKind,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses prefix `!`, which nests: `!!x` is `!(!x)`.
    ///
    /// The rule is: `unary := "!" unary | primary`
    pub fn parse_unary(&mut self) -> ParseResult<Expr> {
        let token = self.peek();
        if token.kind == TokenKind::Exclamation {
            self.advance();
            let operand = self.parse_unary()?;
            return Ok(Expr::Unary { op:      UnaryOperator::Not,
                                    operand: Box::new(operand),
                                    line:    token.line, });
        }
        self.parse_primary()
    }

    /// Parses a single literal or identifier.
    ///
    /// The literal's payload is resolved here from the token kind: integers
    /// become `i64`, floats `f64`, strings and chars lose their quotes.
    ///
    /// The rule is: `primary := STRING | INTEGER | FLOAT | CHAR | TRUE | FALSE
    /// | IDENT`
    ///
    /// # Errors
    /// - `unknown token` if the current token cannot start a primary.
    /// - `integer literal too large` if an integer does not fit in `i64`.
    /// - `invalid char literal` if a char literal holds several characters.
    pub fn parse_primary(&mut self) -> ParseResult<Expr> {
        let index = self.current;
        let token = self.peek();

        let value = match token.kind {
            TokenKind::String => LiteralValue::String(strip_quotes(&token.lexeme, '"').to_string()),
            TokenKind::Integer => match token.lexeme.parse() {
                Ok(n) => LiteralValue::Integer(n),
                Err(_) => return Err(self.error_at(index, SyntaxErrorKind::LiteralTooLarge)),
            },
            TokenKind::Float => match token.lexeme.parse() {
                Ok(x) => LiteralValue::Float(x),
                Err(_) => {
                    return Err(self.error_at(index, SyntaxErrorKind::InvalidNumericLiteral));
                },
            },
            TokenKind::Char => {
                let mut chars = strip_quotes(&token.lexeme, '\'').chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => LiteralValue::Char(c),
                    _ => return Err(self.error_at(index, SyntaxErrorKind::InvalidCharLiteral)),
                }
            },
            TokenKind::True => LiteralValue::Bool(true),
            TokenKind::False => LiteralValue::Bool(false),
            TokenKind::Identifier => {
                self.advance();
                return Ok(Expr::Identifier { name: token.lexeme.clone(),
                                             line: token.line, });
            },
            _ => {
                return Err(self.error_at(index,
                                         SyntaxErrorKind::Expected("unknown token".to_string())));
            },
        };

        self.advance();
        Ok(Expr::Literal { value,
                           line: token.line })
    }
}

/// Whether a token of this kind can begin a primary expression.
#[must_use]
pub const fn is_primary_start(kind: TokenKind) -> bool {
    matches!(kind,
             TokenKind::String
             | TokenKind::Integer
             | TokenKind::Float
             | TokenKind::Char
             | TokenKind::True
             | TokenKind::False
             | TokenKind::Identifier)
}

fn strip_quotes(lexeme: &str, quote: char) -> &str {
    lexeme.strip_prefix(quote)
          .and_then(|inner| inner.strip_suffix(quote))
          .unwrap_or(lexeme)
}
