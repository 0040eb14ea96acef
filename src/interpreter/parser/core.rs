use crate::{
    ast::Expr,
    error::{SyntaxError, SyntaxErrorKind},
    interpreter::lexer::{Token, TokenKind},
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Parses a token list into the program's top-level statements.
///
/// Statements are separated by `;`. A variable declaration consumes its own
/// terminating `;`; an expression statement must be followed by `;` or the end
/// of input. Stray semicolons are skipped.
///
/// # Errors
/// Returns the first `SyntaxError` encountered. No recovery is attempted.
///
/// # Example
/// ```
/// use albus::{
///     ast::{Expr, LiteralValue},
///     interpreter::{lexer::tokenize, parser::core::parse},
/// };
///
/// let tokens = tokenize("let x = 5;").unwrap();
/// let program = parse(&tokens).unwrap();
///
/// assert_eq!(program,
///            [Expr::VariableDeclaration { name:            "x".to_string(),
///                                         is_mutable:      false,
///                                         type_annotation: None,
///                                         initializer:
///                                             Box::new(Expr::Literal { value:
///                                                                          LiteralValue::Integer(5),
///                                                                      line:  1, }),
///                                         line:            1, }]);
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Vec<Expr>> {
    Parser::new(tokens).parse_program()
}

/// A cursor over one token list.
///
/// Each call to [`parse`] owns a fresh `Parser`; nothing is shared between
/// runs.
pub struct Parser<'a> {
    pub(in crate::interpreter::parser) tokens:  &'a [Token],
    pub(in crate::interpreter::parser) current: usize,
}

impl<'a> Parser<'a> {
    #[must_use]
    pub const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens,
               current: 0 }
    }

    /// Parses statements until `Eof`.
    pub fn parse_program(&mut self) -> ParseResult<Vec<Expr>> {
        let mut statements = Vec::new();

        loop {
            while self.check(TokenKind::SemiColon) {}
            if self.is_at_end() {
                break;
            }

            let statement = self.parse_statement()?;
            let needs_separator = !matches!(statement, Expr::VariableDeclaration { .. });
            statements.push(statement);

            if needs_separator && !self.check(TokenKind::SemiColon) && !self.is_at_end() {
                return Err(self.error_at(self.current,
                                         SyntaxErrorKind::Expected("expected ;".to_string())));
            }
        }

        Ok(statements)
    }

    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing. It begins at the
    /// lowest-precedence level, equality, and recursively descends through
    /// the precedence hierarchy.
    ///
    /// Grammar: `expression := equality`
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.parse_equality()
    }
}
