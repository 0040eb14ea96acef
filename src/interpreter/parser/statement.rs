use crate::{
    ast::Expr,
    error::SyntaxErrorKind,
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{ParseResult, Parser},
            unary::is_primary_start,
        },
    },
};

impl Parser<'_> {
    /// Parses a single statement.
    ///
    /// A statement is either a variable declaration, recognized by a leading
    /// `let`, or an expression.
    ///
    /// The rule is: `statement := variableDecl | expression`
    pub fn parse_statement(&mut self) -> ParseResult<Expr> {
        if self.peek().kind == TokenKind::Let {
            return self.parse_variable_declaration();
        }
        self.parse_expression()
    }

    /// Parses a variable declaration statement.
    ///
    /// A declaration has the form `let [mut] <identifier> [: <type>] =
    /// <primary>;`. The initializer is a single primary, not a full
    /// expression, and the type annotation is recorded without being checked.
    ///
    /// The node takes the line of the declared identifier.
    ///
    /// # Errors
    /// Returns a `SyntaxError` if:
    /// - the identifier is missing (`expected identifier`),
    /// - a `:` is not followed by a type name (`expected type`),
    /// - `=` is missing (`expected =`),
    /// - the initializer is not a primary (`expected expression`),
    /// - the terminating `;` is missing (`expected ;`).
    fn parse_variable_declaration(&mut self) -> ParseResult<Expr> {
        self.expect(TokenKind::Let, "expected let")?;

        let is_mutable = self.check(TokenKind::Mut);
        let identifier = self.expect(TokenKind::Identifier, "expected identifier")?;

        let type_annotation = if self.check(TokenKind::Colon) {
            Some(self.expect(TokenKind::Identifier, "expected type")?.lexeme.clone())
        } else {
            None
        };

        self.expect(TokenKind::SingleEquals, "expected =")?;

        if !is_primary_start(self.peek().kind) {
            return Err(self.error_at(self.current,
                                     SyntaxErrorKind::Expected("expected expression".to_string())));
        }
        let initializer = self.parse_primary()?;

        self.expect(TokenKind::SemiColon, "expected ;")?;

        Ok(Expr::VariableDeclaration { name: identifier.lexeme.clone(),
                                       is_mutable,
                                       type_annotation,
                                       initializer: Box::new(initializer),
                                       line: identifier.line })
    }
}
