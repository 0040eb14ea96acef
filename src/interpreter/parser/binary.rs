use crate::{
    ast::{BinaryOperator, Expr},
    error::SyntaxErrorKind,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses equality expressions.
    ///
    /// Handles left-associative `==` and `!=`.
    ///
    /// The rule is: `equality := comparison (("==" | "!=") comparison)*`
    pub fn parse_equality(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_comparison()?;
        loop {
            let token = self.peek();
            if let Some(op) = token_to_binary_operator(token.kind)
               && matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual)
            {
                self.advance();
                let right = self.parse_comparison()?;
                left = Expr::Binary { left: Box::new(left),
                                      op,
                                      right: Box::new(right),
                                      line: token.line };
                continue;
            }
            break;
        }
        Ok(left)
    }

    /// Parses ordering comparisons.
    ///
    /// Handles left-associative `>`, `<`, `>=` and `<=`.
    ///
    /// The rule is: `comparison := term ((">" | "<" | ">=" | "<=") term)*`
    pub fn parse_comparison(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_term()?;
        loop {
            let token = self.peek();
            if let Some(op) = token_to_binary_operator(token.kind)
               && is_comparison_op(op)
            {
                self.advance();
                let right = self.parse_term()?;
                left = Expr::Binary { left: Box::new(left),
                                      op,
                                      right: Box::new(right),
                                      line: token.line };
                continue;
            }
            break;
        }
        Ok(left)
    }

    /// Parses addition and subtraction expressions.
    ///
    /// The rule is: `term := factor (("+" | "-") factor)*`
    pub fn parse_term(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_factor()?;
        loop {
            let token = self.peek();
            if let Some(op) = token_to_binary_operator(token.kind)
               && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
            {
                self.advance();
                let right = self.parse_factor()?;
                left = Expr::Binary { left: Box::new(left),
                                      op,
                                      right: Box::new(right),
                                      line: token.line };
                continue;
            }
            break;
        }
        Ok(left)
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles left-associative `*`, `/` and `%`. A division whose right
    /// operand is the literal zero is rejected here, before evaluation.
    ///
    /// The rule is: `factor := unary (("*" | "/" | "%") unary)*`
    ///
    /// # Errors
    /// `division by zero` for `x / 0` or `x / 0.0`, with the caret under the
    /// zero.
    pub fn parse_factor(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_unary()?;
        loop {
            let token = self.peek();
            if let Some(op) = token_to_binary_operator(token.kind)
               && matches!(op, BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
            {
                self.advance();
                let right = self.parse_unary()?;
                if op == BinaryOperator::Div && is_literal_zero(&right) {
                    // A literal operand is always the single token just consumed.
                    return Err(self.error_at(self.current - 1, SyntaxErrorKind::DivisionByZero));
                }
                left = Expr::Binary { left: Box::new(left),
                                      op,
                                      right: Box::new(right),
                                      line: token.line };
                continue;
            }
            break;
        }
        Ok(left)
    }
}

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `None` for every kind that is not an infix operator.
///
/// # Example
/// ```
/// use albus::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Plus), Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(TokenKind::SingleEquals), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Modulo => Some(BinaryOperator::Mod),
        TokenKind::DoubleEquals => Some(BinaryOperator::Equal),
        TokenKind::NotEquals => Some(BinaryOperator::NotEqual),
        TokenKind::GreaterThan => Some(BinaryOperator::Greater),
        TokenKind::LessThan => Some(BinaryOperator::Less),
        TokenKind::GreaterThanEquals => Some(BinaryOperator::GreaterEqual),
        TokenKind::LessThanEquals => Some(BinaryOperator::LessEqual),
        _ => None,
    }
}

/// Determines whether a binary operator belongs to the comparison tier:
/// `>`, `<`, `>=`, `<=`.
///
/// # Example
/// ```
/// use albus::{ast::BinaryOperator, interpreter::parser::binary::is_comparison_op};
///
/// assert!(is_comparison_op(BinaryOperator::Less));
/// assert!(!is_comparison_op(BinaryOperator::Equal));
/// ```
#[must_use]
pub const fn is_comparison_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Greater
             | BinaryOperator::Less
             | BinaryOperator::GreaterEqual
             | BinaryOperator::LessEqual)
}

fn is_literal_zero(expr: &Expr) -> bool {
    matches!(expr, Expr::Literal { value, .. } if value.is_zero())
}
