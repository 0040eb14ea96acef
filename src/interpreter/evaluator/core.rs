use crate::{
    ast::{BinaryOperator, Expr, LiteralValue},
    error::TypeError,
    interpreter::value::core::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `TypeError` describing the failure.
pub type EvalResult<T> = Result<T, TypeError>;

/// Evaluates a program and returns the value of its last statement.
///
/// An empty program evaluates to `Integer(0)`.
///
/// # Errors
/// Returns the first `TypeError` raised by any statement; later statements
/// are not evaluated.
///
/// # Example
/// ```
/// use albus::{
///     ast::{BinaryOperator, Expr, LiteralValue},
///     interpreter::{evaluator::core::interpret, value::core::Value},
/// };
///
/// let sum = Expr::Binary { left:  Box::new(Expr::Literal { value: LiteralValue::Integer(2),
///                                                           line:  1, }),
///                          op:    BinaryOperator::Add,
///                          right: Box::new(Expr::Literal { value: LiteralValue::Integer(3),
///                                                           line:  1, }),
///                          line:  1, };
///
/// assert_eq!(interpret(&[sum]).unwrap(), Value::Integer(5));
/// ```
pub fn interpret(statements: &[Expr]) -> EvalResult<Value> {
    Interpreter::new().interpret(statements)
}

/// Stores the state of one evaluation run.
///
/// The only state is the line of the top-level statement being evaluated,
/// which every `TypeError` reports. There is no environment: declarations
/// evaluate their initializer and bind nothing.
pub struct Interpreter {
    current_line: usize,
}

#[allow(clippy::new_without_default)]
impl Interpreter {
    #[must_use]
    pub const fn new() -> Self {
        Self { current_line: 1 }
    }

    /// Folds over the statements left to right, keeping the last value.
    pub fn interpret(&mut self, statements: &[Expr]) -> EvalResult<Value> {
        let mut result = Value::Integer(0);

        for statement in statements {
            self.current_line = statement.line_number();
            result = self.eval(statement)?;
        }

        Ok(result)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Literals map to their value, binary expressions evaluate both operands
    /// and apply the operator, and declarations yield their initializer's
    /// value. Identifiers and unary expressions are not evaluable.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => self.eval_literal(value),
            Expr::Binary { left, op, right, .. } => self.eval_binary_op(left, *op, right),
            Expr::VariableDeclaration { initializer, .. } => self.eval(initializer),
            Expr::Identifier { .. } | Expr::Unary { .. } => {
                Err(TypeError::UnknownExpression { line: self.current_line })
            },
        }
    }

    fn eval_literal(&self, value: &LiteralValue) -> EvalResult<Value> {
        Value::try_from(value).map_err(|()| TypeError::UnknownPrimaryExpression { line:
                                                                                     self.current_line, })
    }

    /// Evaluates the left operand, then the right, then applies `op`.
    ///
    /// A failure inside either operand is reported as
    /// `TypeError::EvaluatingExpression`, keeping the original error as its
    /// source.
    fn eval_binary_op(&self, left: &Expr, op: BinaryOperator, right: &Expr) -> EvalResult<Value> {
        let line = self.current_line;
        let wrap = move |source: TypeError| TypeError::EvaluatingExpression { source: Box::new(source),
                                                                          line };

        let left = self.eval(left).map_err(wrap)?;
        let right = self.eval(right).map_err(wrap)?;

        Self::eval_binary(op, &left, &right, line)
    }
}
