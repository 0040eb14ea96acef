use crate::{
    ast::BinaryOperator,
    error::TypeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates an ordering comparison: `>`, `<`, `>=` or `<=`.
    ///
    /// Both operands are promoted to `f64` the same way arithmetic promotes
    /// them, so `2 < 2.5` holds.
    ///
    /// # Errors
    /// `ExpectedNumeric` if either operand is not a number.
    ///
    /// # Example
    /// ```
    /// use albus::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let result = Interpreter::eval_comparison(BinaryOperator::Less,
    ///                                           &Value::Integer(2),
    ///                                           &Value::Float(2.5),
    ///                                           1);
    /// assert_eq!(result.unwrap(), Value::Boolean(true));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        let left = left.as_float(line)?;
        let right = right.as_float(line)?;

        let holds = match op {
            BinaryOperator::Greater => left > right,
            BinaryOperator::Less => left < right,
            BinaryOperator::GreaterEqual => left >= right,
            BinaryOperator::LessEqual => left <= right,
            _ => return Err(TypeError::UnknownExpression { line }),
        };

        Ok(Value::from(holds))
    }

    /// Evaluates `==` or `!=`.
    ///
    /// Two numbers compare by value after promotion, so `1 == 1.0` holds. Any
    /// other pair compares structurally; values of different kinds are never
    /// equal.
    ///
    /// # Example
    /// ```
    /// use albus::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let eq = Interpreter::eval_equality(BinaryOperator::Equal,
    ///                                     &Value::Integer(1),
    ///                                     &Value::Float(1.0),
    ///                                     1);
    /// assert_eq!(eq.unwrap(), Value::Boolean(true));
    ///
    /// let ne = Interpreter::eval_equality(BinaryOperator::NotEqual,
    ///                                     &Value::from("a"),
    ///                                     &Value::Boolean(true),
    ///                                     1);
    /// assert_eq!(ne.unwrap(), Value::Boolean(true));
    /// ```
    pub fn eval_equality(op: BinaryOperator,
                         left: &Value,
                         right: &Value,
                         line: usize)
                         -> EvalResult<Value> {
        let is_equal = if left.is_numeric() && right.is_numeric() {
            left.as_float(line)? == right.as_float(line)?
        } else {
            left == right
        };

        match op {
            BinaryOperator::Equal => Ok(Value::from(is_equal)),
            BinaryOperator::NotEqual => Ok(Value::from(!is_equal)),
            _ => Err(TypeError::UnknownExpression { line }),
        }
    }
}
