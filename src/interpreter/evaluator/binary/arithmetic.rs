use crate::{
    ast::BinaryOperator,
    error::TypeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::core::Value,
    },
    util::num::f64_to_i64_truncated,
};

impl Interpreter {
    /// Evaluates an arithmetic operation.
    ///
    /// Both operands must be numeric. They are read as `f64` (integers above
    /// 2^53 lose precision on the way), the operator is
    /// applied in floating point, and the result is narrowed back to an
    /// integer by truncation only when both operands were integers. A single
    /// float operand makes the result a float.
    ///
    /// Integer division or remainder by zero is an error; with a float operand
    /// the IEEE result (infinity or NaN) is returned.
    ///
    /// # Errors
    /// - `ExpectedNumeric` if either operand is a string or boolean.
    /// - `DivisionByZero` for integer `/` or `%` by zero.
    /// - `Overflow` if an integer result does not fit in `i64`.
    ///
    /// # Example
    /// ```
    /// use albus::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let result = Interpreter::eval_arithmetic(BinaryOperator::Div,
    ///                                           &Value::Integer(7),
    ///                                           &Value::Integer(2),
    ///                                           1).unwrap();
    /// assert_eq!(result, Value::Integer(3));
    ///
    /// let result = Interpreter::eval_arithmetic(BinaryOperator::Add,
    ///                                           &Value::Float(2.0),
    ///                                           &Value::Integer(3),
    ///                                           1).unwrap();
    /// assert_eq!(result, Value::Float(5.0));
    /// ```
    pub fn eval_arithmetic(op: BinaryOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};

        if !left.is_numeric() || !right.is_numeric() {
            return Err(TypeError::ExpectedNumeric { line });
        }

        let l = left.as_float(line)?;
        let r = right.as_float(line)?;
        let integral = left.is_integer() && right.is_integer();

        if integral && matches!(op, Div | Mod) && r == 0.0 {
            return Err(TypeError::DivisionByZero { line });
        }

        let result = match op {
            Add => l + r,
            Sub => l - r,
            Mul => l * r,
            Div => l / r,
            Mod => l % r,
            _ => return Err(TypeError::UnknownExpression { line }),
        };

        if integral {
            Ok(Value::from(f64_to_i64_truncated(result, line)?))
        } else {
            Ok(Value::from(result))
        }
    }
}
