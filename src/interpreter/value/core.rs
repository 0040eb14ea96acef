use crate::{ast::LiteralValue, error::TypeError, interpreter::evaluator::core::EvalResult};

/// Represents a runtime value in the interpreter.
///
/// This enum models every type an expression can evaluate to.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double precision floating-point number.
    Float(f64),
    /// A string of text.
    String(String),
    /// A boolean value (`true` or `false`).
    /// Only comparison and equality operators produce one; boolean literals
    /// have no runtime value.
    Boolean(bool),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl Value {
    /// Reads a numeric value as `f64`, or returns an error if not numeric.
    ///
    /// Accepts `Value::Float` and `Value::Integer`. Integers are promoted with
    /// a plain cast, so magnitudes above 2^53 round to the nearest `f64`.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If value is a float or an integer.
    /// - `Err(TypeError::ExpectedNumeric)`: If not numeric.
    ///
    /// # Example
    /// ```
    /// use albus::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_float(1).unwrap(), 10.0);
    /// assert_eq!(Value::Integer(9_007_199_254_740_993).as_float(1).unwrap(),
    ///            9_007_199_254_740_992.0);
    /// assert!(Value::from("ten").as_float(1).is_err());
    /// ```
    #[allow(clippy::cast_precision_loss)]
    pub fn as_float(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Float(x) => Ok(*x),
            Self::Integer(n) => Ok(*n as f64),
            _ => Err(TypeError::ExpectedNumeric { line }),
        }
    }

    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(_))
    }

    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl TryFrom<&LiteralValue> for Value {
    type Error = ();

    /// Maps a literal payload onto its runtime value. Only integer, float and
    /// string literals have a runtime counterpart.
    fn try_from(lit: &LiteralValue) -> Result<Self, Self::Error> {
        match lit {
            LiteralValue::Integer(n) => Ok(Self::from(*n)),
            LiteralValue::Float(x) => Ok(Self::from(*x)),
            LiteralValue::String(s) => Ok(Self::from(s.as_str())),
            LiteralValue::Bool(_) | LiteralValue::Char(_) => Err(()),
        }
    }
}
