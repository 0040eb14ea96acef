/// Represents all errors that can occur during evaluation.
///
/// The `line` of every variant is the line of the top-level statement being
/// evaluated, not necessarily the line of the failing sub-expression.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeError {
    /// A literal payload the evaluator has no value for.
    UnknownPrimaryExpression {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operand of a binary expression failed to evaluate.
    EvaluatingExpression {
        /// The error raised by the operand.
        source: Box<Self>,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// An arithmetic or ordering operator received a non-numeric operand.
    ExpectedNumeric {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An expression shape the evaluator does not support.
    UnknownExpression {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer division or remainder by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer result does not fit in 64 bits.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl TypeError {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownPrimaryExpression { line }
            | Self::EvaluatingExpression { line, .. }
            | Self::ExpectedNumeric { line }
            | Self::UnknownExpression { line }
            | Self::DivisionByZero { line }
            | Self::Overflow { line } => *line,
        }
    }

    /// Returns the short description, without the `TypeError:` prefix or the
    /// line.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::UnknownPrimaryExpression { .. } => "unknown primary expression",
            Self::EvaluatingExpression { .. } => "error evaluating expression",
            Self::ExpectedNumeric { .. } => "expected numeric type",
            Self::UnknownExpression { .. } => "unknown expression",
            Self::DivisionByZero { .. } => "division by zero",
            Self::Overflow { .. } => "integer overflow",
        }
    }
}

impl std::fmt::Display for TypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TypeError: {} on line {}", self.description(), self.line())
    }
}

impl std::error::Error for TypeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EvaluatingExpression { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
