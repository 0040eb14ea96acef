/// Represents a literal value in the language.
///
/// The parser resolves the payload from the token kind, so the evaluator never
/// has to inspect the literal's shape at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Float(f64),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// A string literal, without its quotes.
    String(String),
    /// A char literal, without its quotes.
    Char(char),
}

impl LiteralValue {
    /// Returns `true` for the integer `0` and the float `0.0`.
    ///
    /// ## Example
    /// ```
    /// use albus::ast::LiteralValue;
    ///
    /// assert!(LiteralValue::Integer(0).is_zero());
    /// assert!(LiteralValue::Float(0.0).is_zero());
    /// assert!(!LiteralValue::String("0".to_string()).is_zero());
    /// ```
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer(n) => *n == 0,
            Self::Float(x) => *x == 0.0,
            _ => false,
        }
    }
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<char> for LiteralValue {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl std::fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Char(c) => write!(f, "{c}"),
        }
    }
}

/// An abstract syntax tree (AST) node.
///
/// A program is a list of these. Every node records the line of the token that
/// introduced it, and owns its children outright.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string, boolean or char).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a name. Parsed, never resolved.
    Identifier {
        /// The referenced name.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// `let [mut] name [: type] = initializer;`
    VariableDeclaration {
        /// Name of the declared variable.
        name:            String,
        /// Whether `mut` was written.
        is_mutable:      bool,
        /// The optional `: type` annotation. Advisory only.
        type_annotation: Option<String>,
        /// The initializer expression.
        initializer:     Box<Self>,
        /// Line of the declared identifier.
        line:            usize,
    },
    /// A unary operation.
    Unary {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
        /// Line of the operator token.
        line:    usize,
    },
    /// A binary operation (arithmetic, comparison or equality).
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line of the operator token.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use albus::ast::Expr;
    ///
    /// let expr = Expr::Identifier { name: "x".to_string(),
    ///                               line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Identifier { line, .. }
            | Self::VariableDeclaration { line, .. }
            | Self::Unary { line, .. }
            | Self::Binary { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "[{value}]"),
            Self::Identifier { name, .. } => write!(f, "[{name}]"),
            Self::VariableDeclaration { name,
                                        is_mutable,
                                        type_annotation,
                                        initializer,
                                        .. } => {
                if *is_mutable {
                    write!(f, "mut")?;
                }
                write!(f, "[{name}]")?;
                if let Some(ty) = type_annotation {
                    write!(f, ": {ty}")?;
                }
                write!(f, " = {initializer}")
            },
            Self::Unary { op, operand, .. } => write!(f, "({op} {operand})"),
            Self::Binary { left, op, right, .. } => write!(f, "({left} {op} {right})"),
        }
    }
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Logical not (`!`).
    Not,
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Not => write!(f, "!"),
        }
    }
}

/// Infix operators, grouped by precedence tier from loosest to tightest:
/// equality, comparison, term, factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `>`
    Greater,
    /// `<`
    Less,
    /// `>=`
    GreaterEqual,
    /// `<=`
    LessEqual,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Greater => ">",
            Self::Less => "<",
            Self::GreaterEqual => ">=",
            Self::LessEqual => "<=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        };
        write!(f, "{symbol}")
    }
}
