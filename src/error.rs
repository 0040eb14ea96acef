/// Syntax errors.
///
/// Defines the errors raised while tokenizing or parsing source code: bad
/// numeric literals, unterminated or empty quotes, unmet grammar
/// expectations and statically detected division by zero. Every syntax error
/// carries the text of the offending line and a caret column.
pub mod syntax_error;
/// Type errors.
///
/// Contains the errors raised during evaluation, such as non-numeric operands
/// to arithmetic or expression shapes the evaluator does not support.
pub mod type_error;
/// Host-facing diagnostics.
///
/// A `Diagnostic` flattens either error kind into one value object that the
/// host can render however it likes.
pub mod diagnostic;

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use syntax_error::{SyntaxError, SyntaxErrorKind};
pub use type_error::TypeError;
