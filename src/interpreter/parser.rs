/// Parser state and the program/expression entry points.
///
/// Contains the `Parser` cursor, the statement loop, and the shared
/// `ParseResult` type.
pub mod core;

/// Unary and primary expressions.
///
/// Handles prefix `!` and the literal/identifier leaves of the grammar.
pub mod unary;

/// Binary operator tiers.
///
/// Implements the equality, comparison, term and factor levels of the
/// precedence-climbing grammar, including the literal division-by-zero check.
pub mod binary;

/// Token cursor helpers and error location.
///
/// Provides lookahead, consumption and the caret computation used by every
/// syntax error the parser raises.
pub mod utils;

/// Statement parsing.
///
/// Implements variable declarations and expression statements.
pub mod statement;
