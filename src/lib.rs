//! # albus
//!
//! albus is a small expression-oriented scripting language written in Rust.
//! Source text is tokenized, parsed into an abstract syntax tree by
//! precedence climbing, and evaluated by a tree-walking interpreter that
//! produces a single terminal value.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of source code as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines literal, identifier, declaration, unary and binary nodes.
/// - Attaches source lines to AST nodes for error reporting.
/// - Renders nodes compactly for debug dumps.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised by the pipeline and the
/// `Diagnostic` value object handed to the host.
///
/// # Responsibilities
/// - Defines syntax errors with source line and caret column.
/// - Defines type errors tagged with the current statement's line.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations.
pub mod interpreter;
/// General utilities for numeric conversion.
///
/// # Responsibilities
/// - Narrow `f64` results back to `i64` without silent wraparound.
pub mod util;

pub use crate::{
    ast::Expr,
    error::{Diagnostic, SyntaxError, TypeError},
    interpreter::{
        evaluator::core::interpret,
        lexer::{Token, TokenKind, tokenize},
        parser::core::parse,
        value::core::Value,
    },
};

/// Runs source text through the whole pipeline and returns the terminal value.
///
/// This tokenizes, parses and evaluates `source`. The first failing stage
/// stops the pipeline, and its error is returned as a [`Diagnostic`].
///
/// # Errors
/// Returns a `Diagnostic` if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use albus::{Value, run};
///
/// // The value of the last statement is the result.
/// let res = run("1 + 2; 2.0 * 3");
/// assert_eq!(res.unwrap(), Value::Float(6.0));
///
/// // Division by a literal zero is rejected before evaluation.
/// let res = run("1 / 0");
/// assert!(res.is_err());
/// ```
pub fn run(source: &str) -> Result<Value, Diagnostic> {
    let tokens = tokenize(source)?;
    let program = parse(&tokens)?;
    let value = interpret(&program)?;

    Ok(value)
}
