/// Binary operator evaluation logic.
///
/// Handles arithmetic with numeric promotion, ordering comparisons and
/// equality.
pub mod binary;

/// Core evaluation logic.
///
/// Contains the `Interpreter`, the statement fold, expression dispatch and
/// literal evaluation.
pub mod core;
