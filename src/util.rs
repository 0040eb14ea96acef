/// Numeric conversion helpers.
///
/// Float results of integer arithmetic are narrowed back to `i64` here, by
/// truncation with range checks.
pub mod num;
