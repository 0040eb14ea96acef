use crate::{error::TypeError, interpreter::evaluator::core::EvalResult};

/// Narrows an `f64` to `i64`, discarding any fractional part.
///
/// ## Errors
/// - `TypeError::Overflow` if the value is non-finite or outside the `i64`
///   range after truncation.
///
/// ## Example
/// ```
/// use albus::{error::TypeError, util::num::f64_to_i64_truncated};
///
/// assert_eq!(f64_to_i64_truncated(3.9, 1).unwrap(), 3);
/// assert_eq!(f64_to_i64_truncated(-3.9, 1).unwrap(), -3);
///
/// let err = f64_to_i64_truncated(1e20, 4).unwrap_err();
/// assert!(matches!(err, TypeError::Overflow { line: 4 }));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_truncated(value: f64, line: usize) -> EvalResult<i64> {
    let truncated = value.trunc();
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
    if !truncated.is_finite() || truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(TypeError::Overflow { line });
    }
    Ok(truncated as i64)
}
