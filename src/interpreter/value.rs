/// The `Value` enum and its conversions.
///
/// Values are produced only by the evaluator and never outlive a single run.
pub mod core;
