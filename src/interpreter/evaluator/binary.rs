/// Operator dispatch.
pub mod core;

/// `+ - * / %` over integers and floats.
pub mod arithmetic;

/// Ordering and equality operators.
pub mod comparison;
