//! Unified crate error types.

use thiserror::Error;

/// Errors surfaced by the formatting and base-unit entry points.
///
/// Malformed numeric *strings* never produce an error: they degrade to a
/// zero rendering, since this crate backs user-facing display. Errors are
/// reserved for inputs that indicate a bug at the call site (non-finite
/// floats) and amounts that cannot be represented exactly.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormatError {
    #[error("non-finite value {0} cannot be formatted")]
    NonFinite(f64),

    #[error("value {0} is outside the representable decimal range")]
    OutOfRange(f64),

    #[error("base-unit overflow: {context}")]
    UnitOverflow { context: String },

    #[error("fractional base units not allowed: {value}")]
    FractionalBaseUnits { value: String },

    #[error("negative value {value} cannot convert to base units")]
    NegativeBaseUnits { value: String },
}
