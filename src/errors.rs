//! Error types shared by the phasor and impedance operations.

use thiserror::Error;

/// Convenience alias used by every fallible operation in the crate.
pub type Result<T> = std::result::Result<T, PowerError>;

/// Top-level error type for the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PowerError {
    /// Raised when a division-like operation receives a zero magnitude divisor.
    #[error("division by zero magnitude: {operand}")]
    DivisionByZero {
        /// The operand that had zero magnitude.
        operand: &'static str,
    },
    /// Raised by checked constructors when an input is NaN or infinite.
    #[error("non-finite input: {what}")]
    NonFinite {
        /// The offending input.
        what: &'static str,
    },
}
