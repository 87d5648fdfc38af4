//! Error types for the calculator engine

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors that can occur while driving the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// A character outside `'0'..='9'` was offered as a digit
    #[error("invalid digit character: {found:?}")]
    InvalidDigit {
        /// The rejected character
        found: char,
    },

    /// A quotient was requested with a zero divisor
    #[error("division by zero")]
    DivisionByZero,
}

impl CalcError {
    /// Create an invalid digit error for the rejected character
    #[must_use]
    pub fn invalid_digit(found: char) -> Self {
        Self::InvalidDigit { found }
    }
}
