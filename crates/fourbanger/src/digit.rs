//! Single decimal digit values

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};

/// One decimal digit, `'0'` through `'9'`
///
/// `Digit` is the only way digit input enters the engine, so anything built
/// from digits is a well-formed non-negative decimal number by construction.
/// Construction is fallible; there is no panicking path for characters
/// outside `'0'..='9'`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Digit(u8);

impl Digit {
    /// The digit `0`, the initial content of every operand
    pub const ZERO: Self = Self(0);

    /// Parse a digit from its character form
    pub fn from_char(c: char) -> CalcResult<Self> {
        c.to_digit(10)
            .map(|v| Self(v as u8))
            .ok_or(CalcError::InvalidDigit { found: c })
    }

    /// Construct a digit from its numeric value, or `None` for values above 9
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// The least-significant decimal digit of `value`
    #[must_use]
    pub const fn ones_place(value: u64) -> Self {
        Self((value % 10) as u8)
    }

    /// Numeric value of the digit, `0..=9`
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Character form of the digit, `'0'..='9'`
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<char> for Digit {
    type Error = CalcError;

    fn try_from(c: char) -> CalcResult<Self> {
        Self::from_char(c)
    }
}

impl From<Digit> for char {
    fn from(digit: Digit) -> Self {
        digit.as_char()
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.value()
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
