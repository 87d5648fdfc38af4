//! Digit-by-digit numeric input accumulation

use std::fmt;

use crate::digit::Digit;

/// Default number of digits an operand accepts, sized like a desk
/// calculator display
pub const DEFAULT_MAX_DIGITS: u32 = 12;

/// Hard ceiling on operand length
///
/// Two 18-digit operands stay below `10^36`, so every sum, difference, and
/// product fits exactly in `i128` and evaluation never overflows.
pub const MAX_DIGITS_CEILING: u32 = 18;

/// An ordered digit sequence interpreted as a non-negative decimal integer
///
/// The accumulator starts as the single digit `0`. Appending to a zero value
/// replaces it instead of extending it, so typed input never carries leading
/// zeros. Appends past the digit capacity are dropped and reported through
/// the return value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operand {
    value: u64,
    max_digits: u32,
}

impl Operand {
    /// Creates an empty accumulator holding at most `max_digits` digits
    ///
    /// The capacity is clamped to `1..=MAX_DIGITS_CEILING`.
    #[must_use]
    pub fn new(max_digits: u32) -> Self {
        Self {
            value: 0,
            max_digits: max_digits.clamp(1, MAX_DIGITS_CEILING),
        }
    }

    /// Appends a digit at the least-significant end
    ///
    /// A zero value is replaced by the digit rather than extended. Returns
    /// `false` when the accumulator is already at capacity and the digit was
    /// dropped.
    pub fn append(&mut self, digit: Digit) -> bool {
        if self.value == 0 {
            self.value = u64::from(digit.value());
            true
        } else if self.digit_count() < self.max_digits {
            self.value = self.value * 10 + u64::from(digit.value());
            true
        } else {
            false
        }
    }

    /// Discards the accumulated value, back to a single `0`
    pub fn reset(&mut self) {
        self.value = 0;
    }

    /// Current numeric value
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.value
    }

    /// Whether the current value is zero
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Number of digits in the current value; zero counts as one digit
    #[must_use]
    pub const fn digit_count(&self) -> u32 {
        if self.value == 0 {
            1
        } else {
            self.value.ilog10() + 1
        }
    }

    /// Digit capacity of this accumulator
    #[must_use]
    pub const fn max_digits(&self) -> u32 {
        self.max_digits
    }

    /// Whether further appends would be dropped
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.digit_count() >= self.max_digits && self.value != 0
    }

    /// The digits of the current value, most significant first
    ///
    /// Zero yields `[Digit::ZERO]`.
    #[must_use]
    pub fn digits(&self) -> Vec<Digit> {
        let mut digits = vec![Digit::ZERO; self.digit_count() as usize];
        let mut rest = self.value;
        for slot in digits.iter_mut().rev() {
            *slot = Digit::ones_place(rest);
            rest /= 10;
        }
        digits
    }
}

impl Default for Operand {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DIGITS)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
