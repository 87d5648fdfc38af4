//! Construction-time calculator configuration

use serde::{Deserialize, Serialize};

use crate::operand::{DEFAULT_MAX_DIGITS, MAX_DIGITS_CEILING};

/// Numeric domain for quotients
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DivisionMode {
    /// Truncating integer division, matching the integer operand model
    #[default]
    Integer,
    /// Real-valued division carried out in `f64`
    Real,
}

/// Settings fixed when a calculator is constructed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Numeric domain used when computing quotients
    pub division_mode: DivisionMode,
    /// Digit capacity of each operand
    pub max_digits: u32,
}

impl CalculatorConfig {
    /// Creates the default configuration: truncating division, twelve-digit
    /// operands
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the quotient domain
    #[must_use]
    pub const fn with_division_mode(mut self, division_mode: DivisionMode) -> Self {
        self.division_mode = division_mode;
        self
    }

    /// Sets the operand digit capacity, clamped to `1..=MAX_DIGITS_CEILING`
    #[must_use]
    pub fn with_max_digits(mut self, max_digits: u32) -> Self {
        self.max_digits = max_digits.clamp(1, MAX_DIGITS_CEILING);
        self
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            division_mode: DivisionMode::default(),
            max_digits: DEFAULT_MAX_DIGITS,
        }
    }
}
