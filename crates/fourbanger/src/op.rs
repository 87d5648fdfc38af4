//! Arithmetic operations and computed result values

use std::fmt;

use serde::{Deserialize, Serialize};

/// Type-safe arithmetic operation, one of the four calculator functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operation {
    /// All four operations in keypad order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A computed calculator result
///
/// Sums, differences, and products of capped operands are exact, so they are
/// carried as `Int`. Quotients are `Int` under truncating division and `Real`
/// under real-valued division.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CalcValue {
    /// Exact integer result
    Int(i128),
    /// Real-valued result
    Real(f64),
}

impl CalcValue {
    /// Numeric value widened to `f64`
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Int(value) => *value as f64,
            Self::Real(value) => *value,
        }
    }
}

impl fmt::Display for CalcValue {
    /// Calculator-style rendering: integers print bare, reals print with up
    /// to ten fractional digits and trailing zeros trimmed
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Real(value) => {
                if value.fract() == 0.0 && value.abs() < 1e15 {
                    write!(f, "{value:.0}")
                } else {
                    let formatted = format!("{value:.10}");
                    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
                    f.write_str(trimmed)
                }
            }
        }
    }
}
