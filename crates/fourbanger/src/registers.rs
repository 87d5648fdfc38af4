//! Operand registers and their derived arithmetic results

use tracing::debug;

use crate::config::DivisionMode;
use crate::digit::Digit;
use crate::error::{CalcError, CalcResult};
use crate::op::{CalcValue, Operation};
use crate::operand::Operand;

/// Which operand register incoming digits extend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveOperand {
    /// Digits extend the first operand
    #[default]
    First,
    /// Digits extend the second operand
    Second,
}

/// The two operand registers and the entry mode routing digits between them
///
/// Results are derived on demand from the current register values; nothing
/// computed is ever stored back. Operands are capped (see
/// [`Operand`](crate::operand::Operand)), which keeps every sum, difference,
/// and product exact in `i128`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Registers {
    first: Operand,
    second: Operand,
    active: ActiveOperand,
}

impl Registers {
    /// Creates cleared registers whose operands hold at most `max_digits`
    /// digits each
    #[must_use]
    pub fn new(max_digits: u32) -> Self {
        Self {
            first: Operand::new(max_digits),
            second: Operand::new(max_digits),
            active: ActiveOperand::First,
        }
    }

    /// Appends a digit to whichever operand is active
    ///
    /// Returns `false` when the active operand is at capacity and dropped
    /// the digit.
    pub fn receive_digit(&mut self, digit: Digit) -> bool {
        let accepted = match self.active {
            ActiveOperand::First => self.first.append(digit),
            ActiveOperand::Second => self.second.append(digit),
        };
        if !accepted {
            debug!(digit = %digit, operand = ?self.active, "digit dropped at capacity");
        }
        accepted
    }

    /// Routes subsequent digits to the second operand, starting it from `0`
    pub fn accept_second_input(&mut self) {
        self.active = ActiveOperand::Second;
        self.second.reset();
    }

    /// Clears both operands and routes digits back to the first
    pub fn clear(&mut self) {
        self.first.reset();
        self.second.reset();
        self.active = ActiveOperand::First;
    }

    /// The first operand register
    #[must_use]
    pub const fn first(&self) -> &Operand {
        &self.first
    }

    /// The second operand register
    #[must_use]
    pub const fn second(&self) -> &Operand {
        &self.second
    }

    /// The register digits are currently routed to
    #[must_use]
    pub const fn active(&self) -> ActiveOperand {
        self.active
    }

    /// `first + second`, exact
    #[must_use]
    pub fn sum(&self) -> CalcValue {
        CalcValue::Int(i128::from(self.first.value()) + i128::from(self.second.value()))
    }

    /// `first - second`, exact; negative when the second operand is larger
    #[must_use]
    pub fn difference(&self) -> CalcValue {
        CalcValue::Int(i128::from(self.first.value()) - i128::from(self.second.value()))
    }

    /// `first * second`, exact
    #[must_use]
    pub fn product(&self) -> CalcValue {
        CalcValue::Int(i128::from(self.first.value()) * i128::from(self.second.value()))
    }

    /// `first / second` in the requested domain
    ///
    /// Fails with [`CalcError::DivisionByZero`] when the second operand is
    /// zero.
    pub fn quotient(&self, mode: DivisionMode) -> CalcResult<CalcValue> {
        if self.second.is_zero() {
            return Err(CalcError::DivisionByZero);
        }
        let quotient = match mode {
            DivisionMode::Integer => {
                CalcValue::Int(i128::from(self.first.value()) / i128::from(self.second.value()))
            }
            DivisionMode::Real => {
                CalcValue::Real(self.first.value() as f64 / self.second.value() as f64)
            }
        };
        Ok(quotient)
    }

    /// Applies `operation` to the current register values
    pub fn evaluate(&self, operation: Operation, mode: DivisionMode) -> CalcResult<CalcValue> {
        debug!(
            first = self.first.value(),
            op = %operation,
            second = self.second.value(),
            "evaluating registers"
        );
        match operation {
            Operation::Add => Ok(self.sum()),
            Operation::Subtract => Ok(self.difference()),
            Operation::Multiply => Ok(self.product()),
            Operation::Divide => self.quotient(mode),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn digit(c: char) -> Digit {
        Digit::from_char(c).unwrap()
    }

    fn registers_with(first: &str, second: &str) -> Registers {
        let mut registers = Registers::default();
        for c in first.chars() {
            registers.receive_digit(digit(c));
        }
        registers.accept_second_input();
        for c in second.chars() {
            registers.receive_digit(digit(c));
        }
        registers
    }

    // ===== Digit routing =====

    #[test]
    fn test_new_registers_are_cleared() {
        let registers = Registers::new(12);
        assert_eq!(registers.first().value(), 0);
        assert_eq!(registers.second().value(), 0);
        assert_eq!(registers.active(), ActiveOperand::First);
    }

    #[test]
    fn test_digits_extend_first_operand_initially() {
        let mut registers = Registers::default();
        assert!(registers.receive_digit(digit('4')));
        assert!(registers.receive_digit(digit('2')));
        assert_eq!(registers.first().value(), 42);
        assert_eq!(registers.second().value(), 0);
    }

    #[test]
    fn test_accept_second_input_reroutes_digits() {
        let mut registers = Registers::default();
        registers.receive_digit(digit('7'));
        registers.accept_second_input();
        registers.receive_digit(digit('3'));
        assert_eq!(registers.first().value(), 7);
        assert_eq!(registers.second().value(), 3);
        assert_eq!(registers.active(), ActiveOperand::Second);
    }

    #[test]
    fn test_accept_second_input_restarts_second_operand() {
        let mut registers = registers_with("7", "25");
        registers.accept_second_input();
        assert_eq!(registers.second().value(), 0, "stale second input must not leak");
    }

    #[test]
    fn test_receive_digit_reports_capacity_drop() {
        let mut registers = Registers::new(2);
        registers.receive_digit(digit('9'));
        registers.receive_digit(digit('9'));
        assert!(!registers.receive_digit(digit('9')));
        assert_eq!(registers.first().value(), 99);
    }

    #[test]
    fn test_clear_resets_operands_and_routing() {
        let mut registers = registers_with("12", "34");
        registers.clear();
        assert_eq!(registers.first().value(), 0);
        assert_eq!(registers.second().value(), 0);
        assert_eq!(registers.active(), ActiveOperand::First);
    }

    // ===== Derived results =====

    #[test]
    fn test_sum() {
        assert_eq!(registers_with("7", "2").sum(), CalcValue::Int(9));
    }

    #[test]
    fn test_difference_can_go_negative() {
        assert_eq!(registers_with("3", "5").difference(), CalcValue::Int(-2));
    }

    #[test]
    fn test_product() {
        assert_eq!(registers_with("6", "7").product(), CalcValue::Int(42));
    }

    #[test]
    fn test_product_of_full_operands_is_exact() {
        let mut registers = Registers::new(18);
        for _ in 0..18 {
            registers.receive_digit(digit('9'));
        }
        registers.accept_second_input();
        for _ in 0..18 {
            registers.receive_digit(digit('9'));
        }
        let expected = 999_999_999_999_999_999_i128 * 999_999_999_999_999_999_i128;
        assert_eq!(registers.product(), CalcValue::Int(expected));
    }

    #[test]
    fn test_quotient_truncates_in_integer_mode() {
        let registers = registers_with("7", "2");
        assert_eq!(
            registers.quotient(DivisionMode::Integer),
            Ok(CalcValue::Int(3))
        );
    }

    #[test]
    fn test_quotient_divides_exactly_in_real_mode() {
        let registers = registers_with("7", "2");
        assert_eq!(
            registers.quotient(DivisionMode::Real),
            Ok(CalcValue::Real(3.5))
        );
    }

    #[test]
    fn test_quotient_by_zero_fails() {
        let registers = registers_with("9", "");
        assert_eq!(
            registers.quotient(DivisionMode::Integer),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(
            registers.quotient(DivisionMode::Real),
            Err(CalcError::DivisionByZero)
        );
    }

    // ===== Evaluation dispatch =====

    #[test]
    fn test_evaluate_dispatches_all_operations() {
        let registers = registers_with("8", "2");
        let mode = DivisionMode::Integer;
        assert_eq!(registers.evaluate(Operation::Add, mode), Ok(CalcValue::Int(10)));
        assert_eq!(
            registers.evaluate(Operation::Subtract, mode),
            Ok(CalcValue::Int(6))
        );
        assert_eq!(
            registers.evaluate(Operation::Multiply, mode),
            Ok(CalcValue::Int(16))
        );
        assert_eq!(registers.evaluate(Operation::Divide, mode), Ok(CalcValue::Int(4)));
    }

    #[test]
    fn test_evaluate_surfaces_division_by_zero() {
        let registers = registers_with("5", "");
        assert_eq!(
            registers.evaluate(Operation::Divide, DivisionMode::Integer),
            Err(CalcError::DivisionByZero)
        );
    }
}
