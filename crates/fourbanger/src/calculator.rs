//! The calculator state machine
//!
//! State transitions are driven by digit, operation, equals, and clear
//! events. The display is never stored; it is derived on demand from the
//! current state, registers, and selected operation.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::CalculatorConfig;
use crate::digit::Digit;
use crate::error::CalcResult;
use crate::op::{CalcValue, Operation};
use crate::registers::Registers;

/// Input states of the calculator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalculatorState {
    /// Digits extend the first operand
    #[default]
    AcceptingFirstInput,
    /// An operation is selected; no second-operand digit has arrived yet
    OperationSpecified,
    /// Digits extend the second operand
    DisplayingSecondInput,
    /// A computed result is on display
    DisplayingResult,
    /// Division by zero was requested; only clear recovers
    DisplayingError,
}

/// A single user action at the calculator boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// A digit key
    Digit(Digit),
    /// An operation key
    Operation(Operation),
    /// The equals key
    Equals,
    /// The clear key
    Clear,
}

/// Event-driven four-function calculator
///
/// One instance owns the whole session: the operand registers, the selected
/// operation, the input state, and the registered display observers. Events
/// run to completion synchronously and end with one display notification per
/// observer.
pub struct Calculator {
    registers: Registers,
    operation: Option<Operation>,
    state: CalculatorState,
    config: CalculatorConfig,
    observers: Vec<Box<dyn FnMut(&str)>>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculator")
            .field("registers", &self.registers)
            .field("operation", &self.operation)
            .field("state", &self.state)
            .field("config", &self.config)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Calculator {
    /// Creates a calculator with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Creates a calculator with custom settings
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            registers: Registers::new(config.max_digits),
            operation: None,
            state: CalculatorState::default(),
            config,
            observers: Vec::new(),
        }
    }

    /// Current input state
    #[must_use]
    pub const fn state(&self) -> CalculatorState {
        self.state
    }

    /// Currently selected operation, if any
    #[must_use]
    pub const fn operation(&self) -> Option<Operation> {
        self.operation
    }

    /// The operand registers
    #[must_use]
    pub const fn registers(&self) -> &Registers {
        &self.registers
    }

    /// The configuration this calculator was built with
    #[must_use]
    pub const fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Registers a synchronous observer invoked with the derived display
    /// string after every accepted event
    ///
    /// Observers fire in registration order.
    pub fn on_display_change<F>(&mut self, observer: F)
    where
        F: FnMut(&str) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Types one digit character
    ///
    /// Fails with [`CalcError::InvalidDigit`](crate::CalcError::InvalidDigit)
    /// for characters outside `'0'..='9'`; a rejected character mutates
    /// nothing and notifies nobody.
    pub fn enter_digit(&mut self, c: char) -> CalcResult<()> {
        let digit = Digit::from_char(c)?;
        self.apply(Event::Digit(digit));
        Ok(())
    }

    /// Types a sequence of digit characters, stopping at the first invalid one
    pub fn enter_digits(&mut self, digits: &str) -> CalcResult<()> {
        for c in digits.chars() {
            self.enter_digit(c)?;
        }
        Ok(())
    }

    /// Presses an operation key
    pub fn select_operation(&mut self, operation: Operation) {
        self.apply(Event::Operation(operation));
    }

    /// Presses the equals key
    pub fn compute_result(&mut self) {
        self.apply(Event::Equals);
    }

    /// Presses the clear key, returning to the initial state from any state
    pub fn reset(&mut self) {
        self.apply(Event::Clear);
    }

    /// Applies one already-validated event
    ///
    /// Every event is accepted: undefined state/event pairs are absorbed as
    /// no-ops. Each application ends with one display notification per
    /// registered observer.
    pub fn apply(&mut self, event: Event) {
        match event {
            Event::Digit(digit) => self.handle_digit(digit),
            Event::Operation(operation) => self.handle_operation(operation),
            Event::Equals => self.handle_equals(),
            Event::Clear => self.handle_clear(),
        }
        self.notify_observers();
    }

    /// The display text derived from the current state
    #[must_use]
    pub fn display(&self) -> String {
        match self.state {
            CalculatorState::AcceptingFirstInput | CalculatorState::OperationSpecified => {
                self.registers.first().to_string()
            }
            CalculatorState::DisplayingSecondInput => self.registers.second().to_string(),
            CalculatorState::DisplayingResult => {
                self.result().map_or_else(String::new, |value| value.to_string())
            }
            CalculatorState::DisplayingError => String::new(),
        }
    }

    /// The computed value when a result is on display
    #[must_use]
    pub fn result(&self) -> Option<CalcValue> {
        if self.state != CalculatorState::DisplayingResult {
            return None;
        }
        self.operation.and_then(|operation| {
            self.registers
                .evaluate(operation, self.config.division_mode)
                .ok()
        })
    }

    fn handle_digit(&mut self, digit: Digit) {
        match self.state {
            CalculatorState::AcceptingFirstInput | CalculatorState::DisplayingSecondInput => {
                self.registers.receive_digit(digit);
            }
            CalculatorState::OperationSpecified => {
                self.registers.receive_digit(digit);
                self.transition(CalculatorState::DisplayingSecondInput);
            }
            CalculatorState::DisplayingResult => {
                // A digit after a result starts a fresh calculation
                self.registers.clear();
                self.operation = None;
                self.transition(CalculatorState::AcceptingFirstInput);
                self.registers.receive_digit(digit);
            }
            CalculatorState::DisplayingError => {}
        }
    }

    fn handle_operation(&mut self, operation: Operation) {
        match self.state {
            CalculatorState::AcceptingFirstInput | CalculatorState::DisplayingResult => {
                self.operation = Some(operation);
                self.registers.accept_second_input();
                self.transition(CalculatorState::OperationSpecified);
            }
            CalculatorState::OperationSpecified => {
                self.operation = Some(operation);
            }
            CalculatorState::DisplayingSecondInput | CalculatorState::DisplayingError => {}
        }
    }

    fn handle_equals(&mut self) {
        match self.state {
            CalculatorState::AcceptingFirstInput | CalculatorState::DisplayingError => {}
            CalculatorState::OperationSpecified => {
                // No second-operand digit was typed: replay the first
                // operand's digits into the second register
                for digit in self.registers.first().digits() {
                    self.registers.receive_digit(digit);
                }
                self.evaluate();
            }
            CalculatorState::DisplayingSecondInput | CalculatorState::DisplayingResult => {
                self.evaluate();
            }
        }
    }

    fn handle_clear(&mut self) {
        self.registers.clear();
        self.operation = None;
        self.transition(CalculatorState::AcceptingFirstInput);
    }

    fn evaluate(&mut self) {
        let Some(operation) = self.operation else {
            return;
        };
        if operation == Operation::Divide && self.registers.second().is_zero() {
            self.transition(CalculatorState::DisplayingError);
        } else {
            self.transition(CalculatorState::DisplayingResult);
        }
    }

    fn transition(&mut self, next: CalculatorState) {
        if self.state != next {
            debug!(from = ?self.state, to = ?next, "state transition");
            self.state = next;
        }
    }

    fn notify_observers(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let display = self.display();
        for observer in &mut self.observers {
            observer(&display);
        }
    }
}
