//! Fourbanger - Event-Driven Four-Function Calculator Engine
//!
//! A small state machine implementing the classic four-function pocket
//! calculator: digit events accumulate into operands, and an equals event
//! computes the selected operation over them. The display is never stored;
//! it is derived from the machine's state on demand, and observers
//! registered with [`Calculator::on_display_change`] receive it after every
//! event.
//!
//! The presentation layer stays outside this crate. Buttons, layout, and key
//! handling live with the caller, which drives the engine through
//! [`Calculator::enter_digit`], [`Calculator::select_operation`],
//! [`Calculator::compute_result`], and [`Calculator::reset`] (or the
//! equivalent typed [`Event`] stream via [`Calculator::apply`]).
//!
//! # Example
//!
//! ```rust
//! use fourbanger::prelude::*;
//!
//! let mut calc = Calculator::new();
//! calc.enter_digit('7')?;
//! calc.select_operation(Operation::Add);
//! calc.enter_digit('2')?;
//! calc.compute_result();
//! assert_eq!(calc.display(), "9");
//!
//! // Division by zero is a modeled state, not a panic
//! calc.reset();
//! calc.enter_digit('9')?;
//! calc.select_operation(Operation::Divide);
//! calc.enter_digit('0')?;
//! calc.compute_result();
//! assert_eq!(calc.state(), CalculatorState::DisplayingError);
//! assert_eq!(calc.display(), "");
//! # Ok::<(), CalcError>(())
//! ```

// Allow common test patterns in this crate
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod calculator;
pub mod config;
pub mod digit;
pub mod error;
pub mod op;
pub mod operand;
pub mod registers;

pub use calculator::{Calculator, CalculatorState, Event};
pub use config::{CalculatorConfig, DivisionMode};
pub use digit::Digit;
pub use error::{CalcError, CalcResult};
pub use op::{CalcValue, Operation};
pub use operand::Operand;
pub use registers::{ActiveOperand, Registers};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::calculator::{Calculator, CalculatorState, Event};
    pub use crate::config::{CalculatorConfig, DivisionMode};
    pub use crate::digit::Digit;
    pub use crate::error::{CalcError, CalcResult};
    pub use crate::op::{CalcValue, Operation};
}
