//! Keypad Calc: an event-driven calculator state machine
//!
//! The calculator is a pure core with a thin imperative shell. Every button
//! or key press becomes an [`engine::Action`]; a pure transition function
//! turns the current [`core::CalculatorState`] into the next one, and the
//! [`engine::Calculator`] installs it. The only side effect is reading the
//! clock when a completed calculation is recorded in history.
//!
//! # Core Concepts
//!
//! - **State**: textual operands, a pending operator, a memory register
//! - **Transitions**: left-to-right evaluation with one pending operator
//! - **Display normalization**: at most 12 significant digits, exponential
//!   form from `1e12` up
//! - **History**: the ten most recent calculations, newest first
//!
//! # Example
//!
//! ```rust
//! use keypad_calc::core::{MemoryOp, Operation};
//! use keypad_calc::engine::Calculator;
//!
//! let mut calc = Calculator::new();
//! for c in "200".chars() {
//!     calc.digit(c).unwrap();
//! }
//! calc.operator(Operation::Percent);
//! calc.digit('5').unwrap();
//! calc.equals();
//! assert_eq!(calc.display_value(), "10");
//!
//! calc.memory(MemoryOp::Add);
//! calc.all_clear();
//! calc.memory(MemoryOp::Recall);
//! assert_eq!(calc.display_value(), "10");
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod numeric;

// Re-export commonly used types
pub use builder::{CalculatorBuilder, EngineConfig};
pub use self::core::{CalculatorState, HistoryItem, MemoryOp, Operation};
pub use engine::{Action, Calculator, DisplaySnapshot, Key};
