//! Core calculator data types.
//!
//! This module contains the pure data of the calculator:
//! - Operators and memory operations
//! - The text-based `CalculatorState` and its derived `Phase`
//! - The immutable, bounded calculation history
//!
//! Nothing in this module performs I/O or reads the clock.

mod error;
mod history;
mod operation;
mod state;

pub use error::InputError;
pub use history::{CalculationHistory, HistoryItem, DEFAULT_HISTORY_CAPACITY};
pub use operation::{MemoryOp, Operation};
pub use state::{CalculatorState, Phase, ERROR_SENTINEL};
