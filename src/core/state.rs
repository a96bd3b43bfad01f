//! The calculator's single mutable entity and its derived phase.

use super::history::CalculationHistory;
use super::operation::Operation;
use serde::{Deserialize, Serialize};

/// Sentinel shown in place of a number after a failed evaluation.
pub const ERROR_SENTINEL: &str = "Error";

/// Complete state of the calculator.
///
/// Numeric fields are kept as text so that partial entries such as `"0."`
/// or `"12.50"` survive exactly as typed. Text is only parsed at
/// evaluation time.
///
/// Invariants maintained by every transition:
/// - `operation.is_none()` if and only if `previous_value` is empty
/// - `memory` is always a numeral, never [`ERROR_SENTINEL`]
/// - `history` never exceeds its capacity
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    pub current_value: String,
    pub previous_value: String,
    pub operation: Option<Operation>,
    pub memory: String,
    pub waiting_for_operand: bool,
    pub history: CalculationHistory,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::with_history_capacity(super::history::DEFAULT_HISTORY_CAPACITY)
    }
}

impl CalculatorState {
    /// Initial state whose history holds at most `capacity` entries.
    pub fn with_history_capacity(capacity: usize) -> Self {
        Self {
            current_value: "0".to_string(),
            previous_value: String::new(),
            operation: None,
            memory: "0".to_string(),
            waiting_for_operand: false,
            history: CalculationHistory::with_capacity(capacity),
        }
    }

    /// Initial state for an all-clear.
    ///
    /// Keeps the history capacity and the memory register; only `MC`
    /// clears memory.
    pub fn reset(&self) -> Self {
        Self {
            memory: self.memory.clone(),
            ..Self::with_history_capacity(self.history.capacity())
        }
    }

    pub fn has_error(&self) -> bool {
        self.current_value == ERROR_SENTINEL
    }

    pub fn memory_active(&self) -> bool {
        self.memory != "0"
    }

    /// Named position of this state in the entry cycle.
    pub fn phase(&self) -> Phase {
        if self.has_error() {
            Phase::Error
        } else {
            match (self.operation.is_some(), self.waiting_for_operand) {
                (true, true) => Phase::OperatorPending,
                (true, false) => Phase::EnteringOperand,
                (false, true) => Phase::ShowingResult,
                (false, false) => Phase::Idle,
            }
        }
    }
}

/// Derived view of where the calculator sits in its entry cycle.
///
/// There is no separate error state object; [`Phase::Error`] is reported
/// whenever the current value is the error sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No operator pending; typing the first operand
    Idle,
    /// Operator chosen, next digit starts the right operand
    OperatorPending,
    /// Operator chosen, right operand being typed
    EnteringOperand,
    /// Equals just pressed, next digit starts a fresh number
    ShowingResult,
    Error,
}

impl Phase {
    pub fn name(&self) -> &str {
        match self {
            Self::Idle => "Idle",
            Self::OperatorPending => "OperatorPending",
            Self::EnteringOperand => "EnteringOperand",
            Self::ShowingResult => "ShowingResult",
            Self::Error => "Error",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}
