//! The calculator engine: owns the state and applies actions to it.

use super::action::{Action, Button, Key};
use super::clock::{Clock, SystemClock};
use super::display::DisplaySnapshot;
use super::transition::{transition, StepResult, TransitionContext};
use crate::builder::{CalculatorBuilder, EngineConfig};
use crate::core::{CalculatorState, HistoryItem, InputError, MemoryOp, Operation, Phase};
use crate::numeric::DisplayRules;
use std::fmt;
use tracing::{debug, warn};

/// Event-driven calculator.
///
/// Each action method runs one transition to completion and installs the
/// resulting state. Calls must be serialized by the host; the engine is
/// not reentrant.
///
/// # Example
///
/// ```rust
/// use keypad_calc::core::Operation;
/// use keypad_calc::engine::Calculator;
///
/// let mut calc = Calculator::new();
/// calc.digit('5').unwrap();
/// calc.operator(Operation::Add);
/// calc.digit('3').unwrap();
/// calc.operator(Operation::Multiply);
/// calc.digit('2').unwrap();
/// calc.equals();
///
/// assert_eq!(calc.display_value(), "16");
/// assert_eq!(calc.history()[0].calculation, "8 × 2");
/// assert_eq!(calc.history()[1].calculation, "5 + 3");
/// ```
pub struct Calculator {
    state: CalculatorState,
    rules: DisplayRules,
    clock: Box<dyn Clock>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculator")
            .field("state", &self.state)
            .field("rules", &self.rules)
            .finish_non_exhaustive()
    }
}

impl Calculator {
    /// Calculator with default limits and the system clock.
    pub fn new() -> Self {
        Self::from_parts(&EngineConfig::default(), Box::new(SystemClock))
    }

    pub fn builder() -> CalculatorBuilder {
        CalculatorBuilder::new()
    }

    pub(crate) fn from_parts(config: &EngineConfig, clock: Box<dyn Clock>) -> Self {
        Self {
            state: CalculatorState::with_history_capacity(config.history_capacity),
            rules: config.display_rules(),
            clock,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn display_value(&self) -> &str {
        &self.state.current_value
    }

    pub fn memory_active(&self) -> bool {
        self.state.memory_active()
    }

    /// Completed calculations, newest first.
    pub fn history(&self) -> &[HistoryItem] {
        self.state.history.items()
    }

    pub fn snapshot(&self) -> DisplaySnapshot {
        DisplaySnapshot::from(&self.state)
    }

    /// Apply a single action and report what happened.
    pub fn apply(&mut self, action: Action) -> StepResult {
        let ctx = TransitionContext {
            rules: self.rules,
            clock: self.clock.as_ref(),
        };
        let from = self.state.phase();
        let step = transition(&self.state, action, &ctx);
        self.state = step.state;

        match &step.result {
            StepResult::Unchanged => {
                debug!(%action, phase = from.name(), "action had no effect");
            }
            StepResult::Updated => {
                debug!(
                    %action,
                    from = from.name(),
                    to = self.state.phase().name(),
                    value = %self.state.current_value,
                    "transition"
                );
            }
            StepResult::Evaluated(item) => {
                debug!(
                    %action,
                    calculation = %item.calculation,
                    result = %item.result,
                    "evaluated"
                );
            }
            StepResult::Failed(error) => {
                warn!(%action, %error, "evaluation failed");
            }
        }
        step.result
    }

    /// Enter a digit character.
    ///
    /// Fails only when `digit` is not `'0'..='9'`; the state is untouched
    /// in that case.
    pub fn digit(&mut self, digit: char) -> Result<(), InputError> {
        let action = Action::digit(digit)?;
        self.apply(action);
        Ok(())
    }

    pub fn decimal_point(&mut self) {
        self.apply(Action::DecimalPoint);
    }

    pub fn operator(&mut self, operation: Operation) {
        self.apply(Action::Operator(operation));
    }

    pub fn equals(&mut self) {
        self.apply(Action::Equals);
    }

    pub fn all_clear(&mut self) {
        self.apply(Action::AllClear);
    }

    pub fn clear_entry(&mut self) {
        self.apply(Action::ClearEntry);
    }

    pub fn negate(&mut self) {
        self.apply(Action::Negate);
    }

    pub fn memory(&mut self, op: MemoryOp) {
        self.apply(Action::Memory(op));
    }

    /// Reload the result of history entry `index` (0 = newest) as a
    /// fresh entry. Equivalent to all-clear followed by typing the result.
    pub fn select_history(&mut self, index: usize) {
        self.apply(Action::SelectHistory(index));
    }

    pub fn press(&mut self, button: Button) {
        self.apply(button.action());
    }

    /// Dispatch a key press. Returns `false` when the key is unbound.
    pub fn handle_key(&mut self, key: &Key) -> bool {
        match key.to_action() {
            Some(action) => {
                self.apply(action);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::clock::FixedClock;
    use chrono::{TimeZone, Utc};

    #[test]
    fn digit_rejects_invalid_character() {
        let mut calc = Calculator::new();
        calc.digit('4').unwrap();
        assert_eq!(calc.digit('z'), Err(InputError::InvalidDigit('z')));
        assert_eq!(calc.display_value(), "4");
    }

    #[test]
    fn apply_reports_evaluation() {
        let mut calc = Calculator::new();
        calc.digit('2').unwrap();
        calc.operator(Operation::Add);
        calc.digit('2').unwrap();

        match calc.apply(Action::Equals) {
            StepResult::Evaluated(item) => assert_eq!(item.result, "4"),
            other => panic!("Expected Evaluated result, got {other:?}"),
        }
        assert_eq!(calc.apply(Action::Equals), StepResult::Unchanged);
    }

    #[test]
    fn handle_key_dispatches_bound_keys() {
        let mut calc = Calculator::new();
        for key in [
            Key::Char('1'),
            Key::Char('2'),
            Key::Char('/'),
            Key::Char('4'),
            Key::Enter,
        ] {
            assert!(calc.handle_key(&key));
        }
        assert_eq!(calc.display_value(), "3");
        assert!(!calc.handle_key(&Key::Char('q')));
        assert_eq!(calc.display_value(), "3");
    }

    #[test]
    fn backspace_and_escape_clear() {
        let mut calc = Calculator::new();
        calc.digit('9').unwrap();
        calc.operator(Operation::Subtract);
        calc.digit('3').unwrap();
        calc.handle_key(&Key::Backspace);
        assert_eq!(calc.display_value(), "0");
        assert_eq!(calc.state().operation, Some(Operation::Subtract));

        calc.handle_key(&Key::Escape);
        assert_eq!(calc.state(), &CalculatorState::default());
    }

    #[test]
    fn press_uses_button_actions() {
        let mut calc = Calculator::new();
        for label in ["7", "×", "6", "="] {
            calc.press(Button::from_label(label).unwrap());
        }
        assert_eq!(calc.display_value(), "42");
    }

    #[test]
    fn injected_clock_stamps_history() {
        let instant = Utc.with_ymd_and_hms(2030, 5, 17, 8, 30, 0).unwrap();
        let mut calc = Calculator::builder()
            .clock(FixedClock(instant))
            .build()
            .unwrap();
        calc.digit('1').unwrap();
        calc.operator(Operation::Add);
        calc.digit('1').unwrap();
        calc.equals();

        assert_eq!(calc.history()[0].timestamp, instant);
    }

    #[test]
    fn snapshot_reflects_state() {
        let mut calc = Calculator::new();
        calc.digit('7').unwrap();
        calc.memory(MemoryOp::Add);
        calc.operator(Operation::Percent);

        let snapshot = calc.snapshot();
        assert!(snapshot.memory_active);
        assert_eq!(snapshot.expression, "7 %");
        assert!(snapshot.waiting_for_operand);
    }
}
