//! The pure transition function: `(state, action) -> state`.
//!
//! Every input event is handled here. The function never fails and never
//! mutates its input; the only outside read is the clock, consulted when
//! an evaluation is recorded in history.

use super::action::Action;
use super::clock::Clock;
use crate::core::{CalculatorState, HistoryItem, MemoryOp, Operation, ERROR_SENTINEL};
use crate::numeric::{encode, evaluate, normalize, parse_operand, DisplayRules, EvaluationError};

/// Everything a transition needs besides the state itself.
pub struct TransitionContext<'a> {
    pub rules: DisplayRules,
    pub clock: &'a dyn Clock,
}

/// What a transition did, for the shell to report.
#[derive(Clone, Debug, PartialEq)]
pub enum StepResult {
    /// The action was a no-op
    Unchanged,
    /// The state changed without evaluating anything
    Updated,
    /// A pending operation was evaluated and recorded in history
    Evaluated(HistoryItem),
    /// An evaluation or memory update failed
    Failed(EvaluationError),
}

/// New state plus a description of how it was reached.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub state: CalculatorState,
    pub result: StepResult,
}

impl Step {
    fn changed(from: &CalculatorState, state: CalculatorState) -> Self {
        let result = if state == *from {
            StepResult::Unchanged
        } else {
            StepResult::Updated
        };
        Self { state, result }
    }
}

/// Apply one action to `state`.
///
/// # Example
///
/// ```rust
/// use keypad_calc::core::{CalculatorState, Operation};
/// use keypad_calc::engine::{transition, Action, SystemClock, TransitionContext};
/// use keypad_calc::numeric::DisplayRules;
///
/// let ctx = TransitionContext { rules: DisplayRules::default(), clock: &SystemClock };
/// let mut state = CalculatorState::default();
/// for action in [
///     Action::Digit(5),
///     Action::Operator(Operation::Add),
///     Action::Digit(3),
///     Action::Equals,
/// ] {
///     state = transition(&state, action, &ctx).state;
/// }
/// assert_eq!(state.current_value, "8");
/// ```
pub fn transition(state: &CalculatorState, action: Action, ctx: &TransitionContext<'_>) -> Step {
    match action {
        Action::Digit(d) => Step::changed(state, enter_digit(state, d, &ctx.rules)),
        Action::DecimalPoint => Step::changed(state, decimal_point(state)),
        Action::Operator(op) => choose_operator(state, op, ctx),
        Action::Equals => equals(state, ctx),
        Action::AllClear => Step::changed(state, state.reset()),
        Action::ClearEntry => Step::changed(
            state,
            CalculatorState {
                current_value: "0".to_string(),
                waiting_for_operand: false,
                ..state.clone()
            },
        ),
        Action::Negate => Step::changed(state, negate(state)),
        Action::Memory(op) => memory(state, op, &ctx.rules),
        Action::SelectHistory(index) => Step::changed(state, select_history(state, index)),
    }
}

fn enter_digit(state: &CalculatorState, digit: u8, rules: &DisplayRules) -> CalculatorState {
    let Some(d) = char::from_digit(u32::from(digit), 10) else {
        return state.clone();
    };

    let mut next = state.clone();
    if state.waiting_for_operand {
        next.current_value = d.to_string();
        next.waiting_for_operand = false;
    } else if state.current_value == "0" {
        // "0" followed by "0" stays "0"
        if d != '0' {
            next.current_value = d.to_string();
        }
    } else {
        let grown = format!("{}{}", state.current_value, d);
        next.current_value = normalize(&grown, rules);
    }
    next
}

fn decimal_point(state: &CalculatorState) -> CalculatorState {
    let mut next = state.clone();
    if state.waiting_for_operand {
        next.current_value = "0.".to_string();
        next.waiting_for_operand = false;
    } else if !state.current_value.contains('.') {
        next.current_value.push('.');
    }
    next
}

/// Evaluate the pending operation of `state` and record it.
///
/// Returns the text to show and the step result. Failed evaluations
/// leave history untouched.
fn complete(
    state: &CalculatorState,
    operation: Operation,
    ctx: &TransitionContext<'_>,
    next: &mut CalculatorState,
) -> (String, StepResult) {
    match evaluate(&state.previous_value, operation, &state.current_value) {
        Ok(raw) => {
            let result = normalize(&raw, &ctx.rules);
            let item = HistoryItem {
                calculation: format!(
                    "{} {} {}",
                    state.previous_value, operation, state.current_value
                ),
                result: result.clone(),
                timestamp: ctx.clock.now(),
            };
            next.history = state.history.record(item.clone());
            (result, StepResult::Evaluated(item))
        }
        Err(error) => (ERROR_SENTINEL.to_string(), StepResult::Failed(error)),
    }
}

fn choose_operator(state: &CalculatorState, op: Operation, ctx: &TransitionContext<'_>) -> Step {
    let mut next = state.clone();
    match state.operation {
        Some(pending) if !state.waiting_for_operand => {
            let (result, step_result) = complete(state, pending, ctx, &mut next);
            next.current_value = result.clone();
            next.previous_value = result;
            next.operation = Some(op);
            next.waiting_for_operand = true;
            Step {
                state: next,
                result: step_result,
            }
        }
        _ => {
            next.previous_value = state.current_value.clone();
            next.operation = Some(op);
            next.waiting_for_operand = true;
            Step::changed(state, next)
        }
    }
}

fn equals(state: &CalculatorState, ctx: &TransitionContext<'_>) -> Step {
    let Some(operation) = state.operation else {
        return Step {
            state: state.clone(),
            result: StepResult::Unchanged,
        };
    };

    let mut next = state.clone();
    let (result, step_result) = complete(state, operation, ctx, &mut next);
    next.current_value = result;
    next.previous_value.clear();
    next.operation = None;
    next.waiting_for_operand = true;
    Step {
        state: next,
        result: step_result,
    }
}

/// Toggle the sign; `"0"` and the error sentinel are left as they are.
fn negate(state: &CalculatorState) -> CalculatorState {
    let mut next = state.clone();
    if state.current_value == "0" || state.has_error() {
        return next;
    }
    next.current_value = match state.current_value.strip_prefix('-') {
        Some(positive) => positive.to_string(),
        None => format!("-{}", state.current_value),
    };
    next
}

fn memory(state: &CalculatorState, op: MemoryOp, rules: &DisplayRules) -> Step {
    let mut next = state.clone();
    let combined = match op {
        MemoryOp::Clear => {
            next.memory = "0".to_string();
            return Step::changed(state, next);
        }
        MemoryOp::Recall => {
            next.current_value = normalize(&state.memory, rules);
            next.waiting_for_operand = false;
            return Step::changed(state, next);
        }
        MemoryOp::Add => parse_operand(&state.memory) + parse_operand(&state.current_value),
        MemoryOp::Subtract => parse_operand(&state.memory) - parse_operand(&state.current_value),
    };

    if !combined.is_finite() {
        return Step {
            state: next,
            result: StepResult::Failed(EvaluationError::Overflow),
        };
    }
    next.memory = encode(combined);
    Step::changed(state, next)
}

fn select_history(state: &CalculatorState, index: usize) -> CalculatorState {
    let Some(item) = state.history.get(index) else {
        return state.clone();
    };
    let mut next = state.reset();
    next.current_value = item.result.clone();
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::clock::FixedClock;
    use chrono::{TimeZone, Utc};

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap())
    }

    fn run(actions: &[Action]) -> CalculatorState {
        run_from(CalculatorState::default(), actions)
    }

    fn run_from(mut state: CalculatorState, actions: &[Action]) -> CalculatorState {
        let clock = clock();
        let ctx = TransitionContext {
            rules: DisplayRules::default(),
            clock: &clock,
        };
        for action in actions {
            state = transition(&state, *action, &ctx).state;
        }
        state
    }

    fn digits(text: &str) -> Vec<Action> {
        text.chars().map(|c| Action::digit(c).unwrap()).collect()
    }

    #[test]
    fn leading_zeros_are_suppressed() {
        let state = run(&[Action::Digit(0), Action::Digit(0)]);
        assert_eq!(state.current_value, "0");

        let state = run(&[Action::Digit(0), Action::Digit(7)]);
        assert_eq!(state.current_value, "7");
    }

    #[test]
    fn digits_append() {
        let state = run(&digits("1230"));
        assert_eq!(state.current_value, "1230");
    }

    #[test]
    fn decimal_point_is_added_once() {
        let state = run(&[
            Action::Digit(1),
            Action::DecimalPoint,
            Action::Digit(5),
            Action::DecimalPoint,
            Action::Digit(0),
        ]);
        assert_eq!(state.current_value, "1.50");
    }

    #[test]
    fn decimal_point_after_operator_starts_fresh() {
        let state = run(&[
            Action::Digit(4),
            Action::Operator(Operation::Add),
            Action::DecimalPoint,
            Action::Digit(5),
        ]);
        assert_eq!(state.current_value, "0.5");
        assert!(!state.waiting_for_operand);
    }

    #[test]
    fn zero_after_decimal_point_is_kept() {
        let state = run(&[Action::DecimalPoint, Action::Digit(0), Action::Digit(0)]);
        assert_eq!(state.current_value, "0.00");
    }

    #[test]
    fn operator_captures_left_operand() {
        let state = run(&[Action::Digit(5), Action::Operator(Operation::Add)]);
        assert_eq!(state.previous_value, "5");
        assert_eq!(state.current_value, "5");
        assert_eq!(state.operation, Some(Operation::Add));
        assert!(state.waiting_for_operand);
    }

    #[test]
    fn repeated_operator_replaces_pending_one() {
        let state = run(&[
            Action::Digit(5),
            Action::Operator(Operation::Add),
            Action::Operator(Operation::Multiply),
        ]);
        assert_eq!(state.operation, Some(Operation::Multiply));
        assert_eq!(state.previous_value, "5");
        assert!(state.history.is_empty());
    }

    #[test]
    fn chained_operators_evaluate_left_to_right() {
        let state = run(&[
            Action::Digit(5),
            Action::Operator(Operation::Add),
            Action::Digit(3),
            Action::Operator(Operation::Multiply),
        ]);
        assert_eq!(state.current_value, "8");
        assert_eq!(state.previous_value, "8");
        assert_eq!(state.operation, Some(Operation::Multiply));
        assert_eq!(state.history.latest().unwrap().calculation, "5 + 3");
    }

    #[test]
    fn equals_without_operator_is_unchanged() {
        let clock = clock();
        let ctx = TransitionContext {
            rules: DisplayRules::default(),
            clock: &clock,
        };
        let state = run(&digits("42"));
        let step = transition(&state, Action::Equals, &ctx);
        assert_eq!(step.result, StepResult::Unchanged);
        assert_eq!(step.state, state);
    }

    #[test]
    fn equals_records_timestamped_history() {
        let state = run(&[
            Action::Digit(9),
            Action::Operator(Operation::Subtract),
            Action::Digit(4),
            Action::Equals,
        ]);
        let item = state.history.latest().unwrap();
        assert_eq!(item.calculation, "9 - 4");
        assert_eq!(item.result, "5");
        assert_eq!(item.timestamp, clock().0);
        assert_eq!(state.operation, None);
        assert_eq!(state.previous_value, "");
        assert!(state.waiting_for_operand);
    }

    #[test]
    fn division_by_zero_shows_error_without_history() {
        let clock = clock();
        let ctx = TransitionContext {
            rules: DisplayRules::default(),
            clock: &clock,
        };
        let state = run(&[
            Action::Digit(8),
            Action::Operator(Operation::Divide),
            Action::Digit(0),
        ]);
        let step = transition(&state, Action::Equals, &ctx);
        assert_eq!(step.result, StepResult::Failed(EvaluationError::DivisionByZero));
        assert_eq!(step.state.current_value, ERROR_SENTINEL);
        assert!(step.state.history.is_empty());
    }

    #[test]
    fn error_operand_reads_as_zero() {
        let state = run(&[
            Action::Digit(8),
            Action::Operator(Operation::Divide),
            Action::Digit(0),
            Action::Equals,
            Action::Operator(Operation::Add),
            Action::Digit(5),
            Action::Equals,
        ]);
        assert_eq!(state.current_value, "5");
        assert_eq!(state.history.latest().unwrap().calculation, "Error + 5");
    }

    #[test]
    fn results_are_normalized() {
        let state = run(&[
            Action::Digit(1),
            Action::Operator(Operation::Divide),
            Action::Digit(3),
            Action::Equals,
        ]);
        assert_eq!(state.current_value, "0.33333333333");
        assert_eq!(state.history.latest().unwrap().result, "0.33333333333");
    }

    #[test]
    fn clear_entry_keeps_pending_operation() {
        let state = run(&[
            Action::Digit(6),
            Action::Operator(Operation::Multiply),
            Action::Digit(9),
            Action::ClearEntry,
            Action::Digit(2),
            Action::Equals,
        ]);
        assert_eq!(state.current_value, "12");
    }

    #[test]
    fn all_clear_resets_everything_but_memory() {
        let state = run(&[
            Action::Digit(6),
            Action::Memory(MemoryOp::Add),
            Action::Operator(Operation::Multiply),
            Action::Digit(2),
            Action::Equals,
            Action::AllClear,
        ]);
        assert_eq!(
            state,
            CalculatorState {
                memory: "6".to_string(),
                ..CalculatorState::default()
            }
        );

        let state = run_from(state, &[Action::Memory(MemoryOp::Clear), Action::AllClear]);
        assert_eq!(state, CalculatorState::default());
    }

    #[test]
    fn negate_toggles_sign() {
        let state = run(&[Action::Digit(3), Action::Negate]);
        assert_eq!(state.current_value, "-3");
        let state = run_from(state, &[Action::Negate]);
        assert_eq!(state.current_value, "3");
    }

    #[test]
    fn negate_ignores_zero_and_error() {
        assert_eq!(run(&[Action::Negate]).current_value, "0");

        let state = run(&[
            Action::Digit(1),
            Action::Operator(Operation::Divide),
            Action::Digit(0),
            Action::Equals,
            Action::Negate,
        ]);
        assert_eq!(state.current_value, ERROR_SENTINEL);
    }

    #[test]
    fn memory_add_subtract_and_recall() {
        let state = run(&[
            Action::Digit(7),
            Action::Memory(MemoryOp::Add),
            Action::Memory(MemoryOp::Add),
            Action::ClearEntry,
            Action::Digit(4),
            Action::Memory(MemoryOp::Subtract),
        ]);
        assert_eq!(state.memory, "10");
        assert!(state.memory_active());

        let state = run_from(state, &[Action::Memory(MemoryOp::Recall)]);
        assert_eq!(state.current_value, "10");

        let state = run_from(state, &[Action::Memory(MemoryOp::Clear)]);
        assert_eq!(state.memory, "0");
        assert!(!state.memory_active());
    }

    #[test]
    fn memory_recall_clears_waiting_flag() {
        let state = run(&[
            Action::Digit(2),
            Action::Memory(MemoryOp::Add),
            Action::Operator(Operation::Add),
            Action::Memory(MemoryOp::Recall),
        ]);
        assert!(!state.waiting_for_operand);
        assert_eq!(state.current_value, "2");
    }

    #[test]
    fn memory_add_of_error_keeps_register_numeric() {
        let state = run(&[
            Action::Digit(5),
            Action::Memory(MemoryOp::Add),
            Action::Operator(Operation::Divide),
            Action::Digit(0),
            Action::Equals,
            Action::Memory(MemoryOp::Add),
        ]);
        assert_eq!(state.memory, "5");
    }

    #[test]
    fn memory_overflow_leaves_register_unchanged() {
        let clock = clock();
        let ctx = TransitionContext {
            rules: DisplayRules::default(),
            clock: &clock,
        };
        let state = CalculatorState {
            memory: encode(f64::MAX),
            current_value: encode(f64::MAX),
            ..CalculatorState::default()
        };
        let step = transition(&state, Action::Memory(MemoryOp::Add), &ctx);
        assert_eq!(step.result, StepResult::Failed(EvaluationError::Overflow));
        assert_eq!(step.state.memory, state.memory);
    }

    #[test]
    fn select_history_reloads_result() {
        let state = run(&[
            Action::Digit(2),
            Action::Operator(Operation::Multiply),
            Action::Digit(2),
            Action::Equals,
            Action::Digit(9),
            Action::SelectHistory(0),
        ]);
        assert_eq!(state.current_value, "4");
        assert!(!state.waiting_for_operand);
        assert_eq!(state.operation, None);
        assert!(state.history.is_empty());
    }

    #[test]
    fn select_history_out_of_range_is_noop() {
        let state = run(&digits("31"));
        let after = run_from(state.clone(), &[Action::SelectHistory(3)]);
        assert_eq!(after, state);
    }

    #[test]
    fn thirteen_digits_switch_to_exponent() {
        let state = run(&digits("1234567890123"));
        assert_eq!(state.current_value, "1.234568e12");
    }

    #[test]
    fn digits_after_exponent_form_extend_the_exponent() {
        let state = run(&digits("12345678901234"));
        assert_eq!(state.current_value, "1.234568e124");

        // Past the f64 range the text no longer parses and is only truncated.
        let state = run(&digits("1234567890123456"));
        assert_eq!(state.current_value, "1.234568e1245");
    }

    #[test]
    fn out_of_range_digit_is_ignored() {
        let state = run(&[Action::Digit(4), Action::Digit(12)]);
        assert_eq!(state.current_value, "4");
    }
}
