//! Read-only projection of the state for the presentation layer.

use crate::core::{CalculatorState, HistoryItem, Operation, Phase};
use crate::numeric::group_thousands;
use serde::{Deserialize, Serialize};

/// Everything a renderer needs, detached from the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplaySnapshot {
    /// Current entry or result, exactly as stored
    pub display_value: String,
    /// `display_value` with thousands separators
    pub formatted_value: String,
    pub previous_value: String,
    pub operation: Option<Operation>,
    /// `"<previous> <op>"` while an operator is pending, otherwise empty
    pub expression: String,
    pub memory_active: bool,
    pub waiting_for_operand: bool,
    pub phase: Phase,
    /// Newest first
    pub history: Vec<HistoryItem>,
}

impl From<&CalculatorState> for DisplaySnapshot {
    fn from(state: &CalculatorState) -> Self {
        let expression = match state.operation {
            Some(op) if !state.previous_value.is_empty() => {
                format!("{} {}", group_thousands(&state.previous_value), op)
            }
            _ => String::new(),
        };

        Self {
            display_value: state.current_value.clone(),
            formatted_value: group_thousands(&state.current_value),
            previous_value: state.previous_value.clone(),
            operation: state.operation,
            expression,
            memory_active: state.memory_active(),
            waiting_for_operand: state.waiting_for_operand,
            phase: state.phase(),
            history: state.history.items().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_snapshot() {
        let snapshot = DisplaySnapshot::from(&CalculatorState::default());
        assert_eq!(snapshot.display_value, "0");
        assert_eq!(snapshot.formatted_value, "0");
        assert_eq!(snapshot.expression, "");
        assert!(!snapshot.memory_active);
        assert_eq!(snapshot.phase, Phase::Idle);
        assert!(snapshot.history.is_empty());
    }

    #[test]
    fn pending_operator_builds_expression() {
        let state = CalculatorState {
            current_value: "1234567".to_string(),
            previous_value: "1234567".to_string(),
            operation: Some(Operation::Divide),
            waiting_for_operand: true,
            ..CalculatorState::default()
        };
        let snapshot = DisplaySnapshot::from(&state);
        assert_eq!(snapshot.formatted_value, "1,234,567");
        assert_eq!(snapshot.expression, "1,234,567 ÷");
        assert_eq!(snapshot.phase, Phase::OperatorPending);
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let snapshot = DisplaySnapshot::from(&CalculatorState::default());
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["display_value"], "0");
        assert_eq!(json["memory_active"], false);
        assert_eq!(json["phase"], "Idle");
    }
}
