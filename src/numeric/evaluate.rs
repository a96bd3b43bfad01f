//! Binary evaluation of a pending operation.

use super::format::{encode, parse_operand};
use crate::core::Operation;
use thiserror::Error;

/// Reasons an evaluation produces the error sentinel instead of a value.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("result is not a finite number")]
    Overflow,
}

/// Evaluate `left op right` and return the canonical result text.
///
/// Operands are parsed with [`parse_operand`], so malformed text counts
/// as zero. Division by a right operand that parses to exactly zero
/// fails with [`EvaluationError::DivisionByZero`].
///
/// # Example
///
/// ```rust
/// use keypad_calc::core::Operation;
/// use keypad_calc::numeric::{evaluate, EvaluationError};
///
/// assert_eq!(evaluate("5", Operation::Add, "3").unwrap(), "8");
/// assert_eq!(evaluate("200", Operation::Percent, "5").unwrap(), "10");
/// assert_eq!(
///     evaluate("1", Operation::Divide, "0"),
///     Err(EvaluationError::DivisionByZero)
/// );
/// ```
pub fn evaluate(left: &str, operation: Operation, right: &str) -> Result<String, EvaluationError> {
    let a = parse_operand(left);
    let b = parse_operand(right);

    let result = match operation {
        Operation::Add => a + b,
        Operation::Subtract => a - b,
        Operation::Multiply => a * b,
        Operation::Divide => {
            if b == 0.0 {
                return Err(EvaluationError::DivisionByZero);
            }
            a / b
        }
        Operation::Percent => a * (b / 100.0),
    };

    if !result.is_finite() {
        return Err(EvaluationError::Overflow);
    }
    Ok(encode(result))
}
