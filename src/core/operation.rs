//! Binary operators and memory register operations.

use super::error::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A binary operator that can be pending between two operands.
///
/// The "no pending operator" case is modelled as `Option<Operation>::None`
/// on [`CalculatorState`](super::CalculatorState).
///
/// # Example
///
/// ```rust
/// use keypad_calc::core::Operation;
///
/// assert_eq!(Operation::Multiply.symbol(), '×');
/// assert_eq!(Operation::from_symbol('*').unwrap(), Operation::Multiply);
/// assert!(Operation::from_symbol('^').is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// Percentage-of: `left * (right / 100)`, not a modulo.
    Percent,
}

impl Operation {
    /// All operators in keypad order.
    pub const ALL: [Operation; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Percent,
    ];

    /// Symbol shown on the keypad and in history calculations.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
            Self::Percent => '%',
        }
    }

    /// Parse an operator from its display symbol or a common ASCII alias.
    pub fn from_symbol(symbol: char) -> Result<Self, InputError> {
        match symbol {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Subtract),
            '×' | '*' | 'x' => Ok(Self::Multiply),
            '÷' | '/' => Ok(Self::Divide),
            '%' => Ok(Self::Percent),
            other => Err(InputError::UnknownOperator(other)),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Operation on the single memory register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemoryOp {
    /// `MC`: reset memory to `"0"`.
    Clear,
    /// `MR`: load memory into the current entry.
    Recall,
    /// `M+`: add the current entry to memory.
    Add,
    /// `M-`: subtract the current entry from memory.
    Subtract,
}

impl MemoryOp {
    pub fn label(self) -> &'static str {
        match self {
            Self::Clear => "MC",
            Self::Recall => "MR",
            Self::Add => "M+",
            Self::Subtract => "M-",
        }
    }

    pub fn from_label(label: &str) -> Result<Self, InputError> {
        match label.trim() {
            "MC" => Ok(Self::Clear),
            "MR" => Ok(Self::Recall),
            "M+" => Ok(Self::Add),
            "M-" => Ok(Self::Subtract),
            other => Err(InputError::UnknownMemoryOp(other.to_string())),
        }
    }
}

impl fmt::Display for MemoryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
