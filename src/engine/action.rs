//! External events and the collaborator mappings that produce them.
//!
//! [`Action`] is the complete input vocabulary of the engine. [`Key`] and
//! [`Button`] describe the keyboard and keypad collaborators; each maps
//! onto an `Action` and the host dispatches it explicitly.

use crate::core::{InputError, MemoryOp, Operation};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One logical input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// A decimal digit, `0..=9`
    Digit(u8),
    DecimalPoint,
    Operator(Operation),
    Equals,
    AllClear,
    ClearEntry,
    Negate,
    Memory(MemoryOp),
    /// Reload the result of the history entry at this index (0 = newest)
    SelectHistory(usize),
}

impl Action {
    /// Build a digit action from a character.
    ///
    /// # Example
    ///
    /// ```rust
    /// use keypad_calc::engine::Action;
    ///
    /// assert_eq!(Action::digit('7').unwrap(), Action::Digit(7));
    /// assert!(Action::digit('a').is_err());
    /// ```
    pub fn digit(c: char) -> Result<Self, InputError> {
        c.to_digit(10)
            .map(|d| Self::Digit(d as u8))
            .ok_or(InputError::InvalidDigit(c))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::DecimalPoint => f.write_str("."),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Equals => f.write_str("="),
            Self::AllClear => f.write_str("AC"),
            Self::ClearEntry => f.write_str("CE"),
            Self::Negate => f.write_str("±"),
            Self::Memory(op) => write!(f, "{op}"),
            Self::SelectHistory(index) => write!(f, "history[{index}]"),
        }
    }
}

/// A key press delivered by the keyboard collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Backspace,
}

impl Key {
    /// Parse a key name as reported by common UI toolkits.
    ///
    /// Single characters map to [`Key::Char`]; `Enter`, `Escape`/`Esc` and
    /// `Backspace` map to their named keys.
    pub fn from_name(name: &str) -> Option<Self> {
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(Self::Char(c)),
            _ => match name {
                "Enter" | "Return" => Some(Self::Enter),
                "Escape" | "Esc" => Some(Self::Escape),
                "Backspace" => Some(Self::Backspace),
                _ => None,
            },
        }
    }

    /// Action bound to this key, if any.
    ///
    /// # Example
    ///
    /// ```rust
    /// use keypad_calc::core::Operation;
    /// use keypad_calc::engine::{Action, Key};
    ///
    /// assert_eq!(Key::Char('*').to_action(), Some(Action::Operator(Operation::Multiply)));
    /// assert_eq!(Key::Enter.to_action(), Some(Action::Equals));
    /// assert_eq!(Key::Char('q').to_action(), None);
    /// ```
    pub fn to_action(&self) -> Option<Action> {
        match *self {
            Self::Char(c) if c.is_ascii_digit() => Action::digit(c).ok(),
            Self::Char('+') => Some(Action::Operator(Operation::Add)),
            Self::Char('-') => Some(Action::Operator(Operation::Subtract)),
            Self::Char('*') => Some(Action::Operator(Operation::Multiply)),
            Self::Char('/') => Some(Action::Operator(Operation::Divide)),
            Self::Char('%') => Some(Action::Operator(Operation::Percent)),
            Self::Char('=') | Self::Enter => Some(Action::Equals),
            Self::Char('.') => Some(Action::DecimalPoint),
            Self::Escape => Some(Action::AllClear),
            Self::Backspace => Some(Action::ClearEntry),
            Self::Char(_) => None,
        }
    }
}

/// Non-numeric, non-operator keypad functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FunctionKey {
    Clear,
    ClearEntry,
    Negate,
    Equals,
    Decimal,
}

/// A button on the on-screen keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Button {
    Number(u8),
    Operation(Operation),
    Function(FunctionKey),
    Memory(MemoryOp),
}

/// Keypad buttons in row order, four per row.
pub const KEYPAD_LAYOUT: [Button; 24] = [
    Button::Memory(MemoryOp::Clear),
    Button::Memory(MemoryOp::Recall),
    Button::Memory(MemoryOp::Add),
    Button::Memory(MemoryOp::Subtract),
    Button::Function(FunctionKey::Clear),
    Button::Function(FunctionKey::ClearEntry),
    Button::Function(FunctionKey::Negate),
    Button::Operation(Operation::Percent),
    Button::Number(7),
    Button::Number(8),
    Button::Number(9),
    Button::Operation(Operation::Divide),
    Button::Number(4),
    Button::Number(5),
    Button::Number(6),
    Button::Operation(Operation::Multiply),
    Button::Number(1),
    Button::Number(2),
    Button::Number(3),
    Button::Operation(Operation::Subtract),
    Button::Number(0),
    Button::Function(FunctionKey::Decimal),
    Button::Function(FunctionKey::Equals),
    Button::Operation(Operation::Add),
];

impl Button {
    pub fn action(self) -> Action {
        match self {
            Self::Number(d) => Action::Digit(d),
            Self::Operation(op) => Action::Operator(op),
            Self::Function(FunctionKey::Clear) => Action::AllClear,
            Self::Function(FunctionKey::ClearEntry) => Action::ClearEntry,
            Self::Function(FunctionKey::Negate) => Action::Negate,
            Self::Function(FunctionKey::Equals) => Action::Equals,
            Self::Function(FunctionKey::Decimal) => Action::DecimalPoint,
            Self::Memory(op) => Action::Memory(op),
        }
    }

    /// Text printed on the button.
    pub fn label(self) -> String {
        self.action().to_string()
    }

    /// Find a keypad button by its label.
    pub fn from_label(label: &str) -> Option<Self> {
        KEYPAD_LAYOUT
            .iter()
            .copied()
            .find(|button| button.label() == label)
    }
}
