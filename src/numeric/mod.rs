//! Numeric helpers operating on numeral text.
//!
//! Operands stay textual everywhere else in the crate; this module is the
//! only place where text is parsed into `f64` and re-encoded. All functions
//! are total and pure.

mod evaluate;
mod format;

pub use evaluate::{evaluate, EvaluationError};
pub use format::{encode, group_thousands, normalize, parse_operand, DisplayRules};
