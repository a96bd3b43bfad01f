//! Errors raised while decoding external input into calculator actions.

use thiserror::Error;

/// Errors that can occur when translating keys, labels, or characters
/// into calculator inputs.
///
/// The engine's transitions themselves never fail; these errors only
/// arise at the boundary where a collaborator hands over raw input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("'{0}' is not a decimal digit")]
    InvalidDigit(char),

    #[error("'{0}' is not a calculator operator")]
    UnknownOperator(char),

    #[error("'{0}' is not a memory operation (expected MC, MR, M+ or M-)")]
    UnknownMemoryOp(String),
}
