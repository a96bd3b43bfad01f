//! The calculator engine and its input vocabulary.
//!
//! This module is the imperative shell around the pure core:
//!
//! - **Actions**: the nine external events, plus keyboard and keypad mappings
//! - **Transition**: a pure `(state, action) -> state` function
//! - **Calculator**: owns the state and the clock, installs each new state,
//!   and logs what happened
//! - **Display**: the read-only projection handed to renderers

mod action;
mod clock;
mod display;
mod machine;
mod transition;

pub use action::{Action, Button, FunctionKey, Key, KEYPAD_LAYOUT};
pub use clock::{Clock, FixedClock, SystemClock};
pub use display::DisplaySnapshot;
pub use machine::Calculator;
pub use transition::{transition, Step, StepResult, TransitionContext};
