//! Configuration and builder API for calculators.
//!
//! `EngineConfig` holds the tunable limits (history size, display digits,
//! exponent precision), can be loaded from TOML, and is validated with
//! stillwater's `Validation` so every violation is reported in one pass.

pub mod config;
pub mod error;
pub mod machine;

pub use config::{EngineConfig, MAX_SUPPORTED_DIGITS};
pub use error::{BuildError, ConfigError, ConfigViolation};
pub use machine::CalculatorBuilder;
