//! Configuration and build errors.

use thiserror::Error;

/// A single configuration limit that was not met.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("history capacity must be at least 1")]
    EmptyHistory,

    #[error("max digits must be between 1 and {max} (got {value})")]
    MaxDigitsOutOfRange { value: usize, max: usize },

    #[error("exponent precision must be at most {max} (got {value})")]
    ExponentPrecisionTooLarge { value: usize, max: usize },
}

/// Errors that can occur when loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(
        "Invalid configuration: {}",
        .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
    )]
    Invalid(Vec<ConfigViolation>),
}

/// Errors that can occur when building a calculator.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Config(#[from] ConfigError),
}
