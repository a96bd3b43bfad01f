//! Engine configuration and its validation.

use super::error::{ConfigError, ConfigViolation};
use crate::core::DEFAULT_HISTORY_CAPACITY;
use crate::numeric::DisplayRules;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Largest digit count that `f64` represents without loss.
pub const MAX_SUPPORTED_DIGITS: usize = 15;

/// Tunable limits of the engine.
///
/// Every field has a default, so a partial TOML document is enough:
///
/// ```rust
/// use keypad_calc::builder::EngineConfig;
///
/// let config = EngineConfig::from_toml_str("history_capacity = 25").unwrap();
/// assert_eq!(config.history_capacity, 25);
/// assert_eq!(config.max_digits, 12);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Completed calculations kept in history
    pub history_capacity: usize,
    /// Significant digits shown before truncation or exponential form
    pub max_digits: usize,
    /// Mantissa fraction digits in exponential form
    pub exponent_precision: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let rules = DisplayRules::default();
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            max_digits: rules.max_digits,
            exponent_precision: rules.exponent_precision,
        }
    }
}

fn check(passes: bool, violation: ConfigViolation) -> Validation<(), NonEmptyVec<ConfigViolation>> {
    if passes {
        Validation::success(())
    } else {
        Validation::fail(violation)
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn display_rules(&self) -> DisplayRules {
        DisplayRules {
            max_digits: self.max_digits,
            exponent_precision: self.exponent_precision,
        }
    }

    /// Check every limit, reporting all violations at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = vec![
            check(self.history_capacity >= 1, ConfigViolation::EmptyHistory),
            check(
                (1..=MAX_SUPPORTED_DIGITS).contains(&self.max_digits),
                ConfigViolation::MaxDigitsOutOfRange {
                    value: self.max_digits,
                    max: MAX_SUPPORTED_DIGITS,
                },
            ),
            check(
                self.exponent_precision <= MAX_SUPPORTED_DIGITS,
                ConfigViolation::ExponentPrecisionTooLarge {
                    value: self.exponent_precision,
                    max: MAX_SUPPORTED_DIGITS,
                },
            ),
        ];

        match Validation::all_vec(checks).map(|_| ()) {
            Validation::Success(()) => Ok(()),
            Validation::Failure(violations) => {
                Err(ConfigError::Invalid(violations.iter().cloned().collect()))
            }
        }
    }
}
