//! Builder for constructing calculators.

use super::config::EngineConfig;
use super::error::BuildError;
use crate::engine::{Calculator, Clock, SystemClock};

/// Builder for constructing calculators with a fluent API.
///
/// # Example
///
/// ```rust
/// use keypad_calc::builder::CalculatorBuilder;
///
/// let calc = CalculatorBuilder::new()
///     .history_capacity(3)
///     .max_digits(10)
///     .build()
///     .unwrap();
/// assert_eq!(calc.state().history.capacity(), 3);
///
/// assert!(CalculatorBuilder::new().history_capacity(0).build().is_err());
/// ```
pub struct CalculatorBuilder {
    config: EngineConfig,
    clock: Option<Box<dyn Clock>>,
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorBuilder {
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            clock: None,
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.config.history_capacity = capacity;
        self
    }

    pub fn max_digits(mut self, digits: usize) -> Self {
        self.config.max_digits = digits;
        self
    }

    pub fn exponent_precision(mut self, precision: usize) -> Self {
        self.config.exponent_precision = precision;
        self
    }

    /// Time source for history timestamps. Defaults to [`SystemClock`].
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Build the calculator.
    /// Returns an error if the configuration is invalid.
    pub fn build(self) -> Result<Calculator, BuildError> {
        self.config.validate()?;
        let clock = self.clock.unwrap_or_else(|| Box::new(SystemClock));
        Ok(Calculator::from_parts(&self.config, clock))
    }
}
