//! Builder for constructing calculators.

use crate::builder::error::BuildError;
use crate::builder::rules::validate;
use crate::core::Settings;
use crate::shell::{Calculator, Clock, SystemClock};
use std::time::Duration;
use stillwater::validation::Validation;

/// Builder for constructing calculators with a fluent API.
///
/// # Example
///
/// ```rust
/// use calcfold::builder::CalculatorBuilder;
/// use std::time::Duration;
///
/// let calculator = CalculatorBuilder::new()
///     .max_entry_len(20)
///     .error_reset_delay(Duration::from_secs(3))
///     .build()
///     .unwrap();
///
/// assert_eq!(calculator.settings().max_entry_len, 20);
/// ```
pub struct CalculatorBuilder<C: Clock = SystemClock> {
    settings: Settings,
    clock: C,
}

impl CalculatorBuilder<SystemClock> {
    /// Create a new builder with default settings and the wall clock.
    pub fn new() -> Self {
        Self {
            settings: Settings::default(),
            clock: SystemClock,
        }
    }
}

impl Default for CalculatorBuilder<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> CalculatorBuilder<C> {
    /// Replace all settings at once.
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn max_entry_len(mut self, len: usize) -> Self {
        self.settings.max_entry_len = len;
        self
    }

    pub fn significant_digits(mut self, digits: usize) -> Self {
        self.settings.significant_digits = digits;
        self
    }

    pub fn exponent_digits(mut self, digits: usize) -> Self {
        self.settings.exponent_digits = digits;
        self
    }

    pub fn error_reset_delay(mut self, delay: Duration) -> Self {
        self.settings.error_reset_delay = delay;
        self
    }

    /// Use a different time source.
    pub fn clock<D: Clock>(self, clock: D) -> CalculatorBuilder<D> {
        CalculatorBuilder {
            settings: self.settings,
            clock,
        }
    }

    /// Build the calculator.
    /// Returns every settings violation if validation fails.
    pub fn build(self) -> Result<Calculator<C>, BuildError> {
        match validate(&self.settings) {
            Validation::Success(_) => Ok(Calculator::from_parts(self.settings, self.clock)),
            Validation::Failure(violations) => Err(BuildError::InvalidSettings(
                violations.iter().cloned().collect(),
            )),
        }
    }
}
