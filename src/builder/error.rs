//! Build errors for the calculator builder.

use thiserror::Error;

/// A single problem found while validating settings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SettingsViolation {
    #[error("significant_digits must be between 1 and 17 (got {0})")]
    SignificantDigits(usize),

    #[error("exponent_digits must be at most 16 (got {0})")]
    ExponentDigits(usize),

    #[error(
        "max_entry_len ({max_entry_len}) is too short for the exponential format, \
         which needs {required} characters"
    )]
    EntryTooShort { max_entry_len: usize, required: usize },

    #[error("error_reset_delay must be greater than zero")]
    ZeroResetDelay,
}

/// Errors that can occur when building a calculator.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid settings: {}", join(.0))]
    InvalidSettings(Vec<SettingsViolation>),
}

fn join(violations: &[SettingsViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
