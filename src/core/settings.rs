//! Tunable limits for entry length, rounding and the error reset.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Calculator settings.
///
/// The defaults reproduce the classic keypad behaviour: 15 character
/// entries, 12 significant digits, a 6 digit exponential fallback and an
/// Error display that clears itself after 1.8 seconds.
///
/// Settings built by hand are not validated; use
/// [`CalculatorBuilder`](crate::builder::CalculatorBuilder) to get a
/// checked configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Maximum characters in the entry and in formatted results.
    pub max_entry_len: usize,
    /// Significant digits kept when rounding results.
    pub significant_digits: usize,
    /// Fractional digits of the exponential fallback format.
    pub exponent_digits: usize,
    /// How long the Error display stays up before the calculator resets.
    pub error_reset_delay: Duration,
}

impl Settings {
    pub const DEFAULT_MAX_ENTRY_LEN: usize = 15;
    pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 12;
    pub const DEFAULT_EXPONENT_DIGITS: usize = 6;
    pub const DEFAULT_ERROR_RESET_DELAY: Duration = Duration::from_millis(1800);
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_entry_len: Self::DEFAULT_MAX_ENTRY_LEN,
            significant_digits: Self::DEFAULT_SIGNIFICANT_DIGITS,
            exponent_digits: Self::DEFAULT_EXPONENT_DIGITS,
            error_reset_delay: Self::DEFAULT_ERROR_RESET_DELAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_keypad_limits() {
        let settings = Settings::default();
        assert_eq!(settings.max_entry_len, 15);
        assert_eq!(settings.significant_digits, 12);
        assert_eq!(settings.exponent_digits, 6);
        assert_eq!(settings.error_reset_delay, Duration::from_millis(1800));
    }

    #[test]
    fn settings_serialize_correctly() {
        let settings = Settings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, deserialized);
    }
}
