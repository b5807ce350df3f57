//! Settings validation using Validation.
//!
//! Every rule is checked and all violations are reported together, so a
//! misconfigured host learns about each problem in one pass.

use crate::builder::error::SettingsViolation;
use crate::core::Settings;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Most significant digits an `f64` can meaningfully carry.
pub const MAX_SIGNIFICANT_DIGITS: usize = 17;

/// Most fractional digits allowed in the exponential fallback.
pub const MAX_EXPONENT_DIGITS: usize = 16;

/// Characters of the exponential format besides its fractional digits:
/// sign, lead digit, decimal point and an exponent such as `e-308`.
const EXPONENTIAL_OVERHEAD: usize = 8;

/// Check `settings`, accumulating ALL violations.
pub fn validate(settings: &Settings) -> Validation<(), NonEmptyVec<SettingsViolation>> {
    let required = settings.exponent_digits + EXPONENTIAL_OVERHEAD;

    let checks = vec![
        check(
            (1..=MAX_SIGNIFICANT_DIGITS).contains(&settings.significant_digits),
            SettingsViolation::SignificantDigits(settings.significant_digits),
        ),
        check(
            settings.exponent_digits <= MAX_EXPONENT_DIGITS,
            SettingsViolation::ExponentDigits(settings.exponent_digits),
        ),
        check(
            settings.max_entry_len >= required,
            SettingsViolation::EntryTooShort {
                max_entry_len: settings.max_entry_len,
                required,
            },
        ),
        check(
            !settings.error_reset_delay.is_zero(),
            SettingsViolation::ZeroResetDelay,
        ),
    ];

    Validation::all_vec(checks).map(|_| ())
}

fn check(
    passed: bool,
    violation: SettingsViolation,
) -> Validation<(), NonEmptyVec<SettingsViolation>> {
    if passed {
        Validation::success(())
    } else {
        Validation::fail(violation)
    }
}
