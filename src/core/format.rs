//! Conversion between entry text and numbers.
//!
//! Every place that turns the entry into a number goes through
//! [`parse_entry`], and every number shown to the user goes through
//! [`format_result`]. Keeping the two conversions here means rounding is
//! applied in exactly one way.

use super::settings::Settings;

/// Text shown for failed or non-finite results.
pub const ERROR_TEXT: &str = "Error";

/// Decimal exponent at which plain notation switches to exponential.
const PLAIN_EXPONENT_LIMIT: i32 = 21;

/// Significant digits in the longest exact decimal expansion of an `f64`.
const EXACT_DIGITS: usize = 767;

/// Format a result for display.
///
/// The value is rounded to `significant_digits` to hide floating point
/// noise (`0.1 + 0.2` shows as `0.3`). When the plain rendering is longer
/// than `max_entry_len` the value is re-rendered in scientific notation
/// with `exponent_digits` fractional digits.
///
/// ```rust
/// use calcfold::core::{format_result, Settings};
///
/// let settings = Settings::default();
/// assert_eq!(format_result(0.1 + 0.2, &settings), "0.3");
/// assert_eq!(format_result(1.0 / 3.0, &settings), "0.333333333333");
/// assert_eq!(format_result(1e20, &settings), "1e+20");
/// assert_eq!(format_result(f64::NAN, &settings), "Error");
/// ```
pub fn format_result(value: f64, settings: &Settings) -> String {
    if !value.is_finite() {
        return ERROR_TEXT.to_string();
    }

    let rounded = round_significant(value, settings.significant_digits);
    if !rounded.is_finite() {
        return ERROR_TEXT.to_string();
    }

    let text = render_plain(rounded);
    if text.len() <= settings.max_entry_len {
        return text;
    }
    render_exponential(value, settings.exponent_digits)
}

/// Parse the entry as a number.
///
/// Parsing is lenient: the longest numeric prefix is used, so `"12."`
/// reads as 12 and `"1.5e+"` as 1.5. Text without a numeric prefix, such
/// as `"Error"` or a lone `"-"`, yields `None`.
pub fn parse_entry(text: &str) -> Option<f64> {
    let text = text.trim();
    let numeric_len = text
        .find(|c: char| !matches!(c, '0'..='9' | '.' | '-' | '+' | 'e' | 'E'))
        .unwrap_or(text.len());

    (1..=numeric_len)
        .rev()
        .find_map(|end| text[..end].parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

/// Round to `digits` significant digits, exact ties away from zero.
fn round_significant(value: f64, digits: usize) -> f64 {
    let precision = digits.max(1) - 1;
    let text = if is_exact_tie(value, precision) {
        round_tie_away(value, precision)
    } else {
        format!("{:.*e}", precision, value)
    };
    text.parse().unwrap_or(value)
}

/// True when the exact value of `value` sits halfway between two
/// candidates with `precision` fractional mantissa digits.
///
/// `{:.*e}` settles such ties to even, so they are handled separately.
fn is_exact_tie(value: f64, precision: usize) -> bool {
    let exact = format!("{:.*e}", EXACT_DIGITS, value.abs());
    let (mantissa, _) = exact.split_once('e').unwrap_or((exact.as_str(), "0"));
    let digits: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();

    match digits.get(precision + 1..) {
        Some([b'5', rest @ ..]) => rest.iter().all(|&d| d == b'0'),
        _ => false,
    }
}

/// Round a tie up in magnitude by bumping the last kept digit.
fn round_tie_away(value: f64, precision: usize) -> String {
    // The tie has an exact rendering one digit longer than the target.
    let rendered = format!("{:.*e}", precision + 1, value.abs());
    let (mantissa, exponent) = rendered
        .split_once('e')
        .unwrap_or((rendered.as_str(), "0"));
    let mut exponent: i32 = exponent.parse().unwrap_or(0);
    let mut digits: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();
    digits.truncate(precision + 1);

    let mut carry = true;
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            carry = false;
            break;
        }
    }
    if carry {
        digits.insert(0, b'1');
        digits.truncate(precision + 1);
        exponent += 1;
    }

    let digits = String::from_utf8_lossy(&digits);
    let sign = if value < 0.0 { "-" } else { "" };
    let (lead, rest) = digits.split_at(1);
    if rest.is_empty() {
        format!("{sign}{lead}e{exponent}")
    } else {
        format!("{sign}{lead}.{rest}e{exponent}")
    }
}

/// Shortest round-trip digits and the decimal exponent of the first one.
fn decompose(value: f64) -> (String, i32) {
    let rendered = format!("{:e}", value.abs());
    let (mantissa, exponent) = rendered
        .split_once('e')
        .unwrap_or((rendered.as_str(), "0"));
    let digits = mantissa.chars().filter(char::is_ascii_digit).collect();
    (digits, exponent.parse().unwrap_or(0))
}

fn render_plain(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let (digits, exponent) = decompose(value);
    let sign = if value < 0.0 { "-" } else { "" };
    let len = digits.len() as i32;
    // Position of the decimal point relative to the first digit.
    let point = exponent + 1;

    let body = if len <= point && point <= PLAIN_EXPONENT_LIMIT {
        format!("{digits}{}", "0".repeat((point - len) as usize))
    } else if 0 < point && point <= PLAIN_EXPONENT_LIMIT {
        let (whole, fraction) = digits.split_at(point as usize);
        format!("{whole}.{fraction}")
    } else if -6 < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat(point.unsigned_abs() as usize))
    } else {
        scientific(&digits, exponent)
    };

    format!("{sign}{body}")
}

fn render_exponential(value: f64, fraction_digits: usize) -> String {
    let rounded = round_significant(value, fraction_digits + 1);
    if rounded == 0.0 {
        return "0".to_string();
    }
    let (digits, exponent) = decompose(rounded);
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}{}", scientific(&digits, exponent))
}

fn scientific(digits: &str, exponent: i32) -> String {
    let (lead, rest) = digits.split_at(1);
    let sign = if exponent < 0 { '-' } else { '+' };
    if rest.is_empty() {
        format!("{lead}e{sign}{}", exponent.unsigned_abs())
    } else {
        format!("{lead}.{rest}e{sign}{}", exponent.unsigned_abs())
    }
}
