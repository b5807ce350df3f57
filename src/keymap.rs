//! Keyboard and keypad bindings.
//!
//! Maps the names a browser host reports (`KeyboardEvent.key` values and
//! button `data-action` attributes) onto accumulator events.

use crate::core::{Event, Operator};

/// Map a keyboard key name to an event.
///
/// ```rust
/// use calcfold::core::{Event, Operator};
/// use calcfold::keymap::event_for_key;
///
/// assert_eq!(event_for_key("7"), Some(Event::Digit('7')));
/// assert_eq!(event_for_key("x"), Some(Event::Operator(Operator::Multiply)));
/// assert_eq!(event_for_key("Enter"), Some(Event::Equals));
/// assert_eq!(event_for_key("Tab"), None);
/// ```
pub fn event_for_key(key: &str) -> Option<Event> {
    let event = match key {
        "+" => Event::Operator(Operator::Add),
        "-" => Event::Operator(Operator::Subtract),
        "*" | "x" => Event::Operator(Operator::Multiply),
        "/" => Event::Operator(Operator::Divide),
        "Enter" | "=" => Event::Equals,
        "Backspace" => Event::Backspace,
        "Escape" | "Delete" => Event::Clear,
        "." | "," => Event::Decimal,
        "%" => Event::Percent,
        _ => return single_digit(key).map(Event::Digit),
    };
    Some(event)
}

/// Map a keypad button to an event.
///
/// Digit buttons carry their digit in `value`; every other button is
/// identified by `action` alone.
pub fn event_for_button(action: Option<&str>, value: Option<&str>) -> Option<Event> {
    if let Some(value) = value {
        return single_digit(value).map(Event::Digit);
    }

    let event = match action? {
        "clear" => Event::Clear,
        "sign" => Event::ToggleSign,
        "percent" => Event::Percent,
        "decimal" => Event::Decimal,
        "equals" => Event::Equals,
        "backspace" => Event::Backspace,
        other => Event::Operator(Operator::from_action(other)?),
    };
    Some(event)
}

fn single_digit(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_digit() => Some(c),
        _ => None,
    }
}
