//! Input events accepted by the accumulator.

use super::operator::Operator;
use serde::{Deserialize, Serialize};

/// A single keypad input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum Event {
    /// A decimal digit `'0'..='9'`; other characters are ignored
    Digit(char),
    Decimal,
    Operator(Operator),
    Equals,
    Clear,
    ToggleSign,
    Percent,
    Backspace,
}

impl Event {
    /// Short name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Digit(_) => "digit",
            Self::Decimal => "decimal",
            Self::Operator(_) => "operator",
            Self::Equals => "equals",
            Self::Clear => "clear",
            Self::ToggleSign => "toggle_sign",
            Self::Percent => "percent",
            Self::Backspace => "backspace",
        }
    }
}
