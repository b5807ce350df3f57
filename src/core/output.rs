//! Rendered view of a state for the presentation layer.

use super::format::format_result;
use super::settings::Settings;
use super::state::CalculatorState;
use serde::{Deserialize, Serialize};

/// Preview text shown while the Error display is up.
pub const ERROR_PREVIEW_TEXT: &str = "Division by zero ✗";

/// Preview text for a pending division by zero.
pub const DIVIDE_BY_ZERO_PREVIEW_TEXT: &str = "Cannot ÷ 0";

/// What evaluating right now would produce.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Preview {
    Value(f64),
    DivideByZero,
}

impl Preview {
    pub fn render(&self, settings: &Settings) -> String {
        match self {
            Self::Value(value) => format!("= {}", format_result(*value, settings)),
            Self::DivideByZero => DIVIDE_BY_ZERO_PREVIEW_TEXT.to_string(),
        }
    }
}

/// Everything a display needs after an event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Output {
    pub display_text: String,
    pub history_text: String,
    pub preview_text: Option<String>,
    pub is_error: bool,
    /// `"C"` while the entry or a non-zero operand holds something to
    /// clear, `"AC"` otherwise
    pub clear_label: String,
}

impl Output {
    pub fn render(state: &CalculatorState, settings: &Settings) -> Self {
        let preview_text = if state.is_error() {
            Some(ERROR_PREVIEW_TEXT.to_string())
        } else {
            super::transition::preview(state).map(|p| p.render(settings))
        };

        // A stored operand of zero counts as nothing to clear.
        let holds_operand = state.operand().is_some_and(|operand| operand != 0.0);
        let clear_label = if state.current() != "0" || holds_operand {
            "C"
        } else {
            "AC"
        };

        Self {
            display_text: state.current().to_string(),
            history_text: state.history().to_string(),
            preview_text,
            is_error: state.is_error(),
            clear_label: clear_label.to_string(),
        }
    }

    /// Serialize for a JavaScript host.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
