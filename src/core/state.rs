//! The accumulator state and its phases.
//!
//! A [`CalculatorState`] is an immutable value: transitions consume a
//! reference to the previous state and build the next one.

use super::format::ERROR_TEXT;
use super::operator::Operator;
use serde::{Deserialize, Serialize};

/// An operator waiting for its right-hand side.
///
/// The operand and operator travel together, so a state can never hold
/// one without the other.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pending {
    /// The operator chosen by the user
    pub operator: Operator,
    /// The left-hand value captured when the operator was chosen
    pub operand: f64,
}

/// Coarse position of the accumulator in its state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Typing a number with no operator pending
    Idle,
    /// An operator is waiting for (or receiving) its right-hand side
    OperatorPending,
    /// A result is on display; the next digit starts a fresh entry
    JustEvaluated,
    /// The Error display is up and a reset is scheduled
    ErrorTransient,
}

impl Phase {
    /// Get the phase's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::OperatorPending => "OperatorPending",
            Self::JustEvaluated => "JustEvaluated",
            Self::ErrorTransient => "ErrorTransient",
        }
    }

    /// Check if this is the error phase.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::ErrorTransient)
    }
}

/// Full accumulator state.
///
/// # Example
///
/// ```rust
/// use calcfold::core::{CalculatorState, Phase};
///
/// let state = CalculatorState::new();
/// assert_eq!(state.current(), "0");
/// assert_eq!(state.phase(), Phase::Idle);
/// assert!(state.operator().is_none());
/// assert!(state.operand().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    pub(crate) current: String,
    pub(crate) pending: Option<Pending>,
    pub(crate) just_evaluated: bool,
    pub(crate) errored: bool,
    pub(crate) history: String,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// The zero state used at start-up and after Clear.
    pub fn new() -> Self {
        Self {
            current: "0".to_string(),
            pending: None,
            just_evaluated: false,
            errored: false,
            history: String::new(),
        }
    }

    /// The Error display that follows a failed operation.
    ///
    /// Pending work is dropped and the flag is raised so the next digit
    /// replaces the `"Error"` text. History is kept as it was.
    pub(crate) fn error_from(previous: &Self) -> Self {
        Self {
            current: ERROR_TEXT.to_string(),
            pending: None,
            just_evaluated: true,
            errored: true,
            history: previous.history.clone(),
        }
    }

    /// The in-progress entry as shown on the display.
    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn pending(&self) -> Option<Pending> {
        self.pending
    }

    pub fn operator(&self) -> Option<Operator> {
        self.pending.map(|p| p.operator)
    }

    pub fn operand(&self) -> Option<f64> {
        self.pending.map(|p| p.operand)
    }

    /// True right after a result or operator commit.
    pub fn just_evaluated(&self) -> bool {
        self.just_evaluated
    }

    pub fn is_error(&self) -> bool {
        self.errored
    }

    /// Trace of the last operator or evaluate event, e.g. `"8 + 2 ="`.
    pub fn history(&self) -> &str {
        &self.history
    }

    pub fn phase(&self) -> Phase {
        if self.errored {
            Phase::ErrorTransient
        } else if self.pending.is_some() {
            Phase::OperatorPending
        } else if self.just_evaluated {
            Phase::JustEvaluated
        } else {
            Phase::Idle
        }
    }
}
