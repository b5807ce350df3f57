//! Binary operators and the arithmetic they perform.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure raised by [`Operator::apply`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("Division by zero")]
    DivideByZero,
}

/// One of the four keypad operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Symbol shown in the history line.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Keypad action name, e.g. `"multiply"`.
    pub const fn action(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Look up an operator by its keypad action name.
    pub fn from_action(action: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.action() == action)
    }

    /// Apply the operator to `lhs` and `rhs`.
    ///
    /// Only an exact zero divisor is rejected; overflow to infinity is
    /// returned as-is and shows up as `"Error"` once formatted.
    pub fn apply(&self, lhs: f64, rhs: f64) -> Result<f64, ArithmeticError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide if rhs == 0.0 => Err(ArithmeticError::DivideByZero),
            Self::Divide => Ok(lhs / rhs),
        }
    }
}
