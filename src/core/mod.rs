//! Pure accumulator core.
//!
//! This module contains the pure functional core of the calculator:
//! - The accumulator state and its phases
//! - Operators and their arithmetic
//! - Entry parsing and result formatting
//! - The transition function and preview
//! - Immutable transition tracing
//!
//! Nothing in this module reads the clock or schedules work; the
//! [`shell`](crate::shell) owns those concerns.

mod event;
mod format;
mod history;
mod operator;
mod output;
mod settings;
mod state;
mod transition;

pub use event::Event;
pub use format::{format_result, parse_entry, ERROR_TEXT};
pub use history::{TransitionLog, TransitionRecord, Trigger};
pub use operator::{ArithmeticError, Operator};
pub use output::{Output, Preview, DIVIDE_BY_ZERO_PREVIEW_TEXT, ERROR_PREVIEW_TEXT};
pub use settings::Settings;
pub use state::{CalculatorState, Pending, Phase};
pub use transition::{preview, step, transition, StepResult};
