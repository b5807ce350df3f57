//! Calcfold: a pure functional four-function calculator
//!
//! Calcfold follows a "pure core, imperative shell" design. The core
//! accumulator is a pure function from a state and an input event to the
//! next state, while the shell owns the clock and the timer that clears
//! the Error display.
//!
//! # Core Concepts
//!
//! - **Accumulator**: the [`CalculatorState`] value and the pure
//!   [`transition`](core::transition) function over it
//! - **Fold-on-the-fly**: a second operator commits the pending operation,
//!   so evaluation is strictly left to right
//! - **Preview**: a read-only look at what `=` would produce
//! - **Shell**: the [`Calculator`] that schedules and cancels the error reset
//!
//! # Example
//!
//! ```rust
//! use calcfold::core::{step, CalculatorState, Event, Operator, Settings};
//!
//! let settings = Settings::default();
//! let state = CalculatorState::new();
//!
//! let (state, _) = step(&state, Event::Digit('9'), &settings);
//! let (state, _) = step(&state, Event::Operator(Operator::Divide), &settings);
//! let (state, output) = step(&state, Event::Digit('4'), &settings);
//! assert_eq!(output.preview_text.as_deref(), Some("= 2.25"));
//!
//! let (state, output) = step(&state, Event::Equals, &settings);
//! assert_eq!(output.display_text, "2.25");
//! assert_eq!(state.history(), "9 ÷ 4 =");
//! ```

pub mod builder;
pub mod core;
pub mod keymap;
pub mod shell;

// Re-export commonly used types
pub use builder::{BuildError, CalculatorBuilder};
pub use crate::core::{CalculatorState, Event, Operator, Output, Phase, Settings};
pub use shell::Calculator;
