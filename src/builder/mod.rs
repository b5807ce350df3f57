//! Builder API for configured calculator construction.
//!
//! The builder collects settings with a fluent API and validates them in
//! one pass before handing back a ready [`Calculator`](crate::shell::Calculator).

pub mod calculator;
pub mod error;
pub mod rules;

pub use calculator::CalculatorBuilder;
pub use error::{BuildError, SettingsViolation};
pub use rules::validate;
