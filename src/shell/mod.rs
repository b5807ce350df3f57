//! Imperative shell around the pure accumulator.
//!
//! The core never reads the clock. This module supplies the pieces that
//! do:
//!
//! - **Calculator**: owns the state, dispatches events and polls the timer
//! - **ResetTimer**: cancellable deadline for clearing the Error display
//! - **Clock**: injectable time source, with wall and manual clocks

mod clock;
mod machine;
mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use machine::Calculator;
pub use timer::ResetTimer;
