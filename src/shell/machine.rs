//! Host-owned calculator that runs the pure core.

use super::clock::{Clock, SystemClock};
use super::timer::ResetTimer;
use crate::core::{
    transition, CalculatorState, Event, Output, Settings, StepResult, TransitionLog,
    TransitionRecord, Trigger,
};
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

/// Calculator owning its state, settings, clock and error-reset timer.
///
/// Any event that changes the state cancels a pending error reset, so a
/// reset scheduled for an old error can never wipe out newer input. Events
/// ignored during the Error display leave the reset in place. Hosts call
/// [`tick`](Self::tick) from their event loop to let the reset fire once
/// its deadline passes.
///
/// # Example
///
/// ```rust
/// use calcfold::core::{Event, Operator};
/// use calcfold::shell::Calculator;
///
/// let mut calculator = Calculator::new();
/// calculator.dispatch(Event::Digit('5'));
/// calculator.dispatch(Event::Operator(Operator::Add));
/// calculator.dispatch(Event::Digit('3'));
/// calculator.dispatch(Event::Operator(Operator::Add));
/// calculator.dispatch(Event::Digit('2'));
/// let output = calculator.dispatch(Event::Equals);
///
/// assert_eq!(output.display_text, "10");
/// assert_eq!(output.history_text, "8 + 2 =");
/// ```
#[derive(Debug)]
pub struct Calculator<C: Clock = SystemClock> {
    state: CalculatorState,
    settings: Settings,
    clock: C,
    reset: ResetTimer,
    log: TransitionLog,
}

impl Calculator<SystemClock> {
    /// Create a calculator with default settings and the wall clock.
    pub fn new() -> Self {
        Self::from_parts(Settings::default(), SystemClock)
    }
}

impl Default for Calculator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Calculator<C> {
    pub(crate) fn from_parts(settings: Settings, clock: C) -> Self {
        Self {
            state: CalculatorState::new(),
            settings,
            clock,
            reset: ResetTimer::new(),
            log: TransitionLog::new(),
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Trace of the transitions processed so far.
    pub fn log(&self) -> &TransitionLog {
        &self.log
    }

    /// When the Error display will reset, if a reset is pending.
    pub fn pending_reset(&self) -> Option<DateTime<Utc>> {
        self.reset.deadline()
    }

    /// Render the current state.
    pub fn output(&self) -> Output {
        Output::render(&self.state, &self.settings)
    }

    /// Process one input event and return the refreshed output.
    pub fn dispatch(&mut self, event: Event) -> Output {
        let now = self.clock.now();
        self.fire_reset_if_due(now);

        match transition(&self.state, event, &self.settings) {
            StepResult::Transitioned(next) => {
                if self.reset.cancel() {
                    debug!(event = event.name(), "cancelled pending error reset");
                }
                debug!(event = event.name(), current = %next.current(), "event applied");
                self.commit(Trigger::Input(event), next, now);
            }
            StepResult::Ignored => {
                debug!(event = event.name(), phase = self.state.phase().name(), "event ignored");
            }
            StepResult::Aborted {
                reason,
                error_state,
            } => {
                warn!(event = event.name(), %reason, "operation aborted");
                self.reset.schedule(now, self.settings.error_reset_delay);
                self.commit(Trigger::Input(event), error_state, now);
            }
        }

        self.output()
    }

    /// Fire the error reset if its deadline has passed.
    ///
    /// Returns the refreshed output when the display changed.
    pub fn tick(&mut self) -> Option<Output> {
        let now = self.clock.now();
        self.fire_reset_if_due(now).then(|| self.output())
    }

    fn fire_reset_if_due(&mut self, now: DateTime<Utc>) -> bool {
        if !self.reset.is_due(now) {
            return false;
        }
        self.reset.cancel();
        info!("error display reset");
        self.commit(Trigger::ErrorReset, CalculatorState::new(), now);
        true
    }

    fn commit(&mut self, trigger: Trigger, next: CalculatorState, now: DateTime<Utc>) {
        self.log = self.log.record(TransitionRecord {
            trigger,
            from: self.state.phase(),
            to: next.phase(),
            timestamp: now,
        });
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Operator, Phase};
    use crate::shell::ManualClock;
    use chrono::{Duration, TimeZone};

    fn manual() -> (Calculator<ManualClock>, ManualClock) {
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        (Calculator::from_parts(Settings::default(), clock.clone()), clock)
    }

    fn divide_by_zero(calculator: &mut Calculator<ManualClock>) -> Output {
        calculator.dispatch(Event::Digit('5'));
        calculator.dispatch(Event::Operator(Operator::Divide));
        calculator.dispatch(Event::Digit('0'));
        calculator.dispatch(Event::Equals)
    }

    #[test]
    fn new_calculator_renders_zero() {
        let calculator = Calculator::new();
        let output = calculator.output();
        assert_eq!(output.display_text, "0");
        assert_eq!(output.clear_label, "AC");
        assert!(calculator.log().is_empty());
    }

    #[test]
    fn divide_by_zero_shows_error_and_schedules_reset() {
        let (mut calculator, clock) = manual();
        let output = divide_by_zero(&mut calculator);

        assert_eq!(output.display_text, "Error");
        assert!(output.is_error);
        assert_eq!(output.preview_text.as_deref(), Some("Division by zero ✗"));
        assert_eq!(
            calculator.pending_reset(),
            Some(clock.now() + Duration::milliseconds(1800))
        );
    }

    #[test]
    fn error_resets_to_zero_state_after_delay() {
        let (mut calculator, clock) = manual();
        divide_by_zero(&mut calculator);

        clock.advance(Duration::milliseconds(1799));
        assert_eq!(calculator.tick(), None);
        assert!(calculator.state().is_error());

        clock.advance(Duration::milliseconds(1));
        let output = calculator.tick().expect("reset should fire");
        assert_eq!(output.display_text, "0");
        assert!(!output.is_error);
        assert_eq!(calculator.state(), &CalculatorState::new());
        assert_eq!(calculator.pending_reset(), None);
    }

    #[test]
    fn reset_fires_only_once() {
        let (mut calculator, clock) = manual();
        divide_by_zero(&mut calculator);

        clock.advance(Duration::seconds(2));
        assert!(calculator.tick().is_some());
        assert!(calculator.tick().is_none());
    }

    #[test]
    fn new_input_cancels_pending_reset() {
        let (mut calculator, clock) = manual();
        divide_by_zero(&mut calculator);

        clock.advance(Duration::milliseconds(500));
        let output = calculator.dispatch(Event::Digit('4'));
        assert_eq!(output.display_text, "4");
        assert_eq!(calculator.pending_reset(), None);

        clock.advance(Duration::seconds(5));
        assert_eq!(calculator.tick(), None);
        assert_eq!(calculator.state().current(), "4");
    }

    #[test]
    fn ignored_input_keeps_error_reset() {
        let (mut calculator, clock) = manual();
        divide_by_zero(&mut calculator);
        let deadline = calculator.pending_reset();

        for event in [
            Event::ToggleSign,
            Event::Percent,
            Event::Backspace,
            Event::Equals,
            Event::Operator(Operator::Add),
        ] {
            let output = calculator.dispatch(event);
            assert_eq!(output.display_text, "Error");
            assert_eq!(calculator.pending_reset(), deadline);
        }

        clock.advance(Duration::milliseconds(1800));
        let output = calculator.tick().expect("reset should fire");
        assert_eq!(output.display_text, "0");
        assert!(!output.is_error);
        assert_eq!(calculator.state(), &CalculatorState::new());
    }

    #[test]
    fn clear_during_error_cancels_reset() {
        let (mut calculator, clock) = manual();
        divide_by_zero(&mut calculator);

        let output = calculator.dispatch(Event::Clear);
        assert!(!output.is_error);
        assert_eq!(calculator.pending_reset(), None);

        clock.advance(Duration::seconds(5));
        assert_eq!(calculator.tick(), None);
    }

    #[test]
    fn overdue_reset_fires_before_next_event() {
        let (mut calculator, clock) = manual();
        divide_by_zero(&mut calculator);

        clock.advance(Duration::seconds(3));
        let output = calculator.dispatch(Event::Digit('9'));
        assert_eq!(output.display_text, "9");
        assert_eq!(output.history_text, "");

        let triggers: Vec<_> = calculator.log().records().iter().map(|r| r.trigger).collect();
        assert_eq!(
            &triggers[triggers.len() - 2..],
            &[Trigger::ErrorReset, Trigger::Input(Event::Digit('9'))]
        );
    }

    #[test]
    fn ignored_events_are_not_logged() {
        let (mut calculator, _clock) = manual();
        calculator.dispatch(Event::Backspace);
        calculator.dispatch(Event::Equals);
        assert!(calculator.log().is_empty());
    }

    #[test]
    fn log_tracks_phase_path() {
        let (mut calculator, _clock) = manual();
        calculator.dispatch(Event::Digit('7'));
        calculator.dispatch(Event::Operator(Operator::Multiply));
        calculator.dispatch(Event::Digit('6'));
        let output = calculator.dispatch(Event::Equals);

        assert_eq!(output.display_text, "42");
        assert_eq!(
            calculator.log().phases(),
            vec![
                Phase::Idle,
                Phase::Idle,
                Phase::OperatorPending,
                Phase::OperatorPending,
                Phase::JustEvaluated,
            ]
        );
    }

    #[test]
    fn preview_follows_typing() {
        let (mut calculator, _clock) = manual();
        calculator.dispatch(Event::Digit('5'));
        let output = calculator.dispatch(Event::Operator(Operator::Add));
        assert_eq!(output.preview_text, None);

        let output = calculator.dispatch(Event::Digit('3'));
        assert_eq!(output.preview_text.as_deref(), Some("= 8"));

        let output = calculator.dispatch(Event::Equals);
        assert_eq!(output.preview_text, None);
    }
}
