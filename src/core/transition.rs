//! Pure transition function of the accumulator.
//!
//! Operators are applied strictly left to right: choosing a second
//! operator before `=` folds the pending operation into a new operand.

use super::event::Event;
use super::format::{format_result, parse_entry};
use super::operator::{ArithmeticError, Operator};
use super::output::{Output, Preview};
use super::settings::Settings;
use super::state::{CalculatorState, Pending};

/// Result of applying one event to a state.
#[derive(Clone, Debug, PartialEq)]
pub enum StepResult {
    /// The event produced a new state
    Transitioned(CalculatorState),

    /// The event does not apply here; the state is unchanged
    Ignored,

    /// The operation failed and the Error display replaces the state.
    /// The host is expected to schedule a reset.
    Aborted {
        reason: ArithmeticError,
        error_state: CalculatorState,
    },
}

impl StepResult {
    /// The state after the step, falling back to `previous` when ignored.
    pub fn into_state(self, previous: &CalculatorState) -> CalculatorState {
        match self {
            Self::Transitioned(state) => state,
            Self::Ignored => previous.clone(),
            Self::Aborted { error_state, .. } => error_state,
        }
    }
}

/// Apply `event` to `state`.
///
/// # Example
///
/// ```rust
/// use calcfold::core::{transition, CalculatorState, Event, Operator, Settings};
///
/// let settings = Settings::default();
/// let state = [
///     Event::Digit('7'),
///     Event::Operator(Operator::Multiply),
///     Event::Digit('6'),
///     Event::Equals,
/// ]
/// .into_iter()
/// .fold(CalculatorState::new(), |state, event| {
///     transition(&state, event, &settings).into_state(&state)
/// });
///
/// assert_eq!(state.current(), "42");
/// assert_eq!(state.history(), "7 × 6 =");
/// ```
pub fn transition(state: &CalculatorState, event: Event, settings: &Settings) -> StepResult {
    match event {
        Event::Digit(digit) => input_digit(state, digit, settings),
        Event::Decimal => input_decimal(state, settings),
        Event::Operator(op) => input_operator(state, op, settings),
        Event::Equals => evaluate(state, settings),
        Event::Clear => StepResult::Transitioned(CalculatorState::new()),
        Event::ToggleSign => map_entry(state, settings, |value| -value),
        Event::Percent => map_entry(state, settings, |value| value / 100.0),
        Event::Backspace => backspace(state),
    }
}

/// Apply `event` and render the resulting state.
pub fn step(
    state: &CalculatorState,
    event: Event,
    settings: &Settings,
) -> (CalculatorState, Output) {
    let next = transition(state, event, settings).into_state(state);
    let output = Output::render(&next, settings);
    (next, output)
}

/// What `=` would produce right now, without changing anything.
///
/// Only available while an operator is waiting for a freshly typed
/// right-hand side.
pub fn preview(state: &CalculatorState) -> Option<Preview> {
    if state.just_evaluated || state.errored {
        return None;
    }
    let pending = state.pending?;
    let rhs = parse_entry(&state.current)?;

    Some(match pending.operator.apply(pending.operand, rhs) {
        Ok(value) => Preview::Value(value),
        Err(ArithmeticError::DivideByZero) => Preview::DivideByZero,
    })
}

fn input_digit(state: &CalculatorState, digit: char, settings: &Settings) -> StepResult {
    if !digit.is_ascii_digit() {
        return StepResult::Ignored;
    }

    let mut current = if state.just_evaluated || state.current == "0" {
        digit.to_string()
    } else {
        format!("{}{digit}", state.current)
    };
    current.truncate(settings.max_entry_len);

    StepResult::Transitioned(CalculatorState {
        current,
        just_evaluated: false,
        errored: false,
        ..state.clone()
    })
}

fn input_decimal(state: &CalculatorState, settings: &Settings) -> StepResult {
    let current = if state.just_evaluated {
        "0.".to_string()
    } else if state.current.contains('.') || state.current.len() >= settings.max_entry_len {
        return StepResult::Ignored;
    } else {
        format!("{}.", state.current)
    };

    StepResult::Transitioned(CalculatorState {
        current,
        just_evaluated: false,
        errored: false,
        ..state.clone()
    })
}

fn input_operator(state: &CalculatorState, op: Operator, settings: &Settings) -> StepResult {
    let Some(cur) = parse_entry(&state.current) else {
        return StepResult::Ignored;
    };

    let (operand, current) = match state.pending {
        Some(pending) if !state.just_evaluated => {
            match pending.operator.apply(pending.operand, cur) {
                Ok(result) => (result, format_result(result, settings)),
                Err(reason) => return abort(state, reason),
            }
        }
        _ => (cur, state.current.clone()),
    };

    StepResult::Transitioned(CalculatorState {
        history: format!("{} {}", format_result(operand, settings), op.symbol()),
        current,
        pending: Some(Pending {
            operator: op,
            operand,
        }),
        just_evaluated: true,
        errored: false,
    })
}

fn evaluate(state: &CalculatorState, settings: &Settings) -> StepResult {
    let Some(pending) = state.pending else {
        return StepResult::Ignored;
    };
    let Some(cur) = parse_entry(&state.current) else {
        return StepResult::Ignored;
    };

    let result = match pending.operator.apply(pending.operand, cur) {
        Ok(result) => result,
        Err(reason) => return abort(state, reason),
    };

    StepResult::Transitioned(CalculatorState {
        history: format!(
            "{} {} {} =",
            format_result(pending.operand, settings),
            pending.operator.symbol(),
            format_result(cur, settings)
        ),
        current: format_result(result, settings),
        pending: None,
        just_evaluated: true,
        errored: false,
    })
}

fn map_entry(
    state: &CalculatorState,
    settings: &Settings,
    f: impl Fn(f64) -> f64,
) -> StepResult {
    match parse_entry(&state.current) {
        Some(value) => StepResult::Transitioned(CalculatorState {
            current: format_result(f(value), settings),
            ..state.clone()
        }),
        None => StepResult::Ignored,
    }
}

fn backspace(state: &CalculatorState) -> StepResult {
    if state.just_evaluated || state.current == "0" {
        return StepResult::Ignored;
    }

    let mut current = state.current.clone();
    current.pop();
    if current.is_empty() {
        current.push('0');
    }

    StepResult::Transitioned(CalculatorState {
        current,
        ..state.clone()
    })
}

fn abort(state: &CalculatorState, reason: ArithmeticError) -> StepResult {
    StepResult::Aborted {
        reason,
        error_state: CalculatorState::error_from(state),
    }
}
