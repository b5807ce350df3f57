//! Property-based tests for the accumulator.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use calcfold::core::{
    format_result, parse_entry, transition, CalculatorState, Event, Operator, Phase, Settings,
    StepResult,
};
use proptest::prelude::*;

fn run(events: &[Event]) -> CalculatorState {
    let settings = Settings::default();
    events.iter().fold(CalculatorState::new(), |state, event| {
        transition(&state, *event, &settings).into_state(&state)
    })
}

prop_compose! {
    fn arbitrary_digit()(d in 0..10u32) -> char {
        char::from_digit(d, 10).unwrap()
    }
}

prop_compose! {
    fn arbitrary_operator()(variant in 0..4usize) -> Operator {
        Operator::ALL[variant]
    }
}

fn arbitrary_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        4 => arbitrary_digit().prop_map(Event::Digit),
        1 => Just(Event::Decimal),
        2 => arbitrary_operator().prop_map(Event::Operator),
        1 => Just(Event::Equals),
        1 => Just(Event::Clear),
        1 => Just(Event::ToggleSign),
        1 => Just(Event::Percent),
        1 => Just(Event::Backspace),
    ]
}

proptest! {
    #[test]
    fn digits_concatenate_without_leading_zeros(
        digits in prop::collection::vec(arbitrary_digit(), 1..30)
    ) {
        let events: Vec<_> = digits.iter().copied().map(Event::Digit).collect();
        let state = run(&events);

        let typed: String = digits.iter().collect();
        let trimmed = typed.trim_start_matches('0');
        let mut expected = if trimmed.is_empty() { "0".to_string() } else { trimmed.to_string() };
        expected.truncate(15);

        prop_assert_eq!(state.current(), expected.as_str());
    }

    #[test]
    fn equals_without_operator_is_noop(
        digits in prop::collection::vec(arbitrary_digit(), 0..10)
    ) {
        let events: Vec<_> = digits.into_iter().map(Event::Digit).collect();
        let state = run(&events);
        let result = transition(&state, Event::Equals, &Settings::default());
        prop_assert_eq!(result, StepResult::Ignored);
    }

    #[test]
    fn toggle_sign_is_its_own_inverse(
        digits in prop::collection::vec(arbitrary_digit(), 1..15)
    ) {
        let mut events: Vec<_> = digits.into_iter().map(Event::Digit).collect();
        let before = parse_entry(run(&events).current()).unwrap();

        events.push(Event::ToggleSign);
        events.push(Event::ToggleSign);
        let after = parse_entry(run(&events).current()).unwrap();

        let settings = Settings::default();
        prop_assert_eq!(format_result(before, &settings), format_result(after, &settings));
    }

    #[test]
    fn formatted_results_fit_display(value in any::<f64>()) {
        let text = format_result(value, &Settings::default());
        prop_assert!(text.len() <= 15, "{} rendered as {}", value, text);
        if value.is_finite() {
            prop_assert!(parse_entry(&text).is_some());
        } else {
            prop_assert_eq!(text.as_str(), "Error");
        }
    }

    #[test]
    fn entry_never_exceeds_display(events in prop::collection::vec(arbitrary_event(), 0..60)) {
        let settings = Settings::default();
        let mut state = CalculatorState::new();
        for event in events {
            state = transition(&state, event, &settings).into_state(&state);
            prop_assert!(state.current().len() <= 15, "{:?}", state);
        }
    }

    #[test]
    fn error_phase_never_holds_pending_work(
        events in prop::collection::vec(arbitrary_event(), 0..60)
    ) {
        let settings = Settings::default();
        let mut state = CalculatorState::new();
        for event in events {
            let result = transition(&state, event, &settings);
            if let StepResult::Aborted { error_state, .. } = &result {
                prop_assert_eq!(error_state.phase(), Phase::ErrorTransient);
            }
            state = result.into_state(&state);
            if state.is_error() {
                prop_assert!(state.operator().is_none());
                prop_assert!(state.operand().is_none());
            }
        }
    }

    #[test]
    fn transition_is_deterministic(events in prop::collection::vec(arbitrary_event(), 0..40)) {
        prop_assert_eq!(run(&events), run(&events));
    }

    #[test]
    fn clear_always_returns_zero_state(
        events in prop::collection::vec(arbitrary_event(), 0..40)
    ) {
        let mut events = events;
        events.push(Event::Clear);
        prop_assert_eq!(run(&events), CalculatorState::new());
    }

    #[test]
    fn addition_chain_matches_running_sum(
        terms in prop::collection::vec(0..1000u32, 2..8)
    ) {
        let mut events = Vec::new();
        for (i, term) in terms.iter().enumerate() {
            if i > 0 {
                events.push(Event::Operator(Operator::Add));
            }
            events.extend(term.to_string().chars().map(Event::Digit));
        }
        events.push(Event::Equals);

        let sum: u32 = terms.iter().sum();
        let state = run(&events);
        prop_assert_eq!(state.current(), sum.to_string());
    }
}
