//! Transition trace for diagnostics.
//!
//! Provides immutable tracking of accumulator phase changes over time,
//! following functional programming principles. This is separate from the
//! cosmetic history line kept in [`CalculatorState`](super::CalculatorState).

use super::event::Event;
use super::state::Phase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What caused a recorded transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trigger {
    /// A user input event
    Input(Event),
    /// The scheduled reset of the Error display
    ErrorReset,
}

/// Record of a single accumulator transition.
///
/// # Example
///
/// ```rust
/// use calcfold::core::{Event, Phase, TransitionRecord, Trigger};
/// use chrono::Utc;
///
/// let record = TransitionRecord {
///     trigger: Trigger::Input(Event::Digit('7')),
///     from: Phase::Idle,
///     to: Phase::Idle,
///     timestamp: Utc::now(),
/// };
/// assert!(!record.changed_phase());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// What caused the transition
    pub trigger: Trigger,
    /// The phase being transitioned from
    pub from: Phase,
    /// The phase being transitioned to
    pub to: Phase,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

impl TransitionRecord {
    pub fn changed_phase(&self) -> bool {
        self.from != self.to
    }
}

/// Bounded, ordered trace of transitions.
///
/// The trace is immutable - [`record`](Self::record) returns a new trace
/// with the transition added. Once `capacity` records are held the oldest
/// one is dropped.
///
/// # Example
///
/// ```rust
/// use calcfold::core::{Event, Operator, Phase, TransitionLog, TransitionRecord, Trigger};
/// use chrono::Utc;
///
/// let log = TransitionLog::new();
///
/// let log = log.record(TransitionRecord {
///     trigger: Trigger::Input(Event::Digit('5')),
///     from: Phase::Idle,
///     to: Phase::Idle,
///     timestamp: Utc::now(),
/// });
///
/// let log = log.record(TransitionRecord {
///     trigger: Trigger::Input(Event::Operator(Operator::Add)),
///     from: Phase::Idle,
///     to: Phase::OperatorPending,
///     timestamp: Utc::now(),
/// });
///
/// let path = log.phases();
/// assert_eq!(path, vec![Phase::Idle, Phase::Idle, Phase::OperatorPending]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransitionLog {
    records: Vec<TransitionRecord>,
    capacity: usize,
}

impl Default for TransitionLog {
    fn default() -> Self {
        Self::new()
    }
}

impl TransitionLog {
    pub const DEFAULT_CAPACITY: usize = 256;

    /// Create a new empty trace with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create a new empty trace keeping at most `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Record a transition, returning a new trace.
    ///
    /// This does not mutate the existing trace.
    pub fn record(&self, record: TransitionRecord) -> Self {
        let skip = (self.records.len() + 1).saturating_sub(self.capacity);
        let mut records: Vec<_> = self.records.iter().skip(skip).cloned().collect();
        records.push(record);
        Self {
            records,
            capacity: self.capacity,
        }
    }

    /// Phases traversed: the first `from`, then the `to` of each record.
    pub fn phases(&self) -> Vec<Phase> {
        self.records
            .first()
            .map(|first| first.from)
            .into_iter()
            .chain(self.records.iter().map(|r| r.to))
            .collect()
    }

    /// Time between the first and last recorded transition.
    ///
    /// Returns `None` if there are no records.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.first()?, self.records.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&TransitionRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
