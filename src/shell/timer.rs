//! Cancellable deadline for resetting the Error display.

use chrono::{DateTime, Utc};
use std::time::Duration;

/// A single pending reset, stored as an absolute deadline.
///
/// The timer never fires on its own; the owner polls it with
/// [`is_due`](Self::is_due).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResetTimer {
    deadline: Option<DateTime<Utc>>,
}

impl ResetTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a reset `delay` after `now`, replacing any earlier one.
    pub fn schedule(&mut self, now: DateTime<Utc>, delay: Duration) {
        let deadline = chrono::Duration::from_std(delay)
            .ok()
            .and_then(|delay| now.checked_add_signed(delay))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        self.deadline = Some(deadline);
    }

    /// Cancel the pending reset. Returns true if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        self.deadline
    }
}
