//! # Running pass/fail/error counters.
//!
//! [`Tally`] subscribes to `After` and `Expectation` events and keeps four
//! monotonically increasing counters: examples, expectations, failures and
//! errors. There is no decrement and no reset; a second suite run through
//! the same tally accumulates on top of the first.
//!
//! ## Counting rules
//! - every `After` bumps `examples` exactly once;
//! - `failures` bumps when **any** recorded exception classifies as a
//!   failure, `errors` when any classifies as an error — an example with
//!   mixed exceptions counts toward both, but never twice toward either;
//! - every `Expectation` bumps `expectations`.

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use async_trait::async_trait;

use crate::events::Event;
use crate::subscribers::subscribe::Subscribe;

/// Read-only copy of the counters at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TallySnapshot {
    /// Examples completed.
    pub examples: u64,
    /// Expectations checked.
    pub expectations: u64,
    /// Examples with at least one failure-classified exception.
    pub failures: u64,
    /// Examples with at least one error-classified exception.
    pub errors: u64,
}

impl TallySnapshot {
    /// True when nothing failed or errored.
    pub fn success(&self) -> bool {
        self.failures == 0 && self.errors == 0
    }
}

/// Monotonic run counters, updated from `After`/`Expectation` events.
#[derive(Debug, Default)]
pub struct Tally {
    examples: AtomicU64,
    expectations: AtomicU64,
    failures: AtomicU64,
    errors: AtomicU64,
}

impl Tally {
    /// Creates a zeroed tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a point-in-time copy of the counters.
    pub fn snapshot(&self) -> TallySnapshot {
        TallySnapshot {
            examples: self.examples.load(AtomicOrdering::Relaxed),
            expectations: self.expectations.load(AtomicOrdering::Relaxed),
            failures: self.failures.load(AtomicOrdering::Relaxed),
            errors: self.errors.load(AtomicOrdering::Relaxed),
        }
    }

    /// Renders the one-line human-readable summary.
    ///
    /// # Example
    /// ```
    /// use ruspec::Tally;
    ///
    /// let tally = Tally::new();
    /// assert_eq!(
    ///     tally.format(),
    ///     "0 examples, 0 expectations, 0 failures, 0 errors"
    /// );
    /// ```
    pub fn format(&self) -> String {
        let snap = self.snapshot();
        format!(
            "{}, {}, {}, {}",
            pluralize(snap.examples, "example"),
            pluralize(snap.expectations, "expectation"),
            pluralize(snap.failures, "failure"),
            pluralize(snap.errors, "error"),
        )
    }
}

fn pluralize(count: u64, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

#[async_trait]
impl Subscribe for Tally {
    async fn on_event(&self, event: &Event) {
        match event {
            Event::Expectation => {
                self.expectations.fetch_add(1, AtomicOrdering::Relaxed);
            }
            Event::After { state } => {
                self.examples.fetch_add(1, AtomicOrdering::Relaxed);
                let exceptions = state.exceptions();
                if exceptions.iter().any(|(_, e)| e.is_failure()) {
                    self.failures.fetch_add(1, AtomicOrdering::Relaxed);
                }
                if exceptions.iter().any(|(_, e)| !e.is_failure()) {
                    self.errors.fetch_add(1, AtomicOrdering::Relaxed);
                }
            }
            _ => {}
        }
    }

    fn name(&self) -> &'static str {
        "tally"
    }
}
