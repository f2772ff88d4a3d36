//! # Accumulated outcome of one executed example.
//!
//! [`RunState`] records the description of the example and every exception
//! captured while running it. A single example can record more than one
//! exception (one from the body, another from its cleanup block) — records
//! accumulate, they are never overwritten.
//!
//! ## Outcome decision
//! - zero exceptions → [`Outcome::Passed`]
//! - every exception a failure → [`Outcome::Failed`]
//! - every exception an error → [`Outcome::Errored`]
//! - mixed → decided by [`Precedence`]; the default `ErrorWins` makes any
//!   non-failure exception dominate.

use crate::state::exception::ExceptionInfo;

/// Pass/failed/errored classification of a completed run state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No exceptions recorded.
    Passed,
    /// Only assertion-style failures recorded.
    Failed,
    /// At least one unexpected error recorded (under the default precedence).
    Errored,
}

/// Tie-break for examples that record both failures and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precedence {
    /// Any error-classified exception makes the example report as `ERROR`.
    #[default]
    ErrorWins,
    /// Any failure-classified exception makes the example report as `FAILED`.
    FailureWins,
}

/// Recorded outcome of executing one example.
///
/// Owned by the run loop while being built, then handed to subscribers as
/// `Arc<RunState>` and never mutated again.
#[derive(Debug)]
pub struct RunState {
    description: String,
    exceptions: Vec<(Option<String>, ExceptionInfo)>,
}

impl RunState {
    /// Creates an empty (passing) state for the given description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            exceptions: Vec::new(),
        }
    }

    /// Records one captured exception.
    ///
    /// `context` names the block the exception occurred under (e.g. a
    /// cleanup hook); `None` means the example body itself.
    pub fn record(&mut self, context: Option<String>, exception: ExceptionInfo) {
        self.exceptions.push((context, exception));
    }

    /// Description of the example this state belongs to.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Every recorded `(context, exception)` pair, in capture order.
    pub fn exceptions(&self) -> &[(Option<String>, ExceptionInfo)] {
        &self.exceptions
    }

    /// `true` when at least one exception was recorded.
    pub fn has_exception(&self) -> bool {
        !self.exceptions.is_empty()
    }

    /// Classifies the state under the given mixed-exception tie-break.
    pub fn outcome(&self, precedence: Precedence) -> Outcome {
        if self.exceptions.is_empty() {
            return Outcome::Passed;
        }
        let any_failure = self.exceptions.iter().any(|(_, e)| e.is_failure());
        let any_error = self.exceptions.iter().any(|(_, e)| !e.is_failure());
        match (any_failure, any_error) {
            (true, false) => Outcome::Failed,
            (false, true) => Outcome::Errored,
            _ => match precedence {
                Precedence::ErrorWins => Outcome::Errored,
                Precedence::FailureWins => Outcome::Failed,
            },
        }
    }
}
