//! # Lifecycle phases and their typed payloads.
//!
//! The [`Phase`] enum is the closed set of points in the run lifecycle that
//! subscribers can observe. Each phase has exactly one [`Event`] variant
//! carrying a strongly typed payload, so subscribers never inspect untyped
//! maps or rely on dynamic lookup.
//!
//! ## Phases
//! - `Start` — once, before the first example; carries the admitted count
//! - `Before` — per example, before its body runs
//! - `Expectation` — per expectation check inside a body
//! - `After` — per example, after its body and cleanup; carries the run state
//! - `Finish` — once, after the last example

use std::sync::Arc;

use crate::state::RunState;

/// Named point in the run lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// The run is about to execute its first example.
    Start,
    /// One example is about to execute.
    Before,
    /// One expectation was checked inside an example body.
    Expectation,
    /// One example finished executing.
    After,
    /// The whole run finished.
    Finish,
}

/// Lifecycle event with its phase-specific payload.
///
/// Events are dispatched synchronously by the [`Bus`](crate::events::Bus);
/// payloads are shared read-only (the run state travels as `Arc`).
#[derive(Debug, Clone)]
pub enum Event {
    /// Run begin.
    ///
    /// Carries:
    /// - `examples`: number of admitted examples about to run
    Start {
        /// Number of admitted examples about to run.
        examples: usize,
    },

    /// Example about to execute.
    ///
    /// Carries:
    /// - `description`: the example's description string
    Before {
        /// Description of the example about to run.
        description: Arc<str>,
    },

    /// One expectation checked. No payload.
    Expectation,

    /// Example finished.
    ///
    /// Carries:
    /// - `state`: the completed, immutable run state
    After {
        /// Completed run state, shared read-only with every subscriber.
        state: Arc<RunState>,
    },

    /// Run end. Dispatched exactly once. No payload.
    Finish,
}

impl Event {
    /// Returns the phase this event belongs to.
    pub fn phase(&self) -> Phase {
        match self {
            Event::Start { .. } => Phase::Start,
            Event::Before { .. } => Phase::Before,
            Event::Expectation => Phase::Expectation,
            Event::After { .. } => Phase::After,
            Event::Finish => Phase::Finish,
        }
    }
}
