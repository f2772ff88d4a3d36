//! Recorded outcomes of example execution.
//!
//! This module groups the per-example **result data model**:
//! - [`ExceptionInfo`] a captured, classified error with its trace
//! - [`TraceSource`] one capability over rich and raw backtraces
//! - [`RunState`] the accumulated outcome of one executed example
//! - [`Outcome`] / [`Precedence`] the pass/failed/errored decision
//!
//! Run states are built by the run loop, then shared read-only
//! (`Arc<RunState>`) with every phase subscriber.

mod exception;
mod run_state;

pub use exception::{ExceptionInfo, RawTrace, RichTrace, TraceSource};
pub use run_state::{Outcome, Precedence, RunState};
