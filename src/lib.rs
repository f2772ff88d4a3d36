//! # ruspec
//!
//! **ruspec** is the core of a specification-style test runner: it filters
//! which discovered examples run, executes them one at a time, accumulates
//! pass/failure/error state, and renders progress plus a final report
//! through a pluggable formatter.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │   Example    │   │   Example    │   │   Example    │
//!     │ (discovered) │   │ (discovered) │   │ (discovered) │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            ▼                  ▼                  ▼
//! ┌───────────────────────────────────────────────────────────────┐
//! │  FilterSet (admit/reject: exact, pattern, tag, profile)       │
//! └──────────────────────────────┬────────────────────────────────┘
//!                                ▼ admitted, in discovery order
//! ┌───────────────────────────────────────────────────────────────┐
//! │  Runner (run loop, one example at a time)                     │
//! │  - executes body + cleanup, catches errors/panics             │
//! │  - builds RunState per example                                │
//! │  - dispatches Start / Before / After / Finish                 │
//! └──────────────────────────────┬────────────────────────────────┘
//!                                ▼
//! ┌───────────────────────────────────────────────────────────────┐
//! │  Bus (ordered synchronous dispatch per phase)                 │
//! └───────┬──────────────┬───────────────┬───────────────┬───────┘
//!         ▼              ▼               ▼               ▼
//!       Timer          Tally         Formatter     user subscribers
//!   (Start/Finish) (After/Expect.) (After/Finish)    (any phase)
//! ```
//!
//! ### Lifecycle
//! ```text
//! Config ──► RunnerBuilder ──► Runner::run()
//!
//! run() {
//!   ├─► dispatch Start
//!   ├─► for each admitted example:
//!   │     ├─► dispatch Before
//!   │     ├─► body (catch Err / panic ─► ExceptionInfo)
//!   │     ├─► cleanup (exceptions accumulate, never overwrite)
//!   │     └─► dispatch After { RunState } — all subscribers, in order
//!   ├─► dispatch Finish (exactly once)
//!   └─► RunSummary { tally, elapsed }
//! }
//! ```
//!
//! ## Features
//! | Area              | Description                                                   | Key types / traits                      |
//! |-------------------|---------------------------------------------------------------|-----------------------------------------|
//! | **Selection**     | Compose include/exclude filters over names, patterns, tags.   | [`FilterSet`], [`Filter`]               |
//! | **Execution**     | Run closure-backed examples with caught errors and panics.    | [`Runner`], [`Example`], [`ExampleCtx`] |
//! | **Observation**   | Hook into lifecycle phases (progress, metrics, custom).       | [`Subscribe`], [`Bus`], [`Event`]       |
//! | **Aggregation**   | Monotonic counters and wall-clock timing for the whole run.   | [`Tally`], [`Timer`]                    |
//! | **Reporting**     | Stream progress and render the final failure report.          | [`DottedFormatter`], [`Sink`]           |
//! | **Discovery**     | Fold path specs (with `^` exclusions) into an ordered list.   | [`files`], [`SpecSource`]               |
//!
//! ## Example
//! ```rust
//! use ruspec::{Config, Example, ExampleCtx, FormatterKind, Runner};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut cfg = Config::default();
//!     cfg.formatter = Some(FormatterKind::Dotted);
//!     cfg.abort_on_interrupt = false;
//!
//!     let examples = vec![
//!         Example::new("add returns the sum", "math_spec.rs:3", |ctx: ExampleCtx| {
//!             async move { ctx.expect(1 + 1 == 2, "1 + 1 == 2").await }
//!         }),
//!         Example::new("sub returns the difference", "math_spec.rs:9", |ctx: ExampleCtx| {
//!             async move { ctx.expect(2 - 1 == 1, "2 - 1 == 1").await }
//!         }),
//!     ];
//!
//!     let runner = Runner::builder(cfg).build(examples)?;
//!     let summary = runner.run().await;
//!     assert!(summary.success());
//!     Ok(())
//! }
//! ```

mod core;
mod error;
mod events;
mod examples;
mod filters;
mod formatters;
mod state;
mod subscribers;

// ---- Public re-exports ----

pub use crate::core::{files, Config, DirSource, RunSummary, Runner, RunnerBuilder, SpecSource};
pub use error::{ExampleError, RunnerError};
pub use events::{Bus, Event, Phase};
pub use examples::{BodyFn, BoxBodyFuture, Example, ExampleCtx};
pub use filters::{
    Filter, FilterMode, FilterSet, MatchFilter, ProfileFilter, RegexpFilter, TagFilter,
};
pub use formatters::{
    CaptureHandle, DottedFormatter, FormatterKind, Sink, SpecdocFormatter,
};
pub use state::{ExceptionInfo, Outcome, Precedence, RawTrace, RichTrace, RunState, TraceSource};
pub use subscribers::{Subscribe, Tally, TallySnapshot, Timer};
