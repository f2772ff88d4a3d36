//! # The run loop.
//!
//! [`Runner`] executes the admitted examples strictly in order, one at a
//! time. For each example it:
//!
//! 1. dispatches `Before`;
//! 2. executes the body, converting an `Err` return or a panic into an
//!    [`ExceptionInfo`] on the example's [`RunState`];
//! 3. runs the cleanup block the same way, recording its exception **in
//!    addition** under a context message;
//! 4. dispatches `After` carrying the completed state — every subscriber,
//!    in registration order, before the next example starts.
//!
//! After the last example, `Finish` is dispatched exactly once.
//!
//! ## Failure semantics
//! Body and cleanup errors never escape the loop; the suite always runs to
//! the end. The exceptions:
//! - an interrupt signal (with `abort_on_interrupt`) exits the process
//!   immediately, skipping the finish flush;
//! - cooperative cancellation ([`Runner::cancellation_token`]) stops
//!   admitting further examples but still dispatches `Finish`, so the
//!   report covers everything that ran.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use tokio_util::sync::CancellationToken;

use crate::core::abort::install_abort_trap;
use crate::core::builder::RunnerBuilder;
use crate::core::config::Config;
use crate::events::{Bus, Event};
use crate::examples::{Example, ExampleCtx};
use crate::state::{ExceptionInfo, RunState};
use crate::subscribers::{Tally, TallySnapshot, Timer};

/// Final numbers of one completed run.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    /// Tally counters at the end of the run.
    pub tally: TallySnapshot,
    /// Wall-clock duration of the run.
    pub elapsed: Duration,
}

impl RunSummary {
    /// True when the run recorded no failures and no errors; callers
    /// typically derive the process exit status from this.
    pub fn success(&self) -> bool {
        self.tally.success()
    }
}

/// Per-run orchestrator owning the bus, the admitted examples and the
/// shared timer/tally. Constructed through [`Runner::builder`]; one run at
/// a time, no global state.
pub struct Runner {
    examples: Vec<Example>,
    bus: Arc<Bus>,
    timer: Arc<Timer>,
    tally: Arc<Tally>,
    token: CancellationToken,
    abort_on_interrupt: bool,
}

impl Runner {
    /// Starts building a runner from a configuration.
    pub fn builder(cfg: Config) -> RunnerBuilder {
        RunnerBuilder::new(cfg)
    }

    pub(crate) fn new_internal(
        examples: Vec<Example>,
        bus: Arc<Bus>,
        timer: Arc<Timer>,
        tally: Arc<Tally>,
        token: CancellationToken,
        abort_on_interrupt: bool,
    ) -> Self {
        Self {
            examples,
            bus,
            timer,
            tally,
            token,
            abort_on_interrupt,
        }
    }

    /// Number of admitted examples this runner will execute.
    pub fn example_count(&self) -> usize {
        self.examples.len()
    }

    /// Token for cooperative cancellation of the run loop.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Current tally counters (final after [`Runner::run`] returns).
    pub fn tally(&self) -> TallySnapshot {
        self.tally.snapshot()
    }

    /// Executes the whole run and returns its final numbers.
    ///
    /// Dispatches `Start`, the per-example `Before`/`After` pairs and one
    /// `Finish`; all dispatch is synchronous and ordered. Calling `run`
    /// again on the same runner re-executes the suite and **accumulates**
    /// onto the same tally.
    pub async fn run(&self) -> RunSummary {
        let trap = self.abort_on_interrupt.then(install_abort_trap);

        self.bus
            .dispatch(&Event::Start {
                examples: self.examples.len(),
            })
            .await;

        for example in &self.examples {
            if self.token.is_cancelled() {
                break;
            }
            self.bus
                .dispatch(&Event::Before {
                    description: example.description_arc(),
                })
                .await;
            let state = self.run_one(example).await;
            self.bus
                .dispatch(&Event::After {
                    state: Arc::new(state),
                })
                .await;
        }

        self.bus.dispatch(&Event::Finish).await;

        if let Some(trap) = trap {
            trap.abort();
        }

        RunSummary {
            tally: self.tally.snapshot(),
            elapsed: self.timer.elapsed(),
        }
    }

    /// Executes one example: body, then cleanup, accumulating exceptions.
    async fn run_one(&self, example: &Example) -> RunState {
        let mut state = RunState::new(example.description());
        let ctx = ExampleCtx::new(Arc::clone(&self.bus), self.token.child_token());

        let body = AssertUnwindSafe(example.spawn(ctx.clone())).catch_unwind();
        match body.await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => state.record(None, ExceptionInfo::from_error(&err)),
            Err(panic) => state.record(None, ExceptionInfo::from_panic(panic)),
        }

        if let Some(cleanup) = example.spawn_cleanup(ctx) {
            match AssertUnwindSafe(cleanup).catch_unwind().await {
                Ok(Ok(())) => {}
                Ok(Err(err)) => {
                    state.record(Some("cleanup".to_string()), ExceptionInfo::from_error(&err));
                }
                Err(panic) => {
                    state.record(Some("cleanup".to_string()), ExceptionInfo::from_panic(panic));
                }
            }
        }

        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExampleError;
    use crate::formatters::{FormatterKind, Sink};
    use crate::subscribers::Subscribe;
    use async_trait::async_trait;
    use std::sync::Mutex;

    fn quiet_config() -> Config {
        Config {
            formatter: Some(FormatterKind::Dotted),
            abort_on_interrupt: false,
            ..Config::default()
        }
    }

    fn pass(description: &str) -> Example {
        Example::new(description.to_string(), "spec.rs:1", |ctx: ExampleCtx| {
            async move { ctx.expect(true, "holds").await }
        })
    }

    fn fail(description: &str) -> Example {
        Example::new(description.to_string(), "spec.rs:2", |ctx: ExampleCtx| {
            async move { ctx.expect(1 + 1 == 3, "1 + 1 == 3").await }
        })
    }

    fn raise(description: &str) -> Example {
        Example::new(description.to_string(), "spec.rs:3", |_ctx| async {
            Err(ExampleError::raised("IoError", "boom"))
        })
    }

    #[tokio::test]
    async fn test_run_streams_glyphs_and_tallies() {
        let (sink, handle) = Sink::capture();
        let runner = Runner::builder(quiet_config())
            .with_sink(sink)
            .build(vec![
                pass("a"),
                pass("b"),
                pass("c"),
                fail("d"),
                raise("e"),
            ])
            .unwrap();

        let summary = runner.run().await;
        assert_eq!(summary.tally.examples, 5);
        assert_eq!(summary.tally.failures, 1);
        assert_eq!(summary.tally.errors, 1);
        assert_eq!(summary.tally.expectations, 4);
        assert!(!summary.success());

        let out = handle.contents();
        assert!(out.starts_with("...FE\n"));
        assert!(out.contains("\n1)\nd FAILED\n"));
        assert!(out.contains("\n2)\ne ERROR\n"));
        assert!(out.contains("IoError: boom\n"));
        assert!(out.contains("5 examples, 4 expectations, 1 failure, 1 error\n"));
    }

    #[tokio::test]
    async fn test_panicking_body_is_caught_as_error() {
        let example = Example::new("p", "spec.rs:4", |_ctx| async {
            assert!(1 + 1 == 3, "kaboom");
            Ok(())
        });
        let (sink, handle) = Sink::capture();
        let runner = Runner::builder(quiet_config())
            .with_sink(sink)
            .build(vec![example])
            .unwrap();

        let summary = runner.run().await;
        assert_eq!(summary.tally.errors, 1);
        assert!(handle.contents().starts_with("E"));
        assert!(handle.contents().contains("Panic: kaboom\n"));
    }

    #[tokio::test]
    async fn test_cleanup_exception_accumulates_with_context() {
        let example = Example::new("c", "spec.rs:5", |ctx: ExampleCtx| async move {
            ctx.expect(false, "body fails").await
        })
        .with_cleanup(|_ctx| async { Err(ExampleError::raised("IoError", "teardown")) });

        let (sink, handle) = Sink::capture();
        let runner = Runner::builder(quiet_config())
            .with_sink(sink)
            .build(vec![example])
            .unwrap();

        let summary = runner.run().await;
        // Mixed example: counted toward both, examples only once.
        assert_eq!(summary.tally.examples, 1);
        assert_eq!(summary.tally.failures, 1);
        assert_eq!(summary.tally.errors, 1);

        let out = handle.contents();
        assert!(out.starts_with("E")); // ErrorWins default
        assert!(out.contains("IoError occurred during: cleanup\n"));
    }

    #[tokio::test]
    async fn test_cancelled_run_still_renders_the_report() {
        let (sink, handle) = Sink::capture();
        let runner = Runner::builder(quiet_config())
            .with_sink(sink)
            .build(vec![pass("a"), pass("b")])
            .unwrap();

        runner.cancellation_token().cancel();
        let summary = runner.run().await;
        assert_eq!(summary.tally.examples, 0);
        assert!(handle.contents().contains("0 examples"));
    }

    #[tokio::test]
    async fn test_before_is_dispatched_once_per_example_in_order() {
        struct BeforeLog {
            seen: Mutex<Vec<String>>,
        }

        #[async_trait]
        impl Subscribe for BeforeLog {
            async fn on_event(&self, event: &Event) {
                if let Event::Before { description } = event {
                    self.seen.lock().unwrap().push(description.to_string());
                }
            }
        }

        let log = Arc::new(BeforeLog {
            seen: Mutex::new(Vec::new()),
        });
        let (sink, _handle) = Sink::capture();
        let runner = Runner::builder(quiet_config())
            .with_sink(sink)
            .with_subscribers(vec![Arc::clone(&log) as Arc<dyn Subscribe>])
            .build(vec![pass("a"), fail("b"), pass("c")])
            .unwrap();

        runner.run().await;
        assert_eq!(
            *log.seen.lock().unwrap(),
            vec!["a".to_string(), "b".to_string(), "c".to_string()]
        );
    }

    #[tokio::test]
    async fn test_rerun_accumulates_on_the_same_tally() {
        let (sink, _handle) = Sink::capture();
        let runner = Runner::builder(quiet_config())
            .with_sink(sink)
            .build(vec![pass("a")])
            .unwrap();

        runner.run().await;
        let second = runner.run().await;
        assert_eq!(second.tally.examples, 2);
    }
}
