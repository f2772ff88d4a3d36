//! # Dotted progress formatter.
//!
//! The reference formatter: one glyph per example as the run proceeds,
//! detail blocks at the end.
//!
//! ## State machine
//! `{collecting} → {finished}` (terminal). While collecting, each `After`
//! event emits one progress character — `.` for a clean pass, `F` for a
//! failure, `E` for an error — and retains the run state of every
//! non-passing example for the final report. On `Finish` the formatter
//! renders the retained detail blocks, the timer line and the tally line.
//!
//! ## Glyph tie-break
//! An example that recorded both failure- and error-classified exceptions
//! renders per the configured [`Precedence`]; the default `ErrorWins` makes
//! it an `E`.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::events::Event;
use crate::state::{Outcome, Precedence, RunState};
use crate::subscribers::{Subscribe, Tally, Timer};

use super::report::render_report;
use super::sink::Sink;

/// One-glyph-per-example progress formatter.
pub struct DottedFormatter {
    sink: Sink,
    timer: Arc<Timer>,
    tally: Arc<Tally>,
    precedence: Precedence,
    states: Mutex<Vec<Arc<RunState>>>,
}

impl DottedFormatter {
    /// Creates a formatter rendering through `sink`, reading final numbers
    /// from the shared `timer` and `tally`.
    pub fn new(sink: Sink, timer: Arc<Timer>, tally: Arc<Tally>, precedence: Precedence) -> Self {
        Self {
            sink,
            timer,
            tally,
            precedence,
            states: Mutex::new(Vec::new()),
        }
    }

    fn on_after(&self, state: &Arc<RunState>) {
        match state.outcome(self.precedence) {
            Outcome::Passed => self.sink.write("."),
            Outcome::Failed => {
                self.retain(state);
                self.sink.write("F");
            }
            Outcome::Errored => {
                self.retain(state);
                self.sink.write("E");
            }
        }
    }

    fn retain(&self, state: &Arc<RunState>) {
        self.states
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(Arc::clone(state));
    }

    fn on_finish(&self) {
        let states = self.states.lock().unwrap_or_else(|e| e.into_inner());
        render_report(&self.sink, &states, &self.timer, &self.tally);
    }
}

#[async_trait]
impl Subscribe for DottedFormatter {
    async fn on_event(&self, event: &Event) {
        match event {
            Event::After { state } => self.on_after(state),
            Event::Finish => self.on_finish(),
            _ => {}
        }
    }

    fn name(&self) -> &'static str {
        "dotted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatters::sink::CaptureHandle;
    use crate::state::ExceptionInfo;

    fn formatter(precedence: Precedence) -> (DottedFormatter, CaptureHandle) {
        let (sink, handle) = Sink::capture();
        let formatter = DottedFormatter::new(
            sink,
            Arc::new(Timer::new()),
            Arc::new(Tally::new()),
            precedence,
        );
        (formatter, handle)
    }

    fn after(build: impl FnOnce(&mut RunState)) -> Event {
        let mut state = RunState::new("Array#sort sorts");
        build(&mut state);
        Event::After {
            state: Arc::new(state),
        }
    }

    fn failure() -> ExceptionInfo {
        ExceptionInfo::new("ExpectationNotMet", "1 != 2", true, None)
    }

    fn error() -> ExceptionInfo {
        ExceptionInfo::new("IoError", "boom", false, None)
    }

    #[tokio::test]
    async fn test_pass_renders_a_dot_never_f_or_e() {
        let (formatter, handle) = formatter(Precedence::ErrorWins);
        formatter.on_event(&after(|_| {})).await;
        assert_eq!(handle.contents(), ".");
    }

    #[tokio::test]
    async fn test_all_failures_render_f() {
        let (formatter, handle) = formatter(Precedence::ErrorWins);
        formatter
            .on_event(&after(|s| {
                s.record(None, failure());
                s.record(None, failure());
            }))
            .await;
        assert_eq!(handle.contents(), "F");
    }

    #[tokio::test]
    async fn test_any_error_renders_e_under_default_precedence() {
        let (formatter, handle) = formatter(Precedence::ErrorWins);
        formatter
            .on_event(&after(|s| {
                s.record(None, failure());
                s.record(Some("cleanup".into()), error());
            }))
            .await;
        assert_eq!(handle.contents(), "E");
    }

    #[tokio::test]
    async fn test_failure_wins_precedence_flips_the_glyph() {
        let (formatter, handle) = formatter(Precedence::FailureWins);
        formatter
            .on_event(&after(|s| {
                s.record(None, failure());
                s.record(None, error());
            }))
            .await;
        assert_eq!(handle.contents(), "F");
    }

    #[tokio::test]
    async fn test_finish_renders_numbered_blocks_and_summary() {
        let (formatter, handle) = formatter(Precedence::ErrorWins);
        formatter
            .on_event(&after(|s| s.record(None, failure())))
            .await;
        formatter
            .on_event(&after(|s| {
                s.record(Some("cleanup".into()), ExceptionInfo::new("IoError", "", false, None));
            }))
            .await;
        formatter.on_event(&Event::Finish).await;

        let out = handle.contents();
        assert!(out.starts_with("FE\n"));
        assert!(out.contains("\n1)\nArray#sort sorts FAILED\n"));
        assert!(out.contains("ExpectationNotMet: 1 != 2\n"));
        assert!(out.contains("\n2)\nArray#sort sorts ERROR\n"));
        assert!(out.contains("IoError occurred during: cleanup\n"));
        assert!(out.contains("<No message>\n"));
        assert!(out.contains("Finished in 0.000000 seconds\n"));
        assert!(out.contains("0 examples, 0 expectations, 0 failures, 0 errors\n"));
    }

    #[tokio::test]
    async fn test_finish_twice_is_byte_identical() {
        let (formatter, handle) = formatter(Precedence::ErrorWins);
        formatter
            .on_event(&after(|s| s.record(None, failure())))
            .await;

        formatter.on_event(&Event::Finish).await;
        let first = handle.contents();
        formatter.on_event(&Event::Finish).await;
        let both = handle.contents();

        let glyphs = "F";
        let report = &first[glyphs.len()..];
        assert_eq!(both, format!("{first}{report}"));
    }
}
