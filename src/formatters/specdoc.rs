//! # Specdoc formatter.
//!
//! Verbose alternative to the dotted formatter: one line per example
//! instead of one glyph, suffixed `(FAILED)` / `(ERROR)` for non-passing
//! examples. The finish report is identical to the dotted one. Selected
//! automatically for large runs (see
//! [`Config::formatter_threshold`](crate::Config::formatter_threshold)).

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::events::Event;
use crate::state::{Outcome, Precedence, RunState};
use crate::subscribers::{Subscribe, Tally, Timer};

use super::report::render_report;
use super::sink::Sink;

/// One-line-per-example progress formatter.
pub struct SpecdocFormatter {
    sink: Sink,
    timer: Arc<Timer>,
    tally: Arc<Tally>,
    precedence: Precedence,
    states: Mutex<Vec<Arc<RunState>>>,
}

impl SpecdocFormatter {
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
            Outcome::Passed => self.sink.write(&format!("{}\n", state.description())),
            Outcome::Failed => {
                self.retain(state);
                self.sink
                    .write(&format!("{} (FAILED)\n", state.description()));
            }
            Outcome::Errored => {
                self.retain(state);
                self.sink
                    .write(&format!("{} (ERROR)\n", state.description()));
            }
        }
    }

    fn retain(&self, state: &Arc<RunState>) {
        self.states
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(Arc::clone(state));
    }
}

#[async_trait]
impl Subscribe for SpecdocFormatter {
    async fn on_event(&self, event: &Event) {
        match event {
            Event::After { state } => self.on_after(state),
            Event::Finish => {
                let states = self.states.lock().unwrap_or_else(|e| e.into_inner());
                render_report(&self.sink, &states, &self.timer, &self.tally);
            }
            _ => {}
        }
    }

    fn name(&self) -> &'static str {
        "specdoc"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatters::sink::CaptureHandle;
    use crate::state::ExceptionInfo;

    fn formatter() -> (SpecdocFormatter, CaptureHandle) {
        let (sink, handle) = Sink::capture();
        let formatter = SpecdocFormatter::new(
            sink,
            Arc::new(Timer::new()),
            Arc::new(Tally::new()),
            Precedence::ErrorWins,
        );
        (formatter, handle)
    }

    fn after(description: &str, build: impl FnOnce(&mut RunState)) -> Event {
        let mut state = RunState::new(description);
        build(&mut state);
        Event::After {
            state: Arc::new(state),
        }
    }

    #[tokio::test]
    async fn test_one_line_per_example() {
        let (formatter, handle) = formatter();
        formatter.on_event(&after("a passes", |_| {})).await;
        formatter
            .on_event(&after("b fails", |s| {
                s.record(
                    None,
                    ExceptionInfo::new("ExpectationNotMet", "1 != 2", true, None),
                );
            }))
            .await;
        formatter
            .on_event(&after("c errors", |s| {
                s.record(None, ExceptionInfo::new("IoError", "boom", false, None));
            }))
            .await;

        assert_eq!(
            handle.contents(),
            "a passes\nb fails (FAILED)\nc errors (ERROR)\n"
        );
    }

    #[tokio::test]
    async fn test_finish_report_matches_dotted_shape() {
        let (formatter, handle) = formatter();
        formatter
            .on_event(&after("b fails", |s| {
                s.record(
                    None,
                    ExceptionInfo::new("ExpectationNotMet", "1 != 2", true, None),
                );
            }))
            .await;
        formatter.on_event(&Event::Finish).await;

        let out = handle.contents();
        assert!(out.contains("\n1)\nb fails FAILED\n"));
        assert!(out.contains("ExpectationNotMet: 1 != 2\n"));
        assert!(out.contains("Finished in 0.000000 seconds\n"));
    }
}
