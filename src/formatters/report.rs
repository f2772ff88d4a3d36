//! # Final report rendering shared by the built-in formatters.
//!
//! Renders the failure detail blocks, the timer line and the tally line at
//! the end of a run. Rendering reads the retained run states without
//! mutating them, so rendering the same completed run twice produces
//! byte-identical output.
//!
//! Detail labels are per exception: each recorded exception carries its own
//! failure/error classification, independent of the per-example glyph
//! tie-break.

use std::sync::Arc;

use crate::state::RunState;
use crate::subscribers::{Tally, Timer};

use super::sink::Sink;

/// Writes the end-of-run report: one numbered block per recorded exception,
/// then the elapsed time and the tally summary.
///
/// Block shape (context line only when a context message is present):
/// ```text
/// 1)
/// <description> FAILED
/// <ExceptionClass> occurred during: <context_message>
/// <ExceptionClass>: <message>
/// <frame>
/// ...
/// ```
pub(crate) fn render_report(
    sink: &Sink,
    states: &[Arc<RunState>],
    timer: &Timer,
    tally: &Tally,
) {
    sink.write("\n");
    let mut count = 0;
    for state in states {
        for (context, exception) in state.exceptions() {
            count += 1;
            let label = if exception.is_failure() {
                "FAILED"
            } else {
                "ERROR"
            };
            sink.write(&format!("\n{count})\n{} {label}\n", state.description()));
            if let Some(context) = context {
                sink.write(&format!(
                    "{} occurred during: {context}\n",
                    exception.class_name()
                ));
            }
            sink.write(&exception.rendered_message());
            sink.write("\n");
            for frame in exception.frames() {
                sink.write(frame);
                sink.write("\n");
            }
        }
    }
    sink.write(&format!("\n{}\n\n{}\n", timer.format(), tally.format()));
}
