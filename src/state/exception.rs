//! # Captured exception with classification and trace.
//!
//! [`ExceptionInfo`] wraps one error raised by an example body (an
//! [`ExampleError`](crate::ExampleError) return or a caught panic) together
//! with the classification flag that decides whether it reports as `FAILED`
//! or `ERROR`.
//!
//! ## Trace capture
//! Backtraces are exposed through a single capability, [`TraceSource`], with
//! two implementations selected at wrap time:
//! - [`RichTrace`] frames parsed from [`std::backtrace::Backtrace`]
//!   (available when backtrace capture is enabled for the process);
//! - [`RawTrace`] a single fallback frame naming the wrap site.
//!
//! Formatters iterate [`ExceptionInfo::frames`] without ever branching on
//! which implementation backs it.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::fmt;
use std::panic::Location;

use crate::error::ExampleError;

/// Ordered sequence of human-readable stack frames.
///
/// One capability over both trace shapes; the selection between
/// [`RichTrace`] and [`RawTrace`] happens when the exception is wrapped.
pub trait TraceSource: fmt::Debug + Send + Sync + 'static {
    /// Frames in call order, one rendered line per frame.
    fn frames(&self) -> &[String];
}

/// Trace parsed from a captured [`Backtrace`].
#[derive(Debug)]
pub struct RichTrace {
    frames: Vec<String>,
}

impl RichTrace {
    /// Parses the rendered backtrace into one frame string per line.
    pub fn from_backtrace(backtrace: &Backtrace) -> Self {
        let frames = backtrace
            .to_string()
            .lines()
            .map(|line| line.trim_end().to_string())
            .collect();
        Self { frames }
    }
}

impl TraceSource for RichTrace {
    fn frames(&self) -> &[String] {
        &self.frames
    }
}

/// Single-frame fallback trace naming the location the error was wrapped at.
#[derive(Debug)]
pub struct RawTrace {
    frames: Vec<String>,
}

impl RawTrace {
    /// Builds a one-frame trace from the caller's source location.
    #[track_caller]
    pub fn here() -> Self {
        let loc = Location::caller();
        Self {
            frames: vec![format!("{}:{}:{}", loc.file(), loc.line(), loc.column())],
        }
    }
}

impl TraceSource for RawTrace {
    fn frames(&self) -> &[String] {
        &self.frames
    }
}

/// Captures a trace at the current point.
///
/// Returns a [`RichTrace`] when backtrace capture is enabled for the process
/// (`RUST_BACKTRACE`), otherwise a [`RawTrace`] naming the caller.
#[track_caller]
fn capture_trace() -> Box<dyn TraceSource> {
    let backtrace = Backtrace::capture();
    match backtrace.status() {
        BacktraceStatus::Captured => Box::new(RichTrace::from_backtrace(&backtrace)),
        _ => Box::new(RawTrace::here()),
    }
}

/// A raised error wrapped for reporting.
///
/// Immutable once built. Carries:
/// - `class_name`: error class/category shown in the report
/// - `message`: raw message (may be empty, see [`rendered_message`](Self::rendered_message))
/// - `is_failure`: `true` for assertion-style failures, `false` for errors
/// - a trace, absent only when explicitly constructed without one
#[derive(Debug)]
pub struct ExceptionInfo {
    class_name: String,
    message: String,
    is_failure: bool,
    trace: Option<Box<dyn TraceSource>>,
}

impl ExceptionInfo {
    /// Builds an exception record with an explicit trace (or none).
    pub fn new(
        class_name: impl Into<String>,
        message: impl Into<String>,
        is_failure: bool,
        trace: Option<Box<dyn TraceSource>>,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            message: message.into(),
            is_failure,
            trace,
        }
    }

    /// Wraps an [`ExampleError`] returned by an example body.
    ///
    /// Classification comes from [`ExampleError::is_failure`]; the trace is
    /// captured at the call site.
    #[track_caller]
    pub fn from_error(err: &ExampleError) -> Self {
        Self {
            class_name: err.class_name().to_string(),
            message: err.message().to_string(),
            is_failure: err.is_failure(),
            trace: Some(capture_trace()),
        }
    }

    /// Wraps a caught panic payload.
    ///
    /// Panics always classify as unexpected errors, never as failures.
    #[track_caller]
    pub fn from_panic(payload: Box<dyn std::any::Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            String::new()
        };
        Self {
            class_name: "Panic".to_string(),
            message,
            is_failure: false,
            trace: Some(capture_trace()),
        }
    }

    /// Error class/category name.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Raw message (may be empty).
    pub fn message(&self) -> &str {
        &self.message
    }

    /// `true` when this exception is an assertion-style failure.
    pub fn is_failure(&self) -> bool {
        self.is_failure
    }

    /// Trace frames, empty when no trace was recorded.
    pub fn frames(&self) -> &[String] {
        self.trace.as_deref().map_or(&[], TraceSource::frames)
    }

    /// Message as rendered in the failure report.
    ///
    /// An empty message renders as the literal `<No message>`; anything else
    /// as `<class_name>: <message>`.
    pub fn rendered_message(&self) -> String {
        if self.message.is_empty() {
            "<No message>".to_string()
        } else {
            format!("{}: {}", self.class_name, self.message)
        }
    }
}
