//! Error types used by the ruspec runtime and example bodies.
//!
//! This module defines two main error enums:
//!
//! - [`RunnerError`] — errors raised by the runner machinery itself.
//! - [`ExampleError`] — errors raised by individual example executions.
//!
//! Both types provide helper methods (`as_label`) for logging, plus
//! [`ExampleError::is_failure`] which drives the failure-vs-error
//! classification used by the tally and the formatters.

use std::path::PathBuf;
use thiserror::Error;

/// # Errors produced by the runner machinery.
///
/// These represent faults of the reporting/selection pipeline itself,
/// never of the examples it runs.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum RunnerError {
    /// The configured output file could not be opened for writing.
    #[error("cannot open output file {path:?}: {source}")]
    OutputOpen {
        /// Path the sink tried to create/truncate.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A configured pattern-filter value is not a valid regular expression.
    #[error("invalid filter pattern {pattern:?}: {source}")]
    BadPattern {
        /// The offending pattern string.
        pattern: String,
        /// Underlying regex compile error.
        source: regex::Error,
    },
}

impl RunnerError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use ruspec::RunnerError;
    ///
    /// let err = RunnerError::BadPattern {
    ///     pattern: "(".into(),
    ///     source: regex::Regex::new("(").unwrap_err(),
    /// };
    /// assert_eq!(err.as_label(), "runner_bad_pattern");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            RunnerError::OutputOpen { .. } => "runner_output_open",
            RunnerError::BadPattern { .. } => "runner_bad_pattern",
        }
    }
}

/// # Errors produced by example execution.
///
/// The two variants map onto the two reporting outcomes:
/// an [`ExpectationFailed`](ExampleError::ExpectationFailed) renders as
/// `FAILED`, everything else renders as `ERROR`.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ExampleError {
    /// An expectation mismatch raised by the example body.
    #[error("expectation not met: {message}")]
    ExpectationFailed {
        /// Description of the mismatched expectation.
        message: String,
    },

    /// Any other raised error (setup/teardown crash, runtime fault).
    #[error("{class_name}: {message}")]
    Raised {
        /// Name of the error class/category, shown in the failure report.
        class_name: String,
        /// Human-readable error message (may be empty).
        message: String,
    },
}

impl ExampleError {
    /// Convenience constructor for an assertion-style failure.
    pub fn expectation(message: impl Into<String>) -> Self {
        ExampleError::ExpectationFailed {
            message: message.into(),
        }
    }

    /// Convenience constructor for an unexpected error.
    pub fn raised(class_name: impl Into<String>, message: impl Into<String>) -> Self {
        ExampleError::Raised {
            class_name: class_name.into(),
            message: message.into(),
        }
    }

    /// Returns `true` when the error classifies as an assertion-style
    /// failure rather than an unexpected error.
    ///
    /// # Example
    /// ```
    /// use ruspec::ExampleError;
    ///
    /// assert!(ExampleError::expectation("1 != 2").is_failure());
    /// assert!(!ExampleError::raised("IoError", "broken pipe").is_failure());
    /// ```
    pub fn is_failure(&self) -> bool {
        matches!(self, ExampleError::ExpectationFailed { .. })
    }

    /// Returns the reported class name for this error.
    pub fn class_name(&self) -> &str {
        match self {
            ExampleError::ExpectationFailed { .. } => "ExpectationNotMet",
            ExampleError::Raised { class_name, .. } => class_name,
        }
    }

    /// Returns the raw message (may be empty).
    pub fn message(&self) -> &str {
        match self {
            ExampleError::ExpectationFailed { message } => message,
            ExampleError::Raised { message, .. } => message,
        }
    }

    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            ExampleError::ExpectationFailed { .. } => "example_expectation_failed",
            ExampleError::Raised { .. } => "example_raised",
        }
    }
}
