//! # Run configuration.
//!
//! Provides [`Config`], the fixed set of named options a run consumes.
//! The struct is built once before the run begins and treated as immutable
//! thereafter; the builder reads it when wiring filters, formatter and sink.
//!
//! ## Sentinel values
//! - `output = None` → report to the process standard output stream
//! - `formatter = None` → auto-select by admitted example count
//!   (dotted below `formatter_threshold`, specdoc at or above it)

use std::path::PathBuf;

use crate::formatters::FormatterKind;
use crate::state::Precedence;

/// Named options for one run.
///
/// Defines:
/// - **Output**: sink target and formatter selection
/// - **Selection**: value lists for the four filter kinds, include and
///   exclude side each
/// - **Abort behavior**: whether an interrupt signal kills the run
///
/// ## Field semantics
/// All fields are public; construct with `Config::default()` and override
/// what the caller (typically a CLI) collected.
#[derive(Clone, Debug)]
pub struct Config {
    /// Report destination; `None` writes to standard output.
    pub output: Option<PathBuf>,

    /// Explicit formatter choice; `None` auto-selects by example count.
    pub formatter: Option<FormatterKind>,

    /// Auto-selection cut-over: runs with at least this many admitted
    /// examples use the specdoc formatter.
    pub formatter_threshold: usize,

    /// Glyph tie-break for examples recording both failures and errors.
    pub precedence: Precedence,

    /// Exact descriptions to include.
    pub includes: Vec<String>,
    /// Exact descriptions to exclude.
    pub excludes: Vec<String>,
    /// Description patterns to include.
    pub patterns: Vec<String>,
    /// Description patterns to exclude.
    pub xpatterns: Vec<String>,
    /// Tags to include.
    pub tags: Vec<String>,
    /// Tags to exclude.
    pub xtags: Vec<String>,
    /// Profiles to include.
    pub profiles: Vec<String>,
    /// Profiles to exclude.
    pub xprofiles: Vec<String>,

    /// When `true`, an interrupt signal terminates the process immediately
    /// (exit status 1, no finish-phase flush).
    pub abort_on_interrupt: bool,
}

impl Config {
    /// Resolves the formatter for a run of `examples` admitted examples.
    ///
    /// An explicit choice always wins; otherwise small runs get the dotted
    /// formatter and large runs the specdoc one.
    pub fn formatter_for(&self, examples: usize) -> FormatterKind {
        self.formatter.unwrap_or({
            if examples < self.formatter_threshold {
                FormatterKind::Dotted
            } else {
                FormatterKind::Specdoc
            }
        })
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `output = None` (standard output)
    /// - `formatter = None` (auto-select), `formatter_threshold = 50`
    /// - `precedence = ErrorWins`
    /// - every filter list empty (no selection constraint)
    /// - `abort_on_interrupt = true`
    fn default() -> Self {
        Self {
            output: None,
            formatter: None,
            formatter_threshold: 50,
            precedence: Precedence::default(),
            includes: Vec::new(),
            excludes: Vec::new(),
            patterns: Vec::new(),
            xpatterns: Vec::new(),
            tags: Vec::new(),
            xtags: Vec::new(),
            profiles: Vec::new(),
            xprofiles: Vec::new(),
            abort_on_interrupt: true,
        }
    }
}
