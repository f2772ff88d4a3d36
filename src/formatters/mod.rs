//! # Progress and report rendering.
//!
//! A formatter is just a [`Subscribe`](crate::Subscribe) implementation that
//! observes `After`/`Finish` events and reads the shared
//! [`Timer`](crate::Timer) and [`Tally`](crate::Tally); the two built-ins
//! differ only in how they stream progress:
//!
//! | Formatter            | Progress           | Chosen automatically for |
//! |----------------------|--------------------|--------------------------|
//! | [`DottedFormatter`]  | one glyph/example  | small runs               |
//! | [`SpecdocFormatter`] | one line/example   | large runs               |
//!
//! All output flows through the injectable [`Sink`].

mod dotted;
mod report;
mod sink;
mod specdoc;

pub use dotted::DottedFormatter;
pub use sink::{CaptureHandle, Sink};
pub use specdoc::SpecdocFormatter;

/// Which built-in formatter the run should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatterKind {
    /// One progress glyph per example.
    Dotted,
    /// One line per example.
    Specdoc,
}
