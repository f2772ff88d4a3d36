//! Run core: configuration, discovery, wiring and the run loop.
//!
//! Internal modules:
//! - [`config`]: the fixed per-run option struct;
//! - [`discovery`]: the spec-file collaborator (`files`, `SpecSource`);
//! - [`builder`]: wires filters, formatter, sink and subscribers;
//! - [`runner`]: executes admitted examples and dispatches lifecycle events;
//! - [`abort`]: the interrupt trap for fast cancellation.

mod abort;
mod builder;
mod config;
mod discovery;
mod runner;

pub use builder::RunnerBuilder;
pub use config::Config;
pub use discovery::{files, DirSource, SpecSource};
pub use runner::{RunSummary, Runner};
