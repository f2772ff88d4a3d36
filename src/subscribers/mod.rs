//! # Lifecycle event subscribers.
//!
//! This module provides the [`Subscribe`] trait and the two built-in
//! stateful subscribers every run carries:
//!
//! ```text
//! Event flow:
//!   Runner ── dispatch(&Event) ──► Bus ──► subscribers, registration order
//!                                            │
//!                                            ├──► Timer   (Start/Finish)
//!                                            ├──► Tally   (After/Expectation)
//!                                            ├──► formatter (After/Finish)
//!                                            └──► user subscribers
//! ```
//!
//! The timer and tally are registered before the formatter, so when the
//! formatter renders the finish report both already hold their final state.

mod subscribe;
mod tally;
mod timer;

pub use subscribe::Subscribe;
pub use tally::{Tally, TallySnapshot};
pub use timer::Timer;
