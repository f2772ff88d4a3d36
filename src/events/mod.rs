//! Lifecycle events: phases, typed payloads and the dispatch bus.
//!
//! This module groups the event **data model** and the **bus** used to
//! dispatch lifecycle events from the run loop to subscribers.
//!
//! ## Contents
//! - [`Phase`], [`Event`] phase classification and typed payloads
//! - [`Bus`] ordered synchronous per-phase dispatch
//!
//! ## Quick reference
//! - **Publisher**: the [`Runner`](crate::Runner) run loop (and example
//!   bodies, for `Expectation` events via their context handle).
//! - **Consumers**: the built-in [`Timer`](crate::Timer) and
//!   [`Tally`](crate::Tally), the configured formatter, and any user
//!   subscriber.

mod bus;
mod event;

pub use bus::Bus;
pub use event::{Event, Phase};
