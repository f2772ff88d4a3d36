//! # Example abstractions.
//!
//! This module provides the unit-under-test types:
//! - [`Example`] - description, location, metadata and closure-backed body
//! - [`ExampleCtx`] - per-execution handle (expectations, cancellation)
//! - [`BodyFn`] / [`BoxBodyFuture`] - the shared closure/future aliases

mod context;
mod example;

pub use context::ExampleCtx;
pub use example::{BodyFn, BoxBodyFuture, Example};
