//! # Execution handle passed into example bodies.
//!
//! [`ExampleCtx`] is what a body receives instead of ambient globals: a way
//! to report expectation checks to the run's subscribers and a cooperative
//! cancellation probe. Bodies should check [`ExampleCtx::is_cancelled`]
//! around long operations and return early during an aborting run.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::error::ExampleError;
use crate::events::{Bus, Event};

/// Handle given to each example body (and cleanup block) for one execution.
#[derive(Clone)]
pub struct ExampleCtx {
    bus: Arc<Bus>,
    token: CancellationToken,
}

impl ExampleCtx {
    pub(crate) fn new(bus: Arc<Bus>, token: CancellationToken) -> Self {
        Self { bus, token }
    }

    /// Reports one expectation check to the run's subscribers.
    ///
    /// The tally counts these; call it once per logical assertion.
    pub async fn expectation(&self) {
        self.bus.dispatch(&Event::Expectation).await;
    }

    /// Checks one condition, counting it as an expectation.
    ///
    /// Returns [`ExampleError::ExpectationFailed`] carrying `message` when
    /// `condition` is false, so bodies can propagate with `?`.
    pub async fn expect(
        &self,
        condition: bool,
        message: impl Into<String>,
    ) -> Result<(), ExampleError> {
        self.expectation().await;
        if condition {
            Ok(())
        } else {
            Err(ExampleError::ExpectationFailed {
                message: message.into(),
            })
        }
    }

    /// True once the run is being cancelled cooperatively.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}
