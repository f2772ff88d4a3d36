//! # Core subscriber trait
//!
//! `Subscribe` is the extension point for plugging custom event handlers
//! into the run. Subscribers are registered on the
//! [`Bus`](crate::events::Bus) per phase and called **synchronously, in
//! registration order** — the run loop waits for each handler before moving
//! on, so a handler observing an `After` event always sees it before the
//! next example starts.
//!
//! ## Contract
//! - Handlers receive `&self`; keep mutable state behind atomics or a
//!   `Mutex` (see [`Tally`](crate::Tally) and [`Timer`](crate::Timer)).
//! - A panic inside a handler is caught and logged by the bus; the other
//!   subscribers still run.
//!
//! ## Example (skeleton)
//! ```rust
//! use ruspec::{Event, Subscribe};
//!
//! struct FailureBell;
//!
//! #[async_trait::async_trait]
//! impl Subscribe for FailureBell {
//!     async fn on_event(&self, event: &Event) {
//!         if let Event::After { state } = event {
//!             if state.has_exception() {
//!                 // ring...
//!             }
//!         }
//!     }
//!     fn name(&self) -> &'static str {
//!         "failure-bell"
//!     }
//! }
//! ```

use async_trait::async_trait;

use crate::events::Event;

/// Contract for lifecycle event subscribers.
///
/// Called inline from the run loop's dispatch. Implementations should avoid
/// blocking the runtime (prefer async I/O and cooperative waits).
#[async_trait]
pub trait Subscribe: Send + Sync + 'static {
    /// Handle a single event for this subscriber.
    ///
    /// # Parameters
    /// - `event`: Reference to the event (does not transfer ownership)
    async fn on_event(&self, event: &Event);

    /// Human-readable name (for logs).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
