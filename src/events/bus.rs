//! # Event bus: ordered, synchronous phase dispatch.
//!
//! [`Bus`] maps each [`Phase`] to an ordered list of subscribers and
//! dispatches events to them **in registration order, synchronously** — the
//! dispatch call returns only after every subscriber for that phase has run.
//!
//! ## Architecture
//! ```text
//!    dispatch(&Event)
//!        │            (subscribers for event.phase(), registration order)
//!        ├──► sub1.on_event(&ev).await
//!        ├──► sub2.on_event(&ev).await
//!        └──► subN.on_event(&ev).await
//! ```
//!
//! ## Rules
//! - **Every subscriber sees every event** of the phases it registered for.
//! - **Ordered**: subscribers run one at a time, in registration order.
//! - **Isolated**: a panic inside a subscriber is caught and logged; the
//!   remaining subscribers still run and the dispatch itself never fails.
//! - **Frozen after wiring**: registration happens before the run begins;
//!   dispatch only needs `&self`, so the bus is shared as `Arc<Bus>`.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;

use crate::events::event::{Event, Phase};
use crate::subscribers::Subscribe;

/// Per-run registry of phase subscribers with ordered synchronous dispatch.
#[derive(Default)]
pub struct Bus {
    subscribers: Vec<(Phase, Arc<dyn Subscribe>)>,
}

impl Bus {
    /// Creates an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `subscriber` for one phase, after everything registered
    /// so far.
    ///
    /// The same subscriber may be registered for several phases (clone the
    /// `Arc`); it then sees the events of each of them.
    pub fn register(&mut self, phase: Phase, subscriber: Arc<dyn Subscribe>) {
        self.subscribers.push((phase, subscriber));
    }

    /// Dispatches one event to every subscriber of its phase, in
    /// registration order, awaiting each before calling the next.
    ///
    /// A subscriber that panics is reported via `tracing` and skipped;
    /// dispatch continues with the remaining subscribers.
    pub async fn dispatch(&self, event: &Event) {
        let phase = event.phase();
        for (registered, subscriber) in &self.subscribers {
            if *registered != phase {
                continue;
            }
            let fut = subscriber.on_event(event);
            if let Err(panic) = AssertUnwindSafe(fut).catch_unwind().await {
                tracing::warn!(
                    subscriber = subscriber.name(),
                    ?phase,
                    "subscriber panicked during dispatch: {panic:?}"
                );
            }
        }
    }

    /// Number of registrations for the given phase.
    #[must_use]
    pub fn subscriber_count(&self, phase: Phase) -> usize {
        self.subscribers.iter().filter(|(p, _)| *p == phase).count()
    }

    /// True if nothing is registered at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct Recorder {
        label: &'static str,
        log: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl Subscribe for Recorder {
        async fn on_event(&self, event: &Event) {
            self.log
                .lock()
                .unwrap()
                .push(format!("{}:{:?}", self.label, event.phase()));
        }
    }

    struct Panicker;

    #[async_trait]
    impl Subscribe for Panicker {
        async fn on_event(&self, _event: &Event) {
            panic!("subscriber blew up");
        }
    }

    #[tokio::test]
    async fn test_dispatch_runs_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut bus = Bus::new();
        bus.register(
            Phase::Finish,
            Arc::new(Recorder {
                label: "first",
                log: log.clone(),
            }),
        );
        bus.register(
            Phase::Finish,
            Arc::new(Recorder {
                label: "second",
                log: log.clone(),
            }),
        );

        bus.dispatch(&Event::Finish).await;
        assert_eq!(
            *log.lock().unwrap(),
            vec!["first:Finish".to_string(), "second:Finish".to_string()]
        );
    }

    #[tokio::test]
    async fn test_dispatch_only_reaches_matching_phase() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut bus = Bus::new();
        bus.register(
            Phase::Start,
            Arc::new(Recorder {
                label: "starter",
                log: log.clone(),
            }),
        );

        bus.dispatch(&Event::Finish).await;
        assert!(log.lock().unwrap().is_empty());

        bus.dispatch(&Event::Start { examples: 1 }).await;
        assert_eq!(*log.lock().unwrap(), vec!["starter:Start".to_string()]);
    }

    #[tokio::test]
    async fn test_panicking_subscriber_does_not_halt_dispatch() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut bus = Bus::new();
        bus.register(Phase::Finish, Arc::new(Panicker));
        bus.register(
            Phase::Finish,
            Arc::new(Recorder {
                label: "survivor",
                log: log.clone(),
            }),
        );

        bus.dispatch(&Event::Finish).await;
        assert_eq!(*log.lock().unwrap(), vec!["survivor:Finish".to_string()]);
    }

    #[test]
    fn test_subscriber_count_per_phase() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut bus = Bus::new();
        assert!(bus.is_empty());
        bus.register(
            Phase::After,
            Arc::new(Recorder {
                label: "a",
                log: log.clone(),
            }),
        );
        bus.register(
            Phase::After,
            Arc::new(Recorder {
                label: "b",
                log,
            }),
        );
        assert_eq!(bus.subscriber_count(Phase::After), 2);
        assert_eq!(bus.subscriber_count(Phase::Start), 0);
    }
}
