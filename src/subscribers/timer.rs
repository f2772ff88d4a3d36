//! # Wall-clock timer for the whole run.
//!
//! [`Timer`] records the instant of the `Start` event and fixes the elapsed
//! duration on `Finish`. Between the two, [`Timer::elapsed`] reads the
//! running clock; if `Start` never fired, elapsed is zero (the documented
//! "not started" sentinel — the timer always produces a value).

use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use crate::events::Event;
use crate::subscribers::subscribe::Subscribe;

#[derive(Debug, Default)]
struct TimerState {
    started_at: Option<Instant>,
    stopped_after: Option<Duration>,
}

/// Wall-clock duration of one run, driven by `Start`/`Finish` events.
#[derive(Debug, Default)]
pub struct Timer {
    state: Mutex<TimerState>,
}

impl Timer {
    /// Creates a timer that has not started.
    pub fn new() -> Self {
        Self::default()
    }

    /// Elapsed wall-clock time.
    ///
    /// - never started → `Duration::ZERO`
    /// - started, not finished → time since start
    /// - finished → the fixed duration between `Start` and `Finish`
    pub fn elapsed(&self) -> Duration {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        match (*state).started_at {
            None => Duration::ZERO,
            Some(started) => state.stopped_after.unwrap_or_else(|| started.elapsed()),
        }
    }

    /// Renders the elapsed time with fixed six-digit precision.
    ///
    /// # Example
    /// ```
    /// use ruspec::Timer;
    ///
    /// let timer = Timer::new();
    /// assert_eq!(timer.format(), "Finished in 0.000000 seconds");
    /// ```
    pub fn format(&self) -> String {
        format!("Finished in {:.6} seconds", self.elapsed().as_secs_f64())
    }
}

#[async_trait]
impl Subscribe for Timer {
    async fn on_event(&self, event: &Event) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        match event {
            Event::Start { .. } => {
                state.started_at = Some(Instant::now());
                state.stopped_after = None;
            }
            Event::Finish => {
                if let Some(started) = state.started_at {
                    state.stopped_after = Some(started.elapsed());
                }
            }
            _ => {}
        }
    }

    fn name(&self) -> &'static str {
        "timer"
    }
}
