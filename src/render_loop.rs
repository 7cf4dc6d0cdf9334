use std::time::Duration;

use crate::engine::{Event, Timers};
use crate::scheduler::TimerHandle;

const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Fixed-interval frame driver.
///
/// The frame timer is re-armed when its tick is handed out and the session
/// renders synchronously before polling again, so ticks never overlap.
#[derive(Debug)]
pub struct RenderLoop {
    interval: Duration,
    handle: Option<TimerHandle>,
}

impl RenderLoop {
    pub fn new(interval: Duration) -> Self {
        Self { interval: interval.max(MIN_INTERVAL), handle: None }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Returns `true` if the loop was idle and is now running.
    pub fn start(&mut self, timers: &mut Timers) -> bool {
        if self.handle.is_some() {
            return false;
        }
        self.handle = Some(timers.schedule_repeating(self.interval, Event::Frame));
        true
    }

    pub fn stop(&mut self, timers: &mut Timers) {
        if let Some(handle) = self.handle.take() {
            timers.cancel(handle);
        }
    }
}
