use std::time::Duration;

/// Identifies a scheduled timer so it can be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct Timer<E> {
    handle: TimerHandle,
    deadline: Duration,
    interval: Option<Duration>,
    event: E,
}

/// Single-threaded timer queue driven by an externally supplied clock.
///
/// Timers carry an event value instead of a callback: the owner polls for
/// due events and dispatches them itself, so a handler can freely reschedule
/// or cancel without re-entering the scheduler. A repeating timer is re-armed
/// relative to the time it is handed out, never stacking missed ticks.
#[derive(Debug)]
pub struct Scheduler<E> {
    now: Duration,
    next_handle: u64,
    timers: Vec<Timer<E>>,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Scheduler<E> {
    pub fn new() -> Self {
        Self { now: Duration::ZERO, next_handle: 0, timers: Vec::new() }
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn schedule_once(&mut self, delay: Duration, event: E) -> TimerHandle {
        self.insert(delay, None, event)
    }

    pub fn schedule_repeating(&mut self, interval: Duration, event: E) -> TimerHandle {
        self.insert(interval, Some(interval), event)
    }

    /// Returns `false` if the timer already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.timers.len();
        self.timers.retain(|timer| timer.handle != handle);
        self.timers.len() != before
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.timers.iter().any(|timer| timer.handle == handle)
    }

    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Moves the clock forward. Time never runs backwards.
    pub fn advance_to(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    fn insert(&mut self, delay: Duration, interval: Option<Duration>, event: E) -> TimerHandle {
        self.next_handle += 1;
        let handle = TimerHandle(self.next_handle);
        self.timers.push(Timer { handle, deadline: self.now + delay, interval, event });
        handle
    }

    fn earliest_due(&self) -> Option<usize> {
        self.timers
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.deadline <= self.now)
            .min_by_key(|(_, timer)| (timer.deadline, timer.handle.0))
            .map(|(index, _)| index)
    }
}

impl<E: Clone> Scheduler<E> {
    /// Hands out the earliest due event, if any.
    pub fn next_due(&mut self) -> Option<(TimerHandle, E)> {
        let index = self.earliest_due()?;
        match self.timers[index].interval {
            Some(interval) => {
                let timer = &mut self.timers[index];
                timer.deadline = self.now + interval;
                Some((timer.handle, timer.event.clone()))
            }
            None => {
                let timer = self.timers.swap_remove(index);
                Some((timer.handle, timer.event))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn once_fires_a_single_time() {
        let mut s = Scheduler::new();
        let h = s.schedule_once(10 * MS, "ping");

        s.advance_to(9 * MS);
        assert_eq!(s.next_due(), None);

        s.advance_to(10 * MS);
        assert_eq!(s.next_due(), Some((h, "ping")));
        assert_eq!(s.next_due(), None);
        assert!(!s.is_pending(h));
    }

    #[test]
    fn repeating_rearms_from_dispatch_time() {
        let mut s = Scheduler::new();
        let h = s.schedule_repeating(10 * MS, 1u8);

        // Late by 25ms: one event, not a burst of catch-up ticks.
        s.advance_to(35 * MS);
        assert_eq!(s.next_due(), Some((h, 1)));
        assert_eq!(s.next_due(), None);

        s.advance_to(45 * MS);
        assert_eq!(s.next_due(), Some((h, 1)));
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut s = Scheduler::new();
        let h = s.schedule_repeating(MS, ());
        assert!(s.cancel(h));
        assert!(!s.cancel(h));
        s.advance_to(100 * MS);
        assert_eq!(s.next_due(), None);
    }

    #[test]
    fn due_events_come_out_in_deadline_order() {
        let mut s = Scheduler::new();
        s.schedule_once(30 * MS, 'c');
        s.schedule_once(10 * MS, 'a');
        s.schedule_once(20 * MS, 'b');
        s.advance_to(50 * MS);

        let order: Vec<char> = std::iter::from_fn(|| s.next_due().map(|(_, e)| e)).collect();
        assert_eq!(order, ['a', 'b', 'c']);
    }

    #[test]
    fn clock_is_monotonic() {
        let mut s: Scheduler<()> = Scheduler::new();
        s.advance_to(20 * MS);
        s.advance_to(5 * MS);
        assert_eq!(s.now(), 20 * MS);
    }
}
