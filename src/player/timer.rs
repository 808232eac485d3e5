//! Cancellable one-shot timers driving playback
//!
//! The player never sleeps or spawns anything. It asks a [`Timer`] for a
//! firing after some delay and is handed the matching [`TimerToken`] back
//! by its host when that firing is due. Only one firing is ever pending.

use std::time::{Duration, Instant};

/// Identifies one scheduled firing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// A scheduling primitive: fire once after a delay, cancellable before it fires
pub trait Timer {
    /// Schedule a firing `delay` from now, replacing any pending one
    fn schedule(&mut self, delay: Duration) -> TimerToken;

    /// Drop the firing identified by `token` if it is still pending
    fn cancel(&mut self, token: TimerToken);
}

/// Wall-clock timer for an event loop that polls with a timeout
#[derive(Debug, Default)]
pub struct DeadlineTimer {
    next_id: u64,
    pending: Option<(TimerToken, Instant)>,
}

impl DeadlineTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time left until the pending firing is due
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|(_, deadline)| deadline.saturating_duration_since(now))
    }

    /// Take the pending firing if its deadline has passed
    pub fn poll(&mut self, now: Instant) -> Option<TimerToken> {
        match self.pending {
            Some((token, deadline)) if deadline <= now => {
                self.pending = None;
                Some(token)
            }
            _ => None,
        }
    }
}

impl Timer for DeadlineTimer {
    fn schedule(&mut self, delay: Duration) -> TimerToken {
        self.next_id += 1;
        let token = TimerToken(self.next_id);
        self.pending = Some((token, Instant::now() + delay));
        token
    }

    fn cancel(&mut self, token: TimerToken) {
        if self.pending.is_some_and(|(pending, _)| pending == token) {
            self.pending = None;
        }
    }
}

/// Timer fired explicitly by its owner, for headless runs and tests
#[derive(Debug, Default)]
pub struct ManualTimer {
    next_id: u64,
    pending: Option<(TimerToken, Duration)>,
    scheduled: Vec<Duration>,
    cancelled: usize,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the pending firing regardless of its delay
    pub fn fire(&mut self) -> Option<TimerToken> {
        self.pending.take().map(|(token, _)| token)
    }

    /// Delay of the pending firing
    pub fn pending_delay(&self) -> Option<Duration> {
        self.pending.map(|(_, delay)| delay)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Every delay ever scheduled, oldest first
    pub fn scheduled(&self) -> &[Duration] {
        &self.scheduled
    }

    /// How many pending firings were cancelled
    pub fn cancelled(&self) -> usize {
        self.cancelled
    }
}

impl Timer for ManualTimer {
    fn schedule(&mut self, delay: Duration) -> TimerToken {
        self.next_id += 1;
        let token = TimerToken(self.next_id);
        self.pending = Some((token, delay));
        self.scheduled.push(delay);
        token
    }

    fn cancel(&mut self, token: TimerToken) {
        if self.pending.is_some_and(|(pending, _)| pending == token) {
            self.pending = None;
            self.cancelled += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deadline_timer_fires_once_after_deadline() {
        let mut timer = DeadlineTimer::new();
        let token = timer.schedule(Duration::from_millis(0));
        let later = Instant::now() + Duration::from_millis(1);

        assert_eq!(timer.poll(later), Some(token));
        assert_eq!(timer.poll(later), None);
    }

    #[test]
    fn test_deadline_timer_not_due_yet() {
        let mut timer = DeadlineTimer::new();
        timer.schedule(Duration::from_secs(60));
        let now = Instant::now();

        assert_eq!(timer.poll(now), None);
        assert!(timer.time_until_due(now).unwrap() > Duration::from_secs(59));
    }

    #[test]
    fn test_cancel_ignores_stale_tokens() {
        let mut timer = ManualTimer::new();
        let first = timer.schedule(Duration::from_millis(10));
        let second = timer.schedule(Duration::from_millis(20));

        timer.cancel(first);
        assert!(timer.is_pending());
        assert_eq!(timer.cancelled(), 0);

        timer.cancel(second);
        assert!(!timer.is_pending());
        assert_eq!(timer.cancelled(), 1);
        assert_eq!(timer.fire(), None);
    }
}
