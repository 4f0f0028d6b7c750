//! Poll Scheduler
//!
//! Fixed-interval scheduling for the notification poll in the
//! single-threaded, event-driven model: the UI loop asks `should_poll` each
//! frame and records completed polls. The first poll after `start` fires
//! immediately.

use std::time::{Duration, Instant};

/// Fixed-interval poll scheduler
#[derive(Debug)]
pub struct PollScheduler {
    interval: Duration,
    last_poll: Option<Instant>,
    is_active: bool,
}

impl PollScheduler {
    /// Create a scheduler with the given interval
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_poll: None,
            is_active: false,
        }
    }

    /// Start the scheduler
    pub fn start(&mut self) {
        self.is_active = true;
    }

    /// Stop the scheduler (view unmount / logout)
    pub fn stop(&mut self) {
        self.is_active = false;
        self.last_poll = None;
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Check if a poll should be performed now
    pub fn should_poll(&self, now: Instant) -> bool {
        if !self.is_active {
            return false;
        }
        match self.last_poll {
            Some(time) => now.duration_since(time) >= self.interval,
            None => true, // First poll
        }
    }

    /// Record a completed poll
    pub fn record_poll(&mut self, now: Instant) {
        self.last_poll = Some(now);
    }

    /// Get time until the next poll is due
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        if !self.is_active {
            return None;
        }
        let last = self.last_poll?;
        let elapsed = now.duration_since(last);
        if elapsed >= self.interval {
            Some(Duration::ZERO)
        } else {
            Some(self.interval - elapsed)
        }
    }
}
