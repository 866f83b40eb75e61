//! The one-second tick source
//!
//! Replaces scheduled-callback recursion with an explicit value the event
//! loop polls: arm it when a countdown starts, poll it every pass, cancel
//! it on reset. At most one fire is ever pending.

use std::time::{Duration, Instant};

/// Countdown resolution: one tick per second.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// A cancellable recurring timer.
///
/// While armed it holds a single pending deadline. `poll` reports at most
/// one fire per call and measures the next period from the moment the
/// fire was observed, so a stalled caller stretches the countdown rather
/// than replaying missed ticks.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    deadline: Option<Instant>,
}

impl Ticker {
    /// Create an idle ticker with the given period.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            deadline: None,
        }
    }

    /// Schedule the next fire one period after `now`. Re-arming replaces
    /// any pending deadline.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.period);
    }

    /// Drop the pending deadline. Cancelling a ticker that is already
    /// idle is a no-op.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time until the pending fire (zero if overdue), `None` when idle.
    pub fn time_remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }

    /// True when the deadline has been reached. The ticker re-arms itself
    /// for one period from `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = Some(now + self.period);
                true
            }
            _ => false,
        }
    }
}
