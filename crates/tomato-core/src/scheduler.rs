//! The interval scheduler
//!
//! Tracks the repetition counter, maps it to an interval kind, and runs a
//! one-second countdown that advances itself to the next interval when it
//! reaches zero.

use std::time::{Duration, Instant};

use crate::format::{self, IDLE_CLOCK};
use crate::interval::Interval;
use crate::timer::{Ticker, TICK_PERIOD};

/// Title shown while no interval is in progress.
const IDLE_LABEL: &str = "Timer";

/// Rendered once per completed work session.
const CHECK_MARK: &str = "✅";

/// Where the scheduler is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No interval in progress; the displays show their neutral state.
    Idle,
    /// An interval in progress with `remaining_secs` left on the clock.
    /// A stored zero is unrepresentable: the tick that would reach zero
    /// begins the next interval instead.
    Counting {
        interval: Interval,
        remaining_secs: u32,
    },
}

/// The interval scheduler: repetition counter, active countdown, and the
/// pending one-second tick.
///
/// `start` while a countdown is running is ignored. Only the auto-advance
/// path (the countdown reaching zero) begins a new interval while one is
/// active, so at most one pending tick ever exists.
#[derive(Debug, Clone)]
pub struct Scheduler {
    reps: u32,
    phase: Phase,
    ticker: Ticker,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            reps: 0,
            phase: Phase::Idle,
            ticker: Ticker::new(TICK_PERIOD),
        }
    }

    /// Repetitions started so far; work and break intervals both count.
    pub fn reps(&self) -> u32 {
        self.reps
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_counting(&self) -> bool {
        matches!(self.phase, Phase::Counting { .. })
    }

    /// Begin the next interval and its countdown.
    ///
    /// Returns true when an interval was started. Ignored while a
    /// countdown is already running: returns false and changes nothing.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.is_counting() {
            return false;
        }
        self.ticker.arm(now);
        self.begin_next();
        true
    }

    /// Advance the countdown by one second.
    ///
    /// The tick that would reach zero does not display zero: it begins
    /// the next interval immediately and returns the kind it advanced
    /// into. At idle this is a no-op, which also covers a tick whose
    /// cancellation raced its firing.
    pub fn tick(&mut self) -> Option<Interval> {
        match self.phase {
            Phase::Idle => None,
            Phase::Counting {
                interval,
                remaining_secs,
            } => {
                // remaining_secs >= 1 while counting
                let next = remaining_secs - 1;
                if next > 0 {
                    self.phase = Phase::Counting {
                        interval,
                        remaining_secs: next,
                    };
                    None
                } else {
                    Some(self.begin_next())
                }
            }
        }
    }

    /// Drive the countdown from the event loop: runs one `tick` when the
    /// pending one-second deadline has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<Interval> {
        if self.ticker.poll(now) {
            self.tick()
        } else {
            None
        }
    }

    /// Time until the pending tick, `None` when idle. Lets the event
    /// loop sleep exactly as long as the countdown allows.
    pub fn until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.ticker.time_remaining(now)
    }

    /// Cancel the countdown and restore the initial state. Safe at any
    /// time: resetting at idle, or twice in a row, leaves the same state.
    pub fn reset(&mut self) {
        self.ticker.cancel();
        self.phase = Phase::Idle;
        self.reps = 0;
    }

    /// The countdown display: `"00:00"` at idle, the remaining time as
    /// `M:SS` while counting.
    pub fn clock(&self) -> String {
        match self.phase {
            Phase::Idle => IDLE_CLOCK.to_string(),
            Phase::Counting { remaining_secs, .. } => format::clock(remaining_secs),
        }
    }

    /// The title display: `"Timer"` at idle, the interval's label while
    /// counting.
    pub fn label(&self) -> &'static str {
        match self.phase {
            Phase::Idle => IDLE_LABEL,
            Phase::Counting { interval, .. } => interval.label(),
        }
    }

    /// Work sessions completed so far: `reps / 2`, since a work interval
    /// counts once its successor interval has started.
    pub fn completed_sessions(&self) -> u32 {
        self.reps / 2
    }

    /// One checkmark glyph per completed work session.
    pub fn checkmarks(&self) -> String {
        CHECK_MARK.repeat(self.completed_sessions() as usize)
    }

    /// Increment the repetition counter and start its interval at full
    /// duration. Shared by `start` and the auto-advance path.
    fn begin_next(&mut self) -> Interval {
        self.reps += 1;
        let interval = Interval::for_rep(self.reps);
        self.phase = Phase::Counting {
            interval,
            remaining_secs: interval.duration_secs(),
        };
        interval
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tick the active countdown until it advances, returning the
    /// interval it advanced into.
    fn run_out(scheduler: &mut Scheduler) -> Interval {
        for _ in 0..=Interval::Work.duration_secs() {
            if let Some(next) = scheduler.tick() {
                return next;
            }
        }
        panic!("countdown never advanced");
    }

    #[test]
    fn test_first_start_begins_work() {
        let mut scheduler = Scheduler::new();
        assert!(scheduler.start(Instant::now()));

        assert_eq!(scheduler.reps(), 1);
        assert_eq!(
            scheduler.phase(),
            Phase::Counting {
                interval: Interval::Work,
                remaining_secs: 1500
            }
        );
        assert_eq!(scheduler.clock(), "25:00");
        assert_eq!(scheduler.label(), "Work");
        assert_eq!(scheduler.checkmarks(), "");
    }

    #[test]
    fn test_countdown_ticks_down() {
        let mut scheduler = Scheduler::new();
        scheduler.start(Instant::now());

        assert_eq!(scheduler.tick(), None);
        assert_eq!(scheduler.clock(), "24:59");

        for _ in 0..59 {
            scheduler.tick();
        }
        assert_eq!(scheduler.clock(), "24:00");
    }

    #[test]
    fn test_work_runs_out_into_short_break() {
        let mut scheduler = Scheduler::new();
        scheduler.start(Instant::now());

        // 1499 ticks leave one second on the clock...
        for _ in 0..1499 {
            assert_eq!(scheduler.tick(), None);
        }
        assert_eq!(scheduler.clock(), "0:01");

        // ...and the next tick advances instead of displaying zero.
        assert_eq!(scheduler.tick(), Some(Interval::ShortBreak));
        assert_eq!(scheduler.reps(), 2);
        assert_eq!(scheduler.clock(), "5:00");
        assert_eq!(scheduler.label(), "Break");
        assert_eq!(scheduler.checkmarks(), "✅");
    }

    #[test]
    fn test_eight_interval_cycle() {
        let mut scheduler = Scheduler::new();
        scheduler.start(Instant::now());

        let mut kinds = vec![Interval::Work];
        for _ in 0..7 {
            kinds.push(run_out(&mut scheduler));
        }
        assert_eq!(
            kinds,
            vec![
                Interval::Work,
                Interval::ShortBreak,
                Interval::Work,
                Interval::ShortBreak,
                Interval::Work,
                Interval::ShortBreak,
                Interval::Work,
                Interval::LongBreak,
            ]
        );

        // The long break runs out into a fresh work interval.
        assert_eq!(run_out(&mut scheduler), Interval::Work);
        assert_eq!(scheduler.reps(), 9);
    }

    #[test]
    fn test_checkmarks_count_completed_work_sessions() {
        let mut scheduler = Scheduler::new();
        scheduler.start(Instant::now());
        assert_eq!(scheduler.completed_sessions(), 0);

        run_out(&mut scheduler); // rep 2: short break
        assert_eq!(scheduler.checkmarks(), "✅");

        run_out(&mut scheduler); // rep 3: work
        run_out(&mut scheduler); // rep 4: short break
        assert_eq!(scheduler.completed_sessions(), 2);
        assert_eq!(scheduler.checkmarks(), "✅✅");
    }

    #[test]
    fn test_start_ignored_while_counting() {
        let mut scheduler = Scheduler::new();
        let t0 = Instant::now();
        assert!(scheduler.start(t0));
        scheduler.tick();

        assert!(!scheduler.start(t0 + Duration::from_secs(5)));
        assert_eq!(scheduler.reps(), 1);
        assert_eq!(scheduler.clock(), "24:59");
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut scheduler = Scheduler::new();
        let t0 = Instant::now();
        scheduler.start(t0);
        for _ in 0..90 {
            scheduler.tick();
        }

        scheduler.reset();
        assert_eq!(scheduler.reps(), 0);
        assert_eq!(scheduler.phase(), Phase::Idle);
        assert_eq!(scheduler.clock(), "00:00");
        assert_eq!(scheduler.label(), "Timer");
        assert_eq!(scheduler.checkmarks(), "");
        assert_eq!(scheduler.until_next_tick(t0), None);
    }

    #[test]
    fn test_reset_cancels_pending_tick() {
        let mut scheduler = Scheduler::new();
        let t0 = Instant::now();
        scheduler.start(t0);
        assert!(scheduler.poll(t0 + Duration::from_secs(1)).is_none());
        assert_eq!(scheduler.clock(), "24:59");

        scheduler.reset();

        // The old deadline elapsing changes nothing once cancelled.
        assert!(scheduler.poll(t0 + Duration::from_secs(30)).is_none());
        assert_eq!(scheduler.clock(), "00:00");
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut scheduler = Scheduler::new();
        scheduler.start(Instant::now());
        scheduler.tick();

        scheduler.reset();
        let once = scheduler.clone();
        scheduler.reset();

        assert_eq!(scheduler.reps(), once.reps());
        assert_eq!(scheduler.phase(), once.phase());
        assert_eq!(scheduler.checkmarks(), once.checkmarks());
    }

    #[test]
    fn test_tick_at_idle_is_noop() {
        let mut scheduler = Scheduler::new();
        assert_eq!(scheduler.tick(), None);
        assert_eq!(scheduler.reps(), 0);
        assert_eq!(scheduler.clock(), "00:00");
    }

    #[test]
    fn test_poll_runs_ticks_at_deadlines_only() {
        let mut scheduler = Scheduler::new();
        let t0 = Instant::now();
        scheduler.start(t0);

        assert!(scheduler.poll(t0 + Duration::from_millis(500)).is_none());
        assert_eq!(scheduler.clock(), "25:00");

        scheduler.poll(t0 + Duration::from_secs(1));
        assert_eq!(scheduler.clock(), "24:59");
    }
}
