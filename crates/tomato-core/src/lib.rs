//! tomato-core - interval scheduling for the tomato pomodoro timer
//!
//! The timer cycle and countdown live here, free of any presentation:
//! - [`Interval`]: work / short break / long break and their fixed lengths
//! - [`Scheduler`]: the repetition counter and self-advancing countdown
//! - [`Ticker`]: the cancellable one-second tick source the event loop polls

pub mod format;
pub mod interval;
pub mod scheduler;
pub mod timer;

pub use interval::Interval;
pub use scheduler::{Phase, Scheduler};
pub use timer::{Ticker, TICK_PERIOD};
