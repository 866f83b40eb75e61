//! Application state and event handling

use std::time::Instant;

use tomato_core::Scheduler;
use tracing::{debug, info};

/// The running application: one scheduler plus the wiring that turns key
/// presses and elapsed time into scheduler operations.
pub struct App {
    pub scheduler: Scheduler,
}

impl App {
    pub fn new() -> Self {
        Self {
            scheduler: Scheduler::new(),
        }
    }

    /// Start control: begin the next interval. Ignored while a countdown
    /// is already running.
    pub fn start(&mut self, now: Instant) {
        if self.scheduler.start(now) {
            info!(
                "rep {} started: {} {}",
                self.scheduler.reps(),
                self.scheduler.label(),
                self.scheduler.clock()
            );
        } else {
            debug!("start ignored: countdown already running");
        }
    }

    /// Reset control: cancel the countdown and clear all progress.
    pub fn reset(&mut self) {
        self.scheduler.reset();
        info!("timer reset");
    }

    /// Drive the countdown; called once per event-loop pass.
    pub fn on_tick(&mut self, now: Instant) {
        if let Some(next) = self.scheduler.poll(now) {
            info!(
                "countdown elapsed, rep {} started: {} ({} work sessions done)",
                self.scheduler.reps(),
                next.as_str(),
                self.scheduler.completed_sessions()
            );
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
