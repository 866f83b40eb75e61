//! Countdown display formatting

/// Shown while no interval is in progress (initial state and after reset).
pub const IDLE_CLOCK: &str = "00:00";

/// Format a countdown as `M:SS`, minutes unpadded, seconds zero-padded.
pub fn clock(total_secs: u32) -> String {
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}
