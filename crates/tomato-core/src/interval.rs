//! Interval kinds and the repetition-to-kind mapping
//!
//! The cycle alternates work and short breaks, with every eighth
//! repetition a long break: work, short, work, short, work, short,
//! work, long. Then the pattern repeats.

/// Kind of timed interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interval {
    /// 25 minutes of focused work.
    Work,
    /// 5 minute breather between work intervals.
    ShortBreak,
    /// 20 minute recovery after four work intervals.
    LongBreak,
}

impl Interval {
    /// Map a repetition number (counted from 1) to the interval it runs.
    ///
    /// Evaluated in priority order: every eighth repetition is a long
    /// break, every other even repetition a short break, the rest work.
    pub fn for_rep(rep: u32) -> Self {
        if rep % 8 == 0 {
            Interval::LongBreak
        } else if rep % 2 == 0 {
            Interval::ShortBreak
        } else {
            Interval::Work
        }
    }

    /// Fixed interval length in minutes.
    pub fn duration_mins(&self) -> u32 {
        match self {
            Interval::Work => 25,
            Interval::ShortBreak => 5,
            Interval::LongBreak => 20,
        }
    }

    /// Fixed interval length in seconds.
    pub fn duration_secs(&self) -> u32 {
        self.duration_mins() * 60
    }

    /// Display title. Both break kinds share one title; only the colour
    /// tells them apart.
    pub fn label(&self) -> &'static str {
        match self {
            Interval::Work => "Work",
            Interval::ShortBreak | Interval::LongBreak => "Break",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::Work => "work",
            Interval::ShortBreak => "short-break",
            Interval::LongBreak => "long-break",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_eight_reps() {
        let expected = [
            Interval::Work,
            Interval::ShortBreak,
            Interval::Work,
            Interval::ShortBreak,
            Interval::Work,
            Interval::ShortBreak,
            Interval::Work,
            Interval::LongBreak,
        ];
        for (i, want) in expected.iter().enumerate() {
            assert_eq!(Interval::for_rep(i as u32 + 1), *want);
        }
    }

    #[test]
    fn test_pattern_repeats_after_long_break() {
        assert_eq!(Interval::for_rep(9), Interval::Work);
        assert_eq!(Interval::for_rep(10), Interval::ShortBreak);
        assert_eq!(Interval::for_rep(16), Interval::LongBreak);
        assert_eq!(Interval::for_rep(24), Interval::LongBreak);
    }

    #[test]
    fn test_durations() {
        assert_eq!(Interval::Work.duration_mins(), 25);
        assert_eq!(Interval::ShortBreak.duration_mins(), 5);
        assert_eq!(Interval::LongBreak.duration_mins(), 20);
        assert_eq!(Interval::Work.duration_secs(), 1500);
        assert_eq!(Interval::ShortBreak.duration_secs(), 300);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Interval::Work.label(), "Work");
        assert_eq!(Interval::ShortBreak.label(), "Break");
        assert_eq!(Interval::LongBreak.label(), "Break");
    }
}
