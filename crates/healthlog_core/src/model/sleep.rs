//! Sleep interval model and overnight correction.
//!
//! # Responsibility
//! - Hold the single user-set sleep start/end pair.
//! - Compute effective duration with overnight wraparound handling.
//!
//! # Invariants
//! - Duration is `end - start`, with `end` advanced by one day when the raw
//!   difference is negative (falling asleep before midnight, waking after).
//! - Duration never goes below zero.
//! - `start == end` means zero sleep, not a full day.

use chrono::NaiveDateTime;

/// Persisted representation of the sleep start/end keys.
pub const SLEEP_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;
const SECONDS_PER_HOUR: f64 = 3_600.0;

/// The user's current sleep interval.
///
/// Only one interval exists at a time; changing start or end overwrites the
/// previous value rather than appending history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SleepInterval {
    /// When the user went to bed.
    pub start: NaiveDateTime,
    /// When the user woke up.
    pub end: NaiveDateTime,
}

impl SleepInterval {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Effective sleep duration in hours.
    ///
    /// # Contract
    /// - A negative raw difference gets 24 hours added before converting,
    ///   so `23:00 -> 07:00` yields 8.0 hours.
    /// - The result is floored at zero.
    pub fn duration_hours(&self) -> f64 {
        let mut seconds = (self.end - self.start).num_seconds();
        if seconds < 0 {
            seconds += SECONDS_PER_DAY;
        }
        (seconds as f64 / SECONDS_PER_HOUR).max(0.0)
    }
}

/// Parses a persisted sleep time string.
///
/// Returns `None` for malformed input; callers degrade to a zero duration
/// instead of failing.
pub fn parse_sleep_time(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), SLEEP_TIME_FORMAT).ok()
}

/// Formats a sleep time for persistence.
pub fn format_sleep_time(time: NaiveDateTime) -> String {
    time.format(SLEEP_TIME_FORMAT).to_string()
}
