//! Wall-clock window resolution for daily and weekly rollups.
//!
//! # Responsibility
//! - Turn "now" into the closed time windows aggregation filters on.
//!
//! # Invariants
//! - Windows are closed intervals; both bounds are inclusive.
//! - Resolution is a pure function of `now` with no persisted state, so
//!   callers must re-resolve on every aggregation and never cache a window
//!   across a day boundary.

use chrono::{Days, NaiveDateTime, NaiveTime};

/// A closed time interval used to select entries by timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeWindow {
    /// The window from local midnight up to `now`.
    pub fn today(now: NaiveDateTime) -> Self {
        Self {
            start: start_of_day(now),
            end: now,
        }
    }

    /// The trailing seven-day window ending at `now`.
    ///
    /// The start bound is the local midnight six days back; the end bound is
    /// `now` itself, not a day boundary.
    pub fn trailing_week(now: NaiveDateTime) -> Self {
        Self {
            start: start_of_day(now) - Days::new(6),
            end: now,
        }
    }

    /// Closed-interval inclusion test.
    pub fn contains(&self, time: NaiveDateTime) -> bool {
        self.start <= time && time <= self.end
    }
}

fn start_of_day(now: NaiveDateTime) -> NaiveDateTime {
    NaiveDateTime::new(now.date(), NaiveTime::MIN)
}
