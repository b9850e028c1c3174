//! Aggregation and derived health metrics.
//!
//! # Responsibility
//! - Reduce entry collections over a time window into totals.
//! - Derive display metrics (distance, calories, intensity, sleep stages)
//!   and goal-completion ratios from those totals.
//!
//! # Invariants
//! - Aggregation is O(n) over the entry collection; no sorting, no caching.
//! - All derived values are recomputed from raw entries plus `now`;
//!   correctness depends on recomputation, not invalidation.
//! - Zero totals never divide; the intensity share short-circuits to 0.

use crate::config::{
    AWAKE_SHARE, BRISK_STEP_BASELINE, DEEP_SLEEP_SHARE, KCAL_PER_THOUSAND_STEPS, KM_PER_STEP,
    LIGHT_SLEEP_SHARE, MORNING_WINDOW_END_HOUR, MORNING_WINDOW_START_HOUR,
};
use crate::model::entry::MeasurementEntry;
use crate::window::TimeWindow;
use chrono::{NaiveTime, Timelike};

/// Sums the amounts of all entries whose timestamp lies in `window`.
///
/// Works for both steps and milliliters; the caller picks the collection.
pub fn sum_amount(entries: &[MeasurementEntry], window: TimeWindow) -> u32 {
    entries
        .iter()
        .filter(|entry| window.contains(entry.time))
        .map(|entry| entry.amount)
        .sum()
}

/// Whether any entry in `window` falls inside the morning hydration check
/// hours (06:00-12:00 local, inclusive).
pub fn has_morning_entry(entries: &[MeasurementEntry], window: TimeWindow) -> bool {
    entries
        .iter()
        .filter(|entry| window.contains(entry.time))
        .any(|entry| in_morning_hours(entry.time.time()))
}

fn in_morning_hours(time: NaiveTime) -> bool {
    let after_start = time.hour() >= MORNING_WINDOW_START_HOUR;
    let before_end = time.hour() < MORNING_WINDOW_END_HOUR
        || (time.hour() == MORNING_WINDOW_END_HOUR && time.minute() == 0 && time.second() == 0);
    after_start && before_end
}

/// Display metrics derived from a daily step total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepMetrics {
    /// Raw step total for the window.
    pub total_steps: u32,
    /// Estimated distance walked, in kilometers.
    pub distance_km: f64,
    /// Estimated energy burned, in kilocalories.
    pub calories_kcal: u32,
    /// Share of steps beyond the brisk baseline, rounded percent in 0-100.
    pub intensity_percent: u8,
}

/// Derives distance, calories and intensity from a step total.
pub fn derive_step_metrics(total_steps: u32) -> StepMetrics {
    StepMetrics {
        total_steps,
        distance_km: f64::from(total_steps) * KM_PER_STEP,
        // floor(total / 1000 * 40) without leaving integer arithmetic
        calories_kcal: total_steps / 1_000 * KCAL_PER_THOUSAND_STEPS
            + total_steps % 1_000 * KCAL_PER_THOUSAND_STEPS / 1_000,
        intensity_percent: intensity_percent(total_steps),
    }
}

fn intensity_percent(total_steps: u32) -> u8 {
    if total_steps == 0 {
        return 0;
    }
    let brisk = total_steps.saturating_sub(BRISK_STEP_BASELINE);
    let share = f64::from(brisk) / f64::from(total_steps) * 100.0;
    share.round().clamp(0.0, 100.0) as u8
}

/// Hours attributed to each sleep stage.
///
/// These are independent derived fields; they are not renormalized to sum to
/// the input duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SleepStages {
    pub deep_hours: f64,
    pub light_hours: f64,
    pub awake_hours: f64,
}

/// Splits a sleep duration into fixed-share stages.
pub fn split_sleep_stages(duration_hours: f64) -> SleepStages {
    SleepStages {
        deep_hours: duration_hours * DEEP_SLEEP_SHARE,
        light_hours: duration_hours * LIGHT_SLEEP_SHARE,
        awake_hours: duration_hours * AWAKE_SHARE,
    }
}

/// Weekly sleep estimate: today's duration extrapolated across seven days.
///
/// The engine keeps no per-day sleep history, so the weekly figure is an
/// extrapolation of the single stored interval. This is specified behavior.
pub fn estimate_weekly_sleep(today_duration_hours: f64) -> f64 {
    round_to_places(today_duration_hours * 7.0, 1)
}

/// Goal-completion ratio, clamped to `[0, 1]`.
///
/// Defined for `goal > 0`; goal constants are fixed positive values.
pub fn goal_ratio(value: f64, goal: f64) -> f64 {
    (value / goal).min(1.0)
}

/// Formats a ratio as a whole display percent.
pub fn display_percent(ratio: f64) -> u8 {
    (ratio * 100.0).round() as u8
}

/// Rounds half away from zero to a fixed number of decimal places.
pub fn round_to_places(value: f64, places: u32) -> f64 {
    let factor = 10_f64.powi(places as i32);
    (value * factor).round() / factor
}
