//! Process-wide goal and rule constants.
//!
//! # Responsibility
//! - Keep every fixed target and threshold in one place, so screens and
//!   services never re-declare their own copies.
//!
//! # Invariants
//! - Goal values are strictly positive.
//! - These are configuration, not derived state; nothing here is persisted.

/// Daily step target.
pub const STEP_GOAL: u32 = 8_000;

/// Daily water intake target in milliliters.
pub const WATER_GOAL_ML: u32 = 2_000;

/// Nightly sleep target in hours.
pub const SLEEP_GOAL_HOURS: f64 = 8.0;

/// Sleep at or above this many hours is labeled adequate in summaries.
pub const ADEQUATE_SLEEP_HOURS: f64 = 7.0;

/// Below this daily total the water advice switches to the low-intake band.
pub const LOW_WATER_THRESHOLD_ML: u32 = 1_000;

/// Below this daily total the step advice switches to the low-activity band.
pub const LOW_STEP_THRESHOLD: u32 = 4_000;

/// Steps beyond this baseline count toward the brisk-intensity share.
pub const BRISK_STEP_BASELINE: u32 = 6_000;

/// Kilometers walked per step.
pub const KM_PER_STEP: f64 = 0.000_75;

/// Kilocalories burned per thousand steps.
pub const KCAL_PER_THOUSAND_STEPS: u32 = 40;

/// Fraction of a sleep interval attributed to deep sleep.
pub const DEEP_SLEEP_SHARE: f64 = 0.4;
/// Fraction of a sleep interval attributed to light sleep.
pub const LIGHT_SLEEP_SHARE: f64 = 0.5;
/// Fraction of a sleep interval attributed to awake time.
pub const AWAKE_SHARE: f64 = 0.1;

/// Weekly step total considered on track (seven daily goals).
pub const WEEKLY_STEP_TARGET: u32 = 7 * STEP_GOAL;

/// Average daily water considered on track over a week, in milliliters.
pub const WEEKLY_WATER_DAILY_AVG_ML: u32 = 1_800;

/// Average daily sleep considered on track over a week, in hours.
pub const WEEKLY_SLEEP_DAILY_AVG_HOURS: f64 = 7.0;

/// Start of the morning hydration check window, as a local hour (inclusive).
pub const MORNING_WINDOW_START_HOUR: u32 = 6;

/// End of the morning hydration check window, as a local hour (inclusive).
pub const MORNING_WINDOW_END_HOUR: u32 = 12;
