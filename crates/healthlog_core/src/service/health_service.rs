//! Health metrics use-case service.
//!
//! # Responsibility
//! - Provide the record/summarize/advise entry points for core callers.
//! - Recompute every aggregate from raw entries plus the caller's `now`.
//!
//! # Invariants
//! - No aggregate is cached; every call re-resolves its time window, so
//!   results stay correct across day boundaries without invalidation.
//! - Summary calls never fail: persisted-data problems degrade to zero
//!   totals per the repository tolerance policy.

use crate::advice::{
    assess_sleep, assess_week, select_step_band, select_water_band, sleep_advice_text,
    step_advice_text, water_advice_text, AdviceMetric, SleepQuality, WeeklyAssessment,
};
use crate::config::{SLEEP_GOAL_HOURS, STEP_GOAL, WATER_GOAL_ML};
use crate::metrics::{
    derive_step_metrics, display_percent, estimate_weekly_sleep, goal_ratio, has_morning_entry,
    round_to_places, split_sleep_stages, sum_amount, SleepStages, StepMetrics,
};
use crate::model::entry::{EntryId, MeasurementEntry, MeasurementKind};
use crate::repo::entry_repo::EntryRepository;
use crate::repo::sleep_repo::SleepRepository;
use crate::repo::RepoResult;
use crate::storage::KeyValueStore;
use crate::window::TimeWindow;
use chrono::NaiveDateTime;
use log::info;

/// Today's recomputed aggregate, one value object per dashboard visit.
#[derive(Debug, Clone, PartialEq)]
pub struct TodaySummary {
    /// Step total plus derived distance/calories/intensity.
    pub steps: StepMetrics,
    /// Step goal completion as a whole display percent.
    pub step_goal_percent: u8,
    /// Steps still missing to the goal, floored at zero.
    pub remaining_steps: u32,
    /// Water total for today, in milliliters.
    pub water_ml: u32,
    /// Water goal completion as a whole display percent.
    pub water_goal_percent: u8,
    /// Milliliters still missing to the goal, floored at zero.
    pub remaining_water_ml: u32,
    /// Last night's duration in hours, rounded to one decimal place.
    pub sleep_hours: f64,
    /// Sleep goal completion as a whole display percent.
    pub sleep_goal_percent: u8,
    /// Fixed-share sleep stage split.
    pub sleep_stages: SleepStages,
    /// Binary quality label for the summary card.
    pub sleep_quality: SleepQuality,
}

/// Trailing-week rollup.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklySummary {
    pub total_steps: u32,
    pub total_water_ml: u32,
    /// Weekly water divided over seven days.
    pub average_daily_water_ml: u32,
    /// Today's sleep duration extrapolated across the week.
    pub estimated_sleep_hours: f64,
    /// The single stored night, rounded to one decimal place.
    pub average_daily_sleep_hours: f64,
    /// On-track labels for the report sections.
    pub assessment: WeeklyAssessment,
}

/// Use-case facade over the injected storage port.
pub struct HealthService<'s, S: KeyValueStore> {
    entries: EntryRepository<'s, S>,
    sleep: SleepRepository<'s, S>,
}

impl<'s, S: KeyValueStore> HealthService<'s, S> {
    /// Creates a service borrowing the provided store.
    pub fn new(store: &'s S) -> Self {
        Self {
            entries: EntryRepository::new(store),
            sleep: SleepRepository::new(store),
        }
    }

    /// Records a step sample and persists the updated log.
    ///
    /// # Errors
    /// - `Validation` for a zero amount (the boundary treats this as a
    ///   silent no-op).
    /// - `Store` when the write fails.
    pub fn record_step(&self, steps: u32, time: NaiveDateTime) -> RepoResult<EntryId> {
        let id = self
            .entries
            .append(MeasurementEntry::new(MeasurementKind::Step, time, steps))?;
        info!("event=entry_append module=service status=ok kind=step");
        Ok(id)
    }

    /// Records a water sample and persists the updated log.
    pub fn record_water(&self, amount_ml: u32, time: NaiveDateTime) -> RepoResult<EntryId> {
        let id = self
            .entries
            .append(MeasurementEntry::new(MeasurementKind::Water, time, amount_ml))?;
        info!("event=entry_append module=service status=ok kind=water");
        Ok(id)
    }

    /// Overwrites the sleep start time.
    pub fn set_sleep_start(&self, time: NaiveDateTime) -> RepoResult<()> {
        self.sleep.set_start(time)
    }

    /// Overwrites the sleep end time.
    pub fn set_sleep_end(&self, time: NaiveDateTime) -> RepoResult<()> {
        self.sleep.set_end(time)
    }

    /// Recomputes the full daily aggregate for the dashboard.
    pub fn today_summary(&self, now: NaiveDateTime) -> TodaySummary {
        let window = TimeWindow::today(now);

        let steps = derive_step_metrics(self.total(MeasurementKind::Step, window));
        let water_ml = self.total(MeasurementKind::Water, window);
        let sleep_duration = self.sleep_duration_hours();

        TodaySummary {
            step_goal_percent: display_percent(goal_ratio(
                f64::from(steps.total_steps),
                f64::from(STEP_GOAL),
            )),
            remaining_steps: STEP_GOAL.saturating_sub(steps.total_steps),
            steps,
            water_ml,
            water_goal_percent: display_percent(goal_ratio(
                f64::from(water_ml),
                f64::from(WATER_GOAL_ML),
            )),
            remaining_water_ml: WATER_GOAL_ML.saturating_sub(water_ml),
            sleep_hours: round_to_places(sleep_duration, 1),
            sleep_goal_percent: display_percent(goal_ratio(sleep_duration, SLEEP_GOAL_HOURS)),
            sleep_stages: split_sleep_stages(sleep_duration),
            sleep_quality: assess_sleep(sleep_duration),
        }
    }

    /// Recomputes the trailing-week rollup.
    pub fn weekly_summary(&self, now: NaiveDateTime) -> WeeklySummary {
        let window = TimeWindow::trailing_week(now);

        let total_steps = self.total(MeasurementKind::Step, window);
        let total_water_ml = self.total(MeasurementKind::Water, window);
        let average_daily_water_ml = total_water_ml / 7;

        let sleep_duration = self.sleep_duration_hours();
        let average_daily_sleep_hours = round_to_places(sleep_duration, 1);

        WeeklySummary {
            total_steps,
            total_water_ml,
            average_daily_water_ml,
            estimated_sleep_hours: estimate_weekly_sleep(sleep_duration),
            average_daily_sleep_hours,
            assessment: assess_week(total_steps, average_daily_water_ml, average_daily_sleep_hours),
        }
    }

    /// Selects the advice text for one metric.
    pub fn advice(&self, metric: AdviceMetric, now: NaiveDateTime) -> String {
        let window = TimeWindow::today(now);
        match metric {
            AdviceMetric::Steps => {
                let total = self.total(MeasurementKind::Step, window);
                step_advice_text(select_step_band(total), total)
            }
            AdviceMetric::Water => {
                let entries = self.entries.load(MeasurementKind::Water);
                let total = sum_amount(&entries, window);
                let morning = has_morning_entry(&entries, window);
                water_advice_text(select_water_band(total, morning), total)
            }
            AdviceMetric::Sleep => sleep_advice_text(assess_sleep(self.sleep_duration_hours())),
        }
    }

    fn total(&self, kind: MeasurementKind, window: TimeWindow) -> u32 {
        sum_amount(&self.entries.load(kind), window)
    }

    fn sleep_duration_hours(&self) -> f64 {
        self.sleep
            .load()
            .map_or(0.0, |interval| interval.duration_hours())
    }
}
