//! Rule-based advice selection.
//!
//! # Responsibility
//! - Map aggregated daily state to one fixed advice string per metric.
//!
//! # Invariants
//! - Bands are evaluated top to bottom; the first match wins. The order of
//!   the checks is a semantic contract, not an implementation detail.
//! - Selection is pure: same aggregate in, same band out.

use crate::config::{
    ADEQUATE_SLEEP_HOURS, LOW_STEP_THRESHOLD, LOW_WATER_THRESHOLD_ML, STEP_GOAL, WATER_GOAL_ML,
    WEEKLY_SLEEP_DAILY_AVG_HOURS, WEEKLY_STEP_TARGET, WEEKLY_WATER_DAILY_AVG_ML,
};

/// Metric an advice request is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdviceMetric {
    Steps,
    Water,
    Sleep,
}

impl AdviceMetric {
    /// Parses the label used by the presentation layer.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "steps" | "step" => Some(Self::Steps),
            "water" => Some(Self::Water),
            "sleep" => Some(Self::Sleep),
            _ => None,
        }
    }
}

/// Ordered advice bands for daily water intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaterBand {
    NothingLogged,
    LowIntake,
    NoMorningHydration,
    GoalMet,
    SteadyPace,
}

/// Selects the water advice band for a daily total.
///
/// `has_morning_entry` reports whether any of today's entries fell in the
/// 06:00-12:00 window; it only matters once the total clears the low-intake
/// threshold.
pub fn select_water_band(total_ml: u32, has_morning_entry: bool) -> WaterBand {
    if total_ml == 0 {
        WaterBand::NothingLogged
    } else if total_ml < LOW_WATER_THRESHOLD_ML {
        WaterBand::LowIntake
    } else if !has_morning_entry {
        WaterBand::NoMorningHydration
    } else if total_ml >= WATER_GOAL_ML {
        WaterBand::GoalMet
    } else {
        WaterBand::SteadyPace
    }
}

/// Advice text for a water band.
pub fn water_advice_text(band: WaterBand, total_ml: u32) -> String {
    match band {
        WaterBand::NothingLogged => {
            "No water logged yet today. Have a glass soon to keep your metabolism and focus up."
                .to_string()
        }
        WaterBand::LowIntake => format!(
            "Water intake is on the low side today ({total_ml} ml so far). \
             Adults should aim for about {WATER_GOAL_ML} ml per day."
        ),
        WaterBand::NoMorningHydration => {
            "No water logged this morning. Drinking soon after waking helps start your metabolism."
                .to_string()
        }
        WaterBand::GoalMet => format!(
            "Hydration goal reached ({total_ml} ml). Keep the habit going!"
        ),
        WaterBand::SteadyPace => format!(
            "Good hydration rhythm ({total_ml} ml so far). Try to keep up about 200 ml every hour."
        ),
    }
}

/// Ordered advice bands for daily steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepBand {
    NothingLogged,
    LowActivity,
    GoalMet,
    SteadyProgress,
}

/// Selects the step advice band for a daily total.
pub fn select_step_band(total_steps: u32) -> StepBand {
    if total_steps == 0 {
        StepBand::NothingLogged
    } else if total_steps < LOW_STEP_THRESHOLD {
        StepBand::LowActivity
    } else if total_steps >= STEP_GOAL {
        StepBand::GoalMet
    } else {
        StepBand::SteadyProgress
    }
}

/// Advice text for a step band.
pub fn step_advice_text(band: StepBand, total_steps: u32) -> String {
    match band {
        StepBand::NothingLogged => {
            "No steps logged yet today. A short walk is a good way to get moving.".to_string()
        }
        StepBand::LowActivity => format!(
            "Activity is low today ({total_steps} steps). Standing up for a walk or a quick \
             stretch helps raise your metabolic rate."
        ),
        StepBand::GoalMet => format!(
            "Step goal reached ({total_steps} steps). Great work staying active!"
        ),
        StepBand::SteadyProgress => format!(
            "Steady progress ({total_steps} steps). Keep it up to reach {STEP_GOAL} today."
        ),
    }
}

/// Binary sleep quality label shown in the daily summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SleepQuality {
    Adequate,
    Insufficient,
}

/// Assesses last night's duration against the adequate-sleep threshold.
pub fn assess_sleep(duration_hours: f64) -> SleepQuality {
    if duration_hours >= ADEQUATE_SLEEP_HOURS {
        SleepQuality::Adequate
    } else {
        SleepQuality::Insufficient
    }
}

/// Advice text for the sleep label.
pub fn sleep_advice_text(quality: SleepQuality) -> String {
    match quality {
        SleepQuality::Adequate => "Sleep looks good. A steady schedule keeps it that way.".to_string(),
        SleepQuality::Insufficient => {
            "Watch your sleep time. A fixed bedtime and avoiding late nights raise the share of \
             deep sleep."
                .to_string()
        }
    }
}

/// Weekly on-track labels for the report view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklyAssessment {
    pub steps_on_track: bool,
    pub water_on_track: bool,
    pub sleep_on_track: bool,
}

/// Assesses weekly totals against the report thresholds.
pub fn assess_week(
    total_steps: u32,
    average_daily_water_ml: u32,
    average_daily_sleep_hours: f64,
) -> WeeklyAssessment {
    WeeklyAssessment {
        steps_on_track: total_steps >= WEEKLY_STEP_TARGET,
        water_on_track: average_daily_water_ml >= WEEKLY_WATER_DAILY_AVG_ML,
        sleep_on_track: average_daily_sleep_hours >= WEEKLY_SLEEP_DAILY_AVG_HOURS,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        assess_sleep, assess_week, select_step_band, select_water_band, water_advice_text,
        AdviceMetric, SleepQuality, StepBand, WaterBand,
    };

    #[test]
    fn water_bands_match_in_declared_order() {
        assert_eq!(select_water_band(0, false), WaterBand::NothingLogged);
        assert_eq!(select_water_band(500, true), WaterBand::LowIntake);
        assert_eq!(select_water_band(1_500, false), WaterBand::NoMorningHydration);
        assert_eq!(select_water_band(2_000, true), WaterBand::GoalMet);
        assert_eq!(select_water_band(1_500, true), WaterBand::SteadyPace);
    }

    #[test]
    fn morning_entry_lets_goal_met_band_win() {
        // 2500 ml with a 07:00 entry: the morning band is skipped, so the
        // goal-met band is the first match.
        assert_eq!(select_water_band(2_500, true), WaterBand::GoalMet);
        // Without the morning entry the earlier band still wins.
        assert_eq!(select_water_band(2_500, false), WaterBand::NoMorningHydration);
    }

    #[test]
    fn low_intake_outranks_missing_morning_entry() {
        assert_eq!(select_water_band(500, false), WaterBand::LowIntake);
    }

    #[test]
    fn water_text_interpolates_the_total() {
        let text = water_advice_text(WaterBand::LowIntake, 600);
        assert!(text.contains("600 ml"));
    }

    #[test]
    fn step_bands_match_in_declared_order() {
        assert_eq!(select_step_band(0), StepBand::NothingLogged);
        assert_eq!(select_step_band(3_999), StepBand::LowActivity);
        assert_eq!(select_step_band(8_000), StepBand::GoalMet);
        assert_eq!(select_step_band(8_200), StepBand::GoalMet);
        assert_eq!(select_step_band(6_842), StepBand::SteadyProgress);
    }

    #[test]
    fn sleep_label_threshold_is_seven_hours() {
        assert_eq!(assess_sleep(7.0), SleepQuality::Adequate);
        assert_eq!(assess_sleep(6.9), SleepQuality::Insufficient);
        assert_eq!(assess_sleep(0.0), SleepQuality::Insufficient);
    }

    #[test]
    fn weekly_assessment_uses_report_thresholds() {
        let week = assess_week(56_000, 1_800, 7.0);
        assert!(week.steps_on_track && week.water_on_track && week.sleep_on_track);

        let short = assess_week(55_999, 1_799, 6.9);
        assert!(!short.steps_on_track && !short.water_on_track && !short.sleep_on_track);
    }

    #[test]
    fn metric_labels_parse_case_insensitively() {
        assert_eq!(AdviceMetric::parse("Water"), Some(AdviceMetric::Water));
        assert_eq!(AdviceMetric::parse(" steps "), Some(AdviceMetric::Steps));
        assert_eq!(AdviceMetric::parse("sleep"), Some(AdviceMetric::Sleep));
        assert_eq!(AdviceMetric::parse("mood"), None);
    }
}
