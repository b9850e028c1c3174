use chrono::{Duration, NaiveDate};
use healthlog_core::db::open_db_in_memory;
use healthlog_core::{
    HealthService, MemoryKeyValueStore, RepoError, SleepQuality, SqliteKeyValueStore,
};

fn day(day: u32, hour: u32, minute: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 7, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

#[test]
fn goal_day_scenario_produces_the_expected_summary() {
    let store = MemoryKeyValueStore::new();
    let service = HealthService::new(&store);
    let now = day(18, 21, 0);

    service.record_step(3_000, day(18, 7, 30)).unwrap();
    service.record_step(5_200, day(18, 18, 0)).unwrap();
    service.record_water(1_400, day(18, 8, 0)).unwrap();
    service.set_sleep_start(day(17, 23, 0)).unwrap();
    service.set_sleep_end(day(18, 7, 0)).unwrap();

    let summary = service.today_summary(now);

    assert_eq!(summary.steps.total_steps, 8_200);
    assert_eq!(summary.step_goal_percent, 100);
    assert_eq!(summary.remaining_steps, 0);
    assert_eq!(summary.steps.calories_kcal, 328);
    assert!((summary.steps.distance_km - 6.15).abs() < 1e-9);

    assert_eq!(summary.water_ml, 1_400);
    assert_eq!(summary.water_goal_percent, 70);
    assert_eq!(summary.remaining_water_ml, 600);

    assert_eq!(summary.sleep_hours, 8.0);
    assert_eq!(summary.sleep_goal_percent, 100);
    assert_eq!(summary.sleep_quality, SleepQuality::Adequate);
    assert!((summary.sleep_stages.deep_hours - 3.2).abs() < 1e-9);
}

#[test]
fn summaries_work_against_the_sqlite_store_too() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKeyValueStore::new(&conn);
    let service = HealthService::new(&store);
    let now = day(18, 20, 0);

    service.record_water(500, day(18, 9, 30)).unwrap();
    let summary = service.today_summary(now);

    assert_eq!(summary.water_ml, 500);
    assert_eq!(summary.water_goal_percent, 25);
}

#[test]
fn empty_store_summarizes_to_zeroes() {
    let store = MemoryKeyValueStore::new();
    let service = HealthService::new(&store);

    let summary = service.today_summary(day(18, 12, 0));
    assert_eq!(summary.steps.total_steps, 0);
    assert_eq!(summary.steps.intensity_percent, 0);
    assert_eq!(summary.step_goal_percent, 0);
    assert_eq!(summary.water_ml, 0);
    assert_eq!(summary.sleep_hours, 0.0);
    assert_eq!(summary.sleep_quality, SleepQuality::Insufficient);
    assert_eq!(summary.remaining_steps, 8_000);
    assert_eq!(summary.remaining_water_ml, 2_000);
}

#[test]
fn todays_window_excludes_yesterday_and_future_entries() {
    let store = MemoryKeyValueStore::new();
    let service = HealthService::new(&store);
    let now = day(18, 12, 0);

    service.record_step(4_000, day(17, 23, 59)).unwrap();
    service.record_step(100, day(18, 0, 0)).unwrap();
    service.record_step(2_500, day(18, 11, 0)).unwrap();
    // Logged for later today; `now` has not reached it yet.
    service.record_step(9_000, day(18, 15, 0)).unwrap();

    let summary = service.today_summary(now);
    assert_eq!(summary.steps.total_steps, 2_600);
}

#[test]
fn weekly_summary_rolls_up_the_trailing_seven_days() {
    let store = MemoryKeyValueStore::new();
    let service = HealthService::new(&store);
    let now = day(18, 21, 0);

    // Window start is 2026-07-12 00:00.
    service.record_step(9_000, day(11, 23, 59)).unwrap(); // outside
    service.record_step(8_000, day(12, 0, 0)).unwrap(); // boundary, inside
    service.record_step(50_000, day(15, 10, 0)).unwrap();
    service.record_water(9_800, day(14, 9, 0)).unwrap();
    service.record_water(4_200, day(18, 9, 0)).unwrap();
    service.set_sleep_start(day(17, 23, 0)).unwrap();
    service.set_sleep_end(day(18, 6, 0)).unwrap();

    let weekly = service.weekly_summary(now);
    assert_eq!(weekly.total_steps, 58_000);
    assert_eq!(weekly.total_water_ml, 14_000);
    assert_eq!(weekly.average_daily_water_ml, 2_000);
    assert_eq!(weekly.estimated_sleep_hours, 49.0);
    assert_eq!(weekly.average_daily_sleep_hours, 7.0);

    assert!(weekly.assessment.steps_on_track);
    assert!(weekly.assessment.water_on_track);
    assert!(weekly.assessment.sleep_on_track);
}

#[test]
fn weekly_sleep_estimate_is_todays_interval_times_seven() {
    // No per-day sleep history exists; the weekly figure extrapolates the
    // single stored interval.
    let store = MemoryKeyValueStore::new();
    let service = HealthService::new(&store);

    service.set_sleep_start(day(17, 23, 30)).unwrap();
    service.set_sleep_end(day(18, 6, 0)).unwrap();

    let weekly = service.weekly_summary(day(18, 12, 0));
    assert_eq!(weekly.estimated_sleep_hours, 45.5);
}

#[test]
fn zero_amounts_are_rejected_without_touching_storage() {
    let store = MemoryKeyValueStore::new();
    let service = HealthService::new(&store);

    let err = service.record_step(0, day(18, 9, 0)).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    let err = service.record_water(0, day(18, 9, 0)).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    let summary = service.today_summary(day(18, 12, 0));
    assert_eq!(summary.steps.total_steps, 0);
    assert_eq!(summary.water_ml, 0);
}

#[test]
fn summary_is_recomputed_from_current_now_not_cached() {
    let store = MemoryKeyValueStore::new();
    let service = HealthService::new(&store);

    service.record_water(800, day(18, 9, 0)).unwrap();

    let during = service.today_summary(day(18, 12, 0));
    assert_eq!(during.water_ml, 800);

    // Next day the same entries fall out of the today window.
    let next_day = service.today_summary(day(19, 12, 0));
    assert_eq!(next_day.water_ml, 0);

    // But they still count toward the trailing week.
    let weekly = service.weekly_summary(day(19, 12, 0));
    assert_eq!(weekly.total_water_ml, 800);

    let much_later = service.today_summary(day(18, 12, 0) + Duration::days(30));
    assert_eq!(much_later.water_ml, 0);
}
