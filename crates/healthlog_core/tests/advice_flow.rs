use chrono::NaiveDate;
use healthlog_core::{AdviceMetric, HealthService, MemoryKeyValueStore};

fn day(day: u32, hour: u32, minute: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 7, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn service(store: &MemoryKeyValueStore) -> HealthService<'_, MemoryKeyValueStore> {
    HealthService::new(store)
}

#[test]
fn empty_water_log_selects_the_nothing_logged_band() {
    let store = MemoryKeyValueStore::new();
    let advice = service(&store).advice(AdviceMetric::Water, day(18, 10, 0));
    assert!(advice.starts_with("No water logged yet today"));
}

#[test]
fn small_total_selects_the_low_intake_band() {
    let store = MemoryKeyValueStore::new();
    let svc = service(&store);
    svc.record_water(500, day(18, 7, 0)).unwrap();

    let advice = svc.advice(AdviceMetric::Water, day(18, 10, 0));
    assert!(advice.contains("low side"));
    assert!(advice.contains("500 ml"));
}

#[test]
fn goal_total_with_morning_entry_selects_goal_met_over_morning_band() {
    let store = MemoryKeyValueStore::new();
    let svc = service(&store);
    svc.record_water(2_500, day(18, 7, 0)).unwrap();

    let advice = svc.advice(AdviceMetric::Water, day(18, 14, 0));
    assert!(advice.contains("Hydration goal reached"));
    assert!(advice.contains("2500 ml"));
}

#[test]
fn missing_morning_entry_outranks_goal_met() {
    let store = MemoryKeyValueStore::new();
    let svc = service(&store);
    svc.record_water(2_500, day(18, 14, 0)).unwrap();

    let advice = svc.advice(AdviceMetric::Water, day(18, 15, 0));
    assert!(advice.contains("No water logged this morning"));
}

#[test]
fn mid_range_total_with_morning_entry_selects_steady_pace() {
    let store = MemoryKeyValueStore::new();
    let svc = service(&store);
    svc.record_water(1_200, day(18, 8, 30)).unwrap();

    let advice = svc.advice(AdviceMetric::Water, day(18, 13, 0));
    assert!(advice.contains("Good hydration rhythm"));
}

#[test]
fn step_advice_follows_the_band_order() {
    let store = MemoryKeyValueStore::new();
    let svc = service(&store);
    let now = day(18, 20, 0);

    assert!(svc
        .advice(AdviceMetric::Steps, now)
        .starts_with("No steps logged yet today"));

    svc.record_step(2_000, day(18, 9, 0)).unwrap();
    assert!(svc.advice(AdviceMetric::Steps, now).contains("Activity is low"));

    svc.record_step(6_200, day(18, 17, 0)).unwrap();
    let advice = svc.advice(AdviceMetric::Steps, now);
    assert!(advice.contains("Step goal reached"));
    assert!(advice.contains("8200 steps"));
}

#[test]
fn sleep_advice_is_a_binary_label() {
    let store = MemoryKeyValueStore::new();
    let svc = service(&store);
    let now = day(18, 9, 0);

    assert!(svc.advice(AdviceMetric::Sleep, now).contains("Watch your sleep"));

    svc.set_sleep_start(day(17, 23, 0)).unwrap();
    svc.set_sleep_end(day(18, 7, 0)).unwrap();
    assert!(svc.advice(AdviceMetric::Sleep, now).contains("Sleep looks good"));
}
