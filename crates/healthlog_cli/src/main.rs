//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `healthlog_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use chrono::NaiveDate;
use healthlog_core::{HealthService, MemoryKeyValueStore};

fn main() {
    println!("healthlog_core version={}", healthlog_core::core_version());

    // Exercise the engine end to end against an in-memory store so the probe
    // stays side-effect free.
    let store = MemoryKeyValueStore::new();
    let service = HealthService::new(&store);
    let now = NaiveDate::from_ymd_opt(2026, 7, 18)
        .expect("valid probe date")
        .and_hms_opt(12, 0, 0)
        .expect("valid probe time");

    let summary = service.today_summary(now);
    println!(
        "probe steps={} water_ml={} sleep_hours={}",
        summary.steps.total_steps, summary.water_ml, summary.sleep_hours
    );
}
