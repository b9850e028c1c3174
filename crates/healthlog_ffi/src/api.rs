//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Enforce the input-validation boundary: bad amounts and times turn into
//!   failure envelopes, never into entries and never into panics.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Wall-clock "now" is resolved here, once per call; the core stays a pure
//!   function of the time it is handed.

use chrono::{Local, NaiveDateTime, NaiveTime};
use healthlog_core::db::open_db;
use healthlog_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, AdviceMetric,
    AuthService, HealthService, ProfileRepository, SqliteKeyValueStore, UserProfile,
};
use log::warn;
use std::path::PathBuf;
use std::sync::OnceLock;

const DB_FILE_NAME: &str = "healthlog_data.sqlite3";
const TIME_OF_DAY_FORMAT: &str = "%H:%M";
static DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Expose the core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same configuration (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Generic action envelope for record/set command flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordResponse {
    /// Whether the operation succeeded.
    pub ok: bool,
    /// Created entry ID, when the operation creates one.
    pub entry_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl RecordResponse {
    fn success(message: impl Into<String>, entry_id: Option<String>) -> Self {
        Self {
            ok: true,
            entry_id,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            entry_id: None,
            message: message.into(),
        }
    }
}

/// Records a step sample.
///
/// `steps` is the raw text-field input; `time` is an optional `HH:MM`
/// time-of-day applied to today's date, defaulting to now. Non-numeric or
/// non-positive input yields a failure envelope and no entry.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn record_step(steps: String, time: Option<String>) -> RecordResponse {
    record_measurement(MeasurementInput::Steps, steps, time)
}

/// Records a water sample in milliliters. Same input rules as `record_step`.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn record_water(amount_ml: String, time: Option<String>) -> RecordResponse {
    record_measurement(MeasurementInput::Water, amount_ml, time)
}

enum MeasurementInput {
    Steps,
    Water,
}

fn record_measurement(
    kind: MeasurementInput,
    amount: String,
    time: Option<String>,
) -> RecordResponse {
    let Some(amount) = parse_amount(&amount) else {
        return RecordResponse::failure("Amount must be a positive whole number.");
    };
    let Some(time) = resolve_entry_time(time.as_deref()) else {
        return RecordResponse::failure("Time must be in HH:MM format.");
    };

    let result = with_store(|store| {
        let service = HealthService::new(store);
        match kind {
            MeasurementInput::Steps => service.record_step(amount, time),
            MeasurementInput::Water => service.record_water(amount, time),
        }
        .map_err(|err| err.to_string())
    });

    match result {
        Ok(entry_id) => RecordResponse::success("Entry recorded.", Some(entry_id.to_string())),
        Err(err) => RecordResponse::failure(format!("record failed: {err}")),
    }
}

/// Overwrites the sleep start time with today's date at `HH:MM`.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn sleep_set_start(time: String) -> RecordResponse {
    set_sleep_bound(SleepBound::Start, time)
}

/// Overwrites the sleep end time with today's date at `HH:MM`.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn sleep_set_end(time: String) -> RecordResponse {
    set_sleep_bound(SleepBound::End, time)
}

enum SleepBound {
    Start,
    End,
}

fn set_sleep_bound(bound: SleepBound, time: String) -> RecordResponse {
    let Some(time) = resolve_entry_time(Some(&time)) else {
        return RecordResponse::failure("Time must be in HH:MM format.");
    };

    let result = with_store(|store| {
        let service = HealthService::new(store);
        match bound {
            SleepBound::Start => service.set_sleep_start(time),
            SleepBound::End => service.set_sleep_end(time),
        }
        .map_err(|err| err.to_string())
    });

    match result {
        Ok(()) => RecordResponse::success("Sleep time saved.", None),
        Err(err) => RecordResponse::failure(format!("sleep update failed: {err}")),
    }
}

/// Flattened daily summary for the dashboard screen.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySummaryResponse {
    pub ok: bool,
    pub message: String,
    pub total_steps: u32,
    pub step_goal_percent: u8,
    pub remaining_steps: u32,
    pub distance_km: f64,
    pub calories_kcal: u32,
    pub intensity_percent: u8,
    pub water_ml: u32,
    pub water_goal_percent: u8,
    pub remaining_water_ml: u32,
    pub sleep_hours: f64,
    pub sleep_goal_percent: u8,
    pub deep_sleep_hours: f64,
    pub light_sleep_hours: f64,
    pub awake_hours: f64,
    pub sleep_adequate: bool,
}

/// Computes today's summary against the current wall clock.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; on storage failure returns a zeroed summary with
///   `ok = false` and a diagnostic message.
#[flutter_rust_bridge::frb(sync)]
pub fn today_summary() -> DailySummaryResponse {
    let result = with_store(|store| {
        let service = HealthService::new(store);
        Ok(service.today_summary(Local::now().naive_local()))
    });

    match result {
        Ok(summary) => DailySummaryResponse {
            ok: true,
            message: String::new(),
            total_steps: summary.steps.total_steps,
            step_goal_percent: summary.step_goal_percent,
            remaining_steps: summary.remaining_steps,
            distance_km: summary.steps.distance_km,
            calories_kcal: summary.steps.calories_kcal,
            intensity_percent: summary.steps.intensity_percent,
            water_ml: summary.water_ml,
            water_goal_percent: summary.water_goal_percent,
            remaining_water_ml: summary.remaining_water_ml,
            sleep_hours: summary.sleep_hours,
            sleep_goal_percent: summary.sleep_goal_percent,
            deep_sleep_hours: summary.sleep_stages.deep_hours,
            light_sleep_hours: summary.sleep_stages.light_hours,
            awake_hours: summary.sleep_stages.awake_hours,
            sleep_adequate: summary.sleep_quality == healthlog_core::SleepQuality::Adequate,
        },
        Err(err) => DailySummaryResponse {
            ok: false,
            message: format!("today_summary failed: {err}"),
            total_steps: 0,
            step_goal_percent: 0,
            remaining_steps: 0,
            distance_km: 0.0,
            calories_kcal: 0,
            intensity_percent: 0,
            water_ml: 0,
            water_goal_percent: 0,
            remaining_water_ml: 0,
            sleep_hours: 0.0,
            sleep_goal_percent: 0,
            deep_sleep_hours: 0.0,
            light_sleep_hours: 0.0,
            awake_hours: 0.0,
            sleep_adequate: false,
        },
    }
}

/// Flattened weekly report summary.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklySummaryResponse {
    pub ok: bool,
    pub message: String,
    pub total_steps: u32,
    pub total_water_ml: u32,
    pub average_daily_water_ml: u32,
    pub estimated_sleep_hours: f64,
    pub average_daily_sleep_hours: f64,
    pub steps_on_track: bool,
    pub water_on_track: bool,
    pub sleep_on_track: bool,
}

/// Computes the trailing-week summary against the current wall clock.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn weekly_summary() -> WeeklySummaryResponse {
    let result = with_store(|store| {
        let service = HealthService::new(store);
        Ok(service.weekly_summary(Local::now().naive_local()))
    });

    match result {
        Ok(summary) => WeeklySummaryResponse {
            ok: true,
            message: String::new(),
            total_steps: summary.total_steps,
            total_water_ml: summary.total_water_ml,
            average_daily_water_ml: summary.average_daily_water_ml,
            estimated_sleep_hours: summary.estimated_sleep_hours,
            average_daily_sleep_hours: summary.average_daily_sleep_hours,
            steps_on_track: summary.assessment.steps_on_track,
            water_on_track: summary.assessment.water_on_track,
            sleep_on_track: summary.assessment.sleep_on_track,
        },
        Err(err) => WeeklySummaryResponse {
            ok: false,
            message: format!("weekly_summary failed: {err}"),
            total_steps: 0,
            total_water_ml: 0,
            average_daily_water_ml: 0,
            estimated_sleep_hours: 0.0,
            average_daily_sleep_hours: 0.0,
            steps_on_track: false,
            water_on_track: false,
            sleep_on_track: false,
        },
    }
}

/// Advice envelope for one metric card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdviceResponse {
    pub ok: bool,
    /// Selected advice text (empty on failure).
    pub advice: String,
    pub message: String,
}

/// Selects the advice text for `metric` (`steps`, `water` or `sleep`).
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics; unknown metric labels return a failure envelope.
#[flutter_rust_bridge::frb(sync)]
pub fn health_advice(metric: String) -> AdviceResponse {
    let Some(metric) = AdviceMetric::parse(&metric) else {
        return AdviceResponse {
            ok: false,
            advice: String::new(),
            message: "Unknown metric; expected steps|water|sleep.".to_string(),
        };
    };

    let result = with_store(|store| {
        let service = HealthService::new(store);
        Ok(service.advice(metric, Local::now().naive_local()))
    });

    match result {
        Ok(advice) => AdviceResponse {
            ok: true,
            advice,
            message: String::new(),
        },
        Err(err) => AdviceResponse {
            ok: false,
            advice: String::new(),
            message: format!("health_advice failed: {err}"),
        },
    }
}

/// Action envelope for auth and profile command flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthResponse {
    pub ok: bool,
    pub message: String,
}

impl AuthResponse {
    fn from_result(result: Result<(), String>, success_message: &str) -> Self {
        match result {
            Ok(()) => Self {
                ok: true,
                message: success_message.to_string(),
            },
            Err(message) => Self { ok: false, message },
        }
    }
}

/// Seeds a local credential for `phone`.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn register(phone: String, password: String) -> AuthResponse {
    let result = with_store(|store| {
        AuthService::new(store)
            .register(&phone, &password)
            .map_err(|err| err.to_string())
    });
    AuthResponse::from_result(result, "Registered.")
}

/// Matches a phone/password pair against the stored local credential.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn login(phone: String, password: String) -> AuthResponse {
    let result = with_store(|store| {
        AuthService::new(store)
            .login(&phone, &password)
            .map_err(|err| err.to_string())
    });
    AuthResponse::from_result(result, "Logged in.")
}

/// Changes the logged-in user's password.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn change_password(old: String, new: String, confirm: String) -> AuthResponse {
    let result = with_store(|store| {
        AuthService::new(store)
            .change_password(&old, &new, &confirm)
            .map_err(|err| err.to_string())
    });
    AuthResponse::from_result(result, "Password changed.")
}

/// Profile envelope for the profile screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileResponse {
    pub ok: bool,
    pub name: String,
    pub phone: String,
    pub avatar: String,
    pub message: String,
}

/// Loads the stored profile fields (empty strings when unset).
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn profile_get() -> ProfileResponse {
    let result = with_store(|store| {
        ProfileRepository::new(store)
            .profile()
            .map_err(|err| err.to_string())
    });

    match result {
        Ok(profile) => ProfileResponse {
            ok: true,
            name: profile.name,
            phone: profile.phone,
            avatar: profile.avatar,
            message: String::new(),
        },
        Err(err) => ProfileResponse {
            ok: false,
            name: String::new(),
            phone: String::new(),
            avatar: String::new(),
            message: format!("profile_get failed: {err}"),
        },
    }
}

/// Overwrites the stored profile fields.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn profile_update(name: String, phone: String, avatar: String) -> AuthResponse {
    let result = with_store(|store| {
        ProfileRepository::new(store)
            .set_profile(&UserProfile {
                name,
                phone,
                avatar,
            })
            .map_err(|err| err.to_string())
    });
    AuthResponse::from_result(result, "Profile saved.")
}

fn parse_amount(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok().filter(|value| *value > 0)
}

/// Resolves an optional `HH:MM` input to a full timestamp on today's date.
fn resolve_entry_time(raw: Option<&str>) -> Option<NaiveDateTime> {
    let now = Local::now().naive_local();
    match raw {
        None => Some(now),
        Some(raw) => NaiveTime::parse_from_str(raw.trim(), TIME_OF_DAY_FORMAT)
            .ok()
            .map(|time| NaiveDateTime::new(now.date(), time)),
    }
}

fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("HEALTHLOG_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(DB_FILE_NAME)
        })
        .clone()
}

fn with_store<T>(
    f: impl FnOnce(&SqliteKeyValueStore<'_>) -> Result<T, String>,
) -> Result<T, String> {
    let db_path = resolve_db_path();
    let conn = open_db(&db_path).map_err(|err| {
        warn!("event=ffi_db_open module=ffi status=error error={err}");
        format!("health DB open failed: {err}")
    })?;
    let store = SqliteKeyValueStore::new(&conn);
    f(&store)
}
