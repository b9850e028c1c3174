//! Core engine for the healthlog tracking client.
//! This crate is the single source of truth for business invariants:
//! date-window arithmetic, aggregation, goal evaluation and advice rules.

pub mod advice;
pub mod config;
pub mod db;
pub mod logging;
pub mod metrics;
pub mod model;
pub mod repo;
pub mod service;
pub mod storage;
pub mod window;

pub use advice::{AdviceMetric, SleepQuality, StepBand, WaterBand, WeeklyAssessment};
pub use logging::{default_log_level, init_logging, logging_status};
pub use metrics::{SleepStages, StepMetrics};
pub use model::entry::{EntryId, EntryValidationError, MeasurementEntry, MeasurementKind};
pub use model::sleep::SleepInterval;
pub use repo::entry_repo::EntryRepository;
pub use repo::profile_repo::{ProfileRepository, UserProfile};
pub use repo::sleep_repo::SleepRepository;
pub use repo::{RepoError, RepoResult};
pub use service::auth_service::{AuthError, AuthResult, AuthService};
pub use service::health_service::{HealthService, TodaySummary, WeeklySummary};
pub use storage::{KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StoreError};
pub use window::TimeWindow;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
