//! Sleep interval persistence.
//!
//! # Responsibility
//! - Persist the start and end times as independent formatted-string keys.
//! - Load the pair back, degrading to "no interval" when either side is
//!   missing or malformed.

use crate::model::sleep::{format_sleep_time, parse_sleep_time, SleepInterval};
use crate::repo::RepoResult;
use crate::storage::KeyValueStore;
use chrono::NaiveDateTime;
use log::warn;

/// Persisted key for the sleep start time.
pub const SLEEP_START_KEY: &str = "sleepStartTime";
/// Persisted key for the sleep end time.
pub const SLEEP_END_KEY: &str = "sleepEndTime";

/// Repository for the single overwrite-on-change sleep interval.
pub struct SleepRepository<'s, S: KeyValueStore> {
    store: &'s S,
}

impl<'s, S: KeyValueStore> SleepRepository<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Persists a new sleep start, leaving the end untouched.
    pub fn set_start(&self, time: NaiveDateTime) -> RepoResult<()> {
        self.store.set(SLEEP_START_KEY, &format_sleep_time(time))?;
        Ok(())
    }

    /// Persists a new sleep end, leaving the start untouched.
    pub fn set_end(&self, time: NaiveDateTime) -> RepoResult<()> {
        self.store.set(SLEEP_END_KEY, &format_sleep_time(time))?;
        Ok(())
    }

    /// Loads the stored interval.
    ///
    /// # Contract
    /// - Returns `None` when either key is missing, unreadable or does not
    ///   parse; callers treat that as a zero-duration night.
    pub fn load(&self) -> Option<SleepInterval> {
        let start = parse_sleep_time(&self.read_key(SLEEP_START_KEY)?)?;
        let end = parse_sleep_time(&self.read_key(SLEEP_END_KEY)?)?;
        Some(SleepInterval::new(start, end))
    }

    fn read_key(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(err) => {
                warn!("event=sleep_load module=repo status=degraded key={key} error={err}");
                None
            }
        }
    }
}
