//! Measurement entry persistence.
//!
//! # Responsibility
//! - Serialize step and water logs to their per-kind JSON blob keys.
//! - Load persisted blobs with the tolerant decode policy.
//!
//! # Invariants
//! - Steps and water use separate keys; appending one never rewrites the
//!   other.
//! - `append` persists the full updated collection immediately.
//! - A decode failure degrades to "no data" with a warning, never an error;
//!   this is a tolerance policy for corrupt or legacy-format storage, not a
//!   guarantee about the underlying bytes.

use crate::model::entry::{EntryId, MeasurementEntry, MeasurementKind};
use crate::repo::RepoResult;
use crate::storage::KeyValueStore;
use chrono::NaiveDateTime;
use log::warn;
use serde::{Deserialize, Serialize};

/// Persisted key for the step log blob.
pub const STEP_DATA_KEY: &str = "stepData";
/// Persisted key for the water log blob.
pub const WATER_DATA_KEY: &str = "waterData";

/// Wire record for one persisted step sample.
#[derive(Debug, Serialize, Deserialize)]
struct StepWire {
    id: EntryId,
    time: NaiveDateTime,
    steps: u32,
}

/// Wire record for one persisted water sample.
#[derive(Debug, Serialize, Deserialize)]
struct WaterWire {
    id: EntryId,
    time: NaiveDateTime,
    amount: u32,
}

/// Repository for the append-only measurement logs.
pub struct EntryRepository<'s, S: KeyValueStore> {
    store: &'s S,
}

impl<'s, S: KeyValueStore> EntryRepository<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Loads the full persisted collection for one measurement kind.
    ///
    /// # Contract
    /// - Missing key, unreadable storage and malformed JSON all yield an
    ///   empty collection; this call never fails the caller.
    pub fn load(&self, kind: MeasurementKind) -> Vec<MeasurementEntry> {
        let key = blob_key(kind);
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!("event=entry_load module=repo status=degraded key={key} error={err}");
                return Vec::new();
            }
        };

        match decode_entries(kind, &raw) {
            Ok(entries) => entries,
            Err(err) => {
                warn!("event=entry_decode module=repo status=degraded key={key} error={err}");
                Vec::new()
            }
        }
    }

    /// Validates one entry, appends it and persists the updated collection.
    ///
    /// # Errors
    /// - `Validation` when the entry breaks model invariants.
    /// - `Store` when the write itself fails.
    pub fn append(&self, entry: MeasurementEntry) -> RepoResult<EntryId> {
        entry.validate()?;

        let mut entries = self.load(entry.kind);
        let id = entry.id;
        let kind = entry.kind;
        entries.push(entry);

        let blob = encode_entries(kind, &entries)?;
        self.store.set(blob_key(kind), &blob)?;
        Ok(id)
    }
}

fn blob_key(kind: MeasurementKind) -> &'static str {
    match kind {
        MeasurementKind::Step => STEP_DATA_KEY,
        MeasurementKind::Water => WATER_DATA_KEY,
    }
}

fn decode_entries(kind: MeasurementKind, raw: &str) -> serde_json::Result<Vec<MeasurementEntry>> {
    let entries = match kind {
        MeasurementKind::Step => serde_json::from_str::<Vec<StepWire>>(raw)?
            .into_iter()
            .map(|wire| MeasurementEntry::with_id(wire.id, kind, wire.time, wire.steps))
            .collect(),
        MeasurementKind::Water => serde_json::from_str::<Vec<WaterWire>>(raw)?
            .into_iter()
            .map(|wire| MeasurementEntry::with_id(wire.id, kind, wire.time, wire.amount))
            .collect(),
    };
    Ok(entries)
}

fn encode_entries(kind: MeasurementKind, entries: &[MeasurementEntry]) -> serde_json::Result<String> {
    match kind {
        MeasurementKind::Step => serde_json::to_string(
            &entries
                .iter()
                .map(|entry| StepWire {
                    id: entry.id,
                    time: entry.time,
                    steps: entry.amount,
                })
                .collect::<Vec<_>>(),
        ),
        MeasurementKind::Water => serde_json::to_string(
            &entries
                .iter()
                .map(|entry| WaterWire {
                    id: entry.id,
                    time: entry.time,
                    amount: entry.amount,
                })
                .collect::<Vec<_>>(),
        ),
    }
}
