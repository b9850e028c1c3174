//! Measurement entry model.
//!
//! # Responsibility
//! - Define the timestamped record shared by the step and water logs.
//! - Validate entries before they reach persistence.
//!
//! # Invariants
//! - `id` is stable and never reused for another entry.
//! - `amount` is strictly positive; zero-amount submissions are rejected at
//!   the boundary and never become entries.

use chrono::NaiveDateTime;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a logged measurement.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntryId = Uuid;

/// Which metric a measurement entry belongs to.
///
/// Step and water logs share one record shape but persist to separate blobs,
/// so a crash between two writes can never mix the collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurementKind {
    /// Step count sample.
    Step,
    /// Water intake sample in milliliters.
    Water,
}

/// Validation error for measurement entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryValidationError {
    /// Entry carries the nil UUID.
    NilId,
    /// Entry amount is zero.
    ZeroAmount,
}

impl Display for EntryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "entry id must not be the nil uuid"),
            Self::ZeroAmount => write!(f, "entry amount must be positive"),
        }
    }
}

impl Error for EntryValidationError {}

/// One timestamped user-logged measurement.
///
/// Entries are append-only from the engine's perspective: created by user
/// input, persisted immediately, loaded wholesale at session start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasurementEntry {
    /// Stable global ID, unique across both measurement kinds.
    pub id: EntryId,
    /// Metric this sample belongs to.
    pub kind: MeasurementKind,
    /// Local wall-clock time the measurement was logged for.
    pub time: NaiveDateTime,
    /// Step count or milliliters, depending on `kind`.
    pub amount: u32,
}

impl MeasurementEntry {
    /// Creates a new entry with a generated stable ID.
    pub fn new(kind: MeasurementKind, time: NaiveDateTime, amount: u32) -> Self {
        Self::with_id(Uuid::new_v4(), kind, time, amount)
    }

    /// Creates an entry with a caller-provided stable ID.
    ///
    /// Used when identity already exists externally, e.g. when decoding a
    /// persisted blob.
    pub fn with_id(id: EntryId, kind: MeasurementKind, time: NaiveDateTime, amount: u32) -> Self {
        Self {
            id,
            kind,
            time,
            amount,
        }
    }

    /// Checks the entry invariants.
    ///
    /// # Errors
    /// - `NilId` when the ID is the nil UUID.
    /// - `ZeroAmount` when the amount is zero.
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if self.id.is_nil() {
            return Err(EntryValidationError::NilId);
        }
        if self.amount == 0 {
            return Err(EntryValidationError::ZeroAmount);
        }
        Ok(())
    }
}
