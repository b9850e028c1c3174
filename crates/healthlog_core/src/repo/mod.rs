//! Repository layer over the key-value storage port.
//!
//! # Responsibility
//! - Translate between domain records and their persisted string form.
//! - Isolate key names and wire formats from service orchestration.
//!
//! # Invariants
//! - Write paths validate before persisting and propagate storage errors.
//! - Read paths never fail the caller: absent, unreadable or malformed data
//!   degrades to the empty value for that concern.

use crate::model::entry::EntryValidationError;
use crate::storage::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod entry_repo;
pub mod profile_repo;
pub mod sleep_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for repository write operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(EntryValidationError),
    Encode(serde_json::Error),
    Store(StoreError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode entry blob: {err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<EntryValidationError> for RepoError {
    fn from(value: EntryValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}
