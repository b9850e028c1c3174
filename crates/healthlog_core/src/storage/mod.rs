//! Key-value storage port and its implementations.
//!
//! # Responsibility
//! - Define the string key-value contract the whole engine persists through.
//! - Provide the production SQLite implementation and an in-memory fake.
//!
//! # Invariants
//! - The engine depends only on `KeyValueStore`, never on a concrete backend
//!   or ambient global state.
//! - `set` persists synchronously; there is no transaction spanning multiple
//!   keys, so steps and water can be written independently.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Transport error for key-value reads and writes.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// The storage port every repository persists through.
///
/// Implementations take `&self`; the engine is single-threaded and backends
/// use interior mutability where needed.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

/// SQLite-backed store over the `kv_store` table.
pub struct SqliteKeyValueStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKeyValueStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl KeyValueStore for SqliteKeyValueStore<'_> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv_store WHERE key = ?1;", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE
             SET value = excluded.value,
                 updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }
}

/// In-memory store used by tests and storage-free embedders.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyValueStore, MemoryKeyValueStore};

    #[test]
    fn memory_store_round_trips_and_overwrites() {
        let store = MemoryKeyValueStore::new();
        assert_eq!(store.get("stepData").unwrap(), None);

        store.set("stepData", "[]").unwrap();
        assert_eq!(store.get("stepData").unwrap().as_deref(), Some("[]"));

        store.set("stepData", "[1]").unwrap();
        assert_eq!(store.get("stepData").unwrap().as_deref(), Some("[1]"));
    }
}
