//! Storage module: durable homes for encrypted records and scalar slots.
//!
//! This module provides:
//! - The `Record` at-rest shape, which is also the export wire shape (`record`)
//! - `RecordStore` and `ScalarStore`, the two storage seams the journal uses
//! - A SQLite record store (`sqlite`) and a JSON-file scalar store (`slots`)
//! - Volatile in-memory implementations of both (`memory`)

pub mod memory;
pub mod record;
pub mod slots;
pub mod sqlite;

pub use memory::{MemoryRecordStore, MemoryScalarStore};
pub use record::{Record, RecordId};
pub use slots::FileScalarStore;
pub use sqlite::SqliteRecordStore;

use crate::errors::Result;

/// Durable storage of opaque encrypted records keyed by a store-assigned id.
///
/// Ids are unique and monotonically increasing; a deleted id is never
/// handed out again.
pub trait RecordStore {
    /// Insert `record`, or replace the record at `record.id` when set.
    /// Returns the id the record now lives under.
    fn put(&mut self, record: &Record) -> Result<RecordId>;

    /// Every stored record, ordered by id.
    fn get_all(&self) -> Result<Vec<Record>>;

    /// Remove the record with `id`. Removing a missing id is a no-op.
    fn delete(&mut self, id: RecordId) -> Result<()>;

    /// Remove every record.
    fn clear(&mut self) -> Result<()>;
}

/// A small durable name → string map, kept apart from the record store.
pub trait ScalarStore {
    fn get(&self, name: &str) -> Result<Option<String>>;

    fn set(&mut self, name: &str, value: &str) -> Result<()>;

    /// Removing a missing name is a no-op.
    fn remove(&mut self, name: &str) -> Result<()>;
}
