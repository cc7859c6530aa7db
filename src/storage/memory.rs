//! Volatile in-memory stores.
//!
//! Same contracts as the durable stores, nothing survives a drop.

use std::collections::{BTreeMap, HashMap};

use super::{Record, RecordId, RecordStore, ScalarStore};
use crate::errors::{JournalError, Result};

/// In-memory record store with an auto-increment key generator.
#[derive(Debug, Clone)]
pub struct MemoryRecordStore {
    records: BTreeMap<RecordId, Record>,
    next_id: RecordId,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl Default for MemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for MemoryRecordStore {
    fn put(&mut self, record: &Record) -> Result<RecordId> {
        let id = match record.id {
            Some(id) => id,
            None => self.next_id,
        };
        // Explicit ids push the generator forward so it never hands one out twice.
        let after = id
            .checked_add(1)
            .ok_or_else(|| JournalError::Storage(format!("record id {id} exhausts the id space")))?;
        self.next_id = self.next_id.max(after);

        let mut stored = record.clone();
        stored.id = Some(id);
        self.records.insert(id, stored);
        Ok(id)
    }

    fn get_all(&self) -> Result<Vec<Record>> {
        Ok(self.records.values().cloned().collect())
    }

    fn delete(&mut self, id: RecordId) -> Result<()> {
        self.records.remove(&id);
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.records.clear();
        Ok(())
    }
}

/// In-memory scalar slots.
#[derive(Debug, Clone, Default)]
pub struct MemoryScalarStore {
    values: HashMap<String, String>,
}

impl MemoryScalarStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScalarStore for MemoryScalarStore {
    fn get(&self, name: &str) -> Result<Option<String>> {
        Ok(self.values.get(name).cloned())
    }

    fn set(&mut self, name: &str, value: &str) -> Result<()> {
        self.values.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, name: &str) -> Result<()> {
        self.values.remove(name);
        Ok(())
    }
}
