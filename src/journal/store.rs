//! High-level journal operations used by CLI commands.
//!
//! `Journal` owns the record store and the scalar slots and runs the
//! unlock protocol on top of them. It never holds a key or plaintext
//! itself: those live in the caller's `Session`, which every operation
//! takes by `&mut`. The exclusive borrows also mean one mutation and its
//! cache rebuild always finish before the next mutation can start.

use serde_json::Value;
use tracing::{debug, info, warn};
use zeroize::Zeroizing;

use super::cache::EntryCache;
use super::credentials::validate_password;
use super::entry::Entry;
use super::session::Session;
use crate::crypto::{derive_key, encrypt, forget_salt, get_or_create_salt, KdfParams};
use crate::errors::{JournalError, Result};
use crate::storage::record::now_rfc3339;
use crate::storage::{Record, RecordId, RecordStore, ScalarStore};

/// Outcome of `Journal::import_records`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Records upserted into the store.
    pub imported: usize,
    /// Elements ignored for lacking `data` or `iv`.
    pub skipped: usize,
}

/// The encrypted journal.
pub struct Journal<R, K> {
    records: R,
    slots: K,
    kdf: KdfParams,
}

impl<R: RecordStore, K: ScalarStore> Journal<R, K> {
    pub fn new(records: R, slots: K, kdf: KdfParams) -> Self {
        Self {
            records,
            slots,
            kdf,
        }
    }

    // ------------------------------------------------------------------
    // Unlock protocol
    // ------------------------------------------------------------------

    /// Derive a key from `password` and try it against every record.
    ///
    /// Succeeds only if all records decrypt; the session is then
    /// Unlocked with a full cache. If any record fails the session ends
    /// up Locked with nothing cached. An empty journal accepts any
    /// non-empty password.
    pub fn unlock(&mut self, session: &mut Session, password: &str) -> Result<()> {
        let password = validate_password(password, None)?;

        let salt = get_or_create_salt(&mut self.slots)?;
        let key = derive_key(&password, &salt, &self.kdf)?;
        let records = self.records.get_all()?;

        match EntryCache::decrypt_all(&key, &records) {
            Ok(cache) => {
                info!(entries = cache.len(), "journal unlocked");
                session.unlock_with(key, cache);
                Ok(())
            }
            Err(e) => {
                warn!(records = records.len(), "unlock rejected");
                session.lock();
                Err(e)
            }
        }
    }

    // ------------------------------------------------------------------
    // Entry operations
    // ------------------------------------------------------------------

    /// Encrypt and store `entry`, then rebuild the session cache.
    ///
    /// An entry with an id replaces the record at that id; one without
    /// gets a fresh id from the store. Returns the id.
    pub fn save_entry(&mut self, session: &mut Session, entry: &Entry) -> Result<RecordId> {
        let key = session.key()?;

        let payload = Zeroizing::new(entry.payload_json()?);
        let encrypted = encrypt(key, &payload)?;

        let id = self
            .records
            .put(&Record::new(entry.id, encrypted.cipher, encrypted.iv))?;
        debug!(id, replaced = entry.id.is_some(), "entry saved");

        self.reload(session)?;
        Ok(id)
    }

    /// Remove the record with `id` (a missing id is a no-op), then
    /// rebuild the session cache.
    pub fn delete_entry(&mut self, session: &mut Session, id: RecordId) -> Result<()> {
        session.key()?;

        self.records.delete(id)?;
        debug!(id, "entry deleted");

        self.reload(session)
    }

    /// Erase every record and the salt, and lock the session.
    ///
    /// Irreversible. The next unlock starts a brand-new journal.
    pub fn clear_all(&mut self, session: &mut Session) -> Result<()> {
        self.records.clear()?;
        forget_salt(&mut self.slots)?;
        session.lock();
        info!("journal cleared");
        Ok(())
    }

    /// Re-decrypt the whole store into the session.
    ///
    /// A failure returns the session to Locked.
    fn reload(&self, session: &mut Session) -> Result<()> {
        let records = self.records.get_all()?;
        let rebuilt = EntryCache::decrypt_all(session.key()?, &records);

        match rebuilt {
            Ok(cache) => {
                session.replace_cache(cache);
                Ok(())
            }
            Err(e) => {
                warn!(records = records.len(), "cache rebuild failed, locking session");
                session.lock();
                Err(e)
            }
        }
    }

    // ------------------------------------------------------------------
    // Export / import
    // ------------------------------------------------------------------

    /// Snapshot every record as a JSON array. Still encrypted.
    pub fn export_records(&self) -> Result<String> {
        let records = self.records.get_all()?;
        serde_json::to_string_pretty(&records)
            .map_err(|e| JournalError::SerializationError(format!("export: {e}")))
    }

    /// Upsert records from a JSON array produced by `export_records`.
    ///
    /// Elements without `data` or `iv` are skipped. A malformed element
    /// aborts the import, but records upserted before it stay. If the
    /// session is unlocked its cache is rebuilt afterwards, so importing
    /// records written under a different password locks it.
    pub fn import_records(&mut self, session: &mut Session, json: &str) -> Result<ImportSummary> {
        let parsed: Value = serde_json::from_str(json)
            .map_err(|e| JournalError::ImportFormat(format!("invalid JSON: {e}")))?;
        let Value::Array(items) = parsed else {
            return Err(JournalError::ImportFormat(
                "expected a JSON array of records".into(),
            ));
        };

        let mut summary = ImportSummary::default();
        for (index, item) in items.iter().enumerate() {
            match parse_import_item(index, item)? {
                Some(record) => {
                    self.records.put(&record)?;
                    summary.imported += 1;
                }
                None => summary.skipped += 1,
            }
        }
        info!(
            imported = summary.imported,
            skipped = summary.skipped,
            "records imported"
        );

        if session.is_unlocked() {
            self.reload(session)?;
        }
        Ok(summary)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Returns `true` if the store holds no records.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.records.get_all()?.is_empty())
    }

    /// Number of stored records. No decryption is performed.
    pub fn record_count(&self) -> Result<usize> {
        Ok(self.records.get_all()?.len())
    }

    pub fn kdf_params(&self) -> &KdfParams {
        &self.kdf
    }

    /// Direct access to the underlying record store.
    pub fn record_store_mut(&mut self) -> &mut R {
        &mut self.records
    }

    /// Direct access to the scalar slots.
    pub fn scalar_store(&self) -> &K {
        &self.slots
    }

    /// Tear the journal apart into its stores.
    pub fn into_parts(self) -> (R, K) {
        (self.records, self.slots)
    }
}

/// Validate one element of an import array.
///
/// `Ok(None)` means "skip": not an object, or `data`/`iv` missing,
/// null or empty.
fn parse_import_item(index: usize, item: &Value) -> Result<Option<Record>> {
    let Some(obj) = item.as_object() else {
        return Ok(None);
    };

    let (data, iv) = match (present(obj.get("data")), present(obj.get("iv"))) {
        (Some(data), Some(iv)) => (data, iv),
        _ => return Ok(None),
    };

    let malformed = |what: &str| JournalError::ImportFormat(format!("element {index}: {what}"));

    let data = data.as_str().ok_or_else(|| malformed("`data` must be a string"))?;
    let iv = iv.as_str().ok_or_else(|| malformed("`iv` must be a string"))?;
    if data.is_empty() || iv.is_empty() {
        return Ok(None);
    }

    let id = match present(obj.get("id")) {
        None => None,
        Some(v) => match v.as_i64() {
            Some(id) if id > 0 => Some(id),
            _ => return Err(malformed("`id` must be a positive integer")),
        },
    };

    let created = match present(obj.get("created")) {
        None => now_rfc3339(),
        Some(v) => v
            .as_str()
            .ok_or_else(|| malformed("`created` must be a string"))?
            .to_string(),
    };

    Ok(Some(Record {
        id,
        data: data.to_string(),
        iv: iv.to_string(),
        created,
    }))
}

/// Treat JSON `null` like an absent field.
fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}
