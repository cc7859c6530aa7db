//! The decrypted in-memory view of every stored record.

use zeroize::Zeroizing;

use super::entry::{newest_first, Entry, EntryPayload};
use crate::crypto::{decrypt, SessionKey};
use crate::errors::{JournalError, Result};
use crate::storage::{Record, RecordId};

/// All entries of the journal, decrypted.
///
/// A cache is only ever produced by `decrypt_all`, so holding one means
/// every record in the snapshot it came from decrypted under the key.
#[derive(Debug, Default)]
pub struct EntryCache {
    entries: Vec<Entry>,
}

impl EntryCache {
    /// Decrypt every record, or fail without producing a partial cache.
    ///
    /// A record that fails authentication and a record whose plaintext
    /// is not an entry payload are treated alike.
    pub fn decrypt_all(key: &SessionKey, records: &[Record]) -> Result<Self> {
        let mut entries = Vec::with_capacity(records.len());

        for record in records {
            let id = record.id.ok_or_else(|| {
                JournalError::Storage("record store returned a record without an id".into())
            })?;

            let plaintext = Zeroizing::new(decrypt(key, &record.data, &record.iv)?);
            let payload: EntryPayload =
                serde_json::from_str(&plaintext).map_err(|_| JournalError::DecryptionFailed)?;

            entries.push(Entry::from_payload(id, payload));
        }

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == Some(id))
    }

    /// Every entry, newest first.
    pub fn sorted(&self) -> Vec<&Entry> {
        let mut list: Vec<&Entry> = self.entries.iter().collect();
        list.sort_by(|a, b| newest_first(a, b));
        list
    }

    /// Entries whose title or body contains `query`, ignoring case,
    /// newest first. A blank query returns everything.
    pub fn search(&self, query: &str) -> Vec<&Entry> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.sorted();
        }

        let mut list: Vec<&Entry> = self.entries.iter().filter(|e| e.matches(&needle)).collect();
        list.sort_by(|a, b| newest_first(a, b));
        list
    }
}
