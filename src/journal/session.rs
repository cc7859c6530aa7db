//! The Locked / Unlocked session.
//!
//! A `Session` is owned by the caller and handed to every journal
//! operation. While unlocked it holds the derived key and the decrypted
//! entry cache; locking drops both, which zeroes the key and every
//! cached entry.

use super::cache::EntryCache;
use super::entry::Entry;
use crate::crypto::SessionKey;
use crate::errors::{JournalError, Result};
use crate::storage::RecordId;

#[derive(Debug, Default)]
enum SessionState {
    #[default]
    Locked,
    Unlocked {
        key: SessionKey,
        cache: EntryCache,
    },
}

/// Caller-owned session state.
#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
}

impl Session {
    /// A new, locked session.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_unlocked(&self) -> bool {
        matches!(self.state, SessionState::Unlocked { .. })
    }

    /// Discard the key and all decrypted entries.
    pub fn lock(&mut self) {
        self.state = SessionState::Locked;
    }

    /// All entries, newest first. Empty while locked.
    pub fn entries(&self) -> Vec<&Entry> {
        self.cache().map(EntryCache::sorted).unwrap_or_default()
    }

    /// Case-insensitive search over cached titles and bodies.
    /// Never touches storage. Empty while locked.
    pub fn search(&self, query: &str) -> Vec<&Entry> {
        self.cache()
            .map(|cache| cache.search(query))
            .unwrap_or_default()
    }

    /// Look up one cached entry by id.
    pub fn entry(&self, id: RecordId) -> Option<&Entry> {
        self.cache().and_then(|cache| cache.get(id))
    }

    /// Number of cached entries (0 while locked).
    pub fn len(&self) -> usize {
        self.cache().map_or(0, EntryCache::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn cache(&self) -> Option<&EntryCache> {
        match &self.state {
            SessionState::Unlocked { cache, .. } => Some(cache),
            SessionState::Locked => None,
        }
    }

    pub(crate) fn key(&self) -> Result<&SessionKey> {
        match &self.state {
            SessionState::Unlocked { key, .. } => Ok(key),
            SessionState::Locked => Err(JournalError::Locked),
        }
    }

    pub(crate) fn unlock_with(&mut self, key: SessionKey, cache: EntryCache) {
        self.state = SessionState::Unlocked { key, cache };
    }

    pub(crate) fn replace_cache(&mut self, fresh: EntryCache) {
        if let SessionState::Unlocked { cache, .. } = &mut self.state {
            *cache = fresh;
        }
    }
}
