//! Plaintext journal entries.
//!
//! An `Entry` only ever exists in memory. What gets encrypted is its
//! `EntryPayload`: the title, body and date serialized as JSON in a fixed
//! field order. The id is not part of the payload; it belongs to the
//! record the payload is stored in.

use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::{JournalError, Result};
use crate::storage::record::now_rfc3339;
use crate::storage::RecordId;

/// A decrypted journal entry.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Entry {
    /// `None` until the entry has been saved once.
    pub id: Option<RecordId>,
    pub title: String,
    pub body: String,
    /// Client-side timestamp captured at save time (RFC 3339).
    pub date: String,
}

impl std::fmt::Debug for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entry")
            .field("id", &self.id)
            .field("title", &"<redacted>")
            .field("body", &"<redacted>")
            .field("date", &self.date)
            .finish()
    }
}

/// The part of an entry that is encrypted into a record.
#[derive(Serialize, Deserialize)]
pub struct EntryPayload {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub date: String,
}

impl Entry {
    /// A new, unsaved entry dated now.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            body: body.into(),
            date: now_rfc3339(),
        }
    }

    /// Rebuild an entry from a decrypted payload stored under `id`.
    pub(crate) fn from_payload(id: RecordId, payload: EntryPayload) -> Self {
        Self {
            id: Some(id),
            title: payload.title,
            body: payload.body,
            date: payload.date,
        }
    }

    /// Serialize the encryptable part of this entry.
    pub(crate) fn payload_json(&self) -> Result<String> {
        #[derive(Serialize)]
        struct PayloadRef<'a> {
            title: &'a str,
            body: &'a str,
            date: &'a str,
        }

        serde_json::to_string(&PayloadRef {
            title: &self.title,
            body: &self.body,
            date: &self.date,
        })
        .map_err(|e| JournalError::SerializationError(format!("entry payload: {e}")))
    }

    /// The entry date as an instant, if it parses as RFC 3339.
    pub fn timestamp(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.date).ok()
    }

    /// Case-insensitive substring match on title or body.
    /// `needle` must already be lowercase.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.body.to_lowercase().contains(needle)
    }
}

/// Listing order: newest `date` first. Entries whose date does not parse
/// sort after all dated ones; ties fall back to id order.
pub fn newest_first(a: &Entry, b: &Entry) -> Ordering {
    let by_date = match (a.timestamp(), b.timestamp()) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_date.then_with(|| a.id.cmp(&b.id))
}
