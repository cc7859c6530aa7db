//! The persisted record.
//!
//! A record is the only shape journal data ever takes outside of
//! memory: the ciphertext of one entry, its nonce, and a creation stamp.
//! Exports are a JSON array of these, still encrypted.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned record identifier.
pub type RecordId = i64;

/// One encrypted journal entry as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Absent until the store assigns one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    /// Base64 ciphertext (with auth tag) of the entry payload JSON.
    pub data: String,

    /// Base64 12-byte nonce used for `data`.
    pub iv: String,

    /// When this ciphertext was written (RFC 3339).
    pub created: String,
}

impl Record {
    /// Build a record stamped with the current time.
    pub fn new(id: Option<RecordId>, data: String, iv: String) -> Self {
        Self {
            id,
            data,
            iv,
            created: now_rfc3339(),
        }
    }
}

/// Current UTC time in RFC 3339 with millisecond precision.
pub(crate) fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
