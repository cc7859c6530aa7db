//! The journal-wide salt.
//!
//! One 16-byte salt is generated the first time it is needed and kept
//! in the scalar slot store (base64) for the life of the journal. Every
//! key ever derived for this journal mixes in exactly this value, so
//! losing it makes all records unreadable even with the right password.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use rand::RngCore;

use crate::errors::{JournalError, Result};
use crate::storage::ScalarStore;

/// Length of the salt in bytes.
pub const SALT_LEN: usize = 16;

/// Name of the scalar slot that holds the salt.
pub const SALT_SLOT: &str = "journal_salt";

/// Generate a cryptographically random 16-byte salt.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill_bytes(&mut salt);
    salt
}

/// Return the persisted salt, creating and storing one on first use.
pub fn get_or_create_salt<K: ScalarStore + ?Sized>(slots: &mut K) -> Result<[u8; SALT_LEN]> {
    if let Some(encoded) = slots.get(SALT_SLOT)? {
        return decode_salt(&encoded);
    }

    let salt = generate_salt();
    slots.set(SALT_SLOT, &BASE64.encode(salt))?;
    tracing::debug!("generated new journal salt");
    Ok(salt)
}

/// Drop the persisted salt. The next `get_or_create_salt` mints a new one.
pub fn forget_salt<K: ScalarStore + ?Sized>(slots: &mut K) -> Result<()> {
    slots.remove(SALT_SLOT)
}

fn decode_salt(encoded: &str) -> Result<[u8; SALT_LEN]> {
    let bytes = BASE64
        .decode(encoded)
        .map_err(|e| JournalError::Storage(format!("persisted salt is not base64: {e}")))?;

    bytes.as_slice().try_into().map_err(|_| {
        JournalError::Storage(format!(
            "persisted salt has {} bytes, expected {SALT_LEN}",
            bytes.len()
        ))
    })
}
