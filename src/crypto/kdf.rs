//! Password-based key derivation using PBKDF2-HMAC-SHA256.
//!
//! The derived key is deterministic for a given (password, salt,
//! iterations) triple. That determinism is the whole password check:
//! no verifier is stored anywhere, a password is "correct" when every
//! stored record decrypts under the key it yields.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::{JournalError, Result};

/// Length of the derived key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// Default PBKDF2 iteration count.
pub const DEFAULT_ITERATIONS: u32 = 200_000;

/// Lowest iteration count accepted by `derive_key`.
const MIN_ITERATIONS: u32 = 1_000;

/// Tunable PBKDF2 parameters.
///
/// Changing `iterations` for an existing journal changes every derived
/// key, so its records will no longer unlock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    pub iterations: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

/// A 256-bit AES-GCM key held only for the lifetime of an unlocked
/// session. Zeroed on drop and deliberately not serializable.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SessionKey {
    bytes: [u8; KEY_LEN],
}

impl SessionKey {
    pub(crate) fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    pub(crate) fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

impl std::fmt::Debug for SessionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionKey(<redacted>)")
    }
}

/// Derive the session key from a password and the journal salt.
pub fn derive_key(password: &str, salt: &[u8], params: &KdfParams) -> Result<SessionKey> {
    if params.iterations < MIN_ITERATIONS {
        return Err(JournalError::KeyDerivationFailed(format!(
            "PBKDF2 iterations must be at least {MIN_ITERATIONS} (got {})",
            params.iterations
        )));
    }

    let mut bytes = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, params.iterations, &mut bytes);

    let key = SessionKey::from_bytes(bytes);
    bytes.zeroize();
    Ok(key)
}
