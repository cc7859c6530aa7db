//! AES-256-GCM authenticated encryption of entry payloads.
//!
//! Each call to `encrypt` draws a fresh random 12-byte nonce. The nonce
//! travels next to the ciphertext as its own base64 field (`iv`) rather
//! than being prepended, matching the at-rest record layout:
//!
//! ```text
//! data = base64(ciphertext || 16-byte auth tag)
//! iv   = base64(12-byte nonce)
//! ```

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use super::kdf::SessionKey;
use crate::errors::{JournalError, Result};

/// Size of the AES-256-GCM nonce in bytes.
pub const NONCE_LEN: usize = 12;

/// Base64-encoded output of a single `encrypt` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedPayload {
    /// Ciphertext including the authentication tag.
    pub cipher: String,
    /// The nonce used for this ciphertext.
    pub iv: String,
}

/// Encrypt `plaintext` under `key` with a freshly generated nonce.
pub fn encrypt(key: &SessionKey, plaintext: &str) -> Result<EncryptedPayload> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| JournalError::EncryptionFailed(format!("invalid key length: {e}")))?;

    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext.as_bytes())
        .map_err(|e| JournalError::EncryptionFailed(format!("encryption error: {e}")))?;

    Ok(EncryptedPayload {
        cipher: BASE64.encode(ciphertext),
        iv: BASE64.encode(nonce),
    })
}

/// Decrypt a base64 ciphertext/nonce pair produced by `encrypt`.
///
/// Malformed base64, a nonce of the wrong size, a failed tag check and
/// non-UTF-8 plaintext all surface as `DecryptionFailed`.
pub fn decrypt(key: &SessionKey, cipher_b64: &str, iv_b64: &str) -> Result<String> {
    let ciphertext = BASE64
        .decode(cipher_b64)
        .map_err(|_| JournalError::DecryptionFailed)?;
    let iv = BASE64
        .decode(iv_b64)
        .map_err(|_| JournalError::DecryptionFailed)?;

    if iv.len() != NONCE_LEN {
        return Err(JournalError::DecryptionFailed);
    }
    let nonce = Nonce::from_slice(&iv);

    let cipher =
        Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|_| JournalError::DecryptionFailed)?;

    let plaintext = cipher
        .decrypt(nonce, ciphertext.as_slice())
        .map_err(|_| JournalError::DecryptionFailed)?;

    String::from_utf8(plaintext).map_err(|_| JournalError::DecryptionFailed)
}
