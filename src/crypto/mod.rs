//! Cryptographic primitives for CryptJournal.
//!
//! This module provides:
//! - AES-256-GCM encryption and decryption of entry payloads (`encryption`)
//! - PBKDF2-HMAC-SHA256 password-based key derivation (`kdf`)
//! - The persisted journal salt (`salt`)

pub mod encryption;
pub mod kdf;
pub mod salt;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, derive_key, ...};
pub use encryption::{decrypt, encrypt, EncryptedPayload};
pub use kdf::{derive_key, KdfParams, SessionKey};
pub use salt::{forget_salt, generate_salt, get_or_create_salt, SALT_LEN, SALT_SLOT};
