use thiserror::Error;

use crate::storage::RecordId;

/// All errors that can occur in CryptJournal.
#[derive(Debug, Error)]
pub enum JournalError {
    // --- Credential errors ---
    #[error("Enter a password")]
    EmptyPassword,

    #[error("Password and confirmation do not match")]
    PasswordMismatch,

    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// The only decryption signal: a wrong key and a tampered record
    /// are indistinguishable.
    #[error("Wrong password or corrupted entries")]
    DecryptionFailed,

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    // --- Session errors ---
    #[error("Journal is locked; unlock it with your password first")]
    Locked,

    #[error("Entry {0} not found")]
    EntryNotFound(RecordId),

    // --- Storage errors ---
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Import failed: {0}")]
    ImportFormat(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("Editor error: {0}")]
    EditorError(String),
}

impl From<rusqlite::Error> for JournalError {
    fn from(e: rusqlite::Error) -> Self {
        JournalError::Storage(e.to_string())
    }
}

/// Convenience type alias for CryptJournal results.
pub type Result<T> = std::result::Result<T, JournalError>;
