//! Journal module: the encrypted-entry persistence core.
//!
//! This module provides:
//! - `Entry` and its encryptable payload (`entry`)
//! - Password input validation (`credentials`)
//! - The all-or-nothing decrypted `EntryCache` (`cache`)
//! - The caller-owned Locked/Unlocked `Session` (`session`)
//! - `Journal`, which runs unlock, save, delete, clear, export and import (`store`)

pub mod cache;
pub mod credentials;
pub mod entry;
pub mod session;
pub mod store;

// Re-export the most commonly used items.
pub use cache::EntryCache;
pub use credentials::validate_password;
pub use entry::Entry;
pub use session::Session;
pub use store::{ImportSummary, Journal};
