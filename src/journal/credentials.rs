//! Password input checks that run before any crypto or storage work.

use zeroize::Zeroizing;

use crate::errors::{JournalError, Result};

/// Validate a submitted password and optional confirmation.
///
/// Both values are trimmed. An empty password is rejected; a non-empty
/// confirmation must equal the password. Returns the trimmed password.
pub fn validate_password(password: &str, confirm: Option<&str>) -> Result<Zeroizing<String>> {
    let password = password.trim();
    if password.is_empty() {
        return Err(JournalError::EmptyPassword);
    }

    if let Some(confirm) = confirm.map(str::trim) {
        if !confirm.is_empty() && confirm != password {
            return Err(JournalError::PasswordMismatch);
        }
    }

    Ok(Zeroizing::new(password.to_string()))
}
