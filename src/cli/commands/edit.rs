//! `cryptjournal edit`: rewrite an entry in place.
//!
//! Unspecified fields keep their current value. The entry is re-dated
//! to now and re-encrypted under a fresh nonce, keeping its id.

use crate::cli::editor::read_body;
use crate::cli::output;
use crate::cli::{unlock_journal, Cli};
use crate::errors::{JournalError, Result};
use crate::journal::Entry;
use crate::storage::RecordId;

/// Execute the `edit` command.
pub fn execute(cli: &Cli, id: RecordId, title: Option<&str>, body: Option<&str>) -> Result<()> {
    let (mut journal, mut session) = unlock_journal(cli)?;

    let current = session
        .entry(id)
        .ok_or(JournalError::EntryNotFound(id))?;

    let title = title.map_or_else(|| current.title.clone(), |t| t.trim().to_string());
    let body = read_body(body, &current.body)?;

    if current.title == title && current.body == body {
        output::info("No changes detected.");
        return Ok(());
    }

    let mut updated = Entry::new(title, body);
    updated.id = Some(id);

    journal.save_entry(&mut session, &updated)?;
    output::success(&format!("Updated entry #{id}"));

    Ok(())
}
