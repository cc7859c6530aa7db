//! `cryptjournal delete`: remove an entry from the journal.

use crate::cli::output;
use crate::cli::{confirm, unlock_journal, Cli};
use crate::errors::{JournalError, Result};
use crate::storage::RecordId;

/// Execute the `delete` command.
pub fn execute(cli: &Cli, id: RecordId, force: bool) -> Result<()> {
    let (mut journal, mut session) = unlock_journal(cli)?;

    let title = session
        .entry(id)
        .map(|e| output::display_title(e).to_string())
        .ok_or(JournalError::EntryNotFound(id))?;

    // Unless --force is set, ask for confirmation before deleting.
    if !force && !confirm(&format!("Delete entry #{id} '{title}'?"))? {
        output::info("Cancelled.");
        return Ok(());
    }

    journal.delete_entry(&mut session, id)?;
    output::success(&format!("Deleted entry #{id} ({} left)", session.len()));

    Ok(())
}
