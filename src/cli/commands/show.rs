//! `cryptjournal show`: print one entry.

use crate::cli::output;
use crate::cli::{unlock_journal, Cli};
use crate::errors::{JournalError, Result};
use crate::storage::RecordId;

/// Execute the `show` command.
pub fn execute(cli: &Cli, id: RecordId) -> Result<()> {
    let (_journal, session) = unlock_journal(cli)?;

    let entry = session.entry(id).ok_or(JournalError::EntryNotFound(id))?;
    output::print_entry(entry);

    Ok(())
}
