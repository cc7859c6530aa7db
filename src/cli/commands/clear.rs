//! `cryptjournal clear`: erase all local journal data.

use crate::cli::output;
use crate::cli::{confirm, open_journal, Cli};
use crate::errors::Result;
use crate::journal::Session;

/// Execute the `clear` command.
pub fn execute(cli: &Cli, force: bool) -> Result<()> {
    if !force && !confirm("Erase all local journal data? This cannot be undone")? {
        output::info("Cancelled.");
        return Ok(());
    }

    let mut journal = open_journal(cli)?;
    let count = journal.record_count()?;
    journal.clear_all(&mut Session::new())?;

    output::success(&format!("Erased {count} entries and the journal salt."));
    output::tip("The next password you use starts a new journal.");

    Ok(())
}
