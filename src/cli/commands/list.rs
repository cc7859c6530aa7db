//! `cryptjournal list`: display all entries in a table.

use crate::cli::output;
use crate::cli::{unlock_journal, Cli};
use crate::errors::Result;

/// Execute the `list` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let (_journal, session) = unlock_journal(cli)?;

    let entries = session.entries();
    output::info(&format!("{} entr{}", entries.len(), plural(entries.len())));
    output::print_entries_table(&entries);

    if entries.is_empty() {
        output::tip("Run `cryptjournal write --title <TITLE>` to add your first entry.");
    }

    Ok(())
}

pub(crate) fn plural(n: usize) -> &'static str {
    if n == 1 {
        "y"
    } else {
        "ies"
    }
}
