//! `cryptjournal search`: filter entries by title or body.

use super::list::plural;
use crate::cli::output;
use crate::cli::{unlock_journal, Cli};
use crate::errors::Result;

/// Execute the `search` command.
pub fn execute(cli: &Cli, query: &str) -> Result<()> {
    let (_journal, session) = unlock_journal(cli)?;

    let hits = session.search(query);
    output::info(&format!(
        "{} matching entr{}",
        hits.len(),
        plural(hits.len())
    ));
    output::print_entries_table(&hits);

    Ok(())
}
