//! `cryptjournal write`: add a new entry.

use crate::cli::editor::read_body;
use crate::cli::output;
use crate::cli::{unlock_journal, Cli};
use crate::errors::Result;
use crate::journal::Entry;

/// Execute the `write` command.
pub fn execute(cli: &Cli, title: &str, body: Option<&str>) -> Result<()> {
    // Gather the body before asking for the password.
    let body = read_body(body, "")?;

    let (mut journal, mut session) = unlock_journal(cli)?;

    let entry = Entry::new(title.trim(), body);
    let id = journal.save_entry(&mut session, &entry)?;

    output::success(&format!(
        "Saved entry #{id} ({} total)",
        session.len()
    ));
    output::tip(&format!("Run `cryptjournal show {id}` to read it back."));

    Ok(())
}
