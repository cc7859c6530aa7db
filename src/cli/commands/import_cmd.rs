//! `cryptjournal import`: load encrypted records from an export file.
//!
//! Records are upserted verbatim, keeping their ids. No password is
//! needed; the records stay unreadable until unlocked with the password
//! they were written under.

use std::fs;
use std::path::Path;

use crate::cli::output;
use crate::cli::{open_journal, Cli};
use crate::errors::{JournalError, Result};
use crate::journal::Session;

/// Execute the `import` command.
pub fn execute(cli: &Cli, file_path: &str) -> Result<()> {
    let source = Path::new(file_path);

    if !source.exists() {
        return Err(JournalError::CommandFailed(format!(
            "import file not found: {}",
            source.display()
        )));
    }

    let content = fs::read_to_string(source)
        .map_err(|e| JournalError::CommandFailed(format!("failed to read file: {e}")))?;

    let mut journal = open_journal(cli)?;
    let summary = journal.import_records(&mut Session::new(), &content)?;

    if summary.skipped > 0 {
        output::warning(&format!(
            "Skipped {} elements without `data` and `iv`.",
            summary.skipped
        ));
    }

    if summary.imported == 0 {
        output::warning("No records found in the import file.");
        return Ok(());
    }

    output::success(&format!(
        "Imported {} records from {}",
        summary.imported,
        source.display()
    ));
    output::tip("Unlock with the password these records were written under.");

    Ok(())
}
