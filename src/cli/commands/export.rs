//! `cryptjournal export`: dump the encrypted records as JSON.
//!
//! The export is a ciphertext-level snapshot: a JSON array of
//! `{id, data, iv, created}` records. Reading it back requires the
//! original password and the same journal salt.

use std::fs;
use std::path::Path;

use crate::cli::output;
use crate::cli::{journal_files, open_journal_at, Cli};
use crate::errors::{JournalError, Result};

/// Execute the `export` command.
pub fn execute(cli: &Cli, output_path: Option<&str>) -> Result<()> {
    let files = journal_files(cli)?;
    let journal = open_journal_at(&files)?;

    let content = journal.export_records()?;
    let count = journal.record_count()?;

    match output_path {
        Some(dest) => {
            let dest_path = Path::new(dest);

            // Never overwrite the live journal files or any other database.
            if files.is_journal_file(dest_path)? {
                return Err(JournalError::CommandFailed(format!(
                    "refusing to export over the journal file {dest}"
                )));
            }
            if dest_path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("db"))
            {
                return Err(JournalError::CommandFailed(
                    "refusing to export over a .db file".into(),
                ));
            }

            fs::write(dest_path, &content).map_err(|e| {
                JournalError::CommandFailed(format!("failed to write export file: {e}"))
            })?;

            output::success(&format!("Exported {count} encrypted records to {dest}"));
            output::tip("The export is still encrypted; keep your password to read it.");
        }
        None => {
            // Write to stdout (no success message, just raw output).
            println!("{content}");
        }
    }

    Ok(())
}
