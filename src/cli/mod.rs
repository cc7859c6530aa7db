//! CLI module: Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod editor;
pub mod output;

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::crypto::KdfParams;
use crate::errors::{JournalError, Result};
use crate::journal::{validate_password, Journal, Session};
use crate::storage::{FileScalarStore, RecordId, SqliteRecordStore};

/// Environment variable consulted before prompting for the password.
pub const PASSWORD_ENV: &str = "JOURNAL_PASSWORD";

/// A journal backed by the on-disk stores.
pub type DiskJournal = Journal<SqliteRecordStore, FileScalarStore>;

/// CryptJournal CLI: encrypted local journal.
#[derive(Parser)]
#[command(name = "cryptjournal", about = "Encrypted local journal", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Journal data directory (default: .journal, or `data_dir` in .journal.toml)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Write a new entry
    Write {
        /// Entry title
        #[arg(short, long)]
        title: String,
        /// Entry body (omit to pipe it in or open $EDITOR)
        #[arg(short, long)]
        body: Option<String>,
    },

    /// Edit an existing entry in place
    Edit {
        /// Entry id
        id: RecordId,
        /// New title (keeps the current one if omitted)
        #[arg(short, long)]
        title: Option<String>,
        /// New body (omit to pipe it in or open $EDITOR)
        #[arg(short, long)]
        body: Option<String>,
    },

    /// List all entries, newest first
    List,

    /// Show one entry
    Show {
        /// Entry id
        id: RecordId,
    },

    /// Search titles and bodies (case-insensitive)
    Search {
        /// Text to look for
        query: String,
    },

    /// Delete an entry
    Delete {
        /// Entry id
        id: RecordId,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Export the encrypted records as JSON
    Export {
        /// Output file path (prints to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Import encrypted records from a JSON export
    Import {
        /// Path to the export file
        file: String,
    },

    /// Erase every entry and the journal salt
    Clear {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Try a throwaway in-memory journal with sample entries
    Demo,
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Get the journal password, trying in order:
/// 1. `JOURNAL_PASSWORD` env var (scripting)
/// 2. Interactive prompt
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_password() -> Result<Zeroizing<String>> {
    if let Some(pw) = password_from_env() {
        return Ok(pw);
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter journal password")
        .allow_empty_password(true)
        .interact()
        .map_err(|e| JournalError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a password twice, used while the journal is still empty.
///
/// An empty journal accepts any password, so the confirmation is the
/// only guard against a typo locking the first entry away.
pub fn prompt_new_password() -> Result<Zeroizing<String>> {
    if let Some(pw) = password_from_env() {
        return validate_password(&pw, None);
    }

    output::info("This journal is empty. The password you choose now will lock every entry.");

    let password = Zeroizing::new(
        dialoguer::Password::new()
            .with_prompt("Choose journal password")
            .allow_empty_password(true)
            .interact()
            .map_err(|e| JournalError::CommandFailed(format!("password prompt: {e}")))?,
    );
    let confirm = Zeroizing::new(
        dialoguer::Password::new()
            .with_prompt("Confirm journal password")
            .allow_empty_password(true)
            .interact()
            .map_err(|e| JournalError::CommandFailed(format!("password prompt: {e}")))?,
    );

    validate_password(&password, Some(confirm.as_str()))
}

fn password_from_env() -> Option<Zeroizing<String>> {
    std::env::var(PASSWORD_ENV)
        .ok()
        .filter(|pw| !pw.is_empty())
        .map(Zeroizing::new)
}

/// Resolve the data directory from the CLI flag or settings.
///
/// Example: `<cwd>/.journal`
pub fn data_dir(cli: &Cli, settings: &Settings) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    let dir = cli.data_dir.as_deref().unwrap_or(&settings.data_dir);
    Ok(cwd.join(dir))
}

/// Resolved locations of the on-disk journal.
pub struct JournalFiles {
    pub data_dir: PathBuf,
    pub database: PathBuf,
    pub state: PathBuf,
    pub kdf: KdfParams,
}

impl JournalFiles {
    /// Whether `path` names the database or the state file.
    ///
    /// Both sides are made absolute and canonicalized as far as they
    /// exist, so `./.journal/../.journal/journal.db` still matches.
    pub fn is_journal_file(&self, path: &Path) -> Result<bool> {
        let target = resolve_path(path)?;
        Ok(target == resolve_path(&self.database)? || target == resolve_path(&self.state)?)
    }
}

/// Absolute form of `path` with the longest existing prefix canonicalized.
fn resolve_path(path: &Path) -> Result<PathBuf> {
    let absolute = std::env::current_dir()?.join(path);
    if let Ok(canonical) = absolute.canonicalize() {
        return Ok(canonical);
    }

    match (absolute.parent(), absolute.file_name()) {
        (Some(parent), Some(name)) => Ok(resolve_path(parent)?.join(name)),
        _ => Ok(absolute),
    }
}

/// Resolve the journal paths from the CLI flags and `.journal.toml`.
pub fn journal_files(cli: &Cli) -> Result<JournalFiles> {
    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;
    let dir = data_dir(cli, &settings)?;

    Ok(JournalFiles {
        database: settings.database_path(&dir),
        state: settings.state_path(&dir),
        kdf: settings.kdf_params(),
        data_dir: dir,
    })
}

/// Open the on-disk journal, creating the data directory if needed.
pub fn open_journal(cli: &Cli) -> Result<DiskJournal> {
    open_journal_at(&journal_files(cli)?)
}

/// Open the on-disk journal at already resolved paths.
pub fn open_journal_at(files: &JournalFiles) -> Result<DiskJournal> {
    let dir = &files.data_dir;
    if !dir.exists() {
        fs::create_dir_all(dir)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(dir, fs::Permissions::from_mode(0o700))?;
        }
        tracing::debug!(dir = %dir.display(), "created data directory");
    }

    let records = SqliteRecordStore::open(&files.database)?;
    let slots = FileScalarStore::open(&files.state)?;
    Ok(Journal::new(records, slots, files.kdf))
}

/// Open the journal and unlock a fresh session with the user's password.
pub fn unlock_journal(cli: &Cli) -> Result<(DiskJournal, Session)> {
    let mut journal = open_journal(cli)?;

    let password = if journal.is_empty()? {
        prompt_new_password()?
    } else {
        prompt_password()?
    };

    let mut session = Session::new();
    journal.unlock(&mut session, &password)?;
    Ok((journal, session))
}

/// Ask a yes/no question, defaulting to "no".
pub fn confirm(prompt: &str) -> Result<bool> {
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| JournalError::CommandFailed(format!("confirm prompt: {e}")))
}
