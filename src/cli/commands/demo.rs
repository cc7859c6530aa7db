//! `cryptjournal demo`: a throwaway journal that lives in memory.
//!
//! Runs the real unlock/save path against in-memory stores so nothing
//! in the data directory is read or written.

use chrono::{Duration, SecondsFormat, Utc};

use crate::cli::output;
use crate::crypto::KdfParams;
use crate::errors::Result;
use crate::journal::{Entry, Journal, Session};
use crate::storage::{MemoryRecordStore, MemoryScalarStore};

const DEMO_PASSWORD: &str = "demo";

/// Execute the `demo` command.
pub fn execute() -> Result<()> {
    let mut journal = Journal::new(
        MemoryRecordStore::new(),
        MemoryScalarStore::new(),
        KdfParams::default(),
    );
    let mut session = Session::new();
    journal.unlock(&mut session, DEMO_PASSWORD)?;

    for entry in sample_entries() {
        journal.save_entry(&mut session, &entry)?;
    }

    output::info("Demo journal (in memory, nothing is saved)");
    output::print_entries_table(&session.entries());
    println!();
    for entry in session.entries() {
        output::print_entry(entry);
        println!();
    }
    output::tip("Run `cryptjournal write --title <TITLE>` to start your own journal.");

    Ok(())
}

fn sample_entries() -> Vec<Entry> {
    let now = Utc::now();
    let stamp = |t: chrono::DateTime<Utc>| t.to_rfc3339_opts(SecondsFormat::Millis, true);

    vec![
        Entry {
            id: None,
            title: "Welcome to the demo!".into(),
            body: "This is a temporary, in-memory journal. Every entry is encrypted \
                   exactly as it would be on disk, then thrown away on exit."
                .into(),
            date: stamp(now),
        },
        Entry {
            id: None,
            title: "Markdown notes".into(),
            body: "Bodies are plain text, so **bold** and *italic* markers are kept as written."
                .into(),
            date: stamp(now - Duration::days(1)),
        },
    ]
}
