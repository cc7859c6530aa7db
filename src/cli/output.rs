//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::journal::Entry;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Title shown for an entry, with a placeholder for blank titles.
pub fn display_title(entry: &Entry) -> &str {
    if entry.title.trim().is_empty() {
        "Untitled"
    } else {
        &entry.title
    }
}

/// Entry date as local wall-clock time, or the raw string if it does not parse.
pub fn display_date(entry: &Entry) -> String {
    entry.timestamp().map_or_else(
        || entry.date.clone(),
        |ts| {
            ts.with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M")
                .to_string()
        },
    )
}

/// Print a table of entries (ID, Title, Date) in the order given.
pub fn print_entries_table(entries: &[&Entry]) {
    if entries.is_empty() {
        info("No entries yet.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Title", "Date"]);

    for e in entries {
        table.add_row(vec![
            e.id.map(|id| id.to_string()).unwrap_or_default(),
            display_title(e).to_string(),
            display_date(e),
        ]);
    }

    println!("{table}");
}

/// Print one entry in full.
pub fn print_entry(entry: &Entry) {
    println!("{}", style(display_title(entry)).bold());
    println!(
        "{}",
        style(format!(
            "#{}  {}",
            entry.id.unwrap_or_default(),
            display_date(entry)
        ))
        .dim()
    );
    println!();
    println!("{}", entry.body);
}
