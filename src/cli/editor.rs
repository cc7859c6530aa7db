//! Entry body input: command-line flag, piped stdin, or an editor.
//!
//! The editor path writes the body to an owner-only temp file, launches
//! `$VISUAL` / `$EDITOR` / `vi`, reads the result back, and zero-fills
//! the file before removing it.

use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use zeroize::Zeroize;

use crate::errors::{JournalError, Result};

/// Resolve an entry body from, in order: `flag`, piped stdin, an editor
/// opened on `initial`.
///
/// Empty piped input supplies nothing, so `initial` is kept.
pub fn read_body(flag: Option<&str>, initial: &str) -> Result<String> {
    if let Some(body) = flag {
        return Ok(body.to_string());
    }

    if !io::stdin().is_terminal() {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        let body = piped_body(&buf, initial);
        buf.zeroize();
        return Ok(body);
    }

    compose_in_editor(initial)
}

fn piped_body(piped: &str, initial: &str) -> String {
    let body = piped.trim_end();
    if body.is_empty() {
        initial.to_string()
    } else {
        body.to_string()
    }
}

/// Open the user's editor on `initial` and return what they saved.
pub fn compose_in_editor(initial: &str) -> Result<String> {
    let tmp_path = write_temp_file(initial)?;
    let editor = find_editor();

    let status = Command::new(&editor).arg(&tmp_path).status().map_err(|e| {
        secure_delete(&tmp_path);
        JournalError::EditorError(format!("failed to launch '{editor}': {e}"))
    })?;

    if !status.success() {
        secure_delete(&tmp_path);
        return Err(JournalError::EditorError(format!(
            "editor exited with code {}",
            status.code().unwrap_or(-1)
        )));
    }

    let content = fs::read_to_string(&tmp_path)
        .map_err(|e| JournalError::EditorError(format!("failed to read edited file: {e}")));
    secure_delete(&tmp_path);

    let mut content = content?;
    let body = content.trim_end().to_string();
    content.zeroize();
    Ok(body)
}

/// Write `contents` to a fresh owner-only temp file and return its path.
fn write_temp_file(contents: &str) -> Result<PathBuf> {
    // Unique per process and instant.
    let filename = format!(
        "cryptjournal-{}-{}.md",
        std::process::id(),
        chrono::Utc::now().timestamp_nanos_opt().unwrap_or(0)
    );
    let tmp_path = std::env::temp_dir().join(filename);

    // Create with restrictive permissions atomically (no TOCTOU race).
    #[cfg(unix)]
    let mut file = {
        use std::os::unix::fs::OpenOptionsExt;
        fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .mode(0o600)
            .open(&tmp_path)
            .map_err(|e| JournalError::EditorError(format!("failed to create temp file: {e}")))?
    };

    #[cfg(not(unix))]
    let mut file = fs::File::create(&tmp_path)
        .map_err(|e| JournalError::EditorError(format!("failed to create temp file: {e}")))?;

    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(tmp_path)
}

/// Find the user's preferred editor.
fn find_editor() -> String {
    ["VISUAL", "EDITOR"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|editor| !editor.is_empty())
        .unwrap_or_else(|| "vi".to_string())
}

/// Overwrite a file's contents with zeros before deleting it.
/// Best-effort: failures are silently ignored.
fn secure_delete(path: &Path) {
    if let Ok(metadata) = fs::metadata(path) {
        let len = metadata.len() as usize;
        if len > 0 {
            if let Ok(mut file) = fs::OpenOptions::new().write(true).open(path) {
                let _ = file.write_all(&vec![0u8; len]);
                let _ = file.flush();
            }
        }
    }
    let _ = fs::remove_file(path);
}
