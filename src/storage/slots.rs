//! File-backed scalar slots.
//!
//! A tiny JSON object (`{"journal_salt": "..."}`) kept next to the
//! journal database. Every mutation rewrites the whole file atomically.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::ScalarStore;
use crate::errors::{JournalError, Result};

/// Scalar store persisted as a JSON object on disk.
pub struct FileScalarStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileScalarStore {
    /// Load the slots at `path`. A missing file means no slots yet.
    pub fn open(path: &Path) -> Result<Self> {
        let values = if path.exists() {
            let contents = fs::read_to_string(path)?;
            serde_json::from_str(&contents).map_err(|e| {
                JournalError::Storage(format!("failed to parse {}: {e}", path.display()))
            })?
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            path: path.to_path_buf(),
            values,
        })
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write to a temp file in the same directory, then rename over the
    /// target so readers never see a half-written file.
    fn persist(&self) -> Result<()> {
        let json = serde_json::to_vec_pretty(&self.values)
            .map_err(|e| JournalError::SerializationError(format!("scalar slots: {e}")))?;

        let parent = self.path.parent().unwrap_or(Path::new("."));
        let tmp_path = parent.join(format!(
            ".{}.tmp",
            self.path.file_name().unwrap_or_default().to_string_lossy()
        ));

        #[cfg(unix)]
        let mut file = {
            use std::os::unix::fs::OpenOptionsExt;
            fs::OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&tmp_path)?
        };

        #[cfg(not(unix))]
        let mut file = fs::File::create(&tmp_path)?;

        file.write_all(&json)?;
        file.sync_all()?;
        drop(file);

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl ScalarStore for FileScalarStore {
    fn get(&self, name: &str) -> Result<Option<String>> {
        Ok(self.values.get(name).cloned())
    }

    fn set(&mut self, name: &str, value: &str) -> Result<()> {
        self.values.insert(name.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, name: &str) -> Result<()> {
        if self.values.remove(name).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}
