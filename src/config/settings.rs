use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::crypto::kdf::{KdfParams, DEFAULT_ITERATIONS};
use crate::errors::{JournalError, Result};

/// Project-level configuration, loaded from `.journal.toml`.
///
/// Every field has a sensible default so CryptJournal works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory (relative to project root) holding the journal files.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// File name of the SQLite record store inside `data_dir`.
    #[serde(default = "default_database_file")]
    pub database_file: String,

    /// File name of the scalar slots (salt) inside `data_dir`.
    #[serde(default = "default_state_file")]
    pub state_file: String,

    /// PBKDF2 iteration count (default: 200 000).
    #[serde(default = "default_kdf_iterations")]
    pub kdf_iterations: u32,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_data_dir() -> String {
    ".journal".to_string()
}

fn default_database_file() -> String {
    "journal.db".to_string()
}

fn default_state_file() -> String {
    "state.json".to_string()
}

fn default_kdf_iterations() -> u32 {
    DEFAULT_ITERATIONS
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            database_file: default_database_file(),
            state_file: default_state_file(),
            kdf_iterations: default_kdf_iterations(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the project root.
    pub const FILE_NAME: &'static str = ".journal.toml";

    /// Load settings from `<project_dir>/.journal.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            JournalError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Full path of the record database inside `data_dir`.
    ///
    /// Example: `project_dir/.journal/journal.db`
    pub fn database_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.database_file)
    }

    /// Full path of the scalar slot file inside `data_dir`.
    pub fn state_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.state_file)
    }

    /// Convert the KDF settings into crypto-layer params.
    pub fn kdf_params(&self) -> KdfParams {
        KdfParams {
            iterations: self.kdf_iterations,
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────
