//! SQLite-backed record store.
//!
//! Records live in a single `entries` table of the journal database.
//! `AUTOINCREMENT` makes SQLite keep a high-water mark per table, so ids
//! only ever grow and are never reused after a delete or a clear.

use std::path::Path;

use rusqlite::{params, Connection};

use super::{Record, RecordId, RecordStore};
use crate::errors::Result;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS entries (
    id      INTEGER PRIMARY KEY AUTOINCREMENT,
    data    TEXT NOT NULL,
    iv      TEXT NOT NULL,
    created TEXT NOT NULL
);";

/// Record store on top of a SQLite database file.
pub struct SqliteRecordStore {
    conn: Connection,
}

impl SqliteRecordStore {
    /// Open (or create) the journal database at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        let store = Self::init(Connection::open(path)?)?;

        // Owner-only. The schema write above guarantees the file exists.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(path, perms)?;
        }

        Ok(store)
    }

    /// A throwaway database that lives only as long as the store.
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }
}

impl RecordStore for SqliteRecordStore {
    fn put(&mut self, record: &Record) -> Result<RecordId> {
        let tx = self.conn.transaction()?;
        let id = match record.id {
            Some(id) => {
                tx.execute(
                    "INSERT OR REPLACE INTO entries (id, data, iv, created)
                     VALUES (?1, ?2, ?3, ?4)",
                    params![id, record.data, record.iv, record.created],
                )?;
                id
            }
            None => {
                tx.execute(
                    "INSERT INTO entries (data, iv, created) VALUES (?1, ?2, ?3)",
                    params![record.data, record.iv, record.created],
                )?;
                tx.last_insert_rowid()
            }
        };
        tx.commit()?;
        Ok(id)
    }

    fn get_all(&self) -> Result<Vec<Record>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, data, iv, created FROM entries ORDER BY id ASC")?;

        let rows = stmt.query_map([], |row| {
            Ok(Record {
                id: Some(row.get(0)?),
                data: row.get(1)?,
                iv: row.get(2)?,
                created: row.get(3)?,
            })
        })?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    fn delete(&mut self, id: RecordId) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM entries WHERE id = ?1", params![id])?;
        tx.commit()?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM entries", [])?;
        tx.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(data: &str) -> Record {
        Record::new(None, data.to_string(), "aXY=".to_string())
    }

    #[test]
    fn open_creates_database() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("journal.db");
        SqliteRecordStore::open(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn insert_assigns_increasing_ids() {
        let mut store = SqliteRecordStore::open_in_memory().unwrap();
        assert_eq!(store.put(&record("a")).unwrap(), 1);
        assert_eq!(store.put(&record("b")).unwrap(), 2);
    }

    #[test]
    fn put_with_id_replaces_in_place() {
        let mut store = SqliteRecordStore::open_in_memory().unwrap();
        let id = store.put(&record("old")).unwrap();

        let mut replacement = record("new");
        replacement.id = Some(id);
        assert_eq!(store.put(&replacement).unwrap(), id);

        let all = store.get_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].data, "new");
        assert_eq!(all[0].id, Some(id));
    }

    #[test]
    fn deleted_ids_are_not_reused() {
        let mut store = SqliteRecordStore::open_in_memory().unwrap();
        store.put(&record("a")).unwrap();
        let second = store.put(&record("b")).unwrap();
        store.delete(second).unwrap();
        assert_eq!(store.put(&record("c")).unwrap(), second + 1);
    }

    #[test]
    fn delete_missing_id_is_noop() {
        let mut store = SqliteRecordStore::open_in_memory().unwrap();
        store.put(&record("a")).unwrap();
        store.delete(42).unwrap();
        assert_eq!(store.get_all().unwrap().len(), 1);
    }

    #[test]
    fn clear_removes_everything() {
        let mut store = SqliteRecordStore::open_in_memory().unwrap();
        store.put(&record("a")).unwrap();
        store.put(&record("b")).unwrap();
        store.clear().unwrap();
        assert!(store.get_all().unwrap().is_empty());
    }

    #[test]
    fn records_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("journal.db");
        {
            let mut store = SqliteRecordStore::open(&path).unwrap();
            store.put(&record("persisted")).unwrap();
        }
        let store = SqliteRecordStore::open(&path).unwrap();
        let all = store.get_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].data, "persisted");
    }

    #[cfg(unix)]
    #[test]
    fn database_has_restrictive_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("journal.db");
        let _store = SqliteRecordStore::open(&path).unwrap();

        let perms = std::fs::metadata(&path).unwrap().permissions();
        assert_eq!(perms.mode() & 0o777, 0o600);
    }
}
