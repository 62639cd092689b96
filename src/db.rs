use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::writer::{PersistenceError, RowInserter};

const INSERT_FILE_DATA: &str = "INSERT INTO file_data (filename, content) VALUES (?1, ?2)";

/// A stored `file_data` row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRow {
    pub id: i64,
    pub filename: String,
    pub content: String,
}

/// SQLite store backing the `file_data` table
pub struct FileDataStore {
    conn: Connection,
}

impl FileDataStore {
    /// Create a new in-memory database
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .context("Failed to create in-memory database")?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Open (or create) a database file
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database at {}", path.display()))?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn
            .execute_batch(
                r#"
                CREATE TABLE IF NOT EXISTS file_data (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    filename TEXT NOT NULL,
                    content TEXT NOT NULL
                );
                "#,
            )
            .context("Failed to initialize database schema")?;
        Ok(())
    }

    /// Get all rows in insertion order
    pub fn list_rows(&self) -> Result<Vec<FileRow>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, filename, content FROM file_data ORDER BY id")
            .context("Failed to prepare statement")?;

        let rows = stmt
            .query_map([], |row| {
                Ok(FileRow {
                    id: row.get(0)?,
                    filename: row.get(1)?,
                    content: row.get(2)?,
                })
            })
            .context("Failed to query file_data")?
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to collect file_data rows")?;

        Ok(rows)
    }

    pub fn row_count(&self) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM file_data", [], |row| row.get(0))
            .context("Failed to count file_data rows")?;
        Ok(count as u64)
    }

    #[cfg(test)]
    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl RowInserter for FileDataStore {
    fn insert_row(&self, filename: &str, content: &str) -> Result<(), PersistenceError> {
        self.conn.execute(INSERT_FILE_DATA, params![filename, content])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_empty() {
        let store = FileDataStore::new_in_memory().unwrap();
        assert_eq!(store.row_count().unwrap(), 0);
        assert!(store.list_rows().unwrap().is_empty());
    }

    #[test]
    fn test_insert_and_list() {
        let store = FileDataStore::new_in_memory().unwrap();
        store.insert_row("a.txt", "alpha").unwrap();
        store.insert_row("b.txt", "").unwrap();

        let rows = store.list_rows().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].filename, "a.txt");
        assert_eq!(rows[0].content, "alpha");
        assert_eq!(rows[1].filename, "b.txt");
        assert_eq!(rows[1].content, "");
        assert!(rows[0].id < rows[1].id);
    }

    #[test]
    fn test_duplicate_filenames_allowed() {
        let store = FileDataStore::new_in_memory().unwrap();
        store.insert_row("same.txt", "one").unwrap();
        store.insert_row("same.txt", "two").unwrap();
        assert_eq!(store.row_count().unwrap(), 2);
    }

    #[test]
    fn test_insert_failure_surfaces_sqlite_error() {
        let store = FileDataStore::new_in_memory().unwrap();
        store
            .connection()
            .execute_batch("DROP TABLE file_data;")
            .unwrap();

        let err = store.insert_row("a.txt", "alpha").unwrap_err();
        assert!(matches!(err, PersistenceError::Sqlite(_)));
        assert!(err.to_string().contains("file_data"));
    }

    #[test]
    fn test_reopen_file_keeps_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.db");

        {
            let store = FileDataStore::open(&path).unwrap();
            store.insert_row("kept.txt", "persisted").unwrap();
        }

        let store = FileDataStore::open(&path).unwrap();
        let rows = store.list_rows().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].filename, "kept.txt");
        assert_eq!(rows[0].content, "persisted");
    }
}
