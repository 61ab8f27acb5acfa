// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! SQLite backed key-value store.
//!
//! # Tables
//!
//! * `kv` - one row per key, the value stored as text.

use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};

use crate::storage::{KeyValueStore, StorageError, VALUE_QUOTA, check_quota};

pub(crate) struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (creating if necessary) the store database at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened, if WAL mode cannot be
    /// enabled, or if the schema cannot be created.
    pub(crate) fn open(path: &Path) -> Result<Self, StorageError> {
        let conn = Connection::open(path)?;

        // Returns the resulting mode as a row, so it can't go through
        // execute_batch
        let journal_mode: String = conn.query_row("PRAGMA journal_mode = WAL", [], |r| r.get(0))?;
        if journal_mode != "wal" {
            log::warn!("WAL unavailable for {}, journal mode is {}", path.display(), journal_mode);
        }

        conn.execute_batch(
            "
            PRAGMA synchronous = NORMAL;

            CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY NOT NULL,
                value TEXT NOT NULL
            );
        ",
        )?;

        Ok(Self { conn })
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut stmt = self.conn.prepare_cached("SELECT value FROM kv WHERE key = ?1")?;
        let value = stmt.query_row(params![key], |r| r.get(0)).optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        check_quota(key, value, VALUE_QUOTA)?;

        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )?;
        stmt.execute(params![key, value])?;

        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let mut stmt = self.conn.prepare_cached("DELETE FROM kv WHERE key = ?1")?;
        stmt.execute(params![key])?;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn should_persist_values_across_connections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.db");

        {
            let mut store = SqliteStore::open(&path).unwrap();
            store.set("greeting", "hello").unwrap();
            store.set("greeting", "hello again").unwrap();
            store.set("other", "value").unwrap();
            store.remove("other").unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(store.get("greeting").unwrap().as_deref(), Some("hello again"));
        assert_eq!(store.get("other").unwrap(), None);
    }

    #[test]
    fn should_reject_values_over_quota() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SqliteStore::open(&dir.path().join("store.db")).unwrap();

        let big = "x".repeat(VALUE_QUOTA + 1);
        let err = store.set("big", &big).unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { .. }));
        assert_eq!(store.get("big").unwrap(), None);
    }
}
