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

//! Key-value persistence.
//!
//! This module defines the small string-keyed storage interface used by
//! anything that needs to survive between sessions, such as the playlist
//! history.
//!
//! Two stores are provided:
//!
//! * [`SqliteStore`] - a single `kv` table in an SQLite database file.
//! * [`MemoryStore`] - a `HashMap`, used in tests and as a fallback when the
//!   database file cannot be opened.
//!
//! Both stores enforce the same value size quota, so a caller sees the same
//! failure modes regardless of which one is in use.

mod sqlite;

use std::collections::HashMap;

use thiserror::Error;

pub(crate) use sqlite::SqliteStore;

/// Largest value, in bytes, that a store will accept for a single key.
pub(crate) const VALUE_QUOTA: usize = 5 * 1024 * 1024;

#[derive(Debug, Error)]
pub(crate) enum StorageError {
    #[error("storage database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("value for key '{key}' is {len} bytes, quota is {quota} bytes")]
    QuotaExceeded {
        key: String,
        len: usize,
        quota: usize,
    },
}

/// String-keyed, string-valued storage.
pub(crate) trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

fn check_quota(key: &str, value: &str, quota: usize) -> Result<(), StorageError> {
    if value.len() > quota {
        return Err(StorageError::QuotaExceeded {
            key: key.to_string(),
            len: value.len(),
            quota,
        });
    }

    Ok(())
}

pub(crate) struct MemoryStore {
    entries: HashMap<String, String>,
    quota: usize,
}

impl MemoryStore {
    pub(crate) fn new() -> Self {
        Self {
            entries: HashMap::new(),
            quota: VALUE_QUOTA,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_quota(quota: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        check_quota(key, value, self.quota)?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}
