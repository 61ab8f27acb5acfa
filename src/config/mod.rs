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

//! Application configuration.
//!
//! This module manages the application configuration file, and derives the
//! locations of the files kept alongside it (history database, log file).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "leaguedeck";

const DEFAULT_HISTORY_DB: &str = "history.db";
const LOG_FILE: &str = "leaguedeck.log";

pub(crate) const DEFAULT_PAGE_SIZE: usize = 20;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    pub fixture_dirs: Vec<String>,
    pub page_size: usize,
    /// Relative paths are resolved against the configuration directory.
    pub history_db: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            fixture_dirs: vec![],
            page_size: DEFAULT_PAGE_SIZE,
            history_db: DEFAULT_HISTORY_DB.to_string(),
        }
    }
}

impl AppConfig {
    pub(crate) fn history_db_path(&self) -> PathBuf {
        resolve(&self.history_db)
    }
}

pub fn load_config() -> AppConfig {
    match confy::load(CONFIG_NAME, None) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("Using default configuration: {}", e);
            AppConfig::default()
        }
    }
}

pub fn log_file_path() -> PathBuf {
    resolve(LOG_FILE)
}

/// Directory holding the configuration file, falling back to the working
/// directory when it cannot be determined.
fn config_dir() -> PathBuf {
    confy::get_configuration_file_path(CONFIG_NAME, None)
        .ok()
        .and_then(|path| path.parent().map(|dir| dir.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn resolve(file: &str) -> PathBuf {
    let path = PathBuf::from(file);
    if path.is_absolute() {
        path
    } else {
        config_dir().join(path)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn should_fill_missing_fields_with_defaults() {
        let cfg: AppConfig = serde_json::from_str(r#"{ "fixture_dirs": ["/data/leagues"] }"#).unwrap();
        assert_eq!(cfg.fixture_dirs, ["/data/leagues"]);
        assert_eq!(cfg.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(cfg.history_db, DEFAULT_HISTORY_DB);
        assert_eq!(cfg.version, 1);
    }

    #[test]
    fn should_keep_absolute_history_path() {
        let cfg = AppConfig {
            history_db: "/var/lib/leaguedeck/history.db".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(cfg.history_db_path(), PathBuf::from("/var/lib/leaguedeck/history.db"));
    }

    #[test]
    fn should_resolve_relative_history_path() {
        let path = AppConfig::default().history_db_path();
        assert!(path.ends_with(DEFAULT_HISTORY_DB));
    }
}
