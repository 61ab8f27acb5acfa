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

//! League fixture loading.
//!
//! League data is exported ahead of time into JSON files, loose or bundled
//! in `.zip` archives. This module walks the configured fixture directories
//! with `WalkDir`, parses every `.json` file (and every `.json` entry of every
//! `.zip` file) it finds and returns the normalized leagues.
//!
//! A JSON fixture holds either a single league object or an array of them.
//! Files that cannot be read or parsed are logged and skipped, one bad export
//! does not prevent the rest of the catalog from loading.

use std::{
    fs::{self, File},
    io::Read,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use walkdir::WalkDir;
use zip::{ZipArchive, result::ZipError};

use crate::model::{
    League,
    league::{normalize_league, sort_leagues},
};

#[derive(Debug, Error)]
pub(crate) enum FixtureError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to open archive {}: {source}", path.display())]
    Archive {
        path: PathBuf,
        source: ZipError,
    },
}

/// File formats that can hold leagues.
#[derive(Debug, Clone, Copy, PartialEq)]
enum FixtureKind {
    Json,
    Zip,
}

impl FixtureKind {
    fn of(path: &Path) -> Option<Self> {
        let ext = path.extension()?;
        if ext.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else if ext.eq_ignore_ascii_case("zip") {
            Some(Self::Zip)
        } else {
            None
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FixtureFile {
    Many(Vec<League>),
    One(League),
}

/// Loads every league found beneath `dirs`, sorted by category then title.
///
/// Directories that do not exist are skipped with a warning.
pub(crate) fn load_leagues<P: AsRef<Path>>(dirs: &[P]) -> Vec<League> {
    let mut leagues = Vec::new();

    for dir in dirs {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            log::warn!("Fixture directory {} does not exist", dir.display());
            continue;
        }

        for entry in WalkDir::new(dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            let result = match FixtureKind::of(entry.path()) {
                Some(FixtureKind::Json) => load_file(entry.path()),
                Some(FixtureKind::Zip) => load_archive(entry.path()),
                None => continue,
            };

            match result {
                Ok(found) => {
                    log::debug!("Loaded {} leagues from {}", found.len(), entry.path().display());
                    leagues.extend(found);
                }
                Err(e) => log::warn!("Skipping fixture: {}", e),
            }
        }
    }

    sort_leagues(&mut leagues);

    log::info!("Loaded {} leagues", leagues.len());

    leagues
}

/// Parses a single fixture file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a league (or an
/// array of leagues).
pub(crate) fn load_file(path: &Path) -> Result<Vec<League>, FixtureError> {
    let json = fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_leagues(&json).map_err(|source| FixtureError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses every `.json` entry of a zip bundle.
///
/// Entries that cannot be read or parsed are logged and skipped, like loose
/// files.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not a zip archive.
pub(crate) fn load_archive(path: &Path) -> Result<Vec<League>, FixtureError> {
    let file = File::open(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let archive_error = |source: ZipError| FixtureError::Archive {
        path: path.to_path_buf(),
        source,
    };

    let mut archive = ZipArchive::new(file).map_err(archive_error)?;

    let mut leagues = Vec::new();
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index).map_err(archive_error)?;

        let name = entry.name().to_string();
        if !entry.is_file() || FixtureKind::of(Path::new(&name)) != Some(FixtureKind::Json) {
            continue;
        }

        let mut json = String::new();
        if let Err(e) = entry.read_to_string(&mut json) {
            log::warn!("Skipping {} in {}: {}", name, path.display(), e);
            continue;
        }

        match parse_leagues(&json) {
            Ok(found) => leagues.extend(found),
            Err(e) => log::warn!("Skipping {} in {}: {}", name, path.display(), e),
        }
    }

    Ok(leagues)
}

fn parse_leagues(json: &str) -> Result<Vec<League>, serde_json::Error> {
    let leagues = match serde_json::from_str(json)? {
        FixtureFile::Many(leagues) => leagues,
        FixtureFile::One(league) => vec![league],
    };

    Ok(leagues.into_iter().map(normalize_league).collect())
}
