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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application (leagues,
//! their rounds and standings, and the record of a played playlist) as they
//! are read from fixture files and written to storage.
//!
//! Older fixture files use different field names for some values, these are
//! accepted via serde aliases so that every fixture deserializes into the
//! same shape. See [`league::normalize_league`] for the remaining clean-up.

pub(crate) mod history;
pub(crate) mod league;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct League {
    #[serde(default)]
    pub(crate) id: String,
    #[serde(alias = "name")]
    pub(crate) title: String,
    #[serde(default, alias = "type", alias = "group")]
    pub(crate) category: String,
    #[serde(default)]
    pub(crate) rounds: Vec<Round>,
    #[serde(default, alias = "standings")]
    pub(crate) league_standings: Vec<Standing>,
}

impl League {
    pub(crate) fn leader(&self) -> Option<&Standing> {
        league::top_standings(&self.league_standings, 1).into_iter().next()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Round {
    #[serde(default)]
    pub(crate) id: String,
    #[serde(alias = "title")]
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) description: Option<String>,
    #[serde(default, alias = "playlist")]
    pub(crate) playlist_url: Option<String>,
    #[serde(default)]
    pub(crate) submissions: Vec<Submission>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Submission {
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) artist: String,
    #[serde(default, alias = "submittedBy")]
    pub(crate) submitter: String,
    #[serde(default, alias = "votes")]
    pub(crate) points: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Standing {
    #[serde(alias = "player", alias = "user")]
    pub(crate) name: String,
    #[serde(default, alias = "score", alias = "totalPoints")]
    pub(crate) points: i64,
    #[serde(default)]
    pub(crate) rank: Option<u32>,
}

/// A playlist the user has played, as remembered in the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PlaylistHistoryItem {
    pub(crate) id: String,
    pub(crate) league_id: String,
    pub(crate) league_name: String,
    pub(crate) playlist_name: String,
    /// Epoch milliseconds.
    pub(crate) played_at: i64,
}

impl PlaylistHistoryItem {
    /// Builds a not-yet-played history entry for a league round.
    pub(crate) fn for_round(league: &League, round: &Round) -> Self {
        Self {
            id: format!("{}/{}", league.id, round.id),
            league_id: league.id.clone(),
            league_name: league.title.clone(),
            playlist_name: round.name.clone(),
            played_at: 0,
        }
    }
}
