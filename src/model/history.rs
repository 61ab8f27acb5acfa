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

//! Recently played playlists.
//!
//! This module keeps a short, most-recently-played-first list of playlists,
//! persisted as a JSON array under a single key of a [`KeyValueStore`].
//!
//! The in-memory list is always authoritative. Storage problems (unreadable
//! or corrupt data, a write over quota, a failed delete) are logged and
//! otherwise ignored, so none of the public operations can fail.

use std::collections::HashSet;

use chrono::Utc;

use crate::{model::PlaylistHistoryItem, storage::KeyValueStore};

pub(crate) const HISTORY_KEY: &str = "playlist-history";

pub(crate) const MAX_HISTORY_ITEMS: usize = 10;

pub(crate) struct PlaylistHistory {
    store: Box<dyn KeyValueStore>,
    items: Vec<PlaylistHistoryItem>,
}

impl PlaylistHistory {
    /// Creates the history, loading any previously persisted items.
    pub(crate) fn load(store: Box<dyn KeyValueStore>) -> Self {
        let items = read_items(store.as_ref());
        Self { store, items }
    }

    /// Most recently played first.
    pub(crate) fn items(&self) -> &[PlaylistHistoryItem] {
        &self.items
    }

    /// Records a play of `item`, stamped with the current time.
    pub(crate) fn add_to_history(&mut self, item: PlaylistHistoryItem) {
        self.add_to_history_at(item, Utc::now().timestamp_millis());
    }

    fn add_to_history_at(&mut self, item: PlaylistHistoryItem, played_at: i64) {
        let mut items = Vec::with_capacity(MAX_HISTORY_ITEMS + 1);
        items.extend(self.items.iter().filter(|existing| existing.id != item.id).cloned());
        items.insert(0, PlaylistHistoryItem { played_at, ..item });
        items.truncate(MAX_HISTORY_ITEMS);

        write_items(self.store.as_mut(), &items);
        self.items = items;
    }

    pub(crate) fn clear_history(&mut self) {
        self.items.clear();

        if let Err(e) = self.store.remove(HISTORY_KEY) {
            log::error!("Failed to remove playlist history: {}", e);
        }
    }

}

fn write_items(store: &mut dyn KeyValueStore, items: &[PlaylistHistoryItem]) {
    let json = match serde_json::to_string(items) {
        Ok(json) => json,
        Err(e) => {
            log::error!("Failed to serialise playlist history: {}", e);
            return;
        }
    };

    if let Err(e) = store.set(HISTORY_KEY, &json) {
        log::error!("Failed to save playlist history: {}", e);
    }
}

fn read_items(store: &dyn KeyValueStore) -> Vec<PlaylistHistoryItem> {
    let json = match store.get(HISTORY_KEY) {
        Ok(Some(json)) => json,
        Ok(None) => return vec![],
        Err(e) => {
            log::error!("Failed to read playlist history: {}", e);
            return vec![];
        }
    };

    match serde_json::from_str::<Vec<PlaylistHistoryItem>>(&json) {
        Ok(mut items) => {
            // First occurrence is the most recent play
            let mut seen = HashSet::new();
            items.retain(|item| seen.insert(item.id.clone()));
            items.truncate(MAX_HISTORY_ITEMS);
            items
        }
        Err(e) => {
            log::warn!("Ignoring malformed playlist history: {}", e);
            vec![]
        }
    }
}
