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

//! Recently played view.
//!
//! Lists the playlist history, newest first. The items themselves are owned
//! by [`PlaylistHistory`](crate::model::history::PlaylistHistory), this view
//! only keeps the selection.

mod event;
mod render;

use ratatui::widgets::ListState;

use crate::model::PlaylistHistoryItem;

#[derive(Debug, PartialEq)]
pub(crate) enum HistoryViewAction {
    PlayAgain(PlaylistHistoryItem),
    OpenLeague(String),
    RequestClear,
}

#[derive(Default)]
pub(crate) struct HistoryView {
    pub(crate) list_state: ListState,
}

impl HistoryView {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Resets the selection after the history changed.
    pub(crate) fn reset(&mut self, len: usize) {
        self.list_state.select((len > 0).then_some(0));
    }

    fn selected<'a>(&self, items: &'a [PlaylistHistoryItem]) -> Option<&'a PlaylistHistoryItem> {
        items.get(self.list_state.selected()?)
    }

    fn goto_next(&mut self, len: usize) {
        if len == 0 { return; }
        let i = match self.list_state.selected() {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn goto_previous(&mut self, len: usize) {
        if len == 0 { return; }
        let i = match self.list_state.selected() {
            Some(i) => if i == 0 { len - 1 } else { i - 1 },
            None => 0,
        };
        self.list_state.select(Some(i));
    }
}
