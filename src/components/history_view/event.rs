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

//! Input handling for the recently played view.

use crossterm::event::{Event, KeyCode};

use crate::{
    components::{HistoryView, HistoryViewAction},
    model::PlaylistHistoryItem,
};

impl HistoryView {
    pub(crate) fn process_event(
        &mut self,
        event: &Event,
        items: &[PlaylistHistoryItem],
    ) -> Option<HistoryViewAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => self.goto_next(items.len()),
            KeyCode::Char('k') | KeyCode::Up => self.goto_previous(items.len()),

            KeyCode::Char('p') => {
                return self.selected(items).cloned().map(HistoryViewAction::PlayAgain);
            }

            KeyCode::Enter => {
                return self
                    .selected(items)
                    .map(|item| HistoryViewAction::OpenLeague(item.league_id.clone()));
            }

            KeyCode::Char('x') if !items.is_empty() => return Some(HistoryViewAction::RequestClear),

            _ => {}
        }

        None
    }
}
