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

//! Input handling and event processing for the league table.
//!
//! This module maps raw terminal keyboard events to row navigation within
//! the current page, and to the table actions (open a league, change page)
//! that the application applies.

use crossterm::event::{Event, KeyCode};

use crate::components::{LeagueTable, LeagueTableAction};

impl LeagueTable {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<LeagueTableAction> {
        if let Some(page) = self.pagination.process_event(event) {
            return Some(LeagueTableAction::GotoPage(page));
        }

        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => self.goto_next(),
            KeyCode::Char('k') | KeyCode::Up => self.goto_previous(),
            KeyCode::Char('g') => self.select_first_row(),
            KeyCode::Char('G') => self.goto_last(),

            KeyCode::Enter => {
                return self
                    .selected_league()
                    .map(|league| LeagueTableAction::OpenLeague(league.id.clone()));
            }

            _ => {}
        }

        None
    }
}
