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

//! League detail view.
//!
//! Shows a single league: a podium of the top standings, the full standings,
//! and the league's rounds as an accordion where at most one round is
//! expanded to show its description, playlist and submissions.

mod event;
mod render;

use ratatui::widgets::ListState;

use crate::model::{League, PlaylistHistoryItem, Round};

#[derive(Debug, PartialEq)]
pub(crate) enum LeagueViewAction {
    PlayRound(PlaylistHistoryItem),
    Back,
}

#[derive(Default)]
pub(crate) struct LeagueView {
    pub(crate) league: Option<League>,
    pub(crate) rounds_state: ListState,
    pub(crate) expanded: Option<usize>,
}

impl LeagueView {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set_league(&mut self, league: League) {
        let has_rounds = !league.rounds.is_empty();
        self.league = Some(league);
        self.expanded = None;
        self.rounds_state.select(has_rounds.then_some(0));
    }

    pub(crate) fn selected_round(&self) -> Option<&Round> {
        let index = self.rounds_state.selected()?;
        self.league.as_ref()?.rounds.get(index)
    }

    /// Expands the selected round, collapsing any other. Selecting the
    /// expanded round collapses it.
    fn toggle_expanded(&mut self) {
        let Some(index) = self.rounds_state.selected() else {
            return;
        };

        self.expanded = if self.expanded == Some(index) { None } else { Some(index) };
    }

    fn play_selected(&self) -> Option<PlaylistHistoryItem> {
        let league = self.league.as_ref()?;
        let round = self.selected_round()?;
        Some(PlaylistHistoryItem::for_round(league, round))
    }

    fn round_count(&self) -> usize {
        self.league.as_ref().map_or(0, |l| l.rounds.len())
    }

    fn goto_next(&mut self) {
        let len = self.round_count();
        if len == 0 { return; }
        let i = match self.rounds_state.selected() {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        self.rounds_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.round_count();
        if len == 0 { return; }
        let i = match self.rounds_state.selected() {
            Some(i) => if i == 0 { len - 1 } else { i - 1 },
            None => 0,
        };
        self.rounds_state.select(Some(i));
    }
}
