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

//! Paged league table and its state.
//!
//! This module holds the loaded leagues, an optional category filter, and the
//! [`Pagination`] over the filtered leagues. The table only ever shows one
//! page, and row selection is relative to that page.

mod event;
mod render;

use ratatui::widgets::TableState;

use crate::{
    components::Pagination,
    model::{League, league::filter_by_category},
};

#[derive(Debug, PartialEq)]
pub(crate) enum LeagueTableAction {
    OpenLeague(String),
    GotoPage(usize),
}

pub(crate) struct LeagueTable {
    pub(crate) leagues: Vec<League>,
    pub(crate) category: Option<String>,
    pub(crate) pagination: Pagination,
    pub(crate) table_state: TableState,
}

impl LeagueTable {
    pub(crate) fn new(page_size: usize) -> Self {
        Self {
            leagues: vec![],
            category: None,
            pagination: Pagination::new(page_size),
            table_state: TableState::new(),
        }
    }

    pub(crate) fn set_leagues(&mut self, leagues: Vec<League>) {
        self.leagues = leagues;
        self.refresh();
    }

    /// Filters the table to one category, or shows everything with `None`.
    ///
    /// Changing the filter returns to the first page.
    pub(crate) fn set_category(&mut self, category: Option<String>) {
        self.category = category;
        self.pagination.goto(1);
        self.refresh();
    }

    pub(crate) fn goto_page(&mut self, page: usize) {
        if self.pagination.goto(page) {
            self.select_first_row();
        }
    }

    pub(crate) fn filtered(&self) -> Vec<&League> {
        filter_by_category(&self.leagues, self.category.as_deref())
    }

    pub(crate) fn page(&self) -> Vec<&League> {
        let filtered = self.filtered();
        filtered[self.pagination.item_range()].to_vec()
    }

    pub(crate) fn selected_league(&self) -> Option<&League> {
        let index = self.table_state.selected()?;
        self.page().get(index).copied()
    }

    pub(crate) fn find_league(&self, id: &str) -> Option<&League> {
        self.leagues.iter().find(|l| l.id == id)
    }

    fn refresh(&mut self) {
        let total = self.filtered().len();
        self.pagination.set_total_items(total);
        self.select_first_row();
    }

    fn page_len(&self) -> usize {
        self.pagination.item_range().len()
    }

    fn select_first_row(&mut self) {
        self.table_state.select((self.page_len() > 0).then_some(0));
    }

    fn goto_next(&mut self) {
        let len = self.page_len();
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.page_len();
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) => if i == 0 { len - 1 } else { i - 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_last(&mut self) {
        let len = self.page_len();
        self.table_state.select(len.checked_sub(1));
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn league(id: usize, category: &str) -> League {
        League {
            id: format!("league-{}", id),
            title: format!("League {}", id),
            category: category.to_string(),
            rounds: vec![],
            league_standings: vec![],
        }
    }

    fn table_with(count: usize) -> LeagueTable {
        let mut table = LeagueTable::new(5);
        table.set_leagues(
            (0..count)
                .map(|i| league(i, if i % 2 == 0 { "Even" } else { "Odd" }))
                .collect(),
        );
        table
    }

    #[test]
    fn should_show_one_page_of_leagues() {
        let mut table = table_with(12);
        assert_eq!(table.pagination.total_pages().get(), 3);
        assert_eq!(table.page().len(), 5);
        assert_eq!(table.selected_league().map(|l| l.id.as_str()), Some("league-0"));

        table.goto_page(3);
        let ids: Vec<&str> = table.page().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["league-10", "league-11"]);
        assert_eq!(table.selected_league().map(|l| l.id.as_str()), Some("league-10"));
    }

    #[test]
    fn should_filter_by_category_and_reset_page() {
        let mut table = table_with(12);
        table.goto_page(2);

        table.set_category(Some("odd".to_string()));
        assert_eq!(table.pagination.current_page(), 1);
        assert_eq!(table.filtered().len(), 6);
        assert_eq!(table.pagination.total_pages().get(), 2);
        assert!(table.page().iter().all(|l| l.category == "Odd"));

        table.set_category(Some("none".to_string()));
        assert!(table.page().is_empty());
        assert!(table.selected_league().is_none());

        table.set_category(None);
        assert_eq!(table.filtered().len(), 12);
    }

    #[test]
    fn should_wrap_row_selection_within_page() {
        let mut table = table_with(7);

        table.goto_previous();
        assert_eq!(table.table_state.selected(), Some(4));
        table.goto_next();
        assert_eq!(table.table_state.selected(), Some(0));

        table.goto_page(2);
        table.goto_last();
        assert_eq!(table.table_state.selected(), Some(1));
        assert_eq!(table.selected_league().map(|l| l.id.as_str()), Some("league-6"));
    }

    #[test]
    fn should_handle_empty_table() {
        let mut table = LeagueTable::new(5);
        table.set_leagues(vec![]);
        table.goto_next();
        table.goto_last();

        assert!(table.page().is_empty());
        assert!(table.selected_league().is_none());
        assert_eq!(table.pagination.total_pages().get(), 1);
    }

    #[test]
    fn should_find_league_by_id_regardless_of_filter() {
        let mut table = table_with(4);
        table.set_category(Some("Even".to_string()));
        assert!(table.find_league("league-1").is_some());
        assert!(table.find_league("missing").is_none());
    }
}
