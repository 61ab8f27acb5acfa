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

//! UI rendering logic for the league table.
//!
//! The view is split into a one-line summary header, the table for the
//! current page, and the page strip underneath.

use std::fmt::Write;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table},
};

use crate::{
    components::LeagueTable,
    model::{League, league::{filter_by_category, group_by_category}},
    theme::Theme,
};

impl LeagueTable {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));

        let header = Paragraph::new(self.header_text()).block(header_block);
        f.render_widget(header, chunks[0]);

        self.draw_table(f, chunks[1], theme);

        self.pagination.draw(f, chunks[2], theme);
    }

    fn header_text(&self) -> String {
        let groups = group_by_category(&self.leagues);

        let mut text = format!(
            "Leagues | {} leagues | {} categories",
            self.leagues.len(),
            groups.len()
        );

        if let Some(category) = &self.category {
            let _ = write!(text, " | {}: {} shown", category, self.filtered().len());
        } else {
            let counts: Vec<String> = groups
                .iter()
                .map(|(category, leagues)| format!("{} {}", category, leagues.len()))
                .collect();
            if !counts.is_empty() {
                let _ = write!(text, " | {}", counts.join(" · "));
            }
        }

        text
    }

    fn draw_table(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        // Borrow fields separately, the table state is needed mutably below
        let leagues = filter_by_category(&self.leagues, self.category.as_deref());
        let rows: Vec<Row> = leagues[self.pagination.item_range()]
            .iter()
            .map(|&league| league_row(league, theme))
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Percentage(40),
                Constraint::Percentage(20),
                Constraint::Length(7),
                Constraint::Percentage(30),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from("League"),
                Cell::from("Category"),
                Cell::from(Line::from("Rounds").alignment(Alignment::Right)),
                Cell::from("Leader"),
            ])
            .style(Style::default().add_modifier(Modifier::BOLD).fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .row_highlight_style(theme.highlight_style())
        .block(Block::default().padding(Padding::horizontal(1)));

        f.render_stateful_widget(table, area, &mut self.table_state);
    }
}

fn league_row<'a>(league: &'a League, theme: &Theme) -> Row<'a> {
    let leader = league
        .leader()
        .map(|s| format!("{} ({} pts)", s.name, s.points))
        .unwrap_or_default();

    Row::new(vec![
        Cell::from(Line::from(league.title.as_str()).style(Style::default().fg(theme.table_title_fg))),
        Cell::from(Line::from(league.category.as_str()).style(Style::default().fg(theme.table_category_fg))),
        Cell::from(
            Line::from(league.rounds.len().to_string())
                .style(Style::default().fg(theme.table_count_fg))
                .alignment(Alignment::Right),
        ),
        Cell::from(Line::from(leader).style(Style::default().fg(theme.table_leader_fg))),
    ])
}
