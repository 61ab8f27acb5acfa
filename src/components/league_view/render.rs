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

//! UI rendering logic for the league detail view.
//!
//! The left column holds the podium card and the full standings, the right
//! column the rounds accordion.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, List, ListItem, Padding, Paragraph, Row, Table},
};

use crate::{
    components::LeagueView,
    model::{League, Round, league::top_standings},
    theme::Theme,
};

const PODIUM_SIZE: usize = 3;

impl LeagueView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let Some(league) = &self.league else {
            let empty = Paragraph::new("No league selected, press 1 to pick one")
                .style(Style::default().fg(theme.muted_colour))
                .alignment(Alignment::Center)
                .block(Block::default().padding(Padding::vertical(1)));
            f.render_widget(empty, area);
            return;
        };

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(PODIUM_SIZE as u16 + 2), Constraint::Min(0)])
            .split(columns[0]);

        draw_podium(f, left[0], league, theme);
        draw_standings(f, left[1], league, theme);

        let items: Vec<ListItem> = league
            .rounds
            .iter()
            .enumerate()
            .map(|(index, round)| round_item(round, self.expanded == Some(index), theme))
            .collect();

        let title = format!(" {} | {} rounds ", league.title, league.rounds.len());
        let rounds = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(theme.border_style(true)),
            )
            .highlight_style(theme.highlight_style())
            .highlight_symbol(">> ");

        f.render_stateful_widget(rounds, columns[1], &mut self.rounds_state);
    }
}

fn draw_podium(f: &mut Frame, area: Rect, league: &League, theme: &Theme) {
    let lines: Vec<Line> = top_standings(&league.league_standings, PODIUM_SIZE)
        .into_iter()
        .enumerate()
        .map(|(place, standing)| {
            let style = Style::default()
                .fg(theme.podium_colours[place])
                .add_modifier(Modifier::BOLD);
            Line::from(vec![
                Span::styled(format!("{}. ", place + 1), style),
                Span::styled(standing.name.as_str(), style),
                Span::raw(format!("  {} pts", standing.points)),
            ])
        })
        .collect();

    let podium = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Podium ")
            .border_style(theme.border_style(false))
            .padding(Padding::horizontal(1)),
    );

    f.render_widget(podium, area);
}

fn draw_standings(f: &mut Frame, area: Rect, league: &League, theme: &Theme) {
    let rows = league.league_standings.iter().map(|s| {
        let rank = s.rank.map(|r| r.to_string()).unwrap_or_default();
        Row::new(vec![
            Cell::from(Line::from(rank).alignment(Alignment::Right)),
            Cell::from(s.name.as_str()),
            Cell::from(Line::from(s.points.to_string()).alignment(Alignment::Right)),
        ])
    });

    let table = Table::new(
        rows,
        [Constraint::Length(4), Constraint::Min(10), Constraint::Length(6)],
    )
    .header(
        Row::new(vec![
            Cell::from(Line::from("#").alignment(Alignment::Right)),
            Cell::from("Player"),
            Cell::from(Line::from("Pts").alignment(Alignment::Right)),
        ])
        .style(Style::default().add_modifier(Modifier::BOLD).fg(theme.accent_colour)),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Standings ")
            .border_style(theme.border_style(false)),
    );

    f.render_widget(table, area);
}

fn round_item<'a>(round: &'a Round, expanded: bool, theme: &Theme) -> ListItem<'a> {
    let marker = if expanded { "▾ " } else { "▸ " };

    let mut text = Text::from(Line::from(vec![
        Span::raw(marker),
        Span::styled(round.name.as_str(), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            format!("  {} submissions", round.submissions.len()),
            Style::default().fg(theme.table_count_fg),
        ),
    ]));

    if expanded {
        let detail = Style::default().fg(theme.muted_colour);

        if let Some(description) = &round.description {
            text.push_line(Line::styled(format!("    {}", description), detail));
        }

        if let Some(url) = &round.playlist_url {
            text.push_line(Line::styled(format!("    Playlist: {}", url), detail));
        }

        for submission in &round.submissions {
            text.push_line(Line::from(vec![
                Span::raw("    "),
                Span::styled(
                    format!("{:>3} ", submission.points),
                    Style::default().fg(theme.table_leader_fg),
                ),
                Span::raw(format!("{} - {}", submission.artist, submission.title)),
                Span::styled(format!("  ({})", submission.submitter), detail),
            ]));
        }
    }

    ListItem::new(text)
}
