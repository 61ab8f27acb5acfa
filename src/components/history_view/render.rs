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

//! UI rendering logic for the recently played view.

use chrono::Utc;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::{
    components::HistoryView,
    model::{PlaylistHistoryItem, history::MAX_HISTORY_ITEMS},
    theme::Theme,
    util::format::format_elapsed,
};

impl HistoryView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, items: &[PlaylistHistoryItem], theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Recently played | {} of {} ", items.len(), MAX_HISTORY_ITEMS))
            .border_style(theme.border_style(true));

        if items.is_empty() {
            let empty = Paragraph::new("Nothing played yet, press p on a round to play it")
                .style(Style::default().fg(theme.muted_colour))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(empty, area);
            return;
        }

        let now = Utc::now().timestamp_millis();

        let list_items: Vec<ListItem> = items
            .iter()
            .map(|item| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:>10}  ", format_elapsed(item.played_at, now)),
                        Style::default().fg(theme.table_count_fg),
                    ),
                    Span::styled(
                        item.playlist_name.as_str(),
                        Style::default().fg(theme.table_title_fg).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("  {}", item.league_name),
                        Style::default().fg(theme.table_category_fg),
                    ),
                ]))
            })
            .collect();

        let list = List::new(list_items)
            .block(block)
            .highlight_style(theme.highlight_style())
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }
}
