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

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::Paragraph,
};

use crate::{App, Status};

pub(crate) fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let [message_area, summary_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(40)]).areas(area);

    let message = if app.loading {
        Span::styled(" Loading leagues...", Style::default().fg(theme.accent_colour))
    } else {
        match &app.status {
            Some(Status::Info(text)) => Span::styled(format!(" {}", text), Style::default().fg(theme.commander_colour)),
            Some(Status::Error(text)) => Span::styled(
                format!(" {}", text),
                Style::default().fg(theme.error_colour).add_modifier(Modifier::BOLD),
            ),
            None => Span::raw(""),
        }
    };

    let table = &app.league_table;
    let summary = format!(
        "{} leagues | {} played | {} ",
        table.filtered().len(),
        app.history.items().len(),
        table.category.as_deref().unwrap_or("all"),
    );

    let style = Style::default().bg(theme.status_bg);
    f.render_widget(Paragraph::new(message).style(style), message_area);
    f.render_widget(
        Paragraph::new(summary)
            .style(style.fg(theme.muted_colour))
            .alignment(Alignment::Right),
        summary_area,
    );
}
