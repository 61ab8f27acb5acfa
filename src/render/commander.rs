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

//! Render the command-line interface.
//!
//! While active the command line shows a `:` prompt, the typed text and the
//! cursor. Otherwise it shows a short key binding hint.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{App, MainView};

const PROMPT: &str = ":";

pub(crate) fn draw_commander(f: &mut Frame, area: Rect, app: &App) {
    let commander = &app.commander;
    let theme = &app.theme;

    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    let line = if commander.active() {
        Line::from(vec![
            Span::styled(PROMPT, Style::default().fg(theme.accent_colour)),
            Span::styled(commander.input.value(), Style::default().fg(theme.commander_colour)),
        ])
    } else {
        Line::from(Span::styled(key_hint(&app.main_view), Style::default().fg(theme.muted_colour)))
    };

    f.render_widget(Paragraph::new(line), container[0]);

    if commander.active() {
        let cursor_x = container[0].x + (PROMPT.len() + commander.input.cursor()) as u16;
        let cursor_y = container[0].y;
        f.set_cursor_position((cursor_x, cursor_y));
    }
}

fn key_hint(main_view: &MainView) -> &'static str {
    match main_view {
        MainView::Leagues => "j/k move  enter open  [ ] page  { } first/last  : command  q quit",
        MainView::League => "j/k move  enter expand  p play  esc back  : command  q quit",
        MainView::History => "j/k move  p play again  enter open league  x clear  : command  q quit",
    }
}
