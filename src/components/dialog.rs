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

//! Modal yes/no confirmation dialog.
//!
//! While open the dialog takes every key event. `y` or `Enter` confirms, `n`
//! or `Esc` cancels, and either answer closes the dialog.

use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::theme::Theme;

#[derive(Default)]
pub(crate) struct ConfirmDialog {
    message: Option<String>,
}

impl ConfirmDialog {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn open(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub(crate) fn is_open(&self) -> bool {
        self.message.is_some()
    }

    /// Returns `Some(true)` when confirmed, `Some(false)` when cancelled, and
    /// `None` while still waiting for an answer (or if not open).
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<bool> {
        if !self.is_open() {
            return None;
        }

        let Event::Key(key_event) = event else {
            return None;
        };

        let answer = match key_event.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => true,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => false,
            _ => return None,
        };

        self.message = None;
        Some(answer)
    }

    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let Some(message) = &self.message else {
            return;
        };

        let popup = centered(area, 50, 7);

        let text = vec![
            Line::from(message.as_str()),
            Line::default(),
            Line::from(vec![
                Span::styled("y", Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)),
                Span::raw(" confirm   "),
                Span::styled("n", Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)),
                Span::raw(" cancel"),
            ]),
        ];

        let dialog = Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().bg(theme.status_bg))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Confirm ")
                    .border_style(theme.border_style(true))
                    .padding(Padding::horizontal(1)),
            );

        f.render_widget(Clear, popup);
        f.render_widget(dialog, popup);
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center).areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width)]).flex(Flex::Center).areas(row);
    popup
}
