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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event to provide a reactive user interface.

mod commander;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Tabs},
};

use crate::{
    App, MainView,
    render::{commander::draw_commander, status::draw_status},
};

const TAB_TITLES: [&str; 3] = ["1 Leagues", "2 League", "3 Recently played"];

/// Renders the user interface to the terminal frame.
///
/// The screen is split into a tab header, the active view, a status line and
/// the command line. An open confirmation dialog is drawn over everything.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, allowing views to
///   update their scroll positions.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(Block::default().style(Style::default().bg(app.theme.background_colour)), area);

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    draw_tabs(f, outer[0], app);

    let theme = app.theme;
    match app.main_view {
        MainView::Leagues => app.league_table.draw(f, outer[1], &theme),
        MainView::League => app.league_view.draw(f, outer[1], &theme),
        MainView::History => app.history_view.draw(f, outer[1], app.history.items(), &theme),
    }

    draw_status(f, outer[2], app);

    draw_commander(f, outer[3], app);

    app.confirm.draw(f, area, &theme);
}

fn draw_tabs(f: &mut Frame, area: Rect, app: &App) {
    let selected = match app.main_view {
        MainView::Leagues => 0,
        MainView::League => 1,
        MainView::History => 2,
    };

    let tabs = Tabs::new(TAB_TITLES.map(Line::from))
        .select(selected)
        .style(Style::default().fg(app.theme.muted_colour))
        .highlight_style(Style::default().fg(app.theme.accent_colour).add_modifier(Modifier::BOLD))
        .divider("|");

    f.render_widget(tabs, area);
}
