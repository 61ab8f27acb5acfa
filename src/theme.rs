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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette. Every widget takes
//! its colours from a [`Theme`] rather than hard-coding them.

use ratatui::style::{Color, Modifier, Style};

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) muted_colour: Color,
    pub(crate) error_colour: Color,

    pub(crate) highlight_fg: Color,
    pub(crate) highlight_bg: Color,

    pub(crate) status_bg: Color,
    pub(crate) commander_colour: Color,

    pub(crate) table_title_fg: Color,
    pub(crate) table_category_fg: Color,
    pub(crate) table_count_fg: Color,
    pub(crate) table_leader_fg: Color,

    pub(crate) podium_colours: [Color; 3],
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(24, 28, 40),
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            muted_colour: Color::Rgb(110, 110, 120),
            error_colour: Color::Rgb(235, 87, 87),

            highlight_fg: Color::White,
            highlight_bg: Color::Rgb(48, 76, 140),

            status_bg: Color::Rgb(36, 40, 56),
            commander_colour: Color::Rgb(220, 220, 220),

            table_title_fg: Color::Rgb(255, 255, 255),
            table_category_fg: Color::Rgb(179, 157, 219),
            table_count_fg: Color::Rgb(162, 161, 166),
            table_leader_fg: Color::Rgb(255, 215, 0),

            podium_colours: [
                Color::Rgb(255, 215, 0),
                Color::Rgb(192, 192, 192),
                Color::Rgb(205, 127, 50),
            ],
        }
    }

    pub(crate) fn border_style(&self, is_active: bool) -> Style {
        if is_active {
            Style::default().fg(self.accent_colour).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.border_colour)
        }
    }

    pub(crate) fn highlight_style(&self) -> Style {
        Style::default().fg(self.highlight_fg).bg(self.highlight_bg)
    }
}
