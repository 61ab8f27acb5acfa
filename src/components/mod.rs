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

//! Reusable UI components.
//!
//! Each component keeps its own state, maps key events to component actions
//! (`event` sub-module), and draws itself (`render` sub-module). Components
//! never reach into application state; they report what the user asked for
//! and the event loop applies it.

mod dialog;
mod history_view;
mod league_table;
mod league_view;
mod pagination;

pub(crate) use dialog::ConfirmDialog;
pub(crate) use history_view::{HistoryView, HistoryViewAction};
pub(crate) use league_table::{LeagueTable, LeagueTableAction};
pub(crate) use league_view::{LeagueView, LeagueViewAction};
pub(crate) use pagination::{PageMarker, Pagination};
