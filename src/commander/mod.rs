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

//! Command-line input logic and state management.
//!
//! This module implements a command-line component: `:` opens it, typed keys
//! go to a text input, and `Enter` parses the buffer and dispatches the
//! corresponding application event.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{MainView, actions::events::AppEvent};

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Returns `true` if the event was consumed by the command line.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return true;
            }
            return false;
        }

        match key_event.code {
            KeyCode::Esc => {
                self.active = false;
                self.input.reset();
            }

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                if !buffer.is_empty() {
                    if let Err(e) = run_command(&buffer, event_tx) {
                        log::error!("Failed to dispatch command '{}': {}", buffer, e);
                    }
                }
                self.input.reset();
                self.active = false;
            }

            // Delegate all other key events to the managed input component
            _ => {
                self.input.handle_event(event);
            }
        }

        true
    }
}

fn run_command(buffer: &str, event_tx: &Sender<AppEvent>) -> Result<()> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    let event = match parts.as_slice() {
        ["q"] => AppEvent::ExitApplication,

        ["reload"] => AppEvent::ReloadLeagues,
        ["load", dir_parts @ ..] if !dir_parts.is_empty() => AppEvent::LoadLeagues(dir_parts.join(" ")),

        ["page", page] => match page.parse::<usize>() {
            Ok(page) if page > 0 => AppEvent::GotoPage(page),
            _ => AppEvent::Error(format!("Not a page number: {}", page)),
        },

        ["cat"] => AppEvent::SetCategory(None),
        ["cat", name_parts @ ..] => AppEvent::SetCategory(Some(name_parts.join(" "))),

        ["open", id] => AppEvent::OpenLeague(id.to_string()),

        ["clear"] => AppEvent::RequestClearHistory,

        ["1"] => AppEvent::SetMainView(MainView::Leagues),
        ["2"] => AppEvent::SetMainView(MainView::League),
        ["3"] => AppEvent::SetMainView(MainView::History),

        _ => AppEvent::Error(format!("Unknown command: {}", buffer)),
    };

    event_tx.send(event)?;

    Ok(())
}

#[cfg(test)]
mod test {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn command(buffer: &str) -> AppEvent {
        let (event_tx, event_rx) = mpsc::channel();
        run_command(buffer, &event_tx).unwrap();
        event_rx.try_recv().unwrap()
    }

    #[test]
    fn should_parse_commands() {
        assert!(matches!(command("q"), AppEvent::ExitApplication));
        assert!(matches!(command("reload"), AppEvent::ReloadLeagues));
        assert!(matches!(command("load /data/my leagues"), AppEvent::LoadLeagues(d) if d == "/data/my leagues"));
        assert!(matches!(command("page 4"), AppEvent::GotoPage(4)));
        assert!(matches!(command("cat"), AppEvent::SetCategory(None)));
        assert!(matches!(command("cat Book Club"), AppEvent::SetCategory(Some(c)) if c == "Book Club"));
        assert!(matches!(command("open office"), AppEvent::OpenLeague(id) if id == "office"));
        assert!(matches!(command("clear"), AppEvent::RequestClearHistory));
        assert!(matches!(command("3"), AppEvent::SetMainView(MainView::History)));
    }

    #[test]
    fn should_report_invalid_commands() {
        assert!(matches!(command("page 0"), AppEvent::Error(_)));
        assert!(matches!(command("page two"), AppEvent::Error(_)));
        assert!(matches!(command("load"), AppEvent::Error(_)));
        assert!(matches!(command("dance"), AppEvent::Error(_)));
    }

    #[test]
    fn should_only_consume_keys_while_active() {
        let (event_tx, event_rx) = mpsc::channel();
        let mut commander = Commander::new();

        assert!(!commander.handle_event(&key(KeyCode::Char('q')), &event_tx));
        assert!(commander.handle_event(&key(KeyCode::Char(':')), &event_tx));
        assert!(commander.active());

        for c in "page 2".chars() {
            assert!(commander.handle_event(&key(KeyCode::Char(c)), &event_tx));
        }
        assert_eq!(commander.input.value(), "page 2");

        assert!(commander.handle_event(&key(KeyCode::Enter), &event_tx));
        assert!(!commander.active());
        assert_eq!(commander.input.value(), "");
        assert!(matches!(event_rx.try_recv().unwrap(), AppEvent::GotoPage(2)));
    }

    #[test]
    fn should_discard_input_on_escape() {
        let (event_tx, event_rx) = mpsc::channel();
        let mut commander = Commander::new();

        commander.handle_event(&key(KeyCode::Char(':')), &event_tx);
        commander.handle_event(&key(KeyCode::Char('q')), &event_tx);
        commander.handle_event(&key(KeyCode::Esc), &event_tx);

        assert!(!commander.active());
        assert_eq!(commander.input.value(), "");
        assert!(event_rx.try_recv().is_err());
    }
}
