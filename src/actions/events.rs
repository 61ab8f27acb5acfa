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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard), background worker updates
//! (loaded leagues), and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    asynchronous channel.
//! 2. **Process**: [`apply_event`] updates the [`App`] state, hands slow work
//!    to the background worker, and routes key presses to the active view.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App, MainView, Status,
    components::{HistoryViewAction, LeagueTableAction, LeagueViewAction},
    model::{League, PlaylistHistoryItem},
    render::draw,
    tasks::AppTask,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    Tick,

    SetMainView(MainView),

    ReloadLeagues,
    LoadLeagues(String),
    LeaguesLoaded(Vec<League>),

    OpenLeague(String),
    GotoPage(usize),
    SetCategory(Option<String>),

    PlayPlaylist(PlaylistHistoryItem),
    RequestClearHistory,
    ClearHistory,

    ExitApplication,

    Error(String),
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        apply_event(app, event)?;

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Applies a single event to the application state.
///
/// # Errors
///
/// Returns an error if a follow-up event or task cannot be sent, which only
/// happens once the receiving side has gone away.
pub(crate) fn apply_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,

        AppEvent::Tick => {}

        AppEvent::SetMainView(main_view) => app.main_view = main_view,

        AppEvent::ReloadLeagues => {
            app.loading = true;
            app.task_tx.send(AppTask::LoadLeagues(app.config.fixture_dirs.clone()))?;
        }
        AppEvent::LoadLeagues(dir) => {
            // Later reloads read the same directory
            app.config.fixture_dirs = vec![dir];
            app.loading = true;
            app.task_tx.send(AppTask::LoadLeagues(app.config.fixture_dirs.clone()))?;
        }
        AppEvent::LeaguesLoaded(leagues) => {
            app.loading = false;
            app.status = Some(Status::Info(format!("Loaded {} leagues", leagues.len())));
            app.league_table.set_leagues(leagues);

            // Keep the open league in step with the reloaded data
            let open_id = app.league_view.league.as_ref().map(|l| l.id.clone());
            if let Some(id) = open_id {
                match app.league_table.find_league(&id).cloned() {
                    Some(league) => app.league_view.set_league(league),
                    None => app.league_view = Default::default(),
                }
            }
        }

        AppEvent::OpenLeague(id) => match app.league_table.find_league(&id).cloned() {
            Some(league) => {
                app.league_view.set_league(league);
                app.main_view = MainView::League;
            }
            None => app.event_tx.send(AppEvent::Error(format!("League '{}' is not loaded", id)))?,
        },
        AppEvent::GotoPage(page) => {
            app.league_table.goto_page(page);
            app.main_view = MainView::Leagues;
        }
        AppEvent::SetCategory(category) => {
            app.league_table.set_category(category);
            app.main_view = MainView::Leagues;
        }

        AppEvent::PlayPlaylist(item) => {
            log::info!("Playing {} from {}", item.playlist_name, item.league_name);
            app.status = Some(Status::Info(format!("Playing {}", item.playlist_name)));
            app.history.add_to_history(item);
            app.history_view.reset(app.history.items().len());
        }
        AppEvent::RequestClearHistory => app.confirm.open("Clear all recently played playlists?"),
        AppEvent::ClearHistory => {
            app.history.clear_history();
            app.history_view.reset(0);
            app.status = Some(Status::Info("History cleared".to_string()));
        }

        AppEvent::Error(message) => {
            log::warn!("{}", message);
            app.status = Some(Status::Error(message));
        }

        AppEvent::ExitApplication => {}
    }

    Ok(())
}

/// Maps keyboard input to application actions.
///
/// Key presses go, in order, to the confirmation dialog when it is open, the
/// command line, the active view, and finally the global key bindings.
///
/// # Errors
///
/// Returns an error if a resulting event fails to send.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    let event = Event::Key(key);

    if app.confirm.is_open() {
        if app.confirm.process_event(&event) == Some(true) {
            app.event_tx.send(AppEvent::ClearHistory)?;
        }
        return Ok(());
    }

    if app.commander.handle_event(&event, &app.event_tx) {
        return Ok(());
    }

    let handled = match app.main_view {
        MainView::Leagues => match app.league_table.process_event(&event) {
            Some(LeagueTableAction::OpenLeague(id)) => {
                app.event_tx.send(AppEvent::OpenLeague(id))?;
                true
            }
            Some(LeagueTableAction::GotoPage(page)) => {
                app.event_tx.send(AppEvent::GotoPage(page))?;
                true
            }
            None => false,
        },

        MainView::League => match app.league_view.process_event(&event) {
            Some(LeagueViewAction::PlayRound(item)) => {
                app.event_tx.send(AppEvent::PlayPlaylist(item))?;
                true
            }
            Some(LeagueViewAction::Back) => {
                app.event_tx.send(AppEvent::SetMainView(MainView::Leagues))?;
                true
            }
            None => false,
        },

        MainView::History => match app.history_view.process_event(&event, app.history.items()) {
            Some(HistoryViewAction::PlayAgain(item)) => {
                app.event_tx.send(AppEvent::PlayPlaylist(item))?;
                true
            }
            Some(HistoryViewAction::OpenLeague(id)) => {
                app.event_tx.send(AppEvent::OpenLeague(id))?;
                true
            }
            Some(HistoryViewAction::RequestClear) => {
                app.event_tx.send(AppEvent::RequestClearHistory)?;
                true
            }
            None => false,
        },
    };

    if handled {
        return Ok(());
    }

    process_global_key_event(app, key)
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        KeyCode::Char('r') => app.event_tx.send(AppEvent::ReloadLeagues)?,

        KeyCode::Char('1') => app.event_tx.send(AppEvent::SetMainView(MainView::Leagues))?,
        KeyCode::Char('2') => app.event_tx.send(AppEvent::SetMainView(MainView::League))?,
        KeyCode::Char('3') => app.event_tx.send(AppEvent::SetMainView(MainView::History))?,

        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use std::sync::mpsc::{self, Receiver};

    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::{
        config::AppConfig,
        model::{Round, history::PlaylistHistory},
        storage::MemoryStore,
    };

    fn app() -> (App, Receiver<AppTask>) {
        let (task_tx, task_rx) = mpsc::channel();
        let history = PlaylistHistory::load(Box::new(MemoryStore::new()));
        (App::new(AppConfig::default(), history, task_tx), task_rx)
    }

    fn leagues() -> Vec<League> {
        (1..=3)
            .map(|i| League {
                id: format!("l{}", i),
                title: format!("League {}", i),
                category: "Friends".to_string(),
                rounds: vec![Round {
                    id: "r1".to_string(),
                    name: format!("Round {}", i),
                    description: None,
                    playlist_url: None,
                    submissions: vec![],
                }],
                league_standings: vec![],
            })
            .collect()
    }

    /// Applies `event` and then everything it queued, as the loop would.
    fn run(app: &mut App, event: AppEvent) {
        apply_event(app, event).unwrap();
        while let Ok(event) = app.event_rx.try_recv() {
            apply_event(app, event).unwrap();
        }
    }

    fn press(app: &mut App, code: KeyCode) {
        run(app, AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    #[test]
    fn should_request_configured_fixture_dirs_on_reload() {
        let (mut app, task_rx) = app();
        app.config.fixture_dirs = vec!["/data/leagues".to_string()];

        run(&mut app, AppEvent::ReloadLeagues);

        assert!(app.loading);
        assert_eq!(
            task_rx.try_recv().unwrap(),
            AppTask::LoadLeagues(vec!["/data/leagues".to_string()])
        );
    }

    #[test]
    fn should_open_league_and_record_play() {
        let (mut app, _task_rx) = app();
        run(&mut app, AppEvent::LeaguesLoaded(leagues()));
        assert!(!app.loading);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.main_view, MainView::League);
        assert_eq!(app.league_view.league.as_ref().map(|l| l.id.as_str()), Some("l2"));

        press(&mut app, KeyCode::Char('p'));
        let ids: Vec<&str> = app.history.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["l2/r1"]);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.main_view, MainView::Leagues);
    }

    #[test]
    fn should_apply_requested_page() {
        let (mut app, _task_rx) = app();
        app.league_table = crate::components::LeagueTable::new(1);
        run(&mut app, AppEvent::LeaguesLoaded(leagues()));

        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.league_table.pagination.current_page(), 2);

        press(&mut app, KeyCode::Char('}'));
        assert_eq!(app.league_table.pagination.current_page(), 3);
    }

    #[test]
    fn should_clear_history_only_after_confirmation() {
        let (mut app, _task_rx) = app();
        run(&mut app, AppEvent::LeaguesLoaded(leagues()));
        run(&mut app, AppEvent::OpenLeague("l1".to_string()));
        press(&mut app, KeyCode::Char('p'));
        run(&mut app, AppEvent::SetMainView(MainView::History));

        press(&mut app, KeyCode::Char('x'));
        assert!(app.confirm.is_open());
        press(&mut app, KeyCode::Char('n'));
        assert!(!app.confirm.is_open());
        assert_eq!(app.history.items().len(), 1);

        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.history.items().is_empty());
    }

    #[test]
    fn should_report_unknown_league() {
        let (mut app, _task_rx) = app();
        run(&mut app, AppEvent::OpenLeague("missing".to_string()));

        assert!(matches!(app.status, Some(Status::Error(_))));
        assert_eq!(app.main_view, MainView::Leagues);
    }

    #[test]
    fn should_close_league_removed_by_reload() {
        let (mut app, _task_rx) = app();
        run(&mut app, AppEvent::LeaguesLoaded(leagues()));
        run(&mut app, AppEvent::OpenLeague("l3".to_string()));

        let mut reloaded = leagues();
        reloaded.pop();
        run(&mut app, AppEvent::LeaguesLoaded(reloaded));

        assert!(app.league_view.league.is_none());
    }
}
