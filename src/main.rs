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

//! # Music League TUI.
//!
//! A terminal browser for music league results: leagues, standings, rounds
//! and the playlists they produced, with a persistent list of recently played
//! playlists.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, owns all application
//!   state and renders the UI.
//! * A **Background Worker** loads league fixtures from disk via task
//!   processing.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and background workers is handled via `std::sync::mpsc`
//! channels.

mod actions;
mod commander;
mod components;
mod config;
mod fixtures;
mod model;
mod render;
mod storage;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use env_logger::{Env, Target};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    fs::{self, File},
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use crate::{
    actions::events::{AppEvent, process_events},
    commander::Commander,
    components::{ConfirmDialog, HistoryView, LeagueTable, LeagueView},
    config::AppConfig,
    model::history::PlaylistHistory,
    storage::{KeyValueStore, MemoryStore, SqliteStore},
    tasks::AppTask,
    theme::Theme,
};

#[derive(Debug, Clone, Copy, PartialEq)]
enum MainView {
    Leagues,
    League,
    History,
}

/// Most recent message for the status line.
#[derive(Debug, PartialEq)]
enum Status {
    Info(String),
    Error(String),
}

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub main_view: MainView,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    pub history: PlaylistHistory,

    pub league_table: LeagueTable,
    pub league_view: LeagueView,
    pub history_view: HistoryView,

    pub confirm: ConfirmDialog,
    pub commander: Commander,

    pub status: Option<Status>,
    pub loading: bool,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, history: PlaylistHistory, task_tx: Sender<AppTask>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let mut history_view = HistoryView::new();
        history_view.reset(history.items().len());

        Self {
            league_table: LeagueTable::new(config.page_size),
            config,
            theme: Theme::default(),
            main_view: MainView::Leagues,
            event_tx,
            event_rx,
            task_tx,
            history,
            league_view: LeagueView::new(),
            history_view,
            confirm: ConfirmDialog::new(),
            commander: Commander::new(),
            status: None,
            loading: false,
        }
    }
}

/// The entry point of the application.
///
/// Sets up logging and the communication channels, initializes the
/// application state, manages the terminal lifecycle, and returns an error if
/// any part of the execution fails.
fn main() -> Result<()> {
    init_logging();

    let mut config = config::load_config();

    // Directories given on the command line replace the configured ones
    let dirs: Vec<String> = std::env::args().skip(1).collect();
    if !dirs.is_empty() {
        config.fixture_dirs = dirs;
    }

    let history = PlaylistHistory::load(open_store(&config));

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, history, task_tx);

    let mut terminal = setup_terminal()?;
    let res = run(&mut terminal, &mut app, task_rx);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Sends log output to a file, the terminal belongs to the UI.
///
/// Logging is left disabled if the log file cannot be created.
fn init_logging() {
    let path = config::log_file_path();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).ok();
    }

    let Ok(file) = File::create(&path) else {
        return;
    };

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();

    log::info!("Logging to {}", path.display());
}

/// Opens the history database, falling back to an in-memory store so the
/// application still runs (without persistence) when it cannot be opened.
fn open_store(config: &AppConfig) -> Box<dyn KeyValueStore> {
    let path = config.history_db_path();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).ok();
    }

    match SqliteStore::open(&path) {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::error!("Failed to open history database {}: {}", path.display(), e);
            Box::new(MemoryStore::new())
        }
    }
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`] and makes the cursor
/// visible again. It is best-effort and does not return a result, as it is
/// typically called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A task worker to process [`AppTask`]s such as loading fixtures.
/// * An input thread to poll for system keyboard events.
/// * A tick thread to trigger periodic UI refreshes.
///
/// After spawning the workers, it hands control to [`process_events`] to
/// manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    task_rx: Receiver<AppTask>,
) -> Result<()> {
    tasks::spawn_task_worker(task_rx, app.event_tx.clone());

    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read() {
                if tx_keys.send(AppEvent::Key(key)).is_err() {
                    break;
                }
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this keeps
    // relative "played" times fresh.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(Duration::from_millis(250));
        }
    });

    // Initial trigger to load the configured fixtures
    app.event_tx.send(AppEvent::ReloadLeagues).context("Failed to request fixtures")?;

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
