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

//! # Passcode Entry TUI.
//!
//! A terminal demo of the segmented passcode controller.
//!
//! The controller itself lives in the `codeslots` library; this binary is the
//! thin view adapter around it, built with `ratatui`.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, applies events to the
//!   passcode and renders the UI.
//! * An **Input Thread** captures keyboard and paste events and forwards them
//!   to the main thread.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the input thread and the UI is handled via a single
//! `std::sync::mpsc` channel, so events are applied strictly in the order
//! they were typed.

mod actions;
mod components;
mod render;
mod settings;
mod theme;
mod util;

use std::{
    fs::File,
    io::{self},
    sync::{
        Mutex,
        mpsc::{self, Receiver, Sender},
    },
    thread,
};

use anyhow::{Context, Result};
use codeslots::PasscodeController;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::{
    actions::events::{AppEvent, process_events},
    components::PasscodeView,
    settings::AppConfig,
    theme::Theme,
};

const LOG_ENV_VAR: &str = "CODESLOTS_LOG";

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub passcode_view: PasscodeView,

    /// Outcome of the last completed entry, shown beneath the slots.
    pub status: Option<String>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::channel();

        let completion_tx = event_tx.clone();
        let controller = PasscodeController::builder()
            .config(config.passcode.clone())
            .on_complete(move |code| {
                completion_tx.send(AppEvent::CodeEntered(code.to_string())).ok();
            })
            .build()
            .context("Invalid passcode configuration")?;

        Ok(Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            passcode_view: PasscodeView::new(controller),
            status: None,
        })
    }
}

/// The entry point of the application.
///
/// Loads the configuration, initializes logging and the application state,
/// manages the terminal lifecycle, and returns an error if any part of the
/// execution fails.
fn main() -> Result<()> {
    let config = settings::load_config();

    // Logging is best-effort; the demo runs fine without a log file. Report the
    // failure now, before raw mode takes over the terminal.
    if let Err(e) = init_logging(&config) {
        eprintln!("Logging disabled: {e:#}");
    }

    let mut app = App::new(config).context("Failed to initialise application")?;

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Installs a `tracing` subscriber writing to the log file.
///
/// Stdout belongs to the TUI, so nothing is ever logged to the terminal. The
/// filter comes from the `CODESLOTS_LOG` environment variable, falling back to
/// the configured default.
fn init_logging(config: &AppConfig) -> Result<()> {
    let path = settings::log_file_path().context("Failed to resolve log file path")?;
    let file = File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();

    debug!(path = %path.display(), "logging initialised");
    Ok(())
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
/// * Enables bracketed paste so clipboard content arrives as one event.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&hex).ok();
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is "best-effort" and does not return a result, as it is
/// called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), DisableBracketedPaste, LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

/// Starts the input thread and enters the main event loop.
///
/// The input thread translates raw terminal events into [`AppEvent`]s. Control
/// is then handed to [`process_events`] to manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    info!(length = app.passcode_view.controller.len(), "passcode entry started");

    // Spawn a thread to translate raw terminal events to application events.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let sent = match event::read() {
                Ok(event::Event::Key(key)) => tx_input.send(AppEvent::Key(key)),
                Ok(event::Event::Paste(text)) => tx_input.send(AppEvent::Paste(text)),
                Ok(_) => Ok(()),
                Err(_) => break,
            };

            if sent.is_err() {
                break;
            }
        }
    });

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
