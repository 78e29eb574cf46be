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
//! bridging user input and passcode completion to the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through a
//!    channel, one at a time and in arrival order.
//! 2. **Process**: The [`process_events`] function applies each event to the
//!    [`App`] state in full before looking at the next one.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, prelude::CrosstermBackend};
use tracing::{info, warn};

use crate::{App, render::draw};

const INCORRECT_CODE_MESSAGE: &str = "Incorrect code, try again";

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Paste(String),

    /// Sent by the passcode completion callback.
    CodeEntered(String),

    ExitApplication,
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until an exit event is received or the event channel
/// is closed.
pub(crate) fn process_events(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::Paste(text) => {
                app.passcode_view.process_event(&Event::Paste(text));
            }
            AppEvent::CodeEntered(code) => verify_code(app, &code),
            AppEvent::ExitApplication => {}
        }

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Routes a key press to global shortcuts first, then to the passcode view.
///
/// # Errors
///
/// Returns an error if the exit event cannot be queued.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if key.code == KeyCode::Esc {
        app.event_tx.send(AppEvent::ExitApplication)?;
        return Ok(());
    }

    let consumed = app.passcode_view.process_event(&Event::Key(key));

    // Any edit after a verdict starts a new attempt.
    if consumed && !app.passcode_view.controller.is_complete() {
        app.passcode_view.controller.set_error_message(None);
        app.status = None;
    }

    Ok(())
}

/// Stand-in for the caller's verification step. Submitting the code anywhere
/// is not the controller's concern; the demo only compares it locally and
/// feeds the verdict back through the error message.
fn verify_code(app: &mut App, code: &str) {
    match app.config.demo_code.as_deref() {
        Some(expected) if expected == code => {
            info!("demo code accepted");
            app.passcode_view.controller.set_error_message(None);
            app.status = Some("Code accepted".to_string());
        }
        Some(_) => {
            warn!("demo code rejected");
            app.passcode_view
                .controller
                .set_error_message(Some(INCORRECT_CODE_MESSAGE.to_string()));
            app.status = None;
        }
        None => {
            app.passcode_view.controller.set_error_message(None);
            app.status = Some(format!("Entered {code}"));
        }
    }
}
