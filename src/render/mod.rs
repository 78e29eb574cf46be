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

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::{App, theme::Theme};

const HELP_TEXT: &str = "0-9 enter  ←/→ move  backspace delete  ctrl+u clear  esc quit";

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Renders the user interface to the terminal frame.
///
/// The screen is split vertically into a title, the row of passcode slots,
/// the caller-supplied error line, a status line and a key help footer. The
/// error text is shown exactly as given; with no error the line stays blank.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let title = format!("Enter the {}-character code", app.passcode_view.controller.len());
    f.render_widget(
        Paragraph::new(title)
            .alignment(Alignment::Center)
            .style(Style::default().fg(app.theme.title_fg)),
        outer[1],
    );

    app.passcode_view.draw(f, outer[2], &app.theme);

    if let Some(message) = app.passcode_view.controller.error_message() {
        f.render_widget(
            Paragraph::new(message)
                .alignment(Alignment::Center)
                .style(Style::default().fg(app.theme.error_colour)),
            outer[3],
        );
    }

    if let Some(status) = &app.status {
        f.render_widget(
            Paragraph::new(status.as_str())
                .alignment(Alignment::Center)
                .style(Style::default().fg(app.theme.success_colour)),
            outer[4],
        );
    }

    f.render_widget(
        Paragraph::new(HELP_TEXT)
            .alignment(Alignment::Center)
            .style(Style::default().fg(app.theme.help_fg)),
        outer[6],
    );
}
