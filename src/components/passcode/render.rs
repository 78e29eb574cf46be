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

//! UI rendering logic for the passcode view.
//!
//! Each slot is drawn as a small bordered cell, centred as a row in the
//! available area. The focused slot gets the accent border and the terminal
//! cursor; every slot turns to the error colour while an error message is
//! being shown.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::{components::PasscodeView, render::Render, theme::Theme};

const SLOT_WIDTH: u16 = 5;
const SLOT_SPACING: u16 = 1;

impl Render for PasscodeView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let slots = self.controller.slot_views();

        let cells = Layout::horizontal(vec![Constraint::Length(SLOT_WIDTH); slots.len()])
            .flex(Flex::Center)
            .spacing(SLOT_SPACING)
            .split(area);

        for (slot, cell) in slots.iter().zip(cells.iter()) {
            let (border_colour, border_type) = if slot.error {
                (theme.error_colour, BorderType::Plain)
            } else if slot.focused {
                (theme.accent_colour, BorderType::Thick)
            } else {
                (theme.border_colour, BorderType::Rounded)
            };

            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(Style::default().fg(border_colour));

            let text = slot.value.map(String::from).unwrap_or_default();

            f.render_widget(
                Paragraph::new(text)
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(theme.slot_fg).add_modifier(Modifier::BOLD))
                    .block(block),
                *cell,
            );
        }

        if let Some(cell) = self.focused().and_then(|index| cells.get(index)) {
            f.set_cursor_position((cell.x + cell.width / 2, cell.y + 1));
        }
    }
}
