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

//! Passcode entry view adapter.
//!
//! This module binds a [`PasscodeController`] to the terminal. The view owns
//! which slot currently shows the cursor; the controller decides where focus
//! should go and the view executes the [`Command`]s it receives, so the two
//! never disagree about the active slot.

mod event;
mod render;

use codeslots::{Command, PasscodeController};
use tracing::trace;

pub(crate) struct PasscodeView {
    pub(crate) controller: PasscodeController,
    focused: Option<usize>,
}

impl PasscodeView {
    pub(crate) fn new(controller: PasscodeController) -> Self {
        let focused = controller.active_index();
        Self {
            controller,
            focused,
        }
    }

    pub(crate) fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Carries out the focus commands emitted by the controller.
    pub(crate) fn execute(&mut self, commands: Vec<Command>) {
        for command in commands {
            trace!(?command, "executing view command");
            match command {
                Command::Focus(index) => self.focused = Some(index),
                Command::Blur => self.focused = None,
                // Delivered to the completion callback by the controller.
                Command::Complete(_) => {}
            }
        }
    }

    /// The slot key events are addressed to.
    ///
    /// With focus released, typing continues from the last slot.
    fn cursor(&self) -> usize {
        self.focused
            .unwrap_or_else(|| self.controller.len().saturating_sub(1))
    }

    fn move_focus(&mut self, index: usize) -> bool {
        if index >= self.controller.len() {
            return false;
        }

        self.focused = Some(index);
        let commands = self.controller.focus(index);
        self.execute(commands);
        true
    }

    fn focus_next(&mut self) -> bool {
        match self.focused {
            Some(index) => self.move_focus(index + 1),
            None => self.move_focus(0),
        }
    }

    fn focus_previous(&mut self) -> bool {
        match self.focused {
            Some(index) => index.checked_sub(1).is_some_and(|i| self.move_focus(i)),
            None => self.move_focus(self.controller.len().saturating_sub(1)),
        }
    }
}
