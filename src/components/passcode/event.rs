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

//! Input handling for the passcode view.
//!
//! This module maps raw terminal events to controller events: printable keys
//! become slot input, backspace cascades through the slots, bracketed paste
//! becomes a paste event and the arrow keys move between slots.

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::components::PasscodeView;

impl PasscodeView {
    /// Applies `event` to the passcode. Returns whether it was consumed.
    pub(crate) fn process_event(&mut self, event: &Event) -> bool {
        let cursor = self.cursor();
        let commands = match event {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                match (key_event.code, key_event.modifiers) {
                    (KeyCode::Char('u'), KeyModifiers::CONTROL) => self.controller.reset(),

                    (KeyCode::Char(c), modifiers) if !modifiers.contains(KeyModifiers::CONTROL) => {
                        self.controller.input(cursor, c.to_string())
                    }

                    (KeyCode::Backspace, _) => self.controller.backspace(cursor),

                    (KeyCode::Left, _) | (KeyCode::BackTab, _) => return self.focus_previous(),
                    (KeyCode::Right, _) | (KeyCode::Tab, _) => return self.focus_next(),
                    (KeyCode::Home, _) => return self.move_focus(0),
                    (KeyCode::End, _) => {
                        return self.move_focus(self.controller.len().saturating_sub(1));
                    }

                    _ => return false,
                }
            }

            Event::Paste(text) => self.controller.paste(text.as_str()),

            _ => return false,
        };

        self.execute(commands);
        true
    }
}

#[cfg(test)]
mod tests {
    use codeslots::{PasscodeController, PastePolicy};
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn view(length: usize) -> PasscodeView {
        PasscodeView::new(PasscodeController::new(length).unwrap())
    }

    fn type_str(view: &mut PasscodeView, text: &str) {
        for c in text.chars() {
            view.process_event(&key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn typing_follows_focus() {
        let mut view = view(4);
        type_str(&mut view, "12");
        assert_eq!(view.controller.value(), "12");
        assert_eq!(view.focused(), Some(2));
    }

    #[test]
    fn letters_are_consumed_but_ignored() {
        let mut view = view(4);
        assert!(view.process_event(&key(KeyCode::Char('x'))));
        assert_eq!(view.controller.value(), "");
        assert_eq!(view.focused(), Some(0));
    }

    #[test]
    fn backspace_cascades_through_view() {
        let mut view = view(4);
        type_str(&mut view, "123");
        view.process_event(&key(KeyCode::Backspace));
        assert_eq!(view.controller.value(), "12");
        assert_eq!(view.focused(), Some(2));
    }

    #[test]
    fn arrows_move_between_slots() {
        let mut view = view(3);
        assert!(!view.process_event(&key(KeyCode::Left)));
        assert!(view.process_event(&key(KeyCode::Right)));
        assert_eq!(view.focused(), Some(1));
        assert_eq!(view.controller.active_index(), Some(1));
        view.process_event(&key(KeyCode::End));
        assert!(!view.process_event(&key(KeyCode::Right)));
        assert_eq!(view.focused(), Some(2));
    }

    #[test]
    fn paste_distributes_when_enabled() {
        let controller = PasscodeController::builder()
            .length(4)
            .paste_policy(PastePolicy::Distribute)
            .build()
            .unwrap();
        let mut view = PasscodeView::new(controller);
        view.process_event(&Event::Paste("4321".to_string()));
        assert_eq!(view.controller.value(), "4321");
        assert_eq!(view.focused(), Some(3));
    }

    #[test]
    fn ctrl_u_resets() {
        let mut view = view(3);
        type_str(&mut view, "12");
        view.process_event(&Event::Key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)));
        assert_eq!(view.controller.value(), "");
        assert_eq!(view.focused(), Some(0));
    }
}
