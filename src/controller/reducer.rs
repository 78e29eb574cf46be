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

//! The passcode state machine.
//!
//! [`Reducer::reduce`] is a pure function from a [`PasscodeState`] and a
//! [`PasscodeEvent`] to the next state plus the [`Command`]s the outside world
//! must carry out. Each event is applied completely (validate, mutate,
//! refocus, completion check) before the transition is returned, so feeding
//! events one at a time in arrival order keeps slots and focus in step with
//! what was typed.

use tracing::trace;

use crate::{
    charset::CharsetValidator,
    controller::{
        completion::{completion_edge, is_complete},
        focus::{self, Focus},
        paste::{self, PastePolicy},
    },
    error::PasscodeError,
    model::{Phase, SlotSequence},
};

/// Slots plus the active slot. Created together, reset together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasscodeState {
    pub(crate) slots: SlotSequence,
    pub(crate) focus: Focus,
}

impl PasscodeState {
    /// Creates `len` empty slots with focus on the first.
    ///
    /// # Errors
    ///
    /// Returns [`PasscodeError::InvalidLength`] if `len` is zero, since there
    /// would be no slot to focus.
    pub fn new(len: usize, validator: CharsetValidator) -> Result<Self, PasscodeError> {
        if len == 0 {
            return Err(PasscodeError::InvalidLength(len));
        }

        Ok(Self {
            slots: SlotSequence::new(len, validator),
            focus: Focus::default(),
        })
    }

    pub fn slots(&self) -> &SlotSequence {
        &self.slots
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn value(&self) -> String {
        self.slots.value()
    }

    pub fn is_complete(&self) -> bool {
        is_complete(&self.slots)
    }

    pub fn phase(&self) -> Phase {
        self.slots.phase()
    }
}

/// Input arriving from the view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasscodeEvent {
    /// Text typed or autofilled into the slot at `index`.
    Input { index: usize, text: String },
    /// Delete key pressed while the slot at `index` had focus.
    Backspace { index: usize },
    /// Clipboard payload pasted into any slot.
    Paste { text: String },
    /// The view moved focus to `index`, e.g. the user clicked a slot.
    Focus { index: usize },
    /// The view dropped focus from every slot. Ignored until the sequence is
    /// complete.
    Blur,
    Reset,
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Give keyboard focus to the slot at this index.
    Focus(usize),
    /// Remove keyboard focus from every slot.
    Blur,
    /// The sequence just became complete with this value.
    Complete(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: PasscodeState,
    pub commands: Vec<Command>,
}

/// Event policy knobs that do not live in the state itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reducer {
    pub paste_policy: PastePolicy,
    /// Release focus when the sequence becomes complete.
    pub blur_on_complete: bool,
}

impl Reducer {
    pub fn reduce(&self, state: &PasscodeState, event: &PasscodeEvent) -> Transition {
        let was_complete = state.is_complete();
        let mut next = state.clone();

        match event {
            PasscodeEvent::Input { index, text } => {
                if !next.slots.set_slot_text(*index, text) {
                    trace!(index, "rejected slot input");
                    return Transition::unchanged(next);
                }
                next.focus = focus::after_input(*index, next.slots.len());
            }

            PasscodeEvent::Backspace { index } => {
                let Some(target) = focus::backspace_target(&next.slots, *index) else {
                    return Transition::unchanged(next);
                };
                next.slots.clear_slot(target);
                next.focus = Focus::Slot(target);
            }

            PasscodeEvent::Paste { text } => match self.paste_policy {
                PastePolicy::FocusFirst => next.focus = Focus::Slot(0),
                PastePolicy::Distribute => {
                    let Some(filled) = paste::distribute(&mut next.slots, text) else {
                        trace!("rejected paste payload");
                        return Transition::unchanged(next);
                    };
                    next.focus = focus::after_fill(filled, next.slots.len());
                }
            },

            PasscodeEvent::Focus { index } => {
                if let Some(requested) = focus::requested(*index, next.slots.len()) {
                    next.focus = requested;
                }
            }

            // Focus may only be released once every slot is filled.
            PasscodeEvent::Blur => {
                if was_complete {
                    next.focus = Focus::Released;
                }
            }

            PasscodeEvent::Reset => {
                next.slots.reset();
                next.focus = Focus::default();
            }
        }

        let mut commands = Vec::new();

        let completed = completion_edge(was_complete, &next.slots);
        if completed.is_some() && self.blur_on_complete {
            next.focus = Focus::Released;
        }

        // Focus and blur events originate in the view, which has already moved.
        let view_driven = matches!(event, PasscodeEvent::Focus { .. } | PasscodeEvent::Blur);
        if next.focus != state.focus && !view_driven {
            commands.push(match next.focus {
                Focus::Slot(index) => Command::Focus(index),
                Focus::Released => Command::Blur,
            });
        }

        if let Some(value) = completed {
            commands.push(Command::Complete(value));
        }

        Transition {
            state: next,
            commands,
        }
    }
}

impl Transition {
    fn unchanged(state: PasscodeState) -> Self {
        Self {
            state,
            commands: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(len: usize) -> PasscodeState {
        PasscodeState::new(len, CharsetValidator::default()).unwrap()
    }

    fn input(index: usize, text: &str) -> PasscodeEvent {
        PasscodeEvent::Input {
            index,
            text: text.to_string(),
        }
    }

    fn run(reducer: &Reducer, mut state: PasscodeState, events: &[PasscodeEvent]) -> (PasscodeState, Vec<Command>) {
        let mut commands = Vec::new();
        for event in events {
            let t = reducer.reduce(&state, event);
            state = t.state;
            commands.extend(t.commands);
        }
        (state, commands)
    }

    #[test]
    fn zero_length_state_is_rejected() {
        assert_eq!(
            PasscodeState::new(0, CharsetValidator::default()),
            Err(PasscodeError::InvalidLength(0))
        );
    }

    #[test]
    fn accepted_input_advances_focus() {
        let t = Reducer::default().reduce(&state(3), &input(0, "5"));
        assert_eq!(t.state.value(), "5");
        assert_eq!(t.state.focus(), Focus::Slot(1));
        assert_eq!(t.commands, vec![Command::Focus(1)]);
    }

    #[test]
    fn rejected_input_is_a_noop() {
        let s = state(3);
        let t = Reducer::default().reduce(&s, &input(0, "a"));
        assert_eq!(t.state, s);
        assert!(t.commands.is_empty());

        let t = Reducer::default().reduce(&s, &input(3, "1"));
        assert_eq!(t.state, s);
    }

    #[test]
    fn last_slot_input_completes_without_refocus() {
        let (s, commands) = run(
            &Reducer::default(),
            state(2),
            &[input(0, "1"), input(1, "2")],
        );
        assert_eq!(s.focus(), Focus::Slot(1));
        assert_eq!(commands, vec![Command::Focus(1), Command::Complete("12".to_string())]);
    }

    #[test]
    fn overwrite_while_complete_does_not_refire() {
        let (s, _) = run(&Reducer::default(), state(2), &[input(0, "1"), input(1, "2")]);
        let t = Reducer::default().reduce(&s, &input(0, "7"));
        assert_eq!(t.state.value(), "72");
        assert!(t.commands.is_empty());
    }

    #[test]
    fn backspace_cascade() {
        let (s, _) = run(&Reducer::default(), state(6), &[input(0, "1"), input(1, "2"), input(2, "3")]);
        // Focus sits on the empty slot 3; move it there explicitly anyway.
        let s = Reducer::default().reduce(&s, &PasscodeEvent::Focus { index: 3 }).state;

        let t = Reducer::default().reduce(&s, &PasscodeEvent::Backspace { index: 3 });
        assert_eq!(t.state.value(), "12");
        assert_eq!(t.state.focus(), Focus::Slot(2));
        assert_eq!(t.commands, vec![Command::Focus(2)]);
    }

    #[test]
    fn backspace_on_filled_slot_keeps_focus() {
        let (s, _) = run(&Reducer::default(), state(3), &[input(0, "1"), input(1, "2")]);
        let s = Reducer::default().reduce(&s, &PasscodeEvent::Focus { index: 1 }).state;
        let t = Reducer::default().reduce(&s, &PasscodeEvent::Backspace { index: 1 });
        assert_eq!(t.state.value(), "1");
        assert_eq!(t.state.focus(), Focus::Slot(1));
        assert!(t.commands.is_empty());
    }

    #[test]
    fn paste_focus_first_only_moves_focus() {
        let (s, _) = run(&Reducer::default(), state(4), &[input(0, "1"), input(1, "2")]);
        let t = Reducer::default().reduce(&s, &PasscodeEvent::Paste { text: "9999".to_string() });
        assert_eq!(t.state.value(), "12");
        assert_eq!(t.state.focus(), Focus::Slot(0));
        assert_eq!(t.commands, vec![Command::Focus(0)]);
    }

    #[test]
    fn paste_distribute_fills_and_completes() {
        let reducer = Reducer {
            paste_policy: PastePolicy::Distribute,
            ..Reducer::default()
        };
        let t = reducer.reduce(&state(4), &PasscodeEvent::Paste { text: "12 34".to_string() });
        assert_eq!(t.state.value(), "1234");
        assert_eq!(t.state.focus(), Focus::Slot(3));
        assert_eq!(t.commands, vec![Command::Focus(3), Command::Complete("1234".to_string())]);
    }

    #[test]
    fn blur_on_complete_releases_focus() {
        let reducer = Reducer {
            blur_on_complete: true,
            ..Reducer::default()
        };
        let (s, commands) = run(&reducer, state(2), &[input(0, "1"), input(1, "2")]);
        assert_eq!(s.focus(), Focus::Released);
        assert_eq!(
            commands,
            vec![Command::Focus(1), Command::Blur, Command::Complete("12".to_string())]
        );

        // Typing again re-acquires focus, advancing past the typed slot.
        let t = reducer.reduce(&s, &input(0, "3"));
        assert_eq!(t.state.focus(), Focus::Slot(1));
    }

    #[test]
    fn view_driven_focus_emits_no_commands() {
        let t = Reducer::default().reduce(&state(3), &PasscodeEvent::Focus { index: 2 });
        assert_eq!(t.state.focus(), Focus::Slot(2));
        assert!(t.commands.is_empty());

        let t = Reducer::default().reduce(&t.state, &PasscodeEvent::Focus { index: 3 });
        assert_eq!(t.state.focus(), Focus::Slot(2));

        let t = Reducer::default().reduce(&t.state, &PasscodeEvent::Blur);
        assert_eq!(t.state.focus(), Focus::Slot(2));
        assert!(t.commands.is_empty());
    }

    #[test]
    fn blur_releases_focus_only_when_complete() {
        let (s, _) = run(&Reducer::default(), state(2), &[input(0, "1"), input(1, "2")]);
        let t = Reducer::default().reduce(&s, &PasscodeEvent::Blur);
        assert_eq!(t.state.focus(), Focus::Released);
        assert!(t.commands.is_empty());
    }

    #[test]
    fn reset_restores_initial_state() {
        let (s, _) = run(&Reducer::default(), state(3), &[input(0, "1"), input(1, "2"), input(2, "3")]);
        let t = Reducer::default().reduce(&s, &PasscodeEvent::Reset);
        assert_eq!(t.state, state(3));
        assert_eq!(t.commands, vec![Command::Focus(0)]);
    }
}
