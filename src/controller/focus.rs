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

//! Focus movement policy.
//!
//! These functions compute where focus goes after an event. They never touch
//! the view; the reducer turns a change of focus into a
//! [`Command`](crate::controller::Command) for the view adapter to execute.

use crate::model::SlotSequence;

/// The slot currently eligible to receive keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Slot(usize),
    /// No slot holds focus, e.g. after the sequence completed and the view
    /// dismissed its keyboard.
    Released,
}

impl Focus {
    pub fn index(self) -> Option<usize> {
        match self {
            Focus::Slot(index) => Some(index),
            Focus::Released => None,
        }
    }

    pub fn is_slot(self, index: usize) -> bool {
        self == Focus::Slot(index)
    }
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Slot(0)
    }
}

/// Focus after a character was accepted at `index`.
///
/// Advances to the next slot, or stays on the last one.
pub(crate) fn after_input(index: usize, len: usize) -> Focus {
    if index + 1 < len {
        Focus::Slot(index + 1)
    } else {
        Focus::Slot(index)
    }
}

/// The slot a backspace at `index` clears, which is also where focus lands.
///
/// A filled slot clears itself. An empty slot clears its predecessor and
/// retreats onto it, so repeated backspaces walk left deleting as they go.
/// An empty first slot, or an out-of-range index, yields `None`.
pub(crate) fn backspace_target(slots: &SlotSequence, index: usize) -> Option<usize> {
    if index >= slots.len() {
        return None;
    }

    if slots.is_filled(index) {
        Some(index)
    } else if index > 0 {
        Some(index - 1)
    } else {
        None
    }
}

/// Focus after a bulk fill of `filled` slots starting at slot 0.
pub(crate) fn after_fill(filled: usize, len: usize) -> Focus {
    Focus::Slot(filled.min(len.saturating_sub(1)))
}

/// Focus requested by the view for `index`, if it names a real slot.
pub(crate) fn requested(index: usize, len: usize) -> Option<Focus> {
    (index < len).then_some(Focus::Slot(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::CharsetValidator;

    fn seq(values: &[Option<char>]) -> SlotSequence {
        let mut seq = SlotSequence::new(values.len(), CharsetValidator::default());
        for (i, v) in values.iter().enumerate() {
            if let Some(c) = v {
                seq.set_slot(i, *c);
            }
        }
        seq
    }

    #[test]
    fn input_advances_until_last_slot() {
        assert_eq!(after_input(0, 6), Focus::Slot(1));
        assert_eq!(after_input(4, 6), Focus::Slot(5));
        assert_eq!(after_input(5, 6), Focus::Slot(5));
        assert_eq!(after_input(0, 1), Focus::Slot(0));
    }

    #[test]
    fn backspace_on_filled_slot_clears_it() {
        let slots = seq(&[Some('1'), Some('2'), None]);
        assert_eq!(backspace_target(&slots, 1), Some(1));
    }

    #[test]
    fn backspace_on_empty_slot_retreats() {
        let slots = seq(&[Some('1'), Some('2'), None]);
        assert_eq!(backspace_target(&slots, 2), Some(1));

        // The previous slot is targeted even when it is empty too.
        let slots = seq(&[Some('1'), None, None]);
        assert_eq!(backspace_target(&slots, 2), Some(1));
    }

    #[test]
    fn backspace_on_empty_first_slot_is_noop() {
        let slots = seq(&[None, None]);
        assert_eq!(backspace_target(&slots, 0), None);
        assert_eq!(backspace_target(&slots, 9), None);
    }

    #[test]
    fn fill_focus_clamps_to_last_slot() {
        assert_eq!(after_fill(2, 6), Focus::Slot(2));
        assert_eq!(after_fill(6, 6), Focus::Slot(5));
        assert_eq!(after_fill(9, 6), Focus::Slot(5));
    }

    #[test]
    fn requested_focus_must_be_in_range() {
        assert_eq!(requested(3, 4), Some(Focus::Slot(3)));
        assert_eq!(requested(4, 4), None);
    }
}
