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

//! Fixed-length slot storage.
//!
//! A [`SlotSequence`] is created with a length that never changes afterwards.
//! Every write goes through the sequence's [`CharsetValidator`]; a rejected
//! character or an out-of-range index leaves the sequence untouched.

use crate::{charset::CharsetValidator, model::Phase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSequence {
    slots: Box<[Option<char>]>,
    validator: CharsetValidator,
}

impl SlotSequence {
    /// Creates `len` empty slots gated by `validator`.
    ///
    /// Length validation happens in the controller builder; a zero length is
    /// representable here but never complete.
    pub fn new(len: usize, validator: CharsetValidator) -> Self {
        Self {
            slots: vec![None; len].into_boxed_slice(),
            validator,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no slot holds a character.
    pub fn is_blank(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn validator(&self) -> &CharsetValidator {
        &self.validator
    }

    pub fn get(&self, index: usize) -> Option<char> {
        self.slots.get(index).copied().flatten()
    }

    pub fn is_filled(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<char>> + '_ {
        self.slots.iter().copied()
    }

    /// Stores `c` at `index`, overwriting any previous value.
    ///
    /// Returns `false`, with no change made, if the index is out of range or
    /// the character is rejected.
    pub fn set_slot(&mut self, index: usize, c: char) -> bool {
        let Some(c) = self.validator.normalize(c) else {
            return false;
        };

        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = Some(c);
                true
            }
            None => false,
        }
    }

    /// Stores the last character of `text` at `index`.
    pub fn set_slot_text(&mut self, index: usize, text: &str) -> bool {
        match crate::charset::last_char(text) {
            Some(c) => self.set_slot(index, c),
            None => false,
        }
    }

    /// Empties the slot at `index`. Returns whether it held a character.
    pub fn clear_slot(&mut self, index: usize) -> bool {
        self.slots
            .get_mut(index)
            .and_then(Option::take)
            .is_some()
    }

    /// Concatenation of all filled slots in order.
    ///
    /// Empty slots contribute nothing, so a partial sequence yields a shorter
    /// string; check [`is_complete`](Self::is_complete) before treating the
    /// result as a full code.
    pub fn value(&self) -> String {
        self.slots.iter().flatten().collect()
    }

    pub fn is_complete(&self) -> bool {
        !self.slots.is_empty() && self.slots.iter().all(Option::is_some)
    }

    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    pub fn phase(&self) -> Phase {
        match self.filled_count() {
            0 => Phase::Empty,
            n if n == self.len() => Phase::Complete,
            _ => Phase::Partial,
        }
    }

    pub fn reset(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::Charset;

    fn digits(len: usize) -> SlotSequence {
        SlotSequence::new(len, CharsetValidator::default())
    }

    #[test]
    fn new_sequence_is_blank() {
        let seq = digits(4);
        assert_eq!(seq.len(), 4);
        assert!(seq.is_blank());
        assert!(!seq.is_complete());
        assert_eq!(seq.value(), "");
        assert_eq!(seq.phase(), Phase::Empty);
    }

    #[test]
    fn set_slot_overwrites() {
        let mut seq = digits(3);
        assert!(seq.set_slot(1, '4'));
        assert!(seq.set_slot(1, '9'));
        assert_eq!(seq.get(1), Some('9'));
        assert_eq!(seq.value(), "9");
    }

    #[test]
    fn rejected_writes_leave_sequence_untouched() {
        let mut seq = digits(3);
        seq.set_slot(0, '1');
        let before = seq.clone();

        assert!(!seq.set_slot(1, 'x'));
        assert!(!seq.set_slot(3, '2'));
        assert!(!seq.set_slot_text(2, ""));
        assert!(!seq.set_slot_text(2, "5a"));
        assert_eq!(seq, before);
    }

    #[test]
    fn set_slot_text_keeps_last_character() {
        let mut seq = digits(2);
        assert!(seq.set_slot_text(0, "381"));
        assert_eq!(seq.get(0), Some('1'));
    }

    #[test]
    fn value_skips_empty_slots() {
        let mut seq = digits(4);
        seq.set_slot(0, '1');
        seq.set_slot(2, '3');
        assert_eq!(seq.value(), "13");
        assert_eq!(seq.first_empty(), Some(1));
        assert_eq!(seq.phase(), Phase::Partial);
    }

    #[test]
    fn complete_and_reset() {
        let mut seq = digits(2);
        seq.set_slot(0, '1');
        seq.set_slot(1, '2');
        assert!(seq.is_complete());
        assert_eq!(seq.phase(), Phase::Complete);
        assert_eq!(seq.first_empty(), None);

        seq.reset();
        assert!(seq.is_blank());
        assert_eq!(seq.len(), 2);
    }

    #[test]
    fn clear_slot_reports_previous_content() {
        let mut seq = digits(2);
        seq.set_slot(0, '1');
        assert!(seq.clear_slot(0));
        assert!(!seq.clear_slot(0));
        assert!(!seq.clear_slot(7));
    }

    #[test]
    fn normalization_applies_on_write() {
        let validator = CharsetValidator::new(Charset::Alphanumeric).with_uppercase(true);
        let mut seq = SlotSequence::new(1, validator);
        seq.set_slot(0, 'q');
        assert_eq!(seq.value(), "Q");
    }
}
