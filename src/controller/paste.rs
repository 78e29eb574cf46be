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

//! Paste and bulk-fill handling.
//!
//! The default [`PastePolicy::FocusFirst`] only moves focus to the first slot
//! and lets the per-slot character events that follow populate the sequence.
//! [`PastePolicy::Distribute`] spreads a whole clipboard payload across the
//! slots in one step.

use serde::{Deserialize, Serialize};

use crate::model::SlotSequence;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PastePolicy {
    /// Focus slot 0 and wait for per-slot input.
    #[default]
    FocusFirst,
    /// Fill consecutive slots from slot 0 with the pasted characters.
    Distribute,
}

/// Characters dropped from a pasted payload before validation, so codes
/// copied as `123 456` or `123-456` still paste cleanly.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '-'
}

/// Writes `text` into `slots` starting at slot 0.
///
/// Slots past the pasted run are cleared and characters beyond the sequence
/// length are dropped. Returns the number of slots filled, or `None` with
/// `slots` untouched when the payload is empty or holds a character the
/// charset rejects.
pub(crate) fn distribute(slots: &mut SlotSequence, text: &str) -> Option<usize> {
    let validator = *slots.validator();
    let chars: Vec<char> = text.chars().filter(|c| !is_separator(*c)).collect();

    if chars.is_empty() || !chars.iter().all(|c| validator.accepts(*c)) {
        return None;
    }

    let filled = chars.len().min(slots.len());
    for index in 0..slots.len() {
        match chars.get(index) {
            Some(c) => {
                slots.set_slot(index, *c);
            }
            None => {
                slots.clear_slot(index);
            }
        }
    }

    Some(filled)
}
