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

//! Edge-triggered completion detection.

use crate::model::SlotSequence;

/// Whether every slot holds a character.
pub fn is_complete(slots: &SlotSequence) -> bool {
    slots.is_complete()
}

/// The assembled code if `slots` just became complete.
///
/// `was_complete` is the predicate as it stood before the event. Only a
/// false to true transition yields a value; staying complete (for example
/// overwriting a digit in a full sequence) does not.
pub(crate) fn completion_edge(was_complete: bool, slots: &SlotSequence) -> Option<String> {
    (!was_complete && is_complete(slots)).then(|| slots.value())
}
