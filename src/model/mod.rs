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

//! Passcode data model.
//!
//! This module defines the fixed-length [`SlotSequence`] that stores the
//! characters entered so far, and the coarse [`Phase`] the sequence is in.

mod slots;

pub use slots::SlotSequence;

/// Fill level of a slot sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No slot holds a character.
    Empty,
    /// Some, but not all, slots hold a character.
    Partial,
    /// Every slot holds a character.
    Complete,
}
