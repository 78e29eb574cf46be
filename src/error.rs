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

//! Error types for controller construction.
//!
//! Runtime input never fails: rejected characters and out-of-range indices
//! are silently ignored. Only configuration can be invalid.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PasscodeError {
    /// A passcode needs at least one slot.
    #[error("passcode length must be at least 1, got {0}")]
    InvalidLength(usize),

    /// The configuration was written by a newer version of this crate.
    #[error("unsupported configuration version {found}, expected at most {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}
