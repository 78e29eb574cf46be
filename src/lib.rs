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

//! # Segmented passcode input.
//!
//! The state machine behind a one-time-code entry widget: a fixed number of
//! single-character slots, focus that advances as characters are typed,
//! backspace that cascades into the previous slot, paste handling and a
//! completion callback that fires once each time the last empty slot fills.
//!
//! The crate knows nothing about rendering. A view adapter forwards its key
//! and paste events as [`PasscodeEvent`]s, executes the focus [`Command`]s it
//! gets back, and draws each slot from [`SlotView`] snapshots.
//!
//! ```
//! use codeslots::PasscodeController;
//!
//! let mut controller = PasscodeController::builder()
//!     .length(4)
//!     .on_complete(|code| println!("entered {code}"))
//!     .build()
//!     .unwrap();
//!
//! for (index, digit) in ["1", "2", "3", "4"].into_iter().enumerate() {
//!     controller.input(index, digit);
//! }
//!
//! assert_eq!(controller.value(), "1234");
//! assert!(controller.is_complete());
//! ```

pub mod charset;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;

pub use charset::{Charset, CharsetValidator};
pub use config::PasscodeConfig;
pub use controller::{
    Command, Focus, PasscodeBuilder, PasscodeController, PasscodeEvent, PasscodeState, PastePolicy,
    Reducer, SlotView, Transition,
};
pub use error::PasscodeError;
pub use model::{Phase, SlotSequence};
