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

//! Passcode controller configuration.
//!
//! [`PasscodeConfig`] is plain serde data so that applications can keep it in
//! their own configuration file and hand it to
//! [`PasscodeBuilder::config`](crate::controller::PasscodeBuilder::config).

use serde::{Deserialize, Serialize};

use crate::{
    charset::{Charset, CharsetValidator},
    controller::{PastePolicy, Reducer},
    error::PasscodeError,
};

pub const CONFIG_VERSION: u32 = 1;

pub const DEFAULT_LENGTH: usize = 6;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PasscodeConfig {
    pub version: u32,
    pub length: usize,
    pub charset: Charset,
    pub uppercase: bool,
    pub paste_policy: PastePolicy,
    pub blur_on_complete: bool,
}

impl Default for PasscodeConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            length: DEFAULT_LENGTH,
            charset: Charset::default(),
            uppercase: false,
            paste_policy: PastePolicy::default(),
            blur_on_complete: false,
        }
    }
}

impl PasscodeConfig {
    /// Checks the configuration before a controller is built from it.
    ///
    /// # Errors
    ///
    /// Returns [`PasscodeError::InvalidLength`] for a zero length and
    /// [`PasscodeError::UnsupportedVersion`] for a version newer than
    /// [`CONFIG_VERSION`].
    pub fn validate(&self) -> Result<(), PasscodeError> {
        if self.version > CONFIG_VERSION {
            return Err(PasscodeError::UnsupportedVersion {
                found: self.version,
                supported: CONFIG_VERSION,
            });
        }

        if self.length == 0 {
            return Err(PasscodeError::InvalidLength(self.length));
        }

        Ok(())
    }

    pub fn validator(&self) -> CharsetValidator {
        CharsetValidator::new(self.charset).with_uppercase(self.uppercase)
    }

    pub fn reducer(&self) -> Reducer {
        Reducer {
            paste_policy: self.paste_policy,
            blur_on_complete: self.blur_on_complete,
        }
    }
}
