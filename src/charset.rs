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

//! Character acceptance policy for passcode slots.
//!
//! A [`Charset`] decides whether a candidate character may occupy a slot, and a
//! [`CharsetValidator`] pairs it with normalization. Input destined for a
//! single slot is first reduced to one character with [`last_char`], so an
//! autofill that dumps several characters into one field overwrites the slot
//! with the final character instead of being rejected outright.

use serde::{Deserialize, Serialize};

/// The set of characters a slot may hold.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Charset {
    /// ASCII digits `0-9`.
    #[default]
    Numeric,
    /// ASCII letters and digits.
    Alphanumeric,
    /// ASCII hexadecimal digits, either case.
    Hex,
}

impl Charset {
    pub fn accepts(self, c: char) -> bool {
        match self {
            Charset::Numeric => c.is_ascii_digit(),
            Charset::Alphanumeric => c.is_ascii_alphanumeric(),
            Charset::Hex => c.is_ascii_hexdigit(),
        }
    }
}

/// Gate applied to every character before it reaches a slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharsetValidator {
    pub charset: Charset,
    /// Store letters upper-cased. Has no effect on [`Charset::Numeric`].
    pub uppercase: bool,
}

impl CharsetValidator {
    pub fn new(charset: Charset) -> Self {
        Self {
            charset,
            uppercase: false,
        }
    }

    pub fn with_uppercase(mut self, uppercase: bool) -> Self {
        self.uppercase = uppercase;
        self
    }

    pub fn accepts(&self, c: char) -> bool {
        self.charset.accepts(c)
    }

    /// Returns the character to store for `c`, or `None` if it is rejected.
    pub fn normalize(&self, c: char) -> Option<char> {
        if !self.accepts(c) {
            return None;
        }

        if self.uppercase {
            Some(c.to_ascii_uppercase())
        } else {
            Some(c)
        }
    }

    /// Reduces raw slot input to the single character that should be stored.
    ///
    /// Multi-character input keeps only its last character, which is then
    /// validated. Empty input and rejected characters yield `None`.
    pub fn sanitize(&self, input: &str) -> Option<char> {
        last_char(input).and_then(|c| self.normalize(c))
    }
}

impl From<Charset> for CharsetValidator {
    fn from(charset: Charset) -> Self {
        Self::new(charset)
    }
}

/// The final character of `input`, if any.
pub fn last_char(input: &str) -> Option<char> {
    input.chars().next_back()
}
